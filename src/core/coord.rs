/// Orthonormal frame whose local +Z is a given world-space direction.
#[derive(Copy, Clone)]
pub struct Coordinate {
    local_to_world: glam::Mat3A,
}

impl Coordinate {
    pub fn from_z(z_world: glam::Vec3A) -> Self {
        let sign = if z_world.z >= 0.0 { 1.0 } else { -1.0 };
        let a = -1.0 / (sign + z_world.z);
        let b = z_world.x * z_world.y * a;
        let x_world = glam::Vec3A::new(
            1.0 + sign * z_world.x * z_world.x * a,
            sign * b,
            -sign * z_world.x,
        );
        let y_world = glam::Vec3A::new(b, sign + z_world.y * z_world.y * a, -z_world.y);

        Self {
            local_to_world: glam::Mat3A::from_cols(x_world, y_world, z_world),
        }
    }

    pub fn to_world(&self, local: glam::Vec3A) -> glam::Vec3A {
        self.local_to_world * local
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn local_z_maps_to_input_axis() {
        let n = glam::Vec3A::new(1.0, 2.0, -3.0).normalize();
        let coord = Coordinate::from_z(n);
        assert!(coord.to_world(glam::Vec3A::Z).distance(n) < 1e-5);

        let x = coord.to_world(glam::Vec3A::X);
        let y = coord.to_world(glam::Vec3A::Y);
        assert!(x.dot(n).abs() < 1e-5);
        assert!(y.dot(n).abs() < 1e-5);
        assert!(x.dot(y).abs() < 1e-5);
    }
}
