use crate::core::color::Color;

use super::LightT;

/// Sun-like light: parallel rays, no distance falloff. `direction` points
/// from the scene towards the light.
#[derive(Clone)]
pub struct DirLight {
    direction: glam::Vec3A,
    brightness: f32,
    color: Color,
}

impl DirLight {
    pub fn new(direction: glam::Vec3A, brightness: f32, color: Color) -> Self {
        Self {
            direction: direction.normalize(),
            brightness,
            color,
        }
    }
}

impl LightT for DirLight {
    fn sample(&self, _position: glam::Vec3A) -> (glam::Vec3A, f32, f32) {
        (self.direction, f32::MAX, self.brightness)
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::LightT;

    #[test]
    fn constant_over_space() {
        let light = DirLight::new(glam::Vec3A::new(2.0, 0.0, 0.0), 3.0, Color::WHITE);
        let (dir, dist, intensity) = light.sample(glam::Vec3A::new(0.0, 7.0, -1.0));
        assert!(dir.distance(glam::Vec3A::X) < 1e-6);
        assert_eq!(dist, f32::MAX);
        assert_eq!(intensity, 3.0);
    }
}
