use crate::core::ray::Ray;

use super::{Material, RayHit, SurfaceT};

#[derive(Clone)]
pub struct Plane {
    origin: glam::Vec3A,
    normal: glam::Vec3A,
    pub material: Material,
}

impl Plane {
    #[allow(dead_code)]
    pub fn new(origin: glam::Vec3A, normal: glam::Vec3A) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
            material: Material::default(),
        }
    }
}

impl SurfaceT for Plane {
    fn hit(&self, ray: &Ray) -> Option<RayHit> {
        let denom = ray.direction.dot(self.normal);
        if denom.abs() < 1e-6 {
            return None;
        }

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if t <= ray.t_min {
            return None;
        }

        // Face the hit side of the plane.
        let normal = if denom < 0.0 { self.normal } else { -self.normal };
        Some(RayHit { t, normal })
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
