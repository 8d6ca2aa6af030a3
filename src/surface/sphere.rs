use crate::core::ray::Ray;

use super::{Material, RayHit, SurfaceT};

#[derive(Clone)]
pub struct Sphere {
    center: glam::Vec3A,
    radius: f32,
    pub material: Material,
}

impl Sphere {
    pub fn new(center: glam::Vec3A, radius: f32) -> Self {
        Self {
            center,
            radius,
            material: Material::default(),
        }
    }
}

impl SurfaceT for Sphere {
    fn hit(&self, ray: &Ray) -> Option<RayHit> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let delta = b * b - a * c;
        if delta < 0.0 {
            return None;
        }

        let delta = delta.sqrt();
        let t_min = (-b - delta) / a;
        let t_max = (-b + delta) / a;
        let t = if t_min > ray.t_min { t_min } else { t_max };
        if t <= ray.t_min {
            return None;
        }

        let normal = (ray.point_at(t) - self.center) / self.radius;
        Some(RayHit { t, normal })
    }

    fn material(&self) -> &Material {
        &self.material
    }
}
