mod material;
mod plane;
mod sphere;

pub use material::*;
pub use plane::*;
pub use sphere::*;

use crate::core::ray::Ray;

#[derive(Debug, Copy, Clone)]
pub struct RayHit {
    pub t: f32,
    pub normal: glam::Vec3A,
}

#[enum_dispatch::enum_dispatch(Surface)]
pub trait SurfaceT: Send + Sync {
    /// Nearest intersection with `t > ray.t_min`, if any.
    fn hit(&self, ray: &Ray) -> Option<RayHit>;

    fn material(&self) -> &Material;
}

#[enum_dispatch::enum_dispatch]
#[derive(Clone)]
pub enum Surface {
    Plane,
    Sphere,
}
