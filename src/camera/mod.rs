mod pinhole;

pub use pinhole::*;

use crate::core::ray::Ray;

#[enum_dispatch::enum_dispatch(Camera)]
pub trait CameraT: Send + Sync {
    /// Generate a primary ray through the sensor point `(x, y)`, both in
    /// `[-0.5, 0.5]`, with `aspect` = image height / image width.
    fn generate_ray(&self, point: (f32, f32), aspect: f32) -> Ray;

    /// Visible depth range `(z_near, z_far)` along primary rays.
    fn depth_range(&self) -> (f32, f32);
}

#[enum_dispatch::enum_dispatch]
#[derive(Clone)]
pub enum Camera {
    PinholeCamera,
}
