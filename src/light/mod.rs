mod directional;
mod environment;
mod point;

pub use directional::*;
pub use environment::*;
pub use point::*;

use crate::core::color::Color;

#[enum_dispatch::enum_dispatch(Light)]
pub trait LightT: Send + Sync {
    /// return (direction towards the light, distance, intensity) at `position`
    fn sample(&self, position: glam::Vec3A) -> (glam::Vec3A, f32, f32);

    fn color(&self) -> Color;
}

#[enum_dispatch::enum_dispatch]
#[derive(Clone)]
pub enum Light {
    DirLight,
    PointLight,
}
