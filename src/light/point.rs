use crate::core::color::Color;

use super::LightT;

/// Delta light with inverse-square falloff.
#[derive(Clone)]
pub struct PointLight {
    location: glam::Vec3A,
    brightness: f32,
    color: Color,
}

impl PointLight {
    #[allow(dead_code)]
    pub fn new(location: glam::Vec3A, brightness: f32, color: Color) -> Self {
        Self {
            location,
            brightness,
            color,
        }
    }
}

impl LightT for PointLight {
    fn sample(&self, position: glam::Vec3A) -> (glam::Vec3A, f32, f32) {
        let to_light = self.location - position;
        let dist_sqr = to_light.length_squared();
        let dist = dist_sqr.sqrt();
        (to_light / dist, dist, self.brightness / dist_sqr)
    }

    fn color(&self) -> Color {
        self.color
    }
}
