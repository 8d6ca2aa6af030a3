use crate::core::color::Color;

/// Uniform colored dome surrounding the scene. Kept apart from the scene's
/// light list: a scene has at most one environment light, and rays that
/// escape the scene pick up its radiance directly.
#[derive(Clone)]
pub struct EnvLight {
    color: Color,
    brightness: f32,
}

impl EnvLight {
    pub fn new(color: Color, brightness: f32) -> Self {
        Self { color, brightness }
    }

    pub fn radiance(&self) -> Color {
        self.color * self.brightness
    }
}
