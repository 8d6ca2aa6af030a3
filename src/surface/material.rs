use crate::core::color::Color;

/// Phong reflection parameters. `roughness` is the inverse of shininess.
#[derive(Clone, Copy)]
pub struct Material {
    pub base_color: Color,
    pub k_ambient: f32,
    pub k_diffuse: f32,
    pub k_specular: f32,
    pub roughness: f32,
}

impl Material {
    pub fn set_solid_color(&mut self, color: Color) {
        self.base_color = color;
    }
}

impl Default for Material {
    fn default() -> Self {
        Self {
            base_color: Color::new(0.3, 0.3, 0.3),
            k_ambient: 0.1,
            k_diffuse: 0.18,
            k_specular: 0.1,
            roughness: 0.5,
        }
    }
}
