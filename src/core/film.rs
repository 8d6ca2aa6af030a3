use std::path::Path;

use anyhow::Context;

use crate::core::color::Color;

/// Linear HDR pixel buffer produced by one render call.
pub struct Film {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Film {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index_of(x, y);
        self.pixels[index] = color;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index_of(x, y)]
    }

    fn index_of(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }

    /// Serialize as 32-bit float RGB OpenEXR.
    pub fn write_exr(&self, path: &Path) -> anyhow::Result<()> {
        exr::prelude::write_rgb_file(
            path,
            self.width as usize,
            self.height as usize,
            |x, y| {
                let color = self.pixel(x as u32, y as u32);
                (color.r, color.g, color.b)
            },
        )
        .context(format!("can't write image '{}'", path.display()))
    }

    #[allow(dead_code)]
    pub fn read_exr(path: &Path) -> anyhow::Result<Film> {
        let image = exr::image::read::read_first_rgba_layer_from_file(
            path,
            |resolution: exr::math::Vec2<usize>, _| {
                Film::new(resolution.width() as u32, resolution.height() as u32)
            },
            |film: &mut Film, pos: exr::math::Vec2<usize>, (r, g, b, _): (f32, f32, f32, f32)| {
                film.set(pos.width() as u32, pos.height() as u32, Color::new(r, g, b))
            },
        )
        .context(format!("can't read image '{}'", path.display()))?;
        Ok(image.layer_data.channel_data.pixels)
    }
}
