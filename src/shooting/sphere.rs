use crate::{
    camera::{Camera, PinholeCamera},
    core::color::Color,
    light::{DirLight, EnvLight, Light},
    renderer::RenderParams,
    surface::{Sphere, Surface},
};

use super::{AxisIter, ShootingT};

/// A simple shooting of a red sphere with varying roughness.
///
/// Every axis supports mode 0; the render-parameter axis additionally
/// supports mode 1 (lower resolution and quality but faster).
#[derive(Default)]
pub struct SphereShooting;

impl ShootingT for SphereShooting {
    fn cameras(&self, mode: u32) -> anyhow::Result<AxisIter<Camera>> {
        match mode {
            0 => {
                let mut camera = PinholeCamera::new(36.0, 90.0, 0.1, 100.0);
                camera.move_to(glam::Vec3A::new(0.0, 0.0, 5.0));
                Ok(Box::new(std::iter::once(camera.into())))
            }
            _ => anyhow::bail!("sphere shooting: unknown camera mode {}", mode),
        }
    }

    fn env_lights(&self, mode: u32) -> anyhow::Result<AxisIter<Option<EnvLight>>> {
        match mode {
            0 => Ok(Box::new(std::iter::once(None))),
            _ => anyhow::bail!("sphere shooting: unknown env light mode {}", mode),
        }
    }

    fn light_sets(&self, mode: u32) -> anyhow::Result<AxisIter<Vec<Light>>> {
        match mode {
            0 => {
                let key = DirLight::new(glam::Vec3A::new(1.0, 1.0, 1.0), 1.0, Color::WHITE);
                Ok(Box::new(std::iter::once(vec![key.into()])))
            }
            _ => anyhow::bail!("sphere shooting: unknown lights mode {}", mode),
        }
    }

    fn surface_sets(&self, mode: u32) -> anyhow::Result<AxisIter<Vec<Surface>>> {
        match mode {
            0 => Ok(Box::new((1..=10).map(|i| {
                let mut sphere = Sphere::new(glam::Vec3A::ZERO, 1.0);
                sphere.material.set_solid_color(Color::RED);
                sphere.material.roughness = 0.05 * i as f32;
                vec![sphere.into()]
            }))),
            _ => anyhow::bail!("sphere shooting: unknown surfaces mode {}", mode),
        }
    }

    fn render_param_sets(&self, mode: u32) -> anyhow::Result<AxisIter<RenderParams>> {
        match mode {
            0 => {
                let mut params = RenderParams::new(1280, 720);
                params.max_bounce = Some(0);
                Ok(Box::new(std::iter::once(params)))
            }
            1 => {
                // Lower resolution and quality but faster
                let mut params = RenderParams::new(640, 360);
                params.pixel_sampling = Some(4);
                params.max_bounce = Some(0);
                Ok(Box::new(std::iter::once(params)))
            }
            _ => anyhow::bail!("sphere shooting: unknown render params mode {}", mode),
        }
    }
}
