mod progress;
mod sphere;

pub use progress::*;
pub use sphere::*;

use std::path::Path;

use crate::{
    camera::Camera,
    light::{EnvLight, Light},
    renderer::{RayTracer, RenderParams},
    scene::Scene,
    surface::Surface,
};

/// One finite, ordered axis sequence. Single use: the orchestrator asks the
/// shooting for a fresh one every time a loop over the axis restarts.
pub type AxisIter<T> = Box<dyn Iterator<Item = T>>;

/// Which variant sequence each of the five axes produces.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShotModes {
    pub camera: u32,
    pub env_light: u32,
    pub lights: u32,
    pub surfaces: u32,
    pub render_params: u32,
}

/// A shooting automates the setup and rendering of a batch of shots: it
/// contributes one generator per configuration axis, and [`render`] walks
/// the Cartesian product of the five sequences, writing one numbered EXR
/// per combination.
///
/// A mode value a generator does not know is a configuration error, never a
/// silent empty sequence. Yielded elements must be self-contained: they are
/// cloned into a fresh [`Scene`] per shot.
///
/// [`render`]: ShootingT::render
#[enum_dispatch::enum_dispatch(Shooting)]
pub trait ShootingT {
    fn cameras(&self, mode: u32) -> anyhow::Result<AxisIter<Camera>>;

    fn env_lights(&self, mode: u32) -> anyhow::Result<AxisIter<Option<EnvLight>>>;

    fn light_sets(&self, mode: u32) -> anyhow::Result<AxisIter<Vec<Light>>>;

    fn surface_sets(&self, mode: u32) -> anyhow::Result<AxisIter<Vec<Surface>>>;

    fn render_param_sets(&self, mode: u32) -> anyhow::Result<AxisIter<RenderParams>>;

    /// Render every combination of the five axis sequences into
    /// `{base_path}/{n:04}.exr`, numbering shots from 0 with no gaps.
    ///
    /// The camera axis is outermost and the render-parameter axis innermost,
    /// so all quality variants of one scene setup land on consecutive shot
    /// numbers. Inner sequences are re-derived from the generators once per
    /// enclosing-axis value. Any error aborts the whole batch immediately.
    fn render(&self, base_path: &Path, modes: ShotModes) -> anyhow::Result<()> {
        let mut printer = PercentPrinter::stdout();
        let mut n_shot = 0u32;

        for camera in self.cameras(modes.camera)? {
            for env_light in self.env_lights(modes.env_light)? {
                for lights in self.light_sets(modes.lights)? {
                    for surfaces in self.surface_sets(modes.surfaces)? {
                        for render_params in self.render_param_sets(modes.render_params)? {
                            println!("Shot {}", n_shot);

                            let mut scene = Scene::default();
                            scene.set_camera(camera.clone());
                            if let Some(env_light) = &env_light {
                                scene.set_env_light(env_light.clone());
                            }
                            for light in &lights {
                                scene.add_light(light.clone());
                            }
                            for surface in &surfaces {
                                scene.add_surface(surface.clone());
                            }

                            let tracer = configure_tracer(&render_params);
                            let film = tracer.render(&scene, |p| printer.report(p))?;

                            let filepath = base_path.join(format!("{:04}.exr", n_shot));
                            film.write_exr(&filepath)?;

                            n_shot += 1;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

#[enum_dispatch::enum_dispatch]
pub enum Shooting {
    SphereShooting,
}

/// Size the tracer and overwrite exactly the quality fields the shot's
/// parameter set carries; absent fields keep the engine defaults.
fn configure_tracer(params: &RenderParams) -> RayTracer {
    let mut tracer = RayTracer::new(params.width, params.height);
    if let Some(pixel_sampling) = params.pixel_sampling {
        tracer.pixel_sampling = pixel_sampling;
    }
    if let Some(max_bounce) = params.max_bounce {
        tracer.max_bounce = max_bounce;
    }
    if let Some(rays_per_bounce) = params.rays_per_bounce {
        tracer.rays_per_bounce = rays_per_bounce;
    }
    if let Some(env_sampling) = params.env_sampling {
        tracer.env_sampling = env_sampling;
    }
    tracer
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::camera::PinholeCamera;
    use crate::core::color::Color;
    use crate::core::film::Film;
    use crate::light::DirLight;
    use crate::surface::Sphere;

    /// Two surface variants times two resolutions, everything else single.
    /// Surface mode 1 is a legal empty axis; all other non-zero modes are
    /// configuration errors.
    struct GridShooting;

    impl ShootingT for GridShooting {
        fn cameras(&self, mode: u32) -> anyhow::Result<AxisIter<Camera>> {
            match mode {
                0 => {
                    let mut camera = PinholeCamera::new(36.0, 90.0, 0.1, 100.0);
                    camera.move_to(glam::Vec3A::new(0.0, 0.0, 5.0));
                    Ok(Box::new(std::iter::once(camera.into())))
                }
                _ => anyhow::bail!("grid shooting: unknown camera mode {}", mode),
            }
        }

        fn env_lights(&self, mode: u32) -> anyhow::Result<AxisIter<Option<EnvLight>>> {
            match mode {
                0 => Ok(Box::new(std::iter::once(None))),
                _ => anyhow::bail!("grid shooting: unknown env light mode {}", mode),
            }
        }

        fn light_sets(&self, mode: u32) -> anyhow::Result<AxisIter<Vec<Light>>> {
            match mode {
                0 => {
                    let key = DirLight::new(glam::Vec3A::new(1.0, 1.0, 1.0), 1.0, Color::WHITE);
                    Ok(Box::new(std::iter::once(vec![key.into()])))
                }
                _ => anyhow::bail!("grid shooting: unknown lights mode {}", mode),
            }
        }

        fn surface_sets(&self, mode: u32) -> anyhow::Result<AxisIter<Vec<Surface>>> {
            match mode {
                0 => Ok(Box::new((0..2).map(|i| {
                    let sphere = Sphere::new(glam::Vec3A::new(i as f32, 0.0, 0.0), 1.0);
                    vec![sphere.into()]
                }))),
                1 => Ok(Box::new(std::iter::empty())),
                _ => anyhow::bail!("grid shooting: unknown surfaces mode {}", mode),
            }
        }

        fn render_param_sets(&self, mode: u32) -> anyhow::Result<AxisIter<RenderParams>> {
            match mode {
                0 => {
                    let mut fast = vec![RenderParams::new(6, 4), RenderParams::new(8, 4)];
                    for params in &mut fast {
                        params.pixel_sampling = Some(1);
                        params.max_bounce = Some(0);
                    }
                    Ok(Box::new(fast.into_iter()))
                }
                _ => anyhow::bail!("grid shooting: unknown render params mode {}", mode),
            }
        }
    }

    fn shot_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "shooting-gallery-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::remove_dir_all(&dir).ok();
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn exr_names(dir: &PathBuf) -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn numbering_covers_the_cartesian_product() {
        let dir = shot_dir("grid");
        GridShooting.render(&dir, ShotModes::default()).unwrap();

        assert_eq!(
            exr_names(&dir),
            vec!["0000.exr", "0001.exr", "0002.exr", "0003.exr"]
        );

        // Render params are the innermost axis: resolution alternates
        // between consecutive shot numbers while the surface variant holds.
        for (name, width) in &[("0000.exr", 6), ("0001.exr", 8), ("0002.exr", 6), ("0003.exr", 8)]
        {
            let film = Film::read_exr(&dir.join(name)).unwrap();
            assert_eq!(film.width(), *width);
            assert_eq!(film.height(), 4);
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn empty_axis_produces_no_shots() {
        let dir = shot_dir("empty-axis");
        let modes = ShotModes {
            surfaces: 1,
            ..Default::default()
        };
        GridShooting.render(&dir, modes).unwrap();
        assert!(exr_names(&dir).is_empty());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn unknown_mode_aborts_before_any_shot() {
        let dir = shot_dir("bad-mode");
        let modes = ShotModes {
            render_params: 7,
            ..Default::default()
        };
        assert!(GridShooting.render(&dir, modes).is_err());
        assert!(exr_names(&dir).is_empty());

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn tracer_configuration_is_exact() {
        let bare = configure_tracer(&RenderParams::new(320, 200));
        assert_eq!(bare.width(), 320);
        assert_eq!(bare.height(), 200);
        assert_eq!(bare.pixel_sampling, 16);
        assert_eq!(bare.max_bounce, 4);
        assert_eq!(bare.rays_per_bounce, 16);
        assert_eq!(bare.env_sampling, 16);

        let mut params = RenderParams::new(320, 200);
        params.max_bounce = Some(0);
        let tuned = configure_tracer(&params);
        assert_eq!(tuned.max_bounce, 0);
        assert_eq!(tuned.pixel_sampling, 16);
        assert_eq!(tuned.rays_per_bounce, 16);
        assert_eq!(tuned.env_sampling, 16);
    }
}
