use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::Context;

use crate::{
    camera::{Camera, CameraT},
    core::{color::Color, coord::Coordinate, film::Film, ray::Ray, rng::Rng},
    light::LightT,
    scene::Scene,
    surface::{Material, SurfaceT},
};

/// Output size plus the optional quality overrides of one shot. Fields left
/// `None` keep the ray tracer's own defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderParams {
    pub width: u32,
    pub height: u32,
    pub pixel_sampling: Option<u32>,
    pub max_bounce: Option<u32>,
    pub rays_per_bounce: Option<u32>,
    pub env_sampling: Option<u32>,
}

impl RenderParams {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_sampling: None,
            max_bounce: None,
            rays_per_bounce: None,
            env_sampling: None,
        }
    }
}

/// Whitted-style ray tracer with stochastic pixel sampling, hemisphere
/// environment sampling and split indirect bounces.
pub struct RayTracer {
    width: u32,
    height: u32,
    pub pixel_sampling: u32,
    pub max_bounce: u32,
    pub rays_per_bounce: u32,
    pub env_sampling: u32,
}

#[derive(Copy, Clone)]
struct ImageRange {
    from: u32,
    to: u32,
}

fn create_image_ranges(num_thread: u32, height: u32) -> Vec<ImageRange> {
    let height_per_thread = height / num_thread;
    let mut ranges = Vec::with_capacity(num_thread as usize);
    for t in 0..num_thread {
        let from = t * height_per_thread;
        let to = if t + 1 == num_thread {
            height
        } else {
            (t + 1) * height_per_thread
        };
        ranges.push(ImageRange { from, to });
    }
    ranges
}

impl RayTracer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixel_sampling: 16,
            max_bounce: 4,
            rays_per_bounce: 16,
            env_sampling: 16,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Render `scene`, blocking until the image is complete.
    ///
    /// `progress` receives integer percentages: 0 up front, strictly
    /// increasing milestones while pixels complete, and a single final 100.
    /// All invocations happen on the calling thread.
    pub fn render(&self, scene: &Scene, mut progress: impl FnMut(u32)) -> anyhow::Result<Film> {
        if self.width == 0 || self.height == 0 {
            anyhow::bail!("output size {}x{} is empty", self.width, self.height);
        }
        let camera = scene.camera().context("scene has no camera")?;

        log::info!("rendering {}x{}", self.width, self.height);
        let begin_time = Instant::now();

        let film = Mutex::new(Film::new(self.width, self.height));
        let pixels_done = AtomicUsize::new(0);
        let total_pixels = (self.width as usize) * (self.height as usize);

        progress(0);

        let num_thread = (num_cpus::get() as u32).min(self.height).max(1);
        let ranges = create_image_ranges(num_thread, self.height);

        crossbeam::scope(|scope| {
            for range in &ranges {
                let film = &film;
                let pixels_done = &pixels_done;
                let tracer = &self;
                let ImageRange { from, to } = *range;

                scope.spawn(move |_| {
                    let mut rng = Rng::new();
                    for y in from..to {
                        for x in 0..tracer.width {
                            let color = tracer.render_pixel(scene, camera, x, y, &mut rng);
                            film.lock().unwrap().set(x, y, color);
                            pixels_done.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                });
            }

            let mut last_reported = 0;
            loop {
                let done = pixels_done.load(Ordering::Relaxed);
                let percent = ((done * 100 / total_pixels) as u32).min(99);
                if percent > last_reported {
                    progress(percent);
                    last_reported = percent;
                }
                if done >= total_pixels {
                    break;
                }
                std::thread::sleep(Duration::from_millis(10));
            }
        })
        .unwrap();

        progress(100);

        log::info!("rendering done in {:.3}s", begin_time.elapsed().as_secs_f32());
        Ok(film.into_inner().unwrap())
    }

    fn render_pixel(&self, scene: &Scene, camera: &Camera, x: u32, y: u32, rng: &mut Rng) -> Color {
        let f_width = self.width as f32;
        let f_height = self.height as f32;
        let aspect = f_height / f_width;
        let (z_near, z_far) = camera.depth_range();

        let sx = x as f32 / f_width - 0.5;
        let sy = 0.5 - y as f32 / f_height;

        let mut out = Color::BLACK;
        for _ in 0..self.pixel_sampling {
            let dx = rng.uniform_1d() / f_width;
            let dy = rng.uniform_1d() / f_height;
            let mut ray = camera.generate_ray((sx + dx, sy + dy), aspect);
            ray.t_min = z_near.max(Ray::T_MIN_EPS);

            let sample = match scene.hit(&ray, z_far) {
                None => match scene.env_light() {
                    Some(env) => env.radiance(),
                    None => Color::BLACK,
                },
                Some((hit, surface)) => {
                    let pos = ray.point_at(hit.t);
                    let material = surface.material();
                    let mut color =
                        self.direct_lighting(scene, material, pos, hit.normal, -ray.direction);
                    color += self.environment_lighting(scene, material, pos, hit.normal, rng);
                    color +=
                        self.indirect_lighting(scene, material, pos, hit.normal, self.max_bounce, rng);
                    color.min(1.0)
                }
            };

            out += sample / self.pixel_sampling as f32;
        }
        out
    }

    /// Ambient term plus Lambert diffuse and Phong specular for every
    /// unobstructed light in the scene.
    fn direct_lighting(
        &self,
        scene: &Scene,
        material: &Material,
        pos: glam::Vec3A,
        normal: glam::Vec3A,
        dir_view: glam::Vec3A,
    ) -> Color {
        let mut out = material.base_color * material.k_ambient;

        for light in scene.lights() {
            let (dir_light, dist_light, intensity) = light.sample(pos);

            let shadow_ray = Ray::new(pos, dir_light);
            if scene.hit(&shadow_ray, dist_light - 0.001).is_some() {
                continue;
            }

            let diffuse = normal.dot(dir_light).max(0.0)
                * material.k_diffuse
                * std::f32::consts::FRAC_1_PI;

            let dir_reflected = normal * normal.dot(dir_light) * 2.0 - dir_light;
            let alpha = 1.0 / material.roughness.max(1e-3);
            let specular =
                dir_view.dot(dir_reflected).max(0.0).powf(alpha) * material.k_specular;

            out += material.base_color * (diffuse * intensity)
                + light.color() * (specular * intensity);
        }

        out
    }

    /// Monte-Carlo estimate of the diffuse contribution of the environment
    /// dome, `env_sampling` cosine-weighted visibility rays.
    fn environment_lighting(
        &self,
        scene: &Scene,
        material: &Material,
        pos: glam::Vec3A,
        normal: glam::Vec3A,
        rng: &mut Rng,
    ) -> Color {
        let env = match scene.env_light() {
            Some(env) => env,
            None => return Color::BLACK,
        };
        if self.env_sampling == 0 {
            return Color::BLACK;
        }

        let coord = Coordinate::from_z(normal);
        let mut sum = Color::BLACK;
        for _ in 0..self.env_sampling {
            let dir = coord.to_world(rng.cosine_weighted_on_hemisphere());
            if scene.hit(&Ray::new(pos, dir), f32::MAX).is_none() {
                sum += env.radiance();
            }
        }

        material.base_color * material.k_diffuse * (sum / self.env_sampling as f32)
    }

    fn indirect_lighting(
        &self,
        scene: &Scene,
        material: &Material,
        pos: glam::Vec3A,
        normal: glam::Vec3A,
        n_bounce: u32,
        rng: &mut Rng,
    ) -> Color {
        if n_bounce == 0 || self.rays_per_bounce == 0 {
            return Color::BLACK;
        }

        let coord = Coordinate::from_z(normal);
        let mut out = Color::BLACK;
        for _ in 0..self.rays_per_bounce {
            let dir = coord.to_world(rng.cosine_weighted_on_hemisphere());
            let ray = Ray::new(pos, dir);
            if let Some((hit, surface)) = scene.hit(&ray, f32::MAX) {
                let bounce_pos = ray.point_at(hit.t);
                let bounce_material = surface.material();
                let mut incoming = self.direct_lighting(
                    scene,
                    bounce_material,
                    bounce_pos,
                    hit.normal,
                    -ray.direction,
                );
                incoming += self.indirect_lighting(
                    scene,
                    bounce_material,
                    bounce_pos,
                    hit.normal,
                    n_bounce - 1,
                    rng,
                );
                out += incoming * material.base_color * material.k_diffuse;
            }
        }

        out / self.rays_per_bounce as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::PinholeCamera;
    use crate::light::DirLight;
    use crate::surface::Sphere;

    fn one_sphere_scene() -> Scene {
        let mut scene = Scene::default();
        let mut camera = PinholeCamera::new(36.0, 90.0, 0.1, 100.0);
        camera.move_to(glam::Vec3A::new(0.0, 0.0, 5.0));
        scene.set_camera(camera.into());
        scene.add_light(
            DirLight::new(glam::Vec3A::new(1.0, 1.0, 1.0), 1.0, Color::WHITE).into(),
        );
        scene.add_surface(Sphere::new(glam::Vec3A::ZERO, 1.0).into());
        scene
    }

    fn fast_tracer(width: u32, height: u32) -> RayTracer {
        let mut tracer = RayTracer::new(width, height);
        tracer.pixel_sampling = 1;
        tracer.max_bounce = 0;
        tracer
    }

    #[test]
    fn default_quality_matches_engine_defaults() {
        let tracer = RayTracer::new(640, 360);
        assert_eq!(tracer.width(), 640);
        assert_eq!(tracer.height(), 360);
        assert_eq!(tracer.pixel_sampling, 16);
        assert_eq!(tracer.max_bounce, 4);
        assert_eq!(tracer.rays_per_bounce, 16);
        assert_eq!(tracer.env_sampling, 16);
    }

    #[test]
    fn renders_film_of_requested_size() {
        let scene = one_sphere_scene();
        let film = fast_tracer(8, 6).render(&scene, |_| {}).unwrap();
        assert_eq!(film.width(), 8);
        assert_eq!(film.height(), 6);
    }

    #[test]
    fn center_pixel_sees_the_sphere() {
        let scene = one_sphere_scene();
        let film = fast_tracer(9, 9).render(&scene, |_| {}).unwrap();
        // Lit grey sphere dead ahead, black background in the corner.
        assert!(film.pixel(4, 4).luminance() > 0.0);
        assert_eq!(film.pixel(0, 0), Color::BLACK);
    }

    #[test]
    fn environment_dome_fills_the_background() {
        use crate::light::EnvLight;

        let mut scene = Scene::default();
        let mut camera = PinholeCamera::new(36.0, 90.0, 0.1, 100.0);
        camera.move_to(glam::Vec3A::new(0.0, 0.0, 5.0));
        scene.set_camera(camera.into());
        scene.set_env_light(EnvLight::new(Color::new(0.0, 0.5, 1.0), 2.0));
        scene.add_surface(Sphere::new(glam::Vec3A::ZERO, 1.0).into());

        let film = fast_tracer(9, 9).render(&scene, |_| {}).unwrap();
        // Escaped rays pick up the dome radiance directly.
        assert_eq!(film.pixel(0, 0), Color::new(0.0, 1.0, 2.0));
        // The sphere is lit by the dome alone.
        assert!(film.pixel(4, 4).luminance() > 0.0);
    }

    #[test]
    fn progress_is_monotone_and_ends_at_100() {
        let scene = one_sphere_scene();
        let mut reports = Vec::new();
        fast_tracer(16, 16)
            .render(&scene, |p| reports.push(p))
            .unwrap();

        assert_eq!(reports.first(), Some(&0));
        assert_eq!(reports.last(), Some(&100));
        assert_eq!(reports.iter().filter(|&&p| p == 100).count(), 1);
        for pair in reports.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn missing_camera_is_an_error() {
        let scene = Scene::default();
        assert!(fast_tracer(4, 4).render(&scene, |_| {}).is_err());
    }

    #[test]
    fn empty_output_size_is_an_error() {
        let scene = one_sphere_scene();
        assert!(fast_tracer(0, 4).render(&scene, |_| {}).is_err());
    }
}
