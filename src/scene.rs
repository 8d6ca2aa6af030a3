use crate::{
    camera::Camera,
    core::ray::Ray,
    light::{EnvLight, Light},
    surface::{RayHit, Surface, SurfaceT},
};

/// Everything one render call looks at: one camera, at most one environment
/// light, and the light and surface lists in insertion order.
#[derive(Default)]
pub struct Scene {
    camera: Option<Camera>,
    env_light: Option<EnvLight>,
    lights: Vec<Light>,
    surfaces: Vec<Surface>,
}

impl Scene {
    pub fn set_camera(&mut self, camera: Camera) {
        self.camera = Some(camera);
    }

    pub fn set_env_light(&mut self, env_light: EnvLight) {
        self.env_light = Some(env_light);
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_surface(&mut self, surface: Surface) {
        self.surfaces.push(surface);
    }

    pub fn camera(&self) -> Option<&Camera> {
        self.camera.as_ref()
    }

    pub fn env_light(&self) -> Option<&EnvLight> {
        self.env_light.as_ref()
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Nearest surface hit by `ray` with `ray.t_min < t < t_max`.
    pub fn hit(&self, ray: &Ray, t_max: f32) -> Option<(RayHit, &Surface)> {
        let mut nearest: Option<(RayHit, &Surface)> = None;
        for surface in &self.surfaces {
            if let Some(hit) = surface.hit(ray) {
                let closer = match &nearest {
                    Some((best, _)) => hit.t < best.t,
                    None => true,
                };
                if hit.t < t_max && closer {
                    nearest = Some((hit, surface));
                }
            }
        }
        nearest
    }
}
