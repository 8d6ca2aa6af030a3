use crate::core::ray::Ray;

use super::CameraT;

/// Pinhole camera with a physical sensor size, looking down -Z by default.
#[derive(Clone)]
pub struct PinholeCamera {
    location: glam::Vec3A,
    forward: glam::Vec3A,
    up: glam::Vec3A,
    right: glam::Vec3A,
    sensor_width: f32,
    fov: f32,
    z_near: f32,
    z_far: f32,
}

impl PinholeCamera {
    /// `sensor_width_mm` is in millimetres, `fov_deg` in degrees.
    pub fn new(sensor_width_mm: f32, fov_deg: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            location: glam::Vec3A::ZERO,
            forward: -glam::Vec3A::Z,
            up: glam::Vec3A::Y,
            right: glam::Vec3A::X,
            sensor_width: sensor_width_mm * 1e-3,
            fov: fov_deg * std::f32::consts::PI / 180.0,
            z_near,
            z_far,
        }
    }

    pub fn move_to(&mut self, location: glam::Vec3A) {
        self.location = location;
    }
}

impl CameraT for PinholeCamera {
    fn generate_ray(&self, point: (f32, f32), aspect: f32) -> Ray {
        let sensor_center =
            self.location + self.forward * (self.sensor_width / (0.5 * self.fov).tan());
        let pixel_pos = sensor_center
            + self.right * (point.0 * self.sensor_width)
            + self.up * (point.1 * self.sensor_width * aspect);
        Ray::new(self.location, (pixel_pos - self.location).normalize())
    }

    fn depth_range(&self) -> (f32, f32) {
        (self.z_near, self.z_far)
    }
}
