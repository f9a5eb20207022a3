use crate::config::Config;
use crate::geometry::Ray;
use cgmath::{InnerSpace, Point3};

/// A pinhole camera looking from `pos` toward `at`. `up` is fixed at
/// `(0, -1, 0)` in world space, matching the source this design is modeled
/// on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: Point3<f64>,
    pub at: Point3<f64>,
}

impl Camera {
    pub fn new(pos: Point3<f64>, at: Point3<f64>) -> Self {
        Self { pos, at }
    }

    /// Generates the primary ray through pixel `(x, y)` of a `w x h` image.
    pub fn primary_ray(&self, x: usize, y: usize, w: usize, h: usize, config: &Config) -> Ray {
        let forward = (self.at - self.pos).normalize();
        let up = cgmath::Vector3::new(0.0, -1.0, 0.0);
        let right = forward.cross(up);

        let nx = x as f64 / w as f64 - 0.5;
        let ny = y as f64 / h as f64 - 0.5;
        let scale = (config.fov / 2.0).tan() * 2.0;

        let p = self.pos + forward + right * (nx * scale) + up * (ny * scale);
        Ray::new(self.pos, (p - self.pos).normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looking_down_z_centers_on_forward_axis() {
        let camera = Camera::new(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 0.0, 1.0));
        let config = Config::default();
        let ray = camera.primary_ray(320, 180, 640, 360, &config);
        assert!((ray.dir.x).abs() < 1e-9);
        assert!((ray.dir.y).abs() < 1e-9);
        assert!(ray.dir.z > 0.0);
    }
}
