use crate::geometry::Aabb;
use cgmath::{Point3, Vector3};
use mesh::MaterialRef;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3<f64>,
    pub radius: f64,
    pub material: MaterialRef,
}

impl Sphere {
    pub fn new(center: Point3<f64>, radius: f64, material: MaterialRef) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }

    pub fn extrema(&self) -> (Point3<f64>, Point3<f64>) {
        let r = Vector3::new(self.radius, self.radius, self.radius);
        (self.center - r, self.center + r)
    }

    pub fn aabb(&self) -> Aabb {
        let (min, max) = self.extrema();
        Aabb::new(min, max)
    }

    pub fn normal_at(&self, hit: Point3<f64>) -> Vector3<f64> {
        use cgmath::InnerSpace;
        (hit - self.center).normalize()
    }
}
