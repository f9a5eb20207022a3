use cgmath::{Point3, Vector3};

/// A single vertex of a triangle: a position plus a per-vertex normal.
///
/// Normals are interpolated across a triangle's surface using the
/// barycentric coordinates of the hit point (see `Triangle::normal_at`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub point: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Vertex {
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { point, normal }
    }
}
