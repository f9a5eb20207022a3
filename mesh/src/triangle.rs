use crate::material_ref::MaterialRef;
use crate::vertex::Vertex;
use cgmath::{InnerSpace, Point3, Vector3};

/// A single triangle: three vertices plus the cached centroid used
/// everywhere in the bounding volume hierarchy as the triangle's
/// classification point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vertex,
    pub b: Vertex,
    pub c: Vertex,
    pub centroid: Point3<f64>,
    pub material: MaterialRef,
}

impl Triangle {
    pub fn new(a: Vertex, b: Vertex, c: Vertex, material: MaterialRef) -> Self {
        let centroid = Self::centroid_of(a.point, b.point, c.point);
        Self {
            a,
            b,
            c,
            centroid,
            material,
        }
    }

    fn centroid_of(a: Point3<f64>, b: Point3<f64>, c: Point3<f64>) -> Point3<f64> {
        Point3::new(
            (a.x + b.x + c.x) / 3.0,
            (a.y + b.y + c.y) / 3.0,
            (a.z + b.z + c.z) / 3.0,
        )
    }

    /// Recomputes the cached centroid from the current vertex positions.
    /// Called after a transform mutates `a`, `b`, or `c` in place.
    pub fn recompute_centroid(&mut self) {
        self.centroid = Self::centroid_of(self.a.point, self.b.point, self.c.point);
    }

    /// World-space minimum and maximum corners spanned by the triangle's
    /// three vertices.
    pub fn extrema(&self) -> (Point3<f64>, Point3<f64>) {
        let min = Point3::new(
            self.a.point.x.min(self.b.point.x).min(self.c.point.x),
            self.a.point.y.min(self.b.point.y).min(self.c.point.y),
            self.a.point.z.min(self.b.point.z).min(self.c.point.z),
        );
        let max = Point3::new(
            self.a.point.x.max(self.b.point.x).max(self.c.point.x),
            self.a.point.y.max(self.b.point.y).max(self.c.point.y),
            self.a.point.z.max(self.b.point.z).max(self.c.point.z),
        );
        (min, max)
    }

    /// Interpolates the per-vertex normals at `hit` using the barycentric
    /// coordinates of `hit` with respect to this triangle.
    ///
    /// `hit` is assumed to already lie on the triangle's plane (as it would
    /// for any point returned by the ray-triangle intersection kernel).
    pub fn normal_at(&self, hit: Point3<f64>) -> Vector3<f64> {
        let v0 = self.b.point - self.a.point;
        let v1 = self.c.point - self.a.point;
        let v2 = hit - self.a.point;

        let d00 = v0.dot(v0);
        let d01 = v0.dot(v1);
        let d11 = v1.dot(v1);
        let d20 = v2.dot(v0);
        let d21 = v2.dot(v1);

        let denom = d00 * d11 - d01 * d01;
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;

        self.a.normal * v + self.b.normal * w + self.c.normal * u
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(p: Point3<f64>, n: Vector3<f64>) -> Vertex {
        Vertex::new(p, n)
    }

    #[test]
    fn centroid_is_vertex_average() {
        let tri = Triangle::new(
            vertex(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
            vertex(Point3::new(3.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
            vertex(Point3::new(0.0, 3.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
            MaterialRef(0),
        );
        assert_eq!(tri.centroid, Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn normal_at_vertex_recovers_vertex_normal() {
        let tri = Triangle::new(
            vertex(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)),
            vertex(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0)),
            vertex(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
            MaterialRef(0),
        );
        let n = tri.normal_at(Point3::new(0.0, 0.0, 0.0));
        assert!((n - Vector3::new(1.0, 0.0, 0.0)).magnitude() < 1e-9);
    }
}
