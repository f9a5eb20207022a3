use crate::mesh::Mesh;
use cgmath::{EuclideanSpace, Matrix4, Point3, Rad, Vector3};

/// A coordinate axis, used to parameterize `Transform::Rotate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// A rigid or affine transform that can be applied to a mesh (or, for
/// `Translate`, a sphere's center).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Rotate(Axis, f64),
    Scale(Vector3<f64>),
    Translate(Vector3<f64>),
}

impl Transform {
    pub fn rotate(axis: Axis, angle: f64) -> Self {
        Self::Rotate(axis, angle)
    }

    pub fn scale(factor: Vector3<f64>) -> Self {
        Self::Scale(factor)
    }

    pub fn translate(offset: Vector3<f64>) -> Self {
        Self::Translate(offset)
    }

    /// The 4x4 matrix equivalent of this transform.
    pub fn matrix(&self) -> Matrix4<f64> {
        match *self {
            Self::Rotate(Axis::X, angle) => Matrix4::from_angle_x(Rad(angle)),
            Self::Rotate(Axis::Y, angle) => Matrix4::from_angle_y(Rad(angle)),
            Self::Rotate(Axis::Z, angle) => Matrix4::from_angle_z(Rad(angle)),
            Self::Scale(factor) => Matrix4::from_nonuniform_scale(factor.x, factor.y, factor.z),
            Self::Translate(offset) => Matrix4::from_translation(offset),
        }
    }

    /// Applies this transform to every triangle in `mesh`, mutating vertex
    /// positions in place and recomputing cached centroids. Vertex normals
    /// are left untouched, matching the original mesh-transform behavior
    /// this crate is modeled on.
    pub fn apply_to_mesh(&self, mesh: &mut Mesh) {
        let m = self.matrix();
        for tri in mesh.triangles_mut() {
            tri.a.point = m.transform_point(tri.a.point);
            tri.b.point = m.transform_point(tri.b.point);
            tri.c.point = m.transform_point(tri.c.point);
            tri.recompute_centroid();
        }
    }

    /// Applies this transform to a sphere's center. Only translation has a
    /// well-defined effect on a sphere represented as center + radius; a
    /// rotation about the sphere's own center or a scale of its center
    /// position is a no-op here.
    pub fn apply_to_sphere_center(&self, center: Point3<f64>) -> Point3<f64> {
        match self {
            Self::Translate(offset) => center + offset,
            Self::Rotate(..) | Self::Scale(..) => center,
        }
    }
}

trait TransformPoint {
    fn transform_point(&self, p: Point3<f64>) -> Point3<f64>;
}

impl TransformPoint for Matrix4<f64> {
    fn transform_point(&self, p: Point3<f64>) -> Point3<f64> {
        let v = self * p.to_homogeneous();
        Point3::new(v.x, v.y, v.z)
    }
}
