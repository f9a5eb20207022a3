use crate::triangle::Triangle;
use cgmath::Point3;

/// An owned collection of triangles loaded from a mesh source.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    pub fn new(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn triangles_mut(&mut self) -> &mut [Triangle] {
        &mut self.triangles
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Minimum and maximum corners spanning every triangle in the mesh.
    /// Returns `None` for an empty mesh.
    pub fn extrema(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let mut iter = self.triangles.iter();
        let first = iter.next()?;
        let (mut min, mut max) = first.extrema();
        for tri in iter {
            let (tmin, tmax) = tri.extrema();
            min.x = min.x.min(tmin.x);
            min.y = min.y.min(tmin.y);
            min.z = min.z.min(tmin.z);
            max.x = max.x.max(tmax.x);
            max.y = max.y.max(tmax.y);
            max.z = max.z.max(tmax.z);
        }
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material_ref::MaterialRef;
    use crate::vertex::Vertex;
    use cgmath::Vector3;

    #[test]
    fn extrema_spans_all_triangles() {
        let mesh = Mesh::new(vec![
            Triangle::new(
                Vertex::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
                Vertex::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
                Vertex::new(Point3::new(0.0, 1.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
                MaterialRef(0),
            ),
            Triangle::new(
                Vertex::new(Point3::new(-2.0, 0.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
                Vertex::new(Point3::new(0.0, 0.0, 5.0), Vector3::new(0.0, 0.0, 1.0)),
                Vertex::new(Point3::new(0.0, -3.0, 0.0), Vector3::new(0.0, 0.0, 1.0)),
                MaterialRef(0),
            ),
        ]);

        let (min, max) = mesh.extrema().unwrap();
        assert_eq!(min, Point3::new(-2.0, -3.0, 0.0));
        assert_eq!(max, Point3::new(1.0, 1.0, 5.0));
    }

    #[test]
    fn extrema_of_empty_mesh_is_none() {
        let mesh = Mesh::new(vec![]);
        assert!(mesh.extrema().is_none());
    }
}
