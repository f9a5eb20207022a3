use crate::error::Error;
use crate::material_ref::MaterialRef;
use crate::mesh::Mesh;
use crate::triangle::Triangle;
use crate::vertex::Vertex;
use cgmath::{Point3, Vector3};
use std::io::Read;

/// Reads a mesh from the raw triangle-stream text format: a leading count
/// line, followed by one record per triangle. Each record is six
/// whitespace-separated `x y z` triples (vertex `a` point, `a` normal, `b`
/// point, `b` normal, `c` point, `c` normal), with records separated by
/// blank lines.
pub fn mesh_from_raw<R: Read>(mut reader: R, material: MaterialRef) -> Result<Mesh, Error> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut numbers = text.split_whitespace();

    let count_str = numbers.next().ok_or_else(|| Error::MalformedCount {
        line: String::new(),
    })?;
    let count: usize = count_str.parse().map_err(|_| Error::MalformedCount {
        line: count_str.to_string(),
    })?;

    let mut triangles = Vec::with_capacity(count);
    for index in 0..count {
        let mut nums = [0.0f64; 18];
        for (slot, n) in nums.iter_mut().enumerate() {
            let tok = numbers.next().ok_or(Error::UnexpectedEof {
                expected: count,
                found: index,
            })?;
            *n = tok.parse().map_err(|_| Error::MalformedRecord {
                index,
                reason: format!("field {} is not a number: {:?}", slot, tok),
            })?;
        }

        let a = Vertex::new(
            Point3::new(nums[0], nums[1], nums[2]),
            Vector3::new(nums[3], nums[4], nums[5]),
        );
        let b = Vertex::new(
            Point3::new(nums[6], nums[7], nums[8]),
            Vector3::new(nums[9], nums[10], nums[11]),
        );
        let c = Vertex::new(
            Point3::new(nums[12], nums[13], nums[14]),
            Vector3::new(nums[15], nums[16], nums[17]),
        );

        triangles.push(Triangle::new(a, b, c, material));
    }

    Ok(Mesh::new(triangles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_a_single_triangle_record() {
        let text = "1\n\
            0.0 0.0 0.0 0.0 0.0 1.0\n\
            1.0 0.0 0.0 0.0 0.0 1.0\n\
            0.0 1.0 0.0 0.0 0.0 1.0\n\n";

        let mesh = mesh_from_raw(text.as_bytes(), MaterialRef(0)).unwrap();
        assert_eq!(mesh.len(), 1);
        let tri = &mesh.triangles()[0];
        assert_eq!(tri.a.point, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(tri.b.point, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(tri.c.point, Point3::new(0.0, 1.0, 0.0));
        assert_eq!(tri.a.normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn reads_multiple_records() {
        let text = "2\n\
            0 0 0  0 0 1\n\
            1 0 0  0 0 1\n\
            0 1 0  0 0 1\n\n\
            2 0 0  0 0 1\n\
            3 0 0  0 0 1\n\
            2 1 0  0 0 1\n\n";

        let mesh = mesh_from_raw(text.as_bytes(), MaterialRef(1)).unwrap();
        assert_eq!(mesh.len(), 2);
        assert_eq!(mesh.triangles()[1].material, MaterialRef(1));
    }

    #[test]
    fn rejects_missing_count() {
        let err = mesh_from_raw("".as_bytes(), MaterialRef(0)).unwrap_err();
        assert!(matches!(err, Error::MalformedCount { .. }));
    }

    #[test]
    fn rejects_non_numeric_field() {
        let text = "1\n\
            0 0 0 0 0 1\n\
            1 0 0 0 0 1\n\
            0 x 0 0 0 1\n\n";
        let err = mesh_from_raw(text.as_bytes(), MaterialRef(0)).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[test]
    fn rejects_truncated_stream() {
        let text = "2\n\
            0 0 0 0 0 1\n\
            1 0 0 0 0 1\n\
            0 1 0 0 0 1\n\n";
        let err = mesh_from_raw(text.as_bytes(), MaterialRef(0)).unwrap_err();
        assert!(matches!(err, Error::UnexpectedEof { .. }));
    }
}
