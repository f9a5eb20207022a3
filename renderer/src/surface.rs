/// Whether a primitive is accelerated by the static BVH or scanned linearly
/// on every intersection query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motility {
    Static,
    Dynamic,
}

/// A stable handle to a light owned by a `Scene`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LightRef(pub usize);

/// A stable handle to a mesh owned by a `Scene`. `index` is the position of
/// the mesh within the scene's static or dynamic mesh list, per `motility`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshRef {
    pub motility: Motility,
    pub index: usize,
}

/// A stable handle to a sphere owned by a `Scene`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SphereRef {
    pub motility: Motility,
    pub index: usize,
}

/// A tagged reference to a triangle or sphere stored in a `Scene`. Identity
/// is the tuple of variant, motility, and storage indices: two `Surface`
/// values are equal iff they name the same stored primitive, never by
/// comparing geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Triangle {
        motility: Motility,
        mesh_index: usize,
        tri_index: usize,
    },
    Sphere {
        motility: Motility,
        index: usize,
    },
}
