/// An opaque handle to a material owned by a `Scene`.
///
/// `mesh` only needs to tag triangles with *which* material they use; it has
/// no notion of what a material actually contains. The renderer crate is
/// responsible for minting and resolving these handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MaterialRef(pub usize);
