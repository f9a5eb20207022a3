pub mod error;
pub mod material_ref;
pub mod mesh;
pub mod raw;
pub mod transform;
pub mod triangle;
pub mod vertex;

pub use error::Error;
pub use material_ref::MaterialRef;
pub use mesh::Mesh;
pub use raw::mesh_from_raw;
pub use transform::{Axis, Transform};
pub use triangle::Triangle;
pub use vertex::Vertex;
