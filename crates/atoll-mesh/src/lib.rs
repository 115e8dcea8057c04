//! Terrain meshing: LOD grid layout, heightmap tessellation and mesh buffers.

pub mod error;
pub mod lod_grid;
pub mod mesh_buffers;
pub mod obj;
pub mod tessellator;

pub use error::MeshError;
pub use lod_grid::LodGrid;
pub use mesh_buffers::MeshBuffers;
pub use obj::{export_obj, write_obj};
pub use tessellator::{MeshTessellator, tessellate};
