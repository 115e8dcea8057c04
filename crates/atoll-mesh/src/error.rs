//! Mesh construction errors.

use atoll_terrain::TerrainConfigError;

/// Errors raised while laying out a terrain mesh.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// Grid size or simplification cannot produce a mesh.
    #[error(transparent)]
    InvalidGrid(#[from] TerrainConfigError),

    /// The vertex allocation exceeds the `u32` index range.
    #[error("mesh needs {slots} vertex slots, more than a u32 index buffer can address")]
    IndexOverflow {
        /// Requested vertex slots.
        slots: u64,
    },
}
