//! Generation error types.

use atoll_mesh::MeshError;
use atoll_terrain::TerrainConfigError;

/// Errors returned by [`crate::GenerationPipeline`]. No buffers are produced
/// when any of these occur.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerationError {
    /// The configuration was rejected before sampling started.
    #[error("invalid terrain configuration: {0}")]
    InvalidConfig(#[from] TerrainConfigError),

    /// The mesh layout could not be built for this grid.
    #[error("mesh layout failed: {0}")]
    Mesh(#[from] MeshError),
}
