//! Deterministic island-terrain generation: configuration in, mesh buffers out.
//!
//! [`GenerationPipeline`] ties together the heightmap stages from
//! `atoll-terrain` and the tessellator from `atoll-mesh`, and owns the falloff
//! mask cache that persists between generations.

mod error;
mod pipeline;

pub use error::GenerationError;
pub use pipeline::{GenerationPipeline, GenerationReport};

pub use atoll_mesh::{LodGrid, MeshBuffers, MeshError};
pub use atoll_terrain::{CurveSpec, HeightCurve, Keyframe, KeyframeCurve, TerrainConfig};
