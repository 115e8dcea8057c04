//! Level-of-detail grid arithmetic shared by tessellation and its callers.
//!
//! Simplification level `n > 0` keeps every `2n`-th sample along each axis.
//! The vertex buffer is sized for one extra row and column beyond what the
//! decimated grid fills.

use atoll_terrain::{TerrainConfig, TerrainConfigError, lod_increment};

use crate::error::MeshError;

/// Decimated sampling grid for one terrain size and simplification level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LodGrid {
    terrain_size: u32,
    increment: u32,
    vertices_per_line: u32,
}

impl LodGrid {
    /// Derive the grid, rejecting sizes that cannot form a single quad.
    pub fn new(terrain_size: u32, simplification: u32) -> Result<Self, MeshError> {
        if terrain_size < 2 {
            return Err(TerrainConfigError::TerrainTooSmall(terrain_size).into());
        }
        let increment = lod_increment(simplification)
            .ok_or(TerrainConfigError::IncrementOverflow(simplification))?;
        let vertices_per_line = (terrain_size - 1) / increment + 1;
        if vertices_per_line < 2 {
            return Err(TerrainConfigError::DegenerateGrid {
                terrain_size,
                increment,
                vertices_per_line,
            }
            .into());
        }

        let grid = Self {
            terrain_size,
            increment,
            vertices_per_line,
        };
        if grid.allocated_slots() > u32::MAX as u64 {
            return Err(MeshError::IndexOverflow {
                slots: grid.allocated_slots(),
            });
        }
        Ok(grid)
    }

    /// Grid for a terrain configuration.
    pub fn from_config(config: &TerrainConfig) -> Result<Self, MeshError> {
        Self::new(config.terrain_size, config.simplification)
    }

    /// Samples per side of the full-resolution grid.
    pub fn terrain_size(&self) -> u32 {
        self.terrain_size
    }

    /// Stride between visited samples.
    pub fn increment(&self) -> u32 {
        self.increment
    }

    /// Vertices along one line of the decimated grid.
    pub fn vertices_per_line(&self) -> u32 {
        self.vertices_per_line
    }

    /// Vertex/UV slots allocated: `(vertices_per_line + 1)²`.
    pub fn allocated_slots(&self) -> u64 {
        let side = self.vertices_per_line as u64 + 1;
        side * side
    }

    /// Vertices written by tessellation: `vertices_per_line²`.
    pub fn populated_vertices(&self) -> u64 {
        let side = self.vertices_per_line as u64;
        side * side
    }

    /// Length of the index buffer: `(vertices_per_line - 1)² * 6`.
    pub fn index_count(&self) -> u64 {
        let quads = self.vertices_per_line as u64 - 1;
        quads * quads * 6
    }
}
