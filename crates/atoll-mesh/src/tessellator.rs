//! Heightmap tessellation: walks the decimated grid and emits vertices, UVs
//! and a triangle index buffer.
//!
//! Vertices are written row-major (`z` outer, `x` inner). Each grid quad is
//! split into `(top_left, bottom_left, top_right)` and
//! `(top_right, bottom_left, bottom_right)`, which is clockwise seen from +Y
//! under a left-handed convention.

use atoll_terrain::{HeightSource, TerrainConfig, sample_grid};
use glam::{Vec2, Vec3};

use crate::error::MeshError;
use crate::lod_grid::LodGrid;
use crate::mesh_buffers::MeshBuffers;

/// Turns a height source into [`MeshBuffers`] over a fixed [`LodGrid`].
#[derive(Clone, Copy, Debug)]
pub struct MeshTessellator {
    grid: LodGrid,
    parallel_rows: bool,
}

impl MeshTessellator {
    /// Create a serial tessellator for `grid`.
    pub fn new(grid: LodGrid) -> Self {
        Self {
            grid,
            parallel_rows: false,
        }
    }

    /// Evaluate height rows on the rayon pool. Output is unchanged.
    pub fn with_parallel_rows(mut self, parallel: bool) -> Self {
        self.parallel_rows = parallel;
        self
    }

    /// Sample `heights` once per visited cell and build the mesh.
    pub fn tessellate<S: HeightSource + ?Sized>(&self, heights: &S) -> MeshBuffers {
        let grid = &self.grid;
        let size = grid.terrain_size();
        let increment = grid.increment();
        let vpl = grid.vertices_per_line();

        let sampled = sample_grid(heights, size, increment, self.parallel_rows);
        debug_assert_eq!(sampled.len() as u64, grid.populated_vertices());

        let mut mesh = MeshBuffers::with_slots(
            grid.allocated_slots() as usize,
            grid.index_count() as usize,
        );

        let uv_denominator = (vpl - 1) as f32;
        let mut sampled = sampled.into_iter();
        for z in (0..size).step_by(increment as usize) {
            for x in (0..size).step_by(increment as usize) {
                let y = sampled.next().unwrap_or_default();
                let uv = Vec2::new(
                    (x / increment) as f32 / uv_denominator,
                    (z / increment) as f32 / uv_denominator,
                );
                mesh.push_vertex(Vec3::new(x as f32, y, z as f32), uv);
            }
        }

        for row in 0..vpl - 1 {
            for col in 0..vpl - 1 {
                let top_left = row * vpl + col;
                let top_right = top_left + 1;
                let bottom_left = top_left + vpl;
                let bottom_right = bottom_left + 1;

                mesh.push_triangle(top_left, bottom_left, top_right);
                mesh.push_triangle(top_right, bottom_left, bottom_right);
            }
        }

        mesh
    }
}

/// Tessellate `heights` over the grid described by `config`.
pub fn tessellate<S: HeightSource + ?Sized>(
    config: &TerrainConfig,
    heights: &S,
) -> Result<MeshBuffers, MeshError> {
    let grid = LodGrid::from_config(config)?;
    Ok(MeshTessellator::new(grid)
        .with_parallel_rows(config.parallel_rows)
        .tessellate(heights))
}
