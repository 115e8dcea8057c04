//! Terrain generation orchestration.
//!
//! Validates a [`TerrainConfig`], derives the seeded noise offset, refreshes
//! the falloff cache, binds a [`HeightField`] and tessellates it. The falloff
//! mask is the only state carried between calls.

use std::time::Instant;

use atoll_mesh::{LodGrid, MeshBuffers, MeshTessellator};
use atoll_terrain::{
    FalloffCache, HeightCurve, HeightField, NoiseField, NoiseParams, SeededOffset, TerrainConfig,
};
use tracing::{debug, info};

use crate::error::GenerationError;

/// Summary of the most recent successful generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerationReport {
    /// Populated vertices in the returned mesh.
    pub vertex_count: usize,
    /// Triangles in the returned mesh.
    pub triangle_count: usize,
    /// Whether the falloff mask was rebuilt for this call.
    pub falloff_rebuilt: bool,
    /// The noise-space offset used.
    pub offset: SeededOffset,
    /// Wall-clock generation time in microseconds (for profiling).
    pub generation_time_us: u64,
}

/// Produces terrain meshes from configuration snapshots.
///
/// Not internally synchronized: `generate` takes `&mut self`, so concurrent
/// hosts keep one pipeline per worker or serialize access.
#[derive(Debug, Default)]
pub struct GenerationPipeline {
    falloff: FalloffCache,
    last_report: Option<GenerationReport>,
}

impl GenerationPipeline {
    /// Create a pipeline with an empty falloff cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a mesh using the config's own height curve.
    pub fn generate(&mut self, config: &TerrainConfig) -> Result<MeshBuffers, GenerationError> {
        self.generate_with_curve(config, &config.height_curve)
    }

    /// Generate a mesh with a host-supplied height curve in place of
    /// `config.height_curve`.
    pub fn generate_with_curve(
        &mut self,
        config: &TerrainConfig,
        curve: &dyn HeightCurve,
    ) -> Result<MeshBuffers, GenerationError> {
        let start = Instant::now();

        config.validate()?;
        let grid = LodGrid::from_config(config)?;

        let offset =
            SeededOffset::derive(config.seed, config.noise_offset_x, config.noise_offset_z);
        debug!(
            seed = config.seed,
            offset_x = offset.offset_x,
            offset_z = offset.offset_z,
            "derived noise offset"
        );

        let falloff_rebuilt = config.use_falloff
            && self.falloff.refresh(
                config.terrain_size,
                config.falloff_start,
                config.falloff_end,
            );
        let mask = if config.use_falloff {
            self.falloff.mask()
        } else {
            None
        };

        let noise = NoiseField::new(NoiseParams::from_config(config, offset));
        let field = HeightField::new(noise, mask, curve, config.height_multiplier);
        let mesh = MeshTessellator::new(grid)
            .with_parallel_rows(config.parallel_rows)
            .tessellate(&field);

        let report = GenerationReport {
            vertex_count: mesh.vertex_count(),
            triangle_count: mesh.triangle_count(),
            falloff_rebuilt,
            offset,
            generation_time_us: start.elapsed().as_micros() as u64,
        };
        info!(
            terrain_size = config.terrain_size,
            simplification = config.simplification,
            vertices = report.vertex_count,
            triangles = report.triangle_count,
            falloff_rebuilt,
            elapsed_us = report.generation_time_us,
            "generated terrain mesh"
        );
        self.last_report = Some(report);

        Ok(mesh)
    }

    /// Populated vertex count of the last successful generation.
    pub fn vertex_count(&self) -> Option<usize> {
        self.last_report.map(|r| r.vertex_count)
    }

    /// Report of the last successful generation.
    pub fn last_report(&self) -> Option<&GenerationReport> {
        self.last_report.as_ref()
    }

    /// The falloff cache, for inspection.
    pub fn falloff_cache(&self) -> &FalloffCache {
        &self.falloff
    }

    /// Drop the cached falloff mask; the next falloff-enabled call rebuilds it.
    pub fn invalidate_falloff(&mut self) {
        self.falloff.invalidate();
    }
}
