//! Terrain configuration error types.

/// Reasons a [`crate::TerrainConfig`] is rejected before any generation work starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TerrainConfigError {
    /// The grid needs at least two samples per side to form a single quad.
    #[error("terrain size must be at least 2, got {0}")]
    TerrainTooSmall(u32),

    /// At least one noise octave is required.
    #[error("octave count must be at least 1")]
    NoOctaves,

    /// `simplification * 2` does not fit the grid stride type.
    #[error("simplification level {0} overflows the LOD stride")]
    IncrementOverflow(u32),

    /// Decimation leaves fewer than two vertices per line.
    #[error(
        "terrain size {terrain_size} with LOD stride {increment} leaves {vertices_per_line} vertex per line"
    )]
    DegenerateGrid {
        /// Requested grid extent.
        terrain_size: u32,
        /// Derived LOD stride.
        increment: u32,
        /// Vertices per line after decimation.
        vertices_per_line: u32,
    },

    /// The falloff exponent must be positive and finite, and the transition
    /// scale finite, when falloff is enabled.
    #[error("invalid falloff shape: start={start}, end={end}")]
    InvalidFalloff {
        /// Falloff exponent.
        start: f32,
        /// Falloff transition scale.
        end: f32,
    },

    /// A floating-point parameter is NaN or infinite.
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter {
        /// Field name.
        name: &'static str,
        /// Offending value.
        value: f32,
    },
}
