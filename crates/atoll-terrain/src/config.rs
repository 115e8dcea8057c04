//! Generation parameters for a single terrain mesh.

use serde::{Deserialize, Serialize};

use crate::curve::CurveSpec;
use crate::error::TerrainConfigError;

/// Parameter snapshot for one terrain generation call.
///
/// Owned by the caller and never mutated by the generator. Every field has a
/// default so partial RON documents deserialize cleanly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Grid extent in samples per side. Must be at least 2.
    pub terrain_size: u32,
    /// LOD decimation level. `0` keeps every sample, `n` keeps every `2n`-th.
    pub simplification: u32,
    /// Seed for the noise-space offset perturbation.
    pub seed: u64,
    /// Horizontal noise scale. Sampling frequency is `noise_scale / 200`.
    pub noise_scale: f32,
    /// Number of noise octaves summed per sample.
    pub octaves: u32,
    /// Amplitude decay between octaves.
    pub persistence: f32,
    /// Frequency growth between octaves.
    pub lacunarity: f32,
    /// Final vertical scale applied after the height curve.
    pub height_multiplier: f32,
    /// Remapping curve sampled on `[0, 1]`.
    pub height_curve: CurveSpec,
    /// Base noise-space offset along X.
    pub noise_offset_x: f32,
    /// Base noise-space offset along Z.
    pub noise_offset_z: f32,
    /// Subtract the island falloff mask from the raw noise.
    pub use_falloff: bool,
    /// Falloff curve exponent (steepness).
    pub falloff_start: f32,
    /// Falloff curve transition scale.
    pub falloff_end: f32,
    /// Evaluate height rows in parallel. Output ordering is unaffected.
    pub parallel_rows: bool,
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            terrain_size: 241,
            simplification: 0,
            seed: 0,
            noise_scale: 1.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            height_multiplier: 20.0,
            height_curve: CurveSpec::Linear,
            noise_offset_x: 0.0,
            noise_offset_z: 0.0,
            use_falloff: true,
            falloff_start: 3.0,
            falloff_end: 2.2,
            parallel_rows: false,
        }
    }
}

/// LOD stride for a simplification level: `1` for level 0, otherwise `2 * level`.
///
/// Returns `None` when the stride overflows `u32`.
pub fn lod_increment(simplification: u32) -> Option<u32> {
    if simplification == 0 {
        Some(1)
    } else {
        simplification.checked_mul(2)
    }
}

impl TerrainConfig {
    /// LOD stride between visited grid samples.
    pub fn increment(&self) -> Result<u32, TerrainConfigError> {
        lod_increment(self.simplification)
            .ok_or(TerrainConfigError::IncrementOverflow(self.simplification))
    }

    /// Vertices emitted along one grid line after decimation.
    pub fn vertices_per_line(&self) -> Result<u32, TerrainConfigError> {
        let increment = self.increment()?;
        Ok(self.terrain_size.saturating_sub(1) / increment + 1)
    }

    /// Reject configurations that would produce degenerate or non-finite geometry.
    pub fn validate(&self) -> Result<(), TerrainConfigError> {
        if self.terrain_size < 2 {
            return Err(TerrainConfigError::TerrainTooSmall(self.terrain_size));
        }
        if self.octaves < 1 {
            return Err(TerrainConfigError::NoOctaves);
        }

        let increment = self.increment()?;
        let vertices_per_line = self.vertices_per_line()?;
        if vertices_per_line < 2 {
            return Err(TerrainConfigError::DegenerateGrid {
                terrain_size: self.terrain_size,
                increment,
                vertices_per_line,
            });
        }

        for (name, value) in [
            ("noise_scale", self.noise_scale),
            ("persistence", self.persistence),
            ("lacunarity", self.lacunarity),
            ("height_multiplier", self.height_multiplier),
            ("noise_offset_x", self.noise_offset_x),
            ("noise_offset_z", self.noise_offset_z),
        ] {
            if !value.is_finite() {
                return Err(TerrainConfigError::NonFiniteParameter { name, value });
            }
        }

        // A non-positive exponent turns the mask centre into 0^a.
        if self.use_falloff
            && !(self.falloff_start.is_finite()
                && self.falloff_start > 0.0
                && self.falloff_end.is_finite())
        {
            return Err(TerrainConfigError::InvalidFalloff {
                start: self.falloff_start,
                end: self.falloff_end,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(TerrainConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_lod_increment() {
        assert_eq!(lod_increment(0), Some(1));
        assert_eq!(lod_increment(1), Some(2));
        assert_eq!(lod_increment(3), Some(6));
        assert_eq!(lod_increment(u32::MAX), None);
    }

    #[test]
    fn test_vertices_per_line() {
        let mut config = TerrainConfig::default();
        assert_eq!(config.vertices_per_line(), Ok(241));

        config.simplification = 1;
        assert_eq!(config.vertices_per_line(), Ok(121));

        config.simplification = 6;
        assert_eq!(config.vertices_per_line(), Ok(21));
    }

    #[test]
    fn test_terrain_too_small_rejected() {
        let config = TerrainConfig {
            terrain_size: 1,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(TerrainConfigError::TerrainTooSmall(1))
        );
    }

    #[test]
    fn test_zero_octaves_rejected() {
        let config = TerrainConfig {
            octaves: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(TerrainConfigError::NoOctaves));
    }

    #[test]
    fn test_overflowing_simplification_rejected() {
        let config = TerrainConfig {
            simplification: u32::MAX,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(TerrainConfigError::IncrementOverflow(u32::MAX))
        );
    }

    #[test]
    fn test_decimation_to_single_vertex_rejected() {
        // Stride 4 over a 3-sample grid keeps only the first sample per line.
        let config = TerrainConfig {
            terrain_size: 3,
            simplification: 2,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TerrainConfigError::DegenerateGrid {
                vertices_per_line: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_non_finite_parameter_rejected() {
        let config = TerrainConfig {
            lacunarity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TerrainConfigError::NonFiniteParameter {
                name: "lacunarity",
                ..
            })
        ));
    }

    #[test]
    fn test_falloff_shape_checked_only_when_enabled() {
        let mut config = TerrainConfig {
            falloff_start: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(TerrainConfigError::InvalidFalloff { .. })
        ));

        config.use_falloff = false;
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_negative_falloff_end_accepted() {
        let config = TerrainConfig {
            falloff_start: 2.0,
            falloff_end: -2.8,
            ..Default::default()
        };
        assert_eq!(config.validate(), Ok(()));

        let non_finite = TerrainConfig {
            falloff_end: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            non_finite.validate(),
            Err(TerrainConfigError::InvalidFalloff { .. })
        ));
    }

    #[test]
    fn test_partial_ron_uses_defaults() {
        let config: TerrainConfig = ron::from_str("(terrain_size: 9, seed: 7)").unwrap();
        assert_eq!(config.terrain_size, 9);
        assert_eq!(config.seed, 7);
        assert_eq!(config.octaves, TerrainConfig::default().octaves);
    }
}
