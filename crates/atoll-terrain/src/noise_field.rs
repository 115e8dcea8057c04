//! Multi-octave coherent noise evaluated over the terrain grid.
//!
//! Each octave samples 2D Perlin noise remapped to `[0, 1]`, so the summed
//! result lies in `[0, max_amplitude]` rather than being centred on zero.

use noise::{NoiseFn, Perlin};

use crate::config::TerrainConfig;
use crate::seed::SeededOffset;

/// Grid units per noise unit at `noise_scale == 1`.
pub const NOISE_SCALE_DIVISOR: f64 = 200.0;

/// Octave parameters for a [`NoiseField`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NoiseParams {
    /// Number of octaves to sum.
    pub octaves: u32,
    /// Amplitude of octave `o` is `persistence^o`.
    pub persistence: f64,
    /// Frequency of octave `o` is `lacunarity^o`.
    pub lacunarity: f64,
    /// User-facing scale; the base frequency is `noise_scale / 200`.
    pub noise_scale: f64,
    /// Noise-space translation shared by every octave.
    pub offset: SeededOffset,
}

impl NoiseParams {
    /// Extract octave parameters from a terrain config and a derived offset.
    pub fn from_config(config: &TerrainConfig, offset: SeededOffset) -> Self {
        Self {
            octaves: config.octaves,
            persistence: config.persistence as f64,
            lacunarity: config.lacunarity as f64,
            noise_scale: config.noise_scale as f64,
            offset,
        }
    }
}

/// Layered coherent noise sampler.
pub struct NoiseField {
    noise: Perlin,
    params: NoiseParams,
}

impl NoiseField {
    /// Create a field with the given octave parameters.
    pub fn new(params: NoiseParams) -> Self {
        Self {
            noise: Perlin::new(Perlin::DEFAULT_SEED),
            params,
        }
    }

    /// Smooth gradient noise at a noise-space coordinate, in `[0, 1]`.
    pub fn coherent_noise_2d(&self, x: f64, z: f64) -> f64 {
        ((self.noise.get([x, z]) + 1.0) * 0.5).clamp(0.0, 1.0)
    }

    /// Sum all octaves at grid coordinate `(x, z)`.
    pub fn sample(&self, x: f64, z: f64) -> f32 {
        let base = self.params.noise_scale / NOISE_SCALE_DIVISOR;
        let sx = (x + self.params.offset.offset_x) * base;
        let sz = (z + self.params.offset.offset_z) * base;

        let mut total = 0.0;
        let mut frequency = 1.0;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves {
            total += amplitude * self.coherent_noise_2d(sx * frequency, sz * frequency);

            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total as f32
    }

    /// Upper bound of [`sample`](Self::sample): the sum of octave amplitudes.
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.params.octaves {
            sum += amp;
            amp *= self.params.persistence;
        }
        sum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-6;

    fn params(octaves: u32) -> NoiseParams {
        NoiseParams {
            octaves,
            persistence: 0.5,
            lacunarity: 2.0,
            noise_scale: 5.0,
            offset: SeededOffset::derive(42, 0.0, 0.0),
        }
    }

    #[test]
    fn test_determinism_same_params_same_coord() {
        let a = NoiseField::new(params(4));
        let b = NoiseField::new(params(4));
        assert_eq!(a.sample(100.0, 200.0), b.sample(100.0, 200.0));
    }

    #[test]
    fn test_single_octave_in_unit_range() {
        let field = NoiseField::new(params(1));
        for x in 0..64 {
            for z in 0..64 {
                let h = field.sample(x as f64 * 3.7, z as f64 * 1.3);
                assert!((0.0..=1.0).contains(&h), "sample {h} out of [0, 1]");
            }
        }
    }

    #[test]
    fn test_sample_within_max_amplitude() {
        let field = NoiseField::new(params(6));
        let max = field.max_amplitude() as f32 + 1e-5;
        for i in 0..500 {
            let h = field.sample(i as f64 * 2.5, i as f64 * 0.75);
            assert!(h >= 0.0 && h <= max, "sample {h} outside [0, {max}]");
        }
    }

    #[test]
    fn test_max_amplitude_calculation() {
        let field = NoiseField::new(params(4));
        assert!((field.max_amplitude() - 1.875).abs() < EPSILON);
    }

    #[test]
    fn test_different_offsets_produce_different_fields() {
        let a = NoiseField::new(params(3));
        let b = NoiseField::new(NoiseParams {
            offset: SeededOffset::derive(43, 0.0, 0.0),
            ..params(3)
        });

        let differs = (0..32).any(|i| {
            let x = i as f64 * 7.0;
            a.sample(x, x) != b.sample(x, x)
        });
        assert!(differs, "Different offsets should move the sampling window");
    }

    #[test]
    fn test_smooth_no_discontinuities() {
        let field = NoiseField::new(params(4));
        let step = 0.05;
        for i in 0..2_000 {
            let x = i as f64 * step;
            let delta = (field.sample(x + step, 10.0) - field.sample(x, 10.0)).abs();
            assert!(delta < 0.1, "Discontinuity at x={x}: delta={delta}");
        }
    }

    #[test]
    fn test_coherent_noise_range() {
        let field = NoiseField::new(params(1));
        for i in 0..1_000 {
            let v = field.coherent_noise_2d(i as f64 * 0.173, i as f64 * -0.291);
            assert!((0.0..=1.0).contains(&v));
        }
    }
}
