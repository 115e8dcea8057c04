//! Seed-derived noise-space offsets.
//!
//! Different seeds shift the sampling window to unrelated regions of the same
//! noise function, which is what gives each seed a distinct terrain.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Half-width of the symmetric range seed perturbations are drawn from.
pub const OFFSET_RANGE: f64 = 100_000.0;

/// Noise-space offset applied to every sample of one generation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeededOffset {
    /// Offset added to grid X before scaling.
    pub offset_x: f64,
    /// Offset added to grid Z before scaling.
    pub offset_z: f64,
}

impl SeededOffset {
    /// Combine the base offsets with a perturbation drawn from `seed`.
    ///
    /// Pure function of its inputs: ChaCha8 produces the same stream for the
    /// same seed on every platform.
    pub fn derive(seed: u64, base_x: f32, base_z: f32) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let jitter_x = rng.random_range(-OFFSET_RANGE..OFFSET_RANGE);
        let jitter_z = rng.random_range(-OFFSET_RANGE..OFFSET_RANGE);
        Self {
            offset_x: base_x as f64 + jitter_x,
            offset_z: base_z as f64 + jitter_z,
        }
    }

    /// An offset with no perturbation.
    pub const ZERO: Self = Self {
        offset_x: 0.0,
        offset_z: 0.0,
    };
}
