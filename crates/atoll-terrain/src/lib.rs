//! Heightmap synthesis for island terrain: seeded multi-octave noise, an
//! island falloff mask with parameter-keyed caching, and curve remapping.

mod config;
mod curve;
mod error;
mod falloff;
mod height_field;
mod noise_field;
mod seed;

pub mod debug_viz;

pub use config::{TerrainConfig, lod_increment};
pub use curve::{CurveSpec, HeightCurve, Keyframe, KeyframeCurve};
pub use error::TerrainConfigError;
pub use falloff::{FalloffCache, FalloffMask, evaluate_falloff};
pub use height_field::{HeightField, HeightSource, sample_grid};
pub use noise_field::{NOISE_SCALE_DIVISOR, NoiseField, NoiseParams};
pub use seed::{OFFSET_RANGE, SeededOffset};
