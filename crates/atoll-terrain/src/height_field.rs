//! Per-cell terrain height: noise, island falloff and curve remapping combined.

use rayon::prelude::*;

use crate::curve::HeightCurve;
use crate::falloff::FalloffMask;
use crate::noise_field::NoiseField;

/// Anything that can report a height for an integer grid cell.
///
/// Implemented by [`HeightField`] and by plain closures, so meshing code can be
/// exercised against synthetic surfaces.
pub trait HeightSource: Sync {
    /// Height at grid cell `(x, z)`.
    fn height_at(&self, x: u32, z: u32) -> f32;
}

impl<F> HeightSource for F
where
    F: Fn(u32, u32) -> f32 + Sync,
{
    fn height_at(&self, x: u32, z: u32) -> f32 {
        self(x, z)
    }
}

/// Height provider bound to one generation's noise, mask and curve.
pub struct HeightField<'a> {
    noise: NoiseField,
    falloff: Option<&'a FalloffMask>,
    curve: &'a dyn HeightCurve,
    height_multiplier: f32,
}

impl<'a> HeightField<'a> {
    /// Bind a height field. Pass `None` for `falloff` to skip the island mask.
    pub fn new(
        noise: NoiseField,
        falloff: Option<&'a FalloffMask>,
        curve: &'a dyn HeightCurve,
        height_multiplier: f32,
    ) -> Self {
        Self {
            noise,
            falloff,
            curve,
            height_multiplier,
        }
    }

    /// Noise after falloff subtraction, before the curve and multiplier.
    ///
    /// Clamped to `[0, 1]` when a falloff mask is bound; raw noise otherwise.
    pub fn shaped_noise(&self, x: u32, z: u32) -> f32 {
        let y = self.noise.sample(x as f64, z as f64);
        match self.falloff {
            Some(mask) => (y - mask.get(x as i64, z as i64)).clamp(0.0, 1.0),
            None => y,
        }
    }
}

impl HeightSource for HeightField<'_> {
    /// `y * curve(y) * height_multiplier`, where `y` is [`HeightField::shaped_noise`].
    fn height_at(&self, x: u32, z: u32) -> f32 {
        let y = self.shaped_noise(x, z);
        y * self.curve.evaluate(y) * self.height_multiplier
    }
}

/// Sample `source` on every `increment`-th cell of a `size × size` grid.
///
/// Returns heights in row-major order (`z` outer, `x` inner). With `parallel`
/// set, rows are evaluated on the rayon pool and reassembled in order, so the
/// result is identical to the serial path.
pub fn sample_grid<S: HeightSource + ?Sized>(
    source: &S,
    size: u32,
    increment: u32,
    parallel: bool,
) -> Vec<f32> {
    let step = increment.max(1) as usize;
    let row = |z: u32| -> Vec<f32> {
        (0..size)
            .step_by(step)
            .map(|x| source.height_at(x, z))
            .collect()
    };

    let rows: Vec<u32> = (0..size).step_by(step).collect();
    if parallel {
        rows.into_par_iter().map(row).flatten().collect()
    } else {
        rows.into_iter().flat_map(row).collect()
    }
}
