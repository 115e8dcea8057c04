//! Island falloff mask and its parameter-keyed cache.
//!
//! The mask rises from `0` at the grid centre towards `1` at the edges.
//! Subtracting it from the raw noise pushes the borders of the terrain down,
//! which produces island silhouettes.

use tracing::debug;

/// Shape function of the falloff mask.
///
/// `evaluate(v, a, b) = v^a / (v^a + (b - b*v)^a)`. `a` controls steepness and
/// `b` shifts the transition point. A zero denominator yields `1.0`.
pub fn evaluate_falloff(value: f32, a: f32, b: f32) -> f32 {
    let numerator = value.powf(a);
    let denominator = numerator + (b - b * value).powf(a);
    if denominator == 0.0 {
        return 1.0;
    }
    numerator / denominator
}

/// Square grid of falloff values in `[0, 1]`.
#[derive(Clone, Debug, PartialEq)]
pub struct FalloffMask {
    size: u32,
    start: f32,
    end: f32,
    /// Row-major by `y`: index `y * size + x`.
    values: Vec<f32>,
}

impl FalloffMask {
    /// Compute a `size × size` mask with the given shape parameters.
    pub fn build(size: u32, start: f32, end: f32) -> Self {
        let half = size / 2;
        let half_f = half.max(1) as f32;
        let mut values = Vec::with_capacity(size as usize * size as usize);

        for y in 0..size {
            let ny = y.abs_diff(half) as f32 / half_f;
            for x in 0..size {
                let nx = x.abs_diff(half) as f32 / half_f;
                let t = nx.max(ny).clamp(0.0, 1.0);
                values.push(evaluate_falloff(t, start, end));
            }
        }

        Self {
            size,
            start,
            end,
            values,
        }
    }

    /// Side length of the mask.
    pub fn dimension(&self) -> u32 {
        self.size
    }

    /// The `(size, start, end)` triple this mask was built from.
    pub fn key(&self) -> (u32, f32, f32) {
        (self.size, self.start, self.end)
    }

    /// Mask value at `(x, y)`, with both coordinates clamped into the grid.
    pub fn get(&self, x: i64, y: i64) -> f32 {
        if self.size == 0 {
            return 0.0;
        }
        let max = self.size as i64 - 1;
        let cx = x.clamp(0, max) as usize;
        let cy = y.clamp(0, max) as usize;
        self.values[cy * self.size as usize + cx]
    }

    /// All values in row-major order.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    fn matches(&self, size: u32, start: f32, end: f32) -> bool {
        self.size == size && self.start == start && self.end == end
    }
}

/// Holds the most recently built [`FalloffMask`] and rebuilds it only when its
/// parameters change.
#[derive(Clone, Debug, Default)]
pub struct FalloffCache {
    mask: Option<FalloffMask>,
    builds: u64,
}

impl FalloffCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild the mask if nothing is cached or the parameter triple differs.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn refresh(&mut self, size: u32, start: f32, end: f32) -> bool {
        if let Some(mask) = &self.mask
            && mask.matches(size, start, end)
        {
            return false;
        }

        debug!(size, start, end, "rebuilding falloff mask");
        self.mask = Some(FalloffMask::build(size, start, end));
        self.builds += 1;
        true
    }

    /// The cached mask, if any.
    pub fn mask(&self) -> Option<&FalloffMask> {
        self.mask.as_ref()
    }

    /// Drop the cached mask so the next refresh rebuilds.
    pub fn invalidate(&mut self) {
        self.mask = None;
    }

    /// Number of times a mask has been built by this cache.
    pub fn build_count(&self) -> u64 {
        self.builds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_at_zero_is_zero() {
        for (a, b) in [(1.0, 1.0), (2.0, 2.8), (3.0, 2.2), (0.5, 4.0), (2.0, -2.8)] {
            assert_eq!(evaluate_falloff(0.0, a, b), 0.0, "a={a}, b={b}");
        }
    }

    #[test]
    fn test_evaluate_at_one_saturates() {
        for (a, b) in [(1.0, 1.0), (2.0, 2.8), (3.0, 2.2)] {
            let v = evaluate_falloff(1.0, a, b);
            assert!(v.is_finite());
            assert!((v - 1.0).abs() < 1e-6, "a={a}, b={b} gave {v}");
        }
    }

    #[test]
    fn test_zero_denominator_defined_as_one() {
        assert_eq!(evaluate_falloff(0.0, 2.0, 0.0), 1.0);
    }

    #[test]
    fn test_evaluate_is_monotonic() {
        let mut prev = evaluate_falloff(0.0, 3.0, 2.2);
        for i in 1..=100 {
            let v = evaluate_falloff(i as f32 / 100.0, 3.0, 2.2);
            assert!(v >= prev, "falloff decreased at step {i}");
            prev = v;
        }
    }

    #[test]
    fn test_mask_dimensions_and_range() {
        let mask = FalloffMask::build(33, 3.0, 2.2);
        assert_eq!(mask.dimension(), 33);
        assert_eq!(mask.values().len(), 33 * 33);
        assert!(mask.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_mask_centre_zero_edges_one() {
        let mask = FalloffMask::build(241, 3.0, 2.2);
        assert_eq!(mask.get(120, 120), 0.0);
        assert!((mask.get(0, 0) - 1.0).abs() < 1e-6);
        assert!((mask.get(240, 120) - 1.0).abs() < 1e-6);
        assert!(mask.get(60, 120) < mask.get(20, 120));
    }

    #[test]
    fn test_mask_is_symmetric() {
        let mask = FalloffMask::build(65, 2.0, 2.8);
        for y in 0..65 {
            for x in 0..65 {
                assert_eq!(mask.get(x, y), mask.get(y, x));
                assert_eq!(mask.get(x, y), mask.get(64 - x, y));
            }
        }
    }

    #[test]
    fn test_lookup_clamped_into_grid() {
        let mask = FalloffMask::build(9, 3.0, 2.2);
        assert_eq!(mask.get(-5, -5), mask.get(0, 0));
        assert_eq!(mask.get(100, 4), mask.get(8, 4));
    }

    #[test]
    fn test_cache_reuses_identical_parameters() {
        let mut cache = FalloffCache::new();
        assert!(cache.refresh(241, 2.0, 2.8));
        let first_ptr = cache.mask().unwrap().values().as_ptr();
        let first = cache.mask().unwrap().clone();

        assert!(!cache.refresh(241, 2.0, 2.8));
        assert_eq!(cache.build_count(), 1);
        assert_eq!(cache.mask().unwrap().values().as_ptr(), first_ptr);
        assert_eq!(cache.mask().unwrap(), &first);
    }

    #[test]
    fn test_cache_rebuilds_on_changed_end() {
        let mut cache = FalloffCache::new();
        cache.refresh(241, 2.0, 2.8);
        let before = cache.mask().unwrap().clone();

        assert!(cache.refresh(241, 2.0, 3.0));
        assert_eq!(cache.build_count(), 2);
        let after = cache.mask().unwrap();
        assert_eq!(after.key(), (241, 2.0, 3.0));
        assert_ne!(after.values(), before.values());
    }

    #[test]
    fn test_cache_rebuilds_on_changed_size() {
        let mut cache = FalloffCache::new();
        cache.refresh(17, 3.0, 2.2);
        assert!(cache.refresh(33, 3.0, 2.2));
        assert_eq!(cache.mask().unwrap().dimension(), 33);
    }

    #[test]
    fn test_cache_rebuilds_on_changed_start() {
        let mut cache = FalloffCache::new();
        cache.refresh(65, 2.0, 2.8);
        let before = cache.mask().unwrap().clone();

        assert!(cache.refresh(65, 3.0, 2.8));
        assert_eq!(cache.build_count(), 2);
        let after = cache.mask().unwrap();
        assert_eq!(after.key(), (65, 3.0, 2.8));
        assert_ne!(after.values(), before.values());
    }

    #[test]
    fn test_invalidate_forces_rebuild() {
        let mut cache = FalloffCache::new();
        cache.refresh(17, 3.0, 2.2);
        cache.invalidate();
        assert!(cache.mask().is_none());
        assert!(cache.refresh(17, 3.0, 2.2));
        assert_eq!(cache.build_count(), 2);
    }
}
