//! One-dimensional height remapping curves.
//!
//! The generator treats a curve as an opaque `evaluate(t)` capability over
//! `[0, 1]`. [`CurveSpec`] is the serializable form used by configuration
//! files; hosts with their own curve types implement [`HeightCurve`] directly.

use serde::{Deserialize, Serialize};

/// A scalar remapping function sampled on `[0, 1]`.
pub trait HeightCurve: Send + Sync {
    /// Evaluate the curve at `t`.
    fn evaluate(&self, t: f32) -> f32;
}

impl<F> HeightCurve for F
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    fn evaluate(&self, t: f32) -> f32 {
        self(t)
    }
}

/// A single control point of a [`KeyframeCurve`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Keyframe {
    /// Position on the input axis.
    pub time: f32,
    /// Curve value at `time`.
    pub value: f32,
    /// Slope arriving at this key from the left.
    #[serde(default)]
    pub in_tangent: f32,
    /// Slope leaving this key to the right.
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    /// Create a key with explicit tangents.
    pub fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }

    /// Create a key with flat tangents.
    pub fn flat(time: f32, value: f32) -> Self {
        Self::new(time, value, 0.0, 0.0)
    }
}

/// Cubic Hermite keyframe curve, clamped to the first and last key outside its range.
///
/// Keys are kept sorted by time. An empty curve evaluates to `0`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct KeyframeCurve {
    keys: Vec<Keyframe>,
}

impl KeyframeCurve {
    /// Build a curve from keys in any order.
    pub fn new(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self { keys }
    }

    /// Straight line from `(0, 0)` to `(1, 1)`.
    pub fn linear() -> Self {
        Self::new(vec![
            Keyframe::new(0.0, 0.0, 1.0, 1.0),
            Keyframe::new(1.0, 1.0, 1.0, 1.0),
        ])
    }

    /// Sorted control points.
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }
}

impl From<Vec<Keyframe>> for KeyframeCurve {
    fn from(keys: Vec<Keyframe>) -> Self {
        Self::new(keys)
    }
}

impl From<KeyframeCurve> for Vec<Keyframe> {
    fn from(curve: KeyframeCurve) -> Self {
        curve.keys
    }
}

impl HeightCurve for KeyframeCurve {
    fn evaluate(&self, t: f32) -> f32 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return 0.0,
        };
        if t <= first.time {
            return first.value;
        }
        if t >= last.time {
            return last.value;
        }

        // First key strictly after `t`; guaranteed to be in 1..len by the clamps above.
        let upper = self.keys.partition_point(|k| k.time <= t);
        let k0 = &self.keys[upper - 1];
        let k1 = &self.keys[upper];

        let dt = k1.time - k0.time;
        if dt <= 0.0 {
            return k1.value;
        }

        let s = (t - k0.time) / dt;
        let s2 = s * s;
        let s3 = s2 * s;

        let h00 = 2.0 * s3 - 3.0 * s2 + 1.0;
        let h10 = s3 - 2.0 * s2 + s;
        let h01 = -2.0 * s3 + 3.0 * s2;
        let h11 = s3 - s2;

        h00 * k0.value + h10 * dt * k0.out_tangent + h01 * k1.value + h11 * dt * k1.in_tangent
    }
}

/// Serializable curve choice for configuration files.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub enum CurveSpec {
    /// Identity: `evaluate(t) == t`.
    #[default]
    Linear,
    /// Hermite keyframes.
    Keyframes(KeyframeCurve),
}

impl HeightCurve for CurveSpec {
    fn evaluate(&self, t: f32) -> f32 {
        match self {
            CurveSpec::Linear => t,
            CurveSpec::Keyframes(curve) => curve.evaluate(t),
        }
    }
}
