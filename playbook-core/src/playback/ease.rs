use std::str::FromStr;

use crate::foundation::core::{Point, Vec2};
use crate::foundation::error::PlaybookError;

/// Interpolation contract for positions moved during playback.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

impl Lerp for Point {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Point::new(
            <f64 as Lerp>::lerp(&a.x, &b.x, t),
            <f64 as Lerp>::lerp(&a.y, &b.y, t),
        )
    }
}

/// Timing curve applied to segment progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// Constant speed.
    #[default]
    Linear,
    /// Accelerate from rest.
    InQuad,
    /// Decelerate to rest.
    OutQuad,
    /// Accelerate, then decelerate.
    InOutQuad,
    /// Stronger accelerate-then-decelerate.
    InOutCubic,
}

impl Ease {
    /// Every curve, in declaration order.
    pub const ALL: [Ease; 5] = [
        Self::Linear,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InOutCubic,
    ];

    /// Map linear progress `t` onto the curve. Input is clamped to `[0, 1]` and the endpoints are
    /// fixed for every curve.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => t * (2.0 - t),
            Self::InOutQuad if t < 0.5 => 2.0 * t * t,
            Self::InOutQuad => 1.0 - (2.0 - 2.0 * t).powi(2) / 2.0,
            Self::InOutCubic if t < 0.5 => 4.0 * t.powi(3),
            Self::InOutCubic => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
        }
    }

    /// Kebab-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::InQuad => "in-quad",
            Self::OutQuad => "out-quad",
            Self::InOutQuad => "in-out-quad",
            Self::InOutCubic => "in-out-cubic",
        }
    }
}

impl FromStr for Ease {
    type Err = PlaybookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PlaybookError::validation(format!("unknown ease \"{s}\"")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/playback/ease.rs"]
mod tests;
