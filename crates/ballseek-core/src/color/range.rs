use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_HUE, DEFAULT_LUMINANCE, DEFAULT_SATURATION};
use crate::error::{BallseekError, Result};

use super::hls::Hls;

/// A closed numeric interval `[min, max]`.
///
/// Serialized as a two-element array. Deserialization runs the same
/// validation as [`Interval::new`], so a config file with `min > max`
/// never produces a value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "[f64; 2]", into = "[f64; 2]")]
pub struct Interval {
    min: f64,
    max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if min.is_nan() || max.is_nan() || min > max {
            return Err(BallseekError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Build from bounds already known to be ordered, e.g. compiled-in defaults.
    pub(crate) const fn from_ordered(bounds: [f64; 2]) -> Self {
        Self {
            min: bounds[0],
            max: bounds[1],
        }
    }

    /// `[min, NO_UPPER_BOUND]`.
    pub fn at_least(min: f64) -> Result<Self> {
        Self::new(min, crate::consts::NO_UPPER_BOUND)
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Inclusive on both ends. NaN is never contained.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = BallseekError;

    fn try_from(bounds: [f64; 2]) -> Result<Self> {
        Self::new(bounds[0], bounds[1])
    }
}

impl From<Interval> for [f64; 2] {
    fn from(interval: Interval) -> Self {
        [interval.min, interval.max]
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

/// Hue, saturation and luminance bounds in the 8-bit HLS scale
/// (hue 0..180, saturation and luminance 0..255).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HlsRange {
    pub hue: Interval,
    pub saturation: Interval,
    pub luminance: Interval,
}

impl HlsRange {
    pub fn new(hue: Interval, saturation: Interval, luminance: Interval) -> Self {
        Self {
            hue,
            saturation,
            luminance,
        }
    }

    pub fn contains(&self, hls: Hls) -> bool {
        self.hue.contains(hls.h as f64)
            && self.saturation.contains(hls.s as f64)
            && self.luminance.contains(hls.l as f64)
    }
}

impl Default for HlsRange {
    fn default() -> Self {
        Self {
            hue: Interval::from_ordered(DEFAULT_HUE),
            saturation: Interval::from_ordered(DEFAULT_SATURATION),
            luminance: Interval::from_ordered(DEFAULT_LUMINANCE),
        }
    }
}
