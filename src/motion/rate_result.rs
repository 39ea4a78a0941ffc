use core::fmt;

use serde::{Deserialize, Serialize};

/// A coarse, displayable classification of a playback rate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedBand {
    Slow,
    Normal,
    Fast,
    /// The sample could not be interpreted, e.g because of NaN components.
    Error,
}

impl SpeedBand {
    /// Classifies a rate. Rates at or below `slow_threshold` are `Slow`,
    /// rates at or above `fast_threshold` are `Fast`.
    pub fn classify(rate: f64, slow_threshold: f64, fast_threshold: f64) -> SpeedBand {
        // Reachable by direct callers; the mapper only passes clamped rates.
        if rate.is_nan() {
            SpeedBand::Error
        } else if rate <= slow_threshold {
            SpeedBand::Slow
        } else if rate >= fast_threshold {
            SpeedBand::Fast
        } else {
            SpeedBand::Normal
        }
    }

    /// Status text for the band.
    pub fn label(&self) -> &'static str {
        match self {
            SpeedBand::Slow => "Slow",
            SpeedBand::Normal => "Normal",
            SpeedBand::Fast => "Fast",
            SpeedBand::Error => "Error",
        }
    }
}

impl fmt::Display for SpeedBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The outcome of mapping one orientation sample.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateResult {
    /// The playback rate to apply, within the configured bounds.
    pub rate: f64,
    /// Display classification of `rate`.
    pub band: SpeedBand,
    /// The dot ratio between the reference and the sample, in `[-1, 1]`.
    pub proximity: f64,
}

impl RateResult {
    /// True unless the sample was rejected. Rejected samples still
    /// carry a usable, in-range `rate`.
    pub fn is_valid(&self) -> bool {
        self.band != SpeedBand::Error
    }
}
