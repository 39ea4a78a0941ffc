use serde::{Deserialize, Serialize};

/// How a proximity value in `[-1, 1]` is turned into a playback rate.
/// The mapper clamps the returned rate to the configured bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatePolicy {
    /// Maps `proximity` linearly onto `[min_rate, max_rate]`: -1 gives
    /// `min_rate`, 1 gives `max_rate` and 0 gives the midpoint.
    Linear,
    /// `|(sensitivity - |proximity|) / sensitivity|`. Not monotonic in
    /// `proximity` and unbounded before clamping.
    SensitivityRatio,
}

impl Default for RatePolicy {
    fn default() -> Self {
        RatePolicy::Linear
    }
}

impl RatePolicy {
    /// Returns the unclamped rate for `proximity`.
    pub fn rate(&self, proximity: f64, min_rate: f64, max_rate: f64, sensitivity: f64) -> f64 {
        match self {
            RatePolicy::Linear => min_rate + (proximity + 1.0) * 0.5 * (max_rate - min_rate),
            RatePolicy::SensitivityRatio => {
                // Reachable by direct callers; the mapper only passes validated sensitivities.
                if !(sensitivity > 0.0) {
                    return 1.0;
                }
                ((sensitivity - proximity.abs()) / sensitivity).abs()
            }
        }
    }
}
