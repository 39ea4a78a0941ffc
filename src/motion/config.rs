use core::f64::consts::FRAC_PI_8;
use core::time::Duration;

use serde::{Deserialize, Serialize};

use crate::common::Vector3;
use crate::motion::error::ConfigError;
use crate::motion::policy::RatePolicy;

/// Resting orientation: gravity pointing out of the back of the device.
pub const DEFAULT_REFERENCE_VECTOR: Vector3 = Vector3::new(0.0, 0.0, -1.0);
pub const DEFAULT_SENSITIVITY: f64 = FRAC_PI_8;
pub const DEFAULT_MIN_RATE: f64 = 0.5;
pub const DEFAULT_MAX_RATE: f64 = 2.0;
pub const DEFAULT_SLOW_THRESHOLD: f64 = 0.5;
pub const DEFAULT_FAST_THRESHOLD: f64 = 1.5;
/// The cadence motion services are expected to deliver samples at.
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_millis(20);

/// Options for [MotionRateMapper](super::MotionRateMapper).
///
/// Missing fields take their default values when deserializing, so a host
/// can store only the options it overrides:
/// ```
/// use micro_tilt::motion::RateMappingConfig;
///
/// let config: RateMappingConfig = serde_json::from_str(r#"{ "max_rate": 1.5 }"#).unwrap();
/// assert_eq!(config.min_rate, 0.5);
/// assert_eq!(config.max_rate, 1.5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RateMappingConfig {
    /// Orientation used when [start](super::MotionRateMapper::start) is
    /// called without an explicit reference.
    pub reference_vector: Vector3,
    /// Only used by [RatePolicy::SensitivityRatio].
    pub sensitivity: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    /// Rates at or below this are [Slow](super::SpeedBand::Slow).
    pub slow_threshold: f64,
    /// Rates at or above this are [Fast](super::SpeedBand::Fast).
    pub fast_threshold: f64,
    pub policy: RatePolicy,
}

impl Default for RateMappingConfig {
    fn default() -> Self {
        RateMappingConfig {
            reference_vector: DEFAULT_REFERENCE_VECTOR,
            sensitivity: DEFAULT_SENSITIVITY,
            min_rate: DEFAULT_MIN_RATE,
            max_rate: DEFAULT_MAX_RATE,
            slow_threshold: DEFAULT_SLOW_THRESHOLD,
            fast_threshold: DEFAULT_FAST_THRESHOLD,
            policy: RatePolicy::Linear,
        }
    }
}

impl RateMappingConfig {
    pub fn with_reference_vector(mut self, reference_vector: Vector3) -> Self {
        self.reference_vector = reference_vector;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_rate_range(mut self, min_rate: f64, max_rate: f64) -> Self {
        self.min_rate = min_rate;
        self.max_rate = max_rate;
        self
    }

    pub fn with_thresholds(mut self, slow_threshold: f64, fast_threshold: f64) -> Self {
        self.slow_threshold = slow_threshold;
        self.fast_threshold = fast_threshold;
        self
    }

    pub fn with_policy(mut self, policy: RatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The rate halfway between the bounds, reported for rejected samples.
    pub fn neutral_rate(&self) -> f64 {
        self.min_rate + 0.5 * (self.max_rate - self.min_rate)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_rate, self.max_rate);
        if !min.is_finite() || !max.is_finite() || !(min > 0.0) || !(min < max) {
            return Err(ConfigError::InvalidRateBounds { min, max });
        }
        if !self.sensitivity.is_finite() || !(self.sensitivity > 0.0) {
            return Err(ConfigError::InvalidSensitivity(self.sensitivity));
        }
        let (slow, fast) = (self.slow_threshold, self.fast_threshold);
        if !slow.is_finite() || !fast.is_finite() || !(slow < fast) {
            return Err(ConfigError::InvalidThresholds { slow, fast });
        }
        validate_reference(&self.reference_vector)
    }
}

pub(crate) fn validate_reference(reference: &Vector3) -> Result<(), ConfigError> {
    if !reference.is_finite() || !(reference.length() > 0.0) {
        return Err(ConfigError::DegenerateReference {
            x: reference.x,
            y: reference.y,
            z: reference.z,
        });
    }
    Ok(())
}
