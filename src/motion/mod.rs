//! Maps device orientation to an audio playback rate.
//!
//! A motion service reports the direction of gravity relative to the device
//! at a fixed cadence (see [DEFAULT_SAMPLE_INTERVAL]). The mapper compares
//! each sample to a reference orientation captured on start, using the
//! normalized dot product of the two vectors as a proximity value in
//! `[-1, 1]`, and turns the proximity into a rate within the configured
//! bounds together with a [SpeedBand] for display.
//!
//! # Examples
//! ```
//! use micro_tilt::common::Vector3;
//! use micro_tilt::motion::{MotionRateMapper, RateMappingConfig, SpeedBand};
//!
//! let config = RateMappingConfig::default().with_rate_range(0.5, 1.5);
//! let mut mapper = MotionRateMapper::from_options(config).unwrap();
//!
//! // Gravity pointing out of the back of the device, i.e lying flat face up.
//! mapper.start(Some(Vector3::new(0.0, 0.0, -1.0))).unwrap();
//!
//! let samples = [
//!     Vector3::new(0.0, 0.0, -1.0), // flat, matches the reference
//!     Vector3::new(0.0, -1.0, 0.0), // held upright
//!     Vector3::new(0.0, 0.0, 1.0),  // face down
//! ];
//! let mut bands = Vec::new();
//! mapper.process(&samples[..], |_sample_index, result| {
//!     // Apply result.rate to the playing sound here.
//!     bands.push(result.band);
//! });
//! assert_eq!(bands, vec![SpeedBand::Fast, SpeedBand::Normal, SpeedBand::Slow]);
//!
//! // Samples arriving after stop are dropped.
//! mapper.stop();
//! assert!(!mapper.on_sample(samples[0], |_| unreachable!()));
//! ```

mod config;
mod error;
mod mapper;
mod policy;
mod rate_result;

pub use config::{
    RateMappingConfig, DEFAULT_FAST_THRESHOLD, DEFAULT_MAX_RATE, DEFAULT_MIN_RATE,
    DEFAULT_REFERENCE_VECTOR, DEFAULT_SAMPLE_INTERVAL, DEFAULT_SENSITIVITY,
    DEFAULT_SLOW_THRESHOLD,
};
pub use error::{ConfigError, Error, Result};
pub use mapper::MotionRateMapper;
pub use policy::RatePolicy;
pub use rate_result::{RateResult, SpeedBand};
