use log::{debug, trace, warn};

use crate::common::Vector3;
use crate::motion::config::{validate_reference, RateMappingConfig};
use crate::motion::error::{Error, Result};
use crate::motion::rate_result::{RateResult, SpeedBand};

#[derive(Debug, Copy, Clone, PartialEq)]
enum State {
    Idle,
    Active { reference: Vector3 },
}

/// * Captures a reference orientation on [start](MotionRateMapper::start)
/// * Maps each incoming gravity sample to a playback rate and speed band
/// * Emits nothing while idle
pub struct MotionRateMapper {
    config: RateMappingConfig,
    state: State,
    /// For counting the samples emitted since the mapper was created.
    processed_sample_count: usize,
    last_result: Option<RateResult>,
}

impl MotionRateMapper {
    pub fn new() -> Self {
        MotionRateMapper {
            config: RateMappingConfig::default(),
            state: State::Idle,
            processed_sample_count: 0,
            last_result: None,
        }
    }

    /// Creates an idle mapper, rejecting invalid configurations up front.
    pub fn from_options(config: RateMappingConfig) -> Result<Self> {
        config.validate().map_err(|err| {
            warn!("Rejected rate mapping config: {}", err);
            err
        })?;
        Ok(MotionRateMapper {
            config,
            ..MotionRateMapper::new()
        })
    }

    pub fn config(&self) -> &RateMappingConfig {
        &self.config
    }

    /// Replaces the configuration. Only allowed while idle.
    pub fn set_config(&mut self, config: RateMappingConfig) -> Result<()> {
        if self.is_active() {
            return Err(Error::MapperActive);
        }
        config.validate().map_err(|err| {
            warn!("Rejected rate mapping config: {}", err);
            err
        })?;
        self.config = config;
        Ok(())
    }

    /// Snapshots `reference`, or the configured reference vector if `None`,
    /// and starts accepting samples. Calling this while already active
    /// replaces the reference.
    pub fn start(&mut self, reference: Option<Vector3>) -> Result<()> {
        self.config.validate()?;
        let reference = reference.unwrap_or(self.config.reference_vector);
        validate_reference(&reference).map_err(|err| {
            warn!("Rejected reference orientation: {}", err);
            err
        })?;
        debug!(
            "Motion rate mapper active, reference ({}, {}, {})",
            reference.x, reference.y, reference.z
        );
        self.state = State::Active { reference };
        Ok(())
    }

    /// Stops accepting samples. No rate is emitted after this returns.
    pub fn stop(&mut self) {
        if self.is_active() {
            debug!("Motion rate mapper idle");
        }
        self.state = State::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, State::Active { .. })
    }

    /// The captured reference orientation, if active.
    pub fn reference(&self) -> Option<Vector3> {
        match self.state {
            State::Active { reference } => Some(reference),
            State::Idle => None,
        }
    }

    /// Maps a sample without touching the lifecycle. Uses the captured
    /// reference when active and the configured one otherwise, so it
    /// can be used to preview rates.
    pub fn map(&self, sample: &Vector3) -> RateResult {
        let reference = self.reference().unwrap_or(self.config.reference_vector);
        map_sample(&self.config, &reference, sample)
    }

    /// Handles one sample from the motion service. While active, passes the
    /// result to `on_rate_updated` and returns true. While idle the sample
    /// is dropped and false is returned.
    pub fn on_sample<F>(&mut self, sample: Vector3, on_rate_updated: F) -> bool
    where
        F: FnOnce(&RateResult),
    {
        let reference = match self.state {
            State::Active { reference } => reference,
            State::Idle => return false,
        };
        let result = map_sample(&self.config, &reference, &sample);
        self.processed_sample_count += 1;
        self.last_result = Some(result);
        on_rate_updated(&result);
        true
    }

    /// Handles a batch of samples, invoking `result_handler` with the index
    /// of each sample and its result. Returns the number of emitted results,
    /// which is zero while idle.
    pub fn process<F>(&mut self, samples: &[Vector3], mut result_handler: F) -> usize
    where
        F: FnMut(usize, &RateResult),
    {
        let mut emitted = 0;
        for (sample_index, sample) in samples.iter().enumerate() {
            if self.on_sample(*sample, |result| result_handler(sample_index, result)) {
                emitted += 1;
            }
        }
        emitted
    }

    /// Returns the number of samples mapped while active since the
    /// mapper was created.
    pub fn processed_sample_count(&self) -> usize {
        self.processed_sample_count
    }

    /// Returns the most recently emitted result.
    pub fn last_result(&self) -> Option<&RateResult> {
        self.last_result.as_ref()
    }
}

impl Default for MotionRateMapper {
    fn default() -> Self {
        MotionRateMapper::new()
    }
}

fn map_sample(config: &RateMappingConfig, reference: &Vector3, sample: &Vector3) -> RateResult {
    // min/max rather than clamp, which panics if the bounds are inverted.
    let bound = |rate: f64| rate.max(config.min_rate).min(config.max_rate);

    if !sample.is_finite() {
        warn!(
            "Ignoring non-finite motion sample ({}, {}, {})",
            sample.x, sample.y, sample.z
        );
        return RateResult {
            rate: bound(config.neutral_rate()),
            band: SpeedBand::Error,
            proximity: 0.0,
        };
    }

    let proximity = reference.dot_ratio(sample);
    let rate = bound(config.policy.rate(
        proximity,
        config.min_rate,
        config.max_rate,
        config.sensitivity,
    ));
    let band = SpeedBand::classify(rate, config.slow_threshold, config.fast_threshold);
    trace!("proximity {} -> rate {} ({})", proximity, rate, band);
    RateResult {
        rate,
        band,
        proximity,
    }
}
