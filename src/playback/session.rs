use log::{debug, info};

use crate::common::Vector3;
use crate::motion::{MotionRateMapper, RateMappingConfig, RateResult};
use crate::playback::effects::PlaybackEffect;
use crate::playback::error::{Error, Result};
use crate::playback::service::{PlaybackService, Recording};

/// Plays a recording through an injected [PlaybackService] and, for
/// [PlaybackEffect::Motion], drives its rate from orientation samples.
///
/// The motion service pushes samples to [on_sample](MotionPlayback::on_sample);
/// the host forwards the audio engine's "finished" notification to
/// [playback_finished](MotionPlayback::playback_finished).
pub struct MotionPlayback<S: PlaybackService> {
    service: S,
    mapper: MotionRateMapper,
    recording: Recording,
    current_effect: Option<PlaybackEffect>,
}

impl<S: PlaybackService> MotionPlayback<S> {
    pub fn new(service: S, recording: Recording) -> Self {
        MotionPlayback {
            service,
            mapper: MotionRateMapper::new(),
            recording,
            current_effect: None,
        }
    }

    pub fn from_options(service: S, recording: Recording, config: RateMappingConfig) -> Result<Self> {
        Ok(MotionPlayback {
            service,
            mapper: MotionRateMapper::from_options(config)?,
            recording,
            current_effect: None,
        })
    }

    /// Stops whatever is playing and starts `effect` from the beginning.
    pub fn play(&mut self, effect: PlaybackEffect) -> Result<()> {
        self.stop()?;

        let settings = effect.settings();
        info!("Playing '{}' with {} effect", self.recording.title, effect);

        if effect.is_motion_controlled() {
            // Capture the reference before audio starts so the first sample
            // is already mapped against it.
            self.mapper.start(None)?;
        }

        let path = self.recording.path.as_path();
        let started = match settings.pitch_cents {
            Some(pitch_cents) => self.service.play_with_pitch(path, pitch_cents, settings.rate),
            None => self.service.play(path, settings.rate),
        };
        if let Err(err) = started {
            self.mapper.stop();
            return Err(err);
        }

        self.current_effect = Some(effect);
        Ok(())
    }

    /// Forwards a motion sample. While motion playback is running, the
    /// resulting rate is applied to the playing sound and returned for
    /// display. Returns `None` otherwise.
    ///
    /// If the service rejects the rate, the result is returned inside
    /// [Error::RateNotApplied] so the caller can still display it.
    pub fn on_sample(&mut self, gravity: Vector3) -> Result<Option<RateResult>> {
        let mut emitted = None;
        self.mapper.on_sample(gravity, |result| emitted = Some(*result));
        if let Some(result) = emitted {
            self.service
                .set_rate(result.rate)
                .map_err(|err| Error::RateNotApplied {
                    result,
                    source: Box::new(err),
                })?;
        }
        Ok(emitted)
    }

    /// Stops playback and motion tracking.
    pub fn stop(&mut self) -> Result<()> {
        self.mapper.stop();
        self.current_effect = None;
        self.service.stop()
    }

    /// Handles the audio engine reporting the end of the recording.
    pub fn playback_finished(&mut self) {
        debug!("Playback of '{}' finished", self.recording.title);
        self.mapper.stop();
        self.current_effect = None;
    }

    pub fn is_playing(&self) -> bool {
        self.current_effect.is_some()
    }

    pub fn current_effect(&self) -> Option<PlaybackEffect> {
        self.current_effect
    }

    pub fn recording(&self) -> &Recording {
        &self.recording
    }

    pub fn mapper(&self) -> &MotionRateMapper {
        &self.mapper
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Play(PathBuf, f64),
        PlayWithPitch(PathBuf, f64, f64),
        SetRate(f64),
        Stop,
    }

    #[derive(Default)]
    struct FakeService {
        calls: Vec<Call>,
        fail_play: bool,
        fail_set_rate: bool,
    }

    impl PlaybackService for FakeService {
        fn play(&mut self, file: &Path, rate: f64) -> Result<()> {
            if self.fail_play {
                return Err(Error::service("no audio device"));
            }
            self.calls.push(Call::Play(file.to_path_buf(), rate));
            Ok(())
        }

        fn play_with_pitch(&mut self, file: &Path, pitch_cents: f64, rate: f64) -> Result<()> {
            self.calls.push(Call::PlayWithPitch(file.to_path_buf(), pitch_cents, rate));
            Ok(())
        }

        fn set_rate(&mut self, rate: f64) -> Result<()> {
            if self.fail_set_rate {
                return Err(Error::service("engine stopped"));
            }
            self.calls.push(Call::SetRate(rate));
            Ok(())
        }

        fn stop(&mut self) -> Result<()> {
            self.calls.push(Call::Stop);
            Ok(())
        }
    }

    fn session() -> MotionPlayback<FakeService> {
        let config = RateMappingConfig::default().with_rate_range(0.5, 1.5);
        MotionPlayback::from_options(
            FakeService::default(),
            Recording::new("/tmp/recording.wav", "recording"),
            config,
        )
        .unwrap()
    }

    #[test]
    fn test_pitch_effects_use_pitch_playback() {
        let mut playback = session();
        playback.play(PlaybackEffect::Chipmunk).unwrap();
        playback.play(PlaybackEffect::DarthVader).unwrap();
        let path = PathBuf::from("/tmp/recording.wav");
        assert_eq!(
            playback.service().calls,
            vec![
                Call::Stop,
                Call::PlayWithPitch(path.clone(), 1200.0, 1.0),
                Call::Stop,
                Call::PlayWithPitch(path, -1000.0, 0.8),
            ]
        );
        assert_eq!(playback.current_effect(), Some(PlaybackEffect::DarthVader));
        assert!(!playback.mapper().is_active());
    }

    #[test]
    fn test_samples_ignored_without_motion_effect() {
        let mut playback = session();
        playback.play(PlaybackEffect::Slow).unwrap();
        assert_eq!(playback.on_sample(Vector3::new(0.0, 0.0, -1.0)).unwrap(), None);
        assert!(!playback.service().calls.iter().any(|call| matches!(call, Call::SetRate(_))));
    }

    #[test]
    fn test_motion_effect_applies_rates() {
        let mut playback = session();
        playback.play(PlaybackEffect::Motion).unwrap();
        assert!(playback.mapper().is_active());

        let result = playback.on_sample(Vector3::new(0.0, 0.0, 1.0)).unwrap().unwrap();
        assert_eq!(result.rate, 0.5);
        assert_eq!(playback.service().calls.last(), Some(&Call::SetRate(0.5)));
    }

    #[test]
    fn test_rejected_rate_is_still_reported() {
        let mut playback = session();
        playback.play(PlaybackEffect::Motion).unwrap();
        playback.service_mut().fail_set_rate = true;

        match playback.on_sample(Vector3::new(0.0, 0.0, -1.0)) {
            Err(Error::RateNotApplied { result, source }) => {
                assert_eq!(result.rate, 1.5);
                assert_eq!(playback.mapper().last_result(), Some(&result));
                assert!(matches!(*source, Error::Service(_)));
            }
            other => panic!("expected RateNotApplied, got {:?}", other),
        }
        assert!(!playback.service().calls.iter().any(|call| matches!(call, Call::SetRate(_))));
    }

    #[test]
    fn test_finished_stops_motion() {
        let mut playback = session();
        playback.play(PlaybackEffect::Motion).unwrap();
        playback.playback_finished();
        assert!(!playback.is_playing());
        assert!(!playback.mapper().is_active());

        let calls_before = playback.service().calls.len();
        assert_eq!(playback.on_sample(Vector3::new(0.0, 0.0, -1.0)).unwrap(), None);
        assert_eq!(playback.service().calls.len(), calls_before);
    }

    #[test]
    fn test_failed_start_leaves_mapper_idle() {
        let mut playback = session();
        playback.service_mut().fail_play = true;
        let err = playback.play(PlaybackEffect::Motion).unwrap_err();
        assert!(matches!(err, Error::Service(_)));
        assert!(!playback.mapper().is_active());
        assert!(!playback.is_playing());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = RateMappingConfig::default().with_rate_range(2.0, 2.0);
        let result = MotionPlayback::from_options(
            FakeService::default(),
            Recording::new("a.wav", "a"),
            config,
        );
        assert!(matches!(result, Err(Error::Motion(_))));
    }
}
