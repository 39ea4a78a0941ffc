use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::playback::error::Result;

/// A recorded sound file and its display title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recording {
    pub path: PathBuf,
    pub title: String,
}

impl Recording {
    pub fn new<P: Into<PathBuf>, T: Into<String>>(path: P, title: T) -> Self {
        Recording {
            path: path.into(),
            title: title.into(),
        }
    }
}

/// The audio subsystem that decodes and plays recordings. Implemented by
/// the host on top of its platform audio engine.
///
/// Completion is not part of this trait; the host forwards its "finished"
/// notification to [MotionPlayback::playback_finished](super::MotionPlayback::playback_finished).
pub trait PlaybackService {
    /// Starts playing `file` at `rate`, 1.0 being the recorded speed.
    fn play(&mut self, file: &Path, rate: f64) -> Result<()>;

    /// Starts playing `file` pitch shifted by `pitch_cents` at `rate`.
    fn play_with_pitch(&mut self, file: &Path, pitch_cents: f64, rate: f64) -> Result<()>;

    /// Changes the rate of the sound currently playing.
    fn set_rate(&mut self, rate: f64) -> Result<()>;

    /// Stops any playback. Must be a no-op when nothing is playing.
    fn stop(&mut self) -> Result<()>;
}
