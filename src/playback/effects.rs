use core::fmt;

use serde::{Deserialize, Serialize};

/// The playback effects offered for a recording.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackEffect {
    Slow,
    Fast,
    /// Pitched up a full octave.
    Chipmunk,
    /// Pitched down and slowed.
    DarthVader,
    /// Starts at unit rate, then follows device tilt.
    Motion,
}

/// Rate and optional pitch shift to hand to the playback service.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectSettings {
    pub rate: f64,
    /// Pitch shift in cents. `None` plays the file unshifted.
    pub pitch_cents: Option<f64>,
}

impl PlaybackEffect {
    pub const ALL: [PlaybackEffect; 5] = [
        PlaybackEffect::Slow,
        PlaybackEffect::Fast,
        PlaybackEffect::Chipmunk,
        PlaybackEffect::DarthVader,
        PlaybackEffect::Motion,
    ];

    pub fn settings(&self) -> EffectSettings {
        let (rate, pitch_cents) = match self {
            PlaybackEffect::Slow => (0.5, None),
            PlaybackEffect::Fast => (1.5, None),
            PlaybackEffect::Chipmunk => (1.0, Some(1200.0)),
            PlaybackEffect::DarthVader => (0.8, Some(-1000.0)),
            PlaybackEffect::Motion => (1.0, None),
        };
        EffectSettings { rate, pitch_cents }
    }

    /// True if playback rate is driven by a
    /// [MotionRateMapper](crate::motion::MotionRateMapper).
    pub fn is_motion_controlled(&self) -> bool {
        *self == PlaybackEffect::Motion
    }
}

impl fmt::Display for PlaybackEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PlaybackEffect::Slow => "slow",
            PlaybackEffect::Fast => "fast",
            PlaybackEffect::Chipmunk => "chipmunk",
            PlaybackEffect::DarthVader => "darth vader",
            PlaybackEffect::Motion => "motion",
        };
        f.write_str(name)
    }
}
