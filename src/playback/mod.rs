//! Playback effects and the seam to the host's audio engine.
//!
//! Decoding, pitch shifting and output are left to the host, which
//! implements [PlaybackService]. [MotionPlayback] wires a
//! [MotionRateMapper](crate::motion::MotionRateMapper) to that service.

mod effects;
mod error;
mod service;
mod session;

pub use effects::{EffectSettings, PlaybackEffect};
pub use error::{Error, Result};
pub use service::{PlaybackService, Recording};
pub use session::MotionPlayback;
