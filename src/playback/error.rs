use thiserror::Error;

use crate::motion::RateResult;

/// Error type for [MotionPlayback](super::MotionPlayback) operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Playback service failed: {0}")]
    Service(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error(transparent)]
    Motion(#[from] crate::motion::Error),

    /// The mapper produced `result` but the service failed to apply it.
    /// The mapper still counts the sample as emitted.
    #[error("Failed to apply playback rate {}: {source}", .result.rate)]
    RateNotApplied {
        result: RateResult,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wraps an error reported by a [PlaybackService](super::PlaybackService)
    /// implementation.
    pub fn service<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Service(err.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
