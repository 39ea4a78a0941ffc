use thiserror::Error;

/// A rejected [RateMappingConfig](super::RateMappingConfig) or reference orientation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid rate bounds: min={min}, max={max}. Both must be finite and positive, with min < max")]
    InvalidRateBounds { min: f64, max: f64 },

    #[error("Invalid sensitivity: {0}. Must be finite and positive")]
    InvalidSensitivity(f64),

    #[error("Invalid band thresholds: slow={slow}, fast={fast}. Both must be finite, with slow < fast")]
    InvalidThresholds { slow: f64, fast: f64 },

    #[error("Degenerate reference vector ({x}, {y}, {z}). Must be finite with non-zero length")]
    DegenerateReference { x: f64, y: f64, z: f64 },
}

/// Error type for [MotionRateMapper](super::MotionRateMapper) operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid config: {0}")]
    Config(#[from] ConfigError),

    #[error("Cannot change the configuration of an active mapper")]
    MapperActive,
}

pub type Result<T> = std::result::Result<T, Error>;
