use std::fmt;

/// Why a guard configuration could not be built from host attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min` or `max` is not a finite number.
    InvalidNumber { attr: &'static str, value: String },
    /// `scale` is not a non-negative integer.
    InvalidScale { value: String },
    /// `scale` exceeds what fixed-point formatting supports.
    ScaleOutOfRange { scale: u64 },
    InvertedRange { min: f64, max: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber { attr, value } => {
                write!(f, "`{attr}` is not a finite number: {value:?}")
            }
            ConfigError::InvalidScale { value } => {
                write!(f, "`scale` is not a non-negative integer: {value:?}")
            }
            ConfigError::ScaleOutOfRange { scale } => write!(
                f,
                "`scale` {scale} exceeds the maximum of {}",
                crate::number::MAX_FRACTION_DIGITS
            ),
            ConfigError::InvertedRange { min, max } => {
                write!(f, "`min` ({min}) is greater than `max` ({max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
