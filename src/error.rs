//! Error types for the prayer times calculator.
//!
//! Astronomical failures (polar day, unreachable twilight angles) are not errors:
//! they travel through the pipeline as NaN and surface as
//! [`Timestamp::Unreachable`](crate::Timestamp::Unreachable). The variants here
//! cover caller mistakes that cannot be expressed numerically.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while configuring the calculator or resolving dates.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Unknown calculation method name.
    UnknownMethod {
        /// The name that did not match any preset.
        name: String,
    },
    /// Unknown prayer event name.
    UnknownEvent {
        /// The name that did not match any event.
        name: String,
    },
    /// Unknown high-latitude adjustment rule.
    UnknownHighLatitudeRule {
        /// The name that did not match any rule.
        name: String,
    },
    /// Unknown midnight rule.
    UnknownMidnightRule {
        /// The name that did not match any rule.
        name: String,
    },
    /// Invalid latitude value (must be between -90 and +90 degrees).
    InvalidLatitude {
        /// The invalid latitude value provided.
        value: f64,
    },
    /// Invalid longitude value (must be between -180 and +180 degrees).
    InvalidLongitude {
        /// The invalid longitude value provided.
        value: f64,
    },
    /// Date input that cannot be represented.
    InvalidDate {
        /// Description of the date constraint violation.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMethod { name } => write!(f, "unknown calculation method {name:?}"),
            Self::UnknownEvent { name } => write!(f, "unknown prayer event {name:?}"),
            Self::UnknownHighLatitudeRule { name } => {
                write!(f, "unknown high-latitude rule {name:?}")
            }
            Self::UnknownMidnightRule { name } => write!(f, "unknown midnight rule {name:?}"),
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidDate { message } => write!(f, "invalid date: {message}"),
        }
    }
}

impl std::error::Error for Error {}

impl Error {
    /// Creates an unknown method error.
    #[must_use]
    pub fn unknown_method(name: &str) -> Self {
        Self::UnknownMethod {
            name: name.to_owned(),
        }
    }

    /// Creates an unknown event error.
    #[must_use]
    pub fn unknown_event(name: &str) -> Self {
        Self::UnknownEvent {
            name: name.to_owned(),
        }
    }

    /// Creates an unknown high-latitude rule error.
    #[must_use]
    pub fn unknown_high_latitude_rule(name: &str) -> Self {
        Self::UnknownHighLatitudeRule {
            name: name.to_owned(),
        }
    }

    /// Creates an unknown midnight rule error.
    #[must_use]
    pub fn unknown_midnight_rule(name: &str) -> Self {
        Self::UnknownMidnightRule {
            name: name.to_owned(),
        }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub const fn invalid_date(message: &'static str) -> Self {
        Self::InvalidDate { message }
    }
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates both latitude and longitude are within valid ranges.
///
/// # Errors
/// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_latitude(latitude)?;
    check_longitude(longitude)?;
    Ok(())
}
