//! Low-precision solar position.
//!
//! Uses the short solar series from the U.S. Naval Observatory's approximate
//! solar coordinates: mean anomaly, mean longitude, a two-term equation of
//! center and a linearly drifting obliquity. Accuracy is about one arc minute
//! between 1950 and 2050, which is ample for prayer times but not for general
//! astronomy.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::many_single_char_names)]

use crate::math::{asin, atan2, cos, positive_mod, sin};

/// Milliseconds per day.
pub const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Days from the Unix epoch to J2000.0, taken as 2000-01-01 12:00 UTC.
const UNIX_TO_J2000_DAYS: f64 = 10_957.5;

/// Declination and equation of time at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Declination in degrees, north positive.
    declination: f64,
    /// Equation of time in hours (apparent minus mean solar time).
    equation_of_time: f64,
}

impl SolarPosition {
    /// Gets the declination in degrees.
    #[must_use]
    pub const fn declination(&self) -> f64 {
        self.declination
    }

    /// Gets the equation of time in hours.
    #[must_use]
    pub const fn equation_of_time(&self) -> f64 {
        self.equation_of_time
    }
}

/// Days since J2000.0 for a local solar hour on a given date.
///
/// # Arguments
/// * `utc_midnight_ms` - Epoch milliseconds of 00:00 UTC on the calculation date
/// * `hour` - Local solar hour, may be fractional, negative or beyond 24
/// * `longitude` - Observer longitude in degrees, east positive
#[must_use]
pub fn days_since_j2000(utc_midnight_ms: f64, hour: f64, longitude: f64) -> f64 {
    utc_midnight_ms / MILLIS_PER_DAY - UNIX_TO_J2000_DAYS + hour / 24.0 - longitude / 360.0
}

/// Calculate the sun's declination and the equation of time.
///
/// # Arguments
/// * `d` - Days since J2000.0, see [`days_since_j2000`]
///
/// # Example
/// ```rust
/// use praytime::solar;
///
/// // March equinox 2025 is on the 20th, 09:01 UTC
/// let d = solar::days_since_j2000(1_742_428_800_000.0, 9.0, 0.0);
/// let position = solar::solar_position(d);
/// assert!(position.declination().abs() < 0.05);
/// ```
#[must_use]
pub fn solar_position(d: f64) -> SolarPosition {
    let g = positive_mod(357.529 + 0.98560028 * d, 360.0);
    let q = positive_mod(280.459 + 0.98564736 * d, 360.0);
    let l = positive_mod(q + 1.915 * sin(g) + 0.020 * sin(2.0 * g), 360.0);
    let e = 23.439 - 0.00000036 * d;
    let ra = positive_mod(atan2(cos(e) * sin(l), cos(l)) / 15.0, 24.0);

    SolarPosition {
        declination: asin(sin(e) * sin(l)),
        equation_of_time: q / 15.0 - ra,
    }
}
