//! Per-event tuning and conversion of local solar hours to UTC instants.

use crate::math::{ceil, floor, round_half_up};
use crate::types::{Rounding, SolarHour, TimeSet, Timestamp};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;
const MILLIS_PER_MINUTE: f64 = 60_000.0;

impl Rounding {
    /// Rounds epoch milliseconds to a whole minute. NaN stays NaN.
    ///
    /// # Example
    /// ```
    /// # use praytime::Rounding;
    /// assert_eq!(Rounding::Nearest.apply(90_000.0), 120_000.0);
    /// assert_eq!(Rounding::Down.apply(119_999.0), 60_000.0);
    /// assert_eq!(Rounding::Up.apply(60_001.0), 120_000.0);
    /// assert_eq!(Rounding::None.apply(60_001.0), 60_001.0);
    /// ```
    #[must_use]
    pub fn apply(self, millis: f64) -> f64 {
        let minutes = millis / MILLIS_PER_MINUTE;
        let rounded = match self {
            Self::Nearest => round_half_up(minutes),
            Self::Up => ceil(minutes),
            Self::Down => floor(minutes),
            Self::None => return millis,
        };
        rounded * MILLIS_PER_MINUTE
    }
}

/// Adds the per-event minute adjustments.
pub(crate) fn tune(times: &mut TimeSet<SolarHour>, minutes: &TimeSet<f64>) {
    for (event, offset) in minutes.iter() {
        times[event] = times[event] + offset / 60.0;
    }
}

/// Converts local solar hours to rounded UTC instants on the given date.
pub(crate) fn to_timestamps(
    times: TimeSet<SolarHour>,
    utc_midnight_ms: i64,
    longitude: f64,
    rounding: Rounding,
) -> TimeSet<Timestamp> {
    let midnight = utc_midnight_ms as f64;
    times.map(|time| {
        let utc_hours = time.hours() - longitude / 15.0;
        let millis = midnight + floor(utc_hours * MILLIS_PER_HOUR);
        Timestamp::from_millis(rounding.apply(millis))
    })
}
