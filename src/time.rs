//! Calculation date inputs.
//!
//! Prayer times are computed for a calendar date, anchored at 00:00 UTC of that
//! date. [`DateSpec`] accepts the usual ways of naming a date and resolves them
//! to a [`NaiveDate`].

use crate::{Error, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone};

/// Numbers below this magnitude are day offsets from today; larger ones are
/// epoch milliseconds.
pub const DAY_OFFSET_LIMIT: i64 = 1000;

/// A way of naming the calculation date.
///
/// # Example
/// ```
/// # use praytime::DateSpec;
/// use chrono::NaiveDate;
///
/// let feb_21 = NaiveDate::from_ymd_opt(2025, 2, 21).unwrap();
/// assert_eq!(DateSpec::from([2025, 2, 21]).resolve().unwrap(), feb_21);
/// // Out-of-range components roll over.
/// assert_eq!(DateSpec::from([2025, 1, 52]).resolve().unwrap(), feb_21);
/// assert_eq!(DateSpec::from([2024, 14, 21]).resolve().unwrap(), feb_21);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateSpec {
    /// Whole days from today in the host time zone; 0 is today.
    DaysFromToday(i64),
    /// The host-local date at this many milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Year, month (1-based) and day; months and days outside their usual range
    /// roll into neighbouring months and years.
    Calendar {
        /// Year.
        year: i32,
        /// Month, 1 is January.
        month: i32,
        /// Day of month.
        day: i32,
    },
    /// An explicit date.
    Date(NaiveDate),
}

impl DateSpec {
    /// Today in the host time zone.
    #[must_use]
    pub const fn today() -> Self {
        Self::DaysFromToday(0)
    }

    /// Classifies a bare number: a day offset when `|n| < 1000`, else epoch milliseconds.
    #[must_use]
    pub const fn from_number(n: i64) -> Self {
        if n.unsigned_abs() < DAY_OFFSET_LIMIT.unsigned_abs() {
            Self::DaysFromToday(n)
        } else {
            Self::EpochMillis(n)
        }
    }

    /// Resolves to a calendar date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date falls outside chrono's supported range.
    pub fn resolve(&self) -> Result<NaiveDate> {
        match *self {
            Self::DaysFromToday(days) => Duration::try_days(days)
                .and_then(|offset| Local::now().date_naive().checked_add_signed(offset))
                .ok_or_else(|| Error::invalid_date("day offset out of range")),
            Self::EpochMillis(millis) => Local
                .timestamp_millis_opt(millis)
                .single()
                .map(|local| local.date_naive())
                .ok_or_else(|| Error::invalid_date("timestamp out of range")),
            Self::Calendar { year, month, day } => calendar_date(year, month, day),
            Self::Date(date) => Ok(date),
        }
    }
}

impl Default for DateSpec {
    fn default() -> Self {
        Self::today()
    }
}

impl From<i64> for DateSpec {
    fn from(n: i64) -> Self {
        Self::from_number(n)
    }
}

impl From<i32> for DateSpec {
    fn from(n: i32) -> Self {
        Self::from_number(i64::from(n))
    }
}

impl From<[i32; 3]> for DateSpec {
    fn from([year, month, day]: [i32; 3]) -> Self {
        Self::Calendar { year, month, day }
    }
}

impl From<(i32, i32, i32)> for DateSpec {
    fn from((year, month, day): (i32, i32, i32)) -> Self {
        Self::Calendar { year, month, day }
    }
}

impl From<NaiveDate> for DateSpec {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateSpec {
    /// The calendar date in the date-time's own zone.
    fn from(datetime: DateTime<Tz>) -> Self {
        Self::Date(datetime.date_naive())
    }
}

/// Builds a date from components, rolling out-of-range months and days over.
///
/// # Errors
/// Returns `InvalidDate` if the result falls outside chrono's supported range.
pub fn calendar_date(year: i32, month: i32, day: i32) -> Result<NaiveDate> {
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let year = i32::try_from(months.div_euclid(12))
        .map_err(|_| Error::invalid_date("year out of range"))?;
    let month = months.rem_euclid(12) as u32 + 1;

    NaiveDate::from_ymd_opt(year, month, 1)
        .zip(Duration::try_days(i64::from(day) - 1))
        .and_then(|(first, offset)| first.checked_add_signed(offset))
        .ok_or_else(|| Error::invalid_date("date out of range"))
}

/// Epoch milliseconds of 00:00 UTC on `date`.
#[must_use]
pub fn utc_midnight_millis(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp_millis()
}
