//! Rendering of event instants.
//!
//! Clock formats show the UTC time shifted by the configured [`UtcOffset`];
//! epoch formats ignore the offset. Unreachable events render as
//! [`INVALID_TIME`] in every format.

use crate::math::{floor, positive_mod};
use crate::types::{Timestamp, UtcOffset};
use chrono::{Local, TimeZone};
use core::fmt;
use std::sync::Arc;

/// Placeholder for events that do not occur on the requested date.
pub const INVALID_TIME: &str = "-----";

const MINUTES_PER_DAY: i64 = 1440;

/// User-supplied renderer for custom formats.
pub type CustomFormatter = dyn Fn(i64) -> String + Send + Sync;

/// Output format for event times.
#[derive(Clone, Default)]
pub enum Format {
    /// `"HH:MM"`, zero padded.
    #[default]
    Hours24,
    /// `"H:MM"`, hour 1 to 12, no suffix.
    Hours12,
    /// `"H:MM AM"` or `"H:MM PM"`.
    Hours12Suffix,
    /// Epoch milliseconds.
    Millis,
    /// Epoch seconds.
    Seconds,
    /// A caller-supplied function of epoch milliseconds.
    Custom(Arc<CustomFormatter>),
}

impl Format {
    /// Wraps a closure as a custom format.
    ///
    /// # Example
    /// ```
    /// # use praytime::{Format, Timestamp, UtcOffset};
    /// let format = Format::custom(|ms| format!("t+{}", ms / 1000));
    /// let rendered = format.apply(Timestamp::Valid(60_000), UtcOffset::Minutes(0.0));
    /// assert_eq!(rendered, "t+60");
    /// ```
    #[must_use]
    pub fn custom(f: impl Fn(i64) -> String + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    /// Renders one instant.
    #[must_use]
    pub fn apply(&self, timestamp: Timestamp, offset: UtcOffset) -> Formatted {
        let Some(millis) = timestamp.millis() else {
            return Formatted::Invalid;
        };
        match self {
            Self::Millis => Formatted::Epoch(millis),
            Self::Seconds => Formatted::Epoch(millis.div_euclid(1000)),
            Self::Custom(f) => Formatted::Text(f(millis)),
            Self::Hours24 => clock(millis, offset, Clock::TwentyFour),
            Self::Hours12 => clock(millis, offset, Clock::Twelve),
            Self::Hours12Suffix => clock(millis, offset, Clock::TwelveSuffix),
        }
    }
}

impl fmt::Debug for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hours24 => f.write_str("Hours24"),
            Self::Hours12 => f.write_str("Hours12"),
            Self::Hours12Suffix => f.write_str("Hours12Suffix"),
            Self::Millis => f.write_str("Millis"),
            Self::Seconds => f.write_str("Seconds"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<&str> for Format {
    /// Format names: `"x"`, `"X"`, `"12H"`, `"12h"` (any other casing of
    /// `12h` drops the suffix). Everything else selects 24-hour clock strings.
    fn from(name: &str) -> Self {
        match name {
            "x" => Self::Millis,
            "X" => Self::Seconds,
            "12H" => Self::Hours12Suffix,
            other if other.eq_ignore_ascii_case("12h") => Self::Hours12,
            _ => Self::Hours24,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Clock {
    TwentyFour,
    Twelve,
    TwelveSuffix,
}

fn offset_minutes(millis: i64, offset: UtcOffset) -> f64 {
    match offset {
        UtcOffset::Minutes(minutes) => minutes,
        UtcOffset::Auto => Local
            .timestamp_millis_opt(millis)
            .single()
            .map_or(0.0, |local| f64::from(local.offset().local_minus_utc()) / 60.0),
    }
}

/// Wall-clock rendering; an undefined offset renders as invalid.
fn clock(millis: i64, offset: UtcOffset, style: Clock) -> Formatted {
    let minute_of_day = millis.div_euclid(60_000).rem_euclid(MINUTES_PER_DAY) as f64;
    let minutes = minute_of_day + offset_minutes(millis, offset);
    if !minutes.is_finite() {
        return Formatted::Invalid;
    }
    let hours = positive_mod(floor(minutes / 60.0), 24.0) as u32;
    let minute = floor(positive_mod(minutes, 60.0)) as u32;

    Formatted::Text(match style {
        Clock::TwentyFour => format!("{hours:02}:{minute:02}"),
        Clock::Twelve => format!("{}:{minute:02}", twelve_hour(hours)),
        Clock::TwelveSuffix => {
            let suffix = if hours < 12 { "AM" } else { "PM" };
            format!("{}:{minute:02} {suffix}", twelve_hour(hours))
        }
    })
}

const fn twelve_hour(hours: u32) -> u32 {
    (hours + 11) % 12 + 1
}

/// A rendered event time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formatted {
    /// Clock or custom string.
    Text(String),
    /// Epoch milliseconds or seconds.
    Epoch(i64),
    /// The event does not occur; displays as [`INVALID_TIME`].
    Invalid,
}

impl Formatted {
    /// The rendered string, if this is text.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Epoch(_) | Self::Invalid => None,
        }
    }

    /// The epoch value, if this is numeric.
    #[must_use]
    pub const fn as_epoch(&self) -> Option<i64> {
        match self {
            Self::Epoch(value) => Some(*value),
            Self::Text(_) | Self::Invalid => None,
        }
    }

    /// Checks if the event does not occur.
    #[must_use]
    pub const fn is_invalid(&self) -> bool {
        matches!(self, Self::Invalid)
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Epoch(value) => write!(f, "{value}"),
            Self::Invalid => f.write_str(INVALID_TIME),
        }
    }
}

impl PartialEq<&str> for Formatted {
    fn eq(&self, other: &&str) -> bool {
        match self {
            Self::Text(text) => text == other,
            Self::Invalid => *other == INVALID_TIME,
            Self::Epoch(_) => false,
        }
    }
}

impl PartialEq<i64> for Formatted {
    fn eq(&self, other: &i64) -> bool {
        self.as_epoch() == Some(*other)
    }
}
