//! Core data types for prayer time calculations.

use crate::error::check_coordinates;
use crate::math::{leading_value, positive_mod};
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use core::fmt;
use core::ops::{Add, Index, IndexMut, Sub};
use core::str::FromStr;

/// A named prayer event.
///
/// Events are always reported in this order, from dawn to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Event {
    /// Dawn, when the sun reaches the configured angle below the eastern horizon.
    Fajr,
    /// Sunrise.
    Sunrise,
    /// Solar noon plus the configured dhuhr offset.
    Dhuhr,
    /// Afternoon, defined by the shadow-length ratio.
    Asr,
    /// Sunset.
    Sunset,
    /// Evening, at an angle or a fixed delay after sunset.
    Maghrib,
    /// Night, at an angle or a fixed delay after maghrib.
    Isha,
    /// Midnight, per the configured midnight rule.
    Midnight,
}

impl Event {
    /// All events in reporting order.
    pub const ALL: [Self; 8] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Dhuhr,
        Self::Asr,
        Self::Sunset,
        Self::Maghrib,
        Self::Isha,
        Self::Midnight,
    ];

    /// Lowercase key, e.g. `"fajr"`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fajr => "fajr",
            Self::Sunrise => "sunrise",
            Self::Dhuhr => "dhuhr",
            Self::Asr => "asr",
            Self::Sunset => "sunset",
            Self::Maghrib => "maghrib",
            Self::Isha => "isha",
            Self::Midnight => "midnight",
        }
    }

    /// Display label, e.g. `"Fajr"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Dhuhr => "Dhuhr",
            Self::Asr => "Asr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Isha => "Isha",
            Self::Midnight => "Midnight",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Event {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|event| event.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::unknown_event(s))
    }
}

/// One value per prayer event.
///
/// The value type changes as times move through the pipeline: [`SolarHour`]
/// while solving, [`Timestamp`] after conversion to UTC, and
/// [`Formatted`](crate::Formatted) at the output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSet<T> {
    /// Fajr value.
    pub fajr: T,
    /// Sunrise value.
    pub sunrise: T,
    /// Dhuhr value.
    pub dhuhr: T,
    /// Asr value.
    pub asr: T,
    /// Sunset value.
    pub sunset: T,
    /// Maghrib value.
    pub maghrib: T,
    /// Isha value.
    pub isha: T,
    /// Midnight value.
    pub midnight: T,
}

impl<T> TimeSet<T> {
    /// Builds a set by evaluating `f` for every event, in reporting order.
    pub fn from_fn(mut f: impl FnMut(Event) -> T) -> Self {
        Self {
            fajr: f(Event::Fajr),
            sunrise: f(Event::Sunrise),
            dhuhr: f(Event::Dhuhr),
            asr: f(Event::Asr),
            sunset: f(Event::Sunset),
            maghrib: f(Event::Maghrib),
            isha: f(Event::Isha),
            midnight: f(Event::Midnight),
        }
    }

    /// Gets the value for an event.
    pub const fn get(&self, event: Event) -> &T {
        match event {
            Event::Fajr => &self.fajr,
            Event::Sunrise => &self.sunrise,
            Event::Dhuhr => &self.dhuhr,
            Event::Asr => &self.asr,
            Event::Sunset => &self.sunset,
            Event::Maghrib => &self.maghrib,
            Event::Isha => &self.isha,
            Event::Midnight => &self.midnight,
        }
    }

    /// Gets a mutable reference to the value for an event.
    pub fn get_mut(&mut self, event: Event) -> &mut T {
        match event {
            Event::Fajr => &mut self.fajr,
            Event::Sunrise => &mut self.sunrise,
            Event::Dhuhr => &mut self.dhuhr,
            Event::Asr => &mut self.asr,
            Event::Sunset => &mut self.sunset,
            Event::Maghrib => &mut self.maghrib,
            Event::Isha => &mut self.isha,
            Event::Midnight => &mut self.midnight,
        }
    }

    /// Converts every value, keeping the event it belongs to.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> TimeSet<U> {
        TimeSet {
            fajr: f(self.fajr),
            sunrise: f(self.sunrise),
            dhuhr: f(self.dhuhr),
            asr: f(self.asr),
            sunset: f(self.sunset),
            maghrib: f(self.maghrib),
            isha: f(self.isha),
            midnight: f(self.midnight),
        }
    }

    /// Iterates over `(event, value)` pairs in reporting order.
    pub fn iter(&self) -> impl Iterator<Item = (Event, &T)> + '_ {
        Event::ALL.into_iter().map(move |event| (event, self.get(event)))
    }
}

impl<T> Index<Event> for TimeSet<T> {
    type Output = T;

    fn index(&self, event: Event) -> &T {
        self.get(event)
    }
}

impl<T> IndexMut<Event> for TimeSet<T> {
    fn index_mut(&mut self, event: Event) -> &mut T {
        self.get_mut(event)
    }
}

impl<T> IntoIterator for TimeSet<T> {
    type Item = (Event, T);
    type IntoIter = core::iter::Zip<core::array::IntoIter<Event, 8>, core::array::IntoIter<T, 8>>;

    fn into_iter(self) -> Self::IntoIter {
        let values = [
            self.fajr,
            self.sunrise,
            self.dhuhr,
            self.asr,
            self.sunset,
            self.maghrib,
            self.isha,
            self.midnight,
        ];
        Event::ALL.into_iter().zip(values)
    }
}

impl<T: Default> FromIterator<(Event, T)> for TimeSet<T> {
    fn from_iter<I: IntoIterator<Item = (Event, T)>>(iter: I) -> Self {
        let mut set = Self::default();
        for (event, value) in iter {
            set[event] = value;
        }
        set
    }
}

/// Local apparent solar time in fractional hours.
///
/// Values may be negative or exceed 24 (the previous or following day), and are
/// NaN when the sun never reaches the required position on that date.
///
/// # Example
/// ```
/// # use praytime::SolarHour;
/// let noon = SolarHour::from_hours(12.25);
/// assert_eq!((noon + 0.5).hours(), 12.75);
/// assert!(!SolarHour::from_hours(f64::NAN).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct SolarHour(f64);

impl SolarHour {
    /// Creates a solar hour from fractional hours.
    #[must_use]
    pub const fn from_hours(hours: f64) -> Self {
        Self(hours)
    }

    /// Gets the raw hours value.
    #[must_use]
    pub const fn hours(&self) -> f64 {
        self.0
    }

    /// Whether the sun actually reaches this position (the value is finite).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.is_finite()
    }

    /// Hour of day normalized to `[0, 24)`.
    #[must_use]
    pub fn hour_of_day(&self) -> f64 {
        positive_mod(self.0, 24.0)
    }
}

impl Add<f64> for SolarHour {
    type Output = Self;

    fn add(self, hours: f64) -> Self {
        Self(self.0 + hours)
    }
}

impl Sub for SolarHour {
    type Output = f64;

    fn sub(self, other: Self) -> f64 {
        self.0 - other.0
    }
}

/// An absolute event time in UTC milliseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timestamp {
    /// The event occurs at this instant.
    Valid(i64),
    /// The sun does not reach the required position on this date at this location.
    Unreachable,
}

impl Timestamp {
    /// Wraps a millisecond value that may be NaN.
    #[must_use]
    pub fn from_millis(millis: f64) -> Self {
        if millis.is_finite() {
            Self::Valid(millis as i64)
        } else {
            Self::Unreachable
        }
    }

    /// Milliseconds since the Unix epoch, if the event occurs.
    #[must_use]
    pub const fn millis(&self) -> Option<i64> {
        match self {
            Self::Valid(ms) => Some(*ms),
            Self::Unreachable => None,
        }
    }

    /// Checks if the event occurs on this date.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    /// Converts to a chrono UTC date-time.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        self.millis().and_then(DateTime::from_timestamp_millis)
    }
}

/// Geographic location of the observer.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Latitude in degrees, north positive.
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
}

impl Location {
    /// Creates a location without validating the coordinates.
    ///
    /// Out-of-range coordinates are accepted and produce unreachable times.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Creates a location, rejecting out-of-range coordinates.
    ///
    /// # Errors
    /// Returns `InvalidLatitude` or `InvalidLongitude` for out-of-range coordinates.
    pub fn checked(latitude: f64, longitude: f64) -> Result<Self> {
        check_coordinates(latitude, longitude)?;
        Ok(Self::new(latitude, longitude))
    }

    /// Latitude 0 and the longitude whose mean solar time matches the host's
    /// current UTC offset.
    #[must_use]
    pub fn from_local_offset() -> Self {
        let offset_minutes = chrono::Local::now().offset().local_minus_utc() / 60;
        Self::new(0.0, f64::from(offset_minutes) / 4.0)
    }
}

impl From<[f64; 2]> for Location {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self::new(latitude, longitude)
    }
}

impl From<(f64, f64)> for Location {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::new(latitude, longitude)
    }
}

/// An angle or minute-offset calculation parameter.
///
/// Parsed from strings the way calculation presets write them: a string
/// containing `min` is a minute offset, anything else is an angle.
///
/// # Example
/// ```
/// # use praytime::Param;
/// assert_eq!("90 min".parse::<Param>().unwrap(), Param::Minutes(90.0));
/// assert_eq!("18.5".parse::<Param>().unwrap(), Param::Angle(18.5));
/// assert_eq!(Param::from(15.0), Param::Angle(15.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "serde_repr::NumberOrText", into = "serde_repr::NumberOrText")
)]
pub enum Param {
    /// Sun depression angle in degrees below the horizon.
    Angle(f64),
    /// Minutes after the reference event.
    Minutes(f64),
}

impl Param {
    /// Angle in degrees; NaN for minute offsets, which have no solar angle.
    #[must_use]
    pub const fn degrees(&self) -> f64 {
        match self {
            Self::Angle(degrees) => *degrees,
            Self::Minutes(_) => f64::NAN,
        }
    }

    /// Minute offset, if this is one.
    #[must_use]
    pub const fn minutes(&self) -> Option<f64> {
        match self {
            Self::Minutes(minutes) => Some(*minutes),
            Self::Angle(_) => None,
        }
    }

    /// Numeric value regardless of unit.
    #[must_use]
    pub const fn value(&self) -> f64 {
        match self {
            Self::Angle(v) | Self::Minutes(v) => *v,
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Angle(degrees) => write!(f, "{degrees}"),
            Self::Minutes(minutes) => write!(f, "{minutes} min"),
        }
    }
}

impl From<f64> for Param {
    fn from(degrees: f64) -> Self {
        Self::Angle(degrees)
    }
}

impl From<&str> for Param {
    fn from(text: &str) -> Self {
        let value = leading_value(text);
        if text.contains("min") {
            Self::Minutes(value)
        } else {
            Self::Angle(value)
        }
    }
}

impl FromStr for Param {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Juristic convention for the Asr shadow ratio.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "serde_repr::NumberOrText", into = "serde_repr::NumberOrText")
)]
pub enum AsrMethod {
    /// Shadow equals object length (Shafi'i, Maliki, Hanbali).
    #[default]
    Standard,
    /// Shadow equals twice the object length.
    Hanafi,
    /// Arbitrary shadow ratio.
    Factor(f64),
}

impl AsrMethod {
    /// Ratio of shadow length to object length.
    #[must_use]
    pub const fn shadow_factor(&self) -> f64 {
        match self {
            Self::Standard => 1.0,
            Self::Hanafi => 2.0,
            Self::Factor(factor) => *factor,
        }
    }
}

impl From<f64> for AsrMethod {
    fn from(factor: f64) -> Self {
        Self::Factor(factor)
    }
}

impl From<&str> for AsrMethod {
    fn from(text: &str) -> Self {
        match text {
            "Standard" => Self::Standard,
            "Hanafi" => Self::Hanafi,
            other => Self::Factor(leading_value(other)),
        }
    }
}

/// How midnight is defined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MidnightRule {
    /// Midpoint between sunset and sunrise, i.e. solar noon plus twelve hours.
    #[default]
    Standard,
    /// Midpoint between sunset and the following fajr.
    Jafari,
}

impl FromStr for MidnightRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Standard" => Ok(Self::Standard),
            "Jafari" => Ok(Self::Jafari),
            other => Err(Error::unknown_midnight_rule(other)),
        }
    }
}

/// Correction applied when twilight angles are extreme or unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HighLatitudeRule {
    /// Fajr and isha no further from sunrise/sunset than half the night.
    #[default]
    NightMiddle,
    /// No further than a seventh of the night.
    OneSeventh,
    /// No further than `angle / 60` of the night.
    AngleBased,
    /// No correction.
    None,
}

impl HighLatitudeRule {
    /// Largest allowed distance from the base event, as a fraction of the night.
    ///
    /// `angle` is the numeric value of the event's own parameter; only
    /// [`AngleBased`](Self::AngleBased) uses it. `None` for the uncorrected rule.
    #[must_use]
    pub fn night_portion(&self, angle: f64) -> Option<f64> {
        match self {
            Self::NightMiddle => Some(1.0 / 2.0),
            Self::OneSeventh => Some(1.0 / 7.0),
            Self::AngleBased => Some(1.0 / 60.0 * angle),
            Self::None => None,
        }
    }
}

impl FromStr for HighLatitudeRule {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "NightMiddle" => Ok(Self::NightMiddle),
            "OneSeventh" => Ok(Self::OneSeventh),
            "AngleBased" => Ok(Self::AngleBased),
            "None" => Ok(Self::None),
            other => Err(Error::unknown_high_latitude_rule(other)),
        }
    }
}

/// Rounding of event times to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Rounding {
    /// Nearest minute, half-way cases up.
    #[default]
    Nearest,
    /// Next whole minute.
    Up,
    /// Previous whole minute.
    Down,
    /// Keep millisecond precision.
    None,
}

impl From<&str> for Rounding {
    /// Empty names select the default; unrecognized names leave times unrounded.
    fn from(name: &str) -> Self {
        match name {
            "" | "nearest" => Self::Nearest,
            "up" => Self::Up,
            "down" => Self::Down,
            _ => Self::None,
        }
    }
}

/// Offset from UTC used to render wall-clock strings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "serde_repr::NumberOrText", into = "serde_repr::NumberOrText")
)]
pub enum UtcOffset {
    /// The host's local offset at each rendered instant.
    #[default]
    Auto,
    /// Fixed offset in minutes.
    Minutes(f64),
}

impl UtcOffset {
    /// Offsets below this magnitude are read as hours.
    pub const HOURS_THRESHOLD: f64 = 16.0;

    /// Interprets `value` as hours when `|value| < 16`, otherwise as minutes.
    ///
    /// # Example
    /// ```
    /// # use praytime::UtcOffset;
    /// assert_eq!(UtcOffset::from_value(-4.5), UtcOffset::Minutes(-270.0));
    /// assert_eq!(UtcOffset::from_value(-270.0), UtcOffset::Minutes(-270.0));
    /// ```
    #[must_use]
    pub fn from_value(value: f64) -> Self {
        if value.abs() < Self::HOURS_THRESHOLD {
            Self::Minutes(value * 60.0)
        } else {
            Self::Minutes(value)
        }
    }
}

impl From<f64> for UtcOffset {
    fn from(value: f64) -> Self {
        Self::from_value(value)
    }
}

impl From<i32> for UtcOffset {
    fn from(value: i32) -> Self {
        Self::from_value(f64::from(value))
    }
}

impl From<Option<f64>> for UtcOffset {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Auto, Self::from_value)
    }
}

#[cfg(feature = "serde")]
mod serde_repr {
    use super::{leading_value, AsrMethod, Param, UtcOffset};

    /// Wire shape shared by parameters that accept either a number or a name.
    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(untagged)]
    pub enum NumberOrText {
        Number(f64),
        Text(String),
    }

    impl From<NumberOrText> for Param {
        fn from(repr: NumberOrText) -> Self {
            match repr {
                NumberOrText::Number(degrees) => Self::Angle(degrees),
                NumberOrText::Text(text) => Self::from(text.as_str()),
            }
        }
    }

    impl From<Param> for NumberOrText {
        fn from(param: Param) -> Self {
            match param {
                Param::Angle(degrees) => Self::Number(degrees),
                minutes @ Param::Minutes(_) => Self::Text(minutes.to_string()),
            }
        }
    }

    impl From<NumberOrText> for AsrMethod {
        fn from(repr: NumberOrText) -> Self {
            match repr {
                NumberOrText::Number(factor) => Self::Factor(factor),
                NumberOrText::Text(text) => Self::from(text.as_str()),
            }
        }
    }

    impl From<AsrMethod> for NumberOrText {
        fn from(method: AsrMethod) -> Self {
            match method {
                AsrMethod::Standard => Self::Text("Standard".to_owned()),
                AsrMethod::Hanafi => Self::Text("Hanafi".to_owned()),
                AsrMethod::Factor(factor) => Self::Number(factor),
            }
        }
    }

    impl From<NumberOrText> for UtcOffset {
        fn from(repr: NumberOrText) -> Self {
            match repr {
                NumberOrText::Number(value) => Self::from_value(value),
                NumberOrText::Text(text) if text == "auto" => Self::Auto,
                NumberOrText::Text(text) => Self::from_value(leading_value(&text)),
            }
        }
    }

    impl From<UtcOffset> for NumberOrText {
        fn from(offset: UtcOffset) -> Self {
            match offset {
                UtcOffset::Auto => Self::Text("auto".to_owned()),
                UtcOffset::Minutes(minutes) => Self::Number(minutes),
            }
        }
    }
}
