//! The prayer times calculator.

use crate::format::{Format, Formatted};
use crate::method::{Method, Params};
use crate::solver::Solver;
use crate::time::{utc_midnight_millis, DateSpec};
use crate::types::{
    AsrMethod, Event, HighLatitudeRule, Location, MidnightRule, Param, Rounding, TimeSet,
    Timestamp, UtcOffset,
};
use crate::{high_lats, postprocess, Result};
use log::{debug, warn};

/// Complete calculator configuration.
///
/// Usually built through the [`PrayTime`] setters, but every field is public
/// for callers that keep their own configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Fajr angle.
    pub fajr: Param,
    /// Isha angle, or minutes after maghrib.
    pub isha: Param,
    /// Maghrib angle, or minutes after sunset.
    pub maghrib: Param,
    /// Midnight rule.
    pub midnight: MidnightRule,
    /// Offset added to solar noon; only its numeric value is used, in minutes.
    pub dhuhr: Param,
    /// Asr shadow convention.
    pub asr: AsrMethod,
    /// High-latitude correction.
    pub high_lats: HighLatitudeRule,
    /// Minutes added to each event after solving.
    pub tune: TimeSet<f64>,
    /// Output format.
    pub format: Format,
    /// Minute rounding.
    pub rounding: Rounding,
    /// Offset used for clock strings.
    pub utc_offset: UtcOffset,
    /// Observer location.
    pub location: Location,
    /// Fixed-point passes of the solver.
    pub iterations: u32,
}

impl Settings {
    /// Overwrites every field that `params` sets.
    pub fn apply(&mut self, params: &Params) {
        if let Some(fajr) = params.fajr {
            self.fajr = fajr;
        }
        if let Some(isha) = params.isha {
            self.isha = isha;
        }
        if let Some(maghrib) = params.maghrib {
            self.maghrib = maghrib;
        }
        if let Some(midnight) = params.midnight {
            self.midnight = midnight;
        }
        if let Some(dhuhr) = params.dhuhr {
            self.dhuhr = dhuhr;
        }
        if let Some(asr) = params.asr {
            self.asr = asr;
        }
        if let Some(high_lats) = params.high_lats {
            self.high_lats = high_lats;
        }
        if let Some(iterations) = params.iterations {
            self.iterations = iterations;
        }
        if let Some(location) = params.location {
            self.location = location;
        }
        if let Some(utc_offset) = params.utc_offset {
            self.utc_offset = utc_offset;
        }
        if let Some(rounding) = params.rounding {
            self.rounding = rounding;
        }
    }
}

impl Default for Settings {
    /// MWL parameters at latitude 0 on the host's mean-solar-time meridian.
    fn default() -> Self {
        let mut settings = Self {
            fajr: Param::Angle(f64::NAN),
            isha: Param::Angle(f64::NAN),
            maghrib: Param::Angle(f64::NAN),
            midnight: MidnightRule::Standard,
            dhuhr: Param::Minutes(0.0),
            asr: AsrMethod::Standard,
            high_lats: HighLatitudeRule::NightMiddle,
            tune: TimeSet::default(),
            format: Format::Hours24,
            rounding: Rounding::Nearest,
            utc_offset: UtcOffset::Auto,
            location: Location::from_local_offset(),
            iterations: 1,
        };
        settings.apply(&Method::defaults().merge(Method::Mwl.params()));
        settings
    }
}

/// Prayer times calculator.
///
/// Setters take `&mut self` and return `&mut Self` so they chain; the
/// calculator is cheap to clone when independent configurations are needed.
///
/// # Example
/// ```
/// use praytime::{Method, PrayTime};
///
/// let mut praytime = PrayTime::new(Method::Isna);
/// praytime.location([43.4643, -80.5204]).utc_offset(-5);
///
/// let times = praytime.times([2025, 2, 21]).unwrap();
/// assert_eq!(times.fajr, "05:52");
/// assert_eq!(times.isha, "19:20");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrayTime {
    settings: Settings,
}

impl PrayTime {
    /// Creates a calculator using the given preset.
    #[must_use]
    pub fn new(method: Method) -> Self {
        let mut praytime = Self::default();
        praytime.method(method);
        praytime
    }

    /// Creates a calculator from a complete configuration.
    #[must_use]
    pub const fn with_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Current configuration.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Applies the common defaults, then the named preset.
    ///
    /// Parameters set by [`adjust`](Self::adjust) and not covered by presets
    /// (dhuhr, asr, high-latitude rule) survive a method change. An unknown
    /// name is logged and leaves fajr undefined, so fajr comes out clamped or
    /// unreachable until a fajr angle is set.
    pub fn method(&mut self, name: impl AsRef<str>) -> &mut Self {
        let name = name.as_ref();
        self.settings.apply(&Method::defaults());
        match name.parse::<Method>() {
            Ok(method) => {
                debug!("using calculation method {method}");
                self.settings.apply(&method.params());
            }
            Err(err) => {
                warn!("{err}, fajr angle left undefined");
                self.settings.fajr = Param::Angle(f64::NAN);
            }
        }
        self
    }

    /// Overrides individual calculation parameters.
    pub fn adjust(&mut self, params: Params) -> &mut Self {
        self.settings.apply(&params);
        self
    }

    /// Sets the observer location.
    pub fn location(&mut self, location: impl Into<Location>) -> &mut Self {
        self.settings.location = location.into();
        self
    }

    /// Replaces the per-event minute adjustments; events not listed get zero.
    ///
    /// # Example
    /// ```
    /// # use praytime::{Event, PrayTime};
    /// let mut praytime = PrayTime::default();
    /// praytime.tune([(Event::Asr, 11.0), (Event::Maghrib, 4.5)]);
    /// assert_eq!(praytime.settings().tune.asr, 11.0);
    /// assert_eq!(praytime.settings().tune.fajr, 0.0);
    /// ```
    pub fn tune(&mut self, minutes: impl IntoIterator<Item = (Event, f64)>) -> &mut Self {
        self.settings.tune = minutes.into_iter().collect();
        self
    }

    /// Sets the minute rounding.
    pub fn round(&mut self, rounding: impl Into<Rounding>) -> &mut Self {
        self.settings.rounding = rounding.into();
        self
    }

    /// Sets the output format.
    pub fn format(&mut self, format: impl Into<Format>) -> &mut Self {
        self.settings.format = format.into();
        self
    }

    /// Sets the offset for clock strings: hours when below 16 in magnitude,
    /// otherwise minutes. `None` follows the host time zone.
    pub fn utc_offset(&mut self, offset: impl Into<UtcOffset>) -> &mut Self {
        self.settings.utc_offset = offset.into();
        self
    }

    /// Event instants for a date, before formatting.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date cannot be represented.
    pub fn timestamps(&self, date: impl Into<DateSpec>) -> Result<TimeSet<Timestamp>> {
        let date = date.into().resolve()?;
        let settings = &self.settings;
        let utc_midnight = utc_midnight_millis(date);
        debug!(
            "computing times for {date} (utc midnight {utc_midnight}) at {:?}",
            settings.location
        );

        let solver = Solver::new(settings, utc_midnight);
        let mut times = solver.solve();
        let clamped = high_lats::adjust(&mut times, settings);
        solver.update(&mut times, clamped);
        postprocess::tune(&mut times, &settings.tune);

        Ok(postprocess::to_timestamps(
            times,
            utc_midnight,
            settings.location.longitude,
            settings.rounding,
        ))
    }

    /// Formatted event times for a date.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date cannot be represented.
    pub fn times(&self, date: impl Into<DateSpec>) -> Result<TimeSet<Formatted>> {
        let format = &self.settings.format;
        let offset = self.settings.utc_offset;
        Ok(self
            .timestamps(date)?
            .map(|timestamp| format.apply(timestamp, offset)))
    }

    /// Sets location, offset (`timezone + dst` hours) and format, then computes.
    ///
    /// # Errors
    /// Returns `InvalidDate` if the date cannot be represented.
    #[deprecated(note = "use the `location`, `utc_offset` and `format` setters with `times`")]
    pub fn get_times(
        &mut self,
        date: impl Into<DateSpec>,
        location: impl Into<Location>,
        timezone: Option<f64>,
        dst: f64,
        format: impl Into<Format>,
    ) -> Result<TimeSet<Formatted>> {
        self.location(location)
            .utc_offset(timezone.map(|hours| hours + dst))
            .format(format);
        self.times(date)
    }

    /// Same as [`method`](Self::method).
    #[deprecated(note = "use `method`")]
    pub fn set_method(&mut self, name: impl AsRef<str>) {
        self.method(name);
    }
}
