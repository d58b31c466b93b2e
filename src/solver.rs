//! Local solar times of the prayer events.
//!
//! Each event is the instant the sun reaches a given depression angle (or, for
//! Asr, a given shadow ratio). Declination and equation of time are evaluated
//! at the event's own previous estimate, so repeated passes converge on a
//! self-consistent fixed point. One pass from the nominal seeds is already
//! within a few seconds.

use crate::math::{acos, acot, cos, positive_mod, sin, tan};
use crate::praytime::Settings;
use crate::solar::{days_since_j2000, solar_position, SolarPosition};
use crate::types::{AsrMethod, MidnightRule, SolarHour, TimeSet};
use log::trace;

/// Sun depression at sunrise and sunset: refraction plus the solar semi-diameter.
pub const SUNRISE_SUNSET_ANGLE: f64 = 0.833;

/// Nominal hour used to probe the following day's fajr for the Jafari midnight.
const NEXT_FAJR_PROBE_HOUR: f64 = 29.0;

/// Side of solar noon an event falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Before noon: fajr, sunrise.
    Morning,
    /// After noon: asr, sunset, maghrib, isha.
    Evening,
}

impl Direction {
    /// `-1` for morning events, `+1` for evening events.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Morning => -1.0,
            Self::Evening => 1.0,
        }
    }
}

/// Nominal starting hours for the fixed-point passes.
#[must_use]
pub fn nominal_times() -> TimeSet<SolarHour> {
    TimeSet {
        fajr: 5.0,
        sunrise: 6.0,
        dhuhr: 12.0,
        asr: 13.0,
        sunset: 18.0,
        maghrib: 18.0,
        isha: 18.0,
        midnight: 24.0,
    }
    .map(SolarHour::from_hours)
}

/// Solves event times for one date and one set of settings.
pub(crate) struct Solver<'a> {
    settings: &'a Settings,
    utc_midnight_ms: f64,
}

impl<'a> Solver<'a> {
    pub(crate) fn new(settings: &'a Settings, utc_midnight_ms: i64) -> Self {
        Self {
            settings,
            utc_midnight_ms: utc_midnight_ms as f64,
        }
    }

    fn sun_position(&self, hour: f64) -> SolarPosition {
        let d = days_since_j2000(
            self.utc_midnight_ms,
            hour,
            self.settings.location.longitude,
        );
        solar_position(d)
    }

    /// Solar noon, evaluated near `hour`.
    pub(crate) fn mid_day(&self, hour: f64) -> f64 {
        let equation = self.sun_position(hour).equation_of_time();
        positive_mod(12.0 - equation, 24.0)
    }

    /// Hour at which the sun is `angle` degrees below the horizon, on the given
    /// side of noon. NaN when the sun never gets there.
    pub(crate) fn angle_time(&self, angle: f64, hour: f64, direction: Direction) -> f64 {
        let latitude = self.settings.location.latitude;
        let declination = self.sun_position(hour).declination();
        let numerator = -sin(angle) - sin(latitude) * sin(declination);
        let diff = acos(numerator / (cos(latitude) * cos(declination))) / 15.0;
        self.mid_day(hour) + diff * direction.sign()
    }

    /// Sun altitude (as a negative depression) at which shadows reach the Asr ratio.
    pub(crate) fn asr_angle(&self, asr: AsrMethod, hour: f64) -> f64 {
        let latitude = self.settings.location.latitude;
        let declination = self.sun_position(hour).declination();
        -acot(asr.shadow_factor() + tan((latitude - declination).abs()))
    }

    /// One pass: recompute every event from the previous estimates.
    pub(crate) fn process(&self, times: &TimeSet<SolarHour>) -> TimeSet<SolarHour> {
        let settings = self.settings;
        let asr_hour = times.asr.hours();

        TimeSet {
            fajr: self.angle_time(
                settings.fajr.degrees(),
                times.fajr.hours(),
                Direction::Morning,
            ),
            sunrise: self.angle_time(
                SUNRISE_SUNSET_ANGLE,
                times.sunrise.hours(),
                Direction::Morning,
            ),
            dhuhr: self.mid_day(times.dhuhr.hours()),
            asr: self.angle_time(
                self.asr_angle(settings.asr, asr_hour),
                asr_hour,
                Direction::Evening,
            ),
            sunset: self.angle_time(
                SUNRISE_SUNSET_ANGLE,
                times.sunset.hours(),
                Direction::Evening,
            ),
            maghrib: self.angle_time(
                settings.maghrib.degrees(),
                times.maghrib.hours(),
                Direction::Evening,
            ),
            isha: self.angle_time(
                settings.isha.degrees(),
                times.isha.hours(),
                Direction::Evening,
            ),
            midnight: self.mid_day(times.midnight.hours()) + 12.0,
        }
        .map(SolarHour::from_hours)
    }

    /// Runs the configured number of passes from the nominal seeds.
    pub(crate) fn solve(&self) -> TimeSet<SolarHour> {
        let mut times = nominal_times();
        for _ in 0..self.settings.iterations {
            times = self.process(&times);
        }
        trace!("solved local solar hours: {:?}", times.map(|t| t.hours()));
        times
    }

    /// Resolves minute-offset parameters, the Jafari midnight and the dhuhr offset.
    ///
    /// Must run after the high-latitude correction: `high_lats_clamped` tells the
    /// Jafari rule whether fajr may no longer be trusted as the following dawn.
    pub(crate) fn update(&self, times: &mut TimeSet<SolarHour>, high_lats_clamped: bool) {
        let settings = self.settings;

        if let Some(minutes) = settings.maghrib.minutes() {
            times.maghrib = times.sunset + minutes / 60.0;
        }
        if let Some(minutes) = settings.isha.minutes() {
            times.isha = times.maghrib + minutes / 60.0;
        }
        if settings.midnight == MidnightRule::Jafari {
            let following_fajr = if high_lats_clamped {
                times.fajr.hours() + 24.0
            } else {
                self.angle_time(
                    settings.fajr.degrees(),
                    NEXT_FAJR_PROBE_HOUR,
                    Direction::Morning,
                ) + 24.0
            };
            times.midnight = SolarHour::from_hours((times.sunset.hours() + following_fajr) / 2.0);
        }
        times.dhuhr = times.dhuhr + settings.dhuhr.value() / 60.0;
    }
}
