//! High-latitude correction of fajr, maghrib and isha.
//!
//! Far from the equator twilight can last all night, leaving the angle-based
//! events undefined or absurdly far from sunrise and sunset. The configured
//! [`HighLatitudeRule`] caps each of them at a fraction of the night.

use crate::praytime::Settings;
use crate::solver::Direction;
use crate::types::{Event, HighLatitudeRule, Param, SolarHour, TimeSet};
use core::cmp::Ordering;
use log::debug;

/// Caps fajr, isha and maghrib at the rule's portion of the night.
///
/// Returns whether any event was clamped; the Jafari midnight then uses the
/// clamped fajr instead of solving the next day's dawn.
pub(crate) fn adjust(times: &mut TimeSet<SolarHour>, settings: &Settings) -> bool {
    if settings.high_lats == HighLatitudeRule::None {
        return false;
    }

    let night = 24.0 + times.sunrise.hours() - times.sunset.hours();
    let targets = [
        (Event::Fajr, times.sunrise, settings.fajr, Direction::Morning),
        (Event::Isha, times.sunset, settings.isha, Direction::Evening),
        (Event::Maghrib, times.sunset, settings.maghrib, Direction::Evening),
    ];

    let mut clamped = false;
    for (event, base, param, direction) in targets {
        if let Some(time) = clamp(
            times[event],
            base,
            settings.high_lats,
            param,
            night,
            direction,
        ) {
            debug!(
                "{event} clamped to {:.4} h by {:?}",
                time.hours(),
                settings.high_lats
            );
            times[event] = time;
            clamped = true;
        }
    }
    clamped
}

/// New time for one event, or `None` when it is already within bounds.
///
/// Only unreachable events and events beyond the portion are moved. In polar
/// night the portion itself is undefined, so reachable events stay put.
fn clamp(
    time: SolarHour,
    base: SolarHour,
    rule: HighLatitudeRule,
    param: Param,
    night: f64,
    direction: Direction,
) -> Option<SolarHour> {
    let portion = rule.night_portion(param.value())? * night;
    let distance = (time - base) * direction.sign();
    if time.is_valid() && distance.partial_cmp(&portion) != Some(Ordering::Greater) {
        return None;
    }
    Some(base + portion * direction.sign())
}
