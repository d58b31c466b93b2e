//! High-latitude corrections around the June solstice.

use praytime::{HighLatitudeRule, Method, Params, PrayTime, TimeSet, Timestamp, INVALID_TIME};

const OSLO: [f64; 2] = [59.9139, 10.7522];
const TROMSO: [f64; 2] = [69.6492, 18.9553];
const SOLSTICE: [i32; 3] = [2025, 6, 21];

fn times(location: [f64; 2], rule: HighLatitudeRule) -> TimeSet<praytime::Formatted> {
    let mut praytime = PrayTime::new(Method::Mwl);
    praytime
        .location(location)
        .utc_offset(2)
        .adjust(Params::new().high_lats(rule));
    praytime.times(SOLSTICE).unwrap()
}

fn assert_unchanged_events(times: &TimeSet<praytime::Formatted>) {
    assert_eq!(times.sunrise, "03:54");
    assert_eq!(times.dhuhr, "13:19");
    assert_eq!(times.asr, "18:00");
    assert_eq!(times.sunset, "22:44");
    assert_eq!(times.maghrib, "22:45");
    assert_eq!(times.midnight, "01:19");
}

#[test]
fn oslo_night_middle() {
    let times = times(OSLO, HighLatitudeRule::NightMiddle);
    assert_unchanged_events(&times);
    assert_eq!(times.fajr, "01:19");
    assert_eq!(times.isha, "01:19");
}

#[test]
fn oslo_one_seventh() {
    let times = times(OSLO, HighLatitudeRule::OneSeventh);
    assert_unchanged_events(&times);
    assert_eq!(times.fajr, "03:10");
    assert_eq!(times.isha, "23:28");
}

#[test]
fn oslo_angle_based() {
    let times = times(OSLO, HighLatitudeRule::AngleBased);
    assert_unchanged_events(&times);
    assert_eq!(times.fajr, "02:21");
    assert_eq!(times.isha, "00:12");
}

#[test]
fn oslo_uncorrected_twilight_never_ends() {
    let times = times(OSLO, HighLatitudeRule::None);
    assert_unchanged_events(&times);
    assert_eq!(times.fajr, INVALID_TIME);
    assert_eq!(times.isha, INVALID_TIME);
    assert!(times.fajr.is_invalid());
}

#[test]
fn tromso_midnight_sun() {
    for rule in [HighLatitudeRule::None, HighLatitudeRule::NightMiddle] {
        let times = times(TROMSO, rule);
        for event in [
            praytime::Event::Fajr,
            praytime::Event::Sunrise,
            praytime::Event::Sunset,
            praytime::Event::Maghrib,
            praytime::Event::Isha,
        ] {
            assert!(times[event].is_invalid(), "{rule:?} {event}");
        }
        assert_eq!(times.dhuhr, "12:46");
        assert_eq!(times.asr, "17:58");
        assert_eq!(times.midnight, "00:46");
    }
}

#[test]
fn tromso_unreachable_timestamps() {
    let mut praytime = PrayTime::new(Method::Mwl);
    praytime.location(TROMSO);
    let stamps = praytime.timestamps(SOLSTICE).unwrap();
    assert_eq!(stamps.sunrise, Timestamp::Unreachable);
    assert_eq!(stamps.sunrise.to_datetime(), None);
    assert!(stamps.dhuhr.is_valid());
}

#[test]
fn jafari_midnight_follows_clamped_fajr() {
    // With fajr clamped to the middle of the night, midnight sits halfway
    // between sunset and that fajr.
    let mut praytime = PrayTime::new(Method::Jafari);
    praytime.location(OSLO);
    let times = praytime.timestamps(SOLSTICE).unwrap();

    let sunset = times.sunset.millis().unwrap();
    let fajr = times.fajr.millis().unwrap() + 86_400_000;
    let midnight = times.midnight.millis().unwrap();
    assert!((midnight - (sunset + fajr) / 2).abs() <= 60_000);
}

const WINTER_SOLSTICE: [i32; 3] = [2025, 12, 21];

fn polar_night(method: Method, rule: HighLatitudeRule) -> TimeSet<praytime::Formatted> {
    let mut praytime = PrayTime::new(method);
    praytime
        .location(TROMSO)
        .utc_offset(1)
        .adjust(Params::new().high_lats(rule));
    praytime.times(WINTER_SOLSTICE).unwrap()
}

#[test]
fn tromso_polar_night() {
    for rule in [
        HighLatitudeRule::NightMiddle,
        HighLatitudeRule::OneSeventh,
        HighLatitudeRule::AngleBased,
    ] {
        let times = polar_night(Method::Mwl, rule);
        assert!(times.sunrise.is_invalid(), "{rule:?}");
        assert!(times.sunset.is_invalid(), "{rule:?}");
        assert_eq!(times.fajr, "06:28", "{rule:?}");
        assert_eq!(times.isha, "16:44", "{rule:?}");
    }
}

#[test]
fn tromso_polar_night_jafari() {
    let times = polar_night(Method::Jafari, HighLatitudeRule::NightMiddle);
    assert!(times.sunrise.is_invalid());
    assert_eq!(times.maghrib, "12:55");
    assert_eq!(times.isha, "16:06");
}
