//! The different ways of naming the calculation date.

use chrono::{Local, NaiveDate, TimeZone, Utc};
use chrono_tz::{America::Toronto, Asia::Tokyo, Pacific::Kiritimati};
use praytime::{DateSpec, Error, Method, PrayTime, TimeSet};

fn waterloo() -> PrayTime {
    let mut praytime = PrayTime::new(Method::Isna);
    praytime.location([43.4643, -80.5204]).utc_offset(-5);
    praytime
}

fn reference() -> TimeSet<praytime::Formatted> {
    waterloo().times([2025, 2, 21]).unwrap()
}

#[test]
fn calendar_triples_roll_over() {
    let praytime = waterloo();
    assert_eq!(praytime.times([2025, 1, 52]).unwrap(), reference());
    assert_eq!(praytime.times([2024, 14, 21]).unwrap(), reference());
    assert_eq!(praytime.times((2025, 2, 21)).unwrap(), reference());
}

#[test]
fn naive_dates() {
    let date = NaiveDate::from_ymd_opt(2025, 2, 21).unwrap();
    assert_eq!(waterloo().times(date).unwrap(), reference());
}

#[test]
fn zoned_date_times_use_their_own_calendar_date() {
    let praytime = waterloo();

    let toronto_evening = Toronto.with_ymd_and_hms(2025, 2, 21, 23, 30, 0).unwrap();
    assert_eq!(praytime.times(toronto_evening).unwrap(), reference());

    // Already the 22nd in Tokyo and on Kiritimati when it is the 21st in Toronto.
    let tokyo_morning = toronto_evening.with_timezone(&Tokyo);
    assert_eq!(
        DateSpec::from(tokyo_morning).resolve().unwrap(),
        NaiveDate::from_ymd_opt(2025, 2, 22).unwrap()
    );
    let kiritimati = toronto_evening.with_timezone(&Kiritimati);
    assert_ne!(praytime.times(kiritimati).unwrap(), reference());

    let utc_noon = Utc.with_ymd_and_hms(2025, 2, 21, 12, 0, 0).unwrap();
    assert_eq!(praytime.times(utc_noon).unwrap(), reference());
}

#[test]
fn epoch_millis_use_the_host_calendar_date() {
    let epoch = 1_740_169_920_000_i64;
    let host_date = Local.timestamp_millis_opt(epoch).unwrap().date_naive();
    let praytime = waterloo();
    assert_eq!(
        praytime.times(epoch).unwrap(),
        praytime.times(host_date).unwrap()
    );
}

#[test]
fn day_offsets_from_today() {
    let praytime = waterloo();
    let today = Local::now().date_naive();
    let offset_times = praytime.times(0).unwrap();
    let date_times = praytime.times(today).unwrap();
    // Tolerate a local midnight between the two calls.
    if Local::now().date_naive() == today {
        assert_eq!(offset_times, date_times);
    }

    assert!(praytime.times(-999).is_ok());
    assert!(praytime.times(999).is_ok());
}

#[test]
fn unrepresentable_dates_are_errors() {
    let err = waterloo().times([i32::MAX, 12, 31]).unwrap_err();
    assert!(matches!(err, Error::InvalidDate { .. }));
    assert!(waterloo().times(i64::MAX).is_err());
}
