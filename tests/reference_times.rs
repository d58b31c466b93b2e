//! Reference prayer times for each preset.

use praytime::{Event, Format, Method, Params, PrayTime, Rounding, TimeSet, Timestamp};

fn assert_times(times: &TimeSet<praytime::Formatted>, expected: [&str; 8]) {
    for ((event, time), expected) in times.iter().zip(expected) {
        assert_eq!(*time, expected, "{event}");
    }
}

fn waterloo() -> PrayTime {
    let mut praytime = PrayTime::new(Method::Isna);
    praytime.location([43.4643, -80.5204]).utc_offset(-5);
    praytime
}

#[test]
fn isna_waterloo() {
    let times = waterloo().times([2025, 2, 21]).unwrap();
    assert_times(
        &times,
        [
            "05:52", "07:11", "12:36", "15:32", "18:01", "18:02", "19:20", "00:36",
        ],
    );
}

#[test]
fn isna_waterloo_epoch_millis() {
    let times = waterloo().format("x").times([2025, 2, 21]).unwrap();
    let expected = [
        1_740_135_120_000_i64,
        1_740_139_860_000,
        1_740_159_360_000,
        1_740_169_920_000,
        1_740_178_860_000,
        1_740_178_920_000,
        1_740_183_600_000,
        1_740_202_560_000,
    ];
    for ((event, time), expected) in times.iter().zip(expected) {
        assert_eq!(*time, expected, "{event}");
    }
}

#[test]
fn format_variants_for_asr() {
    let mut praytime = waterloo();
    let date = [2025, 2, 21];

    assert_eq!(praytime.format("x").times(date).unwrap().asr, 1_740_169_920_000);
    assert_eq!(praytime.format("X").times(date).unwrap().asr, 1_740_169_920);
    assert_eq!(praytime.format("12h").times(date).unwrap().asr, "3:32");
    assert_eq!(praytime.format("12H").times(date).unwrap().asr, "3:32 PM");
    assert_eq!(praytime.format("24h").times(date).unwrap().asr, "15:32");
}

#[test]
fn twelve_hour_with_suffix() {
    let times = waterloo().format("12H").times([2025, 2, 21]).unwrap();
    assert_times(
        &times,
        [
            "5:52 AM", "7:11 AM", "12:36 PM", "3:32 PM", "6:01 PM", "6:02 PM", "7:20 PM",
            "12:36 AM",
        ],
    );
}

#[test]
fn custom_format() {
    let times = waterloo()
        .format(Format::custom(|ms| format!("@{}", ms / 60_000)))
        .times([2025, 2, 21])
        .unwrap();
    assert_eq!(times.asr, "@29002832");
}

#[test]
fn unrounded_timestamps() {
    let times = waterloo()
        .round(Rounding::None)
        .timestamps([2025, 2, 21])
        .unwrap();
    assert_eq!(times.fajr, Timestamp::Valid(1_740_135_126_809));
    assert_eq!(times.asr, Timestamp::Valid(1_740_169_934_516));
}

#[test]
fn rounding_modes_for_asr() {
    let mut praytime = waterloo();
    let date = [2025, 2, 21];
    assert_eq!(praytime.round("down").times(date).unwrap().asr, "15:32");
    assert_eq!(praytime.round("up").times(date).unwrap().asr, "15:33");
    assert_eq!(praytime.round("nearest").times(date).unwrap().asr, "15:32");
}

#[test]
fn utc_offset_in_hours_or_minutes() {
    let mut praytime = waterloo();
    let date = [2025, 2, 21];

    let hours = praytime.utc_offset(-4.5).times(date).unwrap();
    let minutes = praytime.utc_offset(-270).times(date).unwrap();
    assert_eq!(hours, minutes);
    assert_eq!(hours.fajr, "06:22");

    assert_eq!(
        praytime.utc_offset(-300).times(date).unwrap().fajr,
        "05:52"
    );
}

#[test]
fn adjusted_fajr_and_dhuhr() {
    let times = waterloo()
        .adjust(Params::new().fajr(19.7).dhuhr("11 min"))
        .times([2025, 2, 21])
        .unwrap();
    assert_eq!(times.fajr, "05:26");
    assert_eq!(times.dhuhr, "12:47");
    assert_eq!(times.asr, "15:32");
}

#[test]
fn tuned_asr_and_maghrib() {
    let times = waterloo()
        .tune([(Event::Asr, 11.0), (Event::Maghrib, 4.5)])
        .times([2025, 2, 21])
        .unwrap();
    assert_eq!(times.asr, "15:43");
    assert_eq!(times.maghrib, "18:07");
    assert_eq!(times.fajr, "05:52");
}

#[test]
fn asr_shadow_factor_and_maghrib_angle() {
    let times = waterloo()
        .adjust(Params::new().asr("1.5").maghrib(4.0))
        .times([2025, 2, 21])
        .unwrap();
    assert_eq!(times.asr, "15:58");
    assert_eq!(times.maghrib, "18:19");
}

#[test]
fn extra_iterations_converge() {
    let times = waterloo()
        .adjust(Params::new().iterations(3))
        .times([2025, 2, 21])
        .unwrap();
    assert_times(
        &times,
        [
            "05:52", "07:11", "12:36", "15:32", "18:01", "18:02", "19:20", "00:36",
        ],
    );
}

#[test]
fn unknown_method_clamps_fajr() {
    let mut praytime = waterloo();
    praytime.method("Nope");
    let times = praytime.times([2025, 2, 21]).unwrap();
    // Undefined fajr angle falls back to the night-middle bound.
    assert_eq!(times.fajr, "00:36");
    assert_eq!(times.isha, "19:14");
    assert_eq!(times.sunrise, "07:11");
    assert_eq!(times.maghrib, "18:02");
}

#[test]
fn tehran() {
    let mut praytime = PrayTime::new(Method::Tehran);
    praytime.location([35.6892, 51.3890]).utc_offset(3.5);
    let times = praytime.times([2025, 3, 21]).unwrap();
    assert_times(
        &times,
        [
            "04:43", "06:07", "12:12", "15:39", "18:17", "18:35", "19:22", "23:29",
        ],
    );
}

#[test]
fn jafari() {
    let mut praytime = PrayTime::new(Method::Jafari);
    praytime.location([35.6892, 51.3890]).utc_offset(3.5);
    let times = praytime.times([2025, 3, 21]).unwrap();
    assert_times(
        &times,
        [
            "04:51", "06:07", "12:12", "15:39", "18:17", "18:33", "19:22", "23:33",
        ],
    );
}

#[test]
fn makkah() {
    let mut praytime = PrayTime::new(Method::Makkah);
    praytime.location([21.4225, 39.8262]).utc_offset(3);
    let times = praytime.times([2025, 6, 1]).unwrap();
    assert_times(
        &times,
        [
            "04:11", "05:38", "12:19", "15:35", "18:59", "19:00", "20:30", "00:19",
        ],
    );
}

#[test]
fn karachi_hanafi() {
    let mut praytime = PrayTime::new(Method::Karachi);
    praytime
        .location([24.8607, 67.0011])
        .utc_offset(5)
        .adjust(Params::new().asr("Hanafi"));
    let times = praytime.times([2025, 1, 15]).unwrap();
    assert_times(
        &times,
        [
            "05:58", "07:19", "12:41", "16:28", "18:05", "18:06", "19:25", "00:42",
        ],
    );
}

#[test]
fn mwl_london_winter_12h() {
    let mut praytime = PrayTime::new(Method::Mwl);
    praytime
        .location([51.5074, -0.1278])
        .utc_offset(0)
        .format("12h");
    let times = praytime.times([2025, 12, 21]).unwrap();
    assert_times(
        &times,
        [
            "5:59", "8:04", "11:59", "1:38", "3:54", "3:55", "5:51", "11:59",
        ],
    );
}

#[test]
fn mwl_sydney_summer() {
    let mut praytime = PrayTime::new(Method::Mwl);
    praytime.location([-33.8688, 151.2093]).utc_offset(11);
    let times = praytime.times([2025, 1, 1]).unwrap();
    assert_times(
        &times,
        [
            "04:04", "05:48", "12:59", "16:44", "20:09", "20:10", "21:46", "00:59",
        ],
    );
}

#[test]
#[allow(deprecated)]
fn deprecated_get_times() {
    let mut praytime = PrayTime::new(Method::Isna);
    let times = praytime
        .get_times([2025, 2, 21], [43.4643, -80.5204], Some(-6.0), 1.0, "12H")
        .unwrap();
    assert_times(
        &times,
        [
            "5:52 AM", "7:11 AM", "12:36 PM", "3:32 PM", "6:01 PM", "6:02 PM", "7:20 PM",
            "12:36 AM",
        ],
    );
}
