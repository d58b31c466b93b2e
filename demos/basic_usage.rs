//! Basic prayer times calculation example.

use praytime::{Event, Format, HighLatitudeRule, Method, Params, PrayTime};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Example 1: Waterloo, Ontario with the ISNA preset
    let mut praytime = PrayTime::new(Method::Isna);
    praytime.location([43.4643, -80.5204]).utc_offset(-5);

    let times = praytime.times([2025, 2, 21])?;
    println!("Prayer times for Waterloo on February 21, 2025 (ISNA):");
    for (event, time) in times {
        println!("  {:<9} {time}", event.label());
    }

    // Example 2: Same day with 12-hour clock, Hanafi Asr and a tuned Maghrib
    praytime
        .format("12H")
        .adjust(Params::new().asr("Hanafi"))
        .tune([(Event::Maghrib, 3.0)]);

    let times = praytime.times([2025, 2, 21])?;
    println!("\nHanafi Asr, Maghrib +3 min:");
    println!("  Asr       {}", times.asr);
    println!("  Maghrib   {}", times.maghrib);

    // Example 3: Absolute instants for scheduling
    let stamps = praytime.timestamps([2025, 2, 21])?;
    if let Some(fajr) = stamps.fajr.to_datetime() {
        println!("\nFajr instant: {}", fajr.to_rfc3339());
    }

    // Example 4: Oslo at midsummer, where twilight never ends
    println!("\nOslo, June 21, 2025 (MWL):");
    for rule in [
        HighLatitudeRule::None,
        HighLatitudeRule::NightMiddle,
        HighLatitudeRule::OneSeventh,
        HighLatitudeRule::AngleBased,
    ] {
        let mut oslo = PrayTime::new(Method::Mwl);
        oslo.location([59.9139, 10.7522])
            .utc_offset(2)
            .adjust(Params::new().high_lats(rule));
        let times = oslo.times([2025, 6, 21])?;
        let name = format!("{rule:?}");
        println!("  {name:<12} fajr {}  isha {}", times.fajr, times.isha);
    }

    // Example 5: Custom rendering of the epoch milliseconds
    let mut custom = PrayTime::new(Method::Makkah);
    custom
        .location([21.4225, 39.8262])
        .format(Format::custom(|ms| format!("{}s", ms / 1000)));
    let times = custom.times([2025, 6, 1])?;
    println!("\nMakkah Isha as epoch seconds: {}", times.isha);

    Ok(())
}
