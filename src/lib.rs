//! # Prayer Times Calculator
//!
//! Daily Islamic prayer times from geographic coordinates, a calendar date and a
//! calculation convention.
//!
//! The calculator finds, for each of eight events, the local solar time at which
//! the sun reaches a given depression angle (or shadow ratio for Asr), corrects
//! twilight events at high latitudes, applies per-event tuning, and converts the
//! results to rounded UTC instants rendered as clock strings or epoch values.
//!
//! ## Features
//!
//! - Seven calculation presets (MWL, ISNA, Egypt, Makkah, Karachi, Tehran, Jafari)
//! - Angle or minute-offset parameters for isha and maghrib, Standard or Jafari midnight
//! - Three high-latitude corrections (night middle, one seventh, angle based)
//! - Typed outputs: [`Timestamp`] instants or [`Formatted`] values
//!
//! ## Feature Flags
//!
//! - `libm`: Use pure Rust math instead of the platform's float functions
//! - `serde`: `Serialize`/`Deserialize` for [`Params`] and the value types it holds
//!
//! ## Quick Start
//!
//! ```rust
//! use praytime::{Event, Method, Params, PrayTime};
//!
//! let mut praytime = PrayTime::new(Method::Isna);
//! praytime.location([43.4643, -80.5204]).utc_offset(-5);
//!
//! let times = praytime.times([2025, 2, 21]).unwrap();
//! assert_eq!(times.fajr, "05:52");
//! assert_eq!(times.dhuhr, "12:36");
//! assert_eq!(times.asr, "15:32");
//! assert_eq!(times.maghrib, "18:02");
//!
//! for (event, time) in times {
//!     println!("{:>8}: {time}", event.label());
//! }
//!
//! // Stronger dawn angle, later noon prayer
//! praytime.adjust(Params::new().fajr(19.7).dhuhr("11 min"));
//! let adjusted = praytime.times([2025, 2, 21]).unwrap();
//! assert_eq!(adjusted[Event::Fajr], "05:26");
//! assert_eq!(adjusted[Event::Dhuhr], "12:47");
//! ```
//!
//! ### Unreachable events
//!
//! Near the poles some events do not happen. They are never errors: the
//! timestamp is [`Timestamp::Unreachable`] and the formatted value is
//! [`INVALID_TIME`].
//!
//! ```rust
//! use praytime::{HighLatitudeRule, Params, PrayTime};
//!
//! let mut praytime = PrayTime::default();
//! praytime
//!     .location([69.6492, 18.9553])
//!     .utc_offset(2)
//!     .adjust(Params::new().high_lats(HighLatitudeRule::None));
//!
//! let times = praytime.times([2025, 6, 21]).unwrap();
//! assert!(times.sunrise.is_invalid());
//! assert_eq!(times.dhuhr, "12:46");
//! ```
//!
//! ## Accuracy
//!
//! The solar position comes from a short low-precision series, good to about an
//! arc minute. That is ample for prayer times, which are rounded to the minute,
//! but this is not a general ephemeris.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of rounded values in tests
)]

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::format::{CustomFormatter, Format, Formatted, INVALID_TIME};
pub use crate::method::{Method, Params};
pub use crate::praytime::{PrayTime, Settings};
pub use crate::solar::SolarPosition;
pub use crate::time::DateSpec;
pub use crate::types::{
    AsrMethod, Event, HighLatitudeRule, Location, MidnightRule, Param, Rounding, SolarHour,
    TimeSet, Timestamp, UtcOffset,
};

// Calculator
pub mod praytime;

// Core modules
pub mod error;
pub mod format;
pub mod method;
pub mod solar;
pub mod types;

// Pipeline stages
mod high_lats;
mod postprocess;
mod solver;

// Internal modules
mod math;

// Public modules
pub mod time;
