//! Calculation method presets and parameter overrides.
//!
//! A [`Method`] is a regional convention fixing the fajr/isha/maghrib
//! parameters and the midnight rule. [`Params`] is a partial parameter set:
//! presets are expressed as `Params`, and so are user adjustments.

use crate::types::{AsrMethod, HighLatitudeRule, Location, MidnightRule, Param, Rounding, UtcOffset};
use crate::{Error, Result};
use core::fmt;
use core::str::FromStr;

/// Named calculation convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "&'static str")
)]
pub enum Method {
    /// Muslim World League.
    #[default]
    Mwl,
    /// Islamic Society of North America.
    Isna,
    /// Egyptian General Authority of Survey.
    Egypt,
    /// Umm al-Qura University, Makkah.
    Makkah,
    /// University of Islamic Sciences, Karachi.
    Karachi,
    /// Institute of Geophysics, University of Tehran.
    Tehran,
    /// Shia Ithna-Ashari, Leva Institute, Qum.
    Jafari,
}

impl Method {
    /// All presets.
    pub const ALL: [Self; 7] = [
        Self::Mwl,
        Self::Isna,
        Self::Egypt,
        Self::Makkah,
        Self::Karachi,
        Self::Tehran,
        Self::Jafari,
    ];

    /// Preset name, e.g. `"ISNA"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mwl => "MWL",
            Self::Isna => "ISNA",
            Self::Egypt => "Egypt",
            Self::Makkah => "Makkah",
            Self::Karachi => "Karachi",
            Self::Tehran => "Tehran",
            Self::Jafari => "Jafari",
        }
    }

    /// Parameters fixed by this preset. Anything left `None` comes from
    /// [`Method::defaults`].
    #[must_use]
    pub fn params(self) -> Params {
        let params = Params::new();
        match self {
            Self::Mwl => params.fajr(18.0).isha(17.0),
            Self::Isna => params.fajr(15.0).isha(15.0),
            Self::Egypt => params.fajr(19.5).isha(17.5),
            Self::Makkah => params.fajr(18.5).isha("90 min"),
            Self::Karachi => params.fajr(18.0).isha(18.0),
            Self::Tehran => params
                .fajr(17.7)
                .maghrib(4.5)
                .midnight(MidnightRule::Jafari),
            Self::Jafari => params.fajr(16.0).maghrib(4.0).midnight(MidnightRule::Jafari),
        }
    }

    /// Parameters applied before every preset.
    #[must_use]
    pub fn defaults() -> Params {
        Params::new()
            .isha(14.0)
            .maghrib("1 min")
            .midnight(MidnightRule::Standard)
    }
}

impl AsRef<str> for Method {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|method| method.name() == s)
            .ok_or_else(|| Error::unknown_method(s))
    }
}

impl TryFrom<String> for Method {
    type Error = Error;

    fn try_from(name: String) -> Result<Self> {
        name.parse()
    }
}

impl From<Method> for &'static str {
    fn from(method: Method) -> Self {
        method.name()
    }
}

/// Partial set of calculation parameters.
///
/// Fields left `None` keep the calculator's current value when merged.
/// Output format and per-event tuning are not part of the set; they go
/// through [`PrayTime::format`](crate::PrayTime::format) and
/// [`PrayTime::tune`](crate::PrayTime::tune).
///
/// # Example
/// ```
/// # use praytime::{Param, Params};
/// let params = Params::new().fajr(19.7).dhuhr("11 min");
/// assert_eq!(params.fajr, Some(Param::Angle(19.7)));
/// assert_eq!(params.dhuhr, Some(Param::Minutes(11.0)));
/// assert_eq!(params.isha, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Params {
    /// Fajr sun depression angle.
    pub fajr: Option<Param>,
    /// Isha angle, or minutes after maghrib.
    pub isha: Option<Param>,
    /// Maghrib angle, or minutes after sunset.
    pub maghrib: Option<Param>,
    /// Midnight rule.
    pub midnight: Option<MidnightRule>,
    /// Minutes added to solar noon.
    pub dhuhr: Option<Param>,
    /// Asr shadow convention.
    pub asr: Option<AsrMethod>,
    /// High-latitude correction.
    pub high_lats: Option<HighLatitudeRule>,
    /// Number of fixed-point passes.
    pub iterations: Option<u32>,
    /// Observer location.
    pub location: Option<Location>,
    /// Offset for clock strings.
    pub utc_offset: Option<UtcOffset>,
    /// Minute rounding.
    pub rounding: Option<Rounding>,
}

impl Params {
    /// An empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the fajr angle.
    #[must_use]
    pub fn fajr(mut self, fajr: impl Into<Param>) -> Self {
        self.fajr = Some(fajr.into());
        self
    }

    /// Sets the isha angle or minute offset.
    #[must_use]
    pub fn isha(mut self, isha: impl Into<Param>) -> Self {
        self.isha = Some(isha.into());
        self
    }

    /// Sets the maghrib angle or minute offset.
    #[must_use]
    pub fn maghrib(mut self, maghrib: impl Into<Param>) -> Self {
        self.maghrib = Some(maghrib.into());
        self
    }

    /// Sets the midnight rule.
    #[must_use]
    pub fn midnight(mut self, midnight: MidnightRule) -> Self {
        self.midnight = Some(midnight);
        self
    }

    /// Sets the dhuhr offset; both `5.0` and `"5 min"` mean five minutes.
    #[must_use]
    pub fn dhuhr(mut self, dhuhr: impl Into<Param>) -> Self {
        self.dhuhr = Some(dhuhr.into());
        self
    }

    /// Sets the Asr convention.
    #[must_use]
    pub fn asr(mut self, asr: impl Into<AsrMethod>) -> Self {
        self.asr = Some(asr.into());
        self
    }

    /// Sets the high-latitude correction.
    #[must_use]
    pub fn high_lats(mut self, high_lats: HighLatitudeRule) -> Self {
        self.high_lats = Some(high_lats);
        self
    }

    /// Sets the number of fixed-point passes.
    #[must_use]
    pub fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Sets the observer location.
    #[must_use]
    pub fn location(mut self, location: impl Into<Location>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Sets the clock offset, read as hours below 16 in magnitude.
    #[must_use]
    pub fn utc_offset(mut self, offset: impl Into<UtcOffset>) -> Self {
        self.utc_offset = Some(offset.into());
        self
    }

    /// Sets the minute rounding.
    #[must_use]
    pub fn rounding(mut self, rounding: impl Into<Rounding>) -> Self {
        self.rounding = Some(rounding.into());
        self
    }

    /// Overlays `other` on top of `self`; fields set in `other` win.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            fajr: other.fajr.or(self.fajr),
            isha: other.isha.or(self.isha),
            maghrib: other.maghrib.or(self.maghrib),
            midnight: other.midnight.or(self.midnight),
            dhuhr: other.dhuhr.or(self.dhuhr),
            asr: other.asr.or(self.asr),
            high_lats: other.high_lats.or(self.high_lats),
            iterations: other.iterations.or(self.iterations),
            location: other.location.or(self.location),
            utc_offset: other.utc_offset.or(self.utc_offset),
            rounding: other.rounding.or(self.rounding),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names_round_trip() {
        for method in Method::ALL {
            assert_eq!(method.name().parse::<Method>().unwrap(), method);
        }
        assert!("isna".parse::<Method>().is_err());
        assert!("Nope".parse::<Method>().is_err());
    }

    #[test]
    fn test_presets_over_defaults() {
        let makkah = Method::defaults().merge(Method::Makkah.params());
        assert_eq!(makkah.fajr, Some(Param::Angle(18.5)));
        assert_eq!(makkah.isha, Some(Param::Minutes(90.0)));
        assert_eq!(makkah.maghrib, Some(Param::Minutes(1.0)));
        assert_eq!(makkah.midnight, Some(MidnightRule::Standard));

        let tehran = Method::defaults().merge(Method::Tehran.params());
        assert_eq!(tehran.isha, Some(Param::Angle(14.0)));
        assert_eq!(tehran.maghrib, Some(Param::Angle(4.5)));
        assert_eq!(tehran.midnight, Some(MidnightRule::Jafari));
    }

    #[test]
    fn test_defaults_leave_fajr_undefined() {
        assert_eq!(Method::defaults().fajr, None);
    }

    #[test]
    fn test_merge_keeps_unset_fields() {
        let base = Params::new().fajr(15.0).asr("Hanafi");
        let merged = base.merge(Params::new().fajr(19.7));
        assert_eq!(merged.fajr, Some(Param::Angle(19.7)));
        assert_eq!(merged.asr, Some(AsrMethod::Hanafi));
    }
}
