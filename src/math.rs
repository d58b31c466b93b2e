//! Mathematical utilities for prayer time calculations.
//!
//! All angles crossing this module's boundary are in degrees. Radians never
//! leave these helpers.

/// Mathematical constants
pub const PI: f64 = core::f64::consts::PI;

/// Converts degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Positive modulo: the result lies in `[0, b)` for any finite `a` and positive `b`.
///
/// Used to normalize angles into `[0, 360)` and hours into `[0, 24)`.
#[inline]
pub fn positive_mod(a: f64, b: f64) -> f64 {
    ((a % b) + b) % b
}

/// Numeric value of a parameter string such as `"18.5"` or `"90 min"`.
///
/// Takes the leading run of `[0-9.+-]` characters. Returns NaN when that run
/// is empty or not a number.
pub fn leading_value(text: &str) -> f64 {
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')))
        .unwrap_or(text.len());
    text[..end].parse().unwrap_or(f64::NAN)
}

/// Sine of an angle in degrees.
#[inline]
pub fn sin(degrees: f64) -> f64 {
    let x = degrees_to_radians(degrees);
    #[cfg(not(feature = "libm"))]
    return x.sin();

    #[cfg(feature = "libm")]
    return libm::sin(x);
}

/// Cosine of an angle in degrees.
#[inline]
pub fn cos(degrees: f64) -> f64 {
    let x = degrees_to_radians(degrees);
    #[cfg(not(feature = "libm"))]
    return x.cos();

    #[cfg(feature = "libm")]
    return libm::cos(x);
}

/// Tangent of an angle in degrees.
#[inline]
pub fn tan(degrees: f64) -> f64 {
    let x = degrees_to_radians(degrees);
    #[cfg(not(feature = "libm"))]
    return x.tan();

    #[cfg(feature = "libm")]
    return libm::tan(x);
}

/// Arcsine in degrees. NaN outside `[-1, 1]`.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    let r = x.asin();

    #[cfg(feature = "libm")]
    let r = libm::asin(x);

    radians_to_degrees(r)
}

/// Arccosine in degrees. NaN outside `[-1, 1]`.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    let r = x.acos();

    #[cfg(feature = "libm")]
    let r = libm::acos(x);

    radians_to_degrees(r)
}

/// Arctangent in degrees.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    let r = x.atan();

    #[cfg(feature = "libm")]
    let r = libm::atan(x);

    radians_to_degrees(r)
}

/// Arccotangent in degrees.
#[inline]
pub fn acot(x: f64) -> f64 {
    atan(1.0 / x)
}

/// Two-argument arctangent in degrees.
#[inline]
pub fn atan2(y: f64, x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    let r = y.atan2(x);

    #[cfg(feature = "libm")]
    let r = libm::atan2(y, x);

    radians_to_degrees(r)
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.floor();

    #[cfg(feature = "libm")]
    return libm::floor(x);
}

/// Computes ceil(x) using the appropriate function for the compilation target.
#[inline]
pub fn ceil(x: f64) -> f64 {
    #[cfg(not(feature = "libm"))]
    return x.ceil();

    #[cfg(feature = "libm")]
    return libm::ceil(x);
}

/// Rounds half-way cases towards positive infinity.
#[inline]
pub fn round_half_up(x: f64) -> f64 {
    floor(x + 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-10;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_positive_mod() {
        assert_eq!(positive_mod(0.0, 360.0), 0.0);
        assert_eq!(positive_mod(450.0, 360.0), 90.0);
        assert_eq!(positive_mod(-90.0, 360.0), 270.0);
        assert_eq!(positive_mod(-360.0, 360.0), 0.0);
        assert_eq!(positive_mod(25.5, 24.0), 1.5);
        assert_eq!(positive_mod(-0.5, 24.0), 23.5);

        for i in -2000..2000 {
            let a = f64::from(i) * 0.37;
            let m = positive_mod(a, 24.0);
            assert!((0.0..24.0).contains(&m), "mod({a}, 24) = {m}");
        }
    }

    #[test]
    fn test_positive_mod_propagates_nan() {
        assert!(positive_mod(f64::NAN, 24.0).is_nan());
    }

    #[test]
    fn test_leading_value() {
        assert_eq!(leading_value("18.5"), 18.5);
        assert_eq!(leading_value("90 min"), 90.0);
        assert_eq!(leading_value("-4.5"), -4.5);
        assert_eq!(leading_value("+11min"), 11.0);
        assert!(leading_value("Standard").is_nan());
        assert!(leading_value("").is_nan());
        assert!(leading_value("1.2.3").is_nan());
    }

    #[test]
    fn test_degree_trigonometry() {
        assert!(sin(0.0).abs() < EPSILON);
        assert!((sin(90.0) - 1.0).abs() < EPSILON);
        assert!((cos(60.0) - 0.5).abs() < EPSILON);
        assert!((tan(45.0) - 1.0).abs() < EPSILON);
        assert!((asin(0.5) - 30.0).abs() < EPSILON);
        assert!((acos(0.5) - 60.0).abs() < EPSILON);
        assert!((atan(1.0) - 45.0).abs() < EPSILON);
        assert!((acot(1.0) - 45.0).abs() < EPSILON);
        assert!((atan2(1.0, -1.0) - 135.0).abs() < EPSILON);
    }

    #[test]
    fn test_inverse_trigonometry_out_of_domain_is_nan() {
        assert!(acos(1.5).is_nan());
        assert!(acos(-1.0001).is_nan());
        assert!(asin(2.0).is_nan());
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.4), 2.0);
    }
}
