//! Gregorian leap-year rule.

use crate::era::{Era, astronomical_year};

/// Returns true if the given (era, year) is a leap year.
///
/// The proleptic Gregorian rule is applied to the signed astronomical
/// year: divisible by 4, except century years not divisible by 400.
/// Because BC year N maps to astronomical year `-N + 1`, BC year 1
/// (astronomical year 0) is a leap year, as are BC 5, BC 9, and so on.
///
/// # Examples
///
/// ```
/// use chronos_calendar::{Era, is_leap_year};
///
/// assert!(is_leap_year(Era::Ad, 2024));
/// assert!(!is_leap_year(Era::Ad, 2023));
/// assert!(!is_leap_year(Era::Ad, 1900)); // century, not divisible by 400
/// assert!(is_leap_year(Era::Ad, 2000));
/// assert!(is_leap_year(Era::Bc, 1)); // astronomical year 0
/// ```
pub fn is_leap_year(era: Era, year: u32) -> bool {
    let y = astronomical_year(era, year);
    // `% 4 == 0` is sign-safe: a negative astronomical year is divisible
    // exactly when the truncated remainder is zero.
    y % 4 == 0 && (y % 100 != 0 || y % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisible_by_four() {
        assert!(is_leap_year(Era::Ad, 2024));
        assert!(is_leap_year(Era::Ad, 4));
        assert!(!is_leap_year(Era::Ad, 2023));
        assert!(!is_leap_year(Era::Ad, 1));
    }

    #[test]
    fn century_years() {
        assert!(!is_leap_year(Era::Ad, 1900));
        assert!(!is_leap_year(Era::Ad, 2100));
        assert!(is_leap_year(Era::Ad, 2000));
        assert!(is_leap_year(Era::Ad, 1600));
    }

    #[test]
    fn bc_years_follow_the_astronomical_rule() {
        // BC 1 = year 0, BC 5 = year -4, BC 9 = year -8: all leap.
        assert!(is_leap_year(Era::Bc, 1));
        assert!(is_leap_year(Era::Bc, 5));
        assert!(is_leap_year(Era::Bc, 9));
        // BC 2 = year -1, BC 4 = year -3: not leap.
        assert!(!is_leap_year(Era::Bc, 2));
        assert!(!is_leap_year(Era::Bc, 4));
    }

    #[test]
    fn bc_century_years() {
        // BC 101 = year -100: divisible by 100 but not 400.
        assert!(!is_leap_year(Era::Bc, 101));
        // BC 401 = year -400: divisible by 400.
        assert!(is_leap_year(Era::Bc, 401));
    }
}
