//! Month length lookup.

use crate::era::Era;
use crate::leap::is_leap_year;

/// Number of days in each month of a non-leap year
/// (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the number of days in the given month.
///
/// February consults the leap-year rule for the given (era, year); every
/// other month has a fixed length.
///
/// # Panics
///
/// Panics if `month` is not in 1..=12. Callers validate the month before
/// lookup; [`CalendarDate::new`](crate::CalendarDate::new) is the
/// checked entry point.
///
/// # Examples
///
/// ```
/// use chronos_calendar::{Era, days_in_month};
///
/// assert_eq!(days_in_month(Era::Ad, 2024, 2), 29);
/// assert_eq!(days_in_month(Era::Ad, 2023, 2), 28);
/// assert_eq!(days_in_month(Era::Ad, 2024, 4), 30);
/// assert_eq!(days_in_month(Era::Ad, 2024, 1), 31);
/// ```
pub fn days_in_month(era: Era, year: u32, month: u8) -> u8 {
    assert!(
        (1..=12).contains(&month),
        "days_in_month: month {month} out of range 1..=12"
    );
    if month == 2 && is_leap_year(era, year) {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirty_one_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(days_in_month(Era::Ad, 2023, month), 31, "month {month}");
        }
    }

    #[test]
    fn thirty_day_months() {
        for month in [4, 6, 9, 11] {
            assert_eq!(days_in_month(Era::Ad, 2023, month), 30, "month {month}");
        }
    }

    #[test]
    fn february_leap_and_common() {
        assert_eq!(days_in_month(Era::Ad, 2024, 2), 29);
        assert_eq!(days_in_month(Era::Ad, 2023, 2), 28);
        assert_eq!(days_in_month(Era::Ad, 1900, 2), 28);
        assert_eq!(days_in_month(Era::Ad, 2000, 2), 29);
    }

    #[test]
    fn february_in_bc_years() {
        // BC 1 is astronomical year 0, a leap year.
        assert_eq!(days_in_month(Era::Bc, 1, 2), 29);
        assert_eq!(days_in_month(Era::Bc, 2, 2), 28);
        assert_eq!(days_in_month(Era::Bc, 5, 2), 29);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn month_zero_panics() {
        days_in_month(Era::Ad, 2024, 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn month_thirteen_panics() {
        days_in_month(Era::Ad, 2024, 13);
    }

    #[test]
    fn table_integrity() {
        let common: u16 = DAYS_PER_MONTH[1..=12].iter().copied().map(u16::from).sum();
        assert_eq!(common, 365);
    }
}
