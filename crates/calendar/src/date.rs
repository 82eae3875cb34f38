//! Era-aware calendar date.

use crate::era::Era;
use crate::error::CalendarError;
use crate::month::days_in_month;

/// A date in the proleptic Gregorian calendar with an explicit era.
///
/// Instances are always structurally valid: [`CalendarDate::new`] is the
/// only public constructor and it checks every field, including the day
/// against the true month length. The day-offset engine upholds the same
/// invariant, so a `CalendarDate` can never hold an out-of-range field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    era: Era,
    year: u32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a new `CalendarDate` from era, year, month, and day.
    ///
    /// The year is the positive 1-based count within the era (there is
    /// no year zero), and the day is checked against the month length
    /// for that (era, year), so February 29 is accepted exactly in leap
    /// years.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidYear`] if `year` is zero,
    /// [`CalendarError::InvalidMonth`] if `month` is not in 1..=12, and
    /// [`CalendarError::InvalidDay`] if `day` is not valid for the given
    /// month, year, and era.
    ///
    /// # Examples
    ///
    /// ```
    /// use chronos_calendar::{CalendarDate, Era};
    ///
    /// let date = CalendarDate::new(Era::Ad, 2024, 2, 29).unwrap();
    /// assert_eq!(date.day(), 29);
    ///
    /// assert!(CalendarDate::new(Era::Ad, 2023, 2, 29).is_err());
    /// ```
    pub fn new(era: Era, year: u32, month: u8, day: u8) -> Result<Self, CalendarError> {
        if year == 0 {
            return Err(CalendarError::InvalidYear { year });
        }
        if !(1..=12).contains(&month) {
            return Err(CalendarError::InvalidMonth { month });
        }
        let max_day = days_in_month(era, year, month);
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                day,
                month,
                max_day,
            });
        }
        Ok(Self {
            era,
            year,
            month,
            day,
        })
    }

    /// Builds a date from fields already known to be in range.
    ///
    /// Used by the day-offset engine, which only ever lands on day 1 or
    /// on values bounded by the month length it just looked up.
    pub(crate) fn from_valid_parts(era: Era, year: u32, month: u8, day: u8) -> Self {
        debug_assert!(year >= 1, "year {year} must be >= 1");
        debug_assert!((1..=12).contains(&month), "month {month} out of range");
        debug_assert!(
            (1..=days_in_month(era, year, month)).contains(&day),
            "day {day} out of range for month {month}"
        );
        Self {
            era,
            year,
            month,
            day,
        }
    }

    /// Returns the era.
    pub fn era(self) -> Era {
        self.era
    }

    /// Returns the year within the era (1-based).
    pub fn year(self) -> u32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }
}
