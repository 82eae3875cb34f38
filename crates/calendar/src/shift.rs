//! Signed day-offset arithmetic.

use crate::date::CalendarDate;
use crate::era::Era;
use crate::month::days_in_month;

/// Shifts a date by a signed number of days.
///
/// The offset is consumed month by month rather than through a
/// closed-form day-number conversion: each step either lands inside the
/// current month or rolls over one month boundary, which keeps the era
/// crossings explicit. Stepping forward from BC year 1 moves to AD year
/// 1 and stepping backward from AD year 1 moves to BC year 1, with no
/// year zero in between. Every iteration consumes at least one day of
/// the remaining offset, so the walk terminates.
///
/// The returned date is always structurally valid. There is no error
/// path; any `i64` offset is accepted, at a cost of O(|offset| / 30)
/// iterations. That is fine for the interactive offsets this crate is
/// built for, but a closed-form conversion would be needed before
/// feeding it astronomical-scale offsets.
///
/// # Panics
///
/// The year count in each era is a `u32`. A walk that would step past
/// year `u32::MAX` (forward in AD, backward in BC) panics instead of
/// wrapping the year counter, which would otherwise fabricate a year 0.
///
/// # Examples
///
/// ```
/// use chronos_calendar::{CalendarDate, Era, shift_days};
///
/// let date = CalendarDate::new(Era::Ad, 2024, 2, 27).unwrap();
/// let shifted = shift_days(date, 2);
/// assert_eq!(shifted, CalendarDate::new(Era::Ad, 2024, 2, 29).unwrap());
///
/// // BC year 1 is followed directly by AD year 1.
/// let eve = CalendarDate::new(Era::Bc, 1, 12, 31).unwrap();
/// assert_eq!(
///     shift_days(eve, 1),
///     CalendarDate::new(Era::Ad, 1, 1, 1).unwrap()
/// );
/// ```
pub fn shift_days(date: CalendarDate, offset: i64) -> CalendarDate {
    let mut era = date.era();
    let mut year = date.year();
    let mut month = date.month();
    let mut day = date.day();
    let mut n = offset;

    while n != 0 {
        if n > 0 {
            let mdays = days_in_month(era, year, month);
            // Comparison form avoids overflow for offsets near i64::MAX.
            if n <= i64::from(mdays) - i64::from(day) {
                day = (i64::from(day) + n) as u8;
                n = 0;
            } else {
                // Consume the rest of this month, land on day 1 of the next.
                n -= i64::from(mdays) - i64::from(day) + 1;
                day = 1;
                month += 1;
                if month > 12 {
                    month = 1;
                    match era {
                        Era::Bc if year == 1 => era = Era::Ad,
                        Era::Bc => year -= 1,
                        Era::Ad => {
                            assert!(
                                year < u32::MAX,
                                "shift_days: shift runs past the largest representable year"
                            );
                            year += 1;
                        }
                    }
                }
            }
        } else if n > -i64::from(day) {
            day = (i64::from(day) + n) as u8;
            n = 0;
        } else {
            // Step back one month, land on its last day.
            if month == 1 {
                month = 12;
                match era {
                    Era::Ad if year == 1 => era = Era::Bc,
                    Era::Ad => year -= 1,
                    Era::Bc => {
                        assert!(
                            year < u32::MAX,
                            "shift_days: shift runs past the largest representable year"
                        );
                        year += 1;
                    }
                }
            } else {
                month -= 1;
            }
            n += i64::from(day);
            day = days_in_month(era, year, month);
        }
    }

    CalendarDate::from_valid_parts(era, year, month, day)
}
