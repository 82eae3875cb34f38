//! Day-of-week computation via a Zeller-style congruence.

use crate::date::CalendarDate;
use crate::era::astronomical_year;

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    /// 日
    Sunday,
    /// 月
    Monday,
    /// 火
    Tuesday,
    /// 水
    Wednesday,
    /// 木
    Thursday,
    /// 金
    Friday,
    /// 土
    Saturday,
}

/// The fixed weekday-name table, indexed Sunday = 0 through Saturday = 6.
const KANJI_NAMES: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

impl Weekday {
    /// Returns the index in 0..=6, with Sunday = 0 and Saturday = 6.
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the kanji name from the fixed table (日 through 土).
    pub fn kanji(self) -> &'static str {
        KANJI_NAMES[self as usize]
    }

    fn from_index(index: u8) -> Self {
        match index {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => unreachable!("weekday index is reduced mod 7"),
        }
    }
}

/// Returns the day of week of a date.
///
/// Uses a Zeller-type congruence on the signed astronomical year with a
/// March-based month index: January and February count as months 13 and
/// 14 of the previous year. The month term `floor(2.6 * (m + 1))` is
/// evaluated exactly as `(13 * (m + 1)) / 5` in integers, and the year
/// terms use Euclidean division so BC dates (negative astronomical
/// years) floor correctly and the pre-rotation residue is never
/// negative. The raw congruence yields 0 = Saturday; the result is
/// rotated so 0 = Sunday.
///
/// # Examples
///
/// ```
/// use chronos_calendar::{CalendarDate, Era, Weekday, weekday_of};
///
/// let date = CalendarDate::new(Era::Ad, 2024, 2, 29).unwrap();
/// assert_eq!(weekday_of(date), Weekday::Thursday);
/// ```
pub fn weekday_of(date: CalendarDate) -> Weekday {
    let mut y = astronomical_year(date.era(), date.year());
    let mut m = i64::from(date.month());
    if m < 3 {
        m += 12;
        y -= 1;
    }
    let w = (i64::from(date.day()) + (13 * (m + 1)) / 5 + y + y.div_euclid(4)
        - y.div_euclid(100)
        + y.div_euclid(400))
    .rem_euclid(7);
    Weekday::from_index(((w + 6) % 7) as u8)
}
