//! Text rendering for dates and weekday names.

use chronos_calendar::{CalendarDate, Era, Weekday};

/// Prefix rendered before the year of a BC date.
const BC_PREFIX: &str = "紀元前";

/// Formats a date as `year-MM-DD` with the year unpadded and BC dates
/// prefixed by 紀元前.
pub fn format_date(date: CalendarDate) -> String {
    let prefix = match date.era() {
        Era::Ad => "",
        Era::Bc => BC_PREFIX,
    };
    format!(
        "{prefix}{}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    )
}

/// Formats a date with its kanji weekday appended in fullwidth parentheses,
/// e.g. `2024-02-29（木）`.
pub fn format_date_with_weekday(date: CalendarDate, weekday: Weekday) -> String {
    format!("{}（{}）", format_date(date), weekday.kanji())
}
