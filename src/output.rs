//! JSON output structures for command results.

use anyhow::{Context, Result};
use serde::Serialize;

use chronos_calendar::{weekday_of, CalendarDate, Era};

use crate::format;

/// A date broken into era-tagged fields, shared by both commands.
#[derive(Debug, Serialize)]
pub struct DateFields {
    pub era: &'static str,
    pub year: u32,
    pub month: u8,
    pub day: u8,
    pub weekday: WeekdayFields,
    /// Rendered form, identical to the text output.
    pub display: String,
}

/// Weekday of a date in every representation the tool knows.
#[derive(Debug, Serialize)]
pub struct WeekdayFields {
    pub index: u8,
    pub name: String,
    pub kanji: &'static str,
}

/// Output of the `shift` subcommand.
#[derive(Debug, Serialize)]
pub struct ShiftOutput {
    pub input: DateFields,
    pub offset_days: i64,
    pub result: DateFields,
}

impl DateFields {
    pub fn from_date(date: CalendarDate) -> Self {
        let weekday = weekday_of(date);
        Self {
            era: match date.era() {
                Era::Ad => "ad",
                Era::Bc => "bc",
            },
            year: date.year(),
            month: date.month(),
            day: date.day(),
            weekday: WeekdayFields {
                index: weekday.index(),
                name: format!("{weekday:?}"),
                kanji: weekday.kanji(),
            },
            display: format::format_date_with_weekday(date, weekday),
        }
    }
}

/// Serialize a command output to a pretty-printed JSON string.
pub fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("failed to serialize output to JSON")
}
