//! Pure conversion functions: CLI argument strings -> calendar API types.

use anyhow::{Result, bail};

use chronos_calendar::{CalendarDate, Era};

use crate::cli::DateArgs;

/// Parses an era name string into the corresponding enum variant.
pub fn parse_era(s: &str) -> Result<Era> {
    match s.to_lowercase().as_str() {
        "ad" => Ok(Era::Ad),
        "bc" => Ok(Era::Bc),
        other => bail!("unknown era: {other:?} (expected \"ad\" or \"bc\")"),
    }
}

/// Builds a validated [`CalendarDate`] from the shared date arguments.
///
/// The CLI ranges only bound each field on its own; this is where a day
/// like Feb 30 or a leap day in a non-leap year gets rejected.
pub fn build_date(args: &DateArgs) -> Result<CalendarDate> {
    let era = parse_era(&args.era)?;
    let date = CalendarDate::new(era, args.year, args.month, args.day)?;
    Ok(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(era: &str, year: u32, month: u8, day: u8) -> DateArgs {
        DateArgs {
            era: era.to_string(),
            year,
            month,
            day,
        }
    }

    #[test]
    fn parse_era_accepts_case_insensitive_names() {
        assert_eq!(parse_era("ad").unwrap(), Era::Ad);
        assert_eq!(parse_era("AD").unwrap(), Era::Ad);
        assert_eq!(parse_era("bc").unwrap(), Era::Bc);
        assert_eq!(parse_era("Bc").unwrap(), Era::Bc);
    }

    #[test]
    fn parse_era_rejects_unknown_names() {
        assert!(parse_era("bce").is_err());
        assert!(parse_era("").is_err());
    }

    #[test]
    fn build_date_rejects_a_day_past_the_month_length() {
        let err = build_date(&args("ad", 2023, 2, 29)).unwrap_err();
        assert!(err.to_string().contains("invalid day"));
    }

    #[test]
    fn build_date_accepts_a_bc_leap_day() {
        assert!(build_date(&args("BC", 1, 2, 29)).is_ok());
    }
}
