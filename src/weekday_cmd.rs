//! Weekday command: report the day of week for a date.

use anyhow::Result;
use tracing::{info, info_span};

use chronos_calendar::weekday_of;

use crate::cli::WeekdayArgs;
use crate::convert;
use crate::format;
use crate::output::{self, DateFields};

/// Run the weekday lookup.
pub fn run(args: WeekdayArgs) -> Result<()> {
    let _cmd = info_span!("weekday").entered();

    let date = convert::build_date(&args.date)?;
    let weekday = weekday_of(date);
    info!(
        date = %format::format_date(date),
        weekday = weekday.kanji(),
        "weekday computed"
    );

    if args.json {
        println!("{}", output::to_json(&DateFields::from_date(date))?);
    } else {
        println!("{}", format::format_date_with_weekday(date, weekday));
    }

    Ok(())
}
