//! Shift command: move a date by a signed number of days.

use anyhow::Result;
use tracing::{info, info_span};

use chronos_calendar::{shift_days, weekday_of};

use crate::cli::ShiftArgs;
use crate::convert;
use crate::format;
use crate::output::{self, DateFields, ShiftOutput};

/// Run the date-shift pipeline.
pub fn run(args: ShiftArgs) -> Result<()> {
    let _cmd = info_span!("shift").entered();

    // 1. Build the validated start date
    let start = convert::build_date(&args.date)?;
    info!(
        start = %format::format_date(start),
        offset = args.offset,
        "shifting date"
    );

    // 2. Walk the offset
    let result = shift_days(start, args.offset);
    let weekday = weekday_of(result);
    info!(
        result = %format::format_date(result),
        weekday = weekday.kanji(),
        "shift complete"
    );

    // 3. Print
    if args.json {
        let out = ShiftOutput {
            input: DateFields::from_date(start),
            offset_days: args.offset,
            result: DateFields::from_date(result),
        };
        println!("{}", output::to_json(&out)?);
    } else {
        println!("{}", format::format_date_with_weekday(result, weekday));
    }

    Ok(())
}
