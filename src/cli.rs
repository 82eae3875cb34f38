use clap::{Parser, Subcommand};

/// Chronos era-aware calendar arithmetic tool.
#[derive(Parser)]
#[command(
    name = "chronos",
    version,
    about = "Era-aware date arithmetic on the proleptic Gregorian calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Shift a date by a signed number of days.
    Shift(ShiftArgs),
    /// Report the day of week for a date.
    Weekday(WeekdayArgs),
}

/// Date fields shared by every subcommand.
///
/// The ranges here are deliberately coarse (day accepts 1..=31 for any
/// month); the precise check against the true month length happens when
/// the calendar date is built.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Era of the date: "ad" or "bc", case-insensitive.
    #[arg(short, long, default_value = "ad")]
    pub era: String,

    /// Year within the era, counted from 1 (there is no year 0).
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub year: u32,

    /// Month number.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=12))]
    pub month: u8,

    /// Day of month.
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=31))]
    pub day: u8,
}

/// Arguments for the `shift` subcommand.
#[derive(clap::Args)]
pub struct ShiftArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Signed day offset; negative values shift backward.
    #[arg(short = 'n', long = "offset", allow_negative_numbers = true)]
    pub offset: i64,

    /// Emit the result as pretty-printed JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `weekday` subcommand.
#[derive(clap::Args)]
pub struct WeekdayArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Emit the result as pretty-printed JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
