mod cli;
mod convert;
mod format;
mod logging;
mod output;
mod shift_cmd;
mod weekday_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Shift(args) => shift_cmd::run(args),
        Command::Weekday(args) => weekday_cmd::run(args),
    }
}
