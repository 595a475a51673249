//! Convert timestamps between time zones using recurring daylight savings rules.
//!
//! Each zone is a fixed standard offset plus at most one daylight savings rule that repeats every
//! year ("second Sunday of March at 02:00"). Rules come from a TOML file of raw binary rule records
//! (see [`source`]); a default set covering common zones is built in.
//!
//! # Command Line Arguments
//!
//! General form: `tzconvert [options...] <command>`
//!
//! | Short form | Long form   | Argument  | Default       | Description                           |
//! | ---------- | ----------- | --------- | ------------- | ------------------------------------- |
//! | `-v`       | `--verbose` | None      | `warn` level  | More log output, repeat for more      |
//! | `-r`       | `--rules`   | Filename  | Bundled rules | The zone rule file to load            |
//!
//! Commands:
//! - `zones`: list every zone as index and display name
//! - `info <INDEX> [--year YEAR]`: show a zone's rules and its daylight window for a year
//! - `to-utc --zone INDEX [TIME]`: convert a local time to UTC
//! - `from-utc --zone INDEX [TIME]`: convert UTC to local time
//! - `convert --from INDEX --to INDEX [TIME]`: convert a local time between zones
//!
//! `TIME` is a [date time string] with no offset, and defaults to the current time. Log output
//! goes to stderr and can also be controlled with `RUST_LOG`.
//!
//! Local times inside the hour skipped when clocks jump forward are treated as standard time, and
//! local times inside the hour repeated when clocks fall back are treated as daylight time.
//!
//! [date time string]: time::parse::parse_timestamp
//!
//! # Examples
//!
//! ```sh
//! tzconvert zones
//! tzconvert info 35 --year 2025
//! tzconvert to-utc --zone 35 "2024-07-04 12:00"
//! tzconvert convert --from 35 --to 255 2024-07-04T12:00
//! tzconvert -vv --rules my-zones.toml from-utc --zone 4
//! ```

use std::io::{self, Write};
use std::process::ExitCode;
use anyhow::Result;
use clap::Parser;

use args::{Cli, Command};

mod args;
mod commands;
mod error;
mod logging;
mod source;

/// Load the rules and run `cli.command`, writing the report to stdout.
fn run(cli: Cli) -> Result<()> {
	let registry = source::load(cli.rules.as_deref())?;
	let mut out = io::stdout().lock();

	match cli.command {
		Command::Zones => commands::zones(&registry, &mut out)?,
		Command::Info { index, year } => commands::info(&registry, index, year, &mut out)?,
		Command::ToUtc { zone, time } => commands::to_utc(&registry, zone, time, &mut out)?,
		Command::FromUtc { zone, time } => commands::from_utc(&registry, zone, time, &mut out)?,
		Command::Convert { from, to, time } => commands::convert(&registry, from, to, time, &mut out)?
	}

	out.flush()?;
	Ok(())
}

/// Main program entry point.
///
/// Parses input arguments and runs the command. See [`crate`] documentation for details.
fn main() -> ExitCode {
	let cli = Cli::parse();
	logging::init(cli.verbose);

	run(cli)
		.map(|_| ExitCode::SUCCESS)
		.inspect_err(|e| eprintln!("Error: {e:#}"))
		.unwrap_or(ExitCode::FAILURE)
}
