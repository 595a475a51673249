//! Command line arguments.
//!
//! See [crate] documentation for details on commands and examples.

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use time::Timestamp;

/// Convert timestamps between time zones using recurring daylight savings rules.
#[derive(Debug, Parser)]
#[command(name = "tzconvert", version)]
pub struct Cli {
	/// Increase verbosity (-v info, -vv debug, -vvv trace)
	#[arg(short, long, global = true, action = clap::ArgAction::Count)]
	pub verbose: u8,

	/// Zone rule file to use instead of the bundled rules
	#[arg(short, long, global = true, value_name = "FILE")]
	pub rules: Option<PathBuf>,

	#[command(subcommand)]
	pub command: Command
}

/// Available commands.
#[derive(Debug, Subcommand)]
#[cfg_attr(test, derive(PartialEq))]
pub enum Command {
	/// List every zone as index and display name
	Zones,
	/// Show a zone's names, biases, transition rules and daylight window
	Info {
		/// Zone index
		#[arg(allow_negative_numbers = true)]
		index: i32,
		/// Year to compute the daylight window for (1-9999), defaults to the current year
		#[arg(short, long, value_parser = clap::value_parser!(i32).range(1..=time::MAX_YEAR as i64))]
		year: Option<i32>
	},
	/// Convert a local time in a zone to UTC
	ToUtc {
		/// Zone index
		#[arg(short, long, allow_negative_numbers = true)]
		zone: i32,
		/// Local time, YYYY-MM-DD[THH:mm[:ss[.sss]]], defaults to now
		time: Option<Timestamp>
	},
	/// Convert a UTC time to local time in a zone
	FromUtc {
		/// Zone index
		#[arg(short, long, allow_negative_numbers = true)]
		zone: i32,
		/// UTC time, YYYY-MM-DD[THH:mm[:ss[.sss]]], defaults to now
		time: Option<Timestamp>
	},
	/// Convert a local time in one zone to local time in another
	Convert {
		/// Source zone index
		#[arg(short, long, allow_negative_numbers = true)]
		from: i32,
		/// Destination zone index
		#[arg(short, long, allow_negative_numbers = true)]
		to: i32,
		/// Local time in the source zone, YYYY-MM-DD[THH:mm[:ss[.sss]]], defaults to now
		time: Option<Timestamp>
	}
}
