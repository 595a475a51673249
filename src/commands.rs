//! Command implementations.
//!
//! Each command writes its report to `out`, so the output can be checked without a terminal.

use std::io::Write;
use anyhow::{ensure, Context, Result};
use time::Timestamp;
use tracing::debug;
use zone::{Registry, ZoneRule};

/// Current UTC time.
fn now() -> Result<Timestamp> {
	time::now().context("failed to get current system time")
}

/// Name and offset in effect, e.g. `Eastern Daylight Time (UTC-04:00)`.
fn describe(zone: &ZoneRule, daylight: bool) -> String {
	if daylight {
		format!("{} (UTC{})", zone.daylight_name(), -zone.standard_bias() - zone.daylight_bias())
	} else {
		format!("{} (UTC{})", zone.standard_name(), -zone.standard_bias())
	}
}

/// List every zone in index order.
pub fn zones(registry: &Registry, out: &mut impl Write) -> Result<()> {
	for (name, index) in registry.list_zones() {
		writeln!(out, "{index:>6}  {name}")?;
	}
	Ok(())
}

/// Describe one zone and its daylight window for `year` (defaults to the current year).
pub fn info(registry: &Registry, index: i32, year: Option<i32>, out: &mut impl Write) -> Result<()> {
	let zone = registry.lookup(index)?;
	let year = match year {
		Some(y) => y,
		None => now()?.year()
	};
	ensure!((1..=time::MAX_YEAR).contains(&year), "year {year} is outside 1-{}", time::MAX_YEAR);

	writeln!(out, "{}", zone.display_name())?;
	writeln!(out, "  index:            {}", zone.index())?;
	writeln!(out, "  standard name:    {}", zone.standard_name())?;
	writeln!(out, "  standard offset:  UTC{}", -zone.standard_bias())?;

	match (zone.transitions(), zone.daylight_window(year)) {
		(Some(t), Some(w)) => {
			writeln!(out, "  daylight name:    {}", zone.daylight_name())?;
			writeln!(out, "  daylight offset:  UTC{}", -zone.standard_bias() - zone.daylight_bias())?;
			writeln!(out, "  daylight begins:  {}", t.daylight)?;
			writeln!(out, "  standard resumes: {}", t.standard)?;
			writeln!(out, "  {} window:      {} to {}", year, w.start, w.end)?;
		},
		_ => writeln!(out, "  no daylight savings time")?
	}
	Ok(())
}

/// Convert local `time` in zone `index` to UTC. Defaults to the zone's current local time.
pub fn to_utc(registry: &Registry, index: i32, time: Option<Timestamp>, out: &mut impl Write) -> Result<()> {
	let zone = registry.lookup(index)?;
	let local = match time {
		Some(t) => t,
		None => zone.utc_to_local(now()?)
	};

	let daylight = zone.is_daylight_from_local(local);
	let utc = zone.local_to_utc(local);
	debug!(zone = index, %local, %utc, daylight, "converted local time to UTC");
	writeln!(out, "{} {} = {} UTC", local, describe(zone, daylight), utc)?;
	Ok(())
}

/// Convert UTC `time` to local time in zone `index`. Defaults to now.
pub fn from_utc(registry: &Registry, index: i32, time: Option<Timestamp>, out: &mut impl Write) -> Result<()> {
	let zone = registry.lookup(index)?;
	let utc = match time {
		Some(t) => t,
		None => now()?
	};

	let daylight = zone.is_daylight_from_utc(utc);
	let local = zone.utc_to_local(utc);
	debug!(zone = index, %utc, %local, daylight, "converted UTC to local time");
	writeln!(out, "{} UTC = {} {}", utc, local, describe(zone, daylight))?;
	Ok(())
}

/// Convert local `time` in zone `from` to local time in zone `to`. Defaults to the current local
/// time in `from`.
pub fn convert(registry: &Registry, from: i32, to: i32, time: Option<Timestamp>, out: &mut impl Write) -> Result<()> {
	let source = registry.lookup(from)?;
	let dest = registry.lookup(to)?;
	let local = match time {
		Some(t) => t,
		None => source.utc_to_local(now()?)
	};

	let utc = source.local_to_utc(local);
	let result = dest.utc_to_local(utc);
	writeln!(
		out,
		"{} {} = {} {}",
		local,
		describe(source, source.is_daylight_from_local(local)),
		result,
		describe(dest, dest.is_daylight_from_utc(utc))
	)?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use zone::ZoneError;
	use crate::source;
	use super::*;

	fn registry() -> Registry {
		Registry::load(source::parse(source::BUNDLED).unwrap())
	}

	fn output(f: impl FnOnce(&Registry, &mut Vec<u8>) -> Result<()>) -> String {
		let mut out = Vec::new();
		f(&registry(), &mut out).unwrap();
		String::from_utf8(out).unwrap()
	}

	fn ts(y: i32, m: u8, d: u8, hour: u8, min: u8) -> Option<Timestamp> {
		Some(Timestamp::from_ymd_hms(y, m, d, hour, min, 0))
	}

	#[test]
	fn zones_listing() {
		let out = output(|r, o| zones(r, o));
		let mut lines = out.lines();
		assert_eq!(lines.next(), Some("     4  (UTC-08:00) Pacific Time (US & Canada)"));
		assert!(out.contains("    35  (UTC-05:00) Eastern Time (US & Canada)\n"));
		assert_eq!(out.lines().count(), registry().len());
	}

	#[test]
	fn info_daylight_zone() {
		let out = output(|r, o| info(r, 35, Some(2024), o));
		assert_eq!(out, "\
(UTC-05:00) Eastern Time (US & Canada)
  index:            35
  standard name:    Eastern Standard Time
  standard offset:  UTC-05:00
  daylight name:    Eastern Daylight Time
  daylight offset:  UTC-04:00
  daylight begins:  second Sunday of March at 02:00:00
  standard resumes: first Sunday of November at 02:00:00
  2024 window:      2024-03-10T02:00:00 to 2024-11-03T02:00:00
");
	}

	#[test]
	fn info_fixed_zone() {
		let out = output(|r, o| info(r, 190, Some(2024), o));
		assert!(out.contains("  standard offset:  UTC+05:30\n"));
		assert!(out.ends_with("  no daylight savings time\n"));
	}

	#[test]
	fn conversions() {
		assert_eq!(
			output(|r, o| to_utc(r, 35, ts(2024, 7, 4, 12, 0), o)),
			"2024-07-04T12:00:00 Eastern Daylight Time (UTC-04:00) = 2024-07-04T16:00:00 UTC\n"
		);
		assert_eq!(
			output(|r, o| from_utc(r, 35, ts(2024, 1, 15, 17, 0), o)),
			"2024-01-15T17:00:00 UTC = 2024-01-15T12:00:00 Eastern Standard Time (UTC-05:00)\n"
		);
		assert_eq!(
			output(|r, o| convert(r, 35, 255, ts(2024, 7, 4, 12, 0), o)),
			"2024-07-04T12:00:00 Eastern Daylight Time (UTC-04:00) = \
			 2024-07-05T02:00:00 AUS Eastern Standard Time (UTC+10:00)\n"
		);
	}

	#[test]
	fn info_year_out_of_range() {
		let mut out = Vec::new();
		for year in [0, 10000, 300_000_000, i32::MIN] {
			let err = info(&registry(), 35, Some(year), &mut out).unwrap_err();
			assert_eq!(err.to_string(), format!("year {year} is outside 1-9999"));
		}
		assert!(out.is_empty());

		let out = output(|r, o| info(r, 35, Some(9999), o));
		assert!(out.ends_with("  9999 window:      9999-03-14T02:00:00 to 9999-11-07T02:00:00\n"), "{out}");
	}

	#[test]
	fn convert_matches_registry() {
		let r = registry();
		// Across the US spring gap and the European fall back
		for (from, to, t) in [(35, 110, ts(2024, 3, 10, 2, 30)), (110, 35, ts(2024, 10, 27, 2, 30)), (255, 4, ts(2024, 4, 7, 2, 30))] {
			let mut out = Vec::new();
			convert(&r, from, to, t, &mut out).unwrap();
			let expected = r.zone_to_zone(t.unwrap(), from, to).unwrap();
			let out = String::from_utf8(out).unwrap();
			assert!(out.contains(&format!("= {expected} ")), "{out}");
		}
	}

	#[test]
	fn unknown_zone() {
		let mut out = Vec::new();
		let err = to_utc(&registry(), 999999, ts(2024, 1, 1, 0, 0), &mut out).unwrap_err();
		assert_eq!(err.downcast_ref::<ZoneError>(), Some(&ZoneError::ZoneNotFound { index: 999999 }));
		assert!(out.is_empty());

		let err = convert(&registry(), 35, 999999, ts(2024, 1, 1, 0, 0), &mut out).unwrap_err();
		assert_eq!(err.to_string(), "zone 999999 not found");
	}
}
