//! Parse wall-clock date time strings like `YYYY-MM-DD HH:mm:ss.sss`.
//!
//! This module provides [`parse_timestamp`], which parses a date time string into a [`Timestamp`].
//! The string carries no timezone: it is read as-is on whatever clock the caller intends, so a
//! local time in some zone and a UTC time parse the same way.
//!
//! # Examples
//! ```
//! # use time::{parse::parse_timestamp, time::Timestamp};
//! assert_eq!(
//! 	parse_timestamp(b"2025-02-18T12:30:45"),
//! 	Ok(Timestamp::from_ymd_hms(2025, 2, 18, 12, 30, 45))
//! );
//! assert_eq!(
//! 	parse_timestamp(b"2025-02-18 12:30"),
//! 	Ok(Timestamp::from_ymd_hms(2025, 2, 18, 12, 30, 0))
//! );
//! ```
//!
//! See [`parse_timestamp`] for more details on the supported input formats.

use core::str::FromStr;
use crate::time::{days_per_month, Milliseconds, Timestamp, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};

/// Error type for parsing date time strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
	/// Expected a year, but it was missing or malformed.
	#[error("Year missing or malformed")]
	MissingYear,
	/// Expected a month, but it was missing or malformed.
	#[error("Month missing or malformed")]
	MissingMonth,
	/// The supplied month was outside of [1, 12].
	#[error("Month out of range")]
	MonthOutOfRange,
	/// Expected a day, but it was missing or malformed.
	#[error("Day missing or malformed")]
	MissingDay,
	/// The supplied day was outside of [1, 28|29|30|31] depending on the month & year.
	#[error("Day out of range")]
	DayOutOfRange,
	/// Expected hours, but it was missing or malformed.
	#[error("Hours missing or malformed")]
	MissingHours,
	/// The supplied hour was outside of [0, 23].
	#[error("Hours out of range")]
	HoursOutOfRange,
	/// Hour was supplied but minutes were missing.
	#[error("Minutes missing or malformed")]
	MissingMinutes,
	/// The supplied minutes were outside of [0, 59].
	#[error("Minutes out of range")]
	MinutesOutOfRange,
	/// Expected seconds, but it was missing or malformed.
	#[error("Seconds missing or malformed")]
	MissingSeconds,
	/// The supplied seconds were outside of [0, 59].
	#[error("Seconds out of range")]
	SecondsOutOfRange,
	/// Expected milliseconds, but it was missing or malformed.
	#[error("Milliseconds missing or malformed")]
	MissingMilliseconds,
	/// Found unexpected bytes after a valid date time string.
	#[error("Unexpected input at end of date time string")]
	UnexpectedInput
}

/// Parse a fixed-length, unsigned integer.
///
/// `N` must be less than 5 to ensure the parsed value fits into a u16 with no possible overflow.
fn parse_num<const N: usize>(bytes: &[u8], e: ParseError) -> Result<(&[u8], u16), ParseError> {
	// Only allow numbers that can safely fit in u16
	const { assert!(N < 5); }

	let Some((digits, rest)) = bytes.split_at_checked(N) else {
		return Err(e);
	};

	let mut r: u16 = 0;
	for b in digits {
		r = match *b {
			// Don't need checked math because we can't overflow
			v @ b'0'..=b'9' => r * 10 + (v - b'0') as u16,
			_ => return Err(e)
		};
	}

	Ok((rest, r))
}

/// Split off a single separator byte, which must be one of `seps`.
#[inline(always)]
fn separator<'a>(bytes: &'a [u8], seps: &[u8]) -> Result<&'a [u8], ParseError> {
	match bytes.split_first() {
		Some((b, rest)) if seps.contains(b) => Ok(rest),
		_ => Err(ParseError::UnexpectedInput)
	}
}

/// Parse a date time string into a wall-clock [`Timestamp`].
///
/// Examples of valid formats:
/// - `YYYY`
/// - `YYYY-MM`
/// - `YYYY-MM-DD`
/// - `YYYY-MM-DDTHH:mm` or `YYYY-MM-DD HH:mm`
/// - `YYYY-MM-DDTHH:mm:ss` or `YYYY-MM-DD HH:mm:ss`
/// - `YYYY-MM-DDTHH:mm:ss.sss` or `YYYY-MM-DD HH:mm:ss.sss`
///
/// Missing components default to the start of the period, so `2025-02` is `2025-02-01T00:00:00`.
/// Timezone designators (`Z`, `+01:00`) are not accepted; which clock the result belongs to is up
/// to the caller.
///
/// # Errors
///
/// Returns [`ParseError`] if the input was malformed or invalid in any way. This includes cases
/// where a valid timestamp was read but additional characters remain in `bytes`.
///
/// # Examples
/// ```
/// # use time::{parse::parse_timestamp, time::Timestamp};
/// assert_eq!(parse_timestamp(b"2025"), Ok(Timestamp::from_ymd(2025, 1, 1)));
/// assert_eq!(parse_timestamp(b"2025-02-18"), Ok(Timestamp::from_ymd(2025, 2, 18)));
/// assert_eq!(
/// 	parse_timestamp(b"2025-02-18T12:30:45.123").map(|t| t.as_millis()),
/// 	Ok(1739881845123)
/// );
/// ```
pub fn parse_timestamp(bytes: &[u8]) -> Result<Timestamp, ParseError> {
	let (bytes, year) = parse_num::<4>(bytes, ParseError::MissingYear)?;
	let year = year as i32;
	if bytes.is_empty() {
		return Ok(Timestamp::from_ymd(year, 1, 1));
	}

	// Optional month
	let (bytes, month) = parse_num::<2>(separator(bytes, b"-")?, ParseError::MissingMonth)?;
	if month == 0 || month > 12 {
		return Err(ParseError::MonthOutOfRange);
	}
	let month = month as u8;
	if bytes.is_empty() {
		return Ok(Timestamp::from_ymd(year, month, 1));
	}

	// Optional day
	let (bytes, day) = parse_num::<2>(separator(bytes, b"-")?, ParseError::MissingDay)?;
	if day == 0 || day > days_per_month(year, month) as u16 {
		return Err(ParseError::DayOutOfRange);
	}
	let mut timestamp = Timestamp::from_ymd(year, month, day as u8);
	if bytes.is_empty() {
		return Ok(timestamp);
	}

	// Optional hours
	let (bytes, hours) = parse_num::<2>(separator(bytes, b"T ")?, ParseError::MissingHours)?;
	if hours > 23 {
		return Err(ParseError::HoursOutOfRange);
	}
	timestamp += Milliseconds(hours as i64 * MILLIS_PER_HOUR);
	if bytes.is_empty() {
		return Err(ParseError::MissingMinutes);
	}

	// Required minutes
	let (bytes, minutes) = match bytes.split_first() {
		Some((b':', b)) => parse_num::<2>(b, ParseError::MissingMinutes)?,
		_ => return Err(ParseError::UnexpectedInput),
	};
	if minutes > 59 {
		return Err(ParseError::MinutesOutOfRange);
	}
	timestamp += Milliseconds(minutes as i64 * MILLIS_PER_MINUTE);
	if bytes.is_empty() {
		return Ok(timestamp);
	}

	// Optional seconds
	let (bytes, seconds) = parse_num::<2>(separator(bytes, b":")?, ParseError::MissingSeconds)?;
	if seconds > 59 {
		return Err(ParseError::SecondsOutOfRange);
	}
	timestamp += Milliseconds(seconds as i64 * MILLIS_PER_SECOND);
	if bytes.is_empty() {
		return Ok(timestamp);
	}

	// Optional milliseconds
	let (bytes, ms) = parse_num::<3>(separator(bytes, b".")?, ParseError::MissingMilliseconds)?;
	timestamp += Milliseconds(ms as i64);
	if bytes.is_empty() {
		Ok(timestamp)
	} else {
		Err(ParseError::UnexpectedInput)
	}
}

impl FromStr for Timestamp {
	type Err = ParseError;

	/// Parse a date time string using [`parse_timestamp`].
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse_timestamp(s.as_bytes())
	}
}
