//! The zone rule model: a fixed standard offset plus at most one recurring daylight savings rule.

use std::fmt;
use std::ops::RangeInclusive;
use time::{Date, Milliseconds, Minutes, Timestamp, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND};
use crate::error::{Transition, ZoneError};
use crate::weekday::nth_weekday;

const WEEKDAYS: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];
const MONTHS: [&str; 12] = ["January", "February", "March", "April", "May", "June", "July", "August",
                            "September", "October", "November", "December"];
const ORDINALS: [&str; 5] = ["first", "second", "third", "fourth", "last"];

/// Human readable labels for a zone. They have no effect on conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ZoneNames {
	/// Name shown when listing zones, e.g. `(UTC-05:00) Eastern Time (US & Canada)`
	pub display: String,
	/// Name of the zone's standard time, e.g. `Eastern Standard Time`
	pub standard: String,
	/// Name of the zone's daylight time, e.g. `Eastern Daylight Time`
	pub daylight: String
}

impl ZoneNames {
	/// Create a set of zone names.
	pub fn new(display: impl Into<String>, standard: impl Into<String>, daylight: impl Into<String>) -> ZoneNames {
		ZoneNames {
			display: display.into(),
			standard: standard.into(),
			daylight: daylight.into()
		}
	}
}

/// Time of day at which a transition takes effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeOfDay {
	/// Hours, ranged [0, 23]
	pub hour: u8,
	/// Minutes, ranged [0, 59]
	pub minute: u8,
	/// Seconds, ranged [0, 59]
	pub second: u8,
	/// Milliseconds, ranged [0, 999]
	pub millisecond: u16
}

impl TimeOfDay {
	/// Create a time of day. The parts are checked when the owning [`ZoneRule`] is built.
	pub const fn new(hour: u8, minute: u8, second: u8, millisecond: u16) -> TimeOfDay {
		TimeOfDay { hour, minute, second, millisecond }
	}

	/// Time since midnight.
	pub fn as_millis(&self) -> Milliseconds {
		Milliseconds(self.hour as i64 * MILLIS_PER_HOUR
		             + self.minute as i64 * MILLIS_PER_MINUTE
		             + self.second as i64 * MILLIS_PER_SECOND
		             + self.millisecond as i64)
	}
}

impl fmt::Display for TimeOfDay {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
		if self.millisecond != 0 {
			write!(f, ".{:03}", self.millisecond)?;
		}
		Ok(())
	}
}

/// A recurring calendar event: the `ordinal`-th `day_of_week` of `month`, at `time_of_day`.
///
/// `ordinal` ranges [1, 5], where 5 is not a literal fifth occurrence but "the last occurrence in
/// the month", which may be the fourth or fifth depending on the year.
///
/// # Examples
///
/// ```
/// # use zone::{TimeOfDay, TransitionRule};
/// # use time::Date;
/// // Second Sunday in March at 02:00
/// let rule = TransitionRule::new(3, 0, 2, TimeOfDay::new(2, 0, 0, 0));
/// assert_eq!(rule.date(2024), Date::new(2024, 3, 10));
/// assert_eq!(rule.to_string(), "second Sunday of March at 02:00:00");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionRule {
	/// Month of the year, ranged [1, 12]
	pub month: u8,
	/// Day of the week, ranged [0, 6] => [Sunday, Saturday]
	pub day_of_week: u8,
	/// Occurrence of `day_of_week` within the month, ranged [1, 5]; 5 means last
	pub ordinal: u8,
	/// Local time at which the transition happens
	pub time_of_day: TimeOfDay
}

impl TransitionRule {
	/// The `ordinal` value meaning "last occurrence in the month".
	pub const LAST: u8 = 5;

	/// Create a transition rule. The parts are checked when the owning [`ZoneRule`] is built.
	pub const fn new(month: u8, day_of_week: u8, ordinal: u8, time_of_day: TimeOfDay) -> TransitionRule {
		TransitionRule { month, day_of_week, ordinal, time_of_day }
	}

	/// The date this rule falls on in `year`.
	pub fn date(&self, year: i32) -> Date {
		nth_weekday(year, self.month, self.day_of_week, self.ordinal)
	}

	/// The local instant this rule falls on in `year`.
	pub fn timestamp(&self, year: i32) -> Timestamp {
		self.date(year).timestamp() + self.time_of_day.as_millis()
	}

	/// Check every field against its allowed range.
	///
	/// # Errors
	///
	/// Returns [`ZoneError::InvalidTransitionRule`] naming the first out-of-range field.
	pub(crate) fn validate(&self, index: i32, transition: Transition) -> Result<(), ZoneError> {
		let checks: [(&'static str, i32, RangeInclusive<i32>); 7] = [
			("month", self.month as i32, 1..=12),
			("day of week", self.day_of_week as i32, 0..=6),
			("occurrence", self.ordinal as i32, 1..=TransitionRule::LAST as i32),
			("hour", self.time_of_day.hour as i32, 0..=23),
			("minute", self.time_of_day.minute as i32, 0..=59),
			("second", self.time_of_day.second as i32, 0..=59),
			("millisecond", self.time_of_day.millisecond as i32, 0..=999)
		];

		match checks.into_iter().find(|(_, value, range)| !range.contains(value)) {
			Some((field, value, _)) => Err(ZoneError::InvalidTransitionRule { index, transition, field, value }),
			None => Ok(())
		}
	}
}

impl fmt::Display for TransitionRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let ordinal = ORDINALS.get(self.ordinal.saturating_sub(1) as usize).unwrap_or(&"last");
		let weekday = WEEKDAYS.get(self.day_of_week as usize).unwrap_or(&"?");
		let month = MONTHS.get(self.month.saturating_sub(1) as usize).unwrap_or(&"?");
		write!(f, "{} {} of {} at {}", ordinal, weekday, month, self.time_of_day)
	}
}

/// The pair of recurring transitions for a zone that observes daylight savings time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transitions {
	/// When daylight time begins, in local standard time
	pub daylight: TransitionRule,
	/// When standard time resumes, in local daylight time
	pub standard: TransitionRule
}

/// A time zone's conversion rule: a fixed standard bias plus at most one recurring daylight
/// savings rule, applied to every year.
///
/// Biases follow the "subtract from UTC" convention: `UTC = local + bias`. A zone at UTC+10 has a
/// standard bias of `-600` minutes, and a typical daylight bias is `-60` minutes (clocks move
/// forward by an hour).
///
/// A zone rule is immutable once built. Zones without daylight savings time have no transitions at
/// all, so there is nothing to consult by mistake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZoneRule {
	names: ZoneNames,
	index: i32,
	standard_bias: Minutes,
	daylight_bias: Minutes,
	transitions: Option<Transitions>
}

impl ZoneRule {
	/// Build a zone rule, checking any transition rules.
	///
	/// # Errors
	///
	/// Returns [`ZoneError::InvalidTransitionRule`] if either transition rule has an out-of-range
	/// field.
	pub fn new(
		names: ZoneNames,
		index: i32,
		standard_bias: Minutes,
		daylight_bias: Minutes,
		transitions: Option<Transitions>
	) -> Result<ZoneRule, ZoneError> {
		if let Some(t) = &transitions {
			t.daylight.validate(index, Transition::Daylight)?;
			t.standard.validate(index, Transition::Standard)?;
		}

		Ok(ZoneRule { names, index, standard_bias, daylight_bias, transitions })
	}

	/// Build a zone rule with a fixed offset and no daylight savings time.
	pub fn fixed(names: ZoneNames, index: i32, standard_bias: Minutes) -> ZoneRule {
		ZoneRule {
			names,
			index,
			standard_bias,
			daylight_bias: Minutes(0),
			transitions: None
		}
	}

	/// All of the zone's names.
	pub fn names(&self) -> &ZoneNames {
		&self.names
	}

	/// Name shown when listing zones.
	pub fn display_name(&self) -> &str {
		&self.names.display
	}

	/// Name of the zone's standard time.
	pub fn standard_name(&self) -> &str {
		&self.names.standard
	}

	/// Name of the zone's daylight time.
	pub fn daylight_name(&self) -> &str {
		&self.names.daylight
	}

	/// Registry key of the zone.
	pub fn index(&self) -> i32 {
		self.index
	}

	/// Bias of standard time: `UTC = local + standard_bias` outside of daylight savings time.
	pub fn standard_bias(&self) -> Minutes {
		self.standard_bias
	}

	/// Additional bias applied while daylight savings time is in effect.
	pub fn daylight_bias(&self) -> Minutes {
		self.daylight_bias
	}

	/// Whether the zone observes daylight savings time.
	pub fn supports_daylight_savings(&self) -> bool {
		self.transitions.is_some()
	}

	/// The zone's transition rules, if it observes daylight savings time.
	pub fn transitions(&self) -> Option<&Transitions> {
		self.transitions.as_ref()
	}
}

impl fmt::Display for ZoneRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.display_name())
	}
}
