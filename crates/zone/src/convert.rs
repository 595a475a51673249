//! Conversion between local and UTC instants.
//!
//! Each conversion takes the yearly [`DaylightWindow`](crate::DaylightWindow), shifts it onto the
//! clock of the instant being tested, and checks membership in the half-open interval
//! `[start, end)`. When `start > end` the daylight season spans the new year, and membership
//! becomes `t >= start || t < end`.
//!
//! Nothing special is done about the hour skipped when clocks jump forward, or the hour repeated
//! when they fall back. A local time in the skipped hour resolves to standard time, and a local time
//! in the repeated hour resolves to daylight time. Round trips through UTC hold everywhere else.

use time::{Minutes, Timestamp};
use tracing::trace;
use crate::rule::ZoneRule;

/// Half-open interval test with wrap-around.
#[inline]
fn within(t: Timestamp, start: Timestamp, end: Timestamp) -> bool {
	if start > end {
		t >= start || t < end
	} else {
		start <= t && t < end
	}
}

impl ZoneRule {
	/// Whether daylight savings time is in effect at local instant `t`.
	pub fn is_daylight_from_local(&self, t: Timestamp) -> bool {
		let Some(window) = self.daylight_window(t.year()) else {
			return false;
		};

		// `start` is on the standard clock; daylight time begins at `start - daylight_bias` locally
		let start = window.start - self.daylight_bias();
		let end = window.end;
		let dst = within(t, start, end);
		trace!(zone = self.index(), %t, %start, %end, dst, "local daylight test");
		dst
	}

	/// Whether daylight savings time is in effect at UTC instant `t`.
	pub fn is_daylight_from_utc(&self, t: Timestamp) -> bool {
		let Some(window) = self.daylight_window(t.year()) else {
			return false;
		};

		let utc_offset = -self.standard_bias();
		let start = window.start - utc_offset;
		let end = window.end - utc_offset + self.daylight_bias();
		let dst = within(t, start, end);
		trace!(zone = self.index(), %t, %start, %end, dst, "utc daylight test");
		dst
	}

	/// Offset to add to UTC to get local time, given whether daylight time is in effect.
	fn offset(&self, dst: bool) -> Minutes {
		if dst {
			-self.standard_bias() - self.daylight_bias()
		} else {
			-self.standard_bias()
		}
	}

	/// Offset to add to UTC to get local time, at local instant `t`.
	pub fn utc_offset_from_local(&self, t: Timestamp) -> Minutes {
		self.offset(self.is_daylight_from_local(t))
	}

	/// Offset to add to UTC to get local time, at UTC instant `t`.
	pub fn utc_offset_from_utc(&self, t: Timestamp) -> Minutes {
		self.offset(self.is_daylight_from_utc(t))
	}

	/// Convert local instant `t` to UTC.
	///
	/// # Examples
	///
	/// ```
	/// # use zone::{ZoneNames, ZoneRule};
	/// # use time::{Minutes, Timestamp};
	/// // UTC+10 with no daylight savings time
	/// let zone = ZoneRule::fixed(ZoneNames::default(), 260, Minutes(-600));
	/// let local = Timestamp::from_ymd_hms(2024, 6, 1, 0, 0, 0);
	/// assert_eq!(zone.local_to_utc(local), Timestamp::from_ymd_hms(2024, 5, 31, 14, 0, 0));
	/// ```
	pub fn local_to_utc(&self, t: Timestamp) -> Timestamp {
		t - self.utc_offset_from_local(t)
	}

	/// Convert UTC instant `t` to local time.
	pub fn utc_to_local(&self, t: Timestamp) -> Timestamp {
		t + self.utc_offset_from_utc(t)
	}
}

/// Convert local instant `t` in zone `from` to local time in zone `to`, by way of UTC.
pub fn convert_zone_to_zone(t: Timestamp, from: &ZoneRule, to: &ZoneRule) -> Timestamp {
	to.utc_to_local(from.local_to_utc(t))
}
