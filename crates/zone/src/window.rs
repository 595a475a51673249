//! Yearly daylight savings windows.

use time::Timestamp;
use crate::rule::ZoneRule;

/// The daylight savings period of one zone for one calendar year, on the zone's local clock.
///
/// `start` is the local *standard* time at which clocks jump forward; `end` is the local *daylight*
/// time at which clocks fall back. In the southern hemisphere the daylight season straddles the
/// new year, so `end` comes before `start`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaylightWindow {
	/// When daylight time begins, in local standard time
	pub start: Timestamp,
	/// When standard time resumes, in local daylight time
	pub end: Timestamp
}

impl DaylightWindow {
	/// Whether the daylight season crosses the year boundary (`end` before `start`).
	pub fn wraps_year(&self) -> bool {
		self.start > self.end
	}
}

impl ZoneRule {
	/// Compute the daylight savings window for `year`.
	///
	/// Returns `None` if the zone does not observe daylight savings time. Windows are not cached;
	/// each call resolves both transition rules again.
	///
	/// # Examples
	///
	/// ```
	/// # use zone::{decode_rule, ZoneNames, RECORD_LEN};
	/// # use time::Timestamp;
	/// let mut record = [0u8; RECORD_LEN];
	/// record[0..4].copy_from_slice(&300i32.to_le_bytes());
	/// record[8..12].copy_from_slice(&(-60i32).to_le_bytes());
	/// // Daylight time begins on the second Sunday of March at 02:00
	/// record[14] = 3; record[18] = 2; record[20] = 2;
	/// // Standard time resumes on the first Sunday of November at 02:00
	/// record[30] = 11; record[34] = 1; record[36] = 2;
	///
	/// let zone = decode_rule(ZoneNames::default(), 35, &record).unwrap();
	/// let window = zone.daylight_window(2024).unwrap();
	/// assert_eq!(window.start, Timestamp::from_ymd_hms(2024, 3, 10, 2, 0, 0));
	/// assert_eq!(window.end, Timestamp::from_ymd_hms(2024, 11, 3, 2, 0, 0));
	/// ```
	pub fn daylight_window(&self, year: i32) -> Option<DaylightWindow> {
		self.transitions().map(|t| DaylightWindow {
			start: t.daylight.timestamp(year),
			end: t.standard.timestamp(year)
		})
	}
}
