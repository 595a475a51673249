//! Resolve "Nth weekday of the month" rules to concrete dates.

use time::{days_per_month, wday_from_ymd, Date};
use crate::rule::TransitionRule;

/// Find the date of the `ordinal`-th `day_of_week` (0-6 => Sunday-Saturday) in a given month.
///
/// For `ordinal` in [1, 4], this is the literal occurrence: the first matching weekday on or after
/// the 1st, plus `ordinal - 1` weeks. For `ordinal >= 5` ([`TransitionRule::LAST`]), this is the
/// last matching weekday of the month, found by stepping back from the month's last day.
///
/// Every valid combination of inputs yields exactly one date in the month.
///
/// # Panics
///
/// This function panics in debug mode if `month`, `day_of_week` or `ordinal` is outside the ranges
/// stated above. Rules from a decoded [`ZoneRule`](crate::ZoneRule) are always in range. In release
/// mode an out-of-range `day_of_week` wraps modulo 7, an `ordinal` of 0 acts as 1, and an
/// out-of-range `month` yields a meaningless date.
///
/// # Examples
///
/// ```
/// # use zone::nth_weekday;
/// # use time::Date;
/// // Second Sunday in March
/// assert_eq!(nth_weekday(2024, 3, 0, 2), Date::new(2024, 3, 10));
/// // Last Sunday in March
/// assert_eq!(nth_weekday(2024, 3, 0, 5), Date::new(2024, 3, 31));
/// ```
pub fn nth_weekday(year: i32, month: u8, day_of_week: u8, ordinal: u8) -> Date {
	debug_assert!(1 <= month && month <= 12);
	debug_assert!(day_of_week <= 6);
	debug_assert!(ordinal >= 1);
	let day_of_week = day_of_week % 7;

	let day = if ordinal < TransitionRule::LAST {
		// Shift the target weekday to be relative to the weekday the month starts on, then add whole
		// weeks for the ordinal.
		let first = wday_from_ymd(year, month, 1);
		let delta = (day_of_week + 7 - first) % 7;
		1 + delta + 7 * (ordinal.max(1) - 1)
	} else {
		let last = days_per_month(year, month);
		let wday = wday_from_ymd(year, month, last);
		let delta = (wday + 7 - day_of_week) % 7;
		last - delta
	};

	Date::new(year, month, day)
}
