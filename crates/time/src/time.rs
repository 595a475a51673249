//! Wall-clock timestamps and calendar arithmetic, unaware of timezone.
//!
//! A [`Timestamp`] counts milliseconds since 1970-01-01T00:00:00 on some clock. The same type is
//! used for local and UTC instants; converting between the two is a matter of adding or subtracting
//! [`Minutes`]. Calendar conversion (to and from year/month/day) uses floor division throughout,
//! so negative timestamps (dates before 1970) are handled the same as positive ones.
//!
//! # Examples
//!
//! ```
//! # use time::time::{Timestamp, Tm};
//! let date = Timestamp::from_millis(1718617807_250).tm();
//! assert_eq!(date, Tm {
//! 	ms: 250,
//! 	sec: 7,
//! 	min: 50,
//! 	hour: 9,
//! 	day: 17,
//! 	mon: 6,
//! 	year: 2024,
//! 	wday: 1,
//! 	yday: 169
//! });
//! ```

use core::fmt;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};
#[cfg(feature = "now")]
use core::mem::MaybeUninit;
#[cfg(feature = "now")]
use libc::{timespec, clock_gettime, CLOCK_REALTIME};

/// Milliseconds per second.
pub const MILLIS_PER_SECOND: i64 = 1000;
/// Milliseconds per minute.
pub const MILLIS_PER_MINUTE: i64 = MILLIS_PER_SECOND * 60;
/// Milliseconds per hour.
pub const MILLIS_PER_HOUR: i64 = MILLIS_PER_MINUTE * 60;
/// Milliseconds per day.
pub const MILLIS_PER_DAY: i64 = MILLIS_PER_HOUR * 24;
/// Largest year a date time string can hold (four digits).
pub const MAX_YEAR: i32 = 9999;
/// Days per non-leap year.
const DAYS_PER_NON_LEAP_YEAR: i64 = 365;
/// Leap years occur every 4 years...
const YEARS_PER_LEAP_YEAR_1: i64 = 4;
/// ... except every 100, unless it's the end of the era.
const YEARS_PER_LEAP_YEAR_2: i64 = 100;
/// Number of years per era.
const YEARS_PER_ERA: i64 = 400;
/// Number of days every 4 years.
const DAYS_PER_LEAP_YEAR_1: i64 = YEARS_PER_LEAP_YEAR_1 * DAYS_PER_NON_LEAP_YEAR;
/// Number of days every 100 years.
const DAYS_PER_LEAP_YEAR_2: i64 = YEARS_PER_LEAP_YEAR_2 * DAYS_PER_NON_LEAP_YEAR
                                + YEARS_PER_LEAP_YEAR_2 / YEARS_PER_LEAP_YEAR_1 - 1;
/// Number of days every era (400 years), excluding the last leap day.
const DAYS_PER_LEAP_YEAR_3: i64 = YEARS_PER_ERA * DAYS_PER_NON_LEAP_YEAR
                                + (YEARS_PER_ERA / YEARS_PER_LEAP_YEAR_2)
                                * (YEARS_PER_LEAP_YEAR_2 / YEARS_PER_LEAP_YEAR_1 - 1);
/// Number of days every era (400 years).
const DAYS_PER_ERA: i64 = DAYS_PER_LEAP_YEAR_3 + 1;
/// Days from January 1 to February 28, inclusive.
const DAYS_FROM_JAN_TO_FEB: i64 = 31 + 28;
/// Days per week.
const DAYS_PER_WEEK: i64 = 7;
/// Days from March 1, 0000 to January 1, 1970.
const DAYS_FROM_JAN_1970_TO_MARCH_0000: i64 = (1970 / YEARS_PER_ERA) * DAYS_PER_ERA
                                            + (1970 % YEARS_PER_ERA) * DAYS_PER_NON_LEAP_YEAR
                                            + (1970 % YEARS_PER_ERA) / YEARS_PER_LEAP_YEAR_1
                                            - (1970 % YEARS_PER_ERA) / YEARS_PER_LEAP_YEAR_2
                                            - DAYS_FROM_JAN_TO_FEB;

/// A signed number of minutes, used for UTC offsets and biases.
///
/// # Examples
///
/// ```
/// # use time::time::{Minutes, Timestamp};
/// let t = Timestamp::from_ymd_hms(2024, 1, 1, 0, 0, 0);
/// assert_eq!(t + Minutes(90), Timestamp::from_ymd_hms(2024, 1, 1, 1, 30, 0));
/// assert_eq!(t - Minutes(1), Timestamp::from_ymd_hms(2023, 12, 31, 23, 59, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Minutes(pub i64);

/// A signed number of milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Milliseconds(pub i64);

impl From<Minutes> for Milliseconds {
	fn from(value: Minutes) -> Self {
		Milliseconds(value.0 * MILLIS_PER_MINUTE)
	}
}

impl Neg for Minutes {
	type Output = Self;

	fn neg(self) -> Self::Output {
		Minutes(-self.0)
	}
}

impl Add for Minutes {
	type Output = Self;

	fn add(self, rhs: Minutes) -> Self::Output {
		Minutes(self.0 + rhs.0)
	}
}

impl Sub for Minutes {
	type Output = Self;

	fn sub(self, rhs: Minutes) -> Self::Output {
		Minutes(self.0 - rhs.0)
	}
}

impl fmt::Display for Minutes {
	/// Format as a signed `±HH:mm` offset.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let sign = if self.0 < 0 { '-' } else { '+' };
		let abs = self.0.unsigned_abs();
		write!(f, "{}{:02}:{:02}", sign, abs / 60, abs % 60)
	}
}

/// A wall-clock instant with millisecond granularity and no timezone.
///
/// Supports addition and subtraction with [`Minutes`] and [`Milliseconds`]. Subtracting two
/// timestamps yields the [`Milliseconds`] between them.
///
/// # Examples
///
/// ```
/// # use time::time::{Milliseconds, Minutes, Timestamp};
/// let mut t = Timestamp::from_ymd_hms(2025, 1, 1, 12, 0, 0);
/// t += Milliseconds(1500);
/// assert_eq!(t.to_string(), "2025-01-01T12:00:01.500");
/// assert_eq!(t - Timestamp::from_ymd_hms(2025, 1, 1, 12, 0, 0), Milliseconds(1500));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
	/// Create a timestamp from milliseconds since 1970-01-01T00:00:00.
	#[inline(always)]
	pub const fn from_millis(ms: i64) -> Timestamp {
		Timestamp(ms)
	}

	/// Milliseconds since 1970-01-01T00:00:00.
	#[inline(always)]
	pub const fn as_millis(&self) -> i64 {
		self.0
	}

	/// Get the timestamp for 00:00:00 on a given year, month, and day.
	///
	/// The inputs are not validated; see [`days_from_ymd`].
	///
	/// # Panics
	///
	/// Milliseconds since 1970 only fit in an `i64` for years within about 292 million of 1970.
	/// Outside that range this function panics in debug mode and wraps in release mode. Callers
	/// taking a year from user input should bound it first, e.g. to `1..=`[`MAX_YEAR`].
	pub fn from_ymd(y: i32, m: u8, d: u8) -> Timestamp {
		Timestamp(days_from_ymd(y, m, d) * MILLIS_PER_DAY)
	}

	/// Get the timestamp for a given year, month, day, hour, minute, and second.
	///
	/// # Examples
	///
	/// ```
	/// # use time::time::Timestamp;
	/// assert_eq!(Timestamp::from_ymd_hms(2024, 6, 17, 9, 50, 7).as_millis(), 1718617807000);
	/// assert_eq!(Timestamp::from_ymd_hms(1969, 12, 31, 23, 59, 59).as_millis(), -1000);
	/// ```
	pub fn from_ymd_hms(y: i32, m: u8, d: u8, hour: u8, min: u8, sec: u8) -> Timestamp {
		Timestamp::from_ymd(y, m, d)
			+ Milliseconds(hour as i64 * MILLIS_PER_HOUR
			               + min as i64 * MILLIS_PER_MINUTE
			               + sec as i64 * MILLIS_PER_SECOND)
	}

	/// Days since 1970-01-01, rounding toward negative infinity.
	#[inline(always)]
	pub fn days(&self) -> i64 {
		self.0.div_euclid(MILLIS_PER_DAY)
	}

	/// Milliseconds since the start of this timestamp's day, ranged [0, 86399999].
	#[inline(always)]
	pub fn millis_of_day(&self) -> i64 {
		self.0.rem_euclid(MILLIS_PER_DAY)
	}

	/// The calendar date this timestamp falls on.
	pub fn date(&self) -> Date {
		let (year, month, day) = ymd_from_days(self.days());
		Date { year, month, day }
	}

	/// The absolute Gregorian calendar year this timestamp falls in.
	///
	/// # Examples
	///
	/// ```
	/// # use time::time::Timestamp;
	/// assert_eq!(Timestamp::from_millis(1704067199999).year(), 2023);
	/// assert_eq!(Timestamp::from_millis(1704067200000).year(), 2024);
	/// assert_eq!(Timestamp::from_millis(-1).year(), 1969);
	/// ```
	pub fn year(&self) -> i32 {
		self.date().year
	}

	/// Break this timestamp down into calendar fields.
	pub fn tm(&self) -> Tm {
		Tm::new(*self)
	}
}

impl Add<Milliseconds> for Timestamp {
	type Output = Self;

	fn add(self, rhs: Milliseconds) -> Self::Output {
		Timestamp(self.0 + rhs.0)
	}
}

impl AddAssign<Milliseconds> for Timestamp {
	fn add_assign(&mut self, rhs: Milliseconds) {
		*self = *self + rhs;
	}
}

impl Sub<Milliseconds> for Timestamp {
	type Output = Self;

	fn sub(self, rhs: Milliseconds) -> Self::Output {
		Timestamp(self.0 - rhs.0)
	}
}

impl SubAssign<Milliseconds> for Timestamp {
	fn sub_assign(&mut self, rhs: Milliseconds) {
		*self = *self - rhs;
	}
}

impl Add<Minutes> for Timestamp {
	type Output = Self;

	fn add(self, rhs: Minutes) -> Self::Output {
		self + Milliseconds::from(rhs)
	}
}

impl AddAssign<Minutes> for Timestamp {
	fn add_assign(&mut self, rhs: Minutes) {
		*self = *self + rhs;
	}
}

impl Sub<Minutes> for Timestamp {
	type Output = Self;

	fn sub(self, rhs: Minutes) -> Self::Output {
		self - Milliseconds::from(rhs)
	}
}

impl SubAssign<Minutes> for Timestamp {
	fn sub_assign(&mut self, rhs: Minutes) {
		*self = *self - rhs;
	}
}

impl Sub for Timestamp {
	type Output = Milliseconds;

	fn sub(self, rhs: Timestamp) -> Self::Output {
		Milliseconds(self.0 - rhs.0)
	}
}

impl fmt::Display for Timestamp {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		fmt::Display::fmt(&self.tm(), f)
	}
}

/// Get the current UTC time.
///
/// This function will return `None` if `libc::clock_gettime` fails.
///
/// This function is thread safe.
///
/// # Examples
///
/// ```
/// # use time::time::now;
/// let c = now().expect("Failed to get current time");
/// assert!(c.year() >= 2024);
/// ```
#[cfg(feature = "now")]
pub fn now() -> Option<Timestamp> {
	let mut time = MaybeUninit::<timespec>::uninit();
	// Safety:
	// - clock_gettime does not read time, only writes
	// - if clock_gettime returns zero, time is successfully initialized
	unsafe {
		match clock_gettime(CLOCK_REALTIME, time.as_mut_ptr()) {
			0 => {
				let time = time.assume_init();
				Some(Timestamp(time.tv_sec as i64 * MILLIS_PER_SECOND + time.tv_nsec as i64 / 1000000))
			},
			_ => None
		}
	}
}

/// Check whether a given `year` is a leap year.
///
/// # Examples
///
/// ```
/// # use time::time::isleapyear;
/// assert_eq!(isleapyear(1900), false);
/// assert_eq!(isleapyear(2000), true);
/// assert_eq!(isleapyear(2023), false);
/// assert_eq!(isleapyear(2024), true);
/// ```
#[inline(always)]
pub fn isleapyear(year: i32) -> bool {
	let l = if year%100 != 0 { 3 } else { 15 };
	(year & l) == 0
}

/// The number of days in a given month.
///
/// `y` must be the absolute Gregorian calendar year, and `m` the 1-indexed month starting at
/// January.
pub fn days_per_month(y: i32, m: u8) -> u8 {
	// Details: https://www.youtube.com/watch?v=J9KijLyP-yg&t=1470s
	if m == 2 {
		if isleapyear(y) { 29 } else { 28 }
	} else {
		30 | (m ^ (m >> 3))
	}
}

/// Get the number of days since 1970-01-01 for a given year, month, and day.
///
/// `y` must be the absolute Gregorian calendar year, `m` the 1-indexed month starting at January,
/// and `d` the day of the month. Days past the end of the month roll over into the next month.
///
/// # Examples
///
/// ```
/// # use time::time::days_from_ymd;
/// assert_eq!(days_from_ymd(1970, 1, 1), 0);
/// assert_eq!(days_from_ymd(2024, 2, 29), 19782);
/// assert_eq!(days_from_ymd(1969, 12, 31), -1);
/// ```
pub fn days_from_ymd(y: i32, m: u8, d: u8) -> i64 {
	// The Gregorian calendar repeats every 400 years. Rotating the year to Mar-Feb puts the leap day
	// last, after which the day of the era is a simple linear function of year and month.
	//
	// More details: http://howardhinnant.github.io/date_algorithms.html#days_from_civil
	let y = if m < 3 { y as i64 - 1 } else { y as i64 };
	let era = y.div_euclid(YEARS_PER_ERA);
	let yoe = y - era * YEARS_PER_ERA;
	let m2 = if m > 2 { m as i64 - 3 } else { m as i64 + 9 };
	let doy = (153 * m2 + 2) / 5 + d as i64 - 1;
	let doe = yoe * DAYS_PER_NON_LEAP_YEAR
			+ yoe / YEARS_PER_LEAP_YEAR_1
			- yoe / YEARS_PER_LEAP_YEAR_2
			+ doy;
	era * DAYS_PER_ERA + doe - DAYS_FROM_JAN_1970_TO_MARCH_0000
}

/// Get the year, month, and day for a number of days since 1970-01-01.
///
/// # Examples
///
/// ```
/// # use time::time::ymd_from_days;
/// assert_eq!(ymd_from_days(0), (1970, 1, 1));
/// assert_eq!(ymd_from_days(19782), (2024, 2, 29));
/// assert_eq!(ymd_from_days(-1), (1969, 12, 31));
/// ```
pub fn ymd_from_days(days: i64) -> (i32, u8, u8) {
	// Inverse of days_from_ymd, more details:
	// http://howardhinnant.github.io/date_algorithms.html#civil_from_days
	let z = days + DAYS_FROM_JAN_1970_TO_MARCH_0000;
	let era = z.div_euclid(DAYS_PER_ERA);
	let doe = z - era * DAYS_PER_ERA;
	let yoe = (doe
		       - doe / DAYS_PER_LEAP_YEAR_1
		       + doe / DAYS_PER_LEAP_YEAR_2
		       - doe / DAYS_PER_LEAP_YEAR_3
		      ) / DAYS_PER_NON_LEAP_YEAR;
	let doy = doe - (DAYS_PER_NON_LEAP_YEAR * yoe
	                 + yoe / YEARS_PER_LEAP_YEAR_1
	                 - yoe / YEARS_PER_LEAP_YEAR_2);
	// Linear equation that calculates the month from a set day of year
	let mp = (5 * doy + 2) / 153;
	// Linear equation that calculates the day of month from a day of year and month number
	let d = doy - (153 * mp + 2) / 5 + 1;
	// Convert from Mar-Feb year to Jan-Dec year
	let m = if mp < 10 { mp + 3 } else { mp - 9 };
	let y = yoe + era * YEARS_PER_ERA + (m < 3) as i64;
	(y as i32, m as u8, d as u8)
}

/// Get the weekday (0-6 => Sunday-Saturday) for a number of days since 1970-01-01.
#[inline(always)]
pub fn wday_from_days(days: i64) -> u8 {
	// Jan 1, 1970 was a Thursday
	(days + 4).rem_euclid(DAYS_PER_WEEK) as u8
}

/// Get the weekday (0-6 => Sunday-Saturday) for a given year, month, and day.
///
/// # Examples
///
/// ```
/// # use time::time::wday_from_ymd;
/// assert_eq!(wday_from_ymd(2024, 1, 1), 1);   // Monday
/// assert_eq!(wday_from_ymd(2024, 2, 29), 4);  // Thursday
/// assert_eq!(wday_from_ymd(2024, 10, 27), 0); // Sunday
/// ```
pub fn wday_from_ymd(y: i32, m: u8, d: u8) -> u8 {
	wday_from_days(days_from_ymd(y, m, d))
}

/// A Gregorian calendar date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
	/// Absolute Gregorian calendar year
	pub year: i32,
	/// Month of the year, ranged [1, 12]
	pub month: u8,
	/// Day of the month, ranged [1, 31]
	pub day: u8
}

impl Date {
	/// Create a date from its parts. The parts are not validated.
	pub const fn new(year: i32, month: u8, day: u8) -> Date {
		Date { year, month, day }
	}

	/// The timestamp for 00:00:00 on this date.
	pub fn timestamp(&self) -> Timestamp {
		Timestamp::from_ymd(self.year, self.month, self.day)
	}

	/// Day of the week, ranged [0, 6] => [Sunday, Saturday].
	pub fn wday(&self) -> u8 {
		wday_from_ymd(self.year, self.month, self.day)
	}
}

impl fmt::Display for Date {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
	}
}

/// Gregorian calendar time, similar to [`libc::tm`] with some differences.
///
/// Key differences:
/// - `mon` is [0, 11] in [`libc::tm`] but [1, 12] in [`Tm`].
/// - `yday` is [0, 365] in [`libc::tm`] but [1, 366] in [`Tm`].
/// - `year` is the absolute year rather than years since 1900.
/// - `ms` carries the millisecond within the second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tm {
	/// Milliseconds, ranged [0, 999]
	pub ms: u16,
	/// Seconds, ranged [0, 59]
	pub sec: u8,
	/// Minutes, ranged [0, 59]
	pub min: u8,
	/// Hours, ranged [0, 23]
	pub hour: u8,
	/// Day of the month, ranged [1, 31]
	pub day: u8,
	/// Month of the year, ranged [1, 12]
	pub mon: u8,
	/// Absolute Gregorian calendar year
	pub year: i32,
	/// Day of the week, ranged [0, 6] => [Sunday, Saturday]
	pub wday: u8,
	/// Day of the year, ranged [1, 366]
	pub yday: u16
}

impl Tm {
	/// Convert a timestamp into calendar fields.
	pub fn new(timestamp: Timestamp) -> Tm {
		let days = timestamp.days();
		let rem = timestamp.millis_of_day();
		let (year, mon, day) = ymd_from_days(days);
		let yday = days - days_from_ymd(year, 1, 1) + 1;

		Tm {
			ms: (rem % MILLIS_PER_SECOND) as u16,
			sec: (rem / MILLIS_PER_SECOND % 60) as u8,
			min: (rem / MILLIS_PER_MINUTE % 60) as u8,
			hour: (rem / MILLIS_PER_HOUR) as u8,
			day,
			mon,
			year,
			wday: wday_from_days(days),
			yday: yday as u16
		}
	}

}

impl fmt::Display for Tm {
	/// Format as `YYYY-MM-DDTHH:mm:ss`, with a `.sss` suffix if milliseconds are non-zero.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}",
		       self.year, self.mon, self.day, self.hour, self.min, self.sec)?;
		if self.ms != 0 {
			write!(f, ".{:03}", self.ms)?;
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use core::mem::MaybeUninit;
	use libc::{time_t, tm};

	// Get the libc version of UTC calendar time
	fn utc_time(time: time_t) -> tm {
		unsafe {
			let mut utc = MaybeUninit::<tm>::uninit();
			libc::gmtime_r(&time, utc.as_mut_ptr());
			utc.assume_init()
		}
	}

	fn compare_dates(time: i64) {
		let d1 = utc_time(time as time_t);
		let d2 = Timestamp::from_millis(time * MILLIS_PER_SECOND).tm();
		assert_eq!(d1.tm_sec, d2.sec as i32, "time: {}, sec: {} vs. {}", time, d1.tm_sec, d2.sec);
		assert_eq!(d1.tm_min, d2.min as i32, "time: {}, min: {} vs. {}", time, d1.tm_min, d2.min);
		assert_eq!(d1.tm_hour, d2.hour as i32, "time: {}, hour: {} vs. {}", time, d1.tm_hour, d2.hour);
		assert_eq!(d1.tm_mday, d2.day as i32, "time: {}, mday: {} vs. {}", time, d1.tm_mday, d2.day);
		assert_eq!(d1.tm_mon + 1, d2.mon as i32, "time: {}, mon: {} vs. {}", time, d1.tm_mon + 1, d2.mon);
		assert_eq!(d1.tm_year + 1900, d2.year, "time: {}, year: {} vs. {}", time, d1.tm_year + 1900, d2.year);
		assert_eq!(d1.tm_wday, d2.wday as i32, "time: {}, wday: {} vs. {}", time, d1.tm_wday, d2.wday);
		assert_eq!(d1.tm_yday + 1, d2.yday as i32, "time: {}, yday: {} vs. {}", time, d1.tm_yday + 1, d2.yday);
	}

	#[test]
	fn tm_matches_libc() {
		compare_dates(0);
		compare_dates(5097600);
		compare_dates(17185926);
		compare_dates(31449600);
		compare_dates(94694400);
		compare_dates(1718617807);
		compare_dates(1655459407);
		compare_dates(1844848207);
		compare_dates(961235407);
		compare_dates(929613007);
		compare_dates(-1);
		compare_dates(-94694400);
		compare_dates(-2208988800);
	}

	#[test]
	fn tm_millis() {
		let tm = Timestamp::from_millis(-1).tm();
		assert_eq!((tm.year, tm.mon, tm.day), (1969, 12, 31));
		assert_eq!((tm.hour, tm.min, tm.sec, tm.ms), (23, 59, 59, 999));

		let tm = Timestamp::from_millis(1718617807_042).tm();
		assert_eq!(tm.ms, 42);
		assert_eq!(tm.sec, 7);
	}

	#[test]
	fn isleapyear_test() {
		assert_eq!(isleapyear(1900), false);
		assert_eq!(isleapyear(2000), true);
		assert_eq!(isleapyear(2020), true);
		assert_eq!(isleapyear(2023), false);
		assert_eq!(isleapyear(2024), true);
		assert_eq!(isleapyear(-400), true);
		assert_eq!(isleapyear(-100), false);

		// Make sure extreme inputs cannot panic
		isleapyear(i32::MIN);
		isleapyear(i32::MAX);
	}

	#[test]
	fn days_from_ymd_test() {
		assert_eq!(days_from_ymd(1970, 1, 1), 0);
		assert_eq!(days_from_ymd(2024, 1, 1), 19723);
		assert_eq!(days_from_ymd(2024, 2, 28), 19781);
		assert_eq!(days_from_ymd(2024, 3, 1), 19783);
		assert_eq!(days_from_ymd(2000, 3, 1), 11017);
		assert_eq!(days_from_ymd(1900, 1, 1), -25567);
		assert_eq!(days_from_ymd(1, 1, 1), -719162);
	}

	#[test]
	fn ymd_round_trip() {
		for days in (-800000..800000).step_by(97) {
			let (y, m, d) = ymd_from_days(days);
			assert!((1..=12).contains(&m), "days: {}, month: {}", days, m);
			assert!(d >= 1 && d <= days_per_month(y, m), "days: {}, day: {}", days, d);
			assert_eq!(days_from_ymd(y, m, d), days);
		}
	}

	#[test]
	fn wday_from_ymd_test() {
		assert_eq!(wday_from_ymd(1970, 1, 1), 4);
		assert_eq!(wday_from_ymd(2024, 1, 1), 1);
		assert_eq!(wday_from_ymd(2024, 2, 28), 3);
		assert_eq!(wday_from_ymd(2024, 2, 29), 4);
		assert_eq!(wday_from_ymd(2024, 3, 1), 5);
		assert_eq!(wday_from_ymd(2024, 10, 27), 0);
		assert_eq!(wday_from_ymd(1969, 12, 31), 3);
		assert_eq!(wday_from_ymd(1, 1, 1), 1);
	}

	#[test]
	fn days_per_month_test() {
		assert_eq!(days_per_month(2024, 1), 31);
		assert_eq!(days_per_month(2024, 2), 29);
		assert_eq!(days_per_month(2023, 2), 28);
		assert_eq!(days_per_month(2100, 2), 28);
		assert_eq!(days_per_month(2024, 3), 31);
		assert_eq!(days_per_month(2024, 4), 30);
		assert_eq!(days_per_month(2024, 5), 31);
		assert_eq!(days_per_month(2024, 6), 30);
		assert_eq!(days_per_month(2024, 7), 31);
		assert_eq!(days_per_month(2024, 8), 31);
		assert_eq!(days_per_month(2024, 9), 30);
		assert_eq!(days_per_month(2024, 10), 31);
		assert_eq!(days_per_month(2024, 11), 30);
		assert_eq!(days_per_month(2024, 12), 31);
	}

	#[test]
	fn timestamp_arithmetic() {
		let t = Timestamp::from_ymd_hms(2024, 3, 10, 2, 0, 0);
		assert_eq!(t + Minutes(60), Timestamp::from_ymd_hms(2024, 3, 10, 3, 0, 0));
		assert_eq!(t - Minutes(-60), Timestamp::from_ymd_hms(2024, 3, 10, 3, 0, 0));
		assert_eq!(t - Minutes(180), Timestamp::from_ymd_hms(2024, 3, 9, 23, 0, 0));
		assert_eq!((t + Milliseconds(1)) - t, Milliseconds(1));
		assert_eq!(-Minutes(300) - Minutes(-60), Minutes(-240));

		let mut u = t;
		u += Minutes(1);
		u -= Milliseconds(60000);
		assert_eq!(u, t);
	}

	#[test]
	fn display() {
		extern crate std;
		use std::string::ToString;

		assert_eq!(Timestamp::from_ymd_hms(2024, 5, 31, 14, 0, 0).to_string(), "2024-05-31T14:00:00");
		assert_eq!(Timestamp::from_millis(-1).to_string(), "1969-12-31T23:59:59.999");
		assert_eq!(Date::new(2024, 3, 10).to_string(), "2024-03-10");
		assert_eq!(Minutes(-300).to_string(), "-05:00");
		assert_eq!(Minutes(570).to_string(), "+09:30");
	}

	#[test]
	fn year_bounds() {
		extern crate std;
		use std::string::ToString;

		for y in [1, MAX_YEAR] {
			let t = Timestamp::from_ymd(y, 12, 31);
			assert_eq!(t.date(), Date::new(y, 12, 31));
			assert_eq!(Timestamp::from_ymd(y, 1, 1).year(), y);
		}
		assert_eq!(Timestamp::from_ymd(MAX_YEAR, 12, 31).to_string(), "9999-12-31T00:00:00");
	}
}
