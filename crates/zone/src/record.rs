//! Decoding of raw binary rule records.
//!
//! A rule record is a fixed-layout, little-endian buffer of at least [`RECORD_LEN`] bytes:
//!
//! | Offset | Width   | Field                                                        |
//! | ------ | ------- | ------------------------------------------------------------ |
//! | 0      | 4       | standard bias, signed minutes                                |
//! | 8      | 4       | daylight bias, signed minutes                                |
//! | 14     | 2       | daylight transition month (0 => no daylight savings time)    |
//! | 16     | 2       | daylight transition day of week                              |
//! | 18     | 2       | daylight transition occurrence                               |
//! | 20-26  | 2 each  | daylight transition hour, minute, second, millisecond        |
//! | 30     | 2       | standard transition month                                    |
//! | 32     | 2       | standard transition day of week                              |
//! | 34     | 2       | standard transition occurrence                               |
//! | 36-42  | 2 each  | standard transition hour, minute, second, millisecond        |
//!
//! The block at offset 14 says when daylight time begins; the block at offset 30 says when
//! standard time resumes. Bytes 4-7, 12-13 and 28-29 are not used. Names and the zone index are
//! not part of the record and are supplied alongside it.

use time::Minutes;
use crate::error::{Transition, ZoneError};
use crate::rule::{TimeOfDay, TransitionRule, Transitions, ZoneNames, ZoneRule};

/// Minimum length of a rule record, in bytes.
pub const RECORD_LEN: usize = 44;

/// Offset of the standard bias.
const STANDARD_BIAS: usize = 0;
/// Offset of the daylight bias.
const DAYLIGHT_BIAS: usize = 8;
/// Offset of the rule for when daylight time begins.
const DAYLIGHT_TRANSITION: usize = 14;
/// Offset of the rule for when standard time resumes.
const STANDARD_TRANSITION: usize = 30;

/// A raw rule record together with the names and index supplied alongside it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawRuleRecord {
	/// Labels for the zone
	pub names: ZoneNames,
	/// Registry key for the zone
	pub index: i32,
	/// The binary rule record
	pub data: Vec<u8>
}

impl RawRuleRecord {
	/// Decode this record into a [`ZoneRule`]. See [`decode_rule`].
	pub fn decode(self) -> Result<ZoneRule, ZoneError> {
		decode_rule(self.names, self.index, &self.data)
	}
}

/// Bounds-checked little-endian reads from a rule record.
struct Reader<'a> {
	bytes: &'a [u8],
	index: i32
}

impl Reader<'_> {
	/// Get `N` bytes starting at `offset`, or return [`ZoneError::MalformedRuleRecord`].
	#[inline(always)]
	fn get_or_malformed<const N: usize>(&self, offset: usize) -> Result<[u8; N], ZoneError> {
		self.bytes.get(offset..offset + N)
		          .and_then(|b| b.try_into().ok())
		          .ok_or(ZoneError::MalformedRuleRecord {
		          	index: self.index,
		          	expected: offset + N,
		          	found: self.bytes.len()
		          })
	}

	fn read_i32(&self, offset: usize) -> Result<i32, ZoneError> {
		Ok(i32::from_le_bytes(self.get_or_malformed(offset)?))
	}

	fn read_i16(&self, offset: usize) -> Result<i16, ZoneError> {
		Ok(i16::from_le_bytes(self.get_or_malformed(offset)?))
	}

	/// Read a 16-bit field and narrow it to `T`, rejecting values that don't fit (e.g. negatives).
	fn field<T: TryFrom<i16>>(&self, offset: usize, transition: Transition, field: &'static str) -> Result<T, ZoneError> {
		let value = self.read_i16(offset)?;
		T::try_from(value).map_err(|_| ZoneError::InvalidTransitionRule {
			index: self.index,
			transition,
			field,
			value: value as i32
		})
	}

	/// Read the transition rule block starting at `offset`.
	fn transition(&self, offset: usize, transition: Transition) -> Result<TransitionRule, ZoneError> {
		Ok(TransitionRule {
			month: self.field(offset, transition, "month")?,
			day_of_week: self.field(offset + 2, transition, "day of week")?,
			ordinal: self.field(offset + 4, transition, "occurrence")?,
			time_of_day: TimeOfDay {
				hour: self.field(offset + 6, transition, "hour")?,
				minute: self.field(offset + 8, transition, "minute")?,
				second: self.field(offset + 10, transition, "second")?,
				millisecond: self.field(offset + 12, transition, "millisecond")?
			}
		})
	}
}

/// Decode a raw rule record into a [`ZoneRule`].
///
/// A daylight transition month of zero means the zone does not observe daylight savings time; the
/// transition blocks are then ignored entirely, whatever they hold. Bytes past [`RECORD_LEN`] are
/// ignored.
///
/// # Errors
///
/// Returns [`ZoneError::MalformedRuleRecord`] if `bytes` is shorter than [`RECORD_LEN`].
///
/// Returns [`ZoneError::InvalidTransitionRule`] if the zone observes daylight savings time but
/// either transition rule has an out-of-range field.
///
/// # Examples
///
/// ```
/// # use zone::{decode_rule, ZoneNames, RECORD_LEN};
/// # use time::Minutes;
/// let mut record = [0u8; RECORD_LEN];
/// record[0..4].copy_from_slice(&(-540i32).to_le_bytes());
///
/// let zone = decode_rule(ZoneNames::new("Tokyo", "Tokyo Standard Time", ""), 235, &record).unwrap();
/// assert_eq!(zone.standard_bias(), Minutes(-540));
/// assert!(!zone.supports_daylight_savings());
/// ```
pub fn decode_rule(names: ZoneNames, index: i32, bytes: &[u8]) -> Result<ZoneRule, ZoneError> {
	if bytes.len() < RECORD_LEN {
		return Err(ZoneError::MalformedRuleRecord { index, expected: RECORD_LEN, found: bytes.len() });
	}

	let r = Reader { bytes, index };
	let standard_bias = Minutes(r.read_i32(STANDARD_BIAS)? as i64);
	let daylight_bias = Minutes(r.read_i32(DAYLIGHT_BIAS)? as i64);

	let transitions = if r.read_i16(DAYLIGHT_TRANSITION)? != 0 {
		Some(Transitions {
			daylight: r.transition(DAYLIGHT_TRANSITION, Transition::Daylight)?,
			standard: r.transition(STANDARD_TRANSITION, Transition::Standard)?
		})
	} else {
		None
	};

	ZoneRule::new(names, index, standard_bias, daylight_bias, transitions)
}
