//! Error types for decoding zone rules and looking them up.

use std::fmt;

/// Which of a zone's two transition rules a value belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
	/// The rule for when daylight savings time begins.
	Daylight,
	/// The rule for when standard time resumes.
	Standard
}

impl fmt::Display for Transition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Transition::Daylight => write!(f, "daylight"),
			Transition::Standard => write!(f, "standard")
		}
	}
}

/// The error type for all fallible operations in this crate.
///
/// Decode-time errors ([`ZoneError::MalformedRuleRecord`], [`ZoneError::InvalidTransitionRule`])
/// only ever affect the record they were raised for; [`crate::Registry::load`] skips that record
/// and keeps going. [`ZoneError::ZoneNotFound`] is returned to whoever asked for the zone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ZoneError {
	/// The raw rule record was too short to hold every field.
	#[error("malformed rule record for zone {index}: expected at least {expected} bytes, found {found}")]
	MalformedRuleRecord {
		/// Index of the zone the record was supplied for.
		index: i32,
		/// Number of bytes needed.
		expected: usize,
		/// Number of bytes available.
		found: usize
	},

	/// A zone observes daylight savings time, but one of its transition rules holds a value outside
	/// the range that field allows.
	#[error("invalid {transition} transition rule for zone {index}: {field} = {value}")]
	InvalidTransitionRule {
		/// Index of the zone the record was supplied for.
		index: i32,
		/// The transition rule holding the bad value.
		transition: Transition,
		/// Name of the out-of-range field.
		field: &'static str,
		/// The out-of-range value.
		value: i32
	},

	/// No zone with this index was loaded.
	#[error("zone {index} not found")]
	ZoneNotFound {
		/// The index that was requested.
		index: i32
	}
}
