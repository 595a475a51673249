#![allow(dead_code)]

use zone::{RawRuleRecord, ZoneNames, RECORD_LEN};

/// Encode a rule record from biases and two `[month, day of week, occurrence, h, m, s, ms]` blocks.
pub fn record(standard_bias: i32, daylight_bias: i32, daylight: [i16; 7], standard: [i16; 7]) -> Vec<u8> {
	let mut r = vec![0u8; RECORD_LEN];
	r[0..4].copy_from_slice(&standard_bias.to_le_bytes());
	r[8..12].copy_from_slice(&daylight_bias.to_le_bytes());
	let blocks = daylight.iter().chain(&standard);
	for (i, v) in blocks.enumerate() {
		let offset = if i < 7 { 14 + 2 * i } else { 30 + 2 * (i - 7) };
		r[offset..offset + 2].copy_from_slice(&v.to_le_bytes());
	}
	r
}

pub fn raw(index: i32, display: &str, data: Vec<u8>) -> RawRuleRecord {
	RawRuleRecord {
		names: ZoneNames::new(display, format!("{display} Standard Time"), format!("{display} Daylight Time")),
		index,
		data
	}
}

pub const NO_DST: [i16; 7] = [0; 7];

pub fn eastern() -> RawRuleRecord {
	raw(35, "Eastern", record(300, -60, [3, 0, 2, 2, 0, 0, 0], [11, 0, 1, 2, 0, 0, 0]))
}

pub fn central_europe() -> RawRuleRecord {
	raw(110, "Central Europe", record(-60, -60, [3, 0, 5, 2, 0, 0, 0], [10, 0, 5, 3, 0, 0, 0]))
}

pub fn aus_eastern() -> RawRuleRecord {
	raw(255, "AUS Eastern", record(-600, -60, [10, 0, 1, 2, 0, 0, 0], [4, 0, 1, 3, 0, 0, 0]))
}

pub fn tokyo() -> RawRuleRecord {
	raw(235, "Tokyo", record(-540, 0, NO_DST, NO_DST))
}

pub fn india() -> RawRuleRecord {
	raw(190, "India", record(-330, 0, NO_DST, NO_DST))
}

pub fn brisbane() -> RawRuleRecord {
	raw(260, "E. Australia", record(-600, 0, NO_DST, NO_DST))
}
