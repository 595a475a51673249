//! The set of loaded zones, keyed by index.

use std::collections::BTreeMap;
use time::{Minutes, Timestamp};
use tracing::{debug, warn};
use crate::convert::convert_zone_to_zone;
use crate::error::ZoneError;
use crate::record::RawRuleRecord;
use crate::rule::ZoneRule;

/// An immutable collection of zone rules, keyed by index.
///
/// A registry is built once with [`Registry::load`] and then only read. To pick up new rules, build
/// a new registry and swap it in; see [`crate::SharedRegistry`].
///
/// Every operation that takes a zone index returns [`ZoneError::ZoneNotFound`] for an index that
/// was never loaded.
#[derive(Clone, Debug, Default)]
pub struct Registry {
	zones: BTreeMap<i32, ZoneRule>
}

impl Registry {
	/// Build a registry from raw rule records.
	///
	/// A record that fails to decode is logged and skipped; the rest still load. When two records
	/// share an index, the later one wins.
	pub fn load<I>(records: I) -> Registry
	where
		I: IntoIterator<Item = RawRuleRecord>
	{
		let mut registry = Registry::default();
		let mut skipped = 0usize;

		for record in records {
			let index = record.index;
			match record.decode() {
				Ok(zone) => registry.insert(zone),
				Err(e) => {
					warn!(index, error = %e, "skipping zone rule record");
					skipped += 1;
				}
			}
		}

		debug!(zones = registry.len(), skipped, "loaded zone registry");
		registry
	}

	/// Build a registry from already-decoded zone rules. Later rules replace earlier ones with the
	/// same index.
	pub fn from_rules<I>(rules: I) -> Registry
	where
		I: IntoIterator<Item = ZoneRule>
	{
		let mut registry = Registry::default();
		for zone in rules {
			registry.insert(zone);
		}
		registry
	}

	fn insert(&mut self, zone: ZoneRule) {
		let index = zone.index();
		if let Some(old) = self.zones.insert(index, zone) {
			warn!(index, replaced = old.display_name(), "duplicate zone index, keeping the later record");
		}
	}

	/// Get the zone with `index`, if loaded.
	pub fn get(&self, index: i32) -> Option<&ZoneRule> {
		self.zones.get(&index)
	}

	/// Get the zone with `index`.
	///
	/// # Errors
	///
	/// Returns [`ZoneError::ZoneNotFound`] if no zone with `index` was loaded.
	pub fn lookup(&self, index: i32) -> Result<&ZoneRule, ZoneError> {
		self.get(index).ok_or(ZoneError::ZoneNotFound { index })
	}

	/// Number of loaded zones.
	pub fn len(&self) -> usize {
		self.zones.len()
	}

	/// Whether no zones are loaded.
	pub fn is_empty(&self) -> bool {
		self.zones.is_empty()
	}

	/// All loaded zones in ascending index order.
	pub fn zones(&self) -> impl Iterator<Item = &ZoneRule> {
		self.zones.values()
	}

	/// `(display name, index)` of every loaded zone, in ascending index order.
	pub fn list_zones(&self) -> impl Iterator<Item = (&str, i32)> {
		self.zones.values().map(|z| (z.display_name(), z.index()))
	}

	/// Convert local instant `t` in zone `index` to UTC.
	pub fn local_to_utc(&self, t: Timestamp, index: i32) -> Result<Timestamp, ZoneError> {
		Ok(self.lookup(index)?.local_to_utc(t))
	}

	/// Convert UTC instant `t` to local time in zone `index`.
	pub fn utc_to_local(&self, t: Timestamp, index: i32) -> Result<Timestamp, ZoneError> {
		Ok(self.lookup(index)?.utc_to_local(t))
	}

	/// Convert local instant `t` in zone `from` to local time in zone `to`.
	pub fn zone_to_zone(&self, t: Timestamp, from: i32, to: i32) -> Result<Timestamp, ZoneError> {
		Ok(convert_zone_to_zone(t, self.lookup(from)?, self.lookup(to)?))
	}

	/// Whether daylight savings time is in effect at local instant `t` in zone `index`.
	pub fn is_daylight_from_local(&self, t: Timestamp, index: i32) -> Result<bool, ZoneError> {
		Ok(self.lookup(index)?.is_daylight_from_local(t))
	}

	/// Whether daylight savings time is in effect at UTC instant `t` in zone `index`.
	pub fn is_daylight_from_utc(&self, t: Timestamp, index: i32) -> Result<bool, ZoneError> {
		Ok(self.lookup(index)?.is_daylight_from_utc(t))
	}

	/// Offset to add to UTC to get local time, at local instant `t` in zone `index`.
	pub fn utc_offset_from_local(&self, t: Timestamp, index: i32) -> Result<Minutes, ZoneError> {
		Ok(self.lookup(index)?.utc_offset_from_local(t))
	}

	/// Offset to add to UTC to get local time, at UTC instant `t` in zone `index`.
	pub fn utc_offset_from_utc(&self, t: Timestamp, index: i32) -> Result<Minutes, ZoneError> {
		Ok(self.lookup(index)?.utc_offset_from_utc(t))
	}
}

#[cfg(test)]
mod tests {
	use crate::rule::ZoneNames;
	use super::*;

	fn fixed(index: i32, name: &str, bias: i64) -> ZoneRule {
		ZoneRule::fixed(ZoneNames::new(name, name, ""), index, Minutes(bias))
	}

	#[test]
	fn lookup() {
		let r = Registry::from_rules([fixed(235, "Tokyo", -540), fixed(85, "GMT", 0)]);
		assert_eq!(r.len(), 2);
		assert_eq!(r.lookup(235).map(|z| z.display_name()), Ok("Tokyo"));
		assert_eq!(r.get(1), None);
		assert_eq!(r.lookup(1), Err(ZoneError::ZoneNotFound { index: 1 }));
	}

	#[test]
	fn last_write_wins() {
		let r = Registry::from_rules([fixed(1, "first", 0), fixed(2, "other", 0), fixed(1, "second", 60)]);
		assert_eq!(r.len(), 2);
		let z = r.lookup(1).unwrap();
		assert_eq!(z.display_name(), "second");
		assert_eq!(z.standard_bias(), Minutes(60));
	}

	#[test]
	fn list_zones_sorted() {
		let r = Registry::from_rules([fixed(235, "c", 0), fixed(-5, "a", 0), fixed(35, "b", 0)]);
		let zones: Vec<_> = r.list_zones().collect();
		assert_eq!(zones, [("a", -5), ("b", 35), ("c", 235)]);
		let indices: Vec<i32> = r.zones().map(ZoneRule::index).collect();
		assert_eq!(indices, [-5, 35, 235]);
	}

	#[test]
	fn operations_by_index() {
		let r = Registry::from_rules([fixed(235, "Tokyo", -540), fixed(85, "GMT", 0)]);
		let t = Timestamp::from_ymd_hms(2024, 6, 1, 9, 0, 0);
		assert_eq!(r.local_to_utc(t, 235), Ok(Timestamp::from_ymd_hms(2024, 6, 1, 0, 0, 0)));
		assert_eq!(r.utc_to_local(t, 235), Ok(Timestamp::from_ymd_hms(2024, 6, 1, 18, 0, 0)));
		assert_eq!(r.zone_to_zone(t, 235, 85), Ok(Timestamp::from_ymd_hms(2024, 6, 1, 0, 0, 0)));
		assert_eq!(r.is_daylight_from_local(t, 235), Ok(false));
		assert_eq!(r.utc_offset_from_utc(t, 235), Ok(Minutes(540)));

		let missing = Err(ZoneError::ZoneNotFound { index: 7 });
		assert_eq!(r.local_to_utc(t, 7), missing);
		assert_eq!(r.zone_to_zone(t, 235, 7), missing);
		assert_eq!(r.zone_to_zone(t, 7, 235), missing);
		assert_eq!(r.is_daylight_from_utc(t, 7), Err(ZoneError::ZoneNotFound { index: 7 }));
		assert_eq!(r.utc_offset_from_local(t, 7), Err(ZoneError::ZoneNotFound { index: 7 }));
	}
}
