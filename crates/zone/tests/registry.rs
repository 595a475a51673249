mod common;

use std::sync::Arc;
use time::Timestamp;
use zone::{Registry, SharedRegistry, Transition, ZoneError, ZoneRule};
use common::*;

#[test]
fn unknown_zone() {
	let r = Registry::load([eastern(), tokyo()]);
	let t = Timestamp::from_ymd_hms(2024, 6, 1, 0, 0, 0);
	assert_eq!(r.lookup(999999).err(), Some(ZoneError::ZoneNotFound { index: 999999 }));
	assert_eq!(r.local_to_utc(t, 999999), Err(ZoneError::ZoneNotFound { index: 999999 }));
	assert_eq!(r.utc_to_local(t, 999999), Err(ZoneError::ZoneNotFound { index: 999999 }));
}

#[test]
fn one_truncated_record_of_ten() {
	let mut records: Vec<_> = (0..10)
		.map(|i| raw(i, &format!("Zone {i}"), record(i * 60, -60, [3, 0, 2, 2, 0, 0, 0], [11, 0, 1, 2, 0, 0, 0])))
		.collect();
	records[4].data.truncate(20);

	let r = Registry::load(records);
	assert_eq!(r.len(), 9);
	assert!(r.get(4).is_none());
	assert!(r.get(3).is_some() && r.get(5).is_some());
}

#[test]
fn invalid_records_are_skipped() {
	let records = [
		raw(1, "bad weekday", record(0, -60, [3, 9, 2, 2, 0, 0, 0], [11, 0, 1, 2, 0, 0, 0])),
		raw(2, "bad ordinal", record(0, -60, [3, 0, 2, 2, 0, 0, 0], [11, 0, 0, 2, 0, 0, 0])),
		raw(3, "empty", Vec::new()),
		tokyo()
	];
	let r = Registry::load(records);
	assert_eq!(r.list_zones().collect::<Vec<_>>(), [("Tokyo", 235)]);

	let bad = raw(1, "bad weekday", record(0, -60, [3, 9, 2, 2, 0, 0, 0], [11, 0, 1, 2, 0, 0, 0]));
	assert_eq!(
		bad.decode().unwrap_err(),
		ZoneError::InvalidTransitionRule { index: 1, transition: Transition::Daylight, field: "day of week", value: 9 }
	);
}

#[test]
fn duplicates_keep_last_in_input_order() {
	let first = raw(35, "first", record(300, 0, NO_DST, NO_DST));
	let second = raw(35, "second", record(360, 0, NO_DST, NO_DST));

	let r = Registry::load([first.clone(), second.clone()]);
	assert_eq!(r.len(), 1);
	assert_eq!(r.lookup(35).unwrap().display_name(), "second");

	let r = Registry::load([second, first]);
	assert_eq!(r.lookup(35).unwrap().display_name(), "first");
}

#[test]
fn list_zones_in_index_order() {
	let r = Registry::load([aus_eastern(), tokyo(), eastern(), india(), central_europe()]);
	let indices: Vec<i32> = r.list_zones().map(|(_, index)| index).collect();
	assert_eq!(indices, [35, 110, 190, 235, 255]);
	assert_eq!(r.list_zones().next(), Some(("Eastern", 35)));
}

#[test]
fn shared_registry_swap() {
	let shared = SharedRegistry::new(Registry::load([eastern()]));
	let before = shared.snapshot();

	let previous = shared.replace(Registry::load([tokyo(), india()]));
	assert!(Arc::ptr_eq(&before, &previous));

	// Earlier snapshots still see the old registry
	assert_eq!(before.len(), 1);
	assert!(before.get(35).is_some());

	let after = shared.snapshot();
	assert_eq!(after.len(), 2);
	assert_eq!(after.lookup(35).err(), Some(ZoneError::ZoneNotFound { index: 35 }));
}

#[test]
fn shared_registry_across_threads() {
	let shared = Arc::new(SharedRegistry::new(Registry::load([eastern(), tokyo()])));
	let t = Timestamp::from_ymd_hms(2024, 6, 1, 9, 0, 0);

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let shared = Arc::clone(&shared);
			std::thread::spawn(move || shared.snapshot().local_to_utc(t, 235))
		})
		.collect();
	shared.replace(Registry::load([tokyo()]));

	for handle in handles {
		assert_eq!(handle.join().unwrap(), Ok(Timestamp::from_ymd_hms(2024, 6, 1, 0, 0, 0)));
	}
}

#[test]
fn types_are_send_and_sync() {
	fn assert_impl<T: Send + Sync>() {}
	assert_impl::<Registry>();
	assert_impl::<ZoneRule>();
	assert_impl::<SharedRegistry>();
}
