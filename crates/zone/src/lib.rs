//! Time zone rules and DST-aware conversion between local time and UTC.
//!
//! A zone is described by a fixed standard bias and at most one recurring pair of daylight savings
//! transitions ("second Sunday of March at 02:00"), applied identically to every year. Zones are
//! decoded from a compact binary record (see [`record`]) and collected into a [`Registry`] keyed by
//! an integer index.
//!
//! # Examples
//!
//! ```
//! # use zone::{RawRuleRecord, Registry, ZoneNames, RECORD_LEN};
//! # use time::Timestamp;
//! let mut data = vec![0u8; RECORD_LEN];
//! data[0..4].copy_from_slice(&(-540i32).to_le_bytes());
//! let tokyo = RawRuleRecord { names: ZoneNames::new("Tokyo", "Tokyo Standard Time", ""), index: 235, data };
//!
//! let registry = Registry::load([tokyo]);
//! let utc = registry.local_to_utc(Timestamp::from_ymd_hms(2024, 6, 1, 9, 0, 0), 235).unwrap();
//! assert_eq!(utc, Timestamp::from_ymd_hms(2024, 6, 1, 0, 0, 0));
//! assert!(registry.lookup(999999).is_err());
//! ```

pub mod convert;
pub mod error;
pub mod record;
pub mod registry;
pub mod rule;
pub mod shared;
pub mod weekday;
pub mod window;

pub use convert::convert_zone_to_zone;
pub use error::{Transition, ZoneError};
pub use record::{decode_rule, RawRuleRecord, RECORD_LEN};
pub use registry::Registry;
pub use rule::{TimeOfDay, TransitionRule, Transitions, ZoneNames, ZoneRule};
pub use shared::SharedRegistry;
pub use weekday::nth_weekday;
pub use window::DaylightWindow;
