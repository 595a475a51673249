//! Calendar utilities for zone-less wall-clock time.
//!
//! This crate deals with a single kind of value: [`Timestamp`], a count of milliseconds since
//! 1970-01-01T00:00:00 that carries no timezone. Whether a given timestamp is "local" or "UTC" is
//! up to the caller; timezone rules live in the `zone` crate and only ever shift timestamps by a
//! number of [`Minutes`].
//!
//! The calendar functions do not rely on libc's mktime and gmtime functions, so they are completely
//! thread safe and work for dates before 1970 as well as after.
//!
//! If the `now` feature is enabled, the [`time`] module enables a helper function to get the
//! current time ([`time::now`]).
//!
//! # Examples
//!
//! ```
//! # use time::{Timestamp, Minutes, parse_timestamp};
//! let t = parse_timestamp(b"2024-06-01T00:00").unwrap();
//! assert_eq!(t, Timestamp::from_ymd_hms(2024, 6, 1, 0, 0, 0));
//! assert_eq!((t - Minutes(600)).to_string(), "2024-05-31T14:00:00");
//! ```

#![no_std]

pub mod time;
pub mod parse;

pub use time::*;
pub use parse::*;
