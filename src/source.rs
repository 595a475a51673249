//! The rule record source: a TOML file of named raw records.
//!
//! ```toml
//! [[zone]]
//! index = 235
//! display = "(UTC+09:00) Osaka, Sapporo, Tokyo"
//! standard = "Tokyo Standard Time"
//! daylight = "Tokyo Daylight Time"
//! record = [228, 253, 255, 255, 0, 0, ...]
//! ```
//!
//! Each `record` is passed to the registry untouched, so a short or invalid record only costs that
//! one zone. A file that can't be read or parsed fails as a whole.

use std::path::Path;
use serde::Deserialize;
use tracing::info;
use zone::{RawRuleRecord, Registry, ZoneNames};
use crate::error::SourceError;

/// Rules compiled into the binary, used when no rule file is given.
pub const BUNDLED: &str = include_str!("../data/zones.toml");

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
	#[serde(default)]
	zone: Vec<ZoneEntry>
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ZoneEntry {
	index: i32,
	display: String,
	standard: String,
	#[serde(default)]
	daylight: String,
	record: Vec<u8>
}

impl From<ZoneEntry> for RawRuleRecord {
	fn from(e: ZoneEntry) -> Self {
		RawRuleRecord {
			names: ZoneNames::new(e.display, e.standard, e.daylight),
			index: e.index,
			data: e.record
		}
	}
}

/// Parse the raw records out of a rule file's contents.
pub fn parse(text: &str) -> Result<Vec<RawRuleRecord>, SourceError> {
	let file: RuleFile = toml::from_str(text)?;
	Ok(file.zone.into_iter().map(RawRuleRecord::from).collect())
}

/// Read and parse a rule file.
pub fn read(path: &Path) -> Result<Vec<RawRuleRecord>, SourceError> {
	let text = std::fs::read_to_string(path).map_err(|source| SourceError::Read { path: path.to_path_buf(), source })?;
	parse(&text)
}

/// Build a registry from the rule file at `path`, or from the bundled rules if `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<Registry, SourceError> {
	let records = match path {
		Some(p) => {
			info!(path = %p.display(), "loading zone rules");
			read(p)?
		},
		None => {
			info!("loading bundled zone rules");
			parse(BUNDLED)?
		}
	};

	let total = records.len();
	let registry = Registry::load(records);
	info!(loaded = registry.len(), total, "zone rules ready");
	Ok(registry)
}
