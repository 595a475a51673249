//! Error types for loading zone rules.

use std::path::PathBuf;

/// The error type for reading a rule file.
///
/// These fail the whole load. A bad record inside a well-formed file is not an error here; the
/// registry logs and skips it.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
	/// The rule file could not be read.
	#[error("failed to read rule file {}", path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: std::io::Error
	},
	/// The rule file is not valid TOML, or does not have the expected shape.
	#[error("failed to parse rule file")]
	Parse(#[from] toml::de::Error)
}
