use std::path::PathBuf;

use pvdata::data::PvError;
use thiserror::Error;

/// CLI result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Library failure.
	#[error(transparent)]
	Data(#[from] PvError),
	/// Schema file could not be read.
	#[error("read {path}: {source}")]
	Io {
		/// File that failed to load.
		path: PathBuf,
		/// Underlying IO failure.
		source: std::io::Error,
	},
	/// Neither or both of the schema expression and `--file` were given.
	#[error("provide exactly one of <EXPR> or --file")]
	SchemaSource,
	/// `--set` argument is not `PATH=LITERAL`.
	#[error("invalid assignment {text:?}: expected PATH=LITERAL")]
	InvalidAssignment {
		/// Offending argument text.
		text: String,
	},
	/// JSON rendering failed.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
}

impl From<pvdata::data::SchemaError> for CliError {
	fn from(err: pvdata::data::SchemaError) -> Self {
		Self::Data(err.into())
	}
}

impl From<pvdata::data::TypeError> for CliError {
	fn from(err: pvdata::data::TypeError) -> Self {
		Self::Data(err.into())
	}
}
