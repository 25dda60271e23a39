use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a corpus, building models or persisting them.
#[derive(Error, Debug)]
pub enum Error {
	/// The training corpus is missing or unreadable. No model is produced.
	#[error("could not load corpus '{}': {source}", .path.display())]
	CorpusUnavailable {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("could not read '{}': {source}", .path.display())]
	Read {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("could not write '{}': {source}", .path.display())]
	Write {
		path: PathBuf,
		#[source]
		source: io::Error,
	},

	#[error("n-gram order must be between 1 and usize::MAX - 1, got {0}")]
	InvalidOrder(usize),

	#[error("n-gram order {0} is configured more than once")]
	DuplicateOrder(usize),

	#[error("order mismatch: expected {expected}-gram, found {found}-gram")]
	OrderMismatch { expected: usize, found: usize },

	/// A dumped context does not have exactly `order` words.
	#[error("context '{context}' does not have {order} words")]
	MalformedContext { context: String, order: usize },

	#[error("model dump error: {0}")]
	Dump(#[from] serde_json::Error),

	#[error("model snapshot error: {0}")]
	Snapshot(#[from] postcard::Error),

	#[error("invalid configuration: {0}")]
	Config(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
