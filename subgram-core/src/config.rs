use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::io::read_file;

/// Training run settings.
///
/// Every field is optional in the TOML file; missing ones take the
/// [`Default`] value.
///
/// ```toml
/// corpus = "training-data.txt"
/// output_dir = "models"
/// orders = [1, 2, 3]
/// workers = 8
/// rewrite_corpus = false
/// snapshot = true
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainConfig {
	/// Cleaned corpus, one dialogue line per subtitle block.
	pub corpus: PathBuf,
	/// Directory receiving one `<N>gram/` folder per order.
	pub output_dir: PathBuf,
	/// N-gram orders to build.
	pub orders: Vec<usize>,
	/// Worker threads per model; 0 or 1 trains sequentially.
	pub workers: usize,
	/// Write the normalized corpus back over `corpus`.
	pub rewrite_corpus: bool,
	/// Also write a binary snapshot per order.
	pub snapshot: bool,
}

impl Default for TrainConfig {
	fn default() -> Self {
		Self {
			corpus: PathBuf::from("training-data.txt"),
			output_dir: PathBuf::from("."),
			orders: vec![1, 2, 3],
			workers: num_cpus::get(),
			rewrite_corpus: false,
			snapshot: false,
		}
	}
}

impl TrainConfig {
	/// Loads settings from a TOML file.
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
		Self::from_toml(&read_file(path)?)
	}

	pub fn from_toml(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_file_uses_defaults() {
		assert_eq!(TrainConfig::from_toml("").unwrap(), TrainConfig::default());
	}

	#[test]
	fn overrides_given_fields() {
		let config = TrainConfig::from_toml("output_dir = \"models\"\norders = [2]\nsnapshot = true\n").unwrap();
		assert_eq!(config.output_dir, PathBuf::from("models"));
		assert_eq!(config.orders, vec![2]);
		assert!(config.snapshot);
		assert_eq!(config.corpus, PathBuf::from("training-data.txt"));
	}

	#[test]
	fn rejects_unknown_fields() {
		assert!(TrainConfig::from_toml("order = 2").is_err());
	}
}
