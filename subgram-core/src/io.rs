use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Reads a whole text file into memory.
pub(crate) fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	fs::read_to_string(path).map_err(|source| Error::Read { path: path.to_owned(), source })
}

/// Reads the training corpus.
///
/// Same as [`read_file`] but reports failures as [`Error::CorpusUnavailable`],
/// which callers treat as "nothing to train on".
pub fn read_corpus<P: AsRef<Path>>(path: P) -> Result<String> {
	let path = path.as_ref();
	fs::read_to_string(path).map_err(|source| Error::CorpusUnavailable { path: path.to_owned(), source })
}

pub(crate) fn read_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
	let path = path.as_ref();
	fs::read(path).map_err(|source| Error::Read { path: path.to_owned(), source })
}

/// Writes `contents` to `path`, replacing any existing file.
///
/// Missing parent directories are created.
pub(crate) fn write_file<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
	let path = path.as_ref();
	let write = || -> std::io::Result<()> {
		if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent)?;
		}
		fs::write(path, contents)
	};
	write().map_err(|source| Error::Write { path: path.to_owned(), source })
}

/// Builds an output path based on an input path and a new extension.
///
/// Example:
/// `1gram/markov_chain_model_gram_1.txt` + `"bin"` → `1gram/markov_chain_model_gram_1.bin`
pub(crate) fn build_output_path<P: AsRef<Path>>(input_path: P, output_extension: &str) -> PathBuf {
	let mut output = input_path.as_ref().to_path_buf();
	output.set_extension(output_extension);
	output
}

/// On-disk locations of one order's artifacts.
///
/// Layout under the output directory, for order `N`:
/// - `<N>gram/markov_chain_model_gram_<N>.txt`: raw model dump
/// - `<N>gram/keys_gram_<N>.txt`: one context per line
/// - `<N>gram/values_gram_<N>.txt`: one follower line per context
/// - `<N>gram/markov_chain_model_gram_<N>.bin`: binary snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
	pub dir: PathBuf,
	pub dump: PathBuf,
	pub keys: PathBuf,
	pub values: PathBuf,
	pub snapshot: PathBuf,
}

impl ArtifactPaths {
	pub fn new<P: AsRef<Path>>(output_dir: P, order: usize) -> Self {
		let dir = output_dir.as_ref().join(format!("{order}gram"));
		let dump = dir.join(format!("markov_chain_model_gram_{order}.txt"));
		let snapshot = build_output_path(&dump, "bin");
		Self {
			keys: dir.join(format!("keys_gram_{order}.txt")),
			values: dir.join(format!("values_gram_{order}.txt")),
			dump,
			snapshot,
			dir,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn artifact_layout() {
		let paths = ArtifactPaths::new("out", 2);
		assert_eq!(paths.dir, PathBuf::from("out/2gram"));
		assert_eq!(paths.dump, PathBuf::from("out/2gram/markov_chain_model_gram_2.txt"));
		assert_eq!(paths.keys, PathBuf::from("out/2gram/keys_gram_2.txt"));
		assert_eq!(paths.values, PathBuf::from("out/2gram/values_gram_2.txt"));
		assert_eq!(paths.snapshot, PathBuf::from("out/2gram/markov_chain_model_gram_2.bin"));
	}

	#[test]
	fn missing_corpus_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let err = read_corpus(dir.path().join("nope.txt")).unwrap_err();
		assert!(matches!(err, Error::CorpusUnavailable { .. }));
	}

	#[test]
	fn write_creates_parent_directories() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("3gram").join("keys_gram_3.txt");
		write_file(&path, "a b c").unwrap();
		assert_eq!(read_file(&path).unwrap(), "a b c");
	}
}
