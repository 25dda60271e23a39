use std::path::Path;

use regex::Regex;

use super::normalize;
use crate::error::Result;
use crate::io::{read_file, write_file};

lazy_static::lazy_static! {
	static ref INDEX_RGX: Regex = Regex::new(r"^\d+$").unwrap();
	static ref TAG_RGX: Regex = Regex::new(r"<[^>]+>").unwrap();
}

const TIMESTAMP_MARKER: &str = "-->";

fn is_index(line: &str) -> bool {
	INDEX_RGX.is_match(line.trim())
}

/// Cleans SRT subtitle text into training lines.
///
/// A block is an index line (digits only) directly followed by a timestamp
/// line (containing `-->`). Its text lines run until the next index line, a
/// blank line or the end of input. Markup tags are removed, the remaining
/// parts are joined with single spaces and normalized, and each block yields
/// exactly one line. Anything outside a block is skipped.
pub fn clean(srt: &str) -> Vec<String> {
	let lines: Vec<&str> = srt.lines().collect();
	let mut cleaned = Vec::new();

	let mut i = 0;
	while i < lines.len() {
		if !is_index(lines[i]) {
			i += 1;
			continue;
		}
		i += 1;
		if i >= lines.len() || !lines[i].contains(TIMESTAMP_MARKER) {
			// Index without timestamp, resume on the following line
			continue;
		}
		i += 1;

		let mut parts = Vec::new();
		while i < lines.len() && !is_index(lines[i]) && !lines[i].trim().is_empty() {
			let text = TAG_RGX.replace_all(lines[i].trim(), "");
			if !text.is_empty() {
				parts.push(text.into_owned());
			}
			i += 1;
		}

		if !parts.is_empty() {
			cleaned.push(normalize(&parts.join(" ")).trim().to_owned());
		}
	}

	cleaned
}

/// Cleans the subtitle file at `input` and writes one line per block to `output`.
///
/// The input is fully read before anything is written, so `input` and
/// `output` may be the same file. Returns the number of lines written.
pub fn clean_file<PI, PO>(input: PI, output: PO) -> Result<usize>
where
	PI: AsRef<Path>,
	PO: AsRef<Path>,
{
	let srt = read_file(&input)?;
	let cleaned = clean(&srt);

	let mut contents = String::new();
	for line in &cleaned {
		contents.push_str(line);
		contents.push('\n');
	}
	write_file(&output, &contents)?;

	log::info!(
		"Cleaned {} subtitle blocks from '{}' into '{}'",
		cleaned.len(),
		input.as_ref().display(),
		output.as_ref().display()
	);
	Ok(cleaned.len())
}
