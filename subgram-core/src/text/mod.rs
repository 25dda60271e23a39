//! Text preparation: normalization, corpus parsing and subtitle cleaning.

/// Corpus parsing (lines → token sequences).
pub mod corpus;

/// SRT subtitle cleaning (blocks → one normalized line each).
pub mod subtitle;

pub use corpus::Corpus;

/// Removes ASCII punctuation and lowercases everything else.
///
/// Only the 32 ASCII punctuation symbols are dropped; non-ASCII symbols
/// are kept as-is. Applying it twice gives the same result as applying it once.
pub fn normalize(text: &str) -> String {
	text.chars()
		.filter(|c| !c.is_ascii_punctuation())
		.flat_map(char::to_lowercase)
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn strips_punctuation_and_lowercases() {
		assert_eq!(normalize("Hello, World! It's <i>me</i>..."), "hello world its imei");
	}

	#[test]
	fn removes_every_ascii_punctuation_symbol() {
		let punct = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
		assert_eq!(punct.chars().count(), 32);
		assert_eq!(normalize(punct), "");
	}

	#[test]
	fn keeps_whitespace_and_unicode_letters() {
		assert_eq!(normalize("Ça VA\tbien\n¿Sí?"), "ça va\tbien\n¿sí");
	}

	#[test]
	fn is_idempotent() {
		let samples = ["The CAT, sat!", "  a--b  ", "ÉCOLE 42 {x}", ""];
		for sample in samples {
			let once = normalize(sample);
			assert_eq!(normalize(&once), once);
		}
	}
}
