/// A training corpus: one token sequence per non-empty line.
///
/// Sequences keep the line order of the source text. Empty (or
/// whitespace-only) lines produce no entry.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Corpus {
	samples: Vec<Vec<String>>,
}

impl Corpus {
	/// Splits `text` into lines and each non-empty line into whitespace-delimited tokens.
	///
	/// No normalization is applied here; see [`crate::text::normalize`].
	pub fn parse(text: &str) -> Self {
		let samples = text
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(|line| line.split_whitespace().map(str::to_owned).collect())
			.collect();
		Self { samples }
	}

	/// Token sequences in source order.
	pub fn samples(&self) -> &[Vec<String>] {
		&self.samples
	}

	/// Number of token sequences (non-empty lines).
	pub fn len(&self) -> usize {
		self.samples.len()
	}

	pub fn is_empty(&self) -> bool {
		self.samples.is_empty()
	}

	/// Total number of tokens over all sequences.
	pub fn token_count(&self) -> usize {
		self.samples.iter().map(Vec::len).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn splits_lines_and_words() {
		let corpus = Corpus::parse("the cat sat\n  a   dog  ran \n");
		assert_eq!(
			corpus.samples(),
			&[
				vec!["the".to_owned(), "cat".to_owned(), "sat".to_owned()],
				vec!["a".to_owned(), "dog".to_owned(), "ran".to_owned()],
			]
		);
		assert_eq!(corpus.token_count(), 6);
	}

	#[test]
	fn discards_empty_lines() {
		let corpus = Corpus::parse("\n\none\n   \n\t\ntwo words\r\n\n");
		assert_eq!(corpus.len(), 2);
		assert_eq!(corpus.samples()[0], vec!["one"]);
		assert_eq!(corpus.samples()[1], vec!["two", "words"]);
	}

	#[test]
	fn empty_text_gives_empty_corpus() {
		assert!(Corpus::parse("").is_empty());
		assert!(Corpus::parse("\n \n\t").is_empty());
	}
}
