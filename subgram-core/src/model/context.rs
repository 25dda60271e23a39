use std::borrow::Borrow;
use std::fmt;

/// The N-word window used as a lookup key in an n-gram model.
///
/// Words are stored separately, so equality and hashing are word-wise
/// and never depend on how the context would be rendered as a string.
/// `Display` renders the words joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Context(Box<[String]>);

impl Context {
	/// Builds a context from its words.
	pub fn new<I, S>(words: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self(words.into_iter().map(Into::into).collect())
	}

	/// Parses a space-joined context (as found in keys files and dumps).
	pub fn parse(rendered: &str) -> Self {
		Self::new(rendered.split(' '))
	}

	pub fn words(&self) -> &[String] {
		&self.0
	}

	/// Number of words, i.e. the order of the model this context belongs to.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl From<&[String]> for Context {
	fn from(words: &[String]) -> Self {
		Self(words.into())
	}
}

// Hash of a newtype over Box<[String]> equals the hash of the slice itself,
// which keeps map lookups by `&[String]` consistent.
impl Borrow<[String]> for Context {
	fn borrow(&self) -> &[String] {
		&self.0
	}
}

impl fmt::Display for Context {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut words = self.0.iter();
		if let Some(first) = words.next() {
			f.write_str(first)?;
			for word in words {
				f.write_str(" ")?;
				f.write_str(word)?;
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	#[test]
	fn renders_space_joined() {
		assert_eq!(Context::new(["the", "cat", "sat"]).to_string(), "the cat sat");
		assert_eq!(Context::new(["alone"]).to_string(), "alone");
	}

	#[test]
	fn parse_inverts_display() {
		let context = Context::new(["sat", "the"]);
		assert_eq!(Context::parse(&context.to_string()), context);
		assert_eq!(Context::parse("sat the").len(), 2);
	}

	#[test]
	fn words_are_compared_structurally() {
		// Same rendering, different words
		let joined = Context::new(["a b", "c"]);
		let split = Context::new(["a", "b c"]);
		assert_eq!(joined.to_string(), split.to_string());
		assert_ne!(joined, split);
	}

	#[test]
	fn lookup_by_borrowed_slice() {
		let mut map = HashMap::new();
		map.insert(Context::new(["the", "cat"]), 7);
		let window = vec!["the".to_owned(), "cat".to_owned()];
		assert_eq!(map.get(window.as_slice()), Some(&7));
	}
}
