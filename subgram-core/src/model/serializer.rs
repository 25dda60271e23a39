//! Text renderings of a trained model: keys, values and the raw dump.

use super::context::Context;
use super::ngram_model::NGramModel;
use crate::error::Result;

/// Something that renders as a single line of [`render`] output.
///
/// Scalars render as themselves. Word sequences render as their words
/// joined by single spaces.
pub trait Line {
	fn push_line(&self, out: &mut String);
}

impl Line for str {
	fn push_line(&self, out: &mut String) {
		out.push_str(self);
	}
}

impl Line for String {
	fn push_line(&self, out: &mut String) {
		out.push_str(self);
	}
}

impl Line for [String] {
	fn push_line(&self, out: &mut String) {
		for (i, word) in self.iter().enumerate() {
			if i > 0 {
				out.push(' ');
			}
			out.push_str(word);
		}
	}
}

impl Line for Vec<String> {
	fn push_line(&self, out: &mut String) {
		self.as_slice().push_line(out);
	}
}

impl Line for Context {
	fn push_line(&self, out: &mut String) {
		self.words().push_line(out);
	}
}

impl<T: Line + ?Sized> Line for &T {
	fn push_line(&self, out: &mut String) {
		(**self).push_line(out);
	}
}

/// Returns the model's contexts and follower lists as parallel sequences.
///
/// `keys[i]` is the space-joined context whose followers are `values[i]`,
/// both in model insertion order.
pub fn extract(model: &NGramModel) -> (Vec<String>, Vec<&[String]>) {
	model.iter().map(|(context, followers)| (context.to_string(), followers)).unzip()
}

/// Renders one line per item, joined by `\n` (no trailing newline).
pub fn render<I>(items: I) -> String
where
	I: IntoIterator,
	I::Item: Line,
{
	let mut out = String::new();
	for (i, item) in items.into_iter().enumerate() {
		if i > 0 {
			out.push('\n');
		}
		item.push_line(&mut out);
	}
	out
}

/// Raw dump of the full context → followers mapping, as JSON.
///
/// Parse it back with [`load_dump`].
pub fn dump(model: &NGramModel) -> Result<String> {
	Ok(serde_json::to_string(model)?)
}

pub fn load_dump(text: &str) -> Result<NGramModel> {
	Ok(serde_json::from_str(text)?)
}
