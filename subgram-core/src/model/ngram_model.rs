use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::mpsc;
use std::thread;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::context::Context;
use crate::error::{Error, Result};
use crate::io::{read_bytes, write_file};
use crate::text::Corpus;

/// Represents a word-level n-gram Markov chain.
///
/// The `NGramModel` maps every context of `n` consecutive words seen in the
/// corpus to the list of words observed right after it.
///
/// # Responsibilities
/// - Record (context, follower) pairs from token sequences
/// - Keep contexts in first-seen order for deterministic output
/// - Merge with another model of the same order
///
/// # Invariants
/// - `n` is always >= 1
/// - Every context has exactly `n` words
/// - Follower lists are append-only and keep duplicates in occurrence order
/// - `contexts[i]` owns `followers[i]`, and `index` maps each context to `i`
#[derive(Debug, Clone)]
pub struct NGramModel {
	/// Number of words in a context
	n: usize,

	/// Contexts in insertion order
	contexts: Vec<Context>,

	/// Followers of `contexts[i]`, in occurrence order
	followers: Vec<Vec<String>>,

	/// Context → position in `contexts` / `followers`
	index: HashMap<Context, usize>,
}

impl NGramModel {
	/// Creates a new, empty n-gram model of order `n`.
	///
	/// # Errors
	/// Returns [`Error::InvalidOrder`] if `n < 1`, or if `n + 1` (the window
	/// size) does not fit in a `usize`.
	pub fn new(n: usize) -> Result<Self> {
		if n == 0 || n.checked_add(1).is_none() {
			return Err(Error::InvalidOrder(n));
		}
		Ok(Self::empty(n))
	}

	fn empty(n: usize) -> Self {
		Self { n, contexts: Vec::new(), followers: Vec::new(), index: HashMap::new() }
	}

	/// The order of the model (number of words in a context).
	pub fn order(&self) -> usize {
		self.n
	}

	/// Number of distinct contexts.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}

	/// Total number of recorded (context, follower) pairs.
	pub fn occurrences(&self) -> usize {
		self.followers.iter().map(Vec::len).sum()
	}

	/// Returns the followers recorded for a space-joined context, if any.
	pub fn followers(&self, context: &str) -> Option<&[String]> {
		let words: Vec<String> = context.split(' ').map(str::to_owned).collect();
		self.index.get(words.as_slice()).map(|&slot| self.followers[slot].as_slice())
	}

	/// Iterates over (context, followers) in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&Context, &[String])> {
		self.contexts.iter().zip(self.followers.iter().map(Vec::as_slice))
	}

	/// Drops every recorded context; the order `n` is kept.
	pub fn clear(&mut self) {
		self.contexts.clear();
		self.followers.clear();
		self.index.clear();
	}

	/// Returns the slot of `context`, creating an empty follower list if it is new.
	fn slot_for(&mut self, context: &[String]) -> usize {
		if let Some(&slot) = self.index.get(context) {
			return slot;
		}
		let slot = self.contexts.len();
		let context = Context::from(context);
		self.index.insert(context.clone(), slot);
		self.contexts.push(context);
		self.followers.push(Vec::new());
		slot
	}

	/// Records every (context, follower) pair of one token sequence.
	///
	/// Each start index yields one pair as long as both the `n`-word context
	/// and the word after it fit in the sequence, so overlapping windows are
	/// all recorded and a sequence of `len` tokens yields `len - n` pairs.
	/// Sequences shorter than `n + 1` tokens contribute nothing.
	pub fn add_sequence(&mut self, tokens: &[String]) {
		for window in tokens.windows(self.n + 1) {
			if let Some((follower, context)) = window.split_last() {
				let slot = self.slot_for(context);
				self.followers[slot].push(follower.clone());
			}
		}
	}

	/// Trains the model on every sequence of `corpus`.
	///
	/// Training accumulates: calling it twice on the same corpus doubles
	/// every follower list. Call [`NGramModel::clear`] first to start over.
	pub fn train(&mut self, corpus: &Corpus) {
		for sample in corpus.samples() {
			self.add_sequence(sample);
		}
	}

	/// Same as [`NGramModel::train`], spread over up to `workers` threads.
	///
	/// The corpus is split into contiguous chunks, each trained into its own
	/// partial model. Partials are merged back in chunk order, so the result
	/// is identical to sequential training.
	pub fn train_parallel(&mut self, corpus: &Corpus, workers: usize) {
		let samples = corpus.samples();
		if workers <= 1 || samples.len() < workers {
			self.train(corpus);
			return;
		}

		let chunk_size = samples.len().div_ceil(workers);
		log::debug!(
			"Training {}-gram model on {} samples in chunks of {}",
			self.n,
			samples.len(),
			chunk_size
		);

		let n = self.n;
		let (tx, rx) = mpsc::channel();
		thread::scope(|scope| {
			for (chunk_index, chunk) in samples.chunks(chunk_size).enumerate() {
				let tx = tx.clone();
				scope.spawn(move || {
					let mut partial = NGramModel::empty(n);
					for sample in chunk {
						partial.add_sequence(sample);
					}
					// The receiver outlives the scope
					let _ = tx.send((chunk_index, partial));
				});
			}
		});
		drop(tx);

		let mut partials: Vec<(usize, NGramModel)> = rx.iter().collect();
		partials.sort_by_key(|(chunk_index, _)| *chunk_index);
		for (_, partial) in partials {
			self.absorb(partial);
		}
	}

	/// Merges another n-gram model into this one.
	///
	/// Followers of `other` are appended after the ones already recorded,
	/// and contexts new to `self` are added in `other`'s order.
	///
	/// # Errors
	/// Returns [`Error::OrderMismatch`] if the model orders do not match.
	pub fn merge(&mut self, other: &Self) -> Result<()> {
		if self.n != other.n {
			return Err(Error::OrderMismatch { expected: self.n, found: other.n });
		}
		for (context, followers) in other.iter() {
			let slot = self.slot_for(context.words());
			self.followers[slot].extend_from_slice(followers);
		}
		Ok(())
	}

	/// Owned counterpart of `merge` for partial models of the same order.
	fn absorb(&mut self, other: Self) {
		for (context, followers) in other.contexts.into_iter().zip(other.followers) {
			let slot = self.slot_for(context.words());
			self.followers[slot].extend(followers);
		}
	}

	/// Writes a compact binary snapshot of the model (postcard).
	pub fn save_snapshot<P: AsRef<Path>>(&self, path: P) -> Result<()> {
		let bytes = postcard::to_stdvec(self)?;
		write_file(path, bytes)
	}

	/// Loads a model from a snapshot written by [`NGramModel::save_snapshot`].
	pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<Self> {
		let bytes = read_bytes(path)?;
		Ok(postcard::from_bytes(&bytes)?)
	}
}

impl PartialEq for NGramModel {
	fn eq(&self, other: &Self) -> bool {
		self.n == other.n && self.contexts == other.contexts && self.followers == other.followers
	}
}

impl Eq for NGramModel {}

/// Serialized as `{ "order": n, "chains": { "<context>": [followers...] } }`,
/// with chains in insertion order.
impl Serialize for NGramModel {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("NGramModel", 2)?;
		state.serialize_field("order", &self.n)?;
		state.serialize_field("chains", &Chains(self))?;
		state.end()
	}
}

struct Chains<'a>(&'a NGramModel);

impl Serialize for Chains<'_> {
	fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
		let mut map = serializer.serialize_map(Some(self.0.len()))?;
		for (context, followers) in self.0.iter() {
			map.serialize_entry(&context.to_string(), followers)?;
		}
		map.end()
	}
}

#[derive(Deserialize)]
struct RawModel {
	order: usize,
	chains: RawChains,
}

/// Chains as read back, order preserved.
struct RawChains(Vec<(String, Vec<String>)>);

impl<'de> Deserialize<'de> for RawChains {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		struct ChainsVisitor;

		impl<'de> Visitor<'de> for ChainsVisitor {
			type Value = RawChains;

			fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
				f.write_str("a map from context to follower list")
			}

			fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<RawChains, A::Error> {
				let mut chains = Vec::with_capacity(access.size_hint().unwrap_or(0));
				while let Some(entry) = access.next_entry::<String, Vec<String>>()? {
					chains.push(entry);
				}
				Ok(RawChains(chains))
			}
		}

		deserializer.deserialize_map(ChainsVisitor)
	}
}

impl TryFrom<RawModel> for NGramModel {
	type Error = Error;

	fn try_from(raw: RawModel) -> Result<Self> {
		let mut model = NGramModel::new(raw.order)?;
		for (rendered, followers) in raw.chains.0 {
			let context = Context::parse(&rendered);
			if context.len() != model.n {
				return Err(Error::MalformedContext { context: rendered, order: model.n });
			}
			let slot = model.slot_for(context.words());
			model.followers[slot].extend(followers);
		}
		Ok(model)
	}
}

impl<'de> Deserialize<'de> for NGramModel {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
		let raw = RawModel::deserialize(deserializer)?;
		NGramModel::try_from(raw).map_err(<D::Error as de::Error>::custom)
	}
}
