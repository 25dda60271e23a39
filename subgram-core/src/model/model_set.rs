use std::path::Path;

use super::ngram_model::NGramModel;
use super::serializer::{dump, extract, render};
use crate::error::{Error, Result};
use crate::io::{write_file, ArtifactPaths};
use crate::text::Corpus;

/// Outcome of persisting one order's artifacts.
#[derive(Debug)]
pub struct PersistOutcome {
	pub order: usize,
	pub result: Result<ArtifactPaths>,
}

/// The set of word n-gram models trained together, one per order.
///
/// This struct manages:
/// - `models`: one independent `NGramModel` per configured order, in
///   configuration order.
///
/// Models never share state: each one is trained over the same read-only
/// corpus and persisted on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSet {
	models: Vec<NGramModel>,
}

impl ModelSet {
	/// Creates one empty model per order.
	///
	/// # Errors
	/// - [`Error::InvalidOrder`] if an order is 0 or `usize::MAX`
	/// - [`Error::DuplicateOrder`] if an order appears twice
	pub fn new(orders: &[usize]) -> Result<Self> {
		let mut models: Vec<NGramModel> = Vec::with_capacity(orders.len());
		for &order in orders {
			if models.iter().any(|model| model.order() == order) {
				return Err(Error::DuplicateOrder(order));
			}
			models.push(NGramModel::new(order)?);
		}
		Ok(Self { models })
	}

	pub fn models(&self) -> &[NGramModel] {
		&self.models
	}

	/// Returns the model of the given order, if configured.
	pub fn get(&self, order: usize) -> Option<&NGramModel> {
		self.models.iter().find(|model| model.order() == order)
	}

	/// Resets every model to empty.
	pub fn clear(&mut self) {
		self.models.iter_mut().for_each(NGramModel::clear);
	}

	/// Trains every model on `corpus`, accumulating into what is already recorded.
	///
	/// `workers` is forwarded to [`NGramModel::train_parallel`].
	pub fn train(&mut self, corpus: &Corpus, workers: usize) {
		for model in &mut self.models {
			model.train_parallel(corpus, workers);
			log::info!(
				"Gram {} model training completed ({} contexts, {} followers)",
				model.order(),
				model.len(),
				model.occurrences()
			);
		}
	}

	/// Loads the binary snapshots found under `output_dir` into the matching models.
	///
	/// Orders without a snapshot are left untouched. Returns the orders that
	/// were resumed.
	///
	/// # Errors
	/// Fails on the first unreadable or corrupt snapshot.
	pub fn resume<P: AsRef<Path>>(&mut self, output_dir: P) -> Result<Vec<usize>> {
		let mut resumed = Vec::new();
		for model in &mut self.models {
			let paths = ArtifactPaths::new(&output_dir, model.order());
			if !paths.snapshot.exists() {
				log::warn!("No snapshot at '{}', {}-gram model starts empty", paths.snapshot.display(), model.order());
				continue;
			}
			let snapshot = NGramModel::load_snapshot(&paths.snapshot)?;
			model.merge(&snapshot)?;
			log::info!("Resumed {}-gram model from '{}'", model.order(), paths.snapshot.display());
			resumed.push(model.order());
		}
		Ok(resumed)
	}

	/// Writes the artifacts of every order under `output_dir`.
	///
	/// Each order is written on its own: a failure is reported in that
	/// order's outcome and the remaining orders are still written.
	pub fn persist<P: AsRef<Path>>(&self, output_dir: P, snapshot: bool) -> Vec<PersistOutcome> {
		self.models
			.iter()
			.map(|model| {
				let paths = ArtifactPaths::new(&output_dir, model.order());
				PersistOutcome { order: model.order(), result: persist_model(model, paths, snapshot) }
			})
			.collect()
	}
}

/// Writes the dump, keys and values files (and optionally the snapshot) of one model.
fn persist_model(model: &NGramModel, paths: ArtifactPaths, snapshot: bool) -> Result<ArtifactPaths> {
	write_file(&paths.dump, dump(model)?)?;

	let (keys, values) = extract(model);
	write_file(&paths.keys, render(&keys))?;
	write_file(&paths.values, render(&values))?;

	if snapshot {
		model.save_snapshot(&paths.snapshot)?;
	}

	log::info!("Saved {}-gram model to '{}'", model.order(), paths.dir.display());
	Ok(paths)
}
