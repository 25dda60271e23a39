use crate::config::TrainConfig;
use crate::error::Result;
use crate::io::{read_corpus, write_file};
use crate::model::model_set::{ModelSet, PersistOutcome};
use crate::text::{normalize, Corpus};

/// Summary of a training run.
#[derive(Debug)]
pub struct TrainReport {
	/// Number of non-empty corpus lines trained on.
	pub samples: usize,
	/// Orders restored from snapshots before training.
	pub resumed: Vec<usize>,
	/// Trained models, still available to the caller.
	pub models: ModelSet,
	/// Per-order persistence results.
	pub outcomes: Vec<PersistOutcome>,
}

impl TrainReport {
	/// Outcomes whose artifacts could not be written.
	pub fn failures(&self) -> impl Iterator<Item = &PersistOutcome> {
		self.outcomes.iter().filter(|outcome| outcome.result.is_err())
	}
}

/// Loads, normalizes and parses the corpus, then trains and persists every order.
///
/// When `resume` is set, existing snapshots are loaded first and the new
/// corpus accumulates on top of them.
///
/// # Errors
/// Returns early (before any model exists) if the corpus cannot be read,
/// an order is invalid, or a snapshot cannot be resumed. Write failures are
/// not errors here: they are reported per order in [`TrainReport::outcomes`].
pub fn train(config: &TrainConfig, resume: bool) -> Result<TrainReport> {
	let raw = read_corpus(&config.corpus)?;
	let text = normalize(&raw);
	log::info!("Training data successfully loaded from '{}'", config.corpus.display());

	if config.rewrite_corpus {
		write_file(&config.corpus, &text)?;
		log::info!("Normalized corpus written back to '{}'", config.corpus.display());
	}

	let corpus = Corpus::parse(&text);
	log::info!("Parsed {} training samples ({} tokens)", corpus.len(), corpus.token_count());

	let mut models = ModelSet::new(&config.orders)?;
	let resumed = if resume { models.resume(&config.output_dir)? } else { Vec::new() };

	models.train(&corpus, config.workers);
	let outcomes = models.persist(&config.output_dir, config.snapshot);

	Ok(TrainReport { samples: corpus.len(), resumed, models, outcomes })
}
