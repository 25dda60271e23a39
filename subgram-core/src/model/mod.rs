//! Word n-gram Markov chains.
//!
//! This module provides:
//! - The structural context key (`Context`)
//! - Fixed-order models and their trainer (`NGramModel`)
//! - Multi-order training and persistence (`ModelSet`)
//! - Text renderings of a model (`serializer`)

/// N-word window used as a model key.
pub mod context;

/// Fixed-order word n-gram model (`n >= 1`).
///
/// Handles sequence ingestion, follower accumulation, chunked parallel
/// training, merging and binary snapshots.
pub mod ngram_model;

/// One model per order, trained over a shared corpus and persisted per order.
pub mod model_set;

/// Keys/values extraction, line rendering and raw JSON dump.
pub mod serializer;

pub use context::Context;
pub use model_set::{ModelSet, PersistOutcome};
pub use ngram_model::NGramModel;
