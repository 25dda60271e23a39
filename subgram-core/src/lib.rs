//! Subtitle corpus to word n-gram Markov chains.
//!
//! This crate provides:
//! - Subtitle cleaning and text normalization
//! - Corpus parsing into per-line token sequences
//! - Word n-gram models mapping contexts to observed followers
//! - Text and binary persistence of trained models
//!
//! Models are plain values: construct them empty, train (training
//! accumulates), read them, and `clear` them to start over.

/// Word n-gram models, training and serialization.
pub mod model;

/// Normalization, corpus parsing and subtitle cleaning.
pub mod text;

/// Training run settings (TOML).
pub mod config;

/// End-to-end training run: corpus file in, per-order artifacts out.
pub mod pipeline;

/// File helpers and artifact layout.
pub mod io;

mod error;

pub use config::TrainConfig;
pub use error::{Error, Result};
