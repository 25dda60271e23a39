use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use subgram_core::pipeline;
use subgram_core::text::subtitle::clean_file;
use subgram_core::TrainConfig;

#[derive(Parser, Debug)]
#[command(name = "subgram-train")]
#[command(about = "Builds word n-gram Markov chains from subtitle dialogue")]
#[command(version)]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Strip indices, timestamps and markup from an SRT file, one line per block
	Clean {
		/// Subtitle file to clean
		#[arg(default_value = "training-data.txt")]
		input: PathBuf,

		/// Destination (same as input by default)
		output: Option<PathBuf>,
	},

	/// Train the n-gram models and write their artifacts
	Train(TrainArgs),
}

#[derive(Args, Debug)]
struct TrainArgs {
	/// TOML settings file; flags below override it
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Cleaned corpus file
	#[arg(long)]
	corpus: Option<PathBuf>,

	/// Directory receiving the <N>gram/ folders
	#[arg(short, long)]
	output_dir: Option<PathBuf>,

	/// Worker threads per model (0 or 1 for sequential)
	#[arg(short, long)]
	workers: Option<usize>,

	/// Write the normalized corpus back to the corpus file
	#[arg(long)]
	rewrite_corpus: bool,

	/// Also write a binary snapshot per order
	#[arg(long)]
	snapshot: bool,

	/// Load existing snapshots and accumulate on top of them (implies --snapshot)
	#[arg(long)]
	resume: bool,
}

impl TrainArgs {
	/// Settings from the config file (or defaults), overridden by flags.
	fn config(&self) -> Result<TrainConfig> {
		let mut config = match &self.config {
			Some(path) => TrainConfig::load(path).with_context(|| format!("loading settings from '{}'", path.display()))?,
			None => TrainConfig::default(),
		};
		if let Some(corpus) = &self.corpus {
			config.corpus = corpus.clone();
		}
		if let Some(output_dir) = &self.output_dir {
			config.output_dir = output_dir.clone();
		}
		if let Some(workers) = self.workers {
			config.workers = workers;
		}
		config.rewrite_corpus |= self.rewrite_corpus;
		config.snapshot |= self.snapshot || self.resume;
		Ok(config)
	}
}

fn run(cli: Cli) -> Result<bool> {
	match cli.command {
		Command::Clean { input, output } => {
			let output = output.unwrap_or_else(|| input.clone());
			clean_file(&input, &output).context("cleaning subtitles")?;
			Ok(true)
		}
		Command::Train(args) => {
			let config = args.config()?;
			let report = pipeline::train(&config, args.resume).context("training failed")?;

			let mut ok = true;
			for failure in report.failures() {
				if let Err(e) = &failure.result {
					log::error!("Could not save {}-gram model: {e}", failure.order);
				}
				ok = false;
			}
			Ok(ok)
		}
	}
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
		.format_timestamp(None)
		.init();

	match run(Cli::parse()) {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(e) => {
			log::error!("{e:#}");
			ExitCode::FAILURE
		}
	}
}
