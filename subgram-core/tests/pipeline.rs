use std::fs;
use std::path::Path;

use subgram_core::io::ArtifactPaths;
use subgram_core::model::serializer::load_dump;
use subgram_core::model::NGramModel;
use subgram_core::pipeline::train;
use subgram_core::text::subtitle::clean_file;
use subgram_core::{Error, TrainConfig};

const SRT: &str = "1
00:00:01,000 --> 00:00:02,000
<i>The cat sat,</i>
the cat ran!

2
00:00:03,000 --> 00:00:04,000
The dog sat.
";

fn config(dir: &Path) -> TrainConfig {
	TrainConfig {
		corpus: dir.join("training-data.txt"),
		output_dir: dir.join("models"),
		workers: 2,
		..TrainConfig::default()
	}
}

#[test]
fn subtitles_to_models() {
	let dir = tempfile::tempdir().unwrap();
	let config = config(dir.path());
	fs::write(&config.corpus, SRT).unwrap();

	assert_eq!(clean_file(&config.corpus, &config.corpus).unwrap(), 2);
	let report = train(&config, false).unwrap();
	assert_eq!(report.samples, 2);
	assert_eq!(report.failures().count(), 0);

	let one = ArtifactPaths::new(&config.output_dir, 1);
	assert_eq!(fs::read_to_string(&one.keys).unwrap(), "the\ncat\nsat\ndog");
	assert_eq!(fs::read_to_string(&one.values).unwrap(), "cat cat dog\nsat ran\nthe\nsat");

	let three = ArtifactPaths::new(&config.output_dir, 3);
	assert_eq!(fs::read_to_string(&three.keys).unwrap(), "the cat sat\ncat sat the\nsat the cat");
	assert_eq!(fs::read_to_string(&three.values).unwrap(), "the\ncat\nran");

	let dumped = load_dump(&fs::read_to_string(&three.dump).unwrap()).unwrap();
	assert_eq!(&dumped, report.models.get(3).unwrap());
}

#[test]
fn rewrites_corpus_and_resumes_from_snapshots() {
	let dir = tempfile::tempdir().unwrap();
	let config = TrainConfig { rewrite_corpus: true, snapshot: true, ..config(dir.path()) };
	fs::write(&config.corpus, "Hello, World!\n\nHELLO there...\n").unwrap();

	let first = train(&config, false).unwrap();
	assert!(first.resumed.is_empty());
	assert_eq!(fs::read_to_string(&config.corpus).unwrap(), "hello world\n\nhello there\n");

	let second = train(&config, true).unwrap();
	assert_eq!(second.resumed, vec![1, 2, 3]);

	let snapshot = NGramModel::load_snapshot(ArtifactPaths::new(&config.output_dir, 1).snapshot).unwrap();
	assert_eq!(snapshot.followers("hello").unwrap(), ["world", "there", "world", "there"]);
}

#[test]
fn missing_corpus_produces_nothing() {
	let dir = tempfile::tempdir().unwrap();
	let config = config(dir.path());

	assert!(matches!(train(&config, false), Err(Error::CorpusUnavailable { .. })));
	assert!(!config.output_dir.exists());
}
