//! This module contains the main entrypoint to the wordbag cli.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use wordbag_core::{
	load_preprocessing_config, Corpus, CorpusCsvOptions, FeatureTable, Normalization, Session,
	Summary, VectorizationConfig,
};
use wordbag_util::table::Table;

#[derive(Parser, Debug)]
#[clap(
	name = "wordbag",
	about = "Turn a corpus of text documents into a bag of words feature table."
)]
struct Options {
	#[clap(short, long, help = "the path to the corpus .csv file")]
	file: PathBuf,
	#[clap(long, default_value = "text", help = "the column holding document text")]
	text_column: String,
	#[clap(long, default_value = "category", help = "the column holding document categories")]
	category_column: String,
	#[clap(short, long, help = "the path to a preprocessing config file")]
	preprocessing: Option<PathBuf>,
	#[clap(long, help = "weight counts with tf-idf")]
	tfidf: bool,
	#[clap(
		short,
		long,
		default_value = "none",
		help = "the row normalization applied in tf-idf mode: none, l1, or l2"
	)]
	normalization: Normalization,
	#[clap(short, long, help = "the path to write the feature table .csv to, stdout if absent")]
	output: Option<PathBuf>,
	#[clap(long, default_value = "5", help = "the number of rows to preview")]
	preview: usize,
}

fn main() {
	let env = env_logger::Env::default().default_filter_or("wordbag=info");
	env_logger::Builder::from_env(env)
		.format_level(false)
		.format_module_path(false)
		.format_target(false)
		.format_timestamp(None)
		.init();
	let options = Options::parse();
	if let Err(error) = cli(options) {
		eprintln!("{}: {:#}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli(options: Options) -> Result<()> {
	let preprocessing = options
		.preprocessing
		.as_deref()
		.map(load_preprocessing_config)
		.transpose()?;
	let corpus = Corpus::from_path(
		&options.file,
		&CorpusCsvOptions {
			text_column: options.text_column.clone(),
			category_column: options.category_column.clone(),
		},
	)
	.with_context(|| format!("failed to load corpus from {}", options.file.display()))?;
	log::info!(
		"loaded {} documents from {}",
		corpus.len(),
		options.file.display()
	);

	let mut session = Session::new(VectorizationConfig {
		use_tfidf: options.tfidf,
		normalization: options.normalization,
	});
	session.set_preprocessing(preprocessing);
	let table = session.set_corpus(corpus)?;

	eprintln!("{}", format_summary(&session.summary()));
	if options.preview > 0 && !table.is_empty() {
		eprintln!("{}", format_preview(&table, options.preview));
	}

	let dataframe = table.to_dataframe();
	match &options.output {
		Some(path) => {
			dataframe
				.to_path(path)
				.with_context(|| format!("failed to write {}", path.display()))?;
			eprintln!("Your feature table was written to {}.", path.display());
		}
		None => {
			let stdout = std::io::stdout();
			dataframe.to_csv(&mut csv::Writer::from_writer(stdout.lock()))?;
		}
	}
	Ok(())
}

fn format_summary(summary: &Summary) -> String {
	fn or_none(value: &Option<String>) -> &str {
		value.as_deref().unwrap_or("None")
	}
	let normalization = summary
		.normalization
		.map(|normalization| normalization.to_string())
		.unwrap_or_else(|| "None".to_owned());
	format!(
		"Includes punctuation: {}\nLowercase: {}\nTransformation: {}\nStop words removed: {}\nTF-IDF performed: {}\nNormalization: {}\n",
		summary.include_punctuation,
		summary.lowercase,
		or_none(&summary.transformation),
		or_none(&summary.stop_words),
		summary.tfidf,
		normalization,
	)
}

fn format_preview(table: &FeatureTable, n_rows: usize) -> String {
	let (header, rows) = table.preview(n_rows);
	let mut preview = Table::new(&header, &rows).to_string();
	if table.nrows() > n_rows {
		preview.push_str(&format!("… {} more rows\n", table.nrows() - n_rows));
	}
	preview
}

#[test]
fn test_format_summary() {
	let summary = Summary::new(
		None,
		&VectorizationConfig {
			use_tfidf: true,
			normalization: Normalization::L2,
		},
	);
	insta::assert_snapshot!(format_summary(&summary).trim_end(), @r###"
 Includes punctuation: false
 Lowercase: false
 Transformation: None
 Stop words removed: None
 TF-IDF performed: true
 Normalization: L2 (Euclidean)
 "###);
}

#[test]
fn test_parse_options() {
	let options = Options::try_parse_from(&[
		"wordbag",
		"--file",
		"corpus.csv",
		"--tfidf",
		"--normalization",
		"l1",
	])
	.unwrap();
	assert!(options.tfidf);
	assert_eq!(options.normalization, Normalization::L1);
	assert_eq!(options.text_column, "text");
	assert_eq!(options.preview, 5);
}
