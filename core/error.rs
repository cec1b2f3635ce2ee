use thiserror::Error;

/// These are the errors that abort a transform or a corpus load. An empty corpus and an empty vocabulary are not errors.
#[derive(Debug, Error)]
pub enum Error {
	#[error("invalid preprocessing config: {0}")]
	Configuration(String),
	#[error("column \"{0}\" not found in csv header")]
	MissingColumn(String),
	#[error(transparent)]
	Csv(#[from] csv::Error),
	#[error("failed to load corpus: {0}")]
	Load(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
