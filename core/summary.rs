use crate::config::{PreprocessingConfig, VectorizationConfig};
use wordbag_features::Normalization;

/// A `Summary` describes the settings a transform runs with. Formatting it is left to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
	pub include_punctuation: bool,
	pub lowercase: bool,
	pub transformation: Option<String>,
	pub stop_words: Option<String>,
	pub tfidf: bool,
	/// This is `None` unless TF-IDF is enabled.
	pub normalization: Option<Normalization>,
}

impl Summary {
	pub fn new(preprocessing: Option<&PreprocessingConfig>, config: &VectorizationConfig) -> Self {
		Self {
			include_punctuation: preprocessing
				.map(|preprocessing| preprocessing.include_punctuation)
				.unwrap_or(false),
			lowercase: preprocessing
				.map(|preprocessing| preprocessing.lowercase)
				.unwrap_or(false),
			transformation: preprocessing.map(|preprocessing| preprocessing.transformation.name()),
			stop_words: preprocessing
				.and_then(|preprocessing| preprocessing.stop_words.as_ref())
				.map(|stop_words| stop_words.to_string()),
			tfidf: config.use_tfidf,
			normalization: config.active_normalization(),
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::config::{StopWords, Transformation};

	#[test]
	fn test_summary_without_preprocessing() {
		let summary = Summary::new(None, &VectorizationConfig::default());
		insta::assert_debug_snapshot!(summary, @r###"
  Summary {
      include_punctuation: false,
      lowercase: false,
      transformation: None,
      stop_words: None,
      tfidf: false,
      normalization: None,
  }
  "###);
	}

	#[test]
	fn test_summary_with_preprocessing() {
		let preprocessing = PreprocessingConfig {
			include_punctuation: true,
			lowercase: true,
			transformation: Transformation::Identity,
			stop_words: Some(StopWords::List(vec!["dog".to_owned(), "the".to_owned()])),
		};
		let config = VectorizationConfig {
			use_tfidf: true,
			normalization: Normalization::L1,
		};
		let summary = Summary::new(Some(&preprocessing), &config);
		assert!(summary.include_punctuation);
		assert!(summary.lowercase);
		assert_eq!(summary.transformation.as_deref(), Some("Identity"));
		assert_eq!(summary.stop_words.as_deref(), Some("dog, the"));
		assert_eq!(summary.normalization, Some(Normalization::L1));
	}
}
