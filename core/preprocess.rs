use crate::config::{PreprocessingConfig, Transformation};
use rust_stemmers::{Algorithm, Stemmer};
use std::borrow::Cow;
use wordbag_util::tokenizer::{is_word_char, TokenizerOptions};

/// A `Preprocessor` applies a [`PreprocessingConfig`] to document text: lowercasing first, then the transformation. Without a config, text passes through untouched.
pub struct Preprocessor<'a> {
	config: Option<&'a PreprocessingConfig>,
	stemmer: Option<Stemmer>,
}

impl<'a> Preprocessor<'a> {
	pub fn new(config: Option<&'a PreprocessingConfig>) -> Self {
		let stemmer = match config.map(|config| &config.transformation) {
			Some(Transformation::PorterStemmer) => Some(Stemmer::create(Algorithm::English)),
			Some(Transformation::SnowballStemmer { language }) => Some(Stemmer::create(*language)),
			_ => None,
		};
		Self { config, stemmer }
	}

	pub fn tokenizer_options(&self) -> TokenizerOptions {
		match self.config {
			Some(config) => TokenizerOptions {
				lowercase: config.lowercase,
				include_punctuation: config.include_punctuation,
			},
			None => TokenizerOptions::default(),
		}
	}

	pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
		let config = match self.config {
			Some(config) => config,
			None => return Cow::Borrowed(text),
		};
		let text = if config.lowercase {
			Cow::Owned(text.to_lowercase())
		} else {
			Cow::Borrowed(text)
		};
		match &config.transformation {
			Transformation::Identity => text,
			Transformation::PorterStemmer | Transformation::SnowballStemmer { .. } => match &self.stemmer {
				Some(stemmer) => Cow::Owned(stem_words(stemmer, &text)),
				None => text,
			},
			Transformation::Custom(custom) => Cow::Owned((custom.f)(&text)),
		}
	}
}

/// Replace each run of word characters with its stem, keeping everything between runs as is. Word characters are the ones the tokenizer keeps together.
fn stem_words(stemmer: &Stemmer, text: &str) -> String {
	let mut output = String::with_capacity(text.len());
	let mut word_start = None;
	for (index, c) in text.char_indices() {
		match (is_word_char(c), word_start) {
			(true, None) => word_start = Some(index),
			(false, Some(start)) => {
				output.push_str(&stemmer.stem(&text[start..index]));
				output.push(c);
				word_start = None;
			}
			(false, None) => output.push(c),
			(true, Some(_)) => {}
		}
	}
	if let Some(start) = word_start {
		output.push_str(&stemmer.stem(&text[start..]));
	}
	output
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::config::Transformation;

	fn config(lowercase: bool, transformation: Transformation) -> PreprocessingConfig {
		PreprocessingConfig {
			include_punctuation: false,
			lowercase,
			transformation,
			stop_words: None,
		}
	}

	#[test]
	fn test_no_config() {
		let preprocessor = Preprocessor::new(None);
		assert_eq!(preprocessor.apply("Cat Dog"), "Cat Dog");
		assert_eq!(preprocessor.tokenizer_options(), TokenizerOptions::default());
	}

	#[test]
	fn test_lowercase() {
		let config = config(true, Transformation::Identity);
		let preprocessor = Preprocessor::new(Some(&config));
		assert_eq!(preprocessor.apply("Cat Dog"), "cat dog");
		assert!(preprocessor.tokenizer_options().lowercase);
	}

	#[test]
	fn test_stemmer() {
		let config = config(
			true,
			Transformation::SnowballStemmer {
				language: Algorithm::English,
			},
		);
		let preprocessor = Preprocessor::new(Some(&config));
		assert_eq!(preprocessor.apply("Running cats, jumping!"), "run cat, jump!");
	}

	#[test]
	fn test_porter_stemmer() {
		let config = config(false, Transformation::PorterStemmer);
		let preprocessor = Preprocessor::new(Some(&config));
		assert_eq!(preprocessor.apply("cats jumping"), "cat jump");
	}

	#[test]
	fn test_stemmer_keeps_underscored_words_whole() {
		let config = config(false, Transformation::PorterStemmer);
		let preprocessor = Preprocessor::new(Some(&config));
		let text = preprocessor.apply("running_cats");
		let tokens: Vec<_> =
			wordbag_util::tokenizer::Tokenizer::new(&text, preprocessor.tokenizer_options()).collect();
		assert_eq!(tokens.len(), 1);
	}

	#[test]
	fn test_custom_runs_after_lowercase() {
		let config = config(
			true,
			Transformation::custom("reverse", |text| text.chars().rev().collect()),
		);
		let preprocessor = Preprocessor::new(Some(&config));
		assert_eq!(preprocessor.apply("Cat"), "tac");
	}
}
