/*!
This module defines the two configurations of a transform. `VectorizationConfig` selects the weighting and is owned by whoever triggers transforms. `PreprocessingConfig` is optional and is usually read from a yaml file with [`load_preprocessing_config`].
*/

use crate::error::{Error, Result};
use anyhow::Context;
use rust_stemmers::Algorithm;
use std::{path::Path, sync::Arc};
use wordbag_features::{Normalization, Weighting};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct VectorizationConfig {
	pub use_tfidf: bool,
	/// This only takes effect when `use_tfidf` is true, but it is retained either way.
	pub normalization: Normalization,
}

impl VectorizationConfig {
	pub fn weighting(&self) -> Weighting {
		if self.use_tfidf {
			Weighting::Tfidf {
				normalization: self.normalization,
			}
		} else {
			Weighting::Count
		}
	}

	/// The normalization that is actually applied, which is `None` outside of TF-IDF mode.
	pub fn active_normalization(&self) -> Option<Normalization> {
		if self.use_tfidf {
			Some(self.normalization)
		} else {
			None
		}
	}
}

/**
A `PreprocessingConfig` describes how document text is prepared before it is tokenized. All fields are required when it is deserialized.

```yaml
include_punctuation: false
lowercase: true
transformation:
  snowball_stemmer:
    language: English
stop_words: english
```
*/
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PreprocessingConfig {
	pub include_punctuation: bool,
	pub lowercase: bool,
	pub transformation: Transformation,
	#[serde(deserialize_with = "Option::deserialize")]
	pub stop_words: Option<StopWords>,
}

impl PreprocessingConfig {
	pub fn from_yaml(yaml: &str) -> Result<Self> {
		serde_yaml::from_str(yaml).map_err(|error| Error::Configuration(error.to_string()))
	}

	pub fn validate(&self) -> Result<()> {
		if let Transformation::Custom(custom) = &self.transformation {
			if custom.name.trim().is_empty() {
				return Err(Error::Configuration(
					"custom transformations must have a name".to_owned(),
				));
			}
		}
		if let Some(StopWords::List(words)) = &self.stop_words {
			if words.iter().any(|word| word.is_empty()) {
				return Err(Error::Configuration(
					"stop word lists may not contain empty words".to_owned(),
				));
			}
		}
		Ok(())
	}
}

/// Read and validate a preprocessing config from a yaml or json file.
pub fn load_preprocessing_config(path: &Path) -> anyhow::Result<PreprocessingConfig> {
	let config = std::fs::read_to_string(path)
		.with_context(|| format!("failed to read config file {}", path.display()))?;
	let config = PreprocessingConfig::from_yaml(&config)
		.with_context(|| format!("failed to parse config file {}", path.display()))?;
	config.validate()?;
	Ok(config)
}

/// A `Transformation` is applied to the text of every document before it is tokenized.
#[derive(Clone, Debug, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transformation {
	Identity,
	/// Replace every word with its english Porter stem.
	PorterStemmer,
	/// Replace every word with its stem.
	SnowballStemmer { language: Algorithm },
	#[serde(skip)]
	Custom(CustomTransformation),
}

impl Default for Transformation {
	fn default() -> Self {
		Transformation::Identity
	}
}

impl Transformation {
	pub fn custom(name: impl Into<String>, f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
		Transformation::Custom(CustomTransformation {
			name: name.into(),
			f: Arc::new(f),
		})
	}

	pub fn name(&self) -> String {
		match self {
			Transformation::Identity => "Identity".to_owned(),
			Transformation::PorterStemmer => "Porter Stemmer".to_owned(),
			Transformation::SnowballStemmer { language } => {
				format!("Snowball Stemmer ({:?})", language)
			}
			Transformation::Custom(custom) => custom.name.clone(),
		}
	}
}

#[derive(Clone)]
pub struct CustomTransformation {
	pub name: String,
	pub f: Arc<dyn Fn(&str) -> String + Send + Sync>,
}

impl std::fmt::Debug for CustomTransformation {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("CustomTransformation")
			.field("name", &self.name)
			.finish()
	}
}

/// Stop words are either a built in list, given by its name, or an explicit list of words.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(untagged)]
pub enum StopWords {
	Builtin(BuiltinStopWords),
	List(Vec<String>),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BuiltinStopWords {
	English,
}

impl StopWords {
	pub fn words(&self) -> fnv::FnvHashSet<String> {
		match self {
			StopWords::Builtin(BuiltinStopWords::English) => wordbag_features::stop_words::english(),
			StopWords::List(words) => words.iter().cloned().collect(),
		}
	}
}

impl std::fmt::Display for StopWords {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			StopWords::Builtin(BuiltinStopWords::English) => write!(f, "english"),
			StopWords::List(words) => write!(f, "{}", words.join(", ")),
		}
	}
}
