/*!
This module contains [`transform`], which turns a sequence of documents into a [`FeatureTable`].
*/

use crate::{
	config::{PreprocessingConfig, VectorizationConfig},
	corpus::Document,
	error::Result,
	preprocess::Preprocessor,
	table::{FeatureTable, LABELS_COLUMN_NAME, TEXT_COLUMN_NAME},
};
use std::{borrow::Cow, collections::BTreeSet, num::NonZeroUsize};
use wordbag_dataframe::{EnumColumn, TextColumn};
use wordbag_features::{BagOfWordsFeatureGroup, FitBagOfWordsFeatureGroupSettings};

/**
Transform `documents` into a feature table.

Without a preprocessing config, text is counted as is: no lowercasing, no stop words, no transformation. The preprocessing config is validated before anything else, so an invalid config is reported even for an empty corpus. An empty corpus produces [`FeatureTable::empty`].

Every call recomputes the vocabulary from scratch. The same inputs always produce the same table.
*/
pub fn transform(
	documents: &[Document],
	config: &VectorizationConfig,
	preprocessing: Option<&PreprocessingConfig>,
) -> Result<FeatureTable> {
	transform_with_progress(documents, config, preprocessing, &|| {})
}

/// This is [`transform`], calling `progress` once for each document as its features are computed.
pub fn transform_with_progress(
	documents: &[Document],
	config: &VectorizationConfig,
	preprocessing: Option<&PreprocessingConfig>,
	progress: &impl Fn(),
) -> Result<FeatureTable> {
	if let Some(preprocessing) = preprocessing {
		preprocessing.validate()?;
	}
	if documents.is_empty() {
		log::warn!("no documents to transform, producing an empty table");
		return Ok(FeatureTable::empty());
	}

	// Preprocess the text of every document.
	let preprocessor = Preprocessor::new(preprocessing);
	let texts: Vec<Cow<str>> = documents
		.iter()
		.map(|document| preprocessor.apply(&document.text))
		.collect();

	// Fit the vocabulary and compute the features.
	let settings = FitBagOfWordsFeatureGroupSettings {
		tokenizer_options: preprocessor.tokenizer_options(),
		stop_words: preprocessing
			.and_then(|preprocessing| preprocessing.stop_words.as_ref())
			.map(|stop_words| stop_words.words())
			.unwrap_or_default(),
		weighting: config.weighting(),
	};
	let feature_group = BagOfWordsFeatureGroup::fit(&texts, settings);
	let features = feature_group.compute(&texts, progress);
	let feature_names: Vec<String> = feature_group
		.feature_names()
		.map(|name| name.to_owned())
		.collect();
	if feature_names.is_empty() {
		log::warn!("every token was filtered out, the table has no feature columns");
	}

	let labels = compute_labels(documents);
	let text = TextColumn::new(
		TEXT_COLUMN_NAME.to_owned(),
		documents
			.iter()
			.map(|document| document.text.clone())
			.collect(),
	);
	log::info!(
		"transformed {} documents into {} features ({})",
		documents.len(),
		feature_names.len(),
		if config.use_tfidf { "tf-idf" } else { "counts" },
	);
	Ok(FeatureTable {
		feature_names,
		features,
		labels,
		text,
	})
}

/// The distinct categories, sorted, become the label options. Each document's label is the one based index of its category.
fn compute_labels(documents: &[Document]) -> EnumColumn {
	let options: Vec<String> = documents
		.iter()
		.map(|document| document.category.as_str())
		.collect::<BTreeSet<_>>()
		.into_iter()
		.map(|category| category.to_owned())
		.collect();
	let data = documents
		.iter()
		.map(|document| {
			options
				.binary_search(&document.category)
				.ok()
				.and_then(|position| NonZeroUsize::new(position + 1))
		})
		.collect();
	EnumColumn::new(LABELS_COLUMN_NAME.to_owned(), options, data)
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		config::{StopWords, Transformation},
		error::Error,
	};
	use ndarray::prelude::*;
	use wordbag_features::Normalization;

	fn documents() -> Vec<Document> {
		vec![
			Document::new("cat dog cat", "A"),
			Document::new("dog dog", "B"),
		]
	}

	fn tfidf(normalization: Normalization) -> VectorizationConfig {
		VectorizationConfig {
			use_tfidf: true,
			normalization,
		}
	}

	fn row_norm(row: ArrayView1<f32>) -> f32 {
		row.iter().map(|value| value * value).sum::<f32>().sqrt()
	}

	#[test]
	fn test_count_mode() {
		let table = transform(&documents(), &VectorizationConfig::default(), None).unwrap();
		assert_eq!(table.feature_names, vec!["cat", "dog"]);
		assert_eq!(table.features, arr2(&[[2.0, 1.0], [0.0, 2.0]]));
		assert_eq!(table.labels.options, vec!["A", "B"]);
		assert_eq!(table.label(0), Some("A"));
		assert_eq!(table.label(1), Some("B"));
		assert_eq!(table.text.data, vec!["cat dog cat", "dog dog"]);
	}

	#[test]
	fn test_counts_are_non_negative_integers() {
		let documents = vec![
			Document::new("The cat sat on the mat. The mat was red.", "x"),
			Document::new("A dog, a log, and a frog!", "y"),
			Document::new("", "x"),
		];
		let table = transform(&documents, &VectorizationConfig::default(), None).unwrap();
		assert_eq!(table.nrows(), 3);
		assert!(table
			.features
			.iter()
			.all(|value| *value >= 0.0 && value.fract() == 0.0));
		assert!(table.features.row(2).iter().all(|value| *value == 0.0));
	}

	#[test]
	fn test_tfidf_l2_rows_have_unit_norm() {
		let table = transform(&documents(), &tfidf(Normalization::L2), None).unwrap();
		for row in table.features.axis_iter(Axis(0)) {
			assert!((row_norm(row) - 1.0).abs() < 1e-5);
		}
	}

	#[test]
	fn test_tfidf_l2_skips_all_zero_rows() {
		let documents = vec![Document::new("cat cat", "A"), Document::new("?", "B")];
		let table = transform(&documents, &tfidf(Normalization::L2), None).unwrap();
		assert!((row_norm(table.features.row(0)) - 1.0).abs() < 1e-5);
		assert_eq!(row_norm(table.features.row(1)), 0.0);
	}

	#[test]
	fn test_normalization_changes_only_values() {
		let none = transform(&documents(), &tfidf(Normalization::None), None).unwrap();
		let l1 = transform(&documents(), &tfidf(Normalization::L1), None).unwrap();
		assert_eq!(none.features.dim(), l1.features.dim());
		assert_eq!(none.feature_names, l1.feature_names);
		assert_eq!(none.labels, l1.labels);
		assert_eq!(none.text, l1.text);
		assert_ne!(none.features, l1.features);
		for row in l1.features.axis_iter(Axis(0)) {
			assert!((row.sum() - 1.0).abs() < 1e-5);
		}
	}

	#[test]
	fn test_normalization_is_ignored_without_tfidf() {
		let config = VectorizationConfig {
			use_tfidf: false,
			normalization: Normalization::L2,
		};
		let table = transform(&documents(), &config, None).unwrap();
		assert_eq!(table.features, arr2(&[[2.0, 1.0], [0.0, 2.0]]));
	}

	#[test]
	fn test_deterministic() {
		let documents = vec![
			Document::new("zebra apple mango apple", "fruit"),
			Document::new("mango kiwi", "fruit"),
			Document::new("lion zebra", "animal"),
		];
		let a = transform(&documents, &tfidf(Normalization::L2), None).unwrap();
		let b = transform(&documents, &tfidf(Normalization::L2), None).unwrap();
		assert_eq!(a, b);
		assert_eq!(a.feature_names, vec!["apple", "kiwi", "lion", "mango", "zebra"]);
		assert_eq!(a.labels.options, vec!["animal", "fruit"]);
		assert_eq!(a.label(2), Some("animal"));
	}

	#[test]
	fn test_empty_documents() {
		let table = transform(&[], &VectorizationConfig::default(), None).unwrap();
		assert_eq!(table, FeatureTable::empty());
		assert_eq!(table.features.dim(), (0, 0));
	}

	#[test]
	fn test_stop_words_keep_zero_rows() {
		let preprocessing = PreprocessingConfig {
			include_punctuation: false,
			lowercase: false,
			transformation: Transformation::Identity,
			stop_words: Some(StopWords::List(vec!["dog".to_owned()])),
		};
		let table = transform(
			&documents(),
			&VectorizationConfig::default(),
			Some(&preprocessing),
		)
		.unwrap();
		assert_eq!(table.feature_names, vec!["cat"]);
		assert_eq!(table.features, arr2(&[[2.0], [0.0]]));
		assert_eq!(table.nrows(), 2);
		assert_eq!(table.label(1), Some("B"));
	}

	#[test]
	fn test_empty_vocabulary() {
		let preprocessing = PreprocessingConfig {
			include_punctuation: false,
			lowercase: false,
			transformation: Transformation::Identity,
			stop_words: Some(StopWords::List(vec!["cat".to_owned(), "dog".to_owned()])),
		};
		let table = transform(
			&documents(),
			&tfidf(Normalization::L2),
			Some(&preprocessing),
		)
		.unwrap();
		assert_eq!(table.features.dim(), (2, 0));
		assert!(table.feature_names.is_empty());
		assert_eq!(table.text.data.len(), 2);
	}

	#[test]
	fn test_preprocessing() {
		let documents = vec![
			Document::new("The Cats ran!", "A"),
			Document::new("the cat runs", "B"),
		];
		let preprocessing = PreprocessingConfig {
			include_punctuation: true,
			lowercase: true,
			transformation: Transformation::SnowballStemmer {
				language: rust_stemmers::Algorithm::English,
			},
			stop_words: Some(StopWords::Builtin(crate::config::BuiltinStopWords::English)),
		};
		let table = transform(
			&documents,
			&VectorizationConfig::default(),
			Some(&preprocessing),
		)
		.unwrap();
		assert_eq!(table.feature_names, vec!["!", "cat", "ran", "run"]);
		assert_eq!(table.features, arr2(&[[1.0, 1.0, 1.0, 0.0], [0.0, 1.0, 0.0, 1.0]]));
		assert_eq!(table.text.data[0], "The Cats ran!");
	}

	#[test]
	fn test_invalid_preprocessing_aborts() {
		let preprocessing = PreprocessingConfig {
			include_punctuation: false,
			lowercase: false,
			transformation: Transformation::custom("", |text| text.to_owned()),
			stop_words: None,
		};
		let result = transform(&[], &VectorizationConfig::default(), Some(&preprocessing));
		assert!(matches!(result, Err(Error::Configuration(_))));
		let result = transform(
			&documents(),
			&VectorizationConfig::default(),
			Some(&preprocessing),
		);
		assert!(matches!(result, Err(Error::Configuration(_))));
	}

	#[test]
	fn test_progress() {
		let calls = std::cell::Cell::new(0);
		transform_with_progress(&documents(), &VectorizationConfig::default(), None, &|| {
			calls.set(calls.get() + 1)
		})
		.unwrap();
		assert_eq!(calls.get(), 2);
	}
}
