use crate::normalize::Normalization;
use fnv::{FnvHashMap, FnvHashSet};
use ndarray::prelude::*;
use wordbag_util::tokenizer::{Tokenizer, TokenizerOptions};

/**
A `BagOfWordsFeatureGroup` creates one feature per distinct token in a collection of documents using the [Bag of Words](https://en.wikipedia.org/wiki/Bag-of-words_model) method.

During fitting, every document is tokenized and the number of documents containing each token is counted. Tokens in the stop word set are dropped. The remaining tokens, sorted lexicographically, form the vocabulary. Each token's smoothed [IDF](https://en.wikipedia.org/wiki/Tf%E2%80%93idf) is `ln((1 + n) / (1 + df)) + 1`, where `n` is the number of documents and `df` is the number of documents containing the token.

With `Weighting::Count`, the feature value is the number of occurrences of the token in the document. With `Weighting::Tfidf`, the count is multiplied by the token's IDF and the row is then normalized.

# Example

| document      | count features (cat, dog) | tfidf features before normalization      |
|---------------|---------------------------|------------------------------------------|
| "cat dog cat" | [2, 1]                    | [2 * (ln(3/2) + 1), 1 * (ln(3/3) + 1)]   |
| "dog dog"     | [0, 2]                    | [0, 2 * (ln(3/3) + 1)]                   |
*/
#[derive(Debug, Clone, PartialEq)]
pub struct BagOfWordsFeatureGroup {
	/// These are the options used to split the text into tokens.
	pub tokenizer_options: TokenizerOptions,
	/// This is how token counts are turned into feature values.
	pub weighting: Weighting,
	/// These are the tokens that were produced during fitting, in feature order.
	pub tokens: Vec<BagOfWordsFeatureGroupTokensEntry>,
	/// This maps each token to its feature index.
	pub tokens_map: FnvHashMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BagOfWordsFeatureGroupTokensEntry {
	pub token: String,
	/// This is the number of documents that contain the token.
	pub examples_count: usize,
	pub idf: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Weighting {
	Count,
	Tfidf { normalization: Normalization },
}

impl Default for Weighting {
	fn default() -> Self {
		Weighting::Count
	}
}

#[derive(Clone, Debug, Default)]
pub struct FitBagOfWordsFeatureGroupSettings {
	pub tokenizer_options: TokenizerOptions,
	pub stop_words: FnvHashSet<String>,
	pub weighting: Weighting,
}

impl BagOfWordsFeatureGroup {
	pub fn fit<S>(values: &[S], settings: FitBagOfWordsFeatureGroupSettings) -> Self
	where
		S: AsRef<str>,
	{
		let mut token_example_histogram: FnvHashMap<String, usize> = FnvHashMap::default();
		// Count the number of documents each token appears in.
		for value in values.iter() {
			let mut token_set = FnvHashSet::default();
			for token in Tokenizer::new(value.as_ref(), settings.tokenizer_options) {
				if settings.stop_words.contains(&*token) {
					continue;
				}
				token_set.insert(token);
			}
			for token in token_set.into_iter() {
				*token_example_histogram
					.entry(token.into_owned())
					.or_insert(0) += 1;
			}
		}
		let n_examples = values.len() as f32;
		let mut tokens: Vec<BagOfWordsFeatureGroupTokensEntry> = token_example_histogram
			.into_iter()
			.map(|(token, examples_count)| {
				let idf = ((1.0 + n_examples) / (1.0 + examples_count as f32)).ln() + 1.0;
				BagOfWordsFeatureGroupTokensEntry {
					token,
					examples_count,
					idf,
				}
			})
			.collect();
		tokens.sort_by(|a, b| a.token.cmp(&b.token));
		let tokens_map = tokens
			.iter()
			.enumerate()
			.map(|(i, entry)| (entry.token.clone(), i))
			.collect();
		log::debug!(
			"fit bag of words vocabulary with {} tokens from {} documents",
			tokens.len(),
			values.len()
		);
		Self {
			tokenizer_options: settings.tokenizer_options,
			weighting: settings.weighting,
			tokens,
			tokens_map,
		}
	}

	pub fn n_features(&self) -> usize {
		self.tokens.len()
	}

	pub fn feature_names(&self) -> impl Iterator<Item = &str> {
		self.tokens.iter().map(|entry| entry.token.as_str())
	}

	pub fn compute_array_f32<S>(
		&self,
		mut features: ArrayViewMut2<f32>,
		values: &[S],
		progress: &impl Fn(),
	) where
		S: AsRef<str>,
	{
		// Fill the features with zeros.
		features.fill(0.0);
		for (example_index, value) in values.iter().enumerate() {
			let mut row = features.row_mut(example_index);
			// Count the occurrences of each token in the vocabulary. Stop words are not in the vocabulary.
			for token in Tokenizer::new(value.as_ref(), self.tokenizer_options) {
				if let Some(token_index) = self.tokens_map.get(&*token) {
					row[*token_index] += 1.0;
				}
			}
			if let Weighting::Tfidf { normalization } = self.weighting {
				for (feature, entry) in row.iter_mut().zip(self.tokens.iter()) {
					*feature *= entry.idf;
				}
				normalization.normalize_row(row);
			}
			progress();
		}
	}

	pub fn compute<S>(&self, values: &[S], progress: &impl Fn()) -> Array2<f32>
	where
		S: AsRef<str>,
	{
		let mut features = Array2::zeros((values.len(), self.n_features()));
		self.compute_array_f32(features.view_mut(), values, progress);
		features
	}
}

#[cfg(test)]
mod test {
	use super::*;

	fn documents() -> Vec<&'static str> {
		vec!["cat dog cat", "dog dog"]
	}

	#[test]
	fn test_count() {
		let feature_group =
			BagOfWordsFeatureGroup::fit(&documents(), FitBagOfWordsFeatureGroupSettings::default());
		assert_eq!(
			feature_group.feature_names().collect::<Vec<_>>(),
			vec!["cat", "dog"]
		);
		let features = feature_group.compute(&documents(), &|| {});
		assert_eq!(features, arr2(&[[2.0, 1.0], [0.0, 2.0]]));
	}

	#[test]
	fn test_idf() {
		let feature_group =
			BagOfWordsFeatureGroup::fit(&documents(), FitBagOfWordsFeatureGroupSettings::default());
		assert_eq!(feature_group.tokens[0].examples_count, 1);
		assert_eq!(feature_group.tokens[1].examples_count, 2);
		assert!((feature_group.tokens[0].idf - (1.5f32.ln() + 1.0)).abs() < 1e-6);
		assert!((feature_group.tokens[1].idf - 1.0).abs() < 1e-6);
	}

	#[test]
	fn test_tfidf_l2() {
		let settings = FitBagOfWordsFeatureGroupSettings {
			weighting: Weighting::Tfidf {
				normalization: Normalization::L2,
			},
			..Default::default()
		};
		let feature_group = BagOfWordsFeatureGroup::fit(&documents(), settings);
		let features = feature_group.compute(&documents(), &|| {});
		assert!((features[[0, 0]] - 0.942_156).abs() < 1e-4);
		assert!((features[[0, 1]] - 0.335_176).abs() < 1e-4);
		assert!((features[[1, 0]]).abs() < 1e-6);
		assert!((features[[1, 1]] - 1.0).abs() < 1e-6);
	}

	#[test]
	fn test_tfidf_without_normalization() {
		let settings = FitBagOfWordsFeatureGroupSettings {
			weighting: Weighting::Tfidf {
				normalization: Normalization::None,
			},
			..Default::default()
		};
		let feature_group = BagOfWordsFeatureGroup::fit(&documents(), settings);
		let features = feature_group.compute(&documents(), &|| {});
		assert!((features[[0, 0]] - 2.0 * (1.5f32.ln() + 1.0)).abs() < 1e-5);
		assert!((features[[1, 1]] - 2.0).abs() < 1e-6);
	}

	#[test]
	fn test_stop_words() {
		let mut stop_words = FnvHashSet::default();
		stop_words.insert("dog".to_owned());
		let settings = FitBagOfWordsFeatureGroupSettings {
			stop_words,
			..Default::default()
		};
		let feature_group = BagOfWordsFeatureGroup::fit(&documents(), settings);
		assert_eq!(feature_group.feature_names().collect::<Vec<_>>(), vec!["cat"]);
		let features = feature_group.compute(&documents(), &|| {});
		assert_eq!(features, arr2(&[[2.0], [0.0]]));
	}

	#[test]
	fn test_empty_vocabulary() {
		let values = vec!["a b c", "!"];
		let feature_group =
			BagOfWordsFeatureGroup::fit(&values, FitBagOfWordsFeatureGroupSettings::default());
		let features = feature_group.compute(&values, &|| {});
		assert_eq!(features.dim(), (2, 0));
	}

	#[test]
	fn test_lowercase() {
		let values = vec!["Cat cat", "CAT"];
		let raw =
			BagOfWordsFeatureGroup::fit(&values, FitBagOfWordsFeatureGroupSettings::default());
		assert_eq!(
			raw.feature_names().collect::<Vec<_>>(),
			vec!["CAT", "Cat", "cat"]
		);
		let settings = FitBagOfWordsFeatureGroupSettings {
			tokenizer_options: TokenizerOptions {
				lowercase: true,
				include_punctuation: false,
			},
			..Default::default()
		};
		let lowercased = BagOfWordsFeatureGroup::fit(&values, settings);
		assert_eq!(lowercased.feature_names().collect::<Vec<_>>(), vec!["cat"]);
		assert_eq!(lowercased.compute(&values, &|| {}), arr2(&[[2.0], [1.0]]));
	}

	#[test]
	fn test_progress() {
		let calls = std::cell::Cell::new(0);
		let feature_group =
			BagOfWordsFeatureGroup::fit(&documents(), FitBagOfWordsFeatureGroupSettings::default());
		feature_group.compute(&documents(), &|| calls.set(calls.get() + 1));
		assert_eq!(calls.get(), 2);
	}
}
