/*!
This crate turns text into numeric features. It tokenizes documents, builds a vocabulary, and computes count or TF-IDF weighted feature matrices with optional row normalization.
*/

#![allow(clippy::tabs_in_doc_comments)]

pub mod bag_of_words;
pub mod normalize;
pub mod stop_words;

pub use self::{
	bag_of_words::{
		BagOfWordsFeatureGroup, BagOfWordsFeatureGroupTokensEntry,
		FitBagOfWordsFeatureGroupSettings, Weighting,
	},
	normalize::Normalization,
};
