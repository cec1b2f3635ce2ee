/*!
This module holds the state needed to rerun a transform when its inputs change.
*/

use crate::{
	config::{PreprocessingConfig, VectorizationConfig},
	corpus::Corpus,
	error::Result,
	summary::Summary,
	table::FeatureTable,
	vectorize::transform,
};
use std::sync::{
	atomic::{AtomicU64, Ordering},
	Mutex,
};

/**
A `Session` owns the latest corpus, preprocessing config, and vectorization config. Setting a corpus recomputes the table immediately. Changing either config does not, call [`Session::apply`] to recompute.

Until a corpus has been set, [`Session::apply`] returns `Ok(None)`.
*/
#[derive(Debug, Default)]
pub struct Session {
	corpus: Option<Corpus>,
	preprocessing: Option<PreprocessingConfig>,
	config: VectorizationConfig,
}

impl Session {
	pub fn new(config: VectorizationConfig) -> Self {
		Self {
			config,
			..Default::default()
		}
	}

	pub fn corpus(&self) -> Option<&Corpus> {
		self.corpus.as_ref()
	}

	pub fn set_config(&mut self, config: VectorizationConfig) {
		self.config = config;
	}

	pub fn set_preprocessing(&mut self, preprocessing: Option<PreprocessingConfig>) {
		self.preprocessing = preprocessing;
	}

	pub fn set_corpus(&mut self, corpus: Corpus) -> Result<FeatureTable> {
		let corpus = self.corpus.insert(corpus);
		transform(
			&corpus.documents,
			&self.config,
			self.preprocessing.as_ref(),
		)
	}

	pub fn apply(&self) -> Result<Option<FeatureTable>> {
		match &self.corpus {
			Some(corpus) => Ok(Some(transform(
				&corpus.documents,
				&self.config,
				self.preprocessing.as_ref(),
			)?)),
			None => Ok(None),
		}
	}

	pub fn summary(&self) -> Summary {
		Summary::new(self.preprocessing.as_ref(), &self.config)
	}
}

/// A `Ticket` orders requests to an [`OutputSlot`]. Later tickets compare greater.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/**
An `OutputSlot` holds the most recent result when transforms may be triggered from more than one thread. Take a [`Ticket`] when a request starts and publish with it when the request finishes. A result is discarded if a request with a later ticket has already published, so the most recent request always wins and results never interleave.
*/
#[derive(Debug, Default)]
pub struct OutputSlot {
	next_ticket: AtomicU64,
	output: Mutex<Option<(Ticket, Option<FeatureTable>)>>,
}

impl OutputSlot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn ticket(&self) -> Ticket {
		Ticket(self.next_ticket.fetch_add(1, Ordering::SeqCst))
	}

	/// Publish a result. Returns false if it was superseded by a later request.
	pub fn publish(&self, ticket: Ticket, table: Option<FeatureTable>) -> bool {
		let mut output = self
			.output
			.lock()
			.unwrap_or_else(|error| error.into_inner());
		match output.as_ref() {
			Some((published, _)) if *published > ticket => {
				log::debug!("discarding output of superseded request {:?}", ticket);
				false
			}
			_ => {
				*output = Some((ticket, table));
				true
			}
		}
	}

	/// Retrieve the most recently published result. The outer `None` means nothing was published yet.
	pub fn latest(&self) -> Option<Option<FeatureTable>> {
		self.output
			.lock()
			.unwrap_or_else(|error| error.into_inner())
			.as_ref()
			.map(|(_, table)| table.clone())
	}
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::corpus::Document;
	use std::sync::Arc;
	use wordbag_features::Normalization;

	fn corpus() -> Corpus {
		Corpus::new(vec![
			Document::new("cat dog cat", "A"),
			Document::new("dog dog", "B"),
		])
	}

	#[test]
	fn test_apply_without_corpus() {
		let session = Session::default();
		assert!(session.apply().unwrap().is_none());
	}

	#[test]
	fn test_set_corpus_transforms() {
		let mut session = Session::default();
		let table = session.set_corpus(corpus()).unwrap();
		assert_eq!(table.nrows(), 2);
		assert_eq!(session.corpus().map(|corpus| corpus.len()), Some(2));
	}

	#[test]
	fn test_config_change_requires_apply() {
		let mut session = Session::default();
		let counts = session.set_corpus(corpus()).unwrap();
		session.set_config(VectorizationConfig {
			use_tfidf: true,
			normalization: Normalization::L2,
		});
		assert_eq!(session.summary().normalization, Some(Normalization::L2));
		let weights = session.apply().unwrap().unwrap();
		assert_eq!(counts.features.dim(), weights.features.dim());
		assert_ne!(counts.features, weights.features);
	}

	#[test]
	fn test_preprocessing_set_after_corpus_applies_on_apply() {
		let mut session = Session::default();
		session.set_corpus(corpus()).unwrap();
		session.set_preprocessing(Some(PreprocessingConfig {
			include_punctuation: false,
			lowercase: false,
			transformation: crate::config::Transformation::Identity,
			stop_words: Some(crate::config::StopWords::List(vec!["dog".to_owned()])),
		}));
		let table = session.apply().unwrap().unwrap();
		assert_eq!(table.feature_names, vec!["cat"]);
	}

	#[test]
	fn test_output_slot_latest_request_wins() {
		let slot = OutputSlot::new();
		assert!(slot.latest().is_none());
		let first = slot.ticket();
		let second = slot.ticket();
		assert!(slot.publish(second, Some(FeatureTable::empty())));
		assert!(!slot.publish(first, None));
		assert_eq!(slot.latest(), Some(Some(FeatureTable::empty())));
	}

	#[test]
	fn test_output_slot_concurrent_publishers() {
		let slot = Arc::new(OutputSlot::new());
		let tickets: Vec<Ticket> = (0..8).map(|_| slot.ticket()).collect();
		let last = *tickets.last().unwrap();
		let handles: Vec<_> = tickets
			.into_iter()
			.rev()
			.map(|ticket| {
				let slot = slot.clone();
				std::thread::spawn(move || {
					let table = transform(
						&corpus().documents,
						&VectorizationConfig::default(),
						None,
					)
					.unwrap();
					slot.publish(ticket, Some(table));
				})
			})
			.collect();
		for handle in handles {
			handle.join().unwrap();
		}
		let published = slot.output.lock().unwrap();
		assert_eq!(published.as_ref().map(|(ticket, _)| *ticket), Some(last));
	}
}
