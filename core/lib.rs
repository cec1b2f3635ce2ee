/*!
This crate turns a corpus of categorized text documents into a bag of words feature table. Start with [`transform`], or use a [`Session`] to keep the inputs around and recompute when they change.

```
use wordbag_core::{transform, Document, VectorizationConfig};

let documents = vec![
	Document::new("cat dog cat", "A"),
	Document::new("dog dog", "B"),
];
let table = transform(&documents, &VectorizationConfig::default(), None).unwrap();
assert_eq!(table.feature_names, vec!["cat", "dog"]);
assert_eq!(table.features.row(0).to_vec(), vec![2.0, 1.0]);
```
*/

#![allow(clippy::tabs_in_doc_comments)]

pub mod config;
pub mod corpus;
pub mod error;
pub mod preprocess;
pub mod session;
pub mod summary;
pub mod table;
pub mod vectorize;

pub use self::{
	config::{
		load_preprocessing_config, BuiltinStopWords, PreprocessingConfig, StopWords,
		Transformation, VectorizationConfig,
	},
	corpus::{Corpus, CorpusCsvOptions, Document},
	error::{Error, Result},
	session::{OutputSlot, Session, Ticket},
	summary::Summary,
	table::FeatureTable,
	vectorize::{transform, transform_with_progress},
};
pub use wordbag_features::Normalization;
