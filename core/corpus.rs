use crate::error::{Error, Result};
use std::path::Path;
use wordbag_dataframe::{DataFrame, FromCsvOptions};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
	pub text: String,
	pub category: String,
}

impl Document {
	pub fn new(text: impl Into<String>, category: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			category: category.into(),
		}
	}
}

/// A `Corpus` is an ordered collection of documents.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Corpus {
	pub documents: Vec<Document>,
}

/// These are the csv columns a corpus is read from.
#[derive(Clone, Debug)]
pub struct CorpusCsvOptions {
	pub text_column: String,
	pub category_column: String,
}

impl Default for CorpusCsvOptions {
	fn default() -> Self {
		Self {
			text_column: "text".to_owned(),
			category_column: "category".to_owned(),
		}
	}
}

impl Corpus {
	pub fn new(documents: Vec<Document>) -> Self {
		Self { documents }
	}

	pub fn len(&self) -> usize {
		self.documents.len()
	}

	pub fn is_empty(&self) -> bool {
		self.documents.is_empty()
	}

	pub fn from_path(path: &Path, options: &CorpusCsvOptions) -> Result<Self> {
		Self::from_csv(&mut csv::Reader::from_path(path)?, options)
	}

	pub fn from_csv<R>(reader: &mut csv::Reader<R>, options: &CorpusCsvOptions) -> Result<Self>
	where
		R: std::io::Read,
	{
		let header = reader.headers()?;
		for column_name in [&options.text_column, &options.category_column].iter() {
			if !header.iter().any(|header_name| header_name == column_name.as_str()) {
				return Err(Error::MissingColumn(column_name.to_string()));
			}
		}
		let dataframe = DataFrame::from_csv(reader, Self::from_csv_options(options))
			.map_err(|error| Error::Load(format!("{:#}", error)))?;
		Self::from_dataframe(dataframe, options)
	}

	fn from_csv_options(options: &CorpusCsvOptions) -> FromCsvOptions {
		FromCsvOptions {
			columns: Some(vec![
				options.text_column.clone(),
				options.category_column.clone(),
			]),
			..Default::default()
		}
	}

	fn from_dataframe(mut dataframe: DataFrame, options: &CorpusCsvOptions) -> Result<Self> {
		let mut columns = dataframe.columns.drain(..);
		let text = columns
			.next()
			.and_then(|column| column.as_text().map(|column| column.data.clone()))
			.ok_or_else(|| Error::MissingColumn(options.text_column.clone()))?;
		let category = columns
			.next()
			.and_then(|column| column.as_text().map(|column| column.data.clone()))
			.ok_or_else(|| Error::MissingColumn(options.category_column.clone()))?;
		let documents = text
			.into_iter()
			.zip(category.into_iter())
			.map(|(text, category)| Document { text, category })
			.collect();
		Ok(Self { documents })
	}
}

impl From<Vec<Document>> for Corpus {
	fn from(documents: Vec<Document>) -> Self {
		Self::new(documents)
	}
}

#[test]
fn test_corpus_from_csv() {
	let csv = "id,body,label\n1,cat dog cat,A\n2,\"dog, dog\",B\n";
	let options = CorpusCsvOptions {
		text_column: "body".to_owned(),
		category_column: "label".to_owned(),
	};
	let corpus =
		Corpus::from_csv(&mut csv::Reader::from_reader(std::io::Cursor::new(csv)), &options)
			.unwrap();
	assert_eq!(
		corpus.documents,
		vec![Document::new("cat dog cat", "A"), Document::new("dog, dog", "B")]
	);
}

#[test]
fn test_corpus_from_csv_missing_column() {
	let csv = "text\ncat dog cat\n";
	let result = Corpus::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		&CorpusCsvOptions::default(),
	);
	match result {
		Err(Error::MissingColumn(column_name)) => assert_eq!(column_name, "category"),
		_ => panic!("expected a missing column error"),
	}
}

#[test]
fn test_corpus_from_missing_file() {
	let result = Corpus::from_path(
		Path::new("does/not/exist.csv"),
		&CorpusCsvOptions::default(),
	);
	assert!(matches!(result, Err(Error::Csv(_))));
}
