use fnv::FnvHashSet;
use ndarray::prelude::*;
use wordbag_dataframe::{Column, DataFrame, EnumColumn, NumberColumn, TextColumn};

/**
A `FeatureTable` is the result of a transform. It has one row per document.

- `features` has one column per entry of `feature_names`.
- `labels` holds each document's category as an index into the sorted distinct categories.
- `text` holds each document's original text.
*/
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureTable {
	pub feature_names: Vec<String>,
	pub features: Array2<f32>,
	pub labels: EnumColumn,
	pub text: TextColumn,
}

pub const LABELS_COLUMN_NAME: &str = "category";
pub const TEXT_COLUMN_NAME: &str = "text";

impl FeatureTable {
	/// This is the table produced for an empty corpus. It has no rows, no feature columns, and no categories.
	pub fn empty() -> Self {
		Self {
			feature_names: Vec::new(),
			features: Array2::zeros((0, 0)),
			labels: EnumColumn::new(LABELS_COLUMN_NAME.to_owned(), Vec::new(), Vec::new()),
			text: TextColumn::new(TEXT_COLUMN_NAME.to_owned(), Vec::new()),
		}
	}

	pub fn nrows(&self) -> usize {
		self.features.nrows()
	}

	pub fn n_features(&self) -> usize {
		self.feature_names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nrows() == 0
	}

	/// Retrieve the category of the document at `index`.
	pub fn label(&self, index: usize) -> Option<&str> {
		self.labels.option(index)
	}

	/// Convert the table into a dataframe with one number column per feature followed by the category and text columns. If a feature is named like the category or text column, the latter is renamed to `category (1)`, `text (1)`, and so on, so every column name is unique.
	pub fn to_dataframe(&self) -> DataFrame {
		let mut columns: Vec<Column> = self
			.feature_names
			.iter()
			.zip(self.features.axis_iter(Axis(1)))
			.map(|(name, values)| {
				Column::Number(NumberColumn::new(name.clone(), values.to_vec()))
			})
			.collect();
		let mut taken: FnvHashSet<String> = self.feature_names.iter().cloned().collect();
		let mut labels = self.labels.clone();
		labels.name = unique_column_name(&labels.name, &taken);
		taken.insert(labels.name.clone());
		let mut text = self.text.clone();
		text.name = unique_column_name(&text.name, &taken);
		columns.push(Column::Enum(labels));
		columns.push(Column::Text(text));
		DataFrame::new(columns)
	}

	/// Render the first `n_rows` rows as strings, for previews.
	pub fn preview(&self, n_rows: usize) -> (Vec<String>, Vec<Vec<String>>) {
		let dataframe = self.to_dataframe();
		let header = dataframe
			.columns
			.iter()
			.map(|column| column.name().to_owned())
			.collect();
		let view = dataframe.view();
		let mut row = Vec::with_capacity(view.ncols());
		let rows = (0..usize::min(n_rows, view.nrows()))
			.map(|index| {
				view.read_row(index, &mut row);
				row.iter().map(|value| value.to_string()).collect()
			})
			.collect();
		(header, rows)
	}
}

fn unique_column_name(name: &str, taken: &FnvHashSet<String>) -> String {
	if !taken.contains(name) {
		return name.to_owned();
	}
	(1..)
		.map(|suffix| format!("{} ({})", name, suffix))
		.find(|candidate| !taken.contains(candidate))
		.unwrap_or_else(|| name.to_owned())
}

#[test]
fn test_empty_table() {
	let table = FeatureTable::empty();
	assert!(table.is_empty());
	assert_eq!(table.n_features(), 0);
	let dataframe = table.to_dataframe();
	assert_eq!(dataframe.ncols(), 2);
	assert_eq!(dataframe.nrows(), 0);
}

#[test]
fn test_to_dataframe() {
	use std::num::NonZeroUsize;
	let table = FeatureTable {
		feature_names: vec!["cat".to_owned(), "dog".to_owned()],
		features: arr2(&[[2.0, 1.0], [0.0, 2.0]]),
		labels: EnumColumn::new(
			LABELS_COLUMN_NAME.to_owned(),
			vec!["A".to_owned(), "B".to_owned()],
			vec![NonZeroUsize::new(1), NonZeroUsize::new(2)],
		),
		text: TextColumn::new(
			TEXT_COLUMN_NAME.to_owned(),
			vec!["cat dog cat".to_owned(), "dog dog".to_owned()],
		),
	};
	let dataframe = table.to_dataframe();
	assert_eq!(dataframe.ncols(), 4);
	assert_eq!(
		dataframe.column("dog").unwrap().as_number().unwrap().data,
		vec![1.0, 2.0]
	);
	assert_eq!(table.label(1), Some("B"));
	let (header, rows) = table.preview(1);
	assert_eq!(header, vec!["cat", "dog", "category", "text"]);
	assert_eq!(rows, vec![vec!["2", "1", "A", "cat dog cat"]]);
}

#[test]
fn test_feature_names_do_not_shadow_metadata_columns() {
	use crate::{config::VectorizationConfig, corpus::Document, vectorize::transform};
	let documents = vec![Document::new("text category", "A")];
	let table = transform(&documents, &VectorizationConfig::default(), None).unwrap();
	assert_eq!(table.feature_names, vec!["category", "text"]);
	let dataframe = table.to_dataframe();
	let names: Vec<&str> = dataframe.columns.iter().map(|column| column.name()).collect();
	assert_eq!(names, vec!["category", "text", "category (1)", "text (1)"]);
	assert_eq!(
		dataframe.column("text (1)").unwrap().as_text().unwrap().data,
		vec!["text category".to_owned()]
	);
	assert_eq!(
		dataframe.column("category (1)").unwrap().as_enum().unwrap().option(0),
		Some("A")
	);
	assert_eq!(
		dataframe.column("text").unwrap().as_number().unwrap().data,
		vec![1.0]
	);
	let mut writer = csv::Writer::from_writer(Vec::new());
	dataframe.to_csv(&mut writer).unwrap();
	let csv = String::from_utf8(writer.into_inner().unwrap()).unwrap();
	assert_eq!(
		csv.lines().next(),
		Some("category,text,category (1),text (1)")
	);
}
