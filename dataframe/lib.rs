/*!
This crate provides a basic implementation of dataframes, which are two dimensional arrays of data where each column can have a different data type, like a spreadsheet. It implements only what wordbag needs: number columns for features, enum columns for category labels, and text columns for document text.
*/

#![allow(clippy::tabs_in_doc_comments)]

use std::num::NonZeroUsize;

mod load;
mod write;

pub use self::load::*;

#[derive(Debug, Clone, PartialEq)]
pub struct DataFrame {
	pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataFrameView<'a> {
	pub columns: Vec<ColumnView<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Column {
	Number(NumberColumn),
	Enum(EnumColumn),
	Text(TextColumn),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberColumn {
	pub name: String,
	pub data: Vec<f32>,
}

/// The values of an `EnumColumn` are one based indexes into `options`. `None` marks a value that is not one of the options.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumColumn {
	pub name: String,
	pub options: Vec<String>,
	pub data: Vec<Option<NonZeroUsize>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextColumn {
	pub name: String,
	pub data: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnView<'a> {
	Number(NumberColumnView<'a>),
	Enum(EnumColumnView<'a>),
	Text(TextColumnView<'a>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumberColumnView<'a> {
	pub name: &'a str,
	pub data: &'a [f32],
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumColumnView<'a> {
	pub name: &'a str,
	pub options: &'a [String],
	pub data: &'a [Option<NonZeroUsize>],
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextColumnView<'a> {
	pub name: &'a str,
	pub data: &'a [String],
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnType {
	Number,
	Enum { options: Vec<String> },
	Text,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value<'a> {
	Number(f32),
	Enum(Option<&'a str>),
	Text(&'a str),
}

impl DataFrame {
	pub fn new(columns: Vec<Column>) -> Self {
		Self { columns }
	}

	pub fn with_types(column_names: Vec<String>, column_types: Vec<ColumnType>) -> Self {
		let columns = column_names
			.into_iter()
			.zip(column_types.into_iter())
			.map(|(column_name, column_type)| match column_type {
				ColumnType::Number => Column::Number(NumberColumn::new(column_name, Vec::new())),
				ColumnType::Enum { options } => {
					Column::Enum(EnumColumn::new(column_name, options, Vec::new()))
				}
				ColumnType::Text => Column::Text(TextColumn::new(column_name, Vec::new())),
			})
			.collect();
		Self { columns }
	}

	pub fn ncols(&self) -> usize {
		self.columns.len()
	}

	pub fn nrows(&self) -> usize {
		self.columns.first().map(|column| column.len()).unwrap_or(0)
	}

	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().find(|column| column.name() == name)
	}

	pub fn view(&self) -> DataFrameView {
		let columns = self.columns.iter().map(|column| column.view()).collect();
		DataFrameView { columns }
	}
}

impl Column {
	pub fn len(&self) -> usize {
		match self {
			Self::Number(s) => s.data.len(),
			Self::Enum(s) => s.data.len(),
			Self::Text(s) => s.data.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Number(s) => s.name.as_str(),
			Self::Enum(s) => s.name.as_str(),
			Self::Text(s) => s.name.as_str(),
		}
	}

	pub fn as_number(&self) -> Option<&NumberColumn> {
		match self {
			Self::Number(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_enum(&self) -> Option<&EnumColumn> {
		match self {
			Self::Enum(s) => Some(s),
			_ => None,
		}
	}

	pub fn as_text(&self) -> Option<&TextColumn> {
		match self {
			Self::Text(s) => Some(s),
			_ => None,
		}
	}

	pub fn view(&self) -> ColumnView {
		match self {
			Self::Number(column) => ColumnView::Number(column.view()),
			Self::Enum(column) => ColumnView::Enum(column.view()),
			Self::Text(column) => ColumnView::Text(column.view()),
		}
	}
}

impl NumberColumn {
	pub fn new(name: String, data: Vec<f32>) -> Self {
		Self { name, data }
	}

	pub fn view(&self) -> NumberColumnView {
		NumberColumnView {
			name: &self.name,
			data: &self.data,
		}
	}
}

impl EnumColumn {
	pub fn new(name: String, options: Vec<String>, data: Vec<Option<NonZeroUsize>>) -> Self {
		Self {
			name,
			options,
			data,
		}
	}

	/// Retrieve the option for the value at `index`.
	pub fn option(&self, index: usize) -> Option<&str> {
		self.data
			.get(index)
			.copied()
			.flatten()
			.map(|value| self.options[value.get() - 1].as_str())
	}

	pub fn view(&self) -> EnumColumnView {
		EnumColumnView {
			name: &self.name,
			data: &self.data,
			options: &self.options,
		}
	}
}

impl TextColumn {
	pub fn new(name: String, data: Vec<String>) -> Self {
		Self { name, data }
	}

	pub fn view(&self) -> TextColumnView {
		TextColumnView {
			name: &self.name,
			data: &self.data,
		}
	}
}

impl<'a> DataFrameView<'a> {
	pub fn ncols(&self) -> usize {
		self.columns.len()
	}

	pub fn nrows(&self) -> usize {
		self.columns.first().map(|column| column.len()).unwrap_or(0)
	}

	pub fn read_row(&self, index: usize, row: &mut Vec<Value<'a>>) {
		row.clear();
		row.extend(self.columns.iter().map(|column| match column {
			ColumnView::Number(column) => Value::Number(column.data[index]),
			ColumnView::Enum(column) => Value::Enum(
				column.data[index].map(|value| column.options[value.get() - 1].as_str()),
			),
			ColumnView::Text(column) => Value::Text(&column.data[index]),
		}));
	}
}

impl<'a> ColumnView<'a> {
	pub fn len(&self) -> usize {
		match self {
			Self::Number(s) => s.data.len(),
			Self::Enum(s) => s.data.len(),
			Self::Text(s) => s.data.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn name(&self) -> &str {
		match self {
			Self::Number(s) => s.name,
			Self::Enum(s) => s.name,
			Self::Text(s) => s.name,
		}
	}
}

impl<'a> std::fmt::Display for Value<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Number(value) => write!(f, "{}", value),
			Value::Enum(Some(value)) => write!(f, "{}", value),
			Value::Enum(None) => Ok(()),
			Value::Text(value) => write!(f, "{}", value),
		}
	}
}

#[test]
fn test_read_row() {
	let dataframe = DataFrame::new(vec![
		Column::Number(NumberColumn::new("cat".to_owned(), vec![2.0, 0.0])),
		Column::Enum(EnumColumn::new(
			"category".to_owned(),
			vec!["A".to_owned(), "B".to_owned()],
			vec![NonZeroUsize::new(1), NonZeroUsize::new(2)],
		)),
		Column::Text(TextColumn::new(
			"text".to_owned(),
			vec!["cat dog cat".to_owned(), "dog dog".to_owned()],
		)),
	]);
	assert_eq!(dataframe.ncols(), 3);
	assert_eq!(dataframe.nrows(), 2);
	let view = dataframe.view();
	let mut row = Vec::new();
	view.read_row(1, &mut row);
	assert_eq!(
		row,
		vec![Value::Number(0.0), Value::Enum(Some("B")), Value::Text("dog dog")]
	);
	let category = dataframe.column("category").unwrap().as_enum().unwrap();
	assert_eq!(category.option(0), Some("A"));
}

#[test]
fn test_empty_dataframe() {
	let dataframe = DataFrame::new(Vec::new());
	assert_eq!(dataframe.nrows(), 0);
	assert_eq!(dataframe.ncols(), 0);
}
