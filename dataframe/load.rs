use super::*;
use anyhow::{anyhow, Result};
use std::{collections::BTreeMap, path::Path};

/// These options control which columns are loaded from a csv and with which types. Columns without a type in `column_types` are loaded as text. If `columns` is set, only the named columns are loaded, in that order.
#[derive(Clone, Debug, Default)]
pub struct FromCsvOptions {
	pub columns: Option<Vec<String>>,
	pub column_types: BTreeMap<String, ColumnType>,
}

impl DataFrame {
	pub fn from_path(path: &Path, options: FromCsvOptions) -> Result<Self> {
		Self::from_csv(&mut csv::Reader::from_path(path)?, options)
	}

	pub fn from_csv<R>(reader: &mut csv::Reader<R>, options: FromCsvOptions) -> Result<Self>
	where
		R: std::io::Read,
	{
		let header: Vec<String> = reader
			.headers()?
			.into_iter()
			.map(|column_name| column_name.to_owned())
			.collect();
		let FromCsvOptions {
			columns,
			column_types,
		} = options;
		// Map each requested column to its position in the csv records.
		let column_names = columns.unwrap_or_else(|| header.clone());
		let record_indexes = column_names
			.iter()
			.map(|column_name| {
				header
					.iter()
					.position(|header_name| header_name == column_name)
					.ok_or_else(|| anyhow!("column \"{}\" not found in csv header", column_name))
			})
			.collect::<Result<Vec<_>>>()?;
		let column_types = column_names
			.iter()
			.map(|column_name| {
				column_types
					.get(column_name)
					.cloned()
					.unwrap_or(ColumnType::Text)
			})
			.collect();
		let mut dataframe = Self::with_types(column_names, column_types);
		// Read each csv record and insert the values into the columns of the dataframe.
		let mut record = csv::ByteRecord::new();
		while reader.read_byte_record(&mut record)? {
			for (column, record_index) in dataframe.columns.iter_mut().zip(record_indexes.iter()) {
				let value = record.get(*record_index).unwrap_or(&[]);
				match column {
					Column::Number(column) => {
						let value = match lexical::parse::<f32, &[u8]>(value) {
							Ok(value) if value.is_finite() => value,
							_ => f32::NAN,
						};
						column.data.push(value);
					}
					Column::Enum(column) => {
						let value = std::str::from_utf8(value).ok().and_then(|value| {
							column
								.options
								.iter()
								.position(|option| option == value)
								.and_then(|position| NonZeroUsize::new(position + 1))
						});
						column.data.push(value);
					}
					Column::Text(column) => column.data.push(std::str::from_utf8(value)?.to_owned()),
				}
			}
		}
		Ok(dataframe)
	}
}

#[test]
fn test_load() {
	let csv = r#"number,text,enum,ignored
1,cat dog cat,hello,x
2,dog dog,world,y
"#;
	let mut column_types = BTreeMap::new();
	column_types.insert("number".to_owned(), ColumnType::Number);
	column_types.insert(
		"enum".to_owned(),
		ColumnType::Enum {
			options: vec!["hello".to_owned(), "world".to_owned()],
		},
	);
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions {
			columns: Some(vec![
				"number".to_owned(),
				"text".to_owned(),
				"enum".to_owned(),
			]),
			column_types,
		},
	)
	.unwrap();
	insta::assert_debug_snapshot!(df, @r###"
 DataFrame {
     columns: [
         Number(
             NumberColumn {
                 name: "number",
                 data: [
                     1.0,
                     2.0,
                 ],
             },
         ),
         Text(
             TextColumn {
                 name: "text",
                 data: [
                     "cat dog cat",
                     "dog dog",
                 ],
             },
         ),
         Enum(
             EnumColumn {
                 name: "enum",
                 options: [
                     "hello",
                     "world",
                 ],
                 data: [
                     Some(
                         1,
                     ),
                     Some(
                         2,
                     ),
                 ],
             },
         ),
     ],
 }
 "###);
}

#[test]
fn test_load_missing_column() {
	let csv = "text\nhello\n";
	let result = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions {
			columns: Some(vec!["category".to_owned()]),
			..Default::default()
		},
	);
	assert!(result.is_err());
}

#[test]
fn test_load_all_columns_with_types() {
	let csv = "count,text\n3,cat dog cat\n";
	let mut column_types = BTreeMap::new();
	column_types.insert("count".to_owned(), ColumnType::Number);
	let df = DataFrame::from_csv(
		&mut csv::Reader::from_reader(std::io::Cursor::new(csv)),
		FromCsvOptions {
			columns: None,
			column_types,
		},
	)
	.unwrap();
	assert_eq!(df.ncols(), 2);
	assert_eq!(df.column("count").unwrap().as_number().unwrap().data, vec![3.0]);
	assert_eq!(
		df.column("text").unwrap().as_text().unwrap().data,
		vec!["cat dog cat".to_owned()]
	);
}
