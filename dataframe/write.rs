use super::*;
use anyhow::Result;
use std::path::Path;

impl DataFrame {
	pub fn to_path(&self, path: &Path) -> Result<()> {
		self.to_csv(&mut csv::Writer::from_path(path)?)
	}

	/// Write the dataframe as csv with one header row holding the column names. Invalid enum values are written as empty fields.
	pub fn to_csv<W>(&self, writer: &mut csv::Writer<W>) -> Result<()>
	where
		W: std::io::Write,
	{
		writer.write_record(self.columns.iter().map(|column| column.name()))?;
		let view = self.view();
		let mut row = Vec::with_capacity(view.ncols());
		let mut record = csv::StringRecord::new();
		for index in 0..view.nrows() {
			view.read_row(index, &mut row);
			record.clear();
			for value in row.iter() {
				record.push_field(&value.to_string());
			}
			writer.write_record(&record)?;
		}
		writer.flush()?;
		Ok(())
	}
}

#[test]
fn test_write() {
	let dataframe = DataFrame::new(vec![
		Column::Number(NumberColumn::new("cat".to_owned(), vec![2.0, 0.5])),
		Column::Enum(EnumColumn::new(
			"category".to_owned(),
			vec!["A".to_owned(), "B".to_owned()],
			vec![NonZeroUsize::new(1), None],
		)),
		Column::Text(TextColumn::new(
			"text".to_owned(),
			vec!["cat, dog".to_owned(), "dog".to_owned()],
		)),
	]);
	let mut writer = csv::Writer::from_writer(Vec::new());
	dataframe.to_csv(&mut writer).unwrap();
	let csv = String::from_utf8(writer.into_inner().unwrap()).unwrap();
	insta::assert_snapshot!(csv.trim_end(), @r###"
 cat,category,text
 2,A,"cat, dog"
 0.5,,dog
 "###);
}
