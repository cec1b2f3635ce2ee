/*!
This module renders rows of strings as a plain text table, which the cli uses to preview feature tables.
*/

/**
A `Table` renders a header and rows of cells. Cells longer than `max_cell_width` characters are truncated and end with an ellipsis.

```text
| cat | dog | category | text        |
|-----|-----|----------|-------------|
| 2   | 1   | A        | cat dog cat |
| 0   | 2   | B        | dog dog     |
```
*/
pub struct Table<'a> {
	pub padding: usize,
	pub max_cell_width: usize,
	pub header: &'a [String],
	pub rows: &'a [Vec<String>],
}

impl<'a> Table<'a> {
	pub fn new(header: &'a [String], rows: &'a [Vec<String>]) -> Self {
		Self {
			padding: 1,
			max_cell_width: 24,
			header,
			rows,
		}
	}

	fn cell(&self, value: &str) -> String {
		if value.chars().count() <= self.max_cell_width {
			return value.to_owned();
		}
		let mut cell: String = value
			.chars()
			.take(self.max_cell_width.saturating_sub(1))
			.collect();
		cell.push('…');
		cell
	}
}

impl<'a> std::fmt::Display for Table<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let header: Vec<String> = self.header.iter().map(|value| self.cell(value)).collect();
		let rows: Vec<Vec<String>> = self
			.rows
			.iter()
			.map(|row| row.iter().map(|value| self.cell(value)).collect())
			.collect();
		let mut column_widths: Vec<usize> = header.iter().map(|value| value.chars().count()).collect();
		for row in rows.iter() {
			for (column_width, value) in column_widths.iter_mut().zip(row) {
				*column_width = usize::max(*column_width, value.chars().count());
			}
		}
		let row = Row {
			column_widths: &column_widths,
			padding: self.padding,
			values: &header,
		};
		writeln!(f, "{}", row)?;
		let line = Line {
			column_widths: &column_widths,
			padding: self.padding,
		};
		writeln!(f, "{}", line)?;
		for values in rows.iter() {
			let row = Row {
				column_widths: &column_widths,
				padding: self.padding,
				values,
			};
			writeln!(f, "{}", row)?;
		}
		Ok(())
	}
}

struct Line<'a> {
	column_widths: &'a [usize],
	padding: usize,
}

impl<'a> std::fmt::Display for Line<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "|")?;
		for column_width in self.column_widths.iter() {
			write!(f, "{}|", "-".repeat(column_width + 2 * self.padding))?;
		}
		Ok(())
	}
}

struct Row<'a> {
	column_widths: &'a [usize],
	padding: usize,
	values: &'a [String],
}

impl<'a> std::fmt::Display for Row<'a> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "|")?;
		for (column_width, value) in self.column_widths.iter().zip(self.values) {
			let fill = column_width + self.padding - value.chars().count();
			write!(
				f,
				"{}{}{}|",
				" ".repeat(self.padding),
				value,
				" ".repeat(fill)
			)?;
		}
		Ok(())
	}
}

#[test]
fn test_table() {
	let header = vec!["cat".to_owned(), "category".to_owned(), "text".to_owned()];
	let rows = vec![
		vec!["2".to_owned(), "A".to_owned(), "cat dog cat".to_owned()],
		vec!["0".to_owned(), "B".to_owned(), "dog dog".to_owned()],
	];
	let table = Table::new(&header, &rows);
	insta::assert_snapshot!(table.to_string().trim_end(), @r###"
 | cat | category | text        |
 |-----|----------|-------------|
 | 2   | A        | cat dog cat |
 | 0   | B        | dog dog     |
 "###);
}

#[test]
fn test_table_truncates_long_cells() {
	let header = vec!["text".to_owned()];
	let rows = vec![vec!["abcdefgh".to_owned()]];
	let mut table = Table::new(&header, &rows);
	table.max_cell_width = 5;
	assert_eq!(table.to_string().lines().nth(2), Some("| abcd… |"));
}
