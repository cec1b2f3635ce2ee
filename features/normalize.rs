use ndarray::prelude::*;

/**
A `Normalization` rescales each row of a feature matrix so that its norm is one.

| normalization | norm                        |
|---------------|-----------------------------|
| `None`        | rows are left untouched     |
| `L1`          | sum of absolute values      |
| `L2`          | square root of sum of squares |

Rows whose norm is zero are left untouched.
*/
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Normalization {
	#[serde(rename = "none")]
	None,
	#[serde(rename = "l1")]
	L1,
	#[serde(rename = "l2")]
	L2,
}

impl Default for Normalization {
	fn default() -> Self {
		Normalization::None
	}
}

impl Normalization {
	pub fn norm(self, row: ArrayView1<f32>) -> Option<f32> {
		match self {
			Normalization::None => None,
			Normalization::L1 => Some(row.iter().map(|value| value.abs()).sum()),
			Normalization::L2 => Some(row.iter().map(|value| value * value).sum::<f32>().sqrt()),
		}
	}

	pub fn normalize_row(self, mut row: ArrayViewMut1<f32>) {
		if let Some(norm) = self.norm(row.view()) {
			if norm > 0.0 {
				row.mapv_inplace(|value| value / norm);
			}
		}
	}
}

impl std::fmt::Display for Normalization {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let s = match self {
			Normalization::None => "(none)",
			Normalization::L1 => "L1 (sum of elements)",
			Normalization::L2 => "L2 (Euclidean)",
		};
		write!(f, "{}", s)
	}
}

impl std::str::FromStr for Normalization {
	type Err = String;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.to_lowercase().as_str() {
			"none" => Ok(Normalization::None),
			"l1" => Ok(Normalization::L1),
			"l2" => Ok(Normalization::L2),
			_ => Err(format!(
				"unknown normalization \"{}\", expected one of none, l1, l2",
				s
			)),
		}
	}
}

#[test]
fn test_normalize_row() {
	let mut row = arr1(&[3.0, 4.0]);
	Normalization::L2.normalize_row(row.view_mut());
	assert!((row[0] - 0.6).abs() < 1e-6);
	assert!((row[1] - 0.8).abs() < 1e-6);
	let mut row = arr1(&[0.0, 0.0]);
	Normalization::L2.normalize_row(row.view_mut());
	assert_eq!(row, arr1(&[0.0, 0.0]));
	let mut row = arr1(&[1.0, 3.0]);
	Normalization::L1.normalize_row(row.view_mut());
	assert_eq!(row, arr1(&[0.25, 0.75]));
	let mut row = arr1(&[1.0, 3.0]);
	Normalization::None.normalize_row(row.view_mut());
	assert_eq!(row, arr1(&[1.0, 3.0]));
}

#[test]
fn test_parse_normalization() {
	assert_eq!("L2".parse::<Normalization>(), Ok(Normalization::L2));
	assert_eq!("none".parse::<Normalization>(), Ok(Normalization::None));
	assert!("l3".parse::<Normalization>().is_err());
}
