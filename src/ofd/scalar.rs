/// One heterogeneous input element for array construction.
///
/// Closed set of scalar kinds the format allows inside an array: arrays and
/// location references never nest, so no such variants exist here.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	/// Floating value, tokenized through the minimal-decimal formatter.
	Float(f64),
	/// Integer value, tokenized as plain decimal text.
	Int(i64),
	/// Textual value, kept verbatim unless blank.
	Text(String),
	/// Missing element, dropped during construction.
	Absent,
}

impl From<f64> for Scalar {
	fn from(value: f64) -> Self {
		Scalar::Float(value)
	}
}

impl From<i64> for Scalar {
	fn from(value: i64) -> Self {
		Scalar::Int(value)
	}
}

impl From<i32> for Scalar {
	fn from(value: i32) -> Self {
		Scalar::Int(i64::from(value))
	}
}

impl From<&str> for Scalar {
	fn from(value: &str) -> Self {
		Scalar::Text(value.to_owned())
	}
}

impl From<String> for Scalar {
	fn from(value: String) -> Self {
		Scalar::Text(value)
	}
}

impl<T: Into<Scalar>> From<Option<T>> for Scalar {
	fn from(value: Option<T>) -> Self {
		match value {
			Some(inner) => inner.into(),
			None => Scalar::Absent,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Scalar;

	#[test]
	fn option_none_maps_to_absent() {
		assert_eq!(Scalar::from(None::<f64>), Scalar::Absent);
		assert_eq!(Scalar::from(Some(0.5)), Scalar::Float(0.5));
	}

	#[test]
	fn narrower_int_widens() {
		assert_eq!(Scalar::from(7_i32), Scalar::Int(7));
	}
}
