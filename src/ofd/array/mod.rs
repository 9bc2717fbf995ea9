use std::fmt;
use std::str::FromStr;

use crate::ofd::{CanonicalFormat, NumberFormat, OfdError, Result, Scalar};

/// Space-delimited scalar array, the `ST_Array` basic type.
///
/// Text form is a run of whitespace-separated tokens, for example
/// `1 2.0 5.0`. Tokens never nest: an element is never itself an array or a
/// location reference. An array of exactly six tokens `(a b c d e f)`
/// doubles as a 2D affine transform with implicit bottom row `0 0 1`.
///
/// Equality is structural over the token text, not numeric: `"1"` and
/// `"1.0"` are different tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScalarArray {
	tokens: Vec<String>,
}

impl ScalarArray {
	/// Parse attribute or element text into an array.
	///
	/// Returns `None` for empty, all-whitespace, or literal `"null"` input.
	/// Anything else splits on whitespace runs and always succeeds; no token
	/// is dropped after the split. The `"null"` check is exact, before any
	/// trimming: padded text like `" null "` is an ordinary one-token array.
	pub fn parse(text: &str) -> Option<Self> {
		if text == "null" {
			return None;
		}
		let trimmed = text.trim();
		if trimmed.is_empty() {
			return None;
		}
		Some(Self {
			tokens: trimmed.split_whitespace().map(str::to_owned).collect(),
		})
	}

	/// Build from heterogeneous scalar inputs using the canonical formatter.
	pub fn from_scalars<I>(values: I) -> Self
	where
		I: IntoIterator<Item = Scalar>,
	{
		Self::from_scalars_with(&CanonicalFormat, values)
	}

	/// Build from heterogeneous scalar inputs.
	///
	/// Per element, in order: absent values are skipped, blank text is
	/// skipped, floats are tokenized through `fmt_minimal`, integers use
	/// plain decimal text, and any other text is kept verbatim. Dropped
	/// elements vanish entirely rather than becoming empty tokens.
	pub fn from_scalars_with<F, I>(fmt: &F, values: I) -> Self
	where
		F: NumberFormat + ?Sized,
		I: IntoIterator<Item = Scalar>,
	{
		let mut tokens = Vec::new();
		for value in values {
			match value {
				Scalar::Absent => {}
				Scalar::Text(text) => {
					if !text.trim().is_empty() {
						tokens.push(text);
					}
				}
				Scalar::Float(number) => tokens.push(fmt.fmt_minimal(number)),
				Scalar::Int(number) => tokens.push(number.to_string()),
			}
		}
		Self { tokens }
	}

	/// Build a six-token affine transform array `(a b c d e f)`.
	///
	/// Tokens use the full-precision default float text (`1.0` stays
	/// `"1.0"`), not the minimal-decimal formatter that `multiply` uses.
	/// The asymmetry is inherited from the format's reference
	/// implementation and kept so serialized output does not change.
	pub fn from_affine(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
		Self {
			tokens: vec![
				format!("{a:?}"),
				format!("{b:?}"),
				format!("{c:?}"),
				format!("{d:?}"),
				format!("{e:?}"),
				format!("{f:?}"),
			],
		}
	}

	/// The identity affine transform, tokens `1 0 0 1 0 0`.
	pub fn identity_affine() -> Self {
		Self {
			tokens: ["1", "0", "0", "1", "0", "0"].map(str::to_owned).into(),
		}
	}

	/// Token count.
	pub fn len(&self) -> usize {
		self.tokens.len()
	}

	/// Whether the array holds no tokens.
	pub fn is_empty(&self) -> bool {
		self.tokens.is_empty()
	}

	/// Raw token sequence.
	pub fn tokens(&self) -> &[String] {
		&self.tokens
	}

	/// Serialized text form: tokens joined by single spaces.
	pub fn to_text(&self) -> String {
		self.tokens.join(" ")
	}

	/// Append a raw token without validation and return `self` for chaining.
	pub fn append(&mut self, token: impl Into<String>) -> &mut Self {
		self.tokens.push(token.into());
		self
	}

	/// Replace the whole token sequence and return `self` for chaining.
	pub fn set_tokens(&mut self, tokens: Vec<String>) -> &mut Self {
		self.tokens = tokens;
		self
	}

	/// Strict float read at `index` using the canonical formatter.
	pub fn get_float(&self, index: usize) -> Result<f64> {
		self.get_float_with(&CanonicalFormat, index)
	}

	/// Strict float read at `index`.
	///
	/// Fails with [`OfdError::IndexOutOfBounds`] past the end and
	/// [`OfdError::FloatParse`] on a non-numeric token.
	pub fn get_float_with<F: NumberFormat + ?Sized>(&self, fmt: &F, index: usize) -> Result<f64> {
		let token = self.token_at(index)?;
		fmt.parse_float(token).ok_or_else(|| OfdError::FloatParse {
			index,
			token: token.to_owned(),
		})
	}

	/// Strict integer read at `index` using the canonical formatter.
	pub fn get_int(&self, index: usize) -> Result<i64> {
		self.get_int_with(&CanonicalFormat, index)
	}

	/// Strict integer read at `index`.
	///
	/// A `#` prefix selects base-16 on the remainder; anything else parses
	/// as base-10. Same strictness as [`ScalarArray::get_float_with`].
	pub fn get_int_with<F: NumberFormat + ?Sized>(&self, fmt: &F, index: usize) -> Result<i64> {
		let token = self.token_at(index)?;
		let parsed = match token.strip_prefix('#') {
			Some(hex) => i64::from_str_radix(hex, 16).ok(),
			None => fmt.parse_int(token),
		};
		parsed.ok_or_else(|| OfdError::IntParse {
			index,
			token: token.to_owned(),
		})
	}

	/// Lenient read of exactly `n` floats using the canonical formatter.
	pub fn expect_floats(&self, n: usize) -> Vec<f64> {
		self.expect_floats_with(&CanonicalFormat, n)
	}

	/// Lenient read of exactly `n` floats.
	///
	/// Positions past the end or holding unparseable tokens become `0.0`.
	/// Never fails; real-world documents are routinely short or malformed.
	pub fn expect_floats_with<F: NumberFormat + ?Sized>(&self, fmt: &F, n: usize) -> Vec<f64> {
		(0..n).map(|i| self.get_float_with(fmt, i).unwrap_or(0.0)).collect()
	}

	/// Lenient read of exactly `n` integers using the canonical formatter.
	pub fn expect_ints(&self, n: usize) -> Vec<i64> {
		self.expect_ints_with(&CanonicalFormat, n)
	}

	/// Lenient read of exactly `n` integers, honoring the `#`-hex form.
	///
	/// Positions past the end or holding unparseable tokens become `0`.
	pub fn expect_ints_with<F: NumberFormat + ?Sized>(&self, fmt: &F, n: usize) -> Vec<i64> {
		(0..n).map(|i| self.get_int_with(fmt, i).unwrap_or(0)).collect()
	}

	/// Lenient read of exactly `n` raw tokens.
	///
	/// In-range positions are the token text verbatim, no numeric
	/// interpretation; positions past the end are empty strings.
	pub fn expect_strings(&self, n: usize) -> Vec<String> {
		(0..n).map(|i| self.tokens.get(i).cloned().unwrap_or_default()).collect()
	}

	/// Interpret the array as a 3×3 homogeneous matrix using the canonical
	/// formatter's float parsing.
	pub fn to_matrix(&self) -> Result<[[f64; 3]; 3]> {
		self.to_matrix_with(&CanonicalFormat)
	}

	/// Interpret the six tokens `(a b c d e f)` as
	/// `[[a, b, 0], [c, d, 0], [e, f, 1]]`.
	///
	/// Fails with [`OfdError::MatrixSize`] unless the array has exactly six
	/// tokens; token parse failures propagate as [`OfdError::FloatParse`].
	pub fn to_matrix_with<F: NumberFormat + ?Sized>(&self, fmt: &F) -> Result<[[f64; 3]; 3]> {
		if self.len() != MATRIX_TOKENS {
			return Err(OfdError::MatrixSize { len: self.len() });
		}
		let mut m = [[0.0_f64; 3]; 3];
		for (i, row) in m.iter_mut().enumerate() {
			row[0] = self.get_float_with(fmt, i * 2)?;
			row[1] = self.get_float_with(fmt, i * 2 + 1)?;
		}
		m[2][2] = 1.0;
		Ok(m)
	}

	/// Compose two affine transform arrays using the canonical formatter.
	pub fn multiply(&self, other: &Self) -> Result<Self> {
		self.multiply_with(&CanonicalFormat, other)
	}

	/// Compose two affine transform arrays as `self × other`.
	///
	/// Both operands must hold exactly six tokens, else
	/// [`OfdError::MatrixSize`]. The full 3×3 product is computed with rows
	/// of `self` against columns of `other`; operand order is significant.
	/// Only the 2×2 block and the translation row survive into the result,
	/// each re-tokenized through `fmt_minimal`; the homogeneous bottom row
	/// is implicit and never stored.
	pub fn multiply_with<F: NumberFormat + ?Sized>(&self, fmt: &F, other: &Self) -> Result<Self> {
		let a = self.to_matrix_with(fmt)?;
		let b = other.to_matrix_with(fmt)?;

		let mut res = [[0.0_f64; 3]; 3];
		for i in 0..3 {
			for k in 0..3 {
				for j in 0..3 {
					res[i][j] += a[i][k] * b[k][j];
				}
			}
		}

		let mut tokens = Vec::with_capacity(MATRIX_TOKENS);
		for row in &res {
			tokens.push(fmt.fmt_minimal(row[0]));
			tokens.push(fmt.fmt_minimal(row[1]));
		}
		Ok(Self { tokens })
	}

	fn token_at(&self, index: usize) -> Result<&str> {
		self.tokens.get(index).map(String::as_str).ok_or(OfdError::IndexOutOfBounds {
			index,
			len: self.tokens.len(),
		})
	}
}

/// Token count of an affine transform array.
const MATRIX_TOKENS: usize = 6;

impl fmt::Display for ScalarArray {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, token) in self.tokens.iter().enumerate() {
			if i > 0 {
				f.write_str(" ")?;
			}
			f.write_str(token)?;
		}
		Ok(())
	}
}

impl FromStr for ScalarArray {
	type Err = OfdError;

	/// Same splitting as [`ScalarArray::parse`], but absent input is an
	/// [`OfdError::AbsentInput`] error instead of `None`.
	fn from_str(text: &str) -> Result<Self> {
		Self::parse(text).ok_or(OfdError::AbsentInput)
	}
}
