use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, OfdError>;

/// Errors produced while reading scalar array tokens.
#[derive(Debug, Error)]
pub enum OfdError {
	/// Input text for a whole array was absent (empty, all-whitespace, or the literal `null`).
	#[error("absent scalar array text")]
	AbsentInput,
	/// Strict indexed access past the end of the token sequence.
	#[error("index {index} out of bounds for array of {len} tokens")]
	IndexOutOfBounds {
		/// Requested zero-based index.
		index: usize,
		/// Token count of the array.
		len: usize,
	},
	/// Token could not be parsed as a floating value.
	#[error("token {token:?} at index {index} is not a float")]
	FloatParse {
		/// Index of the offending token.
		index: usize,
		/// Offending token text.
		token: String,
	},
	/// Token could not be parsed as an integer value.
	#[error("token {token:?} at index {index} is not an integer")]
	IntParse {
		/// Index of the offending token.
		index: usize,
		/// Offending token text.
		token: String,
	},
	/// Matrix operation attempted on an array whose length is not 6.
	#[error("matrix view requires exactly 6 tokens, found {len}")]
	MatrixSize {
		/// Actual token count of the array.
		len: usize,
	},
}
