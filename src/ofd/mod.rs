mod array;
mod error;
mod format;
mod scalar;

/// Space-delimited scalar array value type.
pub use array::ScalarArray;
/// Error and result aliases.
pub use error::{OfdError, Result};
/// Numeric formatting capability and its canonical implementation.
pub use format::{CanonicalFormat, NumberFormat};
/// Heterogeneous scalar input union.
pub use scalar::Scalar;
