/// Numeric text formatting and parsing capability used by [`ScalarArray`].
///
/// Passed explicitly into every operation that turns numbers into tokens or
/// tokens into numbers, so array and matrix logic stays testable against a
/// mock implementation.
///
/// [`ScalarArray`]: crate::ofd::ScalarArray
pub trait NumberFormat {
	/// Shortest decimal text for `value`: no trailing zeros, no decimal
	/// point on integral values (`1.0` formats as `"1"`, `0.5` as `"0.5"`).
	fn fmt_minimal(&self, value: f64) -> String;

	/// Parse a token as a floating value, `None` on failure.
	fn parse_float(&self, token: &str) -> Option<f64>;

	/// Parse a token as a base-10 integer, `None` on failure.
	///
	/// The `#`-prefixed hexadecimal form is handled by the array itself and
	/// never reaches this method.
	fn parse_int(&self, token: &str) -> Option<i64>;
}

/// Default [`NumberFormat`] backed by the standard library.
///
/// `f64`'s `Display` already emits the shortest round-tripping decimal with
/// no trailing zeros, which is exactly the canonical minimal form.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalFormat;

impl NumberFormat for CanonicalFormat {
	fn fmt_minimal(&self, value: f64) -> String {
		value.to_string()
	}

	fn parse_float(&self, token: &str) -> Option<f64> {
		token.parse().ok()
	}

	fn parse_int(&self, token: &str) -> Option<i64> {
		token.parse().ok()
	}
}
