use std::fmt;

use crate::codec::{Result, UbjError};

/// Exact decimal number kept as text.
///
/// Accepted syntax is an optional sign, at least one digit, an optional
/// fraction, and an optional exponent (`-12`, `300.5`, `1.5e-7`). Values
/// outside the signed 64-bit range, and decimals that must not be rounded
/// through a float, travel on the wire as precision tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Precision(Box<str>);

impl Precision {
	/// Validate decimal text.
	pub fn parse(text: &str) -> Result<Self> {
		if !is_decimal(text) {
			return Err(UbjError::InvalidPrecision { text: text.to_owned() });
		}
		Ok(Self(text.into()))
	}

	/// Borrow the decimal text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Parse the text as `i128` when it is an integer in range.
	pub fn to_i128(&self) -> Option<i128> {
		self.0.parse().ok()
	}
}

impl fmt::Display for Precision {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<i128> for Precision {
	fn from(value: i128) -> Self {
		Self(value.to_string().into_boxed_str())
	}
}

impl From<u128> for Precision {
	fn from(value: u128) -> Self {
		Self(value.to_string().into_boxed_str())
	}
}

impl From<u64> for Precision {
	fn from(value: u64) -> Self {
		Self(value.to_string().into_boxed_str())
	}
}

impl From<i64> for Precision {
	fn from(value: i64) -> Self {
		Self(value.to_string().into_boxed_str())
	}
}

impl std::str::FromStr for Precision {
	type Err = UbjError;

	fn from_str(text: &str) -> Result<Self> {
		Self::parse(text)
	}
}

fn is_decimal(text: &str) -> bool {
	let bytes = text.as_bytes();
	let mut idx = 0;

	if matches!(bytes.first(), Some(b'-' | b'+')) {
		idx += 1;
	}

	let int_digits = count_digits(&bytes[idx..]);
	idx += int_digits;

	let mut frac_digits = 0;
	if bytes.get(idx) == Some(&b'.') {
		idx += 1;
		frac_digits = count_digits(&bytes[idx..]);
		idx += frac_digits;
	}

	if int_digits + frac_digits == 0 {
		return false;
	}

	if matches!(bytes.get(idx), Some(b'e' | b'E')) {
		idx += 1;
		if matches!(bytes.get(idx), Some(b'-' | b'+')) {
			idx += 1;
		}
		let exp_digits = count_digits(&bytes[idx..]);
		if exp_digits == 0 {
			return false;
		}
		idx += exp_digits;
	}

	idx == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
	bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}
