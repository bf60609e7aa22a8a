use std::mem;

use indexmap::IndexMap;

use crate::codec::Precision;

/// Insertion-ordered object storage.
pub type Map = IndexMap<String, Value>;

/// Decoded value; also the canonical input of the encoder.
#[derive(Debug, Clone)]
pub enum Value {
	/// Null token.
	Null,
	/// Boolean token.
	Bool(bool),
	/// Signed 8-bit integer.
	Int8(i8),
	/// Unsigned 8-bit integer.
	UInt8(u8),
	/// Signed 16-bit integer.
	Int16(i16),
	/// Signed 32-bit integer.
	Int32(i32),
	/// Signed 64-bit integer.
	Int64(i64),
	/// Single-precision float.
	Float32(f32),
	/// Double-precision float.
	Float64(f64),
	/// Exact decimal text.
	Precision(Precision),
	/// UTF-8 text.
	Str(String),
	/// Single character.
	Char(char),
	/// Ordered sequence.
	List(Vec<Value>),
	/// Object with text keys in insertion order.
	Map(Map),
}

impl Value {
	/// Narrowest integer variant the decoder yields for `value` after encoding.
	pub fn integer(value: i128) -> Self {
		if let Ok(v) = i8::try_from(value) {
			Self::Int8(v)
		} else if let Ok(v) = u8::try_from(value) {
			Self::UInt8(v)
		} else if let Ok(v) = i16::try_from(value) {
			Self::Int16(v)
		} else if let Ok(v) = i32::try_from(value) {
			Self::Int32(v)
		} else if let Ok(v) = i64::try_from(value) {
			Self::Int64(v)
		} else {
			Self::Precision(Precision::from(value))
		}
	}

	/// Stable lowercase kind label.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool(_) => "bool",
			Self::Int8(_) => "int8",
			Self::UInt8(_) => "uint8",
			Self::Int16(_) => "int16",
			Self::Int32(_) => "int32",
			Self::Int64(_) => "int64",
			Self::Float32(_) => "float32",
			Self::Float64(_) => "float64",
			Self::Precision(_) => "precision",
			Self::Str(_) => "string",
			Self::Char(_) => "char",
			Self::List(_) => "array",
			Self::Map(_) => "object",
		}
	}

	/// Deepest container nesting below this value; scalars are 0.
	pub fn depth(&self) -> usize {
		let mut deepest = 0;
		let mut pending = vec![(self, 0_usize)];

		while let Some((value, level)) = pending.pop() {
			match value {
				Self::List(items) => {
					deepest = deepest.max(level + 1);
					pending.extend(items.iter().map(|item| (item, level + 1)));
				}
				Self::Map(entries) => {
					deepest = deepest.max(level + 1);
					pending.extend(entries.values().map(|item| (item, level + 1)));
				}
				_ => {}
			}
		}
		deepest
	}

	/// Whether this is a list or map.
	pub fn is_container(&self) -> bool {
		matches!(self, Self::List(_) | Self::Map(_))
	}

	/// Widen any fixed-width integer variant to `i64`.
	pub fn as_i64(&self) -> Option<i64> {
		match *self {
			Self::Int8(v) => Some(i64::from(v)),
			Self::UInt8(v) => Some(i64::from(v)),
			Self::Int16(v) => Some(i64::from(v)),
			Self::Int32(v) => Some(i64::from(v)),
			Self::Int64(v) => Some(v),
			_ => None,
		}
	}

	/// Widen either float variant to `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		match *self {
			Self::Float32(v) => Some(f64::from(v)),
			Self::Float64(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow string text.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Str(v) => Some(v),
			_ => None,
		}
	}

	/// Borrow list elements.
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Self::List(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow map entries.
	pub fn as_map(&self) -> Option<&Map> {
		match self {
			Self::Map(entries) => Some(entries),
			_ => None,
		}
	}

	/// Take list elements out of the value.
	pub fn into_list(mut self) -> Option<Vec<Value>> {
		match &mut self {
			Self::List(items) => Some(mem::take(items)),
			_ => None,
		}
	}

	/// Take map entries out of the value.
	pub fn into_map(mut self) -> Option<Map> {
		match &mut self {
			Self::Map(entries) => Some(mem::take(entries)),
			_ => None,
		}
	}

	/// Text a scalar takes when it appears in object-key position.
	///
	/// Containers have no key form and return `None`.
	pub fn key_text(&self) -> Option<String> {
		Some(match self {
			Self::Null => "null".to_owned(),
			Self::Bool(v) => v.to_string(),
			Self::Int8(v) => v.to_string(),
			Self::UInt8(v) => v.to_string(),
			Self::Int16(v) => v.to_string(),
			Self::Int32(v) => v.to_string(),
			Self::Int64(v) => v.to_string(),
			Self::Float32(v) => v.to_string(),
			Self::Float64(v) => v.to_string(),
			Self::Precision(v) => v.as_str().to_owned(),
			Self::Str(v) => v.clone(),
			Self::Char(v) => v.to_string(),
			Self::List(_) | Self::Map(_) => return None,
		})
	}
}

// Maps compare without regard to entry order; nested pairs are walked from a heap worklist.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		let mut pairs = vec![(self, other)];

		while let Some(pair) = pairs.pop() {
			let same = match pair {
				(Self::Null, Self::Null) => true,
				(Self::Bool(a), Self::Bool(b)) => a == b,
				(Self::Int8(a), Self::Int8(b)) => a == b,
				(Self::UInt8(a), Self::UInt8(b)) => a == b,
				(Self::Int16(a), Self::Int16(b)) => a == b,
				(Self::Int32(a), Self::Int32(b)) => a == b,
				(Self::Int64(a), Self::Int64(b)) => a == b,
				(Self::Float32(a), Self::Float32(b)) => a == b,
				(Self::Float64(a), Self::Float64(b)) => a == b,
				(Self::Precision(a), Self::Precision(b)) => a == b,
				(Self::Str(a), Self::Str(b)) => a == b,
				(Self::Char(a), Self::Char(b)) => a == b,
				(Self::List(a), Self::List(b)) => {
					if a.len() != b.len() {
						return false;
					}
					pairs.extend(a.iter().zip(b));
					true
				}
				(Self::Map(a), Self::Map(b)) => {
					if a.len() != b.len() {
						return false;
					}
					for (key, left) in a {
						let Some(right) = b.get(key) else {
							return false;
						};
						pairs.push((left, right));
					}
					true
				}
				_ => false,
			};
			if !same {
				return false;
			}
		}
		true
	}
}

// Nested containers are torn down from a heap worklist; drop depth is independent of nesting depth.
impl Drop for Value {
	fn drop(&mut self) {
		let mut pending = match self {
			Self::List(items) if !items.is_empty() => mem::take(items),
			Self::Map(entries) if !entries.is_empty() => mem::take(entries).into_values().collect(),
			_ => return,
		};

		while let Some(mut value) = pending.pop() {
			match &mut value {
				Self::List(items) => pending.append(items),
				Self::Map(entries) => pending.extend(mem::take(entries).into_values()),
				_ => {}
			}
		}
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i8> for Value {
	fn from(value: i8) -> Self {
		Self::Int8(value)
	}
}

impl From<u8> for Value {
	fn from(value: u8) -> Self {
		Self::UInt8(value)
	}
}

impl From<i16> for Value {
	fn from(value: i16) -> Self {
		Self::Int16(value)
	}
}

impl From<i32> for Value {
	fn from(value: i32) -> Self {
		Self::Int32(value)
	}
}

impl From<i64> for Value {
	fn from(value: i64) -> Self {
		Self::Int64(value)
	}
}

impl From<u64> for Value {
	fn from(value: u64) -> Self {
		Self::integer(i128::from(value))
	}
}

impl From<f32> for Value {
	fn from(value: f32) -> Self {
		Self::Float32(value)
	}
}

impl From<f64> for Value {
	fn from(value: f64) -> Self {
		Self::Float64(value)
	}
}

impl From<char> for Value {
	fn from(value: char) -> Self {
		Self::Char(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::Str(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::Str(value)
	}
}

impl From<Precision> for Value {
	fn from(value: Precision) -> Self {
		Self::Precision(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self {
		Self::List(value)
	}
}

impl From<Map> for Value {
	fn from(value: Map) -> Self {
		Self::Map(value)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl FromIterator<Value> for Value {
	fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
		Self::List(iter.into_iter().collect())
	}
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
	fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
		Self::Map(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
	}
}
