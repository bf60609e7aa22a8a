use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::io::Write;

use indexmap::IndexMap;
use tracing::debug;

use crate::codec::{Marker, Precision, Result, Value};

/// Value that knows how to write itself as UBJSON tokens.
///
/// Integers of every width go through the same narrowest-marker
/// selection, so a `u16` key and an `i64` key holding the same number
/// produce identical bytes.
pub trait Encode {
	/// Append this value's tokens to `encoder`.
	fn encode(&self, encoder: &mut Encoder);
}

/// Append-only UBJSON writer.
#[derive(Debug, Default, Clone)]
pub struct Encoder {
	buf: Vec<u8>,
}

enum Step<'a> {
	Value(&'a Value),
	Key(&'a str),
	Close(Marker),
}

impl Encoder {
	/// Create an empty encoder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Borrow the bytes written so far.
	pub fn as_bytes(&self) -> &[u8] {
		&self.buf
	}

	/// Return the bytes written so far.
	pub fn into_bytes(self) -> Vec<u8> {
		self.buf
	}

	fn write_marker(&mut self, marker: Marker) {
		self.buf.push(marker.as_byte());
	}

	/// Write a no-op token.
	pub fn write_noop(&mut self) {
		self.write_marker(Marker::Noop);
	}

	/// Write a null token.
	pub fn write_null(&mut self) {
		self.write_marker(Marker::Null);
	}

	/// Write a boolean token.
	pub fn write_bool(&mut self, value: bool) {
		self.write_marker(if value { Marker::True } else { Marker::False });
	}

	/// Write an integer using the narrowest marker that holds it.
	///
	/// Order: int8, uint8, int16, int32, int64, then precision text for
	/// anything outside the signed 64-bit range.
	pub fn write_int(&mut self, value: i128) {
		if let Ok(v) = i8::try_from(value) {
			self.write_marker(Marker::Int8);
			self.buf.extend_from_slice(&v.to_be_bytes());
		} else if let Ok(v) = u8::try_from(value) {
			self.write_marker(Marker::UInt8);
			self.buf.push(v);
		} else if let Ok(v) = i16::try_from(value) {
			self.write_marker(Marker::Int16);
			self.buf.extend_from_slice(&v.to_be_bytes());
		} else if let Ok(v) = i32::try_from(value) {
			self.write_marker(Marker::Int32);
			self.buf.extend_from_slice(&v.to_be_bytes());
		} else if let Ok(v) = i64::try_from(value) {
			self.write_marker(Marker::Int64);
			self.buf.extend_from_slice(&v.to_be_bytes());
		} else {
			self.write_framed(Marker::Precision, value.to_string().as_bytes());
		}
	}

	/// Write a single-precision float; never narrowed or converted to an integer.
	pub fn write_f32(&mut self, value: f32) {
		self.write_marker(Marker::Float32);
		self.buf.extend_from_slice(&value.to_be_bytes());
	}

	/// Write a double-precision float; never narrowed or converted to an integer.
	pub fn write_f64(&mut self, value: f64) {
		self.write_marker(Marker::Float64);
		self.buf.extend_from_slice(&value.to_be_bytes());
	}

	/// Write a character.
	///
	/// Code points up to U+00FF use the char marker. The format has no wide
	/// char, so U+0100..U+FFFF go out as an int16 carrying the 16-bit code
	/// unit and anything above as a width-selected integer.
	pub fn write_char(&mut self, value: char) {
		let code = u32::from(value);
		if let Ok(byte) = u8::try_from(code) {
			self.write_marker(Marker::Char);
			self.buf.push(byte);
		} else if let Ok(unit) = u16::try_from(code) {
			self.write_marker(Marker::Int16);
			self.buf.extend_from_slice(&unit.to_be_bytes());
		} else {
			self.write_int(i128::from(code));
		}
	}

	/// Write length-prefixed UTF-8 text.
	pub fn write_str(&mut self, value: &str) {
		self.write_framed(Marker::String, value.as_bytes());
	}

	/// Write length-prefixed decimal text.
	pub fn write_precision(&mut self, value: &Precision) {
		self.write_framed(Marker::Precision, value.as_str().as_bytes());
	}

	fn write_framed(&mut self, marker: Marker, payload: &[u8]) {
		self.write_marker(marker);
		self.write_int(payload.len() as i128);
		self.buf.extend_from_slice(payload);
	}

	/// Open an array; close it with [`Encoder::end_array`].
	pub fn begin_array(&mut self) {
		self.write_marker(Marker::ArrayStart);
	}

	/// Close the innermost array.
	pub fn end_array(&mut self) {
		self.write_marker(Marker::ArrayEnd);
	}

	/// Open an object; write alternating keys and values, then [`Encoder::end_object`].
	pub fn begin_object(&mut self) {
		self.write_marker(Marker::ObjectStart);
	}

	/// Close the innermost object.
	pub fn end_object(&mut self) {
		self.write_marker(Marker::ObjectEnd);
	}

	/// Write an array from any sequence of encodable items.
	pub fn write_seq<'a, T, I>(&mut self, items: I)
	where
		T: Encode + ?Sized + 'a,
		I: IntoIterator<Item = &'a T>,
	{
		self.begin_array();
		for item in items {
			item.encode(self);
		}
		self.end_array();
	}

	/// Write an object from key/value pairs; keys keep their own encoding.
	pub fn write_entries<'a, K, V, I>(&mut self, entries: I)
	where
		K: Encode + ?Sized + 'a,
		V: Encode + ?Sized + 'a,
		I: IntoIterator<Item = (&'a K, &'a V)>,
	{
		self.begin_object();
		for (key, value) in entries {
			key.encode(self);
			value.encode(self);
		}
		self.end_object();
	}

	/// Write a value tree.
	///
	/// Containers are expanded on an explicit work stack, so arbitrarily
	/// deep trees encode in constant call-stack depth.
	pub fn write_value(&mut self, value: &Value) {
		let mut steps = vec![Step::Value(value)];

		while let Some(step) = steps.pop() {
			let value = match step {
				Step::Value(value) => value,
				Step::Key(key) => {
					self.write_str(key);
					continue;
				}
				Step::Close(marker) => {
					self.write_marker(marker);
					continue;
				}
			};

			match value {
				Value::Null => self.write_null(),
				Value::Bool(v) => self.write_bool(*v),
				Value::Int8(v) => self.write_int(i128::from(*v)),
				Value::UInt8(v) => self.write_int(i128::from(*v)),
				Value::Int16(v) => self.write_int(i128::from(*v)),
				Value::Int32(v) => self.write_int(i128::from(*v)),
				Value::Int64(v) => self.write_int(i128::from(*v)),
				Value::Float32(v) => self.write_f32(*v),
				Value::Float64(v) => self.write_f64(*v),
				Value::Precision(v) => self.write_precision(v),
				Value::Str(v) => self.write_str(v),
				Value::Char(v) => self.write_char(*v),
				Value::List(items) => {
					self.begin_array();
					steps.push(Step::Close(Marker::ArrayEnd));
					steps.extend(items.iter().rev().map(Step::Value));
				}
				Value::Map(entries) => {
					self.begin_object();
					steps.push(Step::Close(Marker::ObjectEnd));
					for (key, value) in entries.iter().rev() {
						steps.push(Step::Value(value));
						steps.push(Step::Key(key.as_str()));
					}
				}
			}
		}
	}
}

impl Encode for Value {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_value(self);
	}
}

impl Encode for Precision {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_precision(self);
	}
}

impl Encode for bool {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_bool(*self);
	}
}

macro_rules! encode_int {
	($($ty:ty),*) => {
		$(
			impl Encode for $ty {
				fn encode(&self, encoder: &mut Encoder) {
					encoder.write_int(i128::from(*self));
				}
			}
		)*
	};
}

encode_int!(i8, u8, i16, u16, i32, u32, i64, u64, i128);

impl Encode for isize {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_int(*self as i128);
	}
}

impl Encode for usize {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_int(*self as i128);
	}
}

impl Encode for u128 {
	fn encode(&self, encoder: &mut Encoder) {
		match i128::try_from(*self) {
			Ok(value) => encoder.write_int(value),
			Err(_) => encoder.write_precision(&Precision::from(*self)),
		}
	}
}

impl Encode for f32 {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_f32(*self);
	}
}

impl Encode for f64 {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_f64(*self);
	}
}

impl Encode for char {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_char(*self);
	}
}

impl Encode for str {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_str(self);
	}
}

impl Encode for String {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_str(self);
	}
}

impl<T: Encode + ?Sized> Encode for &T {
	fn encode(&self, encoder: &mut Encoder) {
		(**self).encode(encoder);
	}
}

impl<T: Encode + ?Sized> Encode for Box<T> {
	fn encode(&self, encoder: &mut Encoder) {
		(**self).encode(encoder);
	}
}

impl<T: Encode> Encode for Option<T> {
	fn encode(&self, encoder: &mut Encoder) {
		match self {
			Some(value) => value.encode(encoder),
			None => encoder.write_null(),
		}
	}
}

impl<T: Encode> Encode for [T] {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_seq(self);
	}
}

impl<T: Encode, const N: usize> Encode for [T; N] {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_seq(self);
	}
}

impl<T: Encode> Encode for Vec<T> {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_seq(self);
	}
}

impl<K: Encode, V: Encode, S: BuildHasher> Encode for HashMap<K, V, S> {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_entries(self);
	}
}

impl<K: Encode, V: Encode> Encode for BTreeMap<K, V> {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_entries(self);
	}
}

impl<K: Encode, V: Encode, S: BuildHasher> Encode for IndexMap<K, V, S> {
	fn encode(&self, encoder: &mut Encoder) {
		encoder.write_entries(self);
	}
}

/// Encode one value into a fresh buffer.
pub fn encode<T: Encode + ?Sized>(value: &T) -> Vec<u8> {
	let mut encoder = Encoder::new();
	value.encode(&mut encoder);
	debug!(bytes = encoder.buf.len(), "encoded value");
	encoder.into_bytes()
}

/// Encode the transport-level no-op token.
pub fn encode_noop() -> Vec<u8> {
	let mut encoder = Encoder::new();
	encoder.write_noop();
	encoder.into_bytes()
}

/// Encode caller-supplied decimal text as a precision token.
pub fn encode_precision(text: &str) -> Result<Vec<u8>> {
	let precision = Precision::parse(text)?;
	Ok(encode(&precision))
}

/// Encode one value and write it to `writer`.
pub fn encode_to_writer<W: Write, T: Encode + ?Sized>(mut writer: W, value: &T) -> Result<()> {
	writer.write_all(&encode(value))?;
	Ok(())
}

#[cfg(test)]
mod tests;
