use std::io::Read;

use indexmap::map::Entry;
use tracing::{debug, trace};

use crate::codec::{ByteSource, Map, Marker, Precision, ReaderSource, Result, SliceSource, UbjError, Value};

/// Runtime limits for decoding.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Maximum container nesting depth; `None` leaves depth bounded only by memory.
	pub max_depth: Option<usize>,
	/// Maximum byte length accepted from a string or precision length prefix.
	pub max_text_len: usize,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: None,
			max_text_len: i32::MAX as usize,
		}
	}
}

impl DecodeOptions {
	/// Preset for untrusted input.
	pub fn strict() -> Self {
		Self {
			max_depth: Some(512),
			max_text_len: 16 * 1024 * 1024,
		}
	}
}

/// In-progress container on the decoder's frame stack.
enum Frame {
	List(Vec<Value>),
	Map { entries: Map, pending_key: Option<String> },
}

impl Frame {
	/// Route one completed value into this container.
	fn accept(&mut self, value: Value) -> Result<()> {
		match self {
			Self::List(items) => items.push(value),
			Self::Map { entries, pending_key } => match pending_key.take() {
				Some(key) => match entries.entry(key) {
					Entry::Occupied(slot) => return Err(UbjError::DuplicateKey { key: slot.key().clone() }),
					Entry::Vacant(slot) => {
						slot.insert(value);
					}
				},
				None => {
					let key = value.key_text().ok_or(UbjError::NonScalarKey { kind: value.kind() })?;
					*pending_key = Some(key);
				}
			},
		}
		Ok(())
	}
}

/// One marker plus whatever payload it carries.
enum Token {
	Scalar(Value),
	Open(Frame),
	Close(Marker),
}

/// Single-value decoder over a [`ByteSource`].
///
/// Containers are tracked on an explicit frame stack local to each
/// [`Decoder::decode_value`] call, so nesting depth never grows the call
/// stack and one decoder can be reused for consecutive values.
pub struct Decoder<S> {
	source: S,
	options: DecodeOptions,
}

impl<S: ByteSource> Decoder<S> {
	/// Create a decoder with default limits.
	pub fn new(source: S) -> Self {
		Self::with_options(source, DecodeOptions::default())
	}

	/// Create a decoder with explicit limits.
	pub fn with_options(source: S, options: DecodeOptions) -> Self {
		Self { source, options }
	}

	/// Borrow the underlying source.
	pub fn source(&self) -> &S {
		&self.source
	}

	/// Return the underlying source.
	pub fn into_source(self) -> S {
		self.source
	}

	/// Decode exactly one top-level value.
	pub fn decode_value(&mut self) -> Result<Value> {
		let start = self.source.pos();
		let mut frames: Vec<Frame> = Vec::new();

		loop {
			let at = self.source.pos();
			let marker = self.read_marker()?;

			let value = match self.read_token(marker, at)? {
				Token::Scalar(value) => value,
				Token::Open(frame) => {
					if let Some(max_depth) = self.options.max_depth.filter(|max| frames.len() >= *max) {
						return Err(UbjError::DepthExceeded { max_depth });
					}
					trace!(depth = frames.len() + 1, at, "open {}", marker.name());
					frames.push(frame);
					continue;
				}
				Token::Close(marker) => {
					let value = close_frame(frames.pop(), marker, at)?;
					trace!(depth = frames.len(), at, "close {}", marker.name());
					value
				}
			};

			match frames.last_mut() {
				Some(frame) => frame.accept(value)?,
				None => {
					debug!(kind = value.kind(), start, consumed = self.source.pos() - start, "decoded value");
					return Ok(value);
				}
			}
		}
	}

	fn read_marker(&mut self) -> Result<Marker> {
		let at = self.source.pos();
		let byte = self.source.read_u8()?;
		Marker::from_byte(byte).ok_or(UbjError::MalformedMarker { byte, at })
	}

	fn read_token(&mut self, marker: Marker, at: usize) -> Result<Token> {
		let value = match marker {
			Marker::Noop => return Err(UbjError::UnexpectedNoop { at }),
			Marker::ArrayStart => return Ok(Token::Open(Frame::List(Vec::new()))),
			Marker::ObjectStart => {
				return Ok(Token::Open(Frame::Map {
					entries: Map::new(),
					pending_key: None,
				}));
			}
			Marker::ArrayEnd | Marker::ObjectEnd => return Ok(Token::Close(marker)),
			Marker::Null => Value::Null,
			Marker::True => Value::Bool(true),
			Marker::False => Value::Bool(false),
			Marker::Int8 => Value::Int8(self.source.read_i8()?),
			Marker::UInt8 => Value::UInt8(self.source.read_u8()?),
			Marker::Int16 => Value::Int16(self.source.read_i16()?),
			Marker::Int32 => Value::Int32(self.source.read_i32()?),
			Marker::Int64 => Value::Int64(self.source.read_i64()?),
			Marker::Float32 => Value::Float32(self.source.read_f32()?),
			Marker::Float64 => Value::Float64(self.source.read_f64()?),
			Marker::Precision => Value::Precision(Precision::parse(&self.read_text()?)?),
			Marker::String => Value::Str(self.read_text()?),
			Marker::Char => Value::Char(char::from(self.source.read_u8()?)),
		};
		Ok(Token::Scalar(value))
	}

	fn read_text(&mut self) -> Result<String> {
		let len = self.read_length()?;
		let at = self.source.pos();
		let bytes = self.source.read_bytes(len)?;
		String::from_utf8(bytes).map_err(|_| UbjError::InvalidUtf8 { at })
	}

	/// Read the integer token that prefixes string and precision payloads.
	///
	/// The token is never routed into the current container.
	fn read_length(&mut self) -> Result<usize> {
		let at = self.source.pos();
		let marker = self.read_marker()?;
		let len = match marker {
			Marker::Int8 => i64::from(self.source.read_i8()?),
			Marker::UInt8 => i64::from(self.source.read_u8()?),
			Marker::Int16 => i64::from(self.source.read_i16()?),
			Marker::Int32 => i64::from(self.source.read_i32()?),
			Marker::Int64 => self.source.read_i64()?,
			other => return Err(UbjError::LengthNotInteger { kind: other.name(), at }),
		};

		let Ok(checked) = usize::try_from(len) else {
			return Err(UbjError::NegativeLength { len, at });
		};
		if checked > self.options.max_text_len {
			return Err(UbjError::LengthTooLong {
				len,
				max: self.options.max_text_len,
				at,
			});
		}
		Ok(checked)
	}
}

fn close_frame(frame: Option<Frame>, marker: Marker, at: usize) -> Result<Value> {
	match (marker, frame) {
		(Marker::ArrayEnd, Some(Frame::List(items))) => Ok(Value::List(items)),
		(Marker::ObjectEnd, Some(Frame::Map { entries, pending_key: None })) => Ok(Value::Map(entries)),
		(Marker::ObjectEnd, Some(Frame::Map { pending_key: Some(key), .. })) => Err(UbjError::DanglingKey { key }),
		_ => Err(UbjError::UnbalancedContainer { marker: marker.name(), at }),
	}
}

/// Decode one value starting at offset 0.
pub fn decode(bytes: &[u8]) -> Result<Value> {
	Decoder::new(SliceSource::new(bytes)).decode_value()
}

/// Decode one value starting at `*pos`, advancing `*pos` past it on success.
pub fn decode_at(bytes: &[u8], pos: &mut usize) -> Result<Value> {
	let mut decoder = Decoder::new(SliceSource::at(bytes, *pos));
	let value = decoder.decode_value()?;
	*pos = decoder.source().pos();
	Ok(value)
}

/// Decode one value from a reader, consuming only the bytes that value spans.
pub fn decode_reader<R: Read>(reader: R) -> Result<Value> {
	Decoder::new(ReaderSource::new(reader)).decode_value()
}
