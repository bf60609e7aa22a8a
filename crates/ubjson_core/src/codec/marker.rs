/// One-byte type marker of the draft 9 wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
	/// Transport keep-alive with no data representation (`N`).
	Noop,
	/// Null (`Z`).
	Null,
	/// Boolean true (`T`).
	True,
	/// Boolean false (`F`).
	False,
	/// Signed 8-bit integer (`i`).
	Int8,
	/// Unsigned 8-bit integer (`U`).
	UInt8,
	/// Signed 16-bit integer (`I`).
	Int16,
	/// Signed 32-bit integer (`l`).
	Int32,
	/// Signed 64-bit integer (`L`).
	Int64,
	/// IEEE-754 single (`d`).
	Float32,
	/// IEEE-754 double (`D`).
	Float64,
	/// Length-prefixed decimal text (`H`).
	Precision,
	/// Length-prefixed UTF-8 text (`S`).
	String,
	/// Single byte character (`C`).
	Char,
	/// Array start (`[`).
	ArrayStart,
	/// Array end (`]`).
	ArrayEnd,
	/// Object start (`{`).
	ObjectStart,
	/// Object end (`}`).
	ObjectEnd,
}

impl Marker {
	/// Every marker in table order.
	pub const ALL: [Marker; 18] = [
		Self::Noop,
		Self::Null,
		Self::True,
		Self::False,
		Self::Int8,
		Self::UInt8,
		Self::Int16,
		Self::Int32,
		Self::Int64,
		Self::Float32,
		Self::Float64,
		Self::Precision,
		Self::String,
		Self::Char,
		Self::ArrayStart,
		Self::ArrayEnd,
		Self::ObjectStart,
		Self::ObjectEnd,
	];

	/// Look up the marker for a wire byte.
	pub fn from_byte(byte: u8) -> Option<Self> {
		Some(match byte {
			b'N' => Self::Noop,
			b'Z' => Self::Null,
			b'T' => Self::True,
			b'F' => Self::False,
			b'i' => Self::Int8,
			b'U' => Self::UInt8,
			b'I' => Self::Int16,
			b'l' => Self::Int32,
			b'L' => Self::Int64,
			b'd' => Self::Float32,
			b'D' => Self::Float64,
			b'H' => Self::Precision,
			b'S' => Self::String,
			b'C' => Self::Char,
			b'[' => Self::ArrayStart,
			b']' => Self::ArrayEnd,
			b'{' => Self::ObjectStart,
			b'}' => Self::ObjectEnd,
			_ => return None,
		})
	}

	/// Wire byte for this marker.
	pub fn as_byte(self) -> u8 {
		match self {
			Self::Noop => b'N',
			Self::Null => b'Z',
			Self::True => b'T',
			Self::False => b'F',
			Self::Int8 => b'i',
			Self::UInt8 => b'U',
			Self::Int16 => b'I',
			Self::Int32 => b'l',
			Self::Int64 => b'L',
			Self::Float32 => b'd',
			Self::Float64 => b'D',
			Self::Precision => b'H',
			Self::String => b'S',
			Self::Char => b'C',
			Self::ArrayStart => b'[',
			Self::ArrayEnd => b']',
			Self::ObjectStart => b'{',
			Self::ObjectEnd => b'}',
		}
	}

	/// Stable lowercase label.
	pub fn name(self) -> &'static str {
		match self {
			Self::Noop => "noop",
			Self::Null => "null",
			Self::True => "true",
			Self::False => "false",
			Self::Int8 => "int8",
			Self::UInt8 => "uint8",
			Self::Int16 => "int16",
			Self::Int32 => "int32",
			Self::Int64 => "int64",
			Self::Float32 => "float32",
			Self::Float64 => "float64",
			Self::Precision => "precision",
			Self::String => "string",
			Self::Char => "char",
			Self::ArrayStart => "array start",
			Self::ArrayEnd => "array end",
			Self::ObjectStart => "object start",
			Self::ObjectEnd => "object end",
		}
	}

	/// Fixed payload width in bytes, or `None` for framed and container markers.
	pub fn payload_width(self) -> Option<usize> {
		match self {
			Self::Noop | Self::Null | Self::True | Self::False => Some(0),
			Self::Int8 | Self::UInt8 | Self::Char => Some(1),
			Self::Int16 => Some(2),
			Self::Int32 | Self::Float32 => Some(4),
			Self::Int64 | Self::Float64 => Some(8),
			Self::Precision | Self::String | Self::ArrayStart | Self::ArrayEnd | Self::ObjectStart | Self::ObjectEnd => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::Marker;

	#[test]
	fn every_marker_round_trips_through_its_byte() {
		for marker in Marker::ALL {
			assert_eq!(Marker::from_byte(marker.as_byte()), Some(marker));
		}
	}

	#[test]
	fn marker_bytes_are_distinct() {
		let mut bytes: Vec<u8> = Marker::ALL.iter().map(|marker| marker.as_byte()).collect();
		bytes.sort_unstable();
		bytes.dedup();
		assert_eq!(bytes.len(), Marker::ALL.len());
	}

	#[test]
	fn rejects_bytes_outside_table() {
		assert_eq!(Marker::from_byte(0x20), None);
		assert_eq!(Marker::from_byte(0x00), None);
		assert_eq!(Marker::from_byte(b'u'), None);
	}
}
