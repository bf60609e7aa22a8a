use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, UbjError>;

/// Errors produced while decoding or encoding UBJSON data.
#[derive(Debug, Error)]
pub enum UbjError {
	/// Reader-backed source failure other than end of stream.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, have {have}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes that were actually available.
		have: usize,
	},
	/// Byte in marker position is not part of the marker table.
	#[error("unrecognized marker 0x{byte:02x} at offset {at}")]
	MalformedMarker {
		/// Offending byte.
		byte: u8,
		/// Offset of the byte.
		at: usize,
	},
	/// No-op token reached the codec instead of being stripped by the transport.
	#[error("no-op at offset {at} has no data representation")]
	UnexpectedNoop {
		/// Offset of the no-op marker.
		at: usize,
	},
	/// Length prefix was not an integer token.
	#[error("length prefix at offset {at} is {kind}, expected an integer")]
	LengthNotInteger {
		/// Kind of the token found in length position.
		kind: &'static str,
		/// Offset of the length token marker.
		at: usize,
	},
	/// Length prefix was negative.
	#[error("negative length {len} at offset {at}")]
	NegativeLength {
		/// Decoded length value.
		len: i64,
		/// Offset of the length token marker.
		at: usize,
	},
	/// Length prefix exceeded the configured text limit.
	#[error("text too long: length {len} at offset {at} exceeds max {max}")]
	LengthTooLong {
		/// Decoded length value.
		len: i64,
		/// Maximum accepted text length in bytes.
		max: usize,
		/// Offset of the length token marker.
		at: usize,
	},
	/// String payload was not valid UTF-8.
	#[error("invalid utf-8 in text payload at offset {at}")]
	InvalidUtf8 {
		/// Offset of the first payload byte.
		at: usize,
	},
	/// Precision payload was not a decimal number.
	#[error("invalid precision text: {text:?}")]
	InvalidPrecision {
		/// Offending text.
		text: String,
	},
	/// End marker did not close the innermost open container.
	#[error("unbalanced {marker} at offset {at}")]
	UnbalancedContainer {
		/// Name of the end marker.
		marker: &'static str,
		/// Offset of the end marker.
		at: usize,
	},
	/// Object ended between a key and its value.
	#[error("object ended after key {key:?} without a value")]
	DanglingKey {
		/// Pending key text.
		key: String,
	},
	/// Object repeated a key.
	#[error("duplicate object key {key:?}")]
	DuplicateKey {
		/// Repeated key text.
		key: String,
	},
	/// Container decoded in object-key position.
	#[error("object key must be a scalar, got {kind}")]
	NonScalarKey {
		/// Kind of the container found.
		kind: &'static str,
	},
	/// Container nesting exceeded the configured limit.
	#[error("nesting depth exceeded (max={max_depth})")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: usize,
	},
}
