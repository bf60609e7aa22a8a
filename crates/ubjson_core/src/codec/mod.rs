mod decode;
mod encode;
mod error;
mod marker;
mod precision;
mod source;
mod value;

/// Frame-stack decoder, limits, and one-call entry points.
pub use decode::{DecodeOptions, Decoder, decode, decode_at, decode_reader};
/// Width-selecting encoder, native-type encoding seam, and one-call entry points.
pub use encode::{Encode, Encoder, encode, encode_noop, encode_precision, encode_to_writer};
/// Error and result aliases.
pub use error::{Result, UbjError};
/// One-byte type markers.
pub use marker::Marker;
/// Exact decimal text carried by the precision marker.
pub use precision::Precision;
/// Byte source abstraction over slices and readers.
pub use source::{ByteSource, ReaderSource, SliceSource};
/// Decoded value model.
pub use value::{Map, Value};
