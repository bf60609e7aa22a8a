use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Codec failure while decoding or encoding.
	#[error(transparent)]
	Ubj(#[from] ubjson::codec::UbjError),
	/// Filesystem or stdio failure.
	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),
	/// JSON input could not be parsed or output could not be rendered.
	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),
	/// Decoded tree nests deeper than JSON output allows.
	#[error("value nesting depth {depth} is too deep for json output (max={max})")]
	TooDeepForJson {
		/// Actual nesting depth.
		depth: usize,
		/// Largest depth rendered as JSON.
		max: usize,
	},
	/// Requested start offset lies past the end of the input.
	#[error("offset {offset} is past end of input ({len} bytes)")]
	OffsetOutOfRange {
		/// Requested offset.
		offset: usize,
		/// Input length.
		len: usize,
	},
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;
