use std::path::PathBuf;

use tracing::info;
use ubjson::codec::{ByteSource, DecodeOptions, Decoder, SliceSource};

use crate::cmd::json::value_to_json_value;
use crate::cmd::print::{PrintOptions, render_value};
use crate::cmd::util::emit_json;
use crate::cmd::{CliError, Result};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Byte offset of the value to decode.
	#[arg(long, default_value_t = 0)]
	pub offset: usize,
	#[arg(long)]
	pub json: bool,
	/// Maximum container nesting depth.
	#[arg(long = "max-depth")]
	pub max_depth: Option<usize>,
	/// Apply limits suited to untrusted input.
	#[arg(long)]
	pub strict: bool,
	/// Maximum number of array items printed in tree mode.
	#[arg(long = "max-items", default_value_t = PrintOptions::default().max_array_items)]
	pub max_items: usize,
}

/// Decode one value at `--offset` and print it as a tree or JSON.
pub fn run(args: Args) -> Result<()> {
	let Args {
		path,
		offset,
		json,
		max_depth,
		strict,
		max_items,
	} = args;

	let bytes = std::fs::read(&path)?;
	if offset > bytes.len() {
		return Err(CliError::OffsetOutOfRange { offset, len: bytes.len() });
	}

	let mut options = if strict { DecodeOptions::strict() } else { DecodeOptions::default() };
	if max_depth.is_some() {
		options.max_depth = max_depth;
	}

	let mut decoder = Decoder::with_options(SliceSource::at(&bytes, offset), options);
	let value = decoder.decode_value()?;
	let end = decoder.source().pos();
	info!(path = %path.display(), offset, end, "decoded {}", value.kind());

	if json {
		let payload = DecodeJson {
			path: path.display().to_string(),
			offset,
			consumed: end - offset,
			remaining: bytes.len() - end,
			kind: value.kind(),
			value: value_to_json_value(&value)?,
		};
		return emit_json(&payload);
	}

	let print_options = PrintOptions {
		max_array_items: max_items,
		..PrintOptions::default()
	};
	println!("path: {}", path.display());
	println!("offset: {offset}");
	println!("consumed: {}", end - offset);
	println!("remaining: {}", bytes.len() - end);
	println!("kind: {}", value.kind());
	println!("decoded:");
	print!("{}", render_value(&value, print_options));

	Ok(())
}

#[derive(serde::Serialize)]
struct DecodeJson {
	path: String,
	offset: usize,
	consumed: usize,
	remaining: usize,
	kind: &'static str,
	value: serde_json::Value,
}
