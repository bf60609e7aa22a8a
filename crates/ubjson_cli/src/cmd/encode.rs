use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use crate::cmd::Result;
use crate::cmd::json::json_to_value;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document to encode.
	pub path: PathBuf,
	/// Write UBJSON here instead of stdout.
	#[arg(long, short)]
	pub out: Option<PathBuf>,
}

/// Encode a JSON document as one UBJSON value.
pub fn run(args: Args) -> Result<()> {
	let Args { path, out } = args;

	let text = std::fs::read_to_string(&path)?;
	let json: serde_json::Value = serde_json::from_str(&text)?;
	let value = json_to_value(&json);
	let bytes = ubjson::codec::encode(&value);

	match out {
		Some(out) => {
			std::fs::write(&out, &bytes)?;
			info!(path = %out.display(), bytes = bytes.len(), "wrote ubjson");
		}
		None => {
			let mut stdout = std::io::stdout().lock();
			stdout.write_all(&bytes)?;
			stdout.flush()?;
		}
	}

	Ok(())
}
