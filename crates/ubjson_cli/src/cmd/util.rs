use std::io::Write;

use crate::cmd::Result;

/// Print a serializable payload as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(payload: &T) -> Result<()> {
	let mut stdout = std::io::stdout().lock();
	serde_json::to_writer_pretty(&mut stdout, payload)?;
	writeln!(stdout)?;
	Ok(())
}
