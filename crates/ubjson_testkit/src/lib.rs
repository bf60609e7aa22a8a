//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};
use std::process::Output;

/// Hand-assembled wire tokens used across codec and CLI tests.
pub mod wire {
	/// `i 42`
	pub const INT8: &[u8] = &[b'i', 42];
	/// `i -42`
	pub const NEG_INT8: &[u8] = &[b'i', 0xD6];
	/// `U 200`
	pub const UINT8: &[u8] = &[b'U', 200];
	/// `I 31234`
	pub const INT16: &[u8] = &[b'I', 0x7A, 0x02];
	/// `l 2123456789`
	pub const INT32: &[u8] = &[b'l', 0x7E, 0x91, 0x61, 0x15];
	/// `L 9123456789123456789`
	pub const INT64: &[u8] = &[b'L', 0x7E, 0x9D, 0x07, 0x9C, 0x8F, 0x54, 0x5F, 0x15];
	/// `d 12.375`
	pub const FLOAT32: &[u8] = &[b'd', 0x41, 0x46, 0x00, 0x00];
	/// `D 12.375`
	pub const FLOAT64: &[u8] = &[b'D', 0x40, 0x28, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00];
	/// `C '*'`
	pub const SMALL_CHAR: &[u8] = &[b'C', 0x2A];
	/// `I 0x30A2`, katakana A encoded as a 16-bit integer.
	pub const BIG_CHAR: &[u8] = &[b'I', 0x30, 0xA2];
	/// `S i 1 "*"`
	pub const SMALL_CHAR_STRING: &[u8] = &[b'S', b'i', 0x01, 0x2A];
	/// `S i 5 "Test!"`
	pub const STRING: &[u8] = &[b'S', b'i', 0x05, b'T', b'e', b's', b't', b'!'];
	/// `H i 19 "9223372036854775808"`
	pub const ULONG_PRECISION: &[u8] = &[
		b'H', b'i', 0x13, b'9', b'2', b'2', b'3', b'3', b'7', b'2', b'0', b'3', b'6', b'8', b'5', b'4', b'7', b'7', b'5', b'8', b'0', b'8',
	];
	/// `H i 5 "300.5"`
	pub const DECIMAL_PRECISION: &[u8] = &[b'H', b'i', 0x05, b'3', b'0', b'0', b'.', b'5'];
	/// `Z`
	pub const NULL: &[u8] = b"Z";
	/// `N`
	pub const NOOP: &[u8] = b"N";
	/// `T`
	pub const TRUE: &[u8] = b"T";
	/// `F`
	pub const FALSE: &[u8] = b"F";
	/// `[`
	pub const ARRAY_START: &[u8] = b"[";
	/// `]`
	pub const ARRAY_END: &[u8] = b"]";
	/// `{`
	pub const OBJECT_START: &[u8] = b"{";
	/// `}`
	pub const OBJECT_END: &[u8] = b"}";

	/// Concatenate token slices into one buffer.
	pub fn concat(parts: &[&[u8]]) -> Vec<u8> {
		parts.iter().flat_map(|part| part.iter().copied()).collect()
	}
}

/// Resolve the workspace root path (two levels above this crate's manifest).
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir).to_path_buf()
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Resolve the workspace target directory.
pub fn target_dir() -> PathBuf {
	std::env::var_os("CARGO_TARGET_DIR")
		.map(PathBuf::from)
		.unwrap_or_else(|| workspace_root().join("target"))
}

/// Create (if needed) and return a per-test scratch file path under the target directory.
pub fn scratch_path(name: &str) -> PathBuf {
	let dir = target_dir().join("ubjson-scratch");
	std::fs::create_dir_all(&dir).expect("scratch dir is creatable");
	dir.join(format!("{}-{name}", std::process::id()))
}

/// Parse a successful command's stdout as JSON.
pub fn json_stdout(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
