/// Decode command.
pub mod decode;
/// Encode command.
pub mod encode;
/// CLI error type.
pub mod error;
/// Conversions between decoded values and JSON.
pub mod json;
/// Indented tree rendering for decoded values.
pub mod print;
mod util;

pub use error::{CliError, Result};
