use std::fmt::Write;

use ubjson::codec::Value;

/// Output truncation and formatting limits for decoded values.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Maximum number of entries printed for a single object.
	pub max_entries: usize,
	/// Maximum number of Unicode scalar values printed for strings.
	pub max_string_len: usize,
	/// Maximum number of elements printed for arrays.
	pub max_array_items: usize,
	/// Maximum recursive print depth for nested arrays/objects.
	pub max_print_depth: u32,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			max_entries: 80,
			max_string_len: 200,
			max_array_items: 16,
			max_print_depth: 6,
		}
	}
}

/// Render one decoded value tree as indented text.
pub fn render_value(value: &Value, options: PrintOptions) -> String {
	let mut out = String::new();
	write_value(&mut out, value, 0, 0, options);
	out
}

fn write_value(out: &mut String, value: &Value, indent: usize, depth: u32, options: PrintOptions) {
	let pad = " ".repeat(indent);
	// Writing into a String cannot fail.
	let _ = match value {
		Value::Null => writeln!(out, "{pad}null"),
		Value::Bool(v) => writeln!(out, "{pad}{v}"),
		Value::Int8(v) => writeln!(out, "{pad}{v}"),
		Value::UInt8(v) => writeln!(out, "{pad}{v}"),
		Value::Int16(v) => writeln!(out, "{pad}{v}"),
		Value::Int32(v) => writeln!(out, "{pad}{v}"),
		Value::Int64(v) => writeln!(out, "{pad}{v}"),
		Value::Float32(v) => writeln!(out, "{pad}{v}"),
		Value::Float64(v) => writeln!(out, "{pad}{v}"),
		Value::Precision(v) => writeln!(out, "{pad}{v} (precision)"),
		Value::Str(v) => writeln!(out, "{pad}\"{}\"", truncate(v, options.max_string_len)),
		Value::Char(v) => writeln!(out, "{pad}'{}'", v.escape_default()),
		Value::List(items) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}[... {} items]", items.len());
				return;
			}
			let _ = writeln!(out, "{pad}[");
			for item in items.iter().take(options.max_array_items) {
				write_value(out, item, indent + 2, depth + 1, options);
			}
			if items.len() > options.max_array_items {
				let _ = writeln!(out, "{pad}  ... {} more", items.len() - options.max_array_items);
			}
			writeln!(out, "{pad}]")
		}
		Value::Map(entries) => {
			if depth >= options.max_print_depth {
				let _ = writeln!(out, "{pad}{{ ... {} entries }}", entries.len());
				return;
			}
			let _ = writeln!(out, "{pad}{{");
			for (key, item) in entries.iter().take(options.max_entries) {
				let _ = write!(out, "{pad}  \"{}\" = ", truncate(key, options.max_string_len));
				if item.is_container() {
					let _ = writeln!(out);
					write_value(out, item, indent + 4, depth + 1, options);
				} else {
					write_value(out, item, 0, depth + 1, options);
				}
			}
			if entries.len() > options.max_entries {
				let _ = writeln!(out, "{pad}  ... {} more entries", entries.len() - options.max_entries);
			}
			writeln!(out, "{pad}}}")
		}
	};
}

fn truncate(input: &str, max_len: usize) -> String {
	if input.chars().count() <= max_len {
		return input.to_owned();
	}
	let out: String = input.chars().take(max_len).collect();
	format!("{out}...")
}
