use std::process::{Command, Output};

pub fn fixture(name: &str) -> String {
	ubjson_testkit::fixture_path(name).to_string_lossy().into_owned()
}

pub fn scratch(name: &str, bytes: impl AsRef<[u8]>) -> String {
	let path = ubjson_testkit::scratch_path(name);
	std::fs::write(&path, bytes).expect("scratch file is writable");
	path.to_string_lossy().into_owned()
}

pub fn run_ubjson(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_ubjson")).args(args).output().expect("ubjson command executes")
}

pub fn run_ubjson_json(args: &[&str]) -> serde_json::Value {
	ubjson_testkit::json_stdout(&run_ubjson(args))
}
