#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing::Level;

mod cmd;

#[derive(Parser)]
#[command(name = "ubjson", about = "UBJSON (draft 9) inspection and conversion tools")]
struct Cli {
	/// Raise log verbosity; repeat for more detail.
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode one value from a UBJSON file and print it.
	Decode(cmd::decode::Args),
	/// Encode a JSON document as UBJSON.
	Encode(cmd::encode::Args),
}

fn main() {
	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> cmd::Result<()> {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_max_level(verbosity(cli.verbose))
		.with_writer(std::io::stderr)
		.init();

	match cli.command {
		Commands::Decode(args) => cmd::decode::run(args),
		Commands::Encode(args) => cmd::encode::run(args),
	}
}

fn verbosity(count: u8) -> Level {
	match count {
		0 => Level::WARN,
		1 => Level::INFO,
		2 => Level::DEBUG,
		_ => Level::TRACE,
	}
}
