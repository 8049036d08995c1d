#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod error;

#[derive(Parser)]
#[command(name = "pvdata", about = "Structured data schema and value inspection tools")]
struct Cli {
	/// Log filter directive; falls back to `RUST_LOG`, then `warn`.
	#[arg(long = "log-level", global = true)]
	log_level: Option<String>,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Schema(cmd::schema::Args),
	Value(cmd::value::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.log_level.as_deref());

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> error::Result<()> {
	match command {
		Commands::Schema(args) => cmd::schema::run(args),
		Commands::Value(args) => cmd::value::run(args),
	}
}

fn init_tracing(level: Option<&str>) {
	let filter = match level {
		Some(directive) => EnvFilter::new(directive),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
	};
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
