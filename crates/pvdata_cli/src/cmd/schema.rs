use std::path::PathBuf;

use crate::cmd::print::{PrintOptions, render_schema, schema_to_json};
use crate::cmd::util::load_schema;
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Inline schema expression, e.g. `point{x:double,y:double}`.
	pub expr: Option<String>,
	#[arg(long)]
	pub file: Option<PathBuf>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "no-offsets")]
	pub no_offsets: bool,
	#[arg(long = "indent", default_value_t = 2)]
	pub indent_width: usize,
}

/// Build a descriptor and print its layout.
pub fn run(args: Args) -> Result<()> {
	let Args {
		expr,
		file,
		json,
		no_offsets,
		indent_width,
	} = args;

	let (_, field) = load_schema(expr, file)?;
	tracing::info!(id = field.id(), bit_width = field.bit_width(), "schema built");

	if json {
		println!("{}", serde_json::to_string_pretty(&schema_to_json(&field))?);
		return Ok(());
	}

	let options = PrintOptions {
		indent_width,
		show_offsets: !no_offsets,
	};
	print!("{}", render_schema(&field, options));
	Ok(())
}
