use std::path::PathBuf;

use pvdata::data::{FieldPath, StructureValue, ValueNode};

use crate::cmd::print::{PrintOptions, render_value, value_to_json};
use crate::cmd::util::{assign_literal, load_schema, parse_assignment};
use crate::error::Result;

#[derive(clap::Args)]
pub struct Args {
	/// Inline schema expression for the tree's root structure.
	pub expr: Option<String>,
	#[arg(long)]
	pub file: Option<PathBuf>,
	/// Assignment applied in order, as `PATH=LITERAL`.
	#[arg(long = "set")]
	pub assignments: Vec<String>,
	/// Print only the value at this path.
	#[arg(long = "get")]
	pub get_path: Option<String>,
	#[arg(long)]
	pub json: bool,
	#[arg(long = "indent", default_value_t = 2)]
	pub indent_width: usize,
}

/// Build a value tree, apply assignments, and print the result.
pub fn run(args: Args) -> Result<()> {
	let Args {
		expr,
		file,
		assignments,
		get_path,
		json,
		indent_width,
	} = args;

	let (_, field) = load_schema(expr, file)?;
	let tree = StructureValue::new(&field)?;

	for text in &assignments {
		let (path, literal) = parse_assignment(text)?;
		let target = tree.resolve(&path)?;
		assign_literal(&mut target.borrow_mut(), literal)?;
		tracing::debug!(path = %path, literal, "applied assignment");
	}

	let selected = match get_path.as_deref() {
		Some(path_expr) => Some(tree.resolve(&FieldPath::parse(path_expr)?)?),
		None => None,
	};
	let root = ValueNode::Structure(tree);

	if json {
		let value = match &selected {
			Some(handle) => value_to_json(&handle.borrow()),
			None => value_to_json(&root),
		};
		let out = ValueJson {
			schema: field.to_string(),
			path: get_path,
			value,
		};
		println!("{}", serde_json::to_string_pretty(&out)?);
		return Ok(());
	}

	let options = PrintOptions {
		indent_width,
		..PrintOptions::default()
	};
	match &selected {
		Some(handle) => print!("{}", render_value(&handle.borrow(), options)),
		None => print!("{}", render_value(&root, options)),
	}
	Ok(())
}

#[derive(serde::Serialize)]
struct ValueJson {
	schema: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	path: Option<String>,
	value: serde_json::Value,
}
