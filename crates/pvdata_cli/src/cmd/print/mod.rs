use std::fmt::Write as _;

use pvdata::data::{Field, FieldRef, StructureValue, ValueNode};

/// Formatting knobs for text output.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Spaces added per nesting level.
	pub indent_width: usize,
	/// Annotate schema members with bit offsets and widths.
	pub show_offsets: bool,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			indent_width: 2,
			show_offsets: true,
		}
	}
}

/// Render a descriptor as an indented member listing.
pub fn render_schema(field: &FieldRef, options: PrintOptions) -> String {
	let mut out = String::new();
	let _ = writeln!(out, "id: {}", field.id());
	let _ = writeln!(out, "kind: {}", kind_label(field));
	let _ = writeln!(out, "bit_width: {}", field.bit_width());
	if let Some(structure) = field.as_structure() {
		let _ = writeln!(out, "members: {}", structure.len());
		render_members(&mut out, field, options.indent_width, options);
	}
	out
}

fn render_members(out: &mut String, field: &Field, indent: usize, options: PrintOptions) {
	let Some(structure) = field.as_structure() else {
		return;
	};
	let pad = " ".repeat(indent);
	for member in structure.members() {
		let _ = write!(out, "{pad}{} {}", member.name(), member.field().id());
		if options.show_offsets {
			let _ = write!(out, " offset={} width={}", member.bit_offset(), member.field().bit_width());
		}
		out.push('\n');
		render_members(out, member.field(), indent + options.indent_width, options);
	}
}

/// Render a value node as an indented tree.
pub fn render_value(node: &ValueNode, options: PrintOptions) -> String {
	let mut out = String::new();
	render_node(&mut out, node, 0, options);
	out.push('\n');
	out
}

fn render_node(out: &mut String, node: &ValueNode, indent: usize, options: PrintOptions) {
	match node {
		ValueNode::String(value) => {
			let _ = write!(out, "{:?}", value.value());
		}
		ValueNode::Int(value) => {
			let _ = write!(out, "{}", value.value());
		}
		ValueNode::Double(value) => {
			let _ = write!(out, "{}", value.value());
		}
		ValueNode::Structure(value) => render_structure(out, value, indent, options),
	}
}

fn render_structure(out: &mut String, value: &StructureValue, indent: usize, options: PrintOptions) {
	let _ = writeln!(out, "{} {{", value.field().id());
	let pad = " ".repeat(indent + options.indent_width);
	for (name, child) in value.iter() {
		let _ = write!(out, "{pad}{name}: ");
		render_node(out, &child.borrow(), indent + options.indent_width, options);
		out.push('\n');
	}
	let _ = write!(out, "{}}}", " ".repeat(indent));
}

/// Convert a descriptor into JSON.
pub fn schema_to_json(field: &FieldRef) -> SchemaJson {
	SchemaJson {
		id: field.id().to_owned(),
		kind: kind_label(field),
		bit_width: field.bit_width(),
		expr: field.to_string(),
		members: members_to_json(field),
	}
}

fn members_to_json(field: &Field) -> Vec<MemberJson> {
	field
		.as_structure()
		.map(|structure| {
			structure
				.members()
				.map(|member| MemberJson {
					name: member.name().to_owned(),
					id: member.field().id().to_owned(),
					kind: kind_label(member.field()),
					bit_offset: member.bit_offset(),
					bit_width: member.field().bit_width(),
					members: members_to_json(member.field()),
				})
				.collect()
		})
		.unwrap_or_default()
}

/// Convert a value node into JSON, keeping member order.
pub fn value_to_json(node: &ValueNode) -> serde_json::Value {
	use serde_json::{Map, Value as JsonValue};

	match node {
		ValueNode::String(value) => serde_json::json!(value.value()),
		ValueNode::Int(value) => serde_json::json!(value.value()),
		ValueNode::Double(value) => serde_json::json!(value.value()),
		ValueNode::Structure(value) => {
			let mut out = Map::new();
			for (name, child) in value.iter() {
				out.insert(name.to_owned(), value_to_json(&child.borrow()));
			}
			JsonValue::Object(out)
		}
	}
}

fn kind_label(field: &Field) -> &'static str {
	match field {
		Field::Scalar(_) => "scalar",
		Field::Structure(_) => "structure",
	}
}

/// JSON shape of a descriptor.
#[derive(serde::Serialize)]
pub struct SchemaJson {
	id: String,
	kind: &'static str,
	bit_width: usize,
	expr: String,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	members: Vec<MemberJson>,
}

/// JSON shape of one structure member.
#[derive(serde::Serialize)]
pub struct MemberJson {
	name: String,
	id: String,
	kind: &'static str,
	bit_offset: usize,
	bit_width: usize,
	#[serde(skip_serializing_if = "Vec::is_empty")]
	members: Vec<MemberJson>,
}
