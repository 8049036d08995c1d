use std::path::PathBuf;

use pvdata::data::{FieldPath, FieldRef, PvError, ScalarKind, ValueNode, parse_schema_expr};

use crate::error::{CliError, Result};

/// Load a schema from an inline expression or a file, exactly one of which must be set.
pub(crate) fn load_schema(expr: Option<String>, file: Option<PathBuf>) -> Result<(String, FieldRef)> {
	let text = match (expr, file) {
		(Some(expr), None) => expr,
		(None, Some(path)) => {
			tracing::debug!(path = %path.display(), "reading schema file");
			std::fs::read_to_string(&path).map_err(|source| CliError::Io { path, source })?
		}
		_ => return Err(CliError::SchemaSource),
	};
	let field = parse_schema_expr(&text)?;
	Ok((text, field))
}

/// Split a `PATH=LITERAL` assignment argument.
pub(crate) fn parse_assignment(text: &str) -> Result<(FieldPath, &str)> {
	let (path, literal) = text.split_once('=').ok_or_else(|| CliError::InvalidAssignment { text: text.to_owned() })?;
	let path = FieldPath::parse(path.trim())?;
	Ok((path, literal))
}

/// Assign a text literal to a scalar node, parsed according to its bound kind.
pub(crate) fn assign_literal(node: &mut ValueNode, literal: &str) -> Result<()> {
	match node.field().scalar_kind() {
		Some(ScalarKind::String) => node.assign(literal.to_owned())?,
		Some(ScalarKind::Int) => node.assign(parse_literal::<i32>(ScalarKind::Int, literal)?)?,
		Some(ScalarKind::Double) => node.assign(parse_literal::<f64>(ScalarKind::Double, literal)?)?,
		None => {
			return Err(PvError::InvalidLiteral {
				kind: "structure",
				text: literal.to_owned(),
			}
			.into());
		}
	}
	Ok(())
}

fn parse_literal<T: std::str::FromStr>(kind: ScalarKind, literal: &str) -> Result<T> {
	literal.trim().parse::<T>().map_err(|_| {
		PvError::InvalidLiteral {
			kind: kind.id(),
			text: literal.to_owned(),
		}
		.into()
	})
}
