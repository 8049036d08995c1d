use crate::data::cursor::TextCursor;
use crate::data::{Field, FieldRef, PvError, Result, ScalarKind};

const MAX_NESTING: u32 = 64;

/// Parse a schema expression into a field descriptor.
///
/// The grammar is `type := scalar_id | struct_id '{' (name ':' type),* '}'`
/// with `scalar_id` one of `string`, `int`, `double`. Whitespace may separate
/// tokens and a trailing comma is allowed. Structures go through
/// [`Structure::build`](crate::data::Structure::build), so arity and
/// duplicate-name failures surface as [`PvError::Schema`].
pub fn parse_schema_expr(input: &str) -> Result<FieldRef> {
	let mut parser = ExprParser {
		input,
		cursor: TextCursor::new(input),
	};
	parser.cursor.skip_ws();
	let field = parser.parse_type(0)?;
	parser.cursor.skip_ws();
	if !parser.cursor.at_end() {
		return Err(parser.error(parser.cursor.pos(), "unexpected trailing input"));
	}
	Ok(field)
}

struct ExprParser<'a> {
	input: &'a str,
	cursor: TextCursor<'a>,
}

impl<'a> ExprParser<'a> {
	fn parse_type(&mut self, depth: u32) -> Result<FieldRef> {
		if depth >= MAX_NESTING {
			return Err(self.error(self.cursor.pos(), "nesting too deep"));
		}

		let start = self.cursor.pos();
		let ident = self.ident()?;
		self.cursor.skip_ws();
		if self.cursor.eat(b'{') {
			return self.parse_members(ident, depth);
		}

		ScalarKind::from_id(ident).map(Field::scalar).ok_or_else(|| self.error(start, "unknown scalar type"))
	}

	fn parse_members(&mut self, id: &str, depth: u32) -> Result<FieldRef> {
		let mut names = Vec::new();
		let mut fields = Vec::new();

		loop {
			self.cursor.skip_ws();
			if self.cursor.eat(b'}') {
				break;
			}

			let name = self.ident()?;
			self.cursor.skip_ws();
			if !self.cursor.eat(b':') {
				return Err(self.error(self.cursor.pos(), "expected ':'"));
			}
			self.cursor.skip_ws();
			let field = self.parse_type(depth + 1)?;
			names.push(name);
			fields.push(field);

			self.cursor.skip_ws();
			if self.cursor.eat(b',') {
				continue;
			}
			if self.cursor.eat(b'}') {
				break;
			}
			return Err(self.error(self.cursor.pos(), "expected ',' or '}'"));
		}

		Ok(Field::structure(id, &names, &fields)?)
	}

	fn ident(&mut self) -> Result<&'a str> {
		let start = self.cursor.pos();
		let ident = self.cursor.take_ident();
		if ident.is_empty() {
			return Err(self.error(start, "expected identifier"));
		}
		Ok(ident)
	}

	fn error(&self, at: usize, reason: &'static str) -> PvError {
		PvError::InvalidSchemaExpr {
			expr: self.input.to_owned(),
			at,
			reason,
		}
	}
}
