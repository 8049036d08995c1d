use std::fmt;

use crate::data::cursor::TextCursor;
use crate::data::{PvError, Result};

/// One parsed operation in a field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
	/// Select a member by name.
	Field(String),
	/// Select a member by zero-based declaration position.
	Index(usize),
}

/// Parsed field path expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath {
	/// Ordered sequence of path steps.
	pub steps: Vec<PathStep>,
}

impl FieldPath {
	/// Parse `name(.name)*` where every name may carry `[index]` selectors.
	///
	/// Errors report the byte offset where parsing stopped.
	pub fn parse(input: &str) -> Result<Self> {
		let fail = |at: usize, reason: &'static str| PvError::InvalidFieldPath {
			path: input.to_owned(),
			at,
			reason,
		};
		if input.is_empty() {
			return Err(fail(0, "empty path"));
		}

		let mut cursor = TextCursor::new(input);
		let mut steps = Vec::new();
		loop {
			let name_at = cursor.pos();
			let name = cursor.take_ident();
			if name.is_empty() {
				return Err(fail(name_at, "expected member name"));
			}
			steps.push(PathStep::Field(name.to_owned()));

			while cursor.eat(b'[') {
				let index_at = cursor.pos();
				let digits = cursor.take_while(|byte| byte.is_ascii_digit());
				if digits.is_empty() {
					return Err(fail(index_at, "expected index"));
				}
				let index = digits.parse::<usize>().map_err(|_| fail(index_at, "index too large"))?;
				if !cursor.eat(b']') {
					return Err(fail(cursor.pos(), "expected ']'"));
				}
				steps.push(PathStep::Index(index));
			}

			if cursor.at_end() {
				return Ok(Self { steps });
			}
			if !cursor.eat(b'.') {
				return Err(fail(cursor.pos(), "expected '.' or '['"));
			}
		}
	}

	pub(crate) fn empty_error(&self) -> PvError {
		PvError::InvalidFieldPath {
			path: self.to_string(),
			at: 0,
			reason: "empty path",
		}
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (idx, step) in self.steps.iter().enumerate() {
			match step {
				PathStep::Field(name) if idx == 0 => f.write_str(name)?,
				PathStep::Field(name) => write!(f, ".{name}")?,
				PathStep::Index(index) => write!(f, "[{index}]")?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests;
