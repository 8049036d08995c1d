/// Bounded cursor over expression text, shared by the path and schema parsers.
pub(crate) struct TextCursor<'a> {
	input: &'a str,
	pos: usize,
}

impl<'a> TextCursor<'a> {
	/// Create a cursor at byte 0.
	pub(crate) fn new(input: &'a str) -> Self {
		Self { input, pos: 0 }
	}

	/// Current byte offset.
	pub(crate) fn pos(&self) -> usize {
		self.pos
	}

	/// Whether every byte has been consumed.
	pub(crate) fn at_end(&self) -> bool {
		self.pos >= self.input.len()
	}

	/// Consume `byte` if it is next.
	pub(crate) fn eat(&mut self, byte: u8) -> bool {
		if self.input.as_bytes().get(self.pos) == Some(&byte) {
			self.pos += 1;
			true
		} else {
			false
		}
	}

	/// Consume the longest run of bytes matching `pred`; may be empty.
	pub(crate) fn take_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
		let input = self.input;
		let bytes = input.as_bytes();
		let start = self.pos;
		while self.pos < bytes.len() && pred(bytes[self.pos]) {
			self.pos += 1;
		}
		&input[start..self.pos]
	}

	/// Consume an identifier (`[A-Za-z0-9_]*`); may be empty.
	pub(crate) fn take_ident(&mut self) -> &'a str {
		self.take_while(|byte| byte.is_ascii_alphanumeric() || byte == b'_')
	}

	/// Skip ASCII whitespace.
	pub(crate) fn skip_ws(&mut self) {
		self.take_while(|byte| byte.is_ascii_whitespace());
	}
}
