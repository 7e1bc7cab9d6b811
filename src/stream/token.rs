/*!
# Argline: Tokens.
*/

use crate::ParseError;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Syntax Error Kind.
///
/// This is attached to [`TokenKind::Error`] to note which naming rule an
/// argument broke.
pub enum SyntaxError {
	/// # Looks Long, Isn't.
	LongName,

	/// # Looks Short, Isn't.
	ShortName,
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Token Kind.
pub enum TokenKind {
	/// # Long Parameter, e.g. `--do-something`.
	LongParameter,

	/// # Short Parameter, e.g. `-d`.
	ShortParameter,

	/// # Anything Not Starting With a Dash.
	Literal,

	/// # Dash-Prefixed, But Malformed.
	Error(SyntaxError),

	/// # Past the Last Argument.
	EndOfStream,
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Token.
///
/// A single classified argument. The value borrows from the argument slice
/// the [`TokenStream`](crate::TokenStream) was built from.
pub struct Token<'a> {
	/// # Kind.
	kind: TokenKind,

	/// # Raw Value.
	///
	/// This is empty for [`TokenKind::EndOfStream`].
	value: &'a str,

	/// # Position in the Argument Slice.
	index: usize,
}

impl<'a> Token<'a> {
	#[must_use]
	/// # New.
	pub const fn new(kind: TokenKind, value: &'a str, index: usize) -> Self {
		Self { kind, value, index }
	}

	#[must_use]
	/// # Kind.
	pub const fn kind(&self) -> TokenKind { self.kind }

	#[must_use]
	/// # Raw Value.
	pub const fn value(&self) -> &'a str { self.value }

	#[must_use]
	/// # Argument Index.
	pub const fn index(&self) -> usize { self.index }

	#[must_use]
	/// # Is End of Stream?
	pub const fn is_end(&self) -> bool { matches!(self.kind, TokenKind::EndOfStream) }

	#[must_use]
	/// # Is Literal?
	pub const fn is_literal(&self) -> bool { matches!(self.kind, TokenKind::Literal) }

	#[must_use]
	/// # Syntax Error.
	///
	/// Return the corresponding [`ParseError`] if this is an error token.
	pub fn error(&self) -> Option<ParseError> {
		let TokenKind::Error(kind) = self.kind else { return None; };
		let value = self.value.to_owned();
		let index = self.index;
		Some(match kind {
			SyntaxError::LongName => ParseError::LongNameSyntax { value, index },
			SyntaxError::ShortName => ParseError::ShortNameSyntax { value, index },
		})
	}

	#[must_use]
	/// # Error Message.
	///
	/// Return the error message if this is an error token.
	pub fn error_message(&self) -> Option<String> {
		self.error().map(|e| e.to_string())
	}
}
