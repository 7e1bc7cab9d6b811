/*!
# Argline: Token Stream.

This module contains the lexer half of the crate: a forward-only cursor that
classifies one raw argument at a time.
*/

mod token;

pub use token::{
	SyntaxError,
	Token,
	TokenKind,
};
use crate::syntax;



#[derive(Debug, Clone)]
/// # Token Stream.
///
/// `TokenStream` walks an argument slice from front to back, classifying the
/// argument under the cursor as a [`Token`]. The current token is computed
/// eagerly — on construction and after each [`TokenStream::advance`] — so
/// [`TokenStream::current_token`] is just a read.
///
/// Classification works like so:
/// * Arguments starting with `--` are long parameters, or errors if they don't match `--lower-case-segments`;
/// * Arguments starting with `-` are short parameters, or errors if they aren't exactly a dash and one ASCII letter;
/// * Everything else is a literal;
/// * Past the end of the slice is end-of-stream.
///
/// Note that there is no special handling for `--` separators or glued
/// `--key=val` pairs; both are simply errors.
///
/// ## Examples
///
/// ```
/// use argline::{TokenKind, TokenStream};
///
/// let args = ["--name", "Björk", "-v"];
/// let mut stream = TokenStream::new(&args);
///
/// assert_eq!(stream.current_token().kind(), TokenKind::LongParameter);
/// stream.advance();
/// assert_eq!(stream.current_token().kind(), TokenKind::Literal);
/// assert_eq!(stream.current_token().value(), "Björk");
/// stream.advance();
/// assert_eq!(stream.current_token().kind(), TokenKind::ShortParameter);
/// stream.advance();
/// assert!(stream.is_done());
/// ```
pub struct TokenStream<'a, S> {
	/// # Raw Arguments.
	args: &'a [S],

	/// # Cursor.
	pos: usize,

	/// # Token Under the Cursor.
	current: Token<'a>,
}

impl<'a, S: AsRef<str>> TokenStream<'a, S> {
	#[must_use]
	/// # New.
	pub fn new(args: &'a [S]) -> Self {
		Self {
			args,
			pos: 0,
			current: classify(args, 0),
		}
	}

	#[must_use]
	/// # Current Token.
	pub const fn current_token(&self) -> Token<'a> { self.current }

	#[must_use]
	/// # Is Done?
	///
	/// Returns `true` if the cursor has passed the last argument.
	pub const fn is_done(&self) -> bool { self.current.is_end() }

	#[must_use]
	/// # Raw Arguments.
	pub const fn args(&self) -> &'a [S] { self.args }

	/// # Advance.
	///
	/// Move the cursor forward one position and classify whatever is there.
	///
	/// ## Panics
	///
	/// This will panic if the stream is already at the end. Callers must check
	/// [`TokenStream::is_done`] (or the current token's kind) first.
	pub fn advance(&mut self) {
		assert!(
			self.pos < self.args.len(),
			"TokenStream cannot advance past the end of the stream",
		);
		self.pos += 1;
		self.current = classify(self.args, self.pos);
	}
}



/// # Classify.
///
/// Build the token for position `pos`. This never fails; malformed arguments
/// become error tokens.
fn classify<S: AsRef<str>>(args: &[S], pos: usize) -> Token<'_> {
	let Some(arg) = args.get(pos).map(AsRef::<str>::as_ref) else {
		return Token::new(TokenKind::EndOfStream, "", pos);
	};

	let kind =
		if arg.starts_with("--") {
			if syntax::is_long_name(arg) { TokenKind::LongParameter }
			else { TokenKind::Error(SyntaxError::LongName) }
		}
		else if arg.starts_with('-') {
			if syntax::is_short_name(arg) { TokenKind::ShortParameter }
			else { TokenKind::Error(SyntaxError::ShortName) }
		}
		else { TokenKind::Literal };

	tracing::trace!(index = pos, value = arg, ?kind, "classified argument");
	Token::new(kind, arg, pos)
}
