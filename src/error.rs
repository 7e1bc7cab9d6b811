/*!
# Argline: Errors.

There are two kinds of error here: [`SpecError`] is returned when compiling a
badly-declared [`CliSpec`](crate::CliSpec), and [`ParseError`] describes the
first thing wrong with a user's command line.
*/

use thiserror::Error;



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Specification Error.
///
/// These indicate a mistake in the declared spec rather than bad user input,
/// so are raised once, at [`CliParser::new`](crate::CliParser::new).
pub enum SpecError {
	#[error("The parameter name \"{0}\" is already defined")]
	/// # Duplicate Long Name.
	DuplicateLongName(String),

	#[error("The short name \"{short}\" is already in use by \"{existing}\"")]
	/// # Duplicate Short Name.
	DuplicateShortName {
		/// # The Repeated Short Name.
		short: String,

		/// # Long Name of the First Owner.
		existing: String,
	},

	#[error("The identifier \"{identifier}\" derived from \"{long}\" is already in use by \"{existing}\"")]
	/// # Duplicate Identifier.
	///
	/// Distinct long names can (rarely) map to the same identifier, e.g.
	/// `--a-b` and `--a--b`.
	DuplicateIdentifier {
		/// # The Colliding Identifier.
		identifier: String,

		/// # The Offending Long Name.
		long: String,

		/// # Long Name of the First Owner.
		existing: String,
	},

	#[error("The action name \"{0}\" is already defined")]
	/// # Duplicate Action.
	DuplicateAction(String),

	#[error("The action \"{action}\" is associated with a parameter \"{parameter}\" that was not defined")]
	/// # Undefined Associated Parameter.
	UndefinedParameter {
		/// # Action Name.
		action: String,

		/// # The Unresolved Long Name.
		parameter: String,
	},
}

impl SpecError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a short, generic description of the error.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::DuplicateLongName(_) => "Duplicate parameter name.",
			Self::DuplicateShortName { .. } => "Duplicate short name.",
			Self::DuplicateIdentifier { .. } => "Duplicate identifier.",
			Self::DuplicateAction(_) => "Duplicate action.",
			Self::UndefinedParameter { .. } => "Undefined parameter.",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Error)]
/// # Parse Error.
///
/// A parse pass stops at the first problem it finds; this describes it. The
/// `Display` implementation provides the user-facing message.
///
/// Argument values are held as owned strings so errors can outlive the
/// argument slice they came from.
pub enum ParseError {
	#[error("The argument {value:?} looks like a long parameter name but has incorrect syntax: The name must be lower-case and use dash delimiters (e.g. \"--do-a-thing\")")]
	/// # Malformed Long Name.
	LongNameSyntax {
		/// # Raw Argument.
		value: String,

		/// # Argument Index.
		index: usize,
	},

	#[error("The argument {value:?} looks like a short parameter name but has incorrect syntax: The name must be a dash followed by a single upper-case or lower-case letter (e.g. \"-a\")")]
	/// # Malformed Short Name.
	ShortNameSyntax {
		/// # Raw Argument.
		value: String,

		/// # Argument Index.
		index: usize,
	},

	#[error("Unrecognized command line parameter \"{value}\"")]
	/// # Unknown Parameter.
	Unrecognized {
		/// # Parameter As Written.
		value: String,

		/// # Argument Index.
		index: usize,
	},

	#[error("Missing argument {argument_name} for parameter \"{parameter}\"")]
	/// # String Parameter Without a Value.
	MissingArgument {
		/// # Declared Argument Label.
		argument_name: String,

		/// # Parameter As Written.
		parameter: String,

		/// # Index of the Parameter Name.
		index: usize,
	},

	#[error("Unexpected argument \"{value}\"")]
	/// # Stray Literal.
	UnexpectedArgument {
		/// # Raw Argument.
		value: String,

		/// # Argument Index.
		index: usize,
	},

	#[error("Unrecognized action \"{0}\"")]
	/// # Unknown Action.
	UnrecognizedAction(String),

	#[error("Missing required parameter \"{0}\"")]
	/// # Required Parameter Not Provided.
	///
	/// This is only ever set by
	/// [`CliParser::validate_required`](crate::CliParser::validate_required).
	MissingRequired(String),
}

impl ParseError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a short, generic description of the error.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::LongNameSyntax { .. } => "Invalid long parameter name.",
			Self::ShortNameSyntax { .. } => "Invalid short parameter name.",
			Self::Unrecognized { .. } => "Unrecognized parameter.",
			Self::MissingArgument { .. } => "Missing argument.",
			Self::UnexpectedArgument { .. } => "Unexpected argument.",
			Self::UnrecognizedAction(_) => "Unrecognized action.",
			Self::MissingRequired(_) => "Missing required parameter.",
		}
	}

	#[must_use]
	/// # Argument Index.
	///
	/// Return the position of the offending argument, if the error is tied to
	/// one.
	pub const fn index(&self) -> Option<usize> {
		match self {
			Self::LongNameSyntax { index, .. }
				| Self::ShortNameSyntax { index, .. }
				| Self::Unrecognized { index, .. }
				| Self::MissingArgument { index, .. }
				| Self::UnexpectedArgument { index, .. } => Some(*index),
			Self::UnrecognizedAction(_) | Self::MissingRequired(_) => None,
		}
	}
}
