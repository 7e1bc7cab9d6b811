/*!
# Argline: Parse Results.
*/

use crate::{
	ParseError,
	Token,
};
use std::collections::BTreeMap;



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Parameter Value.
pub enum ParameterValue<'a> {
	/// # Flag (Present).
	///
	/// Flags are either set or absent, so this variant is effectively `true`.
	Flag,

	/// # String Value.
	String(&'a str),
}

impl<'a> ParameterValue<'a> {
	#[must_use]
	/// # As Bool.
	///
	/// Returns `true` for flags, `false` otherwise.
	pub const fn is_flag(&self) -> bool { matches!(self, Self::Flag) }

	#[must_use]
	/// # As String Slice.
	///
	/// Returns `None` for flags.
	pub const fn as_str(&self) -> Option<&'a str> {
		match *self {
			Self::Flag => None,
			Self::String(s) => Some(s),
		}
	}
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Parameter Result.
///
/// Every parameter active during a pass gets one of these, initially empty.
pub struct ParameterResult<'a> {
	/// # Value.
	pub value: Option<ParameterValue<'a>>,

	/// # Name Token.
	///
	/// This is the parameter name as written on the command line, e.g. `-v`
	/// rather than `--verbose`.
	pub token: Option<Token<'a>>,
}



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Parsed Result.
///
/// This is returned by the [`CliParser`](crate::CliParser) parse methods.
/// Values are keyed by the parameter identifier, i.e. the camel-cased long
/// name: `--dry-run` is keyed as `dryRun`.
///
/// If the pass failed, [`ParsedResult::error`] will say why; whatever was
/// collected before the failure is left in place.
pub struct ParsedResult<'a> {
	/// # Parameter Results (by Identifier).
	parameters: BTreeMap<&'a str, ParameterResult<'a>>,

	/// # Selected Action.
	pub(super) action: Option<&'a str>,

	/// # First Error.
	pub(super) error: Option<ParseError>,
}

impl<'a> ParsedResult<'a> {
	/// # Add an Empty Slot.
	///
	/// ## Panics
	///
	/// The compiler guarantees identifiers are unique, so a repeat here is a
	/// bug and will panic.
	pub(super) fn insert_empty(&mut self, identifier: &'a str) {
		let old = self.parameters.insert(identifier, ParameterResult::default());
		assert!(old.is_none(), "The identifier {identifier:?} was already written");
	}

	/// # Slot (Mutable).
	pub(super) fn slot_mut(&mut self, identifier: &str) -> Option<&mut ParameterResult<'a>> {
		self.parameters.get_mut(identifier)
	}
}

impl<'a> ParsedResult<'a> {
	#[must_use]
	/// # Is Ok?
	///
	/// Returns `true` if no error was encountered.
	pub const fn is_ok(&self) -> bool { self.error.is_none() }

	#[must_use]
	/// # Error.
	pub const fn error(&self) -> Option<&ParseError> { self.error.as_ref() }

	#[must_use]
	/// # Error Message.
	pub fn error_message(&self) -> Option<String> {
		self.error.as_ref().map(ToString::to_string)
	}

	#[must_use]
	/// # Selected Action.
	pub const fn action(&self) -> Option<&'a str> { self.action }

	#[must_use]
	/// # Get Parameter Result.
	///
	/// Returns `None` if the identifier wasn't active for the pass.
	pub fn get(&self, identifier: &str) -> Option<&ParameterResult<'a>> {
		self.parameters.get(identifier)
	}

	#[must_use]
	/// # Contains Identifier?
	pub fn contains(&self, identifier: &str) -> bool {
		self.parameters.contains_key(identifier)
	}

	#[must_use]
	/// # Flag Set?
	///
	/// Returns `true` if the flag was present on the command line.
	pub fn flag(&self, identifier: &str) -> bool {
		self.get(identifier).is_some_and(|r| r.value.is_some_and(|v| v.is_flag()))
	}

	#[must_use]
	/// # String Value.
	pub fn value(&self, identifier: &str) -> Option<&'a str> {
		self.get(identifier).and_then(|r| r.value).and_then(|v| v.as_str())
	}

	/// # Iterate Results.
	///
	/// Results are yielded in identifier order.
	pub fn iter(&self) -> impl Iterator<Item=(&'a str, &ParameterResult<'a>)> {
		self.parameters.iter().map(|(k, v)| (*k, v))
	}

	#[must_use]
	/// # Length.
	///
	/// Return the number of active parameters.
	pub fn len(&self) -> usize { self.parameters.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.parameters.is_empty() }

	/// # Into Result.
	///
	/// Convert into a standard `Result`, handy for `?`-style propagation.
	///
	/// ## Errors
	///
	/// Returns the parse error, if any.
	pub fn into_result(self) -> Result<Self, ParseError> {
		match self.error {
			Some(e) => Err(e),
			None => Ok(self),
		}
	}
}
