/*!
# Argline: Token Syntax.

The lexical rules shared by the token stream and the spec compiler. These are
all pure functions; the patterns are compiled once and reused for the life of
the process.
*/

use regex::Regex;
use std::sync::LazyLock;



/// # Long Parameter Name.
///
/// Example: `--do-something`.
static RE_LONG_NAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("^-(-[a-z0-9]+)+$").unwrap());

/// # Short Parameter Name.
///
/// Example: `-d`.
static RE_SHORT_NAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("^-[a-zA-Z]$").unwrap());

/// # Environment Variable Name.
///
/// POSIX utilities restrict these to upper-case letters, digits, and
/// underscores, and they may not begin with a digit.
///
/// Example: `THE_SETTING`.
static RE_ENV_VAR: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("^[A-Z_][A-Z0-9_]*$").unwrap());

/// # Action Name.
///
/// Example: `do-something`, `cache:clear`.
static RE_ACTION_NAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new("^[a-z][a-z0-9]*([-:][a-z0-9]+)*$").unwrap());



#[must_use]
/// # Is Long Parameter Name?
///
/// Two dashes followed by one or more dash-delimited, lower-case alphanumeric
/// segments.
///
/// ## Examples
///
/// ```
/// use argline::syntax;
///
/// assert!(syntax::is_long_name("--do-something"));
/// assert!(! syntax::is_long_name("--Do-Something"));
/// ```
pub fn is_long_name(raw: &str) -> bool { RE_LONG_NAME.is_match(raw) }

#[must_use]
/// # Is Short Parameter Name?
///
/// A single dash followed by exactly one ASCII letter, either case.
///
/// ## Examples
///
/// ```
/// use argline::syntax;
///
/// assert!(syntax::is_short_name("-d"));
/// assert!(syntax::is_short_name("-D"));
/// assert!(! syntax::is_short_name("-1"));
/// ```
pub fn is_short_name(raw: &str) -> bool { RE_SHORT_NAME.is_match(raw) }

#[must_use]
/// # Is Environment Variable Name?
pub fn is_environment_variable(raw: &str) -> bool { RE_ENV_VAR.is_match(raw) }

#[must_use]
/// # Is Action Name?
///
/// Lower-case alphanumeric segments delimited by `-` or `:`, not beginning
/// with a digit.
pub fn is_action_name(raw: &str) -> bool { RE_ACTION_NAME.is_match(raw) }

#[must_use]
/// # Long Name to Identifier.
///
/// Convert a long parameter name into the camel-case identifier used to key
/// parse results.
///
/// Segments beginning with something other than a letter are prefixed with an
/// underscore rather than capitalized, keeping the mapping reversible.
///
/// ## Examples
///
/// ```
/// use argline::syntax;
///
/// assert_eq!(syntax::long_name_to_identifier("--do-something"), "doSomething");
/// assert_eq!(
///     syntax::long_name_to_identifier("--example-flag-123-456"),
///     "exampleFlag_123_456",
/// );
/// ```
pub fn long_name_to_identifier(long_name: &str) -> String {
	let mut out = String::with_capacity(long_name.len());

	for part in long_name.split('-') {
		let mut chars = part.chars();
		let Some(first) = chars.next() else { continue; };

		if first.is_ascii_alphabetic() {
			// camelCase keeps the first part as written.
			if out.is_empty() { out.push_str(part); }
			else {
				out.push(first.to_ascii_uppercase());
				out.push_str(chars.as_str());
			}
		}
		else {
			out.push('_');
			out.push_str(part);
		}
	}

	out
}
