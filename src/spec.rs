/*!
# Argline: Specification.

These are the declarative building blocks handed to
[`CliParser::new`](crate::CliParser::new). They can be built up in code with
the builder-style helpers, or deserialized from JSON (or any other `serde`
format) using camel-cased keys, e.g. `longName`, with parameters tagged by
`"kind": "flag"` or `"kind": "string"`.

```
use argline::{CliAction, CliParameter, CliSpec};

let spec = CliSpec::new("example")
    .with_global_parameter(
        CliParameter::flag("--verbose", "Show more output.")
            .with_short_name("-v")
    )
    .with_action_parameter(
        CliParameter::string("--target", "NAME", "The build target.")
            .with_required(true)
    )
    .with_action(
        CliAction::new("build", "Build the project.")
            .with_parameter("--target")
    );

assert_eq!(spec.global_parameters.len(), 1);
assert_eq!(spec.actions[0].summary(), "Build the project.");
```
*/

use serde::{
	Deserialize,
	Serialize,
};



#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// # CLI Specification.
pub struct CliSpec {
	/// # Tool Name.
	///
	/// This isn't used by the parser itself, but is handy for help screens.
	pub tool_name: String,

	#[serde(default)]
	/// # Global Parameters.
	///
	/// These are active for every parse pass.
	pub global_parameters: Vec<CliParameter>,

	#[serde(default)]
	/// # Action Parameters.
	///
	/// These are only active when an associated action is selected.
	pub action_parameters: Vec<CliParameter>,

	#[serde(default)]
	/// # Actions.
	pub actions: Vec<CliAction>,
}

impl CliSpec {
	#[must_use]
	/// # New.
	pub fn new<S: Into<String>>(tool_name: S) -> Self {
		Self {
			tool_name: tool_name.into(),
			..Self::default()
		}
	}

	#[must_use]
	/// # With Global Parameter.
	pub fn with_global_parameter(mut self, parameter: CliParameter) -> Self {
		self.global_parameters.push(parameter);
		self
	}

	#[must_use]
	/// # With Action Parameter.
	pub fn with_action_parameter(mut self, parameter: CliParameter) -> Self {
		self.action_parameters.push(parameter);
		self
	}

	#[must_use]
	/// # With Action.
	pub fn with_action(mut self, action: CliAction) -> Self {
		self.actions.push(action);
		self
	}
}



#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
/// # Parameter Declaration.
///
/// A parameter is either a boolean flag, or a string-valued option that
/// consumes the argument following it.
pub enum CliParameter {
	/// # Flag.
	Flag(FlagParameter),

	/// # String-Valued.
	String(StringParameter),
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// # Flag Parameter.
pub struct FlagParameter {
	/// # Long Name, e.g. `--do-something`.
	pub long_name: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	/// # Short Name, e.g. `-d`.
	pub short_name: Option<String>,

	/// # Description.
	pub description: String,

	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	/// # Required?
	pub required: bool,
}

#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// # String Parameter.
pub struct StringParameter {
	/// # Long Name, e.g. `--count`.
	pub long_name: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	/// # Short Name, e.g. `-c`.
	pub short_name: Option<String>,

	/// # Description.
	pub description: String,

	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	/// # Required?
	pub required: bool,

	/// # Argument Name.
	///
	/// The label shown in help and error messages, e.g. `NUMBER` for
	/// `--count NUMBER`. By convention this is upper-case letters, digits,
	/// and underscores.
	pub argument_name: String,
}

/// ## Construction.
impl CliParameter {
	#[must_use]
	/// # New Flag.
	pub fn flag<L, D>(long_name: L, description: D) -> Self
	where L: Into<String>, D: Into<String> {
		Self::Flag(FlagParameter {
			long_name: long_name.into(),
			short_name: None,
			description: description.into(),
			required: false,
		})
	}

	#[must_use]
	/// # New String Parameter.
	pub fn string<L, A, D>(long_name: L, argument_name: A, description: D) -> Self
	where L: Into<String>, A: Into<String>, D: Into<String> {
		Self::String(StringParameter {
			long_name: long_name.into(),
			short_name: None,
			description: description.into(),
			required: false,
			argument_name: argument_name.into(),
		})
	}

	#[must_use]
	/// # With Short Name.
	pub fn with_short_name<S: Into<String>>(mut self, short_name: S) -> Self {
		let short_name = Some(short_name.into());
		match &mut self {
			Self::Flag(p) => { p.short_name = short_name; },
			Self::String(p) => { p.short_name = short_name; },
		}
		self
	}

	#[must_use]
	/// # With Required.
	pub fn with_required(mut self, required: bool) -> Self {
		match &mut self {
			Self::Flag(p) => { p.required = required; },
			Self::String(p) => { p.required = required; },
		}
		self
	}
}

/// ## Getters.
impl CliParameter {
	#[must_use]
	/// # Long Name.
	pub fn long_name(&self) -> &str {
		match self {
			Self::Flag(p) => &p.long_name,
			Self::String(p) => &p.long_name,
		}
	}

	#[must_use]
	/// # Short Name.
	pub fn short_name(&self) -> Option<&str> {
		match self {
			Self::Flag(p) => p.short_name.as_deref(),
			Self::String(p) => p.short_name.as_deref(),
		}
	}

	#[must_use]
	/// # Description.
	pub fn description(&self) -> &str {
		match self {
			Self::Flag(p) => &p.description,
			Self::String(p) => &p.description,
		}
	}

	#[must_use]
	/// # Required?
	pub const fn required(&self) -> bool {
		match self {
			Self::Flag(p) => p.required,
			Self::String(p) => p.required,
		}
	}

	#[must_use]
	/// # Argument Name.
	///
	/// Flags don't have one.
	pub fn argument_name(&self) -> Option<&str> {
		match self {
			Self::Flag(_) => None,
			Self::String(p) => Some(&p.argument_name),
		}
	}
}



#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// # Action Declaration.
///
/// An action is a named sub-mode of the tool, e.g. the `build` in
/// `example build --target web`. It may activate additional parameters,
/// referenced by long name.
pub struct CliAction {
	/// # Name.
	pub action_name: String,

	/// # Description.
	///
	/// This is the detailed description for the action's own help page.
	pub description: String,

	#[serde(default, skip_serializing_if = "Option::is_none")]
	/// # Summary.
	///
	/// A short blurb for the tool's main help page.
	pub summary: Option<String>,

	#[serde(default)]
	/// # Associated Parameters (Long Names).
	pub associated_parameter_long_names: Vec<String>,
}

impl CliAction {
	#[must_use]
	/// # New.
	pub fn new<N, D>(action_name: N, description: D) -> Self
	where N: Into<String>, D: Into<String> {
		Self {
			action_name: action_name.into(),
			description: description.into(),
			summary: None,
			associated_parameter_long_names: Vec::new(),
		}
	}

	#[must_use]
	/// # With Summary.
	pub fn with_summary<S: Into<String>>(mut self, summary: S) -> Self {
		self.summary = Some(summary.into());
		self
	}

	#[must_use]
	/// # With Parameter.
	///
	/// Associate a parameter (by long name) with this action.
	pub fn with_parameter<S: Into<String>>(mut self, long_name: S) -> Self {
		self.associated_parameter_long_names.push(long_name.into());
		self
	}

	#[must_use]
	/// # With Parameters.
	pub fn with_parameters<I, S>(mut self, long_names: I) -> Self
	where I: IntoIterator<Item=S>, S: Into<String> {
		self.associated_parameter_long_names.extend(long_names.into_iter().map(Into::into));
		self
	}

	#[must_use]
	/// # Summary.
	///
	/// Return the summary, falling back to the description if there isn't
	/// one.
	pub fn summary(&self) -> &str {
		self.summary.as_deref().unwrap_or(&self.description)
	}
}
