/*!
# Argline: Parser.

This module contains the [`CliParser`] engine, which compiles a [`CliSpec`]
into lookup tables once, then resolves any number of argument slices against
it.
*/

mod result;

pub use result::{
	ParameterResult,
	ParameterValue,
	ParsedResult,
};
use crate::{
	CliAction,
	CliParameter,
	CliSpec,
	ParseError,
	SpecError,
	syntax,
	Token,
	TokenKind,
	TokenStream,
};
use std::collections::BTreeMap;



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parameter Detail.
///
/// A compiled [`CliParameter`] and its derived identifier.
pub struct ParameterDetail {
	/// # Declaration.
	parameter: CliParameter,

	/// # Identifier.
	identifier: String,
}

impl ParameterDetail {
	#[must_use]
	/// # Declaration.
	pub const fn parameter(&self) -> &CliParameter { &self.parameter }

	#[must_use]
	/// # Identifier.
	///
	/// The result key for this parameter, e.g. `doSomething` for
	/// `--do-something`.
	pub fn identifier(&self) -> &str { &self.identifier }
}



#[derive(Debug, Clone)]
/// # Action Detail.
struct ActionDetail {
	/// # Declaration.
	action: CliAction,

	/// # Action-Scoped Parameters.
	///
	/// Indexes into `CliParser::parameters`. Globals are always active, so
	/// any the action happens to reference are left out.
	parameters: Vec<usize>,
}



#[derive(Debug, Clone)]
/// # CLI Parser.
///
/// `CliParser` is the compiled form of a [`CliSpec`]. Compilation checks the
/// declarations for duplicate and dangling names, derives each parameter's
/// identifier, and indexes everything for quick lookup; after that the parser
/// is immutable, so one instance can be reused (or shared across threads)
/// for any number of passes.
///
/// Each pass makes a single trip through the arguments, stopping at the first
/// problem. There are three entry points:
/// * [`CliParser::parse`] only knows about global parameters;
/// * [`CliParser::parse_action`] adds the named action's parameters;
/// * [`CliParser::parse_command_line`] picks the action from the first literal argument.
///
/// `required` declarations are _not_ enforced during the pass itself; call
/// [`CliParser::validate_required`] afterward if you want that.
///
/// ## Examples
///
/// ```
/// use argline::{CliParameter, CliParser, CliSpec};
///
/// let parser = CliParser::new(
///     CliSpec::new("example")
///         .with_global_parameter(
///             CliParameter::flag("--verbose", "Be chatty.")
///                 .with_short_name("-v")
///         )
///         .with_global_parameter(
///             CliParameter::string("--name", "NAME", "Who goes there?")
///         )
/// ).unwrap();
///
/// let result = parser.parse(&["-v", "--name", "Björk"]);
/// assert!(result.is_ok());
/// assert!(result.flag("verbose"));
/// assert_eq!(result.value("name"), Some("Björk"));
///
/// let result = parser.parse(&["--name"]);
/// assert_eq!(
///     result.error_message().as_deref(),
///     Some("Missing argument NAME for parameter \"--name\""),
/// );
/// ```
pub struct CliParser {
	/// # Tool Name.
	tool_name: String,

	/// # Parameters.
	///
	/// Globals come first, in declaration order, followed by the
	/// action-scoped parameters.
	parameters: Vec<ParameterDetail>,

	/// # Number of Global Parameters.
	globals: usize,

	/// # Parameters by Long Name.
	by_long_name: BTreeMap<String, usize>,

	/// # Parameters by Short Name.
	by_short_name: BTreeMap<String, usize>,

	/// # Parameters by Identifier.
	by_identifier: BTreeMap<String, usize>,

	/// # Actions.
	actions: Vec<ActionDetail>,

	/// # Actions by Name.
	by_action_name: BTreeMap<String, usize>,
}

/// ## Compilation.
impl CliParser {
	/// # New.
	///
	/// Compile a spec.
	///
	/// ## Errors
	///
	/// This will return an error if any long name, short name, identifier,
	/// or action name is declared twice, or if an action references a
	/// parameter that doesn't exist.
	pub fn new(spec: CliSpec) -> Result<Self, SpecError> {
		let CliSpec { tool_name, global_parameters, action_parameters, actions } = spec;

		let mut out = Self {
			tool_name,
			parameters: Vec::with_capacity(global_parameters.len() + action_parameters.len()),
			globals: global_parameters.len(),
			by_long_name: BTreeMap::new(),
			by_short_name: BTreeMap::new(),
			by_identifier: BTreeMap::new(),
			actions: Vec::with_capacity(actions.len()),
			by_action_name: BTreeMap::new(),
		};

		for parameter in global_parameters.into_iter().chain(action_parameters) {
			out.add_parameter(parameter)?;
		}

		for action in actions {
			out.add_action(action)?;
		}

		tracing::debug!(
			tool = %out.tool_name,
			global_parameters = out.globals,
			action_parameters = out.parameters.len() - out.globals,
			actions = out.actions.len(),
			"compiled CLI spec"
		);

		Ok(out)
	}

	/// # Add Parameter.
	fn add_parameter(&mut self, parameter: CliParameter) -> Result<(), SpecError> {
		let long = parameter.long_name();
		if self.by_long_name.contains_key(long) {
			return Err(SpecError::DuplicateLongName(long.to_owned()));
		}

		if let Some(short) = parameter.short_name() {
			if let Some(&existing) = self.by_short_name.get(short) {
				return Err(SpecError::DuplicateShortName {
					short: short.to_owned(),
					existing: self.parameters[existing].parameter.long_name().to_owned(),
				});
			}
		}

		let identifier = syntax::long_name_to_identifier(long);
		if let Some(&existing) = self.by_identifier.get(&identifier) {
			return Err(SpecError::DuplicateIdentifier {
				identifier,
				long: long.to_owned(),
				existing: self.parameters[existing].parameter.long_name().to_owned(),
			});
		}

		let idx = self.parameters.len();
		self.by_long_name.insert(long.to_owned(), idx);
		if let Some(short) = parameter.short_name() {
			self.by_short_name.insert(short.to_owned(), idx);
		}
		self.by_identifier.insert(identifier.clone(), idx);
		self.parameters.push(ParameterDetail { parameter, identifier });

		Ok(())
	}

	/// # Add Action.
	fn add_action(&mut self, action: CliAction) -> Result<(), SpecError> {
		if self.by_action_name.contains_key(&action.action_name) {
			return Err(SpecError::DuplicateAction(action.action_name));
		}

		let mut parameters = Vec::with_capacity(action.associated_parameter_long_names.len());
		for long in &action.associated_parameter_long_names {
			let Some(&idx) = self.by_long_name.get(long) else {
				return Err(SpecError::UndefinedParameter {
					action: action.action_name.clone(),
					parameter: long.clone(),
				});
			};

			if self.globals <= idx && ! parameters.contains(&idx) {
				parameters.push(idx);
			}
		}

		self.by_action_name.insert(action.action_name.clone(), self.actions.len());
		self.actions.push(ActionDetail { action, parameters });

		Ok(())
	}
}

/// ## Getters.
impl CliParser {
	#[must_use]
	/// # Tool Name.
	pub fn tool_name(&self) -> &str { &self.tool_name }

	#[must_use]
	/// # Global Parameters.
	pub fn global_parameters(&self) -> &[ParameterDetail] {
		&self.parameters[..self.globals]
	}

	#[must_use]
	/// # Action Parameters.
	///
	/// Return all action-scoped parameters, regardless of action.
	pub fn action_parameters(&self) -> &[ParameterDetail] {
		&self.parameters[self.globals..]
	}

	#[must_use]
	/// # Parameter by Long Name.
	pub fn parameter(&self, long_name: &str) -> Option<&ParameterDetail> {
		self.by_long_name.get(long_name).map(|&idx| &self.parameters[idx])
	}

	#[must_use]
	/// # Action by Name.
	pub fn action(&self, action_name: &str) -> Option<&CliAction> {
		self.action_detail(action_name).map(|a| &a.action)
	}

	/// # Actions.
	///
	/// Iterate the declared actions in order.
	pub fn actions(&self) -> impl Iterator<Item=&CliAction> {
		self.actions.iter().map(|a| &a.action)
	}

	/// # Parameters for Action.
	///
	/// Iterate the parameters specific to a given action, excluding globals.
	/// This will be empty if the action doesn't exist.
	pub fn parameters_for_action<'a>(&'a self, action_name: &str)
	-> impl Iterator<Item=&'a ParameterDetail> {
		self.action_detail(action_name)
			.into_iter()
			.flat_map(move |a| a.parameters.iter().map(move |&idx| &self.parameters[idx]))
	}

	/// # Action Detail by Name.
	fn action_detail(&self, action_name: &str) -> Option<&ActionDetail> {
		self.by_action_name.get(action_name).map(|&idx| &self.actions[idx])
	}
}

/// ## Parsing.
impl CliParser {
	/// # Parse (Globals Only).
	///
	/// Resolve the arguments against the global parameters. Action-scoped
	/// parameters and literal arguments are errors in this mode.
	pub fn parse<'a, S: AsRef<str>>(&'a self, args: &'a [S]) -> ParsedResult<'a> {
		self.run(args, None, false)
	}

	/// # Parse (For Action).
	///
	/// Resolve the arguments against the global parameters plus those
	/// associated with `action_name`. The action name itself should not be
	/// part of `args`.
	///
	/// If the action is unknown, the result will contain an error and no
	/// arguments will have been read.
	pub fn parse_action<'a, S: AsRef<str>>(&'a self, action_name: &str, args: &'a [S])
	-> ParsedResult<'a> {
		if let Some(action) = self.action_detail(action_name) {
			self.run(args, Some(action), false)
		}
		else {
			let mut result = ParsedResult::default();
			self.activate(&mut result, 0..self.globals);
			result.error = Some(ParseError::UnrecognizedAction(action_name.to_owned()));
			result
		}
	}

	/// # Parse (Full Command Line).
	///
	/// Resolve the arguments against the global parameters until the first
	/// literal, which is taken to be the action name. From then on, that
	/// action's parameters are active too.
	///
	/// ## Examples
	///
	/// ```
	/// use argline::{CliAction, CliParameter, CliParser, CliSpec};
	///
	/// let parser = CliParser::new(
	///     CliSpec::new("example")
	///         .with_global_parameter(CliParameter::flag("--quiet", "Shh."))
	///         .with_action_parameter(CliParameter::flag("--fast", "Zoom."))
	///         .with_action(
	///             CliAction::new("build", "Build it.").with_parameter("--fast")
	///         )
	/// ).unwrap();
	///
	/// let result = parser.parse_command_line(&["--quiet", "build", "--fast"]);
	/// assert!(result.is_ok());
	/// assert_eq!(result.action(), Some("build"));
	/// assert!(result.flag("quiet"));
	/// assert!(result.flag("fast"));
	/// ```
	pub fn parse_command_line<'a, S: AsRef<str>>(&'a self, args: &'a [S])
	-> ParsedResult<'a> {
		self.run(args, None, true)
	}

	/// # Validate Required Parameters.
	///
	/// Check that every active `required` parameter received a value, setting
	/// an error on the result for the first that didn't. Results that already
	/// have an error are left alone.
	///
	/// ## Examples
	///
	/// ```
	/// use argline::{CliParameter, CliParser, CliSpec};
	///
	/// let parser = CliParser::new(
	///     CliSpec::new("example")
	///         .with_global_parameter(
	///             CliParameter::string("--out", "PATH", "Output.")
	///                 .with_required(true)
	///         )
	/// ).unwrap();
	///
	/// let args: [&str; 0] = [];
	/// let mut result = parser.parse(&args);
	/// assert!(result.is_ok());
	///
	/// parser.validate_required(&mut result);
	/// assert_eq!(
	///     result.error_message().as_deref(),
	///     Some("Missing required parameter \"--out\""),
	/// );
	/// ```
	pub fn validate_required(&self, result: &mut ParsedResult<'_>) {
		if result.error.is_some() { return; }

		let missing = self.parameters.iter().find(|p|
			p.parameter.required() &&
			result.get(&p.identifier).is_some_and(|r| r.value.is_none())
		);

		if let Some(p) = missing {
			result.error = Some(ParseError::MissingRequired(p.parameter.long_name().to_owned()));
		}
	}

	/// # Run a Pass.
	///
	/// This is the workhorse behind the parse methods. If `select` is true, the
	/// first literal argument picks the action.
	fn run<'a, S: AsRef<str>>(
		&'a self,
		args: &'a [S],
		mut action: Option<&'a ActionDetail>,
		select: bool,
	) -> ParsedResult<'a> {
		let mut stream = TokenStream::new(args);
		let mut result = ParsedResult::default();
		self.activate(&mut result, 0..self.globals);
		if let Some(a) = action {
			self.activate_action(&mut result, a);
		}

		loop {
			let token = stream.current_token();
			match token.kind() {
				TokenKind::EndOfStream => break,
				TokenKind::Error(_) => { result.error = token.error(); },
				TokenKind::LongParameter | TokenKind::ShortParameter => {
					stream.advance();
					let table =
						if matches!(token.kind(), TokenKind::LongParameter) { &self.by_long_name }
						else { &self.by_short_name };

					let unrecognized = || ParseError::Unrecognized {
						value: token.value().to_owned(),
						index: token.index(),
					};

					// Only active parameters have slots.
					let res = match table.get(token.value()).map(|&idx| &self.parameters[idx]) {
						Some(detail) => match result.slot_mut(&detail.identifier) {
							Some(slot) => resolve(detail, token, slot, &mut stream),
							None => Err(unrecognized()),
						},
						None => Err(unrecognized()),
					};
					if let Err(e) = res { result.error = Some(e); }
				},
				TokenKind::Literal =>
					if select && action.is_none() {
						stream.advance();
						if let Some(a) = self.action_detail(token.value()) {
							tracing::trace!(action = %a.action.action_name, "selected action");
							self.activate_action(&mut result, a);
							action = Some(a);
						}
						else {
							result.error = Some(ParseError::UnrecognizedAction(token.value().to_owned()));
						}
					}
					else {
						result.error = Some(ParseError::UnexpectedArgument {
							value: token.value().to_owned(),
							index: token.index(),
						});
					},
			}

			if result.error.is_some() { break; }
		}

		if let Some(e) = &result.error {
			tracing::debug!(error = %e, index = ?e.index(), "parse failed");
		}

		result
	}

	/// # Activate Parameters.
	///
	/// Add empty result slots for the parameters in `range`.
	fn activate<'a>(&'a self, result: &mut ParsedResult<'a>, range: std::ops::Range<usize>) {
		for p in &self.parameters[range] {
			result.insert_empty(&p.identifier);
		}
	}

	/// # Activate Action.
	///
	/// Record the action and add empty result slots for its parameters.
	fn activate_action<'a>(&'a self, result: &mut ParsedResult<'a>, action: &'a ActionDetail) {
		result.action = Some(&action.action.action_name);
		for &idx in &action.parameters {
			result.insert_empty(&self.parameters[idx].identifier);
		}
	}
}



/// # Resolve Parameter Value.
///
/// Record a matched parameter, consuming its argument if it needs one. The
/// stream should already be positioned just past the name token.
fn resolve<'a, S: AsRef<str>>(
	detail: &ParameterDetail,
	token: Token<'a>,
	slot: &mut ParameterResult<'a>,
	stream: &mut TokenStream<'a, S>,
) -> Result<(), ParseError> {
	slot.token = Some(token);

	match &detail.parameter {
		CliParameter::Flag(_) => {
			slot.value = Some(ParameterValue::Flag);
		},
		CliParameter::String(p) => {
			let arg = stream.current_token();
			if ! arg.is_literal() {
				return Err(ParseError::MissingArgument {
					argument_name: p.argument_name.clone(),
					parameter: token.value().to_owned(),
					index: token.index(),
				});
			}
			stream.advance();
			slot.value = Some(ParameterValue::String(arg.value()));
		},
	}

	tracing::trace!(identifier = %detail.identifier, value = ?slot.value, "resolved parameter");
	Ok(())
}



#[cfg(test)]
mod test {
	use super::*;

	/// # Test Spec.
	fn spec() -> CliSpec {
		CliSpec::new("example")
			.with_global_parameter(
				CliParameter::flag("--verbose", "Be chatty.").with_short_name("-v")
			)
			.with_global_parameter(
				CliParameter::string("--name", "NAME", "Who goes there?")
					.with_short_name("-n")
			)
			.with_global_parameter(CliParameter::flag("--example-flag-123-456", "Odd."))
			.with_action_parameter(
				CliParameter::flag("--fast", "Zoom.").with_short_name("-f")
			)
			.with_action_parameter(
				CliParameter::string("--target", "TARGET", "Build target.")
					.with_required(true)
			)
			.with_action_parameter(CliParameter::flag("--force", "Really."))
			.with_action(
				CliAction::new("build", "Build it.")
					.with_parameters(["--fast", "--target", "--verbose"])
			)
			.with_action(
				CliAction::new("cache:clear", "Clear it.")
					.with_parameter("--force")
			)
	}

	/// # Test Parser.
	fn parser() -> CliParser {
		CliParser::new(spec()).expect("Test spec failed to compile.")
	}

	#[test]
	fn t_compile() {
		let parser = parser();
		assert_eq!(parser.tool_name(), "example");
		assert_eq!(parser.global_parameters().len(), 3);
		assert_eq!(parser.action_parameters().len(), 3);
		assert_eq!(
			parser.parameter("--example-flag-123-456").map(ParameterDetail::identifier),
			Some("exampleFlag_123_456"),
		);
		assert_eq!(
			parser.actions().map(|a| a.action_name.as_str()).collect::<Vec<_>>(),
			["build", "cache:clear"],
		);

		// Globals referenced by actions are not repeated.
		assert_eq!(
			parser.parameters_for_action("build")
				.map(ParameterDetail::identifier)
				.collect::<Vec<_>>(),
			["fast", "target"],
		);
		assert_eq!(parser.parameters_for_action("nope").count(), 0);
		assert!(parser.action("cache:clear").is_some());
	}

	#[test]
	fn t_compile_errors() {
		let e = CliParser::new(
			spec().with_action_parameter(CliParameter::flag("--verbose", "Again."))
		);
		assert_eq!(e.unwrap_err(), SpecError::DuplicateLongName("--verbose".to_owned()));

		let e = CliParser::new(
			spec().with_global_parameter(
				CliParameter::flag("--vroom", "Vroom.").with_short_name("-v")
			)
		);
		assert_eq!(
			e.unwrap_err(),
			SpecError::DuplicateShortName {
				short: "-v".to_owned(),
				existing: "--verbose".to_owned(),
			},
		);

		let e = CliParser::new(
			spec().with_global_parameter(CliParameter::flag("--fast--", "Hmm."))
		);
		assert!(matches!(e, Err(SpecError::DuplicateIdentifier { .. })));

		let e = CliParser::new(
			spec().with_action(CliAction::new("build", "Again."))
		);
		assert_eq!(e.unwrap_err(), SpecError::DuplicateAction("build".to_owned()));

		let e = CliParser::new(
			spec().with_action(CliAction::new("test", "Test.").with_parameter("--nope"))
		);
		assert_eq!(
			e.unwrap_err().to_string(),
			"The action \"test\" is associated with a parameter \"--nope\" that was not defined",
		);
	}

	#[test]
	fn t_parse_flag() {
		let parser = parser();
		let args = ["-v"];
		let result = parser.parse(&args);
		assert!(result.is_ok(), "Unexpected error: {:?}", result.error());
		assert!(result.flag("verbose"));
		assert_eq!(result.get("verbose").and_then(|r| r.token).map(|t| t.value()), Some("-v"));

		// Everything global is present, but action stuff isn't.
		assert_eq!(result.len(), 3);
		assert!(result.contains("name"));
		assert!(result.get("name").is_some_and(|r| r.value.is_none() && r.token.is_none()));
		assert!(! result.contains("fast"));
		assert!(result.action().is_none());

		// Repeats are fine; the last one wins.
		let args = ["--verbose", "-v"];
		let result = parser.parse(&args);
		assert!(result.is_ok());
		assert_eq!(result.get("verbose").and_then(|r| r.token).map(|t| t.index()), Some(1));
	}

	#[test]
	fn t_parse_string() {
		let parser = parser();
		let args = ["--name", "Björk", "-n", "Guðmundsdóttir"];
		let result = parser.parse(&args);
		assert!(result.is_ok());
		assert_eq!(result.value("name"), Some("Guðmundsdóttir"));

		let args = ["--name"];
		let result = parser.parse(&args);
		assert!(
			result.error_message().is_some_and(|m| m.contains("Missing argument")),
			"Expected a missing argument error.",
		);
		assert!(result.value("name").is_none());
		assert_eq!(result.get("name").and_then(|r| r.token).map(|t| t.value()), Some("--name"));

		// The message uses the name as written.
		let args = ["-n", "-v"];
		let result = parser.parse(&args);
		assert_eq!(
			result.error_message().as_deref(),
			Some("Missing argument NAME for parameter \"-n\""),
		);
		assert!(! result.flag("verbose"), "Parsing should have stopped.");
	}

	#[test]
	fn t_parse_errors() {
		let parser = parser();

		let args = ["--unknown-flag", "-v"];
		let result = parser.parse(&args);
		assert_eq!(
			result.error(),
			Some(&ParseError::Unrecognized { value: "--unknown-flag".to_owned(), index: 0 }),
		);
		assert!(
			result.error_message().is_some_and(|m| m.contains("Unrecognized command line parameter")),
			"Expected an unrecognized error.",
		);
		assert!(! result.flag("verbose"), "Parsing should have stopped.");

		let args = ["-v", "--Bad"];
		let result = parser.parse(&args);
		assert!(matches!(result.error(), Some(ParseError::LongNameSyntax { index: 1, .. })));
		assert!(
			result.error_message().is_some_and(|m| m.contains("looks like a long parameter name")),
			"Expected a long name syntax error.",
		);
		assert!(result.flag("verbose"), "Earlier values should be kept.");

		// Syntax errors don't care about the spec at all.
		let empty = CliParser::new(CliSpec::new("empty")).expect("Empty spec failed.");
		let result = empty.parse(&args[1..]);
		assert!(matches!(result.error(), Some(ParseError::LongNameSyntax { index: 0, .. })));
		assert!(result.is_empty());

		let args = ["-12"];
		let result = parser.parse(&args);
		assert!(matches!(result.error(), Some(ParseError::ShortNameSyntax { .. })));

		// Action parameters are unknown in a global pass.
		let args = ["--fast"];
		let result = parser.parse(&args);
		assert!(matches!(result.error(), Some(ParseError::Unrecognized { .. })));

		// As are stray literals.
		let args = ["-v", "build"];
		let result = parser.parse(&args);
		assert_eq!(
			result.error_message().as_deref(),
			Some("Unexpected argument \"build\""),
		);
	}

	#[test]
	fn t_parse_no_leaks() {
		let parser = parser();

		let args1 = ["-v", "--name", "one"];
		let args2 = ["--name", "two"];
		let result1 = parser.parse(&args1);
		let result2 = parser.parse(&args2);

		assert!(result1.flag("verbose"));
		assert_eq!(result1.value("name"), Some("one"));
		assert!(! result2.flag("verbose"));
		assert_eq!(result2.value("name"), Some("two"));

		// And once more, with an error.
		let args3 = ["--nope"];
		let result3 = parser.parse(&args3);
		assert!(! result3.is_ok());
		assert!(result1.is_ok());
		assert!(result2.is_ok());
	}

	#[test]
	fn t_parse_action() {
		let parser = parser();

		let args = ["-f", "--target", "web", "-v"];
		let result = parser.parse_action("build", &args);
		assert!(result.is_ok(), "Unexpected error: {:?}", result.error());
		assert_eq!(result.action(), Some("build"));
		assert!(result.flag("fast"));
		assert!(result.flag("verbose"));
		assert_eq!(result.value("target"), Some("web"));
		assert_eq!(result.len(), 5);

		// Other actions' parameters are not allowed.
		let args = ["--force"];
		let result = parser.parse_action("build", &args);
		assert!(matches!(result.error(), Some(ParseError::Unrecognized { .. })));
		let result = parser.parse_action("cache:clear", &args);
		assert!(result.is_ok());
		assert!(result.flag("force"));

		let result = parser.parse_action("deploy", &args);
		assert_eq!(result.error(), Some(&ParseError::UnrecognizedAction("deploy".to_owned())));
		assert!(result.contains("verbose"));
		assert!(result.action().is_none());
	}

	#[test]
	fn t_parse_command_line() {
		let parser = parser();

		let args = ["-v", "build", "--target", "web"];
		let result = parser.parse_command_line(&args);
		assert!(result.is_ok(), "Unexpected error: {:?}", result.error());
		assert_eq!(result.action(), Some("build"));
		assert!(result.flag("verbose"));
		assert_eq!(result.value("target"), Some("web"));

		// Action parameters before the action are not yet known.
		let args = ["--target", "web", "build"];
		let result = parser.parse_command_line(&args);
		assert!(matches!(result.error(), Some(ParseError::Unrecognized { index: 0, .. })));

		// Only one action.
		let args = ["build", "cache:clear"];
		let result = parser.parse_command_line(&args);
		assert!(matches!(result.error(), Some(ParseError::UnexpectedArgument { index: 1, .. })));

		let args = ["deploy"];
		let result = parser.parse_command_line(&args);
		assert_eq!(result.error_message().as_deref(), Some("Unrecognized action \"deploy\""));

		// No action is fine too.
		let args = ["-v"];
		let result = parser.parse_command_line(&args);
		assert!(result.is_ok());
		assert!(result.action().is_none());
	}

	#[test]
	fn t_validate_required() {
		let parser = parser();

		let args = ["build"];
		let mut result = parser.parse_command_line(&args);
		assert!(result.is_ok());
		parser.validate_required(&mut result);
		assert_eq!(
			result.error(),
			Some(&ParseError::MissingRequired("--target".to_owned())),
		);

		let args = ["build", "--target", "web"];
		let mut result = parser.parse_command_line(&args);
		parser.validate_required(&mut result);
		assert!(result.is_ok());

		// Inactive parameters aren't checked.
		let args: [&str; 0] = [];
		let mut result = parser.parse(&args);
		parser.validate_required(&mut result);
		assert!(result.is_ok());

		// Existing errors are left alone.
		let args = ["build", "--nope"];
		let mut result = parser.parse_command_line(&args);
		parser.validate_required(&mut result);
		assert!(matches!(result.error(), Some(ParseError::Unrecognized { .. })));
	}

	#[test]
	fn t_json_profile() {
		let spec: CliSpec = serde_json::from_str(r#"{
			"toolName": "widget",
			"globalParameters": [
				{ "kind": "flag", "longName": "--quiet", "shortName": "-q", "description": "Shh." },
				{ "kind": "string", "longName": "--log-level", "argumentName": "LEVEL", "description": "Level." }
			],
			"actionParameters": [],
			"actions": []
		}"#).expect("Profile JSON failed to deserialize.");
		let parser = CliParser::new(spec).expect("Profile spec failed to compile.");

		for (args, quiet, level, error) in [
			(&["-q"][..], true, None, false),
			(&["--log-level", "trace"][..], false, Some("trace"), false),
			(&["-q", "--log-level", "--quiet"][..], true, None, true),
			(&[][..], false, None, false),
		] {
			let result = parser.parse(args);
			assert_eq!(result.flag("quiet"), quiet, "Bug: {args:?}");
			assert_eq!(result.value("logLevel"), level, "Bug: {args:?}");
			assert_eq!(result.is_ok(), ! error, "Bug: {args:?}");
		}
	}

	#[test]
	fn t_send_sync() {
		/// # Assert Send + Sync.
		const fn is_send_sync<T: Send + Sync>() {}
		is_send_sync::<CliParser>();
	}
}
