/*!
# Argline

This crate provides a small, declarative CLI argument parser: describe your
tool's parameters and actions once with a [`CliSpec`], compile it into a
[`CliParser`], then feed it argument slices.

Unlike the everything-and-the-kitchen-sink crates, `Argline` is strict about
syntax and deliberately simple about semantics:
* Long parameters are two dashes and lower-case, dash-delimited segments, e.g. `--do-something`;
* Short parameters are one dash and one ASCII letter, e.g. `-d`;
* A parameter is either a flag, or takes exactly one following value;
* Parsing stops at the first problem, and reports it as a single [`ParseError`].

Rendering help, printing errors, exiting the process, etc., are all left _to
you_.



## Example

```
use argline::{CliAction, CliParameter, CliParser, CliSpec};

let parser = CliParser::new(
    CliSpec::new("example")
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
        )
).expect("The spec is bad!");

let args = ["-v", "build", "--target", "web"];
let mut result = parser.parse_command_line(&args);
parser.validate_required(&mut result);

match result.into_result() {
    Ok(result) => {
        assert_eq!(result.action(), Some("build"));
        assert!(result.flag("verbose"));
        assert_eq!(result.value("target"), Some("web"));
    },
    Err(e) => {
        eprintln!("Error: {e}");
        std::process::exit(1);
    },
}
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod error;
mod parser;
mod spec;
mod stream;
pub mod syntax;

pub use error::{
	ParseError,
	SpecError,
};
pub use parser::{
	CliParser,
	ParameterDetail,
	ParameterResult,
	ParameterValue,
	ParsedResult,
};
pub use spec::{
	CliAction,
	CliParameter,
	CliSpec,
	FlagParameter,
	StringParameter,
};
pub use stream::{
	SyntaxError,
	Token,
	TokenKind,
	TokenStream,
};
