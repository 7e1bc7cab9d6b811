/*!
# Argline: Debug

This example parses any arguments fed to it against a small demo spec and
displays the results.

Set `RUST_LOG=argline=trace` to watch the tokenizer at work.
*/

use argline::{
	CliAction,
	CliParameter,
	CliParser,
	CliSpec,
};
use tracing_subscriber::EnvFilter;



fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let parser = match CliParser::new(spec()) {
		Ok(p) => p,
		Err(e) => {
			eprintln!("\x1b[1;91mBad Spec:\x1b[0m {e}");
			std::process::exit(1);
		},
	};

	let args: Vec<String> = std::env::args().skip(1).collect();
	let mut result = parser.parse_command_line(&args);
	parser.validate_required(&mut result);

	println!("\x1b[2mAction:\x1b[0m {:?}", result.action());
	for (k, v) in result.iter() {
		println!("\x1b[2m-----\x1b[0m\n{k}: {:?}", v.value);
	}
	println!("\x1b[2m-----\x1b[0m");

	if let Some(e) = result.error() {
		println!("\x1b[1;91mError:\x1b[0m {e}");
		std::process::exit(1);
	}
}

/// # Demo Spec.
fn spec() -> CliSpec {
	CliSpec::new("debug")
		.with_global_parameter(
			CliParameter::flag("--verbose", "Show more output.").with_short_name("-v")
		)
		.with_global_parameter(
			CliParameter::string("--config", "PATH", "Use a specific config file.")
				.with_short_name("-c")
		)
		.with_action_parameter(
			CliParameter::string("--target", "NAME", "The build target.")
				.with_short_name("-t")
				.with_required(true)
		)
		.with_action_parameter(CliParameter::flag("--force", "Don't ask."))
		.with_action(
			CliAction::new("build", "Build the project.").with_parameter("--target")
		)
		.with_action(
			CliAction::new("cache:clear", "Empty the cache.")
				.with_summary("Clear caches.")
				.with_parameter("--force")
		)
}
