/*!
# Benchmark: `argline::TokenStream`
*/

use brunch::{
	Bench,
	benches,
};
use argline::TokenStream;

/// # Arguments.
static ARGS: [&str; 8] = [
	"-k",
	"--key",
	"val",
	"--prefix-color",
	"199",
	"--Bad-Name",
	"/foo/bar",
	"-",
];

/// # Walk the Stream.
fn walk(args: &[&str]) -> usize {
	let mut stream = TokenStream::new(args);
	let mut len = 0;
	while ! stream.is_done() {
		len += stream.current_token().value().len();
		stream.advance();
	}
	len
}

benches!(
	Bench::new("argline::TokenStream::new(--prefix-color)")
		.run(|| TokenStream::new(&ARGS[3..4]).current_token()),

	Bench::new("argline::TokenStream::new(-k)")
		.run(|| TokenStream::new(&ARGS[..1]).current_token()),

	Bench::spacer(),

	Bench::new("argline::TokenStream::advance(8)")
		.run(|| walk(&ARGS)),
);
