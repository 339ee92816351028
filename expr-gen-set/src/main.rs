use std::env;
use std::io::{self, BufWriter, Write};

use expr_gen_core::generate::emitter::LineEmitter;
use expr_gen_core::generate::expression::NumericRange;

/// Emits a batch of random expression lines to standard output.
///
/// Usage: `expr-gen-set <length>`; emits `length - 1` lines. The bound is
/// exclusive, kept as-is for downstream consumers counting on it.
fn run() -> Result<(), Box<dyn std::error::Error>> {
	let args: Vec<String> = env::args().collect();
	let total_count: usize = args
		.get(1)
		.ok_or("Usage: expr-gen-set <length>")?
		.parse()?;

	log::debug!("emitting {} expression lines", total_count.saturating_sub(1));

	let emitter = LineEmitter::new(NumericRange::default());
	let stdout = io::stdout();
	let mut out = BufWriter::new(stdout.lock());
	emitter.emit_lines(&mut rand::rng(), &mut out, total_count)?;
	out.flush()?;
	Ok(())
}

fn main() {
	env_logger::init();
	if let Err(error) = run() {
		eprintln!("Error: {}", error);
		std::process::exit(1);
	}
}
