use std::env;
use std::io::{self, Write};

use expr_gen_core::generate::expression::{NumericRange, build_expression};

/// Prints one random expression with the requested number of literals.
///
/// Usage: `expr-gen-expression <length>`
fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();
    let token_count: usize = args
        .get(1)
        .ok_or("Usage: expr-gen-expression <length>")?
        .parse()?;

    let expression = build_expression(&mut rand::rng(), token_count, NumericRange::default())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", expression)?;
    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {}", error);
        std::process::exit(1);
    }
}
