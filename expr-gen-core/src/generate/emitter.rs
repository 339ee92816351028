use std::io::Write;

use rand::Rng;

use super::expression::{NumericRange, build_expression};
use super::identifier::random_identifier;

/// Chance, out of [`ASSIGN_DRAW_BOUND`], that a line gets an assignment prefix.
const ASSIGN_CHANCE: u32 = 2;
const ASSIGN_DRAW_BOUND: u32 = 10;

/// Literal counts drawn per line: 2 to 11 inclusive.
const MIN_TOKEN_COUNT: usize = 2;
const MAX_TOKEN_COUNT: usize = 12; // exclusive

/// Writes batches of random expression lines to an output stream.
///
/// # Responsibilities
/// - Draw an independent literal count for every line
/// - Occasionally prefix a line with an `identifier = ` assignment target
/// - Write each expression as one newline-terminated line
///
/// # Invariants
/// - Lines are independent; no state survives from one line to the next
/// - Every line matches `[identifier = ] literal (operator literal)*`
#[derive(Debug)]
pub struct LineEmitter {
	range: NumericRange,
}

impl LineEmitter {
	/// Creates an emitter drawing all literals from `range`.
	pub fn new(range: NumericRange) -> Self {
		Self { range }
	}

	/// Emits `total_count - 1` expression lines to `out`.
	///
	/// The loop bound is exclusive, so `emit_lines(n)` writes `n - 1` lines
	/// and anything below 2 writes nothing. Downstream consumers count on
	/// exactly this; pass `n + 1` to get `n` lines.
	///
	/// # Errors
	/// Returns an error if writing to `out` fails (e.g. broken pipe). The
	/// generation itself cannot fail.
	pub fn emit_lines<R: Rng, W: Write>(
		&self,
		rng: &mut R,
		out: &mut W,
		total_count: usize,
	) -> Result<(), Box<dyn std::error::Error>> {
		for _ in 1..total_count {
			self.emit_line(rng, out)?;
		}
		Ok(())
	}

	/// Emits a single line: an optional assignment prefix plus one
	/// expression of 2 to 11 literals.
	fn emit_line<R: Rng, W: Write>(
		&self,
		rng: &mut R,
		out: &mut W,
	) -> Result<(), Box<dyn std::error::Error>> {
		if rng.random_range(0..ASSIGN_DRAW_BOUND) < ASSIGN_CHANCE {
			write!(out, "{} = ", random_identifier(rng))?;
		}
		let token_count = rng.random_range(MIN_TOKEN_COUNT..MAX_TOKEN_COUNT);
		let expression = build_expression(rng, token_count, self.range)?;
		writeln!(out, "{}", expression)?;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::generate::expression::OPERATORS;
	use crate::generate::identifier::{MAX_LENGTH, MIN_LENGTH};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn emit(seed: u64, total_count: usize) -> String {
		let mut rng = StdRng::seed_from_u64(seed);
		let emitter = LineEmitter::new(NumericRange::default());
		let mut out = Vec::new();
		emitter.emit_lines(&mut rng, &mut out, total_count).unwrap();
		String::from_utf8(out).unwrap()
	}

	fn is_expression(tokens: &[&str]) -> bool {
		if tokens.is_empty() || tokens.len() % 2 == 0 {
			return false;
		}
		tokens.iter().enumerate().all(|(position, token)| {
			if position % 2 == 0 {
				token.parse::<u32>().is_ok()
			} else {
				token.len() == 1 && OPERATORS.contains(&token.chars().next().unwrap())
			}
		})
	}

	#[test]
	fn one_and_below_emit_nothing() {
		assert!(emit(1, 0).is_empty());
		assert!(emit(1, 1).is_empty());
	}

	#[test]
	fn five_emits_four_lines() {
		assert_eq!(emit(2, 5).lines().count(), 4);
	}

	#[test]
	fn lines_are_expressions_or_assignments() {
		let output = emit(3, 201);
		assert_eq!(output.lines().count(), 200);
		for line in output.lines() {
			let tokens: Vec<&str> = line.split_whitespace().collect();
			let expression = if tokens.get(1) == Some(&"=") {
				let target = tokens[0];
				assert!((MIN_LENGTH..=MAX_LENGTH).contains(&target.len()));
				assert!(target.chars().all(|c| c.is_ascii_lowercase()));
				&tokens[2..]
			} else {
				&tokens[..]
			};
			assert!(is_expression(expression), "malformed line: {}", line);

			let literal_count = expression.iter().filter(|t| t.parse::<u32>().is_ok()).count();
			assert!(
				(MIN_TOKEN_COUNT..MAX_TOKEN_COUNT).contains(&literal_count),
				"unexpected literal count {} in: {}",
				literal_count,
				line
			);
		}
	}

	#[test]
	fn assignment_prefix_frequency_is_about_one_in_five() {
		let output = emit(4, 10_001);
		let lines: Vec<&str> = output.lines().collect();
		assert_eq!(lines.len(), 10_000);

		let prefixed = lines.iter().filter(|line| line.contains(" = ")).count();
		let fraction = prefixed as f64 / lines.len() as f64;
		assert!((0.16..=0.24).contains(&fraction), "prefix fraction {}", fraction);
	}

	struct BrokenWriter;

	impl Write for BrokenWriter {
		fn write(&mut self, _buffer: &[u8]) -> std::io::Result<usize> {
			Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "broken pipe"))
		}

		fn flush(&mut self) -> std::io::Result<()> {
			Ok(())
		}
	}

	#[test]
	fn write_failures_propagate() {
		let mut rng = StdRng::seed_from_u64(5);
		let emitter = LineEmitter::new(NumericRange::default());
		assert!(emitter.emit_lines(&mut rng, &mut BrokenWriter, 3).is_err());
	}
}
