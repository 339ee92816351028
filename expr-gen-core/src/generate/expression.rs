use rand::Rng;

/// Operator symbols an expression may contain.
///
/// Each operator is selected uniformly (probability 1/4, no weighting).
pub const OPERATORS: [char; 4] = ['+', '/', '*', '-'];

/// Exclusive upper bound used by the command-line generators.
pub const DEFAULT_UPPER_BOUND: u32 = 500;

/// Sampling bounds for the numeric literals of an expression.
///
/// Two historical variants of the generator exist: one draws literals from
/// `[1, upper_bound)`, the other from `[0, upper_bound)`. Both stay
/// reachable through the `allow_zero` switch rather than being unified,
/// since they are observably different distributions.
///
/// # Invariants
/// - The range `[low, upper_bound)` is never empty
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange {
	/// Exclusive upper bound for literal values.
	upper_bound: u32,
	/// Whether 0 is a possible literal (low bound 0 instead of 1).
	allow_zero: bool,
}

impl NumericRange {
	/// Returns the range used by the command-line generators: `[1, 500)`.
	pub fn default() -> Self {
		Self { upper_bound: DEFAULT_UPPER_BOUND, allow_zero: false }
	}

	/// Creates a range drawing literals from `[low, upper_bound)`, where
	/// `low` is 0 if `allow_zero` is set and 1 otherwise.
	///
	/// # Errors
	/// Returns an error if the range would be empty.
	pub fn new(upper_bound: u32, allow_zero: bool) -> Result<Self, String> {
		let range = Self { upper_bound, allow_zero };
		if upper_bound <= range.low() {
			return Err(format!(
				"Upper bound must be greater than {}, got {}",
				range.low(),
				upper_bound
			));
		}
		Ok(range)
	}

	/// Lowest literal value this range can produce.
	pub fn low(&self) -> u32 {
		if self.allow_zero { 0 } else { 1 }
	}

	/// Exclusive upper bound of this range.
	pub fn upper_bound(&self) -> u32 {
		self.upper_bound
	}

	/// Draws one literal uniformly from `[low, upper_bound)`.
	pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
		rng.random_range(self.low()..self.upper_bound)
	}
}

/// Builds one flat expression string.
///
/// The expression starts with a literal and appends `token_count - 1`
/// `operator literal` pairs, all separated by single spaces. Splitting the
/// result on whitespace therefore yields exactly `2 * token_count - 1`
/// tokens, strictly alternating literal/operator, with no surrounding
/// whitespace.
///
/// # Parameters
/// - `rng`: Random source; pass a seeded generator for reproducible output.
/// - `token_count`: Number of numeric literals to emit (must be >= 1;
///   1 yields a single literal and no operators).
/// - `range`: Sampling bounds applied to every literal.
///
/// # Errors
/// Returns an error if `token_count` is 0. Valid input never fails: every
/// draw produces a well-formed token.
pub fn build_expression<R: Rng>(
	rng: &mut R,
	token_count: usize,
	range: NumericRange,
) -> Result<String, String> {
	if token_count < 1 {
		return Err("Token count must be >= 1".to_owned());
	}

	let mut expression = range.sample(rng).to_string();
	for _ in 1..token_count {
		let operator = OPERATORS[rng.random_range(0..OPERATORS.len())];
		expression.push_str(&format!(" {} {}", operator, range.sample(rng)));
	}
	Ok(expression)
}
