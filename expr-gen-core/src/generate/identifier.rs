use rand::Rng;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Shortest identifier the generator produces.
pub const MIN_LENGTH: usize = 2;
/// Longest identifier the generator produces.
pub const MAX_LENGTH: usize = 7;

/// Draws a random lowercase identifier of 2 to 7 letters.
///
/// Characters are drawn uniformly with replacement, so repeated letters
/// are possible. Used as the assignment target of generated statements.
pub fn random_identifier<R: Rng>(rng: &mut R) -> String {
	let length = rng.random_range(MIN_LENGTH..=MAX_LENGTH);
	(0..length)
		.map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
		.collect()
}
