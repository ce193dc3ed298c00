//! Short code generation.
//!
//! Generated codes are candidates only. Nothing here checks them against
//! existing links; the backing service rejects duplicates at creation time.

use rand::Rng;

/// Number of characters in a generated code.
pub const CODE_LENGTH: usize = 6;

/// Characters a generated code is drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Generates a random short code of [`CODE_LENGTH`] lowercase ASCII letters.
///
/// Each character is drawn uniformly and independently from `a`-`z`
/// (26^6 ≈ 308M possible codes) using the thread-local RNG.
///
/// # Examples
///
/// ```
/// use link_gateway::utils::code_generator::generate_code;
///
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_lowercase()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| char::from(ALPHABET[rng.random_range(0..ALPHABET.len())]))
        .collect()
}
