//! Shared-secret token generation and comparison.
//!
//! The whole API is gated by one process-wide token. This module lives in
//! `core` so the server and the `generate-token` binary share it.

use rand::Rng;
use sha2::{Digest, Sha256};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Shortest token produced by [`generate_auth_token`].
pub const MIN_TOKEN_LENGTH: usize = 8;

/// Longest token produced by [`generate_auth_token`].
pub const MAX_TOKEN_LENGTH: usize = 20;

/// Environment variable holding the expected token.
pub const AUTH_TOKEN_ENV: &str = "AUTH_TOKEN";

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate a random alphanumeric token between [`MIN_TOKEN_LENGTH`] and
/// [`MAX_TOKEN_LENGTH`] characters long.
pub fn generate_auth_token() -> String {
    let mut rng = rand::rng();
    let length = rng.random_range(MIN_TOKEN_LENGTH..=MAX_TOKEN_LENGTH);
    (&mut rng)
        .sample_iter(&rand::distr::Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Comparison
// ---------------------------------------------------------------------------

/// Check a presented token against the expected one.
///
/// Both sides are hashed first so the comparison always runs over two
/// 32-byte digests regardless of the presented length.
pub fn tokens_match(presented: &str, expected: &str) -> bool {
    let presented = Sha256::digest(presented.as_bytes());
    let expected = Sha256::digest(expected.as_bytes());
    presented
        .iter()
        .zip(expected.iter())
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}
