//! Postback checksum computation.
//!
//! Signhost authenticates each postback with a SHA-1 digest over the
//! transaction id, the status code and the shared secret:
//!
//! ```text
//! sha1_hex("{id}||{status}|{shared_secret}")
//! ```
//!
//! Note the double pipe between the id and the status.

use sha1::{Digest, Sha1};
use subtle::ConstantTimeEq;

/// Compute the expected checksum for a postback.
///
/// Returns the lowercase hex encoding of the SHA-1 digest.
pub fn compute_checksum(transaction_id: &str, status: i64, shared_secret: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(format!("{}||{}|{}", transaction_id, status, shared_secret).as_bytes());
    hex::encode(hasher.finalize())
}

/// Constant-time comparison of two checksums.
///
/// Inputs of different length never match. For equal lengths the running
/// time does not depend on the position of the first differing byte.
pub fn checksums_match(expected: &str, provided: &str) -> bool {
    let (a, b) = (expected.as_bytes(), provided.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}
