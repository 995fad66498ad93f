//! Backend signing secret generation.

use rand::RngCore;
use rand::rngs::OsRng;

/// Number of random bytes behind each secret (64 hex characters).
pub const SECRET_BYTES: usize = 32;

/// Generate `<prefix><64 lowercase hex chars>` from the OS CSPRNG.
#[must_use]
pub fn generate_secret(prefix: &str) -> String {
    generate_secret_with(prefix, &mut OsRng)
}

/// Same as [`generate_secret`] with a caller-supplied RNG.
pub fn generate_secret_with(prefix: &str, rng: &mut impl RngCore) -> String {
    let mut bytes = [0u8; SECRET_BYTES];
    rng.fill_bytes(&mut bytes);
    format!("{prefix}{}", hex::encode(bytes))
}
