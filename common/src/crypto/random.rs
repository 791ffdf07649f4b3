//! Cryptographically secure random number generation
//!
//! Random words for standalone minting runs are drawn from the operating
//! system's CSPRNG. thread_rng() MUST NOT be used for anything that decides
//! which trait a token receives.
use primitive_types::U256;
use rand::rngs::OsRng;
use rand::RngCore;

/// Generate cryptographically secure random bytes
///
/// # Example
/// ```
/// use randnft_common::crypto::random::secure_random_bytes;
///
/// let seed = secure_random_bytes::<32>();
/// assert_eq!(seed.len(), 32);
/// ```
pub fn secure_random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

/// Generate a cryptographically secure 256-bit random word
pub fn secure_random_word() -> U256 {
    U256::from_big_endian(&secure_random_bytes::<32>())
}
