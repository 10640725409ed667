//! Common definitions shared across the FE1 components.

/// Unified error type for all FE1 operations.
///
/// Every variant is raised while validating inputs, before the first Feistel
/// round runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The modulus is at most 1, or cannot be split into two factors that are both at least 2.
    #[error("modulus cannot be used for FE1")]
    InvalidModulus,
    /// The value to encrypt or decrypt is not below the modulus.
    #[error("input is not in range [0, n)")]
    InputOutOfRange,
    /// The tweak is empty or its length does not fit in 32 bits.
    #[error("invalid tweak")]
    InvalidTweak,
    /// The MAC primitive rejected the key.
    #[error("key rejected by HMAC-SHA256")]
    InvalidKey,
    /// The encoded modulus is longer than [`MAX_N_BYTES`].
    #[error("encoded modulus is {len} bytes, at most {} permitted", MAX_N_BYTES)]
    ModulusTooLarge {
        /// Length of the minimal big-endian encoding of the modulus.
        len: usize,
    },
    /// The factor pair is out of order; unreachable with a correct factorizer.
    #[error("FE1 rounds: a < b")]
    InvalidRounds,
}

/// Largest permitted encoded modulus, in bytes.
pub const MAX_N_BYTES: usize = 128 / 8;

/// Direction of cipher operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Direction::Encrypt => "encrypt",
            Direction::Decrypt => "decrypt",
        }
    }
}
