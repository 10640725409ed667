//! Byte-level encodings shared by the factorizer and the round function.
//!
//! Integers are framed as minimal big-endian byte strings and lengths as fixed
//! 32-bit big-endian words. These encodings feed the keyed MAC directly, so
//! they must be bit-exact for ciphertexts to interoperate.

use num_bigint::BigUint;
use num_traits::Zero;

/// Encode `n` as a big-endian byte string with no leading zero byte.
///
/// Zero encodes to the empty string.
pub fn encode(n: &BigUint) -> Vec<u8> {
    if n.is_zero() {
        return Vec::new();
    }
    n.to_bytes_be()
}

/// Fixed 4-byte big-endian encoding of a 32-bit integer.
#[inline]
pub const fn to_be_bytes32(i: u32) -> [u8; 4] {
    i.to_be_bytes()
}

/// Fixed 4-byte little-endian encoding of a 32-bit integer.
#[inline]
pub const fn to_le_bytes32(i: u32) -> [u8; 4] {
    i.to_le_bytes()
}

/// Return a copy of `source` with the byte order reversed.
pub fn reverse(source: &[u8]) -> Vec<u8> {
    source.iter().rev().copied().collect()
}
