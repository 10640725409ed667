//! HMAC-SHA256 round function for FE1.
//!
//! A `RoundFunction` is built once per encrypt/decrypt call. It binds the key,
//! the modulus and the tweak into `macNT`, then evaluates
//! `F(round, r) = HMAC(key, macNT || BE32(round) || BE32(len(r)) || r)`
//! with `r` in its minimal big-endian encoding.

use hmac::{Hmac, Mac};
use num_bigint::BigUint;
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::codec::{encode, to_be_bytes32};
use crate::common::{Error, MAX_N_BYTES};

type HmacSha256 = Hmac<Sha256>;

/// Output length of HMAC-SHA256 in bytes.
pub const MAC_OUTPUT_LENGTH: usize = 32;

/// Call-scoped keyed round function.
///
/// Not shared between calls: each encryption or decryption constructs its own.
pub struct RoundFunction {
    mac: HmacSha256,
    mac_nt: Zeroizing<[u8; MAC_OUTPUT_LENGTH]>,
}

impl RoundFunction {
    /// Derive the round function for `(key, modulus, tweak)`.
    ///
    /// # Errors
    /// - `Error::ModulusTooLarge` if the encoded modulus exceeds [`MAX_N_BYTES`].
    /// - `Error::InvalidKey` if HMAC-SHA256 rejects the key.
    /// - `Error::InvalidTweak` if the tweak length does not fit in 32 bits.
    pub fn new(key: &[u8], modulus: &BigUint, tweak: &[u8]) -> Result<Self, Error> {
        let encoded_modulus = encode(modulus);
        if encoded_modulus.len() > MAX_N_BYTES {
            return Err(Error::ModulusTooLarge {
                len: encoded_modulus.len(),
            });
        }
        let tweak_len = u32::try_from(tweak.len()).map_err(|_| Error::InvalidTweak)?;

        let mac = HmacSha256::new_from_slice(key).map_err(|_| Error::InvalidKey)?;

        let mut nt = mac.clone();
        nt.update(&to_be_bytes32(encoded_modulus.len() as u32));
        nt.update(&encoded_modulus);
        nt.update(&to_be_bytes32(tweak_len));
        nt.update(tweak);

        let mut mac_nt = Zeroizing::new([0u8; MAC_OUTPUT_LENGTH]);
        mac_nt.copy_from_slice(&nt.finalize().into_bytes());

        Ok(Self { mac, mac_nt })
    }

    /// Evaluate the round function for round number `round` on input `r`.
    ///
    /// The MAC output is read as an unsigned big-endian integer.
    pub fn f(&self, round: u32, r: &BigUint) -> BigUint {
        let r_bin = encode(r);

        let mut mac = self.mac.clone();
        mac.update(self.mac_nt.as_slice());
        mac.update(&to_be_bytes32(round));
        mac.update(&to_be_bytes32(r_bin.len() as u32));
        mac.update(&r_bin);

        BigUint::from_bytes_be(&mac.finalize().into_bytes())
    }

    #[cfg(test)]
    pub(crate) fn mac_nt(&self) -> &[u8] {
        self.mac_nt.as_slice()
    }
}
