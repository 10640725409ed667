//! FE1 format-preserving encryption over `[0, n)`.
//!
//! FE1 is the Feistel-based scheme from Bellare, Ristenpart, Rogaway and
//! Stegers, "Format-Preserving Encryption". The modulus is split into
//! `n = a * b`, and each of the three rounds maps
//! `x = left * b + right` to `a * right + ((left + F(round, right)) mod a)`.
//!
//! Security properties:
//! - Ciphertexts stay in `[0, n)`; the map is a bijection for fixed `(n, key, tweak)`
//! - Deterministic: equal inputs give equal outputs, so tweaks should separate domains
//! - No authentication
//! - Prime moduli are rejected, as a Feistel split needs both halves to hold two values

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::codec::encode;
use crate::common::{Direction, Error, MAX_N_BYTES};
use crate::number_theory::factor;
use crate::round::RoundFunction;

/// Number of Feistel rounds.
///
/// The minimum safe count is `2 + log_a(b)`, and `a >= b` keeps that at most 3.
pub const ROUNDS: u32 = 3;

/// Encrypt `plaintext` in `[0, modulus)` under `key` and `tweak`.
///
/// # Errors
/// - `Error::InvalidTweak` if the tweak is empty.
/// - `Error::InvalidModulus` if the modulus is at most 1 or cannot be factored into `a >= b >= 2`.
/// - `Error::ModulusTooLarge` if the modulus needs more than 16 bytes.
/// - `Error::InputOutOfRange` if `plaintext >= modulus`.
/// - `Error::InvalidKey` if HMAC-SHA256 rejects the key.
pub fn encrypt(
    modulus: &BigUint,
    plaintext: &BigUint,
    key: &[u8],
    tweak: &[u8],
) -> Result<BigUint, Error> {
    fe1(modulus, plaintext, key, tweak, Direction::Encrypt)
}

/// Decrypt `ciphertext` in `[0, modulus)`; the inverse of [`encrypt`] for the same key and tweak.
///
/// # Errors
/// Same conditions as [`encrypt`].
pub fn decrypt(
    modulus: &BigUint,
    ciphertext: &BigUint,
    key: &[u8],
    tweak: &[u8],
) -> Result<BigUint, Error> {
    fe1(modulus, ciphertext, key, tweak, Direction::Decrypt)
}

fn number_of_rounds(a: &BigUint, b: &BigUint) -> Result<u32, Error> {
    if a < b {
        return Err(Error::InvalidRounds);
    }
    Ok(ROUNDS)
}

/// Everything one call needs, validated before any round runs.
struct Schedule {
    a: BigUint,
    b: BigUint,
    rounds: u32,
    f: RoundFunction,
}

fn schedule(
    modulus: &BigUint,
    input: &BigUint,
    key: &[u8],
    tweak: &[u8],
) -> Result<Schedule, Error> {
    if tweak.is_empty() {
        return Err(Error::InvalidTweak);
    }
    if *modulus <= BigUint::one() {
        return Err(Error::InvalidModulus);
    }
    let len = encode(modulus).len();
    if len > MAX_N_BYTES {
        return Err(Error::ModulusTooLarge { len });
    }
    if input >= modulus {
        return Err(Error::InputOutOfRange);
    }

    let (a, b) = factor(modulus)?;
    let rounds = number_of_rounds(&a, &b)?;
    let f = RoundFunction::new(key, modulus, tweak)?;

    Ok(Schedule { a, b, rounds, f })
}

fn fe1(
    modulus: &BigUint,
    input: &BigUint,
    key: &[u8],
    tweak: &[u8],
    direction: Direction,
) -> Result<BigUint, Error> {
    let Schedule { a, b, rounds, f } =
        schedule(modulus, input, key, tweak).inspect_err(|err| {
            debug!(
                direction = direction.as_str(),
                modulus_bits = modulus.bits(),
                tweak = %hex::encode_upper(tweak),
                error = %err,
                "FE1 input rejected"
            );
        })?;

    debug!(
        direction = direction.as_str(),
        modulus_bits = modulus.bits(),
        a = %a,
        b = %b,
        tweak = %hex::encode_upper(tweak),
        "FE1 start"
    );

    let mut x = input.clone();
    match direction {
        Direction::Encrypt => {
            for round in 0..rounds {
                trace!(round, "FE1 encrypt round");
                let left = &x / &b;
                let right = &x % &b;
                let w = (left + f.f(round, &right)) % &a;
                x = &a * right + w;
            }
        }
        Direction::Decrypt => {
            for round in (0..rounds).rev() {
                trace!(round, "FE1 decrypt round");
                let w = &x % &a;
                let right = &x / &a;
                let fr = f.f(round, &right) % &a;
                let left = (w + &a - fr) % &a;
                x = &b * left + right;
            }
        }
    }

    debug_assert!(&x < modulus);
    Ok(x)
}

/// FE1 cipher bound to a key.
///
/// Holds no per-call state, so one instance may be shared between threads.
/// Each call still derives its own round function.
pub struct Fe1 {
    key: Zeroizing<Vec<u8>>,
}

impl Fe1 {
    /// Number of Feistel rounds.
    pub const ROUNDS: u32 = ROUNDS;

    /// Largest permitted encoded modulus, in bytes.
    pub const MAX_MODULUS_LENGTH: usize = MAX_N_BYTES;

    /// Bind an FE1 cipher to `key`. Any length is accepted by HMAC-SHA256.
    pub fn new(key: &[u8]) -> Self {
        Self {
            key: Zeroizing::new(key.to_vec()),
        }
    }

    /// Encrypt `plaintext` in `[0, modulus)`.
    pub fn encrypt(
        &self,
        modulus: &BigUint,
        plaintext: &BigUint,
        tweak: &[u8],
    ) -> Result<BigUint, Error> {
        encrypt(modulus, plaintext, &self.key, tweak)
    }

    /// Decrypt `ciphertext` in `[0, modulus)`.
    pub fn decrypt(
        &self,
        modulus: &BigUint,
        ciphertext: &BigUint,
        tweak: &[u8],
    ) -> Result<BigUint, Error> {
        decrypt(modulus, ciphertext, &self.key, tweak)
    }

    /// Encrypt a 64-bit value in `[0, modulus)`.
    pub fn encrypt_u64(&self, modulus: u64, plaintext: u64, tweak: &[u8]) -> Result<u64, Error> {
        let c = self.encrypt(&BigUint::from(modulus), &BigUint::from(plaintext), tweak)?;
        c.to_u64().ok_or(Error::InputOutOfRange)
    }

    /// Decrypt a 64-bit value in `[0, modulus)`.
    pub fn decrypt_u64(&self, modulus: u64, ciphertext: u64, tweak: &[u8]) -> Result<u64, Error> {
        let p = self.decrypt(&BigUint::from(modulus), &BigUint::from(ciphertext), tweak)?;
        p.to_u64().ok_or(Error::InputOutOfRange)
    }
}

impl fmt::Debug for Fe1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fe1").finish_non_exhaustive()
    }
}
