//! FE1 format-preserving encryption over the integers modulo `n`.
//!
//! This crate implements the FE1 scheme: a keyed, tweakable bijection on
//! `[0, n)`, so structured numeric data such as account numbers or identifiers
//! can be encrypted while keeping the same range. The round function is
//! HMAC-SHA256 with the same framing as Botan's FE1, so ciphertexts
//! interoperate with it.
//!
//! # Overview
//!
//! - The modulus `n` is split into a balanced factor pair `a >= b >= 2`
//! - A three-round Feistel network runs over the mixed-radix split `x = left * b + right`
//! - The round function binds the key, the modulus and the tweak
//!
//! # Quick Start
//!
//! ```rust
//! use fe1::Fe1;
//! use num_bigint::BigUint;
//!
//! let cipher = Fe1::new(b"a secret key of reasonable length");
//!
//! // 15-digit card numbers, with the check digit handled by the caller
//! let modulus = BigUint::from(1_000_000_000_000_000u64);
//! let plaintext = BigUint::from(543_443_295_325_432u64);
//! let tweak = b"merchant_id_123";
//!
//! let ciphertext = cipher.encrypt(&modulus, &plaintext, tweak).unwrap();
//! assert!(ciphertext < modulus);
//!
//! let decrypted = cipher.decrypt(&modulus, &ciphertext, tweak).unwrap();
//! assert_eq!(plaintext, decrypted);
//! ```
//!
//! The free functions take the key on every call:
//!
//! ```rust
//! use num_bigint::BigUint;
//!
//! let n = BigUint::from(10_000u32);
//! let c = fe1::encrypt(&n, &BigUint::from(1234u32), b"key", b"tweak").unwrap();
//! assert_eq!(fe1::decrypt(&n, &c, b"key", b"tweak").unwrap(), BigUint::from(1234u32));
//! ```
//!
//! # Security Considerations
//!
//! - **Prime moduli are rejected**: FE1 needs `n = a * b` with both factors at least 2
//! - **Maximum modulus**: the encoded modulus is limited to 16 bytes (`n < 2^128`)
//! - **Deterministic**: use distinct tweaks for logically distinct plaintext spaces
//! - **No authentication**: FE1 is encryption-only
//! - Key strength is the caller's concern; derive keys from passwords with a KDF

pub mod codec;
pub mod common;
pub mod fe1;
pub mod number_theory;
pub mod round;

#[cfg(test)]
mod cross_check;

pub use common::{Error, MAX_N_BYTES};
pub use fe1::{Fe1, ROUNDS, decrypt, encrypt};
pub use number_theory::factor;
pub use round::RoundFunction;
