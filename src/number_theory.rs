//! Modulus factorization for the FE1 Feistel split.
//!
//! FE1 needs `n = a * b` with `a >= b >= 2`, and the closer `a` and `b` are the
//! tighter the round-count bound `2 + log_a(b)` becomes. The modulus is
//! trial-divided by a fixed table of small primes, then the prime factors are
//! greedily distributed between `a` and `b` in ascending order.

use std::sync::LazyLock;

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use crate::common::Error;

/// Exclusive upper bound of the trial-division prime table.
pub const PRIME_TABLE_BOUND: u32 = 1 << 16;

static PRIMES: LazyLock<Vec<u16>> = LazyLock::new(|| sieve(PRIME_TABLE_BOUND as usize));

fn sieve(bound: usize) -> Vec<u16> {
    let mut composite = vec![false; bound];
    let mut primes = Vec::new();
    for i in 2..bound {
        if composite[i] {
            continue;
        }
        primes.push(i as u16);
        let mut j = i * i;
        while j < bound {
            composite[j] = true;
            j += i;
        }
    }
    primes
}

/// The trial-division table: every prime below [`PRIME_TABLE_BOUND`], ascending.
pub fn primes() -> &'static [u16] {
    &PRIMES
}

/// Index of the lowest set bit of `b`, or 8 if `b` is zero.
#[inline]
pub const fn trailing_zeros_of_byte(b: u8) -> u32 {
    b.trailing_zeros()
}

/// 2-adic valuation of `n`. Returns 0 for `n <= 0`.
pub fn low_zero_bits(n: &BigInt) -> u64 {
    if n.sign() != Sign::Plus {
        return 0;
    }
    unsigned_low_zero_bits(n.magnitude())
}

fn unsigned_low_zero_bits(n: &BigUint) -> u64 {
    if n.is_zero() {
        return 0;
    }
    let mut count = 0u64;
    for byte in n.to_bytes_le() {
        let zeros = trailing_zeros_of_byte(byte);
        count += u64::from(zeros);
        if zeros < 8 {
            break;
        }
    }
    count
}

/// Prime factors of `n` in ascending order, with multiplicity.
///
/// Whatever survives trial division by the table is appended once as a final
/// factor, which may be composite.
fn prime_factors(n: &BigUint) -> Vec<BigUint> {
    let mut n = n.clone();
    let mut factors = Vec::new();

    let twos = unsigned_low_zero_bits(&n);
    n >>= twos;
    factors.extend((0..twos).map(|_| BigUint::from(2u32)));

    for &p in primes().iter().skip(1) {
        let p = u32::from(p);
        if n < BigUint::from(u64::from(p) * u64::from(p)) {
            // n is 1 or prime here; a prime below the bound would be found
            // by the table itself, so appending it now gives the same list.
            break;
        }
        while (&n % p).is_zero() {
            n /= p;
            factors.push(BigUint::from(p));
        }
    }

    if n > BigUint::one() {
        factors.push(n);
    }
    factors
}

/// Split `n` into a balanced factor pair `(a, b)` with `a * b = n` and `a >= b >= 2`.
///
/// # Errors
/// Returns `Error::InvalidModulus` if `n <= 1` or if no split with `b >= 2`
/// is reachable, which covers every prime modulus.
pub fn factor(n: &BigUint) -> Result<(BigUint, BigUint), Error> {
    if *n <= BigUint::one() {
        return Err(Error::InvalidModulus);
    }

    let mut a = BigUint::one();
    let mut b = BigUint::one();
    for v in prime_factors(n) {
        if b < a {
            b *= v;
        } else {
            a *= v;
        }
    }

    if a < b {
        core::mem::swap(&mut a, &mut b);
    }
    if b <= BigUint::one() {
        return Err(Error::InvalidModulus);
    }

    debug_assert_eq!(&(&a * &b), n);
    Ok((a, b))
}
