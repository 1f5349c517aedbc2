//! Arbitrary-precision modular arithmetic for the classical scheme.
//!
//! The lattice side works in a fixed-width [`crate::ring::Ring`]; the RSA side
//! instead uses `num_bigint` so that exponentiation never overflows silently.

use crate::errors::PQCryptoError;

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

/// Computes `base^exponent mod modulus` by binary (square-and-multiply) exponentiation.
///
/// `exponent = 0` yields `1 mod modulus`; `modulus = 1` yields `0`.
///
/// # Errors
///
/// Returns `PQCryptoError::InvalidModulus` if `modulus` is zero.
///
/// # Example
///
/// ```
/// # use pq_crypto::modular::mod_pow;
/// # use num_bigint::BigUint;
/// let c = mod_pow(&BigUint::from(65u32), &BigUint::from(17u32), &BigUint::from(3233u32)).unwrap();
/// assert_eq!(c, BigUint::from(2790u32));
/// ```
pub fn mod_pow(
    base: &BigUint,
    exponent: &BigUint,
    modulus: &BigUint,
) -> Result<BigUint, PQCryptoError> {
    if modulus.is_zero() {
        return Err(PQCryptoError::InvalidModulus(
            "Modulus must be non-zero for modular exponentiation".to_string(),
        ));
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exponent = exponent.clone();

    while !exponent.is_zero() {
        if exponent.bit(0) {
            result = &result * &base % modulus;
        }
        base = &base * &base % modulus;
        exponent >>= 1u32;
    }

    Ok(result)
}

/// Computes the modular multiplicative inverse `a^-1 mod modulus`.
///
/// The inverse exists if and only if `gcd(a, modulus) == 1`.
/// Uses the Extended Euclidean Algorithm over `BigInt`.
///
/// # Errors
///
/// Returns `PQCryptoError::InvalidModulus` if `modulus <= 1`.
/// Returns `PQCryptoError::NoInverse` if `gcd(a, modulus) != 1`.
///
/// # Example
///
/// ```
/// # use pq_crypto::modular::mod_inverse;
/// # use num_bigint::BigUint;
/// let d = mod_inverse(&BigUint::from(17u32), &BigUint::from(3120u32)).unwrap();
/// assert_eq!(d, BigUint::from(2753u32));
/// ```
pub fn mod_inverse(a: &BigUint, modulus: &BigUint) -> Result<BigUint, PQCryptoError> {
    if modulus <= &BigUint::one() {
        return Err(PQCryptoError::InvalidModulus(format!(
            "Modulus must be greater than 1, got {}",
            modulus
        )));
    }

    let a_int = BigInt::from(a.clone());
    let m_int = BigInt::from(modulus.clone());

    let (g, x, _) = extended_gcd(&a_int, &m_int);
    if !g.is_one() {
        return Err(PQCryptoError::NoInverse(format!(
            "Modular inverse does not exist for {} mod {} (gcd={})",
            a, modulus, g
        )));
    }

    // mod_floor lands in [0, modulus), so the cast back to unsigned cannot fail.
    x.mod_floor(&m_int).to_biguint().ok_or_else(|| {
        PQCryptoError::InternalError("mod_floor produced a negative residue".to_string())
    })
}

/// Finds (g, x, y) such that ax + by = g = gcd(a, b).
fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        if b < &BigInt::zero() {
            return (-b.clone(), BigInt::zero(), -BigInt::one());
        }

        return (b.clone(), BigInt::zero(), BigInt::one());
    }

    let (g, x1, y1) = extended_gcd(&b.mod_floor(a), a);
    let x = y1 - (b / a) * &x1;
    let y = x1;
    (g, x, y)
}
