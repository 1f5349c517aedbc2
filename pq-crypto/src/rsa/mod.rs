//! Classical RSA-style engine over arbitrary-precision integers.
//!
//! Key material is demo-scale on purpose: the primes are small enough for the
//! trial-division attack in [`crate::factor`] to break in milliseconds.

use crate::errors::PQCryptoError;
use crate::factor::factor;
use crate::modular::{mod_inverse, mod_pow};

use lazy_static::lazy_static;
use num_bigint::BigUint;

/// Demo primes and exponent giving the textbook parameters
/// `n = 3233`, `e = 17`, `d = 2753`.
pub const DEMO_P: u64 = 61;
pub const DEMO_Q: u64 = 53;
pub const DEMO_PUBLIC_EXPONENT: u64 = 17;

lazy_static! {
    /// Process-wide classical key pair, built once and read-only afterwards,
    /// safe to share across callers without locking.
    pub static ref DEMO_KEY_PAIR: RsaKeyPair =
        RsaKeyPair::try_with(DEMO_P, DEMO_Q, DEMO_PUBLIC_EXPONENT)
            .expect("demo RSA parameters are valid");
}

/// An RSA key pair; `private_exponent` is absent for public-only material.
///
/// Invariant: `modulus = p * q` for the generating primes, and the private
/// exponent (when present) is the inverse of the public exponent mod
/// `(p-1)(q-1)`. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub modulus: BigUint,
    pub public_exponent: BigUint,
    pub private_exponent: Option<BigUint>,
}

impl RsaKeyPair {
    /// Derives a full key pair from two primes and a public exponent.
    ///
    /// # Errors
    ///
    /// Returns `PQCryptoError::InvalidParameters` if either prime is below 2
    /// or the primes coincide.
    /// Returns `PQCryptoError::InvalidExponent` if `e` has no inverse mod
    /// `(p-1)(q-1)`.
    pub fn try_with(p: u64, q: u64, e: u64) -> Result<Self, PQCryptoError> {
        if p < 2 || q < 2 {
            return Err(PQCryptoError::InvalidParameters(format!(
                "Primes must be at least 2, got p={}, q={}",
                p, q
            )));
        }
        if p == q {
            return Err(PQCryptoError::InvalidParameters(format!(
                "Primes must be distinct, got p=q={}",
                p
            )));
        }

        let modulus = BigUint::from(p) * BigUint::from(q);
        let phi = BigUint::from(p - 1) * BigUint::from(q - 1);
        let public_exponent = BigUint::from(e);

        let private_exponent = mod_inverse(&public_exponent, &phi).map_err(|_| {
            PQCryptoError::InvalidExponent(format!(
                "Public exponent {} is not invertible mod (p-1)(q-1) = {}",
                e, phi
            ))
        })?;

        Ok(RsaKeyPair {
            modulus,
            public_exponent,
            private_exponent: Some(private_exponent),
        })
    }

    /// Public-only material, as an attacker or verifier would hold it.
    pub fn public_only(modulus: u64, public_exponent: u64) -> Self {
        RsaKeyPair {
            modulus: BigUint::from(modulus),
            public_exponent: BigUint::from(public_exponent),
            private_exponent: None,
        }
    }

    /// Encrypts a message with the public half of the key.
    ///
    /// # Errors
    ///
    /// Returns `PQCryptoError::MessageOutOfRange` unless `message < modulus`.
    pub fn encrypt(&self, message: &BigUint) -> Result<BigUint, PQCryptoError> {
        if message >= &self.modulus {
            return Err(PQCryptoError::MessageOutOfRange(format!(
                "Message {} must be below the modulus {}",
                message, self.modulus
            )));
        }

        mod_pow(message, &self.public_exponent, &self.modulus)
    }

    /// Decrypts a ciphertext with the private exponent.
    ///
    /// # Errors
    ///
    /// Returns `PQCryptoError::MissingPrivateKey` for public-only material.
    /// Returns `PQCryptoError::MessageOutOfRange` unless `ciphertext < modulus`.
    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint, PQCryptoError> {
        let private_exponent = self
            .private_exponent
            .as_ref()
            .ok_or(PQCryptoError::MissingPrivateKey)?;

        if ciphertext >= &self.modulus {
            return Err(PQCryptoError::MessageOutOfRange(format!(
                "Ciphertext {} must be below the modulus {}",
                ciphertext, self.modulus
            )));
        }

        mod_pow(ciphertext, private_exponent, &self.modulus)
    }
}

/// Recovers a full key pair from public material alone by factoring the
/// modulus — the "quantum hack" of the demo.
///
/// # Errors
///
/// Returns `PQCryptoError::AttackFailed` when trial division finds no
/// nontrivial factor (prime modulus or step limit exhausted).
pub fn recover_private_key(
    modulus: u64,
    public_exponent: u64,
) -> Result<RsaKeyPair, PQCryptoError> {
    let (p, q) = factor(modulus).into_pair().ok_or_else(|| {
        PQCryptoError::AttackFailed(format!(
            "No nontrivial factor of {} found within the step limit",
            modulus
        ))
    })?;

    RsaKeyPair::try_with(p, q, public_exponent)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> BigUint {
        BigUint::from(v)
    }

    #[test]
    fn test_demo_key_pair_constants() {
        assert_eq!(DEMO_KEY_PAIR.modulus, big(3233));
        assert_eq!(DEMO_KEY_PAIR.public_exponent, big(17));
        assert_eq!(DEMO_KEY_PAIR.private_exponent, Some(big(2753)));
    }

    #[test]
    fn test_encrypt_decrypt_demo_scenario() -> Result<(), PQCryptoError> {
        let ciphertext = DEMO_KEY_PAIR.encrypt(&big(65))?;
        assert_eq!(ciphertext, big(2790));
        assert_eq!(DEMO_KEY_PAIR.decrypt(&ciphertext)?, big(65));
        Ok(())
    }

    #[test]
    fn test_round_trip_exhaustive_small_modulus() -> Result<(), PQCryptoError> {
        // p=5, q=11, n=55: small enough to check every message in range.
        let key = RsaKeyPair::try_with(5, 11, 3)?;
        for m in 0u64..55 {
            let c = key.encrypt(&big(m))?;
            assert_eq!(key.decrypt(&c)?, big(m), "round trip failed for {}", m);
        }
        Ok(())
    }

    #[test]
    fn test_encrypt_out_of_range() {
        assert!(matches!(
            DEMO_KEY_PAIR.encrypt(&big(3233)),
            Err(PQCryptoError::MessageOutOfRange(_))
        ));
        assert!(matches!(
            DEMO_KEY_PAIR.encrypt(&big(100_000)),
            Err(PQCryptoError::MessageOutOfRange(_))
        ));
    }

    #[test]
    fn test_decrypt_without_private_key() {
        let public = RsaKeyPair::public_only(3233, 17);
        assert!(matches!(
            public.decrypt(&big(2790)),
            Err(PQCryptoError::MissingPrivateKey)
        ));
    }

    #[test]
    fn test_invalid_exponent_rejected() {
        // gcd(2, (61-1)(53-1)) = 2
        assert!(matches!(
            RsaKeyPair::try_with(61, 53, 2),
            Err(PQCryptoError::InvalidExponent(_))
        ));
    }

    #[test]
    fn test_invalid_primes_rejected() {
        assert!(RsaKeyPair::try_with(1, 53, 17).is_err());
        assert!(RsaKeyPair::try_with(61, 61, 17).is_err());
    }

    #[test]
    fn test_recover_private_key_matches_generation() -> Result<(), PQCryptoError> {
        let recovered = recover_private_key(3233, 17)?;
        assert_eq!(recovered, RsaKeyPair::try_with(61, 53, 17)?);
        assert_eq!(recovered.private_exponent, Some(big(2753)));
        Ok(())
    }

    #[test]
    fn test_recover_private_key_prime_modulus_fails() {
        assert!(matches!(
            recover_private_key(104729, 17),
            Err(PQCryptoError::AttackFailed(_))
        ));
    }

    #[test]
    fn test_recover_then_decrypt_foreign_ciphertext() -> Result<(), PQCryptoError> {
        let ciphertext = DEMO_KEY_PAIR.encrypt(&big(42))?;
        let recovered = recover_private_key(3233, 17)?;
        assert_eq!(recovered.decrypt(&ciphertext)?, big(42));
        Ok(())
    }

    quickcheck::quickcheck! {
        fn prop_demo_round_trip(message: u16) -> quickcheck::TestResult {
            if message as u64 >= 3233 {
                return quickcheck::TestResult::discard();
            }
            let m = BigUint::from(message as u64);
            let c = DEMO_KEY_PAIR.encrypt(&m).unwrap();
            quickcheck::TestResult::from_bool(DEMO_KEY_PAIR.decrypt(&c).unwrap() == m)
        }
    }
}
