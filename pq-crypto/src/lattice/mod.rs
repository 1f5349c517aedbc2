//! # Lattice Module
//!
//! LWE-style key generation, encryption, and decryption over Z_q.
//!
//! The scheme is deliberately simplified: a ciphertext folds one scalar
//! message into a single row of the public matrix rather than masking it
//! with a random subset sum, so it is weaker than textbook LWE encryption.
//! It is still enough to demonstrate the noisy-linear-algebra structure that
//! a factoring shortcut cannot touch.

pub mod keys;

pub use keys::{LweCiphertext, LweKeyPair, LwePublicKey, LweSecretKey};

use crate::errors::PQCryptoError;
use crate::ring::Ring;

use serde::{Deserialize, Serialize};

/// Default LWE dimension n.
pub const DEFAULT_DIMENSION: usize = 128;
/// Default LWE modulus q.
pub const DEFAULT_MODULUS: u64 = 4096;
/// Default inclusive bound on noise entries. Must stay far below the
/// modulus or decryption loses the message in the noise.
pub const DEFAULT_NOISE_BOUND: u64 = 4;

/// Largest supported modulus; ring arithmetic widens through `i64`/`i128`,
/// so entries must fit comfortably in `i64`.
pub const MAX_MODULUS: u64 = 1 << 32;

/// Parameters of the LWE instance: dimension n, modulus q, and the inclusive
/// bound on noise entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweParams {
    pub dimension: usize,
    pub modulus: u64,
    pub noise_bound: u64,
}

impl LweParams {
    /// Creates a parameter set, validating the ring and noise invariants.
    ///
    /// # Errors
    ///
    /// Returns `PQCryptoError::InvalidParameters` if the dimension is zero,
    /// the modulus is not in `(1, 2^32]`, or the noise bound is not small
    /// relative to the modulus (`2 * noise_bound < modulus` required).
    pub fn try_with(
        dimension: usize,
        modulus: u64,
        noise_bound: u64,
    ) -> Result<Self, PQCryptoError> {
        if dimension == 0 {
            return Err(PQCryptoError::InvalidParameters(
                "Dimension must be positive".to_string(),
            ));
        }
        if modulus <= 1 || modulus > MAX_MODULUS {
            return Err(PQCryptoError::InvalidParameters(format!(
                "Modulus must be in (1, 2^32], got {}",
                modulus
            )));
        }
        if noise_bound.saturating_mul(2) >= modulus {
            return Err(PQCryptoError::InvalidParameters(format!(
                "Noise bound {} is too large for modulus {}",
                noise_bound, modulus
            )));
        }

        Ok(LweParams {
            dimension,
            modulus,
            noise_bound,
        })
    }

    /// The demo defaults: n = 128, q = 4096, noise entries in `[0, 4]`.
    pub fn demo() -> Self {
        LweParams {
            dimension: DEFAULT_DIMENSION,
            modulus: DEFAULT_MODULUS,
            noise_bound: DEFAULT_NOISE_BOUND,
        }
    }

    /// The ring Z_q these parameters operate in.
    pub fn ring(&self) -> Ring {
        // Modulus validity is established in `try_with`.
        Ring {
            modulus: self.modulus,
        }
    }
}
