use crate::errors::PQCryptoError;
use crate::lattice::LweParams;
use crate::ring::matrix_ops::{dot, matrix_vector_mul, vector_add};
use crate::ring::{Matrix, Vector};

use rand::prelude::{Rng, SeedableRng, StdRng};

use serde::{Deserialize, Serialize};

/// A full LWE key pair: `public_vector = (matrix_A · secret + error) mod q`.
///
/// Every entry of every component lies in `[0, q)`; noise entries are
/// additionally bounded by `params.noise_bound`. Generated fresh per
/// registration and owned exclusively by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweKeyPair {
    pub params: LweParams,
    pub matrix_A: Matrix,
    pub secret: Vector,
    pub error: Vector,
    pub public_vector: Vector,
}

/// The shareable half of a key pair: the matrix and the noisy product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LwePublicKey {
    pub params: LweParams,
    pub matrix_A: Matrix,
    pub public_vector: Vector,
}

/// The material decryption needs: the secret vector and the noise vector.
///
/// This never belongs in the persistence shell; see [`crate::codec`] for the
/// session-side encoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweSecretKey {
    pub params: LweParams,
    pub secret: Vector,
    pub error: Vector,
}

/// A single encrypted scalar: one row of the public matrix plus the masked
/// message. `row_index` records which noise entry the row carries, so the
/// secret holder can strip it exactly during decryption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LweCiphertext {
    pub row_index: usize,
    pub vector_part: Vector,
    pub scalar_part: i64,
}

impl LweKeyPair {
    /// Generates a key pair from a seed; the same seed reproduces the same
    /// key pair exactly.
    pub fn try_with(params: LweParams, seed: u64) -> Result<Self, PQCryptoError> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::try_with_rng(params, &mut rng)
    }

    /// Generates a key pair by drawing `A` and `s` uniformly from Z_q and the
    /// noise vector from `[0, noise_bound]`.
    pub fn try_with_rng<R: Rng>(params: LweParams, rng: &mut R) -> Result<Self, PQCryptoError> {
        let n = params.dimension;
        let q = params.modulus as i64;
        let ring = params.ring();

        let matrix_A: Matrix = (0..n)
            .map(|_| (0..n).map(|_| rng.random_range(0..q)).collect())
            .collect();
        let secret: Vector = (0..n).map(|_| rng.random_range(0..q)).collect();
        let error: Vector = (0..n)
            .map(|_| rng.random_range(0..=params.noise_bound as i64))
            .collect();

        let noiseless = matrix_vector_mul(&matrix_A, &secret, &ring)?;
        let public_vector = vector_add(&noiseless, &error, &ring)?;

        Ok(LweKeyPair {
            params,
            matrix_A,
            secret,
            error,
            public_vector,
        })
    }

    /// The half of the key pair the shell may see.
    pub fn public_key(&self) -> LwePublicKey {
        LwePublicKey {
            params: self.params,
            matrix_A: self.matrix_A.clone(),
            public_vector: self.public_vector.clone(),
        }
    }

    /// The half that stays inside the trust boundary.
    pub fn secret_key(&self) -> LweSecretKey {
        LweSecretKey {
            params: self.params,
            secret: self.secret.clone(),
            error: self.error.clone(),
        }
    }
}

impl LwePublicKey {
    /// Picks a row index for encryption.
    pub fn pick_row<R: Rng>(&self, rng: &mut R) -> usize {
        rng.random_range(0..self.params.dimension)
    }

    /// Encrypts a scalar message against row `row` of the public matrix:
    /// `scalar_part = (b_row + message) mod q`.
    ///
    /// # Errors
    ///
    /// Returns `PQCryptoError::MessageOutOfRange` unless `message < modulus`.
    /// Returns `PQCryptoError::InvalidParameters` if `row` is out of range.
    /// Returns `PQCryptoError::DimensionMismatch` if the key's vectors are
    /// shorter than the declared dimension.
    pub fn encrypt(&self, message: u64, row: usize) -> Result<LweCiphertext, PQCryptoError> {
        if message >= self.params.modulus {
            return Err(PQCryptoError::MessageOutOfRange(format!(
                "Message {} must be below the modulus {}",
                message, self.params.modulus
            )));
        }
        if row >= self.params.dimension {
            return Err(PQCryptoError::InvalidParameters(format!(
                "Row index {} out of range for dimension {}",
                row, self.params.dimension
            )));
        }

        let b_row = *self.public_vector.get(row).ok_or_else(|| {
            PQCryptoError::DimensionMismatch(format!(
                "Public vector has {} entries but the dimension is {}",
                self.public_vector.len(),
                self.params.dimension
            ))
        })?;
        let vector_part = self.matrix_A.get(row).cloned().ok_or_else(|| {
            PQCryptoError::DimensionMismatch(format!(
                "Public matrix has {} rows but the dimension is {}",
                self.matrix_A.len(),
                self.params.dimension
            ))
        })?;

        let ring = self.params.ring();
        let scalar_part = ring.add(b_row, message as i64);

        Ok(LweCiphertext {
            row_index: row,
            vector_part,
            scalar_part,
        })
    }
}

impl LweSecretKey {
    /// Recovers the message: `(scalar_part − vector_part·secret − e_row) mod q`.
    ///
    /// Since `scalar_part = a_row·s + e_row + message`, subtracting the inner
    /// product and the recorded noise entry returns the message exactly, for
    /// every message in `[0, q)`.
    ///
    /// # Errors
    ///
    /// Returns `PQCryptoError::Malformed` if the row index does not fit this
    /// key, and `PQCryptoError::DimensionMismatch` if the vector part does.
    pub fn decrypt(&self, ciphertext: &LweCiphertext) -> Result<u64, PQCryptoError> {
        let ring = self.params.ring();

        let noise = *self
            .error
            .get(ciphertext.row_index)
            .ok_or_else(|| {
                PQCryptoError::Malformed(format!(
                    "Ciphertext row index {} does not fit dimension {}",
                    ciphertext.row_index, self.params.dimension
                ))
            })?;

        let masked = ring.sub(
            ciphertext.scalar_part,
            dot(&ciphertext.vector_part, &self.secret, &ring)?,
        );

        Ok(ring.sub(masked, noise) as u64)
    }
}
