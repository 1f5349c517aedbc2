//! Deterministic serialization for everything that crosses the core's
//! boundary.
//!
//! Vectors are encoded as fixed-width little-endian `u64` entries wrapped in
//! base64, inside a `serde_json` envelope. The byte layout is part of the
//! storage contract: changing it invalidates previously stored records.
//!
//! Two envelopes exist on purpose. [`StoredLweRecord`] carries only public
//! material plus the ciphertext and is what the persistence shell may keep.
//! The secret-key encoding stays on the session side and never reaches the
//! shell.

use crate::errors::PQCryptoError;
use crate::lattice::{LweCiphertext, LweParams, LweSecretKey};
use crate::ring::Vector;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use serde::{Deserialize, Serialize};

const ENTRY_SIZE_BYTES: usize = std::mem::size_of::<u64>();

/// Encodes a vector as base64 over little-endian `u64` entries.
///
/// # Errors
///
/// Returns `PQCryptoError::InternalError` if an entry is negative; ring
/// values are normalized into `[0, q)` before they reach the codec.
pub fn vector_to_base64(vector: &Vector) -> Result<String, PQCryptoError> {
    let mut bytes = Vec::with_capacity(vector.len() * ENTRY_SIZE_BYTES);
    for &entry in vector {
        let entry = u64::try_from(entry).map_err(|_| {
            PQCryptoError::InternalError(format!(
                "Cannot encode negative entry {} as a fixed-width value",
                entry
            ))
        })?;
        bytes.extend_from_slice(&entry.to_le_bytes());
    }
    Ok(STANDARD.encode(bytes))
}

/// Decodes a base64 blob back into a vector of exactly `expected_len`
/// entries, each below `modulus`.
///
/// # Errors
///
/// Returns `PQCryptoError::Malformed` for bad base64, a truncated or
/// oversized blob, or an out-of-range entry.
pub fn base64_to_vector(
    encoded: &str,
    expected_len: usize,
    modulus: u64,
) -> Result<Vector, PQCryptoError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| PQCryptoError::Malformed(format!("Base64 decoding failed: {}", e)))?;

    if bytes.len() != expected_len * ENTRY_SIZE_BYTES {
        return Err(PQCryptoError::Malformed(format!(
            "Expected {} entries ({} bytes), got {} bytes",
            expected_len,
            expected_len * ENTRY_SIZE_BYTES,
            bytes.len()
        )));
    }

    let mut vector = Vec::with_capacity(expected_len);
    for chunk in bytes.chunks_exact(ENTRY_SIZE_BYTES) {
        let mut buf = [0u8; ENTRY_SIZE_BYTES];
        buf.copy_from_slice(chunk);
        let value = u64::from_le_bytes(buf);
        if value >= modulus {
            return Err(PQCryptoError::Malformed(format!(
                "Entry {} is outside the ring modulus {}",
                value, modulus
            )));
        }
        vector.push(value as i64);
    }
    Ok(vector)
}

/// What the shell persists per quantum-safe registration: the parameters,
/// the public row used for encryption, and the masked scalar. No secret
/// material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredLweRecord {
    pub params: LweParams,
    pub row_index: usize,
    pub vector_part: String,
    pub scalar_part: u64,
}

/// Serializes a ciphertext into the storable record.
pub fn encode_record(
    ciphertext: &LweCiphertext,
    params: &LweParams,
) -> Result<String, PQCryptoError> {
    let record = StoredLweRecord {
        params: *params,
        row_index: ciphertext.row_index,
        vector_part: vector_to_base64(&ciphertext.vector_part)?,
        scalar_part: u64::try_from(ciphertext.scalar_part).map_err(|_| {
            PQCryptoError::InternalError(format!(
                "Cannot encode negative scalar {} as a fixed-width value",
                ciphertext.scalar_part
            ))
        })?,
    };
    Ok(serde_json::to_string(&record)?)
}

/// Deserializes a stored record back into parameters and ciphertext.
///
/// # Errors
///
/// Returns `PQCryptoError::Malformed` when the blob cannot be decoded or
/// violates the ring invariants.
pub fn decode_record(encoded: &str) -> Result<(LweParams, LweCiphertext), PQCryptoError> {
    let record: StoredLweRecord = serde_json::from_str(encoded)
        .map_err(|e| PQCryptoError::Malformed(format!("Record envelope: {}", e)))?;

    let params =
        LweParams::try_with(record.params.dimension, record.params.modulus, record.params.noise_bound)
            .map_err(|e| PQCryptoError::Malformed(format!("Record parameters: {}", e)))?;

    if record.row_index >= params.dimension {
        return Err(PQCryptoError::Malformed(format!(
            "Row index {} out of range for dimension {}",
            record.row_index, params.dimension
        )));
    }
    if record.scalar_part >= params.modulus {
        return Err(PQCryptoError::Malformed(format!(
            "Scalar {} is outside the ring modulus {}",
            record.scalar_part, params.modulus
        )));
    }

    let vector_part = base64_to_vector(&record.vector_part, params.dimension, params.modulus)?;

    Ok((
        params,
        LweCiphertext {
            row_index: record.row_index,
            vector_part,
            scalar_part: record.scalar_part as i64,
        },
    ))
}

#[derive(Debug, Serialize, Deserialize)]
struct SecretKeyEnvelope {
    params: LweParams,
    secret: String,
    error: String,
}

/// Serializes secret material for the session side. The output must never
/// be handed to the persistence shell.
pub fn encode_secret_key(secret_key: &LweSecretKey) -> Result<String, PQCryptoError> {
    let envelope = SecretKeyEnvelope {
        params: secret_key.params,
        secret: vector_to_base64(&secret_key.secret)?,
        error: vector_to_base64(&secret_key.error)?,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Deserializes session-side secret material.
///
/// # Errors
///
/// Returns `PQCryptoError::Malformed` when the blob cannot be decoded.
pub fn decode_secret_key(encoded: &str) -> Result<LweSecretKey, PQCryptoError> {
    let envelope: SecretKeyEnvelope = serde_json::from_str(encoded)
        .map_err(|e| PQCryptoError::Malformed(format!("Secret key envelope: {}", e)))?;

    let params = LweParams::try_with(
        envelope.params.dimension,
        envelope.params.modulus,
        envelope.params.noise_bound,
    )
    .map_err(|e| PQCryptoError::Malformed(format!("Secret key parameters: {}", e)))?;

    let secret = base64_to_vector(&envelope.secret, params.dimension, params.modulus)?;
    let error = base64_to_vector(&envelope.error, params.dimension, params.modulus)?;

    Ok(LweSecretKey {
        params,
        secret,
        error,
    })
}
