use crate::errors::PQCryptoError;
use crate::ring::{Matrix, Ring, Vector};

/// a·b, the inner product of two equal-length vectors over the ring.
///
/// # Errors
///
/// Returns `PQCryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn dot(a: &Vector, b: &Vector, ring: &Ring) -> Result<i64, PQCryptoError> {
    if a.len() != b.len() {
        return Err(PQCryptoError::DimensionMismatch(format!(
            "Vector lengths must match for dot product ({} vs {})",
            a.len(),
            b.len()
        )));
    }

    let mut sum = 0i64;
    for i in 0..a.len() {
        let term = ring.mul(a[i], b[i]);
        sum = ring.add(sum, term);
    }
    Ok(sum)
}

/// A·x where A is an n×n matrix and x is a length–n vector.
/// Returns an n‐vector.
pub fn matrix_vector_mul(a: &Matrix, x: &Vector, ring: &Ring) -> Result<Vector, PQCryptoError> {
    let m = a.len();
    if m == 0 {
        return Ok(Vec::new());
    }
    let n = a[0].len();
    if x.len() != n {
        return Err(PQCryptoError::DimensionMismatch(format!(
            "Matrix columns ({}) must match vector length ({})",
            n,
            x.len()
        )));
    }

    let mut y = vec![0i64; m];
    for i in 0..m {
        if a[i].len() != n {
            return Err(PQCryptoError::DimensionMismatch(format!(
                "Row {} has length {} but expected {}",
                i,
                a[i].len(),
                n
            )));
        }
        y[i] = dot(&a[i], x, ring)?;
    }
    Ok(y)
}

/// Computes the vector sum `c = a + b` modulo `q`, where `q` is the modulus of the ring.
///
/// # Errors
///
/// Returns `PQCryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_add(a: &Vector, b: &Vector, ring: &Ring) -> Result<Vector, PQCryptoError> {
    if a.len() != b.len() {
        return Err(PQCryptoError::DimensionMismatch(format!(
            "Vector lengths must match for addition ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    let n = a.len();
    let mut c = vec![0; n];
    for i in 0..n {
        c[i] = ring.add(a[i], b[i]);
    }
    Ok(c)
}

/// Computes the vector difference `c = a - b` modulo `q`, where `q` is the modulus of the ring.
///
/// # Errors
///
/// Returns `PQCryptoError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_sub(a: &Vector, b: &Vector, ring: &Ring) -> Result<Vector, PQCryptoError> {
    if a.len() != b.len() {
        return Err(PQCryptoError::DimensionMismatch(format!(
            "Vector lengths must match for subtraction ({} vs {})",
            a.len(),
            b.len()
        )));
    }
    let n = a.len();
    let mut c = vec![0; n];
    for i in 0..n {
        c[i] = ring.sub(a[i], b[i]);
    }
    Ok(c)
}
