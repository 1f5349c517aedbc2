#[derive(thiserror::Error, Debug)]
pub enum PQCryptoError {
    /// Error when creating a ring with an invalid modulus (q <= 1).
    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, q) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),

    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    /// Plaintext or ciphertext lies outside `[0, modulus)`.
    #[error("MessageOutOfRange: {0}")]
    MessageOutOfRange(String),
    /// The chosen RSA public exponent is not invertible mod (p-1)(q-1).
    #[error("InvalidExponent: {0}")]
    InvalidExponent(String),
    #[error("Decryption requires the private exponent, but only public material is present")]
    MissingPrivateKey,
    /// Trial division found no nontrivial factor within the step limit.
    #[error("AttackFailed: {0}")]
    AttackFailed(String),

    /// A stored blob could not be decoded back into key or ciphertext material.
    #[error("Malformed: {0}")]
    Malformed(String),

    #[error("InternalError: {0}")]
    InternalError(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}
