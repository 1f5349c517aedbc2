//! Single synchronous call surface for the presentation shell.
//!
//! The shell hands in raw integers and stored blobs; the facade dispatches to
//! the engines and returns a typed outcome for every path. No failure is ever
//! collapsed into a silent default, so the shell can always render an
//! explicit message.

use crate::codec;
use crate::errors::PQCryptoError;
use crate::factor::factor;
use crate::lattice::{LweKeyPair, LweParams};
use crate::rsa::{DEMO_KEY_PAIR, RsaKeyPair};

use num_bigint::BigUint;
use rand::prelude::{SeedableRng, StdRng};

/// Outcome of a quantum-safe login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Decryption succeeded and matched the supplied password.
    Success(u64),
    /// Decryption succeeded but recovered a different value.
    Mismatch,
    /// A stored blob could not be decoded.
    Malformed(String),
}

/// Outcome of the factorization attack on classical public material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackOutcome {
    Recovered {
        p: u64,
        q: u64,
        private_exponent: BigUint,
        plaintext: BigUint,
    },
    Failed(String),
}

/// What a quantum-safe registration produces. `record` is the only part the
/// persistence shell may store; `secret_key_encoding` stays with the session
/// that will later decrypt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantumRegistration {
    pub secret_key_encoding: String,
    pub record: String,
}

/// Both engines behind one stateless call surface. Owns the process-wide
/// classical key (read-only after construction) and the lattice parameter
/// set; every per-call key is generated fresh and returned to the caller.
#[derive(Debug, Clone)]
pub struct CryptoDemo {
    rsa_key: RsaKeyPair,
    lwe_params: LweParams,
}

impl CryptoDemo {
    /// A facade over the fixed demo RSA key and the default LWE parameters.
    pub fn new() -> Self {
        Self::with_keys(DEMO_KEY_PAIR.clone(), LweParams::demo())
    }

    /// A facade over injected key material, for callers that bring their own.
    pub fn with_keys(rsa_key: RsaKeyPair, lwe_params: LweParams) -> Self {
        CryptoDemo {
            rsa_key,
            lwe_params,
        }
    }

    pub fn rsa_key(&self) -> &RsaKeyPair {
        &self.rsa_key
    }

    pub fn lwe_params(&self) -> LweParams {
        self.lwe_params
    }

    /// Encrypts a password under the classical key; the result is what the
    /// shell stores.
    pub fn classical_register(&self, password: u64) -> Result<BigUint, PQCryptoError> {
        self.rsa_key.encrypt(&BigUint::from(password))
    }

    /// Decrypts the stored ciphertext and compares it to the candidate
    /// password.
    pub fn classical_login(
        &self,
        password: u64,
        stored_ciphertext: &BigUint,
    ) -> Result<bool, PQCryptoError> {
        let decrypted = self.rsa_key.decrypt(stored_ciphertext)?;
        Ok(decrypted == BigUint::from(password))
    }

    /// Generates a fresh seeded LWE key pair and encrypts the password
    /// against a seeded row of the public matrix.
    pub fn quantum_safe_register(
        &self,
        password: u64,
        seed: u64,
    ) -> Result<QuantumRegistration, PQCryptoError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let keypair = LweKeyPair::try_with_rng(self.lwe_params, &mut rng)?;
        let public_key = keypair.public_key();

        let row = public_key.pick_row(&mut rng);
        let ciphertext = public_key.encrypt(password, row)?;

        Ok(QuantumRegistration {
            secret_key_encoding: codec::encode_secret_key(&keypair.secret_key())?,
            record: codec::encode_record(&ciphertext, &keypair.params)?,
        })
    }

    /// Decodes the session's secret material and the stored record, decrypts,
    /// and compares against the candidate password.
    pub fn quantum_safe_login(
        &self,
        password: u64,
        secret_key_encoding: &str,
        stored_record: &str,
    ) -> LoginOutcome {
        let secret_key = match codec::decode_secret_key(secret_key_encoding) {
            Ok(key) => key,
            Err(e) => return LoginOutcome::Malformed(e.to_string()),
        };
        let (params, ciphertext) = match codec::decode_record(stored_record) {
            Ok(decoded) => decoded,
            Err(e) => return LoginOutcome::Malformed(e.to_string()),
        };
        if params != secret_key.params {
            return LoginOutcome::Malformed(format!(
                "Stored record parameters {:?} do not match the session key {:?}",
                params, secret_key.params
            ));
        }

        match secret_key.decrypt(&ciphertext) {
            Ok(decrypted) if decrypted == password => LoginOutcome::Success(decrypted),
            Ok(_) => LoginOutcome::Mismatch,
            Err(e) => LoginOutcome::Malformed(e.to_string()),
        }
    }

    /// Breaks classical public material by factoring the modulus, deriving
    /// the private exponent, and decrypting the intercepted ciphertext.
    pub fn attack_classical(
        &self,
        modulus: u64,
        public_exponent: u64,
        ciphertext: u64,
    ) -> AttackOutcome {
        let Some((p, q)) = factor(modulus).into_pair() else {
            return AttackOutcome::Failed(format!(
                "No nontrivial factor of {} found within the step limit",
                modulus
            ));
        };

        let key = match RsaKeyPair::try_with(p, q, public_exponent) {
            Ok(key) => key,
            Err(e) => return AttackOutcome::Failed(e.to_string()),
        };
        let Some(private_exponent) = key.private_exponent.clone() else {
            return AttackOutcome::Failed("Key derivation produced no private exponent".to_string());
        };

        match key.decrypt(&BigUint::from(ciphertext)) {
            Ok(plaintext) => AttackOutcome::Recovered {
                p,
                q,
                private_exponent,
                plaintext,
            },
            Err(e) => AttackOutcome::Failed(e.to_string()),
        }
    }
}

impl Default for CryptoDemo {
    fn default() -> Self {
        Self::new()
    }
}
