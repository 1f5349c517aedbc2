//! Scripted walkthrough of both schemes: classical register/login, the
//! factorization attack that breaks it, and the lattice register/login that
//! survives it. A stand-in for a real presentation shell.

use pq_crypto::errors::PQCryptoError;
use pq_crypto::facade::{AttackOutcome, CryptoDemo, LoginOutcome};
use pq_crypto::rsa::{DEMO_P, DEMO_PUBLIC_EXPONENT, DEMO_Q};

use num_bigint::BigUint;
use num_traits::ToPrimitive;

const PASSWORD: u64 = 65;
const LATTICE_SEED: u64 = 12345;

fn main() -> Result<(), PQCryptoError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let demo = CryptoDemo::new();
    let rsa_key = demo.rsa_key();
    log::info!(
        "classical key: n = {} (= {} * {}), e = {}",
        rsa_key.modulus,
        DEMO_P,
        DEMO_Q,
        DEMO_PUBLIC_EXPONENT
    );

    // --- classical flow ---
    let stored = demo.classical_register(PASSWORD)?;
    log::info!("classical register: password {} stored as {}", PASSWORD, stored);

    if demo.classical_login(PASSWORD, &stored)? {
        log::info!("classical login successful");
    } else {
        log::error!("classical login rejected the correct password");
    }

    // --- the attack, driven purely by the key's public half ---
    let modulus = big_to_u64(&rsa_key.modulus)?;
    let public_exponent = big_to_u64(&rsa_key.public_exponent)?;
    let intercepted = big_to_u64(&stored)?;
    match demo.attack_classical(modulus, public_exponent, intercepted) {
        AttackOutcome::Recovered {
            p,
            q,
            private_exponent,
            plaintext,
        } => {
            log::warn!(
                "factoring attack succeeded: p = {}, q = {}, d = {}, recovered password = {}",
                p,
                q,
                private_exponent,
                plaintext
            );
        }
        AttackOutcome::Failed(reason) => log::info!("factoring attack failed: {}", reason),
    }

    // --- quantum-safe flow ---
    let registration = demo.quantum_safe_register(PASSWORD, LATTICE_SEED)?;
    log::info!(
        "lattice register: stored record is {} bytes of public material",
        registration.record.len()
    );

    match demo.quantum_safe_login(PASSWORD, &registration.secret_key_encoding, &registration.record)
    {
        LoginOutcome::Success(value) => log::info!("lattice login successful, decrypted {}", value),
        LoginOutcome::Mismatch => log::error!("lattice login mismatched the correct password"),
        LoginOutcome::Malformed(reason) => log::error!("lattice login failed: {}", reason),
    }

    Ok(())
}

fn big_to_u64(value: &BigUint) -> Result<u64, PQCryptoError> {
    value.to_u64().ok_or_else(|| {
        PQCryptoError::InternalError(format!("Value {} exceeds u64", value))
    })
}
