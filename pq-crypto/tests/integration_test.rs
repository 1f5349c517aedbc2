use num_bigint::BigUint;
use pq_crypto::errors::PQCryptoError;
use pq_crypto::facade::{AttackOutcome, CryptoDemo, LoginOutcome};
use pq_crypto::rsa::recover_private_key;

#[test]
fn classical_happy_flow() -> Result<(), PQCryptoError> {
    let demo = CryptoDemo::new();

    let stored = demo.classical_register(65)?;
    assert_eq!(stored, BigUint::from(2790u32));

    assert!(demo.classical_login(65, &stored)?);
    assert!(!demo.classical_login(64, &stored)?);

    Ok(())
}

#[test]
fn quantum_safe_happy_flow() -> Result<(), PQCryptoError> {
    let demo = CryptoDemo::new();

    let registration = demo.quantum_safe_register(2024, 12345)?;

    let outcome =
        demo.quantum_safe_login(2024, &registration.secret_key_encoding, &registration.record);
    assert_eq!(outcome, LoginOutcome::Success(2024));

    let outcome =
        demo.quantum_safe_login(2025, &registration.secret_key_encoding, &registration.record);
    assert_eq!(outcome, LoginOutcome::Mismatch);

    Ok(())
}

#[test]
fn quantum_safe_record_survives_storage_round_trip() -> Result<(), PQCryptoError> {
    let demo = CryptoDemo::new();
    let registration = demo.quantum_safe_register(777, 9)?;

    // The shell stores and retrieves opaque strings; a byte-identical copy
    // must verify exactly like the original.
    let stored_copy: String = registration.record.clone();
    let outcome = demo.quantum_safe_login(777, &registration.secret_key_encoding, &stored_copy);
    assert_eq!(outcome, LoginOutcome::Success(777));

    Ok(())
}

#[test]
fn attack_breaks_the_classical_flow_end_to_end() -> Result<(), PQCryptoError> {
    let demo = CryptoDemo::new();

    // Victim registers with the classical scheme.
    let stored = demo.classical_register(65)?;
    let intercepted: u64 = 2790;
    assert_eq!(stored, BigUint::from(intercepted));

    // Attacker sees only public material and the stored ciphertext.
    match demo.attack_classical(3233, 17, intercepted) {
        AttackOutcome::Recovered {
            p,
            q,
            private_exponent,
            plaintext,
        } => {
            assert_eq!((p, q), (61, 53));
            assert_eq!(private_exponent, BigUint::from(2753u32));
            assert_eq!(plaintext, BigUint::from(65u32));
        }
        AttackOutcome::Failed(reason) => panic!("attack should succeed: {}", reason),
    }

    Ok(())
}

#[test]
fn attack_does_not_transfer_to_the_lattice_scheme() -> Result<(), PQCryptoError> {
    // The recovered RSA private key is useless against the LWE record: the
    // only way in is the session's secret vector.
    let demo = CryptoDemo::new();
    let registration = demo.quantum_safe_register(512, 31)?;

    let recovered = recover_private_key(3233, 17)?;
    assert_eq!(recovered.private_exponent, Some(BigUint::from(2753u32)));

    let outcome = demo.quantum_safe_login(512, &registration.secret_key_encoding, &registration.record);
    assert_eq!(outcome, LoginOutcome::Success(512));

    // Without the secret encoding there is nothing to decrypt with.
    let outcome = demo.quantum_safe_login(512, &registration.record, &registration.record);
    assert!(matches!(outcome, LoginOutcome::Malformed(_)));

    Ok(())
}
