#![allow(non_snake_case)]

//! Side-by-side demo of a classical RSA-style scheme and a post-quantum-style
//! LWE scheme, plus the trial-division attack that breaks the classical one.
//!
//! Not a production cryptographic library: primes are demonstration-scale and
//! no side-channel resistance is attempted.

pub mod codec;
pub mod errors;
pub mod facade;
pub mod factor;
pub mod lattice;
pub mod modular;
pub mod ring;
pub mod rsa;

pub use errors::PQCryptoError;
pub use facade::{AttackOutcome, CryptoDemo, LoginOutcome, QuantumRegistration};
