//! Trial-division factorization of a composite modulus.
//!
//! This is the "simulated quantum" step of the demo: where a real adversary
//! would run Shor's algorithm, we run classical trial division in O(sqrt(n)).
//! That is only viable for demonstration-scale moduli, which is the point —
//! the classical scheme here uses primes small enough to break on a laptop.

use serde::{Deserialize, Serialize};

/// Upper bound on the number of odd candidates `factor` will try before
/// giving up, so adversarially large input cannot stall a caller.
pub const TRIAL_DIVISION_STEP_LIMIT: u64 = 1 << 26;

/// The outcome of a factorization attempt: both factors on success, both
/// absent when no nontrivial divisor was found within the step limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorizationResult {
    pub p: Option<u64>,
    pub q: Option<u64>,
}

impl FactorizationResult {
    fn found(p: u64, q: u64) -> Self {
        FactorizationResult {
            p: Some(p),
            q: Some(q),
        }
    }

    fn none() -> Self {
        FactorizationResult { p: None, q: None }
    }

    /// Both factors, or `None` when the attempt failed.
    pub fn into_pair(self) -> Option<(u64, u64)> {
        match (self.p, self.q) {
            (Some(p), Some(q)) => Some((p, q)),
            _ => None,
        }
    }
}

/// Finds the smallest nontrivial factor of `n` and its cofactor.
///
/// Checks divisibility by 2 first, then scans odd candidates from 3 up to
/// `isqrt(n)` inclusive. Deterministic: a composite `n` always yields its
/// smallest prime factor as `p` and `n / p` as `q`. Returns the absent
/// result for `n` prime, `n <= 1`, or when the step limit is exhausted.
///
/// # Example
///
/// ```
/// # use pq_crypto::factor::factor;
/// assert_eq!(factor(3233).into_pair(), Some((61, 53)));
/// assert_eq!(factor(61).into_pair(), None);
/// ```
pub fn factor(n: u64) -> FactorizationResult {
    if n <= 2 {
        return FactorizationResult::none();
    }
    if n % 2 == 0 {
        return FactorizationResult::found(2, n / 2);
    }

    let max_factor = n.isqrt();
    let mut candidate = 3u64;
    let mut steps = 0u64;

    while candidate <= max_factor {
        if steps >= TRIAL_DIVISION_STEP_LIMIT {
            return FactorizationResult::none();
        }
        if n % candidate == 0 {
            return FactorizationResult::found(candidate, n / candidate);
        }
        candidate += 2;
        steps += 1;
    }

    FactorizationResult::none()
}
