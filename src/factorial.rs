//! Checked factorial.

use crate::error::{AdderError, AdderResult};

/// Largest `n` whose factorial fits in a `u64`.
pub const MAX_FACTORIAL_INPUT: u32 = 20;

/// Computes `n!`, with `0! = 1`.
///
/// Returns [`AdderError::FactorialOverflow`] for `n > 20`.
pub fn factorial(n: u32) -> AdderResult<u64> {
    (2..=u64::from(n))
        .try_fold(1u64, |acc, k| acc.checked_mul(k))
        .ok_or(AdderError::FactorialOverflow { n })
}
