//! Running-total accumulator.
//!
//! An [`Accumulator`] holds a signed 64-bit total that grows one value at a
//! time. What happens when a value pushes the total past the `i64` range is
//! decided by its [`OverflowPolicy`]:
//!
//! | Policy     | `add` on overflow             | `try_add` on overflow |
//! |------------|-------------------------------|-----------------------|
//! | `Wrap`     | two's complement wrap         | `Err(Overflow)`       |
//! | `Saturate` | clamps to `i64::MIN`/`MAX`    | `Err(Overflow)`       |
//! | `Error`    | value recorded, total kept    | `Err(Overflow)`       |
//!
//! `Wrap` is the default. Under `Error`, `add` stays infallible but keeps the
//! first overflowing operation; [`Accumulator::overflowed`] and
//! [`Accumulator::check`] report it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{AdderError, AdderResult};

/// How an add that leaves the `i64` range is resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    #[default]
    Wrap,
    Saturate,
    Error,
}

impl OverflowPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Saturate => "saturate",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OverflowPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wrap" => Ok(Self::Wrap),
            "saturate" => Ok(Self::Saturate),
            "error" => Ok(Self::Error),
            other => Err(format!(
                "unknown overflow policy '{other}' (expected wrap, saturate or error)"
            )),
        }
    }
}

/// Holds a running integer sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Accumulator {
    total: i64,
    policy: OverflowPolicy,
    /// First `(total, value)` that overflowed under `OverflowPolicy::Error`.
    first_overflow: Option<(i64, i64)>,
}

impl Accumulator {
    /// Creates an accumulator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an accumulator starting at `initial`.
    pub fn with_initial(initial: i64) -> Self {
        Self {
            total: initial,
            ..Self::default()
        }
    }

    /// Sets the overflow policy used by [`Accumulator::add`].
    pub fn with_policy(mut self, policy: OverflowPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> OverflowPolicy {
        self.policy
    }

    /// Adds `value` to the total under the accumulator's policy.
    ///
    /// Never fails. Under [`OverflowPolicy::Error`] an overflowing value is
    /// not applied and is recorded; see [`Accumulator::check`].
    pub fn add(&mut self, value: i64) {
        self.total = match self.policy {
            OverflowPolicy::Wrap => self.total.wrapping_add(value),
            OverflowPolicy::Saturate => self.total.saturating_add(value),
            OverflowPolicy::Error => match self.total.checked_add(value) {
                Some(sum) => sum,
                None => {
                    tracing::debug!(
                        total = self.total,
                        value,
                        "[accumulator] overflow recorded"
                    );
                    self.record_overflow(value);
                    self.total
                }
            },
        };
    }

    /// Checked add. On overflow the total is left untouched.
    pub fn try_add(&mut self, value: i64) -> AdderResult<()> {
        match self.total.checked_add(value) {
            Some(sum) => {
                self.total = sum;
                Ok(())
            }
            None => Err(AdderError::Overflow {
                total: self.total,
                value,
            }),
        }
    }

    /// Adds every value in order, as `add` would.
    pub fn add_all<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = i64>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Applies the policy to a whole sequence, failing on the first overflow
    /// when the policy is [`OverflowPolicy::Error`].
    ///
    /// Values before the overflowing one stay applied.
    pub fn apply<I>(&mut self, values: I) -> AdderResult<()>
    where
        I: IntoIterator<Item = i64>,
    {
        for value in values {
            match self.policy {
                OverflowPolicy::Error => self.try_add(value).inspect_err(|_| {
                    self.record_overflow(value);
                })?,
                _ => self.add(value),
            }
        }
        Ok(())
    }

    fn record_overflow(&mut self, value: i64) {
        if self.first_overflow.is_none() {
            self.first_overflow = Some((self.total, value));
        }
    }

    /// True once any add under [`OverflowPolicy::Error`] has overflowed.
    pub fn overflowed(&self) -> bool {
        self.first_overflow.is_some()
    }

    /// Reports the first recorded overflow as [`AdderError::Overflow`].
    pub fn check(&self) -> AdderResult<()> {
        match self.first_overflow {
            Some((total, value)) => Err(AdderError::Overflow { total, value }),
            None => Ok(()),
        }
    }

    /// Current running sum.
    pub fn total(&self) -> i64 {
        self.total
    }
}

impl Extend<i64> for Accumulator {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        self.add_all(iter);
    }
}

impl FromIterator<i64> for Accumulator {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let mut acc = Accumulator::new();
        acc.add_all(iter);
        acc
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total {}", self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_starts_at_zero() {
        let acc = Accumulator::new();
        assert_eq!(acc.total(), 0);
        assert_eq!(acc.policy(), OverflowPolicy::Wrap);
    }

    #[test]
    fn test_demo_sequence() {
        let mut acc = Accumulator::with_initial(0);
        acc.add(10);
        acc.add(20);
        acc.add(30);
        assert_eq!(acc.total(), 60);
        assert_eq!(acc.to_string(), "Total 60");
    }

    #[test]
    fn test_initial_cancelled_by_negative() {
        let mut acc = Accumulator::with_initial(5);
        acc.add(-5);
        assert_eq!(acc.total(), 0);
    }

    #[test]
    fn test_total_is_idempotent() {
        let mut acc = Accumulator::with_initial(7);
        acc.add(3);
        let first = acc.total();
        assert_eq!(acc.total(), first);
        assert_eq!(acc.total(), first);
    }

    #[test]
    fn test_wrap_policy() {
        let mut acc = Accumulator::with_initial(i64::MAX);
        acc.add(1);
        assert_eq!(acc.total(), i64::MIN);

        let mut acc = Accumulator::with_initial(i64::MIN);
        acc.add(-1);
        assert_eq!(acc.total(), i64::MAX);
    }

    #[test]
    fn test_saturate_policy() {
        let mut acc = Accumulator::with_initial(i64::MAX).with_policy(OverflowPolicy::Saturate);
        acc.add(1);
        assert_eq!(acc.total(), i64::MAX);
        acc.add(-10);
        assert_eq!(acc.total(), i64::MAX - 10);

        let mut acc = Accumulator::with_initial(i64::MIN).with_policy(OverflowPolicy::Saturate);
        acc.add(-1);
        assert_eq!(acc.total(), i64::MIN);
    }

    #[test]
    fn test_error_policy_records_overflow() {
        let mut acc = Accumulator::with_initial(i64::MAX - 1).with_policy(OverflowPolicy::Error);
        assert!(!acc.overflowed());
        assert!(acc.check().is_ok());

        acc.add(5);
        assert_eq!(acc.total(), i64::MAX - 1);
        assert!(acc.overflowed());

        acc.add(1);
        assert_eq!(acc.total(), i64::MAX);
        // First overflow is kept
        assert!(matches!(
            acc.check(),
            Err(AdderError::Overflow { total, value: 5 }) if total == i64::MAX - 1
        ));
    }

    #[test]
    fn test_extend_under_error_policy_reports_overflow() {
        let mut acc = Accumulator::with_initial(i64::MAX - 1).with_policy(OverflowPolicy::Error);
        acc.extend([5, -3]);

        assert!(acc.overflowed());
        let err = acc.check().unwrap_err();
        assert!(matches!(err, AdderError::Overflow { value: 5, .. }));
    }

    #[test]
    fn test_wrap_and_saturate_never_flag_overflow() {
        let mut wrap = Accumulator::with_initial(i64::MAX);
        wrap.add(1);
        assert!(!wrap.overflowed());

        let mut sat = Accumulator::with_initial(i64::MAX).with_policy(OverflowPolicy::Saturate);
        sat.add(1);
        assert!(sat.check().is_ok());
    }

    #[test]
    fn test_try_add_reports_overflow() {
        let mut acc = Accumulator::with_initial(i64::MAX);
        let err = acc.try_add(1).unwrap_err();
        match err {
            AdderError::Overflow { total, value } => {
                assert_eq!(total, i64::MAX);
                assert_eq!(value, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(acc.total(), i64::MAX);
        assert!(acc.try_add(-1).is_ok());
        assert_eq!(acc.total(), i64::MAX - 1);
    }

    #[test]
    fn test_apply_stops_at_first_overflow() {
        let mut acc = Accumulator::new().with_policy(OverflowPolicy::Error);
        let result = acc.apply([1, i64::MAX, 100]);
        assert!(matches!(result, Err(AdderError::Overflow { total: 1, .. })));
        assert_eq!(acc.total(), 1);
        assert!(acc.overflowed());
    }

    #[test]
    fn test_apply_wraps_without_error() {
        let mut acc = Accumulator::with_initial(i64::MAX);
        assert!(acc.apply([1, 1]).is_ok());
        assert_eq!(acc.total(), i64::MIN + 1);
    }

    #[test]
    fn test_collect_and_extend() {
        let mut acc: Accumulator = vec![1, 2, 3].into_iter().collect();
        assert_eq!(acc.total(), 6);
        acc.extend([4, 5]);
        assert_eq!(acc.total(), 15);
    }

    #[test]
    fn test_policy_parse() {
        assert_eq!("wrap".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Wrap));
        assert_eq!(
            "Saturate".parse::<OverflowPolicy>(),
            Ok(OverflowPolicy::Saturate)
        );
        assert_eq!("ERROR".parse::<OverflowPolicy>(), Ok(OverflowPolicy::Error));
        assert!("clamp".parse::<OverflowPolicy>().is_err());
        assert_eq!(OverflowPolicy::Saturate.to_string(), "saturate");
    }

    proptest! {
        /// Property: total equals initial plus the sum of all added values
        #[test]
        fn prop_total_is_initial_plus_sum(
            initial in -1_000_000i64..1_000_000i64,
            values in prop::collection::vec(-1_000_000i64..1_000_000i64, 0..64),
        ) {
            let mut acc = Accumulator::with_initial(initial);
            for v in &values {
                acc.add(*v);
            }
            prop_assert_eq!(acc.total(), initial + values.iter().sum::<i64>());
        }

        /// Property: wrapping add matches i64 wrapping arithmetic for any input
        #[test]
        fn prop_wrap_is_deterministic(initial in any::<i64>(), value in any::<i64>()) {
            let mut a = Accumulator::with_initial(initial);
            let mut b = Accumulator::with_initial(initial);
            a.add(value);
            b.add(value);
            prop_assert_eq!(a.total(), initial.wrapping_add(value));
            prop_assert_eq!(a.total(), b.total());
        }

        /// Property: try_add either succeeds with the exact sum or leaves total unchanged
        #[test]
        fn prop_try_add_is_exact_or_untouched(initial in any::<i64>(), value in any::<i64>()) {
            let mut acc = Accumulator::with_initial(initial);
            match initial.checked_add(value) {
                Some(sum) => {
                    prop_assert!(acc.try_add(value).is_ok());
                    prop_assert_eq!(acc.total(), sum);
                }
                None => {
                    prop_assert!(acc.try_add(value).is_err());
                    prop_assert_eq!(acc.total(), initial);
                }
            }
        }
    }
}
