//! Reductions over plain integer sequences.

use crate::error::{AggregateError, Result};
use std::collections::BTreeMap;
use tracing::trace;

/// Sum of all values. Returns 0 for empty input. Overflow wraps around.
pub fn sum(numbers: impl IntoIterator<Item = i64>) -> i64 {
    numbers.into_iter().fold(0, i64::wrapping_add)
}

/// Product of all values.
///
/// Returns 0 (not 1) for empty input. Overflow wraps around.
pub fn product(numbers: impl IntoIterator<Item = i64>) -> i64 {
    numbers
        .into_iter()
        .reduce(|acc, n| acc.wrapping_mul(n))
        .unwrap_or(0)
}

/// Sum of the odd values only. Overflow wraps around.
pub fn odd_sum(numbers: impl IntoIterator<Item = i64>) -> i64 {
    numbers
        .into_iter()
        .filter(|n| n % 2 != 0)
        .fold(0, i64::wrapping_add)
}

/// Groups values by `n % modulus` and sums each group.
///
/// Only remainders that actually occur become keys. The remainder takes the
/// sign of the value, so negative inputs produce negative keys. Group sums
/// wrap around on overflow.
///
/// # Errors
///
/// Returns [`AggregateError::DivisionByZero`] when `modulus` is zero.
pub fn sum_by_remainder(
    modulus: i64,
    numbers: impl IntoIterator<Item = i64>,
) -> Result<BTreeMap<i64, i64>> {
    if modulus == 0 {
        return Err(AggregateError::DivisionByZero { divisor: "modulus" });
    }

    let mut groups = BTreeMap::new();
    for n in numbers {
        let group = groups.entry(n.wrapping_rem(modulus)).or_insert(0i64);
        *group = group.wrapping_add(n);
    }

    trace!(modulus, groups = groups.len(), "Grouped values by remainder");
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum() {
        assert_eq!(sum([]), 0);
        assert_eq!(sum([1, 2, 3]), 6);
    }

    #[test]
    fn test_product_empty_is_zero() {
        assert_eq!(product([]), 0);
    }

    #[test]
    fn test_product() {
        assert_eq!(product([2, 3, 4]), 24);
        assert_eq!(product([7]), 7);
        assert_eq!(product([5, 0, 3]), 0);
    }

    #[test]
    fn test_sum_wraps_on_overflow() {
        assert_eq!(sum([i64::MAX, 1]), i64::MIN);
        assert_eq!(sum([i64::MIN, -1]), i64::MAX);
    }

    #[test]
    fn test_product_wraps_on_overflow() {
        assert_eq!(product([i64::MAX, 2]), -2);
    }

    #[test]
    fn test_odd_sum_wraps_on_overflow() {
        assert_eq!(odd_sum([i64::MAX, 2, 1]), i64::MIN);
    }

    #[test]
    fn test_odd_sum() {
        assert_eq!(odd_sum([1, 2, 3, 4, 5]), 9);
        assert_eq!(odd_sum([2, 4, 6]), 0);
        assert_eq!(odd_sum([-3, -2, 1]), -2);
    }

    #[test]
    fn test_sum_by_remainder() {
        let groups = sum_by_remainder(3, [1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(groups, BTreeMap::from([(0, 9), (1, 5), (2, 7)]));
    }

    #[test]
    fn test_sum_by_remainder_only_observed_keys() {
        let groups = sum_by_remainder(5, [10, 15, 3]).unwrap();
        assert_eq!(groups, BTreeMap::from([(0, 25), (3, 3)]));
    }

    #[test]
    fn test_sum_by_remainder_min_value_with_negative_one() {
        let groups = sum_by_remainder(-1, [i64::MIN]).unwrap();
        assert_eq!(groups, BTreeMap::from([(0, i64::MIN)]));
    }

    #[test]
    fn test_sum_by_remainder_group_wraps_on_overflow() {
        let groups = sum_by_remainder(2, [i64::MAX, 1]).unwrap();
        assert_eq!(groups, BTreeMap::from([(1, i64::MIN)]));
    }

    #[test]
    fn test_sum_by_remainder_zero_modulus() {
        assert_eq!(
            sum_by_remainder(0, [1, 2]),
            Err(AggregateError::DivisionByZero { divisor: "modulus" })
        );
    }
}
