//! Closed-form counts used to sanity-check classifier output.

/// Number of ways to choose `r` items from `n`.
///
/// Out-of-range arguments (`r < 0` or `r > n`) give 0. Counts too large
/// for `u128` saturate at `u128::MAX`; use [`checked_binomial`] to detect
/// that case.
///
/// # Example
///
/// ```
/// use allen_automata::combinatorics::binomial;
///
/// assert_eq!(binomial(5, 2), 10);
/// assert_eq!(binomial(5, 6), 0);
/// ```
pub fn binomial(n: i64, r: i64) -> u128 {
    checked_binomial(n, r).unwrap_or(u128::MAX)
}

/// Number of ways to choose `r` items from `n`, or `None` when the count
/// does not fit in `u128`.
pub fn checked_binomial(n: i64, r: i64) -> Option<u128> {
    if r < 0 || r > n {
        return Some(0);
    }

    let r = r.min(n - r) as u128;
    let n = n as u128;
    // acc is C(n - r + i - 1, i - 1) on entry, so acc * (n - r + i) is
    // divisible by i. Cancel the common factors first so the product only
    // overflows when the result itself does.
    (1..=r).try_fold(1u128, |acc, i| {
        let g = gcd(acc, i);
        let num = (n - r + i) / (i / g);
        (acc / g).checked_mul(num)
    })
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Number of distinct relative orderings of four marked points among `n`
/// ticks: `sum(binomial(i, i - 4) for i in 4..=n)`, or 0 when `n < 4`.
///
/// Saturates at `u128::MAX`.
pub fn count_order_patterns(n: i64) -> u128 {
    if n < 4 {
        return 0;
    }

    (4..=n).fold(0u128, |total, i| total.saturating_add(binomial(i, i - 4)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binomial_small_values() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(5, 0), 1);
        assert_eq!(binomial(5, 5), 1);
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(10, 3), 120);
        assert_eq!(binomial(52, 5), 2_598_960);
    }

    #[test]
    fn binomial_out_of_range_is_zero() {
        assert_eq!(binomial(5, 6), 0);
        assert_eq!(binomial(5, -1), 0);
        assert_eq!(binomial(-3, 2), 0);
    }

    #[test]
    fn order_patterns_below_four_are_zero() {
        assert_eq!(count_order_patterns(3), 0);
        assert_eq!(count_order_patterns(0), 0);
        assert_eq!(count_order_patterns(-7), 0);
    }

    #[test]
    fn order_patterns_accumulate() {
        assert_eq!(count_order_patterns(4), 1);
        assert_eq!(count_order_patterns(5), 6);
        assert_eq!(count_order_patterns(6), 21);
        assert_eq!(count_order_patterns(25), binomial(26, 5));
    }

    #[test]
    fn binomial_is_exact_near_the_u128_limit() {
        assert_eq!(binomial(130, 65), 95_067_625_827_960_698_145_584_333_020_095_113_100);
        assert_eq!(
            checked_binomial(130, 65),
            Some(95_067_625_827_960_698_145_584_333_020_095_113_100)
        );
        assert_eq!(binomial(130, 64), binomial(130, 66));
    }

    #[test]
    fn binomial_saturates_past_u128() {
        assert_eq!(checked_binomial(200, 100), None);
        assert_eq!(binomial(200, 100), u128::MAX);
        assert_eq!(checked_binomial(200, 0), Some(1));
    }

    #[test]
    fn order_patterns_over_many_ticks() {
        assert_eq!(count_order_patterns(199), 2_535_650_040);
        assert_eq!(count_order_patterns(199), binomial(200, 5));
    }
}
