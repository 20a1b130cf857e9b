// File: src/core/pingala.rs
//! Pingala's count of laghu/guru patterns.
//!
//! With laghu taking one unit and guru two, the number of patterns filling
//! `n` units follows `M(0) = 1, M(1) = 1, M(k) = M(k-1) + M(k-2)`.

/// `M(n)`, or `None` once the count no longer fits in a `u128` (n >= 186).
pub fn pingala_count(n: usize) -> Option<u128> {
    let (mut prev, mut current): (u128, u128) = (1, 1);
    for _ in 1..n {
        let next = prev.checked_add(current)?;
        prev = current;
        current = next;
    }
    Some(current)
}

/// `(k, M(k))` for `k` in `1..=n`, stopping at the first count that overflows.
pub fn pingala_series(n: usize) -> Vec<(usize, u128)> {
    let mut series = Vec::with_capacity(n);
    let (mut prev, mut current): (u128, u128) = (1, 1);
    for k in 1..=n {
        if k > 1 {
            match prev.checked_add(current) {
                Some(next) => {
                    prev = current;
                    current = next;
                }
                None => break,
            }
        }
        series.push((k, current));
    }
    series
}
