//! Partial-order selection using `select_nth_unstable_by` (introselect).
//!
//! Given a target percentile, finds the element that would occupy that rank
//! under a full ascending sort — in expected O(n) — without sorting. The
//! reordering happens on an internal buffer of (value, original index)
//! pairs, so the caller's slice is never mutated and can be indexed with the
//! returned position afterwards.

/// Return the original index of the value at the `percent` rank.
///
/// The rank is `min(floor(percent * n / 100), n - 1)`; percentiles below 0
/// clamp to rank 0. Returns `None` for an empty slice and `Some(0)` for a
/// single element.
///
/// Among tied values the rank *value* is deterministic, but which duplicate's
/// original index is reported is not.
pub fn select_rank(samples: &[f64], percent: f64) -> Option<usize> {
    let n = samples.len();
    if n == 0 {
        return None;
    }
    if n == 1 {
        return Some(0);
    }

    let mut paired: Vec<(f64, usize)> = samples.iter().copied().zip(0..n).collect();

    // max(0.0) also normalizes a NaN percentile to rank 0.
    let rank = (((percent * n as f64) / 100.0).floor().max(0.0) as usize).min(n - 1);

    let (_, &mut (_, original), _) =
        paired.select_nth_unstable_by(rank, |a, b| a.0.total_cmp(&b.0));
    Some(original)
}
