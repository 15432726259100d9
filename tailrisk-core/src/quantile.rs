//! Quantile lookup built on partial selection.

use crate::select::select_rank;

/// Value at the `percent` rank of `samples`.
///
/// An empty set returns `0.0` (defined degenerate value, not an error); a
/// single-element set returns that element for every percentile. For n ≥ 1,
/// `quantile(v, 0)` is the minimum and `quantile(v, 100)` the maximum.
///
/// The input is never reordered, so repeated calls return the same value.
pub fn quantile(samples: &[f64], percent: f64) -> f64 {
    match select_rank(samples, percent) {
        Some(idx) => samples[idx],
        None => 0.0,
    }
}
