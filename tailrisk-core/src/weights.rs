//! CVaR weight vectors — per-sample probability mass for a tail expectation.
//!
//! The weight vector turns a single order statistic into an exact tail
//! expectation: a pivot at the `alpha` percentile partitions the samples,
//! whole unit weights (`1/n`, rescaled) cover the strict side of the tail,
//! and the residual mass lands on the samples equal to the pivot. The dot
//! product of the weights with the samples is the CVaR on a full-probability
//! basis (see `cvar`).
//!
//! Known boundary case, kept deliberately under the default tie policy: when
//! several samples equal the pivot, each receives the full residual weight,
//! so the tail mass can drift from `alpha/100`. `TiePolicy::SplitAcrossTies`
//! spreads the uncovered tail mass evenly across the duplicates instead.

use serde::{Deserialize, Serialize};

use crate::error::StatError;
use crate::select::select_rank;

/// Which end of the distribution the tail expectation covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tail {
    /// The worst `alpha%` of outcomes (loss framing).
    Lower,
    /// The best `alpha%` of outcomes.
    Upper,
}

/// How the residual mass is assigned when several samples equal the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TiePolicy {
    /// Every pivot-equal sample gets the full residual weight. With
    /// duplicate pivots the residual is counted once per duplicate, so the
    /// tail mass can drift from `alpha/100`.
    FullPartial,
    /// The tail mass not covered by whole-unit samples strictly inside the
    /// tail is divided evenly across pivot-equal samples. Conserves
    /// `sum(weights) == 1` for the lower tail.
    SplitAcrossTies,
}

impl Default for TiePolicy {
    fn default() -> Self {
        TiePolicy::FullPartial
    }
}

/// CVaR weights under the default `TiePolicy::FullPartial`.
pub fn cvar_weights(samples: &[f64], alpha: f64, tail: Tail) -> Result<Vec<f64>, StatError> {
    cvar_weights_with_policy(samples, alpha, tail, TiePolicy::FullPartial)
}

/// Build the per-sample weight vector for a tail expectation at `alpha`.
///
/// Returns a vector aligned index-for-index with `samples`, every entry
/// non-negative. `alpha` outside `(0, 100]` or an empty sample set is an
/// error. Non-finite samples are not filtered; NaN comparisons are false, so
/// a NaN sample sorts to the top under `total_cmp` and never matches the
/// pivot — callers wanting defined results should pre-validate finiteness.
pub fn cvar_weights_with_policy(
    samples: &[f64],
    alpha: f64,
    tail: Tail,
    policy: TiePolicy,
) -> Result<Vec<f64>, StatError> {
    if !(alpha > 0.0 && alpha <= 100.0) {
        return Err(StatError::InvalidAlpha(alpha));
    }
    let n = samples.len();
    let Some(pivot_idx) = select_rank(samples, alpha) else {
        return Err(StatError::EmptySample);
    };

    // At full mass the tail is the whole sample: the incremental formula
    // below would leave the pivot a zero residual, breaking the
    // alpha = 100 → mean identity.
    if alpha == 100.0 {
        return Ok(vec![1.0 / n as f64; n]);
    }

    let pivot = samples[pivot_idx];

    let unit = 1.0 / n as f64;
    // Whole unit-weight samples covering the tail before the pivot tie.
    // Same product form as the selection rank: floor() stays exact when
    // alpha * n / 100 is an integer, where the quotient form
    // (alpha/100)/unit can land just below it. Clamping the residual at
    // zero absorbs the last ulp of the subtraction.
    let full_parts = ((alpha * n as f64) / 100.0).floor();
    let partial = ((alpha / 100.0) - full_parts * unit).max(0.0);

    // Rescale so the tail weights sum to a full unit of probability.
    let scale = 100.0 / alpha;
    let weight = unit * scale;

    let strictly_in_tail = |value: f64| match tail {
        Tail::Lower => value < pivot,
        Tail::Upper => value > pivot,
    };

    let partial = match policy {
        TiePolicy::FullPartial => partial * scale,
        TiePolicy::SplitAcrossTies => {
            let strict = samples.iter().filter(|&&s| strictly_in_tail(s)).count();
            let ties = samples.iter().filter(|&&s| s == pivot).count();
            // Mass the ties must collectively carry, never negative.
            let uncovered = (alpha / 100.0 - strict as f64 * unit).max(0.0);
            uncovered * scale / ties as f64
        }
    };

    let weights = samples
        .iter()
        .map(|&value| {
            if value == pivot {
                partial
            } else if strictly_in_tail(value) {
                weight
            } else {
                0.0
            }
        })
        .collect();

    Ok(weights)
}
