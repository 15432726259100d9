//! Tail expectations — CVaR scalars and an aggregate tail report.
//!
//! The tail expectation is the dot product of a CVaR weight vector with the
//! samples: the expected value of the worst (lower) or best (upper) `alpha%`
//! of outcomes, rescaled to a full-probability basis.

use serde::{Deserialize, Serialize};

use crate::dispersion::{mean, std_dev};
use crate::error::StatError;
use crate::quantile::quantile;
use crate::weights::{cvar_weights_with_policy, Tail, TiePolicy};

/// Expected value of the `alpha%` tail of `samples`, default tie policy.
///
/// `Tail::Lower` is the CVaR in a loss framing (expected value of the worst
/// `alpha%` of outcomes); `Tail::Upper` covers the best `alpha%`. At
/// `alpha = 100` both reduce to the arithmetic mean.
pub fn tail_expectation(samples: &[f64], alpha: f64, tail: Tail) -> Result<f64, StatError> {
    tail_expectation_with_policy(samples, alpha, tail, TiePolicy::FullPartial)
}

/// Tail expectation under an explicit tie policy.
pub fn tail_expectation_with_policy(
    samples: &[f64],
    alpha: f64,
    tail: Tail,
    policy: TiePolicy,
) -> Result<f64, StatError> {
    let weights = cvar_weights_with_policy(samples, alpha, tail, policy)?;
    Ok(weights.iter().zip(samples).map(|(w, s)| w * s).sum())
}

/// Tail risk statistics for one sample set at one alpha level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TailReport {
    /// Tail mass in percent that the CVaR figures cover.
    pub alpha: f64,

    /// Expected value of the worst `alpha%` of outcomes.
    pub cvar_lower: f64,

    /// Expected value of the best `alpha%` of outcomes.
    pub cvar_upper: f64,

    /// Value at the `alpha` percentile rank.
    pub quantile: f64,

    /// Arithmetic mean of all samples.
    pub mean: f64,

    /// Bessel-corrected sample standard deviation.
    pub std_dev: f64,

    /// Number of sample observations used.
    pub sample_size: usize,
}

impl TailReport {
    /// Compute all tail statistics for `samples` at `alpha`.
    pub fn compute(samples: &[f64], alpha: f64) -> Result<Self, StatError> {
        Self::compute_with_policy(samples, alpha, TiePolicy::FullPartial)
    }

    /// Compute all tail statistics under an explicit tie policy.
    pub fn compute_with_policy(
        samples: &[f64],
        alpha: f64,
        policy: TiePolicy,
    ) -> Result<Self, StatError> {
        Ok(Self {
            alpha,
            cvar_lower: tail_expectation_with_policy(samples, alpha, Tail::Lower, policy)?,
            cvar_upper: tail_expectation_with_policy(samples, alpha, Tail::Upper, policy)?,
            quantile: quantile(samples, alpha),
            mean: mean(samples),
            std_dev: std_dev(samples),
            sample_size: samples.len(),
        })
    }
}
