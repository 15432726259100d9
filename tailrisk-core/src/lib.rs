//! TailRisk Core — order statistics and tail-risk measures over finite samples.
//!
//! This crate contains the numeric heart of the analysis toolkit:
//! - Partial-order selection (rank statistics without a full sort)
//! - Quantiles built on selection
//! - CVaR weight vectors with a configurable tie policy
//! - Tail expectations (lower/upper conditional value at risk)
//! - Bessel-corrected dispersion
//! - Approximate-equality and rounding primitives used by callers and tests
//!
//! All operations are pure and synchronous: samples in, scalar (or weight
//! vector) out. Inputs are never reordered — selection works on an internal
//! paired buffer, so a `&[f64]` can be shared freely across calls.

pub mod approx;
pub mod cvar;
pub mod dispersion;
pub mod error;
pub mod quantile;
pub mod select;
pub mod weights;

pub use approx::{approx_eq, approx_eq_tol, round_to, DEFAULT_TOLERANCE};
pub use cvar::{tail_expectation, tail_expectation_with_policy, TailReport};
pub use dispersion::{mean, std_dev};
pub use error::StatError;
pub use quantile::quantile;
pub use select::select_rank;
pub use weights::{cvar_weights, cvar_weights_with_policy, Tail, TiePolicy};
