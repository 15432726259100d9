//! Approximate floating-point equality and decimal rounding.
//!
//! Consumed by callers comparing computed statistics against expectations;
//! the default tolerance matches the surrounding toolkit's convention.

/// Default absolute tolerance for approximate equality.
pub const DEFAULT_TOLERANCE: f64 = 1e-4;

/// `|x - y| < DEFAULT_TOLERANCE`.
pub fn approx_eq(x: f64, y: f64) -> bool {
    approx_eq_tol(x, y, DEFAULT_TOLERANCE)
}

/// `|x - y| < tol`. False whenever either side is NaN.
pub fn approx_eq_tol(x: f64, y: f64, tol: f64) -> bool {
    (x - y).abs() < tol
}

/// Round half-up to `digits` decimal places.
pub fn round_to(v: f64, digits: i32) -> f64 {
    let factor = 10.0_f64.powi(digits);
    ((v * factor) + 0.5).floor() / factor
}
