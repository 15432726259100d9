//! Mean and Bessel-corrected sample standard deviation.

/// Arithmetic mean. Returns `0.0` for an empty set.
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Bessel-corrected sample standard deviation.
///
/// Returns `0.0` for fewer than two samples (defined, not an error).
pub fn std_dev(samples: &[f64]) -> f64 {
    if samples.len() < 2 {
        return 0.0;
    }
    let m = mean(samples);
    let variance =
        samples.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (samples.len() - 1) as f64;
    variance.sqrt()
}
