//! Small numeric helpers shared by the scorers

/// Arithmetic mean. Returns 0.0 for an empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Returns 0.0 for fewer than two values.
pub(crate) fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Consistency score: 1 minus coefficient of variation, clamped to [0, 1].
///
/// Series shorter than two values are trivially consistent. A zero mean with
/// zero spread (all-zero series) also counts as fully consistent.
pub(crate) fn consistency(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 1.0;
    }
    let m = mean(values);
    if m == 0.0 {
        return 1.0;
    }
    (1.0 - std_dev(values) / m).clamp(0.0, 1.0)
}
