//! Generic signal rules. [`super::ReferenceRule`] packages them as a registrable model.

/// Window of the rolling mean applied before jump detection.
pub const JUMP_ROLLING_WINDOW: usize = 5;

/// Check a signal against a reference value.
///
/// A sample is "near" the reference when `|x - relevant_value| < threshold`.
/// If `relevant_value_means_anomaly`, the signal is regular when at least
/// `outlier_intolerance` of its samples stay away from the reference; otherwise
/// it is regular when at least that share stays near it. Returns `true` on anomaly.
pub fn classify_against_reference(
    signal: &[f64],
    relevant_value: f64,
    relevant_value_means_anomaly: bool,
    threshold: f64,
    outlier_intolerance: f64,
) -> bool {
    if signal.is_empty() {
        return false;
    }
    let near = signal
        .iter()
        .filter(|x| (*x - relevant_value).abs() < threshold)
        .count();
    let len = signal.len() as f64;
    let regular = if relevant_value_means_anomaly {
        (signal.len() - near) as f64 / len >= outlier_intolerance
    } else {
        near as f64 / len >= outlier_intolerance
    };
    !regular
}

/// Whether the smoothed signal changes by more than `threshold` within fewer than
/// `max_offset` samples.
///
/// Single-sample spikes are flattened by a rolling mean over [`JUMP_ROLLING_WINDOW`]
/// samples first. Signals shorter than the window never have jumps.
pub fn has_jumps(signal: &[f64], threshold: f64, max_offset: usize) -> bool {
    if signal.len() < JUMP_ROLLING_WINDOW {
        return false;
    }
    let rolling: Vec<f64> = signal
        .windows(JUMP_ROLLING_WINDOW)
        .map(|w| w.iter().sum::<f64>() / JUMP_ROLLING_WINDOW as f64)
        .collect();

    let mut max_difference = f64::NEG_INFINITY;
    for offset in 1..max_offset {
        for i in offset..rolling.len() {
            max_difference = max_difference.max((rolling[i] - rolling[i - offset]).abs());
        }
    }
    max_difference > threshold
}
