//! Signal normalization applied before model inference.

use autodiag_core::models::NormalizationMethod;

/// Normalize `samples` with `method`. Constant signals collapse to zeros under
/// z-score and min-max.
pub fn normalize(samples: &[f64], method: NormalizationMethod) -> Vec<f64> {
    match method {
        NormalizationMethod::None => samples.to_vec(),
        NormalizationMethod::ZScore => z_score(samples),
        NormalizationMethod::MinMax => min_max(samples),
        NormalizationMethod::DecimalScaling => decimal_scaling(samples),
        NormalizationMethod::Logarithmic => logarithmic(samples),
    }
}

fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// `(x - mean) / std` with the population standard deviation.
pub fn z_score(samples: &[f64]) -> Vec<f64> {
    let mu = mean(samples);
    let variance = if samples.is_empty() {
        0.0
    } else {
        samples.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / samples.len() as f64
    };
    let std = variance.sqrt();
    if std <= f64::EPSILON {
        return vec![0.0; samples.len()];
    }
    samples.iter().map(|x| (x - mu) / std).collect()
}

/// `(x - min) / (max - min)`, mapping into `[0, 1]`.
pub fn min_max(samples: &[f64]) -> Vec<f64> {
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if !range.is_finite() || range <= f64::EPSILON {
        return vec![0.0; samples.len()];
    }
    samples.iter().map(|x| (x - min) / range).collect()
}

/// `x / 10^j` with the smallest `j` that brings every `|x|` below 1.
pub fn decimal_scaling(samples: &[f64]) -> Vec<f64> {
    let max_abs = samples.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    if max_abs <= f64::EPSILON {
        return samples.to_vec();
    }
    let mut j = max_abs.log10().floor() as i32 + 1;
    // log10 rounding can leave max_abs / 10^j at exactly 1.0
    while max_abs / 10f64.powi(j) >= 1.0 {
        j += 1;
    }
    let divisor = 10f64.powi(j);
    samples.iter().map(|x| x / divisor).collect()
}

/// `sign(x) * ln(1 + |x|)`, defined for negative voltages as well.
pub fn logarithmic(samples: &[f64]) -> Vec<f64> {
    samples.iter().map(|x| x.signum() * x.abs().ln_1p()).collect()
}
