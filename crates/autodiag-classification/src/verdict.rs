//! Turning raw model scores into an anomaly verdict.

use autodiag_core::errors::ClassificationError;

/// Anomaly flag plus the score reported alongside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredVerdict {
    pub anomaly: bool,
    /// The single score, or the highest class score for multi-class outputs.
    pub score: f64,
}

/// Multi-class: anomaly iff the first highest-scoring class is `anomaly_class_index`.
/// Single score: anomaly iff `score <= threshold`.
pub fn derive_verdict(
    scores: &[f64],
    threshold: f64,
    anomaly_class_index: usize,
) -> Result<ScoredVerdict, ClassificationError> {
    match scores {
        [] => Err(ClassificationError::InferenceFailed {
            reason: "model produced no scores".to_string(),
        }),
        [score] => Ok(ScoredVerdict {
            anomaly: *score <= threshold,
            score: *score,
        }),
        _ => {
            if scores.iter().any(|s| s.is_nan()) {
                return Err(ClassificationError::InferenceFailed {
                    reason: "model produced NaN scores".to_string(),
                });
            }
            let (argmax, max) = scores
                .iter()
                .copied()
                .enumerate()
                .fold((0, f64::NEG_INFINITY), |(bi, bv), (i, v)| {
                    if v > bv {
                        (i, v)
                    } else {
                        (bi, bv)
                    }
                });
            Ok(ScoredVerdict {
                anomaly: argmax == anomaly_class_index,
                score: max,
            })
        }
    }
}
