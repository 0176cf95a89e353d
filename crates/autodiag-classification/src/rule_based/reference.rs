//! Threshold rule against a reference value, optionally also flagging jumps.

use super::signal_rules::{classify_against_reference, has_jumps};
use super::RuleBasedModel;

/// Step detection settings for [`ReferenceRule::with_jump_check`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JumpCheck {
    pub threshold: f64,
    pub max_offset: usize,
}

/// Flags a channel whose samples sit too often on the wrong side of `relevant_value`.
///
/// The same rule is applied to every channel regardless of its name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceRule {
    pub relevant_value: f64,
    /// `true` when staying near `relevant_value` is the fault (e.g. a shorted line at 0 V).
    pub relevant_value_means_anomaly: bool,
    pub threshold: f64,
    pub outlier_intolerance: f64,
    pub jumps: Option<JumpCheck>,
}

impl ReferenceRule {
    /// Signal must stay within `threshold` of `expected` for `outlier_intolerance` of samples.
    pub fn expect(expected: f64, threshold: f64, outlier_intolerance: f64) -> Self {
        Self {
            relevant_value: expected,
            relevant_value_means_anomaly: false,
            threshold,
            outlier_intolerance,
            jumps: None,
        }
    }

    /// Signal must stay away from `forbidden` for `outlier_intolerance` of samples.
    pub fn avoid(forbidden: f64, threshold: f64, outlier_intolerance: f64) -> Self {
        Self {
            relevant_value_means_anomaly: true,
            ..Self::expect(forbidden, threshold, outlier_intolerance)
        }
    }

    pub fn with_jump_check(mut self, threshold: f64, max_offset: usize) -> Self {
        self.jumps = Some(JumpCheck {
            threshold,
            max_offset,
        });
        self
    }
}

impl RuleBasedModel for ReferenceRule {
    fn predict(&self, signal: &[f64], _channel: Option<&str>) -> bool {
        classify_against_reference(
            signal,
            self.relevant_value,
            self.relevant_value_means_anomaly,
            self.threshold,
            self.outlier_intolerance,
        ) || self
            .jumps
            .is_some_and(|j| has_jumps(signal, j.threshold, j.max_offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steady_supply_is_regular() {
        let rule = ReferenceRule::expect(12.0, 0.5, 0.95).with_jump_check(2.0, 20);
        assert!(!rule.predict(&[12.1; 60], None));
    }

    #[test]
    fn step_in_range_is_flagged_by_jump_check() {
        let mut signal = vec![11.8; 30];
        signal.extend(vec![12.2; 30]);
        let plain = ReferenceRule::expect(12.0, 0.5, 0.95);
        assert!(!plain.predict(&signal, None));
        assert!(plain.with_jump_check(0.3, 20).predict(&signal, None));
    }

    #[test]
    fn shorted_line_is_flagged() {
        assert!(ReferenceRule::avoid(0.0, 0.2, 0.99).predict(&[0.05; 40], Some("any")));
    }
}
