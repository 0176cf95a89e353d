//! Lambda sensor ("Lambdasonde") channel rules.

use super::RuleBasedModel;

pub const COMPONENT: &str = "Lambdasonde";

pub const HEATER_GROUND: &str = "Masseleitung der Heizung der Lambdasonde";
pub const HEATER_SUPPLY: &str = "Plusleitung der Heizung der Lambdasonde";
pub const SIGNAL_SUPPLY: &str = "Plusleitung der Lambdasonde";
pub const SIGNAL_GROUND: &str = "Masseleitung der Lambdasonde";

/// Only the signal supply line is flagged; unknown channels are regular.
#[derive(Debug, Default, Clone, Copy)]
pub struct LambdaSensor;

impl RuleBasedModel for LambdaSensor {
    fn predict(&self, _signal: &[f64], channel: Option<&str>) -> bool {
        match channel {
            Some(SIGNAL_SUPPLY) => true,
            Some(HEATER_GROUND | HEATER_SUPPLY | SIGNAL_GROUND) => false,
            _ => false,
        }
    }
}
