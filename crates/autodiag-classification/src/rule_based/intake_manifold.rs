//! Intake manifold pressure sensor ("Saugrohrdrucksensor") channel rules.

use super::RuleBasedModel;

pub const COMPONENT: &str = "Saugrohrdrucksensor";

pub const PRESSURE_SIGNAL: &str = "Signalleitung (Druck) des Saugrohrdrucksensors";
pub const TEMPERATURE_SIGNAL: &str = "Signalleitung (Temperatur) des Saugrohrdrucksensors";
pub const GROUND: &str = "Masseleitung des Saugrohrdrucksensors";
pub const SUPPLY: &str = "Versorgungsspannung des Saugrohrdrucksensors";

/// Every known channel is regular, as are unknown ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntakeManifoldPressureSensor;

impl RuleBasedModel for IntakeManifoldPressureSensor {
    fn predict(&self, _signal: &[f64], channel: Option<&str>) -> bool {
        match channel {
            Some(PRESSURE_SIGNAL | TEMPERATURE_SIGNAL | GROUND | SUPPLY) => false,
            _ => false,
        }
    }
}
