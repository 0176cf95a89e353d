//! Rule-based signal models for components without a trained model.

pub mod intake_manifold;
pub mod lambda_sensor;
pub mod reference;
pub mod signal_rules;

use std::collections::HashMap;

pub use intake_manifold::IntakeManifoldPressureSensor;
pub use lambda_sensor::LambdaSensor;
pub use reference::{JumpCheck, ReferenceRule};
pub use signal_rules::{classify_against_reference, has_jumps};

/// A hand-written anomaly check for one component's channels.
pub trait RuleBasedModel: Send + Sync {
    /// `true` = anomaly. `channel` is the measurement point name, when known.
    fn predict(&self, signal: &[f64], channel: Option<&str>) -> bool;
}

/// Rule-based models keyed by component name.
#[derive(Default)]
pub struct RuleBasedRegistry {
    models: HashMap<String, Box<dyn RuleBasedModel>>,
}

impl RuleBasedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the lambda sensor and intake manifold pressure sensor rules.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(lambda_sensor::COMPONENT, Box::new(LambdaSensor));
        registry.register(intake_manifold::COMPONENT, Box::new(IntakeManifoldPressureSensor));
        registry
    }

    pub fn register(&mut self, component: impl Into<String>, model: Box<dyn RuleBasedModel>) {
        self.models.insert(component.into(), model);
    }

    pub fn get(&self, component: &str) -> Option<&dyn RuleBasedModel> {
        self.models.get(component).map(|m| m.as_ref())
    }

    pub fn contains(&self, component: &str) -> bool {
        self.models.contains_key(component)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl std::fmt::Debug for RuleBasedRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.models.keys().collect();
        names.sort();
        f.debug_struct("RuleBasedRegistry")
            .field("components", &names)
            .finish()
    }
}
