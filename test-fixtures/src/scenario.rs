//! Golden isolation scenarios and the scripted world they run in.

use std::collections::BTreeMap;

use autodiag_core::models::{ClassifiedComponents, SuspectComponent};
use serde::Deserialize;

use crate::doubles::{
    RecordingPresentation, ScriptedGraph, ScriptedHumanInput, ScriptedKnowledge, ScriptedModels,
    ScriptedSignals,
};

/// Samples per scripted recording.
pub const SCENARIO_RECORDING_LEN: usize = 8;

/// One golden scenario as stored under `golden/isolation/`.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Trouble codes in reported order.
    #[serde(default)]
    pub dtcs: Vec<String>,
    /// affected -> affecting components.
    pub structural_graph: BTreeMap<String, Vec<String>>,
    /// Components classified from a recorded signal; the rest are judged manually.
    #[serde(default)]
    pub automated: Vec<String>,
    /// True verdict of every component.
    pub verdicts: BTreeMap<String, bool>,
    #[serde(default)]
    pub suspects: BTreeMap<String, Vec<SuspectComponent>>,
    /// Upstream classification handed to isolation.
    pub classified: ClassifiedComponents,
    pub expected_paths: BTreeMap<String, Vec<String>>,
    pub expected_rendered: Vec<String>,
    #[serde(default)]
    pub expected_chains: Vec<String>,
    pub expected_oracle_calls: usize,
}

/// All collaborators for a scenario.
pub struct ScenarioWorld {
    pub graph: ScriptedGraph,
    pub knowledge: ScriptedKnowledge,
    pub signals: ScriptedSignals,
    pub models: ScriptedModels,
    pub human: ScriptedHumanInput,
    pub presentation: RecordingPresentation,
}

impl ScenarioWorld {
    /// Automated components get a flat recording and a single-score model agreeing
    /// with their verdict; manual ones are answered by the scripted operator.
    pub fn new(scenario: &Scenario) -> Self {
        let mut models = ScriptedModels::new();
        for c in &scenario.automated {
            let anomaly = scenario.verdicts.get(c).copied().unwrap_or(false);
            models = models.with_single_score(c, SCENARIO_RECORDING_LEN, anomaly);
        }
        let manual: BTreeMap<String, bool> = scenario
            .verdicts
            .iter()
            .filter(|(c, _)| !scenario.automated.contains(c))
            .map(|(c, v)| (c.clone(), *v))
            .collect();

        Self {
            graph: ScriptedGraph::new(scenario.structural_graph.clone())
                .with_automated(scenario.automated.iter().cloned()),
            knowledge: ScriptedKnowledge::new(scenario.suspects.clone()),
            signals: ScriptedSignals::flat(scenario.automated.iter().cloned(), SCENARIO_RECORDING_LEN),
            models,
            human: ScriptedHumanInput::new(manual),
            presentation: RecordingPresentation::new(),
        }
    }
}
