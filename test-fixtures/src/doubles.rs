//! Scripted collaborators. Every call is recorded so tests can count them.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, PoisonError};

use autodiag_core::errors::{
    ClassificationError, DiagError, DiagResult, GraphError, SessionError,
};
use autodiag_core::models::{
    CausalGraphView, ClassificationArtifact, GraphPhase, ModelMetadata, SuspectComponent,
    TensorShape, TimeSeries,
};
use autodiag_core::traits::{
    IAnomalyModel, IHumanInput, IModelAccessor, IPresentation, ISignalAccessor, IStructuralGraph,
    ISuspectKnowledge, LoadedModel,
};

fn lock<T>(m: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Structural graph
// =============================================================================

/// In-memory structural graph with call logging.
#[derive(Debug, Default)]
pub struct ScriptedGraph {
    edges: BTreeMap<String, Vec<String>>,
    automated: BTreeSet<String>,
    fail_on: Option<String>,
    affecting_queries: Mutex<Vec<String>>,
    capability_queries: Mutex<Vec<String>>,
}

impl ScriptedGraph {
    pub fn new(edges: BTreeMap<String, Vec<String>>) -> Self {
        Self {
            edges,
            ..Default::default()
        }
    }

    /// Build from `(affected, [affecting...])` pairs.
    pub fn from_pairs(pairs: &[(&str, &[&str])]) -> Self {
        Self::new(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.iter().map(|s| s.to_string()).collect()))
                .collect(),
        )
    }

    pub fn with_automated<I, S>(mut self, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.automated.extend(components.into_iter().map(Into::into));
        self
    }

    /// Every query touching `component` fails with `ProviderUnavailable`.
    pub fn failing_on(mut self, component: impl Into<String>) -> Self {
        self.fail_on = Some(component.into());
        self
    }

    pub fn affecting_query_count(&self) -> usize {
        lock(&self.affecting_queries).len()
    }

    pub fn capability_queries_for(&self, component: &str) -> usize {
        lock(&self.capability_queries)
            .iter()
            .filter(|c| *c == component)
            .count()
    }

    fn check(&self, component: &str) -> DiagResult<()> {
        if self.fail_on.as_deref() == Some(component) {
            return Err(GraphError::ProviderUnavailable {
                reason: format!("scripted failure at {component}"),
            }
            .into());
        }
        Ok(())
    }
}

impl IStructuralGraph for ScriptedGraph {
    fn affecting_components(&self, component: &str) -> DiagResult<Vec<String>> {
        lock(&self.affecting_queries).push(component.to_string());
        self.check(component)?;
        Ok(self.edges.get(component).cloned().unwrap_or_default())
    }

    fn supports_automated_classification(&self, component: &str) -> DiagResult<bool> {
        lock(&self.capability_queries).push(component.to_string());
        self.check(component)?;
        Ok(self.automated.contains(component))
    }
}

// =============================================================================
// Suspect knowledge
// =============================================================================

#[derive(Debug, Default)]
pub struct ScriptedKnowledge {
    suspects: BTreeMap<String, Vec<SuspectComponent>>,
}

impl ScriptedKnowledge {
    pub fn new(suspects: BTreeMap<String, Vec<SuspectComponent>>) -> Self {
        Self { suspects }
    }
}

impl ISuspectKnowledge for ScriptedKnowledge {
    fn suspect_components(&self, dtc: &str) -> DiagResult<Vec<SuspectComponent>> {
        Ok(self.suspects.get(dtc).cloned().unwrap_or_default())
    }
}

// =============================================================================
// Operator
// =============================================================================

/// Answers manual verdicts from a table; unknown components close the input.
#[derive(Debug, Default)]
pub struct ScriptedHumanInput {
    verdicts: BTreeMap<String, bool>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedHumanInput {
    pub fn new(verdicts: BTreeMap<String, bool>) -> Self {
        Self {
            verdicts,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn from_pairs(pairs: &[(&str, bool)]) -> Self {
        Self::new(pairs.iter().map(|(c, v)| (c.to_string(), *v)).collect())
    }

    pub fn calls(&self) -> Vec<String> {
        lock(&self.calls).clone()
    }

    pub fn calls_for(&self, component: &str) -> usize {
        lock(&self.calls).iter().filter(|c| *c == component).count()
    }
}

impl IHumanInput for ScriptedHumanInput {
    fn manual_verdict(&self, component: &str) -> DiagResult<bool> {
        lock(&self.calls).push(component.to_string());
        self.verdicts.get(component).copied().ok_or_else(|| {
            SessionError::InputClosed {
                prompt: format!("manual verdict for {component}"),
            }
            .into()
        })
    }
}

// =============================================================================
// Signals
// =============================================================================

/// Serves prepared recordings; components marked failing raise acquisition errors.
#[derive(Debug, Default)]
pub struct ScriptedSignals {
    recordings: BTreeMap<String, TimeSeries>,
    failing: BTreeSet<String>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSignals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recording(mut self, recording: TimeSeries) -> Self {
        self.recordings.insert(recording.component.clone(), recording);
        self
    }

    /// A flat univariate recording of `len` samples for each component.
    pub fn flat<I, S>(components: I, len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut signals = Self::new();
        for c in components {
            let c: String = c.into();
            let samples = (0..len).map(|i| (i % 7) as f64 * 0.1).collect();
            signals = signals.with_recording(TimeSeries::univariate(c, samples));
        }
        signals
    }

    pub fn failing_for(mut self, component: impl Into<String>) -> Self {
        self.failing.insert(component.into());
        self
    }

    pub fn calls_for(&self, component: &str) -> usize {
        lock(&self.calls).iter().filter(|c| *c == component).count()
    }
}

impl ISignalAccessor for ScriptedSignals {
    fn get_recording(&self, component: &str) -> Result<TimeSeries, ClassificationError> {
        lock(&self.calls).push(component.to_string());
        if self.failing.contains(component) {
            return Err(ClassificationError::RecordingAcquisitionFailed {
                component: component.to_string(),
                reason: "scripted oscilloscope failure".to_string(),
            });
        }
        self.recordings.get(component).cloned().ok_or_else(|| {
            ClassificationError::RecordingAcquisitionFailed {
                component: component.to_string(),
                reason: "no recording prepared".to_string(),
            }
        })
    }
}

// =============================================================================
// Models
// =============================================================================

/// Blueprint of a scripted model.
#[derive(Debug, Clone)]
pub struct ScriptedModelSpec {
    pub scores: Vec<f64>,
    pub metadata: ModelMetadata,
    pub input_shape: TensorShape,
    pub output_shape: TensorShape,
}

impl ScriptedModelSpec {
    /// Well-formed `(None, len, 1) -> (None, scores.len())` model.
    pub fn new(component: &str, input_length: usize, scores: Vec<f64>) -> Self {
        let classes = scores.len();
        Self {
            scores,
            metadata: ModelMetadata::new(component, input_length),
            input_shape: TensorShape::new(vec![None, Some(input_length), Some(1)]),
            output_shape: TensorShape::new(vec![None, Some(classes)]),
        }
    }
}

struct ScriptedModel {
    component: String,
    spec: ScriptedModelSpec,
    inputs_seen: Arc<Mutex<Vec<(String, Vec<f64>)>>>,
}

impl IAnomalyModel for ScriptedModel {
    fn input_shape(&self) -> TensorShape {
        self.spec.input_shape.clone()
    }

    fn output_shape(&self) -> TensorShape {
        self.spec.output_shape.clone()
    }

    fn predict(&self, input: &[f64]) -> Result<Vec<f64>, ClassificationError> {
        lock(&self.inputs_seen).push((self.component.clone(), input.to_vec()));
        Ok(self.spec.scores.clone())
    }
}

/// Model pool of scripted models with fixed scores.
#[derive(Debug, Default)]
pub struct ScriptedModels {
    specs: BTreeMap<String, ScriptedModelSpec>,
    inputs_seen: Arc<Mutex<Vec<(String, Vec<f64>)>>>,
}

impl ScriptedModels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, component: impl Into<String>, spec: ScriptedModelSpec) -> Self {
        self.specs.insert(component.into(), spec);
        self
    }

    /// Single-score model: `0.2` for anomalies, `0.8` otherwise.
    pub fn with_single_score(self, component: &str, input_length: usize, anomaly: bool) -> Self {
        let score = if anomaly { 0.2 } else { 0.8 };
        self.with_model(
            component,
            ScriptedModelSpec::new(component, input_length, vec![score]),
        )
    }

    /// Number of `predict` calls made on models from this pool.
    pub fn predictions(&self) -> usize {
        lock(&self.inputs_seen).len()
    }

    pub fn inputs_for(&self, component: &str) -> Vec<Vec<f64>> {
        lock(&self.inputs_seen)
            .iter()
            .filter(|(c, _)| c == component)
            .map(|(_, i)| i.clone())
            .collect()
    }
}

impl IModelAccessor for ScriptedModels {
    fn get_model(&self, component: &str) -> Option<LoadedModel> {
        let spec = self.specs.get(component)?.clone();
        let metadata = spec.metadata.clone();
        Some(LoadedModel {
            model: Box::new(ScriptedModel {
                component: component.to_string(),
                spec,
                inputs_seen: Arc::clone(&self.inputs_seen),
            }),
            metadata,
        })
    }
}

// =============================================================================
// Presentation
// =============================================================================

/// Records everything shown; optionally fails every call.
#[derive(Debug, Default)]
pub struct RecordingPresentation {
    failing: bool,
    fault_paths: Mutex<Vec<Vec<String>>>,
    graphs: Mutex<Vec<(CausalGraphView, GraphPhase)>>,
    artifacts: Mutex<Vec<ClassificationArtifact>>,
}

impl RecordingPresentation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Default::default()
        }
    }

    pub fn fault_paths(&self) -> Vec<Vec<String>> {
        lock(&self.fault_paths).clone()
    }

    pub fn graphs(&self) -> Vec<(CausalGraphView, GraphPhase)> {
        lock(&self.graphs).clone()
    }

    pub fn artifacts(&self) -> Vec<ClassificationArtifact> {
        lock(&self.artifacts).clone()
    }

    fn result(&self, what: &str) -> DiagResult<()> {
        if self.failing {
            return Err(DiagError::PresentationFailed {
                reason: format!("scripted failure showing {what}"),
            });
        }
        Ok(())
    }
}

impl IPresentation for RecordingPresentation {
    fn show_fault_paths(&self, paths: &[String]) -> DiagResult<()> {
        lock(&self.fault_paths).push(paths.to_vec());
        self.result("fault paths")
    }

    fn show_causal_graph(&self, view: &CausalGraphView, phase: GraphPhase) -> DiagResult<()> {
        lock(&self.graphs).push((view.clone(), phase));
        self.result("causal graph")
    }

    fn show_classification_artifact(&self, artifact: &ClassificationArtifact) -> DiagResult<()> {
        lock(&self.artifacts).push(artifact.clone());
        self.result("classification artifact")
    }
}
