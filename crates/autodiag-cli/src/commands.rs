//! Subcommand implementations.

use std::fs;
use std::io::{self, BufReader, Stdin, Stdout};
use std::path::Path;

use anyhow::{Context, Result};
use autodiag_causal::graph::cycles::{ensure_acyclic, find_cycles};
use autodiag_causal::{preview_view, to_dot, CausalGraphBuilder, IsolationEngine};
use autodiag_classification::{
    AutomatedClassifier, ClassificationOracle, ClassifierSettings, LocalModelPool,
    RuleBasedRegistry,
};
use autodiag_core::models::{ClassifiedComponents, DiagnosticContext, OnboardDiagnosisData};
use autodiag_core::DiagConfig;
use autodiag_session::{
    ClassificationLog, LocalKnowledgeBase, LocalRecordingStore, SessionOutcome, SessionRunner,
};
use tracing::info;

use crate::cli::DataArgs;
use crate::display::TerminalPresentation;
use crate::prompt::PromptInput;

/// Local collaborators for one command.
struct Workshop {
    knowledge: LocalKnowledgeBase,
    recordings: LocalRecordingStore,
    models: LocalModelPool,
    operator: PromptInput<BufReader<Stdin>, Stdout>,
    presentation: TerminalPresentation<Stdout>,
}

impl Workshop {
    fn open(config: &DiagConfig, data: &DataArgs) -> Result<Self> {
        let knowledge = LocalKnowledgeBase::load(&data.knowledge_base)
            .with_context(|| format!("loading knowledge base {}", data.knowledge_base.display()))?;
        Ok(Self {
            knowledge,
            recordings: LocalRecordingStore::new(&data.recordings),
            models: LocalModelPool::from_config(&config.classification),
            operator: PromptInput::new(BufReader::new(io::stdin()), io::stdout()),
            presentation: TerminalPresentation::new(io::stdout(), data.dot_dir.clone()),
        })
    }

    fn engine(&self, config: &DiagConfig) -> IsolationEngine<'_> {
        let automated = AutomatedClassifier::new(&self.recordings, &self.models)
            .with_rules(RuleBasedRegistry::with_builtin())
            .with_settings(ClassifierSettings::from(&config.classification));
        let oracle = ClassificationOracle::new(&self.knowledge, automated, &self.operator)
            .with_presentation(&self.presentation);
        IsolationEngine::new(&self.knowledge, oracle, &self.presentation)
            .with_config(config.isolation.clone())
    }
}

fn classification_log(config: &DiagConfig) -> ClassificationLog {
    ClassificationLog::new(config.session.effective_classification_log_path())
}

pub fn diagnose(config: &DiagConfig, data: &DataArgs, obd_path: &Path) -> Result<()> {
    let content = fs::read_to_string(obd_path)
        .with_context(|| format!("reading OBD data {}", obd_path.display()))?;
    let obd: OnboardDiagnosisData =
        serde_json::from_str(&content).context("parsing OBD data")?;

    let workshop = Workshop::open(config, data)?;
    let report = SessionRunner::new(&workshop.knowledge, &workshop.knowledge, workshop.engine(config))
        .with_log(classification_log(config))
        .run(obd)?;

    match report.outcome {
        SessionOutcome::Diagnosis { dtc, outcome } => {
            println!("\ndiagnosis for {dtc}:");
            for chain in &outcome.fault_chains {
                println!("  {chain}");
            }
        }
        SessionOutcome::NoProblemDetected => {
            println!("\nno problem detected for {:?}", report.session.processed_dtcs);
        }
    }
    info!(session_id = %report.session.session_id, "diagnosis session finished");
    Ok(())
}

pub fn isolate(
    config: &DiagConfig,
    data: &DataArgs,
    anomalous: &[String],
    dtc: Option<&str>,
) -> Result<()> {
    let workshop = Workshop::open(config, data)?;
    let classified: ClassifiedComponents = anomalous.iter().map(|c| (c.as_str(), true)).collect();
    let context = dtc.map(DiagnosticContext::for_dtc).unwrap_or_default();

    let outcome = workshop.engine(config).run(&classified, &context)?;
    classification_log(config).append(&outcome.report.records)?;
    if outcome.fault_chains != outcome.fault_paths {
        println!("\nsymptom to root chains:");
        for chain in &outcome.fault_chains {
            println!("  {chain}");
        }
    }
    Ok(())
}

pub fn graph(config: &DiagConfig, knowledge_base: &Path, seed: &str, deny_cycles: bool) -> Result<()> {
    let knowledge = LocalKnowledgeBase::load(knowledge_base)
        .with_context(|| format!("loading knowledge base {}", knowledge_base.display()))?;
    let complete = CausalGraphBuilder::new(&knowledge)
        .with_limit(config.isolation.effective_max_graph_components())
        .build(&[seed])?;
    let indexed = complete.to_indexed();
    if deny_cycles {
        ensure_acyclic(&indexed)?;
    }
    for cycle in find_cycles(&indexed) {
        eprintln!("warning: cycle among {}", cycle.join(", "));
    }
    print!("{}", to_dot(&preview_view(seed, &complete)));
    Ok(())
}

pub fn show_config(config: &DiagConfig) -> Result<()> {
    print!("{}", config.to_toml()?);
    Ok(())
}
