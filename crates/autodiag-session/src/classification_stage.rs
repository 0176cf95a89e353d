//! Classification of the suggested suspect components.

use autodiag_classification::{ClassificationOracle, ClassificationStrategy};
use autodiag_core::errors::DiagResult;
use autodiag_core::models::{
    ClassificationRecord, ClassifiedComponents, DiagnosisStage, DiagnosticContext,
};
use autodiag_observability::tracing_setup::events;

use crate::suggestion::SuspectSuggestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationOutcome {
    /// At least one suspect is anomalous; fault isolation follows.
    DetectedAnomalies,
    NoAnomaly,
}

/// What the component classification stage produced.
#[derive(Debug, Clone)]
pub struct ComponentClassification {
    pub classified: ClassifiedComponents,
    pub records: Vec<ClassificationRecord>,
    pub outcome: ClassificationOutcome,
}

/// Classify every suggested suspect: recorded ones first, then manual ones, each group in
/// priority order.
///
/// # Errors
/// Only operator input failures; automated failures fall back to the operator.
pub fn classify_suspects(
    oracle: &ClassificationOracle<'_>,
    suggestion: &SuspectSuggestion,
    context: &DiagnosticContext,
) -> DiagResult<ComponentClassification> {
    let mut classified = ClassifiedComponents::new();
    let mut records = Vec::with_capacity(suggestion.len());

    let groups = [
        (&suggestion.automated, ClassificationStrategy::Automated),
        (&suggestion.manual, ClassificationStrategy::Manual),
    ];
    for (suspects, strategy) in groups {
        for suspect in suspects {
            if classified.contains(&suspect.name) {
                continue;
            }
            let verdict = oracle.classify_with(&suspect.name, strategy, context)?;
            events::component_classified(
                &suspect.name,
                verdict.anomaly,
                verdict.method,
                DiagnosisStage::ComponentClassification,
            );
            records.push(ClassificationRecord::new(
                suspect.name.as_str(),
                &verdict,
                DiagnosisStage::ComponentClassification,
                context,
            ));
            classified.insert(suspect.name.as_str(), verdict.anomaly);
        }
    }

    let outcome = if classified.has_anomaly() {
        ClassificationOutcome::DetectedAnomalies
    } else {
        ClassificationOutcome::NoAnomaly
    };
    Ok(ComponentClassification {
        classified,
        records,
        outcome,
    })
}
