//! SessionRunner: drives a diagnosis session from trouble codes to a fault path.

use autodiag_causal::{DiagnosisOutcome, IsolationEngine};
use autodiag_core::errors::{DiagError, DiagResult, SessionError};
use autodiag_core::models::{ClassificationRecord, DiagnosticContext, OnboardDiagnosisData};
use autodiag_core::traits::{IStructuralGraph, ISuspectKnowledge};
use tracing::{info, warn};

use crate::classification_log::ClassificationLog;
use crate::classification_stage::{classify_suspects, ClassificationOutcome};
use crate::context::DiagnosisSession;
use crate::dtc::{select_dtc_instance, DtcSelection};
use crate::suggestion::suggest_suspect_components;

/// How a session ended.
#[derive(Debug, Clone)]
pub enum SessionOutcome {
    /// Anomalies were found for `dtc` and isolated.
    Diagnosis { dtc: String, outcome: DiagnosisOutcome },
    /// Every trouble code was worked through without an anomaly.
    NoProblemDetected,
}

#[derive(Debug, Clone)]
pub struct SessionReport {
    pub session: DiagnosisSession,
    pub outcome: SessionOutcome,
}

/// Runs the stages in order: select a trouble code, suggest suspects, classify them, and
/// isolate once an anomaly shows up. Codes without anomalies move on to the next one.
pub struct SessionRunner<'a> {
    knowledge: &'a dyn ISuspectKnowledge,
    graph: &'a dyn IStructuralGraph,
    engine: IsolationEngine<'a>,
    log: Option<ClassificationLog>,
}

impl<'a> SessionRunner<'a> {
    pub fn new(
        knowledge: &'a dyn ISuspectKnowledge,
        graph: &'a dyn IStructuralGraph,
        engine: IsolationEngine<'a>,
    ) -> Self {
        Self {
            knowledge,
            graph,
            engine,
            log: None,
        }
    }

    pub fn with_log(mut self, log: ClassificationLog) -> Self {
        self.log = Some(log);
        self
    }

    /// # Errors
    /// Provider failures, operator input failures and log write failures.
    pub fn run(&self, obd: OnboardDiagnosisData) -> DiagResult<SessionReport> {
        let mut session = DiagnosisSession::new(obd);
        info!(session_id = %session.session_id, dtcs = session.remaining_dtcs.len(), "diagnosis session started");

        loop {
            let dtc = match select_dtc_instance(&mut session.remaining_dtcs) {
                DtcSelection::Selected(dtc) => dtc,
                DtcSelection::Exhausted => {
                    info!(session_id = %session.session_id, "no problem detected");
                    return Ok(SessionReport {
                        session,
                        outcome: SessionOutcome::NoProblemDetected,
                    });
                }
            };
            session.select(dtc.as_str());
            let context = DiagnosticContext::for_dtc(dtc.as_str());

            let suggestion = match suggest_suspect_components(self.knowledge, self.graph, &dtc) {
                Ok(suggestion) => suggestion,
                Err(DiagError::SessionError(SessionError::NoSuspectComponents { .. })) => {
                    warn!(dtc = %dtc, "no suspect components, skipping trouble code");
                    continue;
                }
                Err(e) => return Err(e),
            };
            session.suggestions = suggestion.ordered().into_iter().cloned().collect();

            let stage = classify_suspects(self.engine.oracle(), &suggestion, &context)?;
            self.append_log(&stage.records)?;
            session.classified = stage.classified.clone();
            if stage.outcome == ClassificationOutcome::NoAnomaly {
                info!(dtc = %dtc, "no anomalous suspect, moving to next trouble code");
                continue;
            }

            let outcome = self.engine.run(&stage.classified, &context)?;
            self.append_log(&outcome.report.records)?;
            session.fault_paths = outcome.fault_paths.clone();
            return Ok(SessionReport {
                session,
                outcome: SessionOutcome::Diagnosis { dtc, outcome },
            });
        }
    }

    fn append_log(&self, records: &[ClassificationRecord]) -> DiagResult<()> {
        match &self.log {
            Some(log) => log.append(records),
            None => Ok(()),
        }
    }
}
