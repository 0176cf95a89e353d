//! The diagnosis session context passed between stages.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use autodiag_core::models::{ClassifiedComponents, OnboardDiagnosisData, SuspectComponent};

use crate::dtc::dedup_dtcs;

/// Everything the stages of one diagnosis session share.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosisSession {
    pub session_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub obd: OnboardDiagnosisData,
    /// Unused trouble codes, first reported first.
    pub remaining_dtcs: Vec<String>,
    /// Codes already worked on, in order.
    pub processed_dtcs: Vec<String>,
    pub selected_dtc: Option<String>,
    /// Suspects of the selected code, in priority order.
    pub suggestions: Vec<SuspectComponent>,
    /// Upstream verdicts for the selected code.
    pub classified: ClassifiedComponents,
    /// Rendered fault paths, once isolation ran.
    pub fault_paths: Vec<String>,
}

impl DiagnosisSession {
    pub fn new(obd: OnboardDiagnosisData) -> Self {
        let remaining_dtcs = dedup_dtcs(&obd.dtc_list);
        Self {
            session_id: Uuid::new_v4(),
            started_at: Utc::now(),
            obd,
            remaining_dtcs,
            processed_dtcs: Vec::new(),
            selected_dtc: None,
            suggestions: Vec::new(),
            classified: ClassifiedComponents::new(),
            fault_paths: Vec::new(),
        }
    }

    /// Switch to `dtc`, clearing everything derived from the previous code.
    pub fn select(&mut self, dtc: impl Into<String>) {
        let dtc = dtc.into();
        self.processed_dtcs.push(dtc.clone());
        self.selected_dtc = Some(dtc);
        self.suggestions.clear();
        self.classified = ClassifiedComponents::new();
        self.fault_paths.clear();
    }

    pub fn has_remaining_dtcs(&self) -> bool {
        !self.remaining_dtcs.is_empty()
    }
}
