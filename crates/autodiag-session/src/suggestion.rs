//! Suspect component suggestion for a selected trouble code.

use std::collections::HashSet;

use autodiag_core::errors::{DiagResult, SessionError};
use autodiag_core::models::SuspectComponent;
use autodiag_core::traits::{IStructuralGraph, ISuspectKnowledge};
use serde::Serialize;
use tracing::info;

/// Suspects split by how they can be classified, each group in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuspectSuggestion {
    pub dtc: String,
    /// Classified from a recorded signal.
    pub automated: Vec<SuspectComponent>,
    /// Judged by the operator.
    pub manual: Vec<SuspectComponent>,
}

impl SuspectSuggestion {
    /// All suspects in priority order, regardless of group.
    pub fn ordered(&self) -> Vec<&SuspectComponent> {
        let mut all: Vec<&SuspectComponent> = self.automated.iter().chain(&self.manual).collect();
        all.sort_by(|a, b| a.priority_id.cmp(&b.priority_id).then_with(|| a.name.cmp(&b.name)));
        all
    }

    pub fn len(&self) -> usize {
        self.automated.len() + self.manual.len()
    }

    pub fn is_empty(&self) -> bool {
        self.automated.is_empty() && self.manual.is_empty()
    }
}

/// Look up the suspects of `dtc`, order them by priority id then name, and split them by
/// the structural graph's automated-classification capability.
///
/// # Errors
/// `NoSuspectComponents` when nothing is known for `dtc`; provider failures otherwise.
pub fn suggest_suspect_components(
    knowledge: &dyn ISuspectKnowledge,
    graph: &dyn IStructuralGraph,
    dtc: &str,
) -> DiagResult<SuspectSuggestion> {
    let mut suspects = knowledge.suspect_components(dtc)?;
    let mut seen = HashSet::new();
    suspects.retain(|s| seen.insert(s.name.clone()));
    if suspects.is_empty() {
        return Err(SessionError::NoSuspectComponents {
            dtc: dtc.to_string(),
        }
        .into());
    }
    suspects.sort_by(|a, b| a.priority_id.cmp(&b.priority_id).then_with(|| a.name.cmp(&b.name)));

    let mut suggestion = SuspectSuggestion {
        dtc: dtc.to_string(),
        ..Default::default()
    };
    for suspect in suspects {
        if graph.supports_automated_classification(&suspect.name)? {
            suggestion.automated.push(suspect);
        } else {
            suggestion.manual.push(suspect);
        }
    }
    info!(
        dtc = %dtc,
        automated = suggestion.automated.len(),
        manual = suggestion.manual.len(),
        "suspect components suggested"
    );
    Ok(suggestion)
}
