//! Structural and suspect knowledge read from a JSON document.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use autodiag_core::errors::{DiagResult, SessionError};
use autodiag_core::models::SuspectComponent;
use autodiag_core::traits::{IStructuralGraph, ISuspectKnowledge};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentEntry {
    /// Components whose malfunction can make this one read anomalous.
    #[serde(default)]
    pub affected_by: Vec<String>,
    /// Whether a recorded signal can be classified automatically.
    #[serde(default)]
    pub automated: bool,
}

/// Knowledge base document:
///
/// ```json
/// {
///   "components": { "C1": { "affected_by": ["C2"], "automated": true } },
///   "dtcs": { "P0101": [{ "name": "C1", "priority_id": 0 }] }
/// }
/// ```
///
/// Unknown components have no affecting components and are judged manually.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalKnowledgeBase {
    #[serde(default)]
    pub components: BTreeMap<String, ComponentEntry>,
    #[serde(default)]
    pub dtcs: BTreeMap<String, Vec<SuspectComponent>>,
}

impl LocalKnowledgeBase {
    pub fn load(path: &Path) -> DiagResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| SessionError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> DiagResult<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

impl IStructuralGraph for LocalKnowledgeBase {
    fn affecting_components(&self, component: &str) -> DiagResult<Vec<String>> {
        Ok(self
            .components
            .get(component)
            .map(|c| c.affected_by.clone())
            .unwrap_or_default())
    }

    fn supports_automated_classification(&self, component: &str) -> DiagResult<bool> {
        Ok(self.components.get(component).is_some_and(|c| c.automated))
    }
}

impl ISuspectKnowledge for LocalKnowledgeBase {
    fn suspect_components(&self, dtc: &str) -> DiagResult<Vec<SuspectComponent>> {
        Ok(self.dtcs.get(dtc).cloned().unwrap_or_default())
    }
}
