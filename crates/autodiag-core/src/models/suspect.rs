//! Suspect components suggested for a trouble code.

use serde::{Deserialize, Serialize};

/// Whether a suspect is classified automatically is answered by the structural graph's
/// capability query, so the entry only carries its name and priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SuspectComponent {
    pub name: String,
    /// Lower ids are checked first.
    pub priority_id: u32,
}

impl SuspectComponent {
    pub fn new(name: impl Into<String>, priority_id: u32) -> Self {
        Self {
            name: name.into(),
            priority_id,
        }
    }
}
