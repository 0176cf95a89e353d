//! On-board diagnosis data read from the vehicle.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardDiagnosisData {
    /// Trouble codes in the order the vehicle reported them.
    pub dtc_list: Vec<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// Manufacturer key number.
    #[serde(default)]
    pub hsn: Option<String>,
    /// Type key number.
    #[serde(default)]
    pub tsn: Option<String>,
    #[serde(default)]
    pub vin: Option<String>,
}
