use serde::{Deserialize, Serialize};

use super::{allocation::AllocationRow, amount::NumericField};
use crate::errors::LedgerError;

/// Persisted form of a session: the budget, every row, and the theme flag.
///
/// Keys match the browser storage blob (`totalBudget`, `allocations`,
/// `darkMode`) so existing saved data loads unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub total_budget: NumericField,
    #[serde(default)]
    pub allocations: Vec<AllocationRow>,
    #[serde(default)]
    pub dark_mode: bool,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String, LedgerError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(data: &str) -> Result<Self, LedgerError> {
        Ok(serde_json::from_str(data)?)
    }
}
