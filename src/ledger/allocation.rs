use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::amount::NumericField;
use crate::errors::LedgerError;

/// Which of the two numeric fields the user set directly; the other one is derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum LastEdited {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "amount")]
    Amount,
    #[serde(rename = "percentage")]
    Percentage,
}

impl From<Option<String>> for LastEdited {
    fn from(raw: Option<String>) -> Self {
        match raw.as_deref() {
            Some("amount") => LastEdited::Amount,
            Some("percentage") => LastEdited::Percentage,
            _ => LastEdited::None,
        }
    }
}

/// Editable columns of an allocation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Tag,
    Amount,
    Percentage,
}

impl RowField {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowField::Tag => "tag",
            RowField::Amount => "amount",
            RowField::Percentage => "percentage",
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowField {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "tag" => Ok(RowField::Tag),
            "amount" => Ok(RowField::Amount),
            "percentage" => Ok(RowField::Percentage),
            other => Err(LedgerError::UnknownField(other.to_string())),
        }
    }
}

/// A named slice of the total budget.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllocationRow {
    #[serde(default)]
    pub(crate) tag: String,
    #[serde(default)]
    pub(crate) amount: NumericField,
    #[serde(default)]
    pub(crate) percentage: NumericField,
    #[serde(default, rename = "lastUsed")]
    pub(crate) last_edited: LastEdited,
}

impl AllocationRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn amount(&self) -> &NumericField {
        &self.amount
    }

    pub fn percentage(&self) -> &NumericField {
        &self.percentage
    }

    pub fn last_edited(&self) -> LastEdited {
        self.last_edited
    }
}
