use rust_decimal::Decimal;

use super::{
    allocation::{AllocationRow, LastEdited, RowField},
    amount::NumericField,
    snapshot::Snapshot,
    summary::{share_of, Summary},
};
use crate::errors::LedgerError;

/// Default budget text for a fresh ledger.
const SEEDED_BUDGET: &str = "0";

/// The total budget plus an ordered list of allocation rows.
///
/// Every mutator re-derives the non-authoritative field of every row, so the
/// rows always agree with the current budget.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationLedger {
    total_budget: NumericField,
    rows: Vec<AllocationRow>,
}

impl AllocationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh session ledger: one blank row and a budget of `"0"`.
    pub fn seeded() -> Self {
        let mut ledger = Self {
            total_budget: NumericField::new(SEEDED_BUDGET),
            rows: Vec::new(),
        };
        ledger.add_row();
        ledger
    }

    /// Rebuilds a ledger from a persisted snapshot and re-derives every row.
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let mut ledger = Self {
            total_budget: snapshot.total_budget.clone(),
            rows: snapshot.allocations.clone(),
        };
        ledger.recompute_all();
        ledger
    }

    pub fn rows(&self) -> &[AllocationRow] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&AllocationRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total_budget(&self) -> &NumericField {
        &self.total_budget
    }

    /// Appends a blank row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(AllocationRow::new());
        self.recompute_all();
        tracing::debug!(rows = self.rows.len(), "allocation row added");
        self.rows.len() - 1
    }

    /// Removes the row at `index`, shifting later rows down.
    pub fn remove_row(&mut self, index: usize) -> Result<AllocationRow, LedgerError> {
        self.check_index(index)?;
        let removed = self.rows.remove(index);
        self.recompute_all();
        tracing::debug!(index, rows = self.rows.len(), "allocation row removed");
        Ok(removed)
    }

    /// Sets one field of a row. Editing an amount or percentage makes it the
    /// authoritative side of that row.
    pub fn edit_field(
        &mut self,
        index: usize,
        field: RowField,
        value: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.check_index(index)?;
        let value = value.into();
        let row = &mut self.rows[index];
        match field {
            RowField::Tag => row.tag = value,
            RowField::Amount => {
                row.amount = NumericField::new(value);
                row.last_edited = LastEdited::Amount;
            }
            RowField::Percentage => {
                row.percentage = NumericField::new(value);
                row.last_edited = LastEdited::Percentage;
            }
        }
        self.recompute_all();
        tracing::debug!(index, %field, "allocation field edited");
        Ok(())
    }

    /// Replaces the total budget; every derived field is refreshed against it.
    pub fn set_total_budget(&mut self, value: impl Into<String>) {
        self.total_budget = NumericField::new(value);
        self.recompute_all();
        tracing::debug!(total_budget = %self.total_budget, "total budget updated");
    }

    /// Re-derives the non-authoritative field of every row from the current budget.
    pub fn recompute_all(&mut self) {
        let budget = self.total_budget.value();
        for row in &mut self.rows {
            derive_row(row, budget);
        }
    }

    /// Totals for display. Unparsable amounts count as zero; the sum saturates
    /// at the `Decimal` range instead of dropping rows.
    pub fn summary(&self) -> Summary {
        let total_allocated = self
            .rows
            .iter()
            .map(|row| row.amount.value())
            .fold(Decimal::ZERO, Decimal::saturating_add);
        Summary::compute(self.total_budget.value(), total_allocated)
    }

    /// Serializable view of the ledger, carrying the caller's theme flag.
    pub fn to_snapshot(&self, dark_mode: bool) -> Snapshot {
        Snapshot {
            total_budget: self.total_budget.clone(),
            allocations: self.rows.clone(),
            dark_mode,
        }
    }

    fn check_index(&self, index: usize) -> Result<(), LedgerError> {
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(LedgerError::RowOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }
}

fn derive_row(row: &mut AllocationRow, budget: Decimal) {
    match row.last_edited {
        LastEdited::Amount => {
            row.percentage = share_of(row.amount.value(), budget)
                .map(NumericField::derived)
                .unwrap_or_default();
        }
        LastEdited::Percentage => {
            let amount = row
                .percentage
                .value()
                .checked_div(Decimal::ONE_HUNDRED)
                .and_then(|fraction| fraction.checked_mul(budget))
                .unwrap_or(Decimal::ZERO);
            row.amount = NumericField::derived(amount);
        }
        LastEdited::None => {}
    }
}
