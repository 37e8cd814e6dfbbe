use rust_decimal::Decimal;

use super::amount::{format_fixed, round_to_cents};

/// Shown when the allocated share is undefined because the budget is not positive.
pub const UNDEFINED_PERCENTAGE: &str = "n/a";

/// Derived totals for the whole ledger, rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub total_allocated: Decimal,
    pub remaining_budget: Decimal,
    /// `None` when the budget is zero or negative.
    pub allocated_percentage: Option<Decimal>,
    /// Zero when the budget is zero or negative.
    pub remaining_percentage: Decimal,
}

impl Summary {
    pub(crate) fn compute(total_budget: Decimal, total_allocated: Decimal) -> Self {
        let remaining = total_budget.saturating_sub(total_allocated);
        let allocated_percentage = share_of(total_allocated, total_budget);
        let remaining_percentage = share_of(remaining, total_budget).unwrap_or(Decimal::ZERO);

        Self {
            total_allocated: round_to_cents(total_allocated),
            remaining_budget: round_to_cents(remaining),
            allocated_percentage: allocated_percentage.map(round_to_cents),
            remaining_percentage: round_to_cents(remaining_percentage),
        }
    }

    pub fn is_over_allocated(&self) -> bool {
        self.remaining_budget < Decimal::ZERO
    }

    /// Formats every figure for display, prefixing currency values with `symbol`.
    pub fn display(&self, symbol: &str) -> SummaryDisplay {
        SummaryDisplay {
            total_allocated: format_currency(self.total_allocated, symbol),
            allocated_percentage: self
                .allocated_percentage
                .map(format_fixed)
                .unwrap_or_else(|| UNDEFINED_PERCENTAGE.to_string()),
            remaining_budget: format_currency(self.remaining_budget, symbol),
            remaining_percentage: format_fixed(self.remaining_percentage),
        }
    }
}

/// Text form of a [`Summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryDisplay {
    pub total_allocated: String,
    pub allocated_percentage: String,
    pub remaining_budget: String,
    pub remaining_percentage: String,
}

/// `part` as a percentage of `whole`, or `None` when `whole` is not positive.
pub(crate) fn share_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    if whole <= Decimal::ZERO {
        return None;
    }
    part.checked_div(whole)?.checked_mul(Decimal::ONE_HUNDRED)
}

fn format_currency(value: Decimal, symbol: &str) -> String {
    let fixed = format_fixed(value);
    match fixed.strip_prefix('-') {
        Some(magnitude) => format!("-{symbol}{magnitude}"),
        None => format!("{symbol}{fixed}"),
    }
}
