//! Allocation ledger model, derived summary, and its persisted snapshot.

pub mod allocation;
pub mod amount;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod snapshot;
pub mod summary;

pub use allocation::{AllocationRow, LastEdited, RowField};
pub use amount::{format_fixed, parse_lenient, round_to_cents, NumericField};
pub use ledger::AllocationLedger;
pub use snapshot::Snapshot;
pub use summary::{Summary, SummaryDisplay, UNDEFINED_PERCENTAGE};
