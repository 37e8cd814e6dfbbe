#![doc(test(attr(deny(warnings))))]

//! Budget Allocator splits a total budget into named allocation rows, keeping
//! each row's amount and percentage in step with whichever one was edited last.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod render;
pub mod session;
pub mod storage;
pub mod utils;

pub use errors::LedgerError;
pub use ledger::{AllocationLedger, AllocationRow, LastEdited, RowField, Snapshot, Summary};
pub use session::{BudgetSession, SessionOrigin};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing from the optional config and emits a startup log.
pub fn init(config: Option<&config::AppConfig>) {
    INIT_TRACING.call_once(|| {
        utils::init_tracing(config.and_then(|c| c.log_filter.as_deref()));
        tracing::info!("Budget Allocator tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init(None);
        super::init(None);
    }
}
