use crate::{
    errors::LedgerError,
    ledger::{AllocationLedger, AllocationRow, RowField, Snapshot, Summary},
    render::{LedgerView, Renderer},
    storage::SnapshotStore,
};

/// How the session's starting state was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOrigin {
    /// Nothing was stored; started from a seeded ledger.
    Fresh,
    /// Hydrated from the stored snapshot.
    Restored,
    /// The stored snapshot could not be read and was discarded.
    Discarded,
}

/// Facade that coordinates the ledger, its renderer, and snapshot persistence.
///
/// Every mutator runs the same cycle: change the ledger (which re-derives all
/// rows), save a snapshot, then hand the new state to the renderer. A render
/// error is returned after the snapshot is already stored.
pub struct BudgetSession {
    ledger: AllocationLedger,
    dark_mode: bool,
    origin: SessionOrigin,
    store: Box<dyn SnapshotStore>,
    renderer: Option<Box<dyn Renderer>>,
}

impl BudgetSession {
    /// Restores the stored snapshot, or seeds a fresh ledger when there is none
    /// or it cannot be read.
    pub fn open(store: Box<dyn SnapshotStore>) -> Result<Self, LedgerError> {
        Self::open_with(store, None)
    }

    pub fn open_with(
        store: Box<dyn SnapshotStore>,
        renderer: Option<Box<dyn Renderer>>,
    ) -> Result<Self, LedgerError> {
        let (ledger, dark_mode, origin) = match store.load() {
            Ok(Some(snapshot)) => (
                AllocationLedger::from_snapshot(&snapshot),
                snapshot.dark_mode,
                SessionOrigin::Restored,
            ),
            Ok(None) => (AllocationLedger::seeded(), false, SessionOrigin::Fresh),
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable snapshot");
                (AllocationLedger::seeded(), false, SessionOrigin::Discarded)
            }
        };
        tracing::info!(rows = ledger.len(), ?origin, "budget session opened");

        let mut session = Self {
            ledger,
            dark_mode,
            origin,
            store,
            renderer,
        };
        session.store.save(&session.snapshot())?;
        // A broken display must not throw away state that loaded fine.
        if let Err(err) = session.notify() {
            tracing::warn!(error = %err, "initial render failed");
        }
        Ok(session)
    }

    pub fn set_renderer(&mut self, renderer: Box<dyn Renderer>) -> Result<(), LedgerError> {
        self.renderer = Some(renderer);
        self.notify()
    }

    pub fn ledger(&self) -> &AllocationLedger {
        &self.ledger
    }

    pub fn summary(&self) -> Summary {
        self.ledger.summary()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn origin(&self) -> SessionOrigin {
        self.origin
    }

    pub fn snapshot(&self) -> Snapshot {
        self.ledger.to_snapshot(self.dark_mode)
    }

    pub fn add_row(&mut self) -> Result<usize, LedgerError> {
        let index = self.ledger.add_row();
        self.commit()?;
        Ok(index)
    }

    pub fn remove_row(&mut self, index: usize) -> Result<AllocationRow, LedgerError> {
        let removed = self.ledger.remove_row(index)?;
        self.commit()?;
        Ok(removed)
    }

    pub fn edit_field(
        &mut self,
        index: usize,
        field: RowField,
        value: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.ledger.edit_field(index, field, value)?;
        self.commit()
    }

    pub fn set_total_budget(&mut self, value: impl Into<String>) -> Result<(), LedgerError> {
        self.ledger.set_total_budget(value);
        self.commit()
    }

    /// Flips the theme flag and returns the new value.
    pub fn toggle_dark_mode(&mut self) -> Result<bool, LedgerError> {
        self.set_dark_mode(!self.dark_mode)?;
        Ok(self.dark_mode)
    }

    pub fn set_dark_mode(&mut self, enabled: bool) -> Result<(), LedgerError> {
        self.dark_mode = enabled;
        tracing::debug!(dark_mode = enabled, "theme changed");
        self.commit()
    }

    /// Wipes the stored snapshot and starts over from a seeded ledger in light mode.
    pub fn reset(&mut self) -> Result<(), LedgerError> {
        self.store.clear()?;
        self.ledger = AllocationLedger::seeded();
        self.dark_mode = false;
        self.origin = SessionOrigin::Fresh;
        tracing::info!("budget session reset");
        self.commit()
    }

    fn commit(&mut self) -> Result<(), LedgerError> {
        self.store.save(&self.snapshot())?;
        self.notify()
    }

    fn notify(&mut self) -> Result<(), LedgerError> {
        let Some(renderer) = self.renderer.as_mut() else {
            return Ok(());
        };
        let summary = self.ledger.summary();
        let view = LedgerView {
            rows: self.ledger.rows(),
            summary: &summary,
            total_budget: self.ledger.total_budget(),
            dark_mode: self.dark_mode,
        };
        renderer.render(&view)
    }
}
