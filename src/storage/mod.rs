pub mod json_backend;
pub mod memory;

pub use crate::errors::Result;
use crate::ledger::Snapshot;

/// Abstraction over places a session snapshot can live between runs.
pub trait SnapshotStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Snapshot>>;
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
    /// Wipes the stored snapshot; clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}

pub use json_backend::JsonSnapshotStore;
pub use memory::MemorySnapshotStore;
