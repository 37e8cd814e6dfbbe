use std::sync::{Arc, Mutex, MutexGuard};

use crate::{errors::LedgerError, ledger::Snapshot};

use super::{Result, SnapshotStore};

/// In-process store holding the serialized snapshot text.
///
/// Clones share the same slot, so a caller can keep a handle and inspect what
/// a session persisted.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshotStore {
    slot: Arc<Mutex<Option<String>>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with raw text, valid JSON or not.
    pub fn with_raw(data: impl Into<String>) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(data.into()))),
        }
    }

    /// The text most recently saved, if any.
    pub fn raw(&self) -> Result<Option<String>> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<String>>> {
        self.slot
            .lock()
            .map_err(|_| LedgerError::Storage("snapshot store lock poisoned".into()))
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        match self.lock()?.as_deref() {
            Some(data) => Snapshot::from_json(data).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = snapshot.to_json()?;
        *self.lock()? = Some(json);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *self.lock()? = None;
        Ok(())
    }
}
