use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::{
    ledger::Snapshot,
    utils::persistence::{tmp_path, write_atomic},
};

use super::{Result, SnapshotStore};

/// Keeps the snapshot as a single JSON file, replaced atomically on every save.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn load(&self) -> Result<Option<Snapshot>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Snapshot::from_json(&data).map(Some)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string_pretty(snapshot)?;
        write_atomic(&self.path, &json)?;
        tracing::debug!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        for path in [self.path.clone(), tmp_path(&self.path)] {
            match fs::remove_file(&path) {
                Ok(()) => {}
                Err(err) if err.kind() == ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::{AllocationLedger, RowField};
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_as_none() {
        let temp = tempdir().unwrap();
        let store = JsonSnapshotStore::new(temp.path().join("budget.json"));
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_returns_same_snapshot() {
        let temp = tempdir().unwrap();
        let store = JsonSnapshotStore::new(temp.path().join("nested").join("budget.json"));
        let mut ledger = AllocationLedger::seeded();
        ledger.set_total_budget("1200");
        ledger.edit_field(0, RowField::Amount, "300").unwrap();
        let snapshot = ledger.to_snapshot(true);

        store.save(&snapshot).unwrap();
        assert_eq!(store.load().unwrap(), Some(snapshot));
        assert!(!tmp_path(store.path()).exists());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("budget.json");
        fs::write(&path, "{ not json").unwrap();
        let store = JsonSnapshotStore::new(&path);
        assert!(store.load().is_err());
    }

    #[test]
    fn clear_removes_file_and_tolerates_absence() {
        let temp = tempdir().unwrap();
        let store = JsonSnapshotStore::new(temp.path().join("budget.json"));
        store.save(&Snapshot::default()).unwrap();
        store.clear().unwrap();
        assert!(!store.path().exists());
        store.clear().unwrap();
    }
}
