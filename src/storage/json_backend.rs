use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{domain::Snapshot, errors::Result, utils::write_atomic};

use super::SnapshotStore;

/// A snapshot kept in a single pretty-printed JSON file.
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
    fn load(&self) -> Result<Snapshot> {
        load_snapshot_from_path(&self.path)
    }

    fn save(&self, snapshot: &Snapshot) -> Result<()> {
        save_snapshot_to_path(snapshot, &self.path)
    }
}

/// Loads a snapshot from disk, returning structured errors on failure.
pub fn load_snapshot_from_path(path: &Path) -> Result<Snapshot> {
    let data = fs::read_to_string(path)?;
    let snapshot: Snapshot = serde_json::from_str(&data)?;
    tracing::debug!(
        path = %path.display(),
        transactions = snapshot.transactions.len(),
        recurring = snapshot.recurring_expenses.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Writes the snapshot atomically by staging to a temporary file.
pub fn save_snapshot_to_path(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(snapshot)?;
    write_atomic(path, &json)?;
    tracing::debug!(path = %path.display(), "saved snapshot");
    Ok(())
}
