//! Where snapshots come from. The engine itself never performs I/O; these
//! helpers assemble a [`Snapshot`] for it.

pub mod json_backend;

use crate::{domain::Snapshot, errors::Result};

/// A source that can produce (and persist) a complete snapshot.
pub trait SnapshotStore: Send + Sync {
    fn load(&self) -> Result<Snapshot>;
    fn save(&self, snapshot: &Snapshot) -> Result<()>;
}

pub use json_backend::{load_snapshot_from_path, save_snapshot_to_path, JsonSnapshotStore};
