//! File-backed ledger state for local development.

use crate::accessor::{validate_key, StateAccessor};
use crate::error::{StateError, StateResult};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Snapshot format version written by [`FileState::sync`].
const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    records: BTreeMap<String, String>,
}

/// A ledger state persisted as a JSON snapshot.
///
/// Records are held in memory while the state is open. Nothing reaches the
/// file until [`FileState::sync`] is called, which replaces the snapshot
/// atomically (write to a temporary file in the same directory, then rename).
/// Data survives process restarts once synced.
///
/// # Example
///
/// ```no_run
/// use ledgerkv_state::{FileState, StateAccessor};
/// use std::path::Path;
///
/// let mut state = FileState::open(Path::new("ledger.json")).unwrap();
/// state.put_state("asset1", "value1").unwrap();
/// state.sync().unwrap();
/// ```
#[derive(Debug)]
pub struct FileState {
    path: PathBuf,
    records: RwLock<BTreeMap<String, String>>,
}

impl FileState {
    /// Opens the snapshot at `path`.
    ///
    /// A missing file opens as an empty ledger; it is created on the first
    /// [`FileState::sync`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a valid snapshot,
    /// or was written with an unsupported format version.
    pub fn open(path: &Path) -> StateResult<Self> {
        let records = match fs::read(path) {
            Ok(bytes) => {
                let snapshot: Snapshot = serde_json::from_slice(&bytes).map_err(|e| {
                    StateError::Corrupted(format!("{}: {e}", path.display()))
                })?;
                if snapshot.version != SNAPSHOT_VERSION {
                    return Err(StateError::Corrupted(format!(
                        "{}: unsupported snapshot version {}",
                        path.display(),
                        snapshot.version
                    )));
                }
                snapshot.records
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), records = records.len(), "opened state snapshot");

        Ok(Self {
            path: path.to_path_buf(),
            records: RwLock::new(records),
        })
    }

    /// Returns the path to the snapshot file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns a copy of all records in key order.
    #[must_use]
    pub fn records(&self) -> BTreeMap<String, String> {
        self.records.read().clone()
    }

    /// Replaces every in-memory record with `records`.
    ///
    /// The snapshot file is not touched until the next [`FileState::sync`].
    pub fn restore(&mut self, records: BTreeMap<String, String>) {
        *self.records.write() = records;
    }

    /// Writes the current records to the snapshot file.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be encoded or written.
    pub fn sync(&self) -> StateResult<()> {
        let records = self.records.read();
        let snapshot = Snapshot {
            version: SNAPSHOT_VERSION,
            records: records.clone(),
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, &snapshot)?;
        tmp.write_all(b"\n")?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StateError::Io(e.error))?;

        debug!(path = %self.path.display(), records = records.len(), "synced state snapshot");
        Ok(())
    }
}

impl StateAccessor for FileState {
    fn get_state(&self, key: &str) -> StateResult<Option<String>> {
        Ok(self.records.read().get(key).cloned())
    }

    fn put_state(&mut self, key: &str, value: &str) -> StateResult<()> {
        validate_key(key)?;
        self.records.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> StateResult<()> {
        self.records.write().remove(key);
        Ok(())
    }
}
