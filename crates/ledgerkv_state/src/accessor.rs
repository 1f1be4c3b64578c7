//! State accessor trait definition.

use crate::error::{StateError, StateResult};

/// Per-invocation access to ledger state.
///
/// The host runtime hands an accessor to every chaincode call. Accessors are
/// **opaque text stores**: they map string keys to string values and never
/// interpret either. The ledger behind the accessor owns durability,
/// conflict detection and agreement between peers.
///
/// # Invariants
///
/// - `get_state` returns the value most recently written at `key` through
///   this accessor, or `None` if there is none or it was deleted
/// - `put_state` replaces any existing value (create-or-overwrite)
/// - `del_state` on an absent key succeeds without effect
/// - Accessors must be `Send + Sync` so a host can share them across threads
///
/// # Implementors
///
/// - [`super::InMemoryState`] - For testing
/// - [`super::FileState`] - Snapshot persisted to a JSON file
/// - [`super::PendingState`] - Buffered write set over another accessor
pub trait StateAccessor: Send + Sync {
    /// Reads the current value stored at `key`.
    ///
    /// Returns `Ok(None)` if the key has no value.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be read.
    fn get_state(&self, key: &str) -> StateResult<Option<String>>;

    /// Writes `value` at `key`, overwriting any existing value.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The key is not acceptable to the ledger (for example, empty)
    /// - The ledger cannot be written
    fn put_state(&mut self, key: &str, value: &str) -> StateResult<()>;

    /// Removes the value stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger cannot be written.
    fn del_state(&mut self, key: &str) -> StateResult<()>;
}

/// Rejects keys the ledger cannot store.
pub(crate) fn validate_key(key: &str) -> StateResult<()> {
    if key.is_empty() {
        return Err(StateError::InvalidKey(
            "key must not be an empty string".into(),
        ));
    }
    Ok(())
}
