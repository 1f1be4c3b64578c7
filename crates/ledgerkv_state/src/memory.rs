//! In-memory ledger state for testing.

use crate::accessor::{validate_key, StateAccessor};
use crate::error::StateResult;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// An in-memory ledger state.
///
/// This accessor keeps every record in memory and is suitable for:
/// - Unit tests
/// - Integration tests
/// - Ephemeral development ledgers that don't need persistence
///
/// Records are kept in a `BTreeMap`, so [`InMemoryState::records`] is
/// always in key order.
///
/// # Thread Safety
///
/// This accessor is thread-safe and can be shared across threads.
///
/// # Example
///
/// ```rust
/// use ledgerkv_state::{InMemoryState, StateAccessor};
///
/// let mut state = InMemoryState::new();
/// state.put_state("asset1", "value1").unwrap();
/// assert_eq!(state.len(), 1);
/// state.del_state("asset1").unwrap();
/// assert!(state.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryState {
    records: RwLock<BTreeMap<String, String>>,
}

impl InMemoryState {
    /// Creates a new empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger with pre-existing records.
    ///
    /// Useful for testing operations against a populated ledger.
    #[must_use]
    pub fn with_records<I, K, V>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let records = records
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            records: RwLock::new(records),
        }
    }

    /// Returns a copy of all records in key order.
    #[must_use]
    pub fn records(&self) -> BTreeMap<String, String> {
        self.records.read().clone()
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns true if the ledger holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.records.write().clear();
    }

    /// Replaces every record with `records`.
    ///
    /// Used to put back a copy taken with [`InMemoryState::records`].
    pub fn restore(&mut self, records: BTreeMap<String, String>) {
        *self.records.write() = records;
    }
}

impl StateAccessor for InMemoryState {
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
