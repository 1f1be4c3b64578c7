//! Buffered write set for a single transaction.

use crate::accessor::{validate_key, StateAccessor};
use crate::error::StateResult;
use std::collections::BTreeMap;
use tracing::debug;

/// Represents a pending write in a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingWrite {
    /// Insert or overwrite a value.
    Put {
        /// New value.
        value: String,
    },
    /// Delete a value.
    Delete,
}

/// A write-set overlay over another accessor.
///
/// Reads see this transaction's own pending writes first and fall through to
/// the base accessor otherwise. Writes and deletes are buffered and only
/// reach the base on [`PendingState::commit`]. Dropping the overlay (or
/// calling [`PendingState::rollback`]) leaves the base untouched.
///
/// The chaincode itself never rolls back partial work; a host wraps each
/// invocation in a `PendingState` and commits only successful ones.
///
/// # Example
///
/// ```rust
/// use ledgerkv_state::{InMemoryState, PendingState, StateAccessor};
///
/// let mut base = InMemoryState::new();
/// let mut tx = PendingState::new(&mut base);
/// tx.put_state("asset1", "value1").unwrap();
/// assert_eq!(tx.get_state("asset1").unwrap().as_deref(), Some("value1"));
/// tx.rollback();
/// assert!(base.is_empty());
/// ```
#[derive(Debug)]
pub struct PendingState<'a, S: StateAccessor + ?Sized> {
    base: &'a mut S,
    writes: BTreeMap<String, PendingWrite>,
}

impl<'a, S: StateAccessor + ?Sized> PendingState<'a, S> {
    /// Starts an empty write set over `base`.
    pub fn new(base: &'a mut S) -> Self {
        Self {
            base,
            writes: BTreeMap::new(),
        }
    }

    /// Returns the buffered writes in key order.
    #[must_use]
    pub fn writes(&self) -> &BTreeMap<String, PendingWrite> {
        &self.writes
    }

    /// Returns true if nothing has been written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Applies the write set to the base accessor in key order.
    ///
    /// Returns the number of writes applied.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the base accessor. Writes applied
    /// before the failure stay applied.
    pub fn commit(self) -> StateResult<usize> {
        let count = self.writes.len();
        for (key, write) in self.writes {
            match write {
                PendingWrite::Put { value } => self.base.put_state(&key, &value)?,
                PendingWrite::Delete => self.base.del_state(&key)?,
            }
        }
        debug!(writes = count, "committed write set");
        Ok(count)
    }

    /// Discards the write set.
    ///
    /// Returns the number of writes discarded.
    pub fn rollback(self) -> usize {
        let count = self.writes.len();
        debug!(writes = count, "discarded write set");
        count
    }
}

impl<S: StateAccessor + ?Sized> StateAccessor for PendingState<'_, S> {
    fn get_state(&self, key: &str) -> StateResult<Option<String>> {
        match self.writes.get(key) {
            Some(PendingWrite::Put { value }) => Ok(Some(value.clone())),
            Some(PendingWrite::Delete) => Ok(None),
            None => self.base.get_state(key),
        }
    }

    fn put_state(&mut self, key: &str, value: &str) -> StateResult<()> {
        validate_key(key)?;
        self.writes.insert(
            key.to_string(),
            PendingWrite::Put {
                value: value.to_string(),
            },
        );
        Ok(())
    }

    fn del_state(&mut self, key: &str) -> StateResult<()> {
        self.writes.insert(key.to_string(), PendingWrite::Delete);
        Ok(())
    }
}
