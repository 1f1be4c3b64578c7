//! The record store chaincode.

use crate::config::ContractConfig;
use crate::error::{ContractError, ContractResult};
use ledgerkv_state::StateAccessor;
use tracing::{debug, info, warn};

/// Key-value record chaincode.
///
/// Every operation validates its arguments and then delegates to the state
/// accessor passed in by the host for this invocation. The store itself keeps
/// no ledger data between calls: no caching, no buffering, no retries.
///
/// # Example
///
/// ```rust
/// use ledgerkv_contract::RecordStore;
/// use ledgerkv_state::InMemoryState;
///
/// let store = RecordStore::new();
/// let mut state = InMemoryState::new();
///
/// store.set(&mut state, "asset1", "value1").unwrap();
/// assert_eq!(store.get(&state, "asset1").unwrap(), "value1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    config: ContractConfig,
}

impl RecordStore {
    /// Creates a store with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with the given configuration.
    #[must_use]
    pub fn with_config(config: ContractConfig) -> Self {
        Self { config }
    }

    /// Returns the store configuration.
    #[must_use]
    pub fn config(&self) -> &ContractConfig {
        &self.config
    }

    /// Seeds the ledger with the configured sample records.
    ///
    /// Records are written in configuration order and overwrite whatever is
    /// already stored at their keys.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::StateWrite`] for the first write that fails.
    /// Records written before the failure are left in place.
    pub fn init_ledger<S>(&self, state: &mut S) -> ContractResult<()>
    where
        S: StateAccessor + ?Sized,
    {
        for (key, value) in &self.config.sample_records {
            state.put_state(key, value).map_err(|e| {
                warn!(key = %key, error = %e, "ledger initialization failed");
                ContractError::state_write(key, e)
            })?;
        }
        info!(records = self.config.sample_records.len(), "ledger initialized");
        Ok(())
    }

    /// Writes `value` at `key`, creating or overwriting the record.
    ///
    /// # Errors
    ///
    /// - [`ContractError::InvalidArgument`] if `key` or `value` is empty
    /// - [`ContractError::StateWrite`] if the write fails
    pub fn set<S>(&self, state: &mut S, key: &str, value: &str) -> ContractResult<()>
    where
        S: StateAccessor + ?Sized,
    {
        if key.is_empty() || value.is_empty() {
            return Err(ContractError::invalid_argument(
                "key and value must not be empty",
            ));
        }
        debug!(key, "set");
        self.write(state, key, value)
    }

    /// Returns the value stored at `key`.
    ///
    /// # Errors
    ///
    /// - [`ContractError::StateRead`] if the read fails
    /// - [`ContractError::NotFound`] if there is no record at `key`
    pub fn get<S>(&self, state: &S, key: &str) -> ContractResult<String>
    where
        S: StateAccessor + ?Sized,
    {
        debug!(key, "get");
        self.read(state, key)?
            .ok_or_else(|| ContractError::not_found(key))
    }

    /// Replaces the value of an existing record.
    ///
    /// # Errors
    ///
    /// - [`ContractError::StateRead`] if the existence check fails
    /// - [`ContractError::NotFound`] if there is no record at `key`
    /// - [`ContractError::StateWrite`] if the write fails
    pub fn update<S>(&self, state: &mut S, key: &str, new_value: &str) -> ContractResult<()>
    where
        S: StateAccessor + ?Sized,
    {
        if !self.exists(&*state, key)? {
            return Err(ContractError::not_found(key));
        }
        debug!(key, "update");
        self.write(state, key, new_value)
    }

    /// Removes an existing record.
    ///
    /// # Errors
    ///
    /// - [`ContractError::InvalidArgument`] if `key` is empty
    /// - [`ContractError::StateRead`] if the existence check fails
    /// - [`ContractError::NotFound`] if there is no record at `key`
    /// - [`ContractError::StateWrite`] if the delete fails
    pub fn delete<S>(&self, state: &mut S, key: &str) -> ContractResult<()>
    where
        S: StateAccessor + ?Sized,
    {
        if key.is_empty() {
            return Err(ContractError::invalid_argument("key must not be empty"));
        }
        if !self.exists(&*state, key)? {
            return Err(ContractError::not_found(key));
        }
        debug!(key, "delete");
        state.del_state(key).map_err(|e| {
            warn!(key, error = %e, "state delete failed");
            ContractError::state_write(key, e)
        })
    }

    /// Returns true if a record is stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::StateRead`] if the read fails.
    pub fn exists<S>(&self, state: &S, key: &str) -> ContractResult<bool>
    where
        S: StateAccessor + ?Sized,
    {
        Ok(self.read(state, key)?.is_some())
    }

    fn read<S>(&self, state: &S, key: &str) -> ContractResult<Option<String>>
    where
        S: StateAccessor + ?Sized,
    {
        state.get_state(key).map_err(|e| {
            warn!(key, error = %e, "state read failed");
            ContractError::state_read(key, e)
        })
    }

    fn write<S>(&self, state: &mut S, key: &str, value: &str) -> ContractResult<()>
    where
        S: StateAccessor + ?Sized,
    {
        state.put_state(key, value).map_err(|e| {
            warn!(key, error = %e, "state write failed");
            ContractError::state_write(key, e)
        })
    }
}
