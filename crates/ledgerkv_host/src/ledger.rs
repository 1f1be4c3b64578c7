//! Local ledger used by the development host.

use ledgerkv_contract::{Invocation, RecordStore, Response};
use ledgerkv_state::{FileState, InMemoryState, PendingState, StateAccessor, StateResult};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info, warn};

/// The state a host session runs against.
#[derive(Debug)]
pub enum Ledger {
    /// Ephemeral ledger, discarded on exit.
    Memory(InMemoryState),
    /// Ledger snapshot kept in a JSON file.
    File(FileState),
}

impl Ledger {
    /// Opens the file ledger at `path`, or an ephemeral one if `path` is `None`.
    pub fn open(path: Option<&Path>) -> StateResult<Self> {
        match path {
            Some(path) => {
                info!(path = %path.display(), "opening file ledger");
                Ok(Ledger::File(FileState::open(path)?))
            }
            None => {
                info!("using ephemeral in-memory ledger");
                Ok(Ledger::Memory(InMemoryState::new()))
            }
        }
    }

    /// Returns all records in key order.
    pub fn records(&self) -> BTreeMap<String, String> {
        match self {
            Ledger::Memory(state) => state.records(),
            Ledger::File(state) => state.records(),
        }
    }

    /// Runs `invocation` as one transaction and persists the result.
    ///
    /// The write set is committed only if the invocation succeeds; a file
    /// ledger is synced after every commit. If the commit or the sync fails,
    /// the records are put back as they were before the invocation.
    pub fn execute(&mut self, store: &RecordStore, invocation: &Invocation) -> StateResult<Response> {
        let before = self.records();
        let result = self.execute_and_sync(store, invocation);
        if let Err(e) = &result {
            warn!(function = %invocation.function, error = %e, "restoring ledger after failed commit");
            self.restore(before);
        }
        result
    }

    fn execute_and_sync(&mut self, store: &RecordStore, invocation: &Invocation) -> StateResult<Response> {
        let state: &mut dyn StateAccessor = match self {
            Ledger::Memory(state) => state,
            Ledger::File(state) => state,
        };
        let response = execute(store, state, invocation)?;

        if response.is_success() {
            if let Ledger::File(state) = self {
                state.sync()?;
            }
        }
        Ok(response)
    }

    fn restore(&mut self, records: BTreeMap<String, String>) {
        match self {
            Ledger::Memory(state) => state.restore(records),
            Ledger::File(state) => state.restore(records),
        }
    }
}

/// Runs `invocation` against `state` inside a [`PendingState`].
///
/// Successful invocations are committed; failed ones are rolled back.
///
/// # Errors
///
/// Returns an error only if committing a successful write set fails. The
/// base may then hold part of the write set; [`Ledger::execute`] restores it.
pub fn execute<S>(store: &RecordStore, state: &mut S, invocation: &Invocation) -> StateResult<Response>
where
    S: StateAccessor + ?Sized,
{
    let mut tx = PendingState::new(state);
    let response = store.invoke(&mut tx, invocation);

    if response.is_success() {
        let writes = tx.commit()?;
        debug!(function = %invocation.function, writes, "transaction committed");
    } else {
        let discarded = tx.rollback();
        debug!(
            function = %invocation.function,
            status = response.status,
            discarded,
            "transaction rolled back"
        );
    }
    Ok(response)
}
