//! Test fixtures and ledger helpers.

use ledgerkv_contract::{RecordStore, DEFAULT_SAMPLE_RECORDS};
use ledgerkv_state::InMemoryState;
use std::collections::BTreeMap;

/// Returns the default `InitLedger` records as a map.
pub fn sample_records() -> BTreeMap<String, String> {
    DEFAULT_SAMPLE_RECORDS
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

/// Returns an in-memory ledger already holding the default sample records.
pub fn seeded_state() -> InMemoryState {
    InMemoryState::with_records(DEFAULT_SAMPLE_RECORDS)
}

/// Runs a test with a default store and an empty in-memory ledger.
///
/// # Example
///
/// ```rust
/// use ledgerkv_testkit::with_store;
///
/// with_store(|store, state| {
///     store.set(state, "asset1", "value1").unwrap();
///     assert_eq!(store.get(state, "asset1").unwrap(), "value1");
/// });
/// ```
pub fn with_store<F, R>(f: F) -> R
where
    F: FnOnce(&RecordStore, &mut InMemoryState) -> R,
{
    let store = RecordStore::new();
    let mut state = InMemoryState::new();
    f(&store, &mut state)
}
