//! Accessor failure handling across the contract and the state overlays.

use ledgerkv_contract::{ContractError, Invocation, RecordStore};
use ledgerkv_state::{FileState, InMemoryState, PendingState, StateAccessor};
use ledgerkv_testkit::prelude::*;
use tempfile::TempDir;

#[test]
fn init_ledger_stops_at_first_failed_write() {
    let store = RecordStore::new();
    let mut state = FaultyState::new();
    state.fail_writes_after(1);

    let err = store.init_ledger(&mut state).unwrap_err();

    assert!(matches!(err, ContractError::StateWrite { ref key, .. } if key == "asset2"));
    assert_eq!(state.write_attempts(), 2);
    let records = state.inner().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records.get("asset1").map(String::as_str), Some("value1"));
}

#[test]
fn read_failures_surface_as_state_read() {
    let store = RecordStore::new();
    let mut state = FaultyState::with_inner(seeded_state());
    state.fail_reads(true);

    assert!(matches!(
        store.get(&state, "asset1"),
        Err(ContractError::StateRead { .. })
    ));
    assert!(matches!(
        store.exists(&state, "asset1"),
        Err(ContractError::StateRead { .. })
    ));
    assert!(matches!(
        store.update(&mut state, "asset1", "value9"),
        Err(ContractError::StateRead { .. })
    ));
    assert!(matches!(
        store.delete(&mut state, "asset1"),
        Err(ContractError::StateRead { .. })
    ));
    // the existence check failed, so no write was attempted
    assert_eq!(state.write_attempts(), 0);
}

#[test]
fn write_failures_surface_as_state_write() {
    let store = RecordStore::new();
    let mut state = FaultyState::with_inner(seeded_state());
    state.fail_writes_after(0);
    state.fail_deletes(true);

    assert!(matches!(
        store.set(&mut state, "asset9", "value9"),
        Err(ContractError::StateWrite { .. })
    ));
    assert!(matches!(
        store.update(&mut state, "asset1", "value9"),
        Err(ContractError::StateWrite { .. })
    ));
    assert!(matches!(
        store.delete(&mut state, "asset1"),
        Err(ContractError::StateWrite { .. })
    ));
    assert_eq!(state.inner().records(), sample_records());
}

#[test]
fn invalid_arguments_never_touch_state() {
    let store = RecordStore::new();
    let mut state = FaultyState::new();
    state.fail_reads(true);
    state.fail_writes_after(0);

    assert!(matches!(
        store.set(&mut state, "", "v"),
        Err(ContractError::InvalidArgument { .. })
    ));
    assert!(matches!(
        store.delete(&mut state, ""),
        Err(ContractError::InvalidArgument { .. })
    ));
    assert_eq!(state.write_attempts(), 0);
}

#[test]
fn failed_invocation_in_pending_state_is_discarded() {
    let store = RecordStore::new();
    let mut base = FaultyState::new();
    base.fail_writes_after(1);

    // InitLedger buffers all three writes in the overlay, so it succeeds there;
    // the injected failure then hits during commit.
    let mut tx = PendingState::new(&mut base);
    let resp = store.invoke(&mut tx, &Invocation::new("InitLedger", Vec::<String>::new()));
    assert!(resp.is_success());
    assert_eq!(tx.writes().len(), 3);
    assert!(tx.commit().is_err());
    assert_eq!(base.inner().len(), 1);

    // A failing invocation is rolled back and never reaches the base.
    base.heal();
    let mut tx = PendingState::new(&mut base);
    let resp = store.invoke(&mut tx, &Invocation::new("Update", ["missing", "v"]));
    assert_eq!(resp.status, 404);
    assert_eq!(tx.rollback(), 0);
    assert_eq!(base.inner().len(), 1);
}

#[test]
fn file_state_round_trips_contract_writes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ledger.json");
    let store = RecordStore::new();

    {
        let mut state = FileState::open(&path).unwrap();
        store.init_ledger(&mut state).unwrap();
        store.update(&mut state, "asset2", "value22").unwrap();
        store.delete(&mut state, "asset3").unwrap();
        state.sync().unwrap();
    }

    let state = FileState::open(&path).unwrap();
    assert_eq!(store.get(&state, "asset1").unwrap(), "value1");
    assert_eq!(store.get(&state, "asset2").unwrap(), "value22");
    assert!(!store.exists(&state, "asset3").unwrap());
}

#[test]
fn contract_runs_over_trait_objects() {
    let store = RecordStore::new();
    let mut memory = InMemoryState::new();
    let state: &mut dyn StateAccessor = &mut memory;

    store.set(state, "asset1", "value1").unwrap();
    assert_eq!(store.get(state, "asset1").unwrap(), "value1");
}
