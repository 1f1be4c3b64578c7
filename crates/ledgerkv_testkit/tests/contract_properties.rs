//! Property tests for the record store against a model map.

use ledgerkv_contract::{ContractError, RecordStore};
use ledgerkv_state::{InMemoryState, StateAccessor};
use ledgerkv_testkit::prelude::*;
use proptest::prelude::*;
use std::collections::BTreeMap;

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn set_then_get_returns_value(key in key_strategy(), value in value_strategy()) {
        let store = RecordStore::new();
        let mut state = InMemoryState::new();

        store.set(&mut state, &key, &value).unwrap();
        prop_assert_eq!(store.get(&state, &key).unwrap(), value);
    }

    #[test]
    fn get_unwritten_is_not_found(key in key_strategy()) {
        let store = RecordStore::new();
        let state = InMemoryState::new();

        let result = store.get(&state, &key);
        prop_assert!(matches!(result, Err(ContractError::NotFound { .. })), "assertion failed: matches!(result, Err(ContractError::NotFound {{ .. }}))");
    }

    #[test]
    fn set_rejects_empty_key_or_value(key in key_strategy(), value in value_strategy()) {
        let store = RecordStore::new();
        let mut state = InMemoryState::new();

        let empty_key = store.set(&mut state, "", &value);
        prop_assert!(matches!(empty_key, Err(ContractError::InvalidArgument { .. })), "assertion failed: matches!(empty_key, Err(ContractError::InvalidArgument {{ .. }}))");
        let empty_value = store.set(&mut state, &key, "");
        prop_assert!(matches!(empty_value, Err(ContractError::InvalidArgument { .. })), "assertion failed: matches!(empty_value, Err(ContractError::InvalidArgument {{ .. }}))");
        prop_assert!(state.is_empty());
    }

    #[test]
    fn update_requires_existing(key in key_strategy(), first in value_strategy(), second in value_strategy()) {
        let store = RecordStore::new();
        let mut state = InMemoryState::new();

        let missing = store.update(&mut state, &key, &second);
        prop_assert!(matches!(missing, Err(ContractError::NotFound { .. })), "assertion failed: matches!(missing, Err(ContractError::NotFound {{ .. }}))");

        store.set(&mut state, &key, &first).unwrap();
        store.update(&mut state, &key, &second).unwrap();
        prop_assert_eq!(store.get(&state, &key).unwrap(), second.clone());

        store.delete(&mut state, &key).unwrap();
        let deleted = store.update(&mut state, &key, &second);
        prop_assert!(matches!(deleted, Err(ContractError::NotFound { .. })), "assertion failed: matches!(deleted, Err(ContractError::NotFound {{ .. }}))");
    }

    #[test]
    fn delete_removes_record(key in key_strategy(), value in value_strategy()) {
        let store = RecordStore::new();
        let mut state = InMemoryState::new();

        let missing = store.delete(&mut state, &key);
        prop_assert!(matches!(missing, Err(ContractError::NotFound { .. })), "assertion failed: matches!(missing, Err(ContractError::NotFound {{ .. }}))");

        store.set(&mut state, &key, &value).unwrap();
        store.delete(&mut state, &key).unwrap();
        prop_assert!(!store.exists(&state, &key).unwrap());
        let gone = store.get(&state, &key);
        prop_assert!(matches!(gone, Err(ContractError::NotFound { .. })), "assertion failed: matches!(gone, Err(ContractError::NotFound {{ .. }}))");
    }

    #[test]
    fn operations_match_model(ops in operation_sequence_strategy(1, 64)) {
        let store = RecordStore::new();
        let mut state = InMemoryState::new();
        let mut model: BTreeMap<String, String> = BTreeMap::new();

        for op in ops {
            match op {
                RecordOperation::Set { key, value } => {
                    store.set(&mut state, &key, &value).unwrap();
                    model.insert(key, value);
                }
                RecordOperation::Update { key, value } => {
                    let result = store.update(&mut state, &key, &value);
                    if model.contains_key(&key) {
                        prop_assert!(result.is_ok());
                        model.insert(key, value);
                    } else {
                        prop_assert!(matches!(result, Err(ContractError::NotFound { .. })), "assertion failed: matches!(result, Err(ContractError::NotFound {{ .. }}))");
                    }
                }
                RecordOperation::Delete { key } => {
                    let result = store.delete(&mut state, &key);
                    if model.remove(&key).is_some() {
                        prop_assert!(result.is_ok());
                    } else {
                        prop_assert!(matches!(result, Err(ContractError::NotFound { .. })), "assertion failed: matches!(result, Err(ContractError::NotFound {{ .. }}))");
                    }
                }
                RecordOperation::Get { key } => match model.get(&key) {
                    Some(expected) => {
                        prop_assert_eq!(&store.get(&state, &key).unwrap(), expected);
                    }
                    None => {
                        prop_assert!(store.get(&state, &key).is_err());
                    }
                },
            }
        }

        prop_assert_eq!(state.records(), model);
    }

    #[test]
    fn init_ledger_overwrites_prior_values(value in value_strategy()) {
        let store = RecordStore::new();
        let mut state = InMemoryState::new();
        for key in sample_records().keys() {
            state.put_state(key, &value).unwrap();
        }

        store.init_ledger(&mut state).unwrap();
        prop_assert_eq!(state.records(), sample_records());
    }
}

#[test]
fn crud_scenario() {
    with_store(|store, state| {
        store.set(state, "asset1", "value1").unwrap();
        assert_eq!(store.get(state, "asset1").unwrap(), "value1");
        store.update(state, "asset1", "value9").unwrap();
        assert_eq!(store.get(state, "asset1").unwrap(), "value9");
        store.delete(state, "asset1").unwrap();
        assert!(matches!(
            store.get(state, "asset1"),
            Err(ContractError::NotFound { .. })
        ));
    });
}

#[test]
fn init_ledger_keeps_unrelated_records() {
    let store = RecordStore::new();
    let mut state = seeded_state();
    state.put_state("car1", "red").unwrap();

    store.init_ledger(&mut state).unwrap();

    let mut expected = sample_records();
    expected.insert("car1".into(), "red".into());
    assert_eq!(state.records(), expected);
}
