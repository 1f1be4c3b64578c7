//! Property-based test generators using proptest.
//!
//! Provides strategies for keys, values and operation sequences against the
//! record store.

use proptest::prelude::*;

/// Strategy for generating valid (non-empty) record keys.
pub fn key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9_~.-]{1,32}").expect("Invalid regex")
}

/// Strategy for generating keys from a small pool, so operations collide.
pub fn colliding_key_strategy() -> impl Strategy<Value = String> {
    (0u8..8).prop_map(|n| format!("asset{n}"))
}

/// Strategy for generating valid (non-empty) record values.
pub fn value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ -~]{1,64}").expect("Invalid regex")
}

/// An operation against the record store.
#[derive(Debug, Clone)]
pub enum RecordOperation {
    /// Create or overwrite a record.
    Set {
        /// Record key.
        key: String,
        /// Record value.
        value: String,
    },
    /// Overwrite an existing record.
    Update {
        /// Record key.
        key: String,
        /// New value.
        value: String,
    },
    /// Delete an existing record.
    Delete {
        /// Record key.
        key: String,
    },
    /// Read a record.
    Get {
        /// Record key.
        key: String,
    },
}

/// Strategy for generating record operations over colliding keys.
pub fn record_operation_strategy() -> impl Strategy<Value = RecordOperation> {
    prop_oneof![
        3 => (colliding_key_strategy(), value_strategy())
            .prop_map(|(key, value)| RecordOperation::Set { key, value }),
        2 => (colliding_key_strategy(), value_strategy())
            .prop_map(|(key, value)| RecordOperation::Update { key, value }),
        1 => colliding_key_strategy().prop_map(|key| RecordOperation::Delete { key }),
        2 => colliding_key_strategy().prop_map(|key| RecordOperation::Get { key }),
    ]
}

/// Strategy for generating a sequence of operations.
pub fn operation_sequence_strategy(
    min_ops: usize,
    max_ops: usize,
) -> impl Strategy<Value = Vec<RecordOperation>> {
    prop::collection::vec(record_operation_strategy(), min_ops..max_ops)
}

/// Configuration for property tests.
#[derive(Debug, Clone)]
pub struct PropTestConfig {
    /// Number of test cases to run.
    pub cases: u32,
    /// Maximum shrink iterations.
    pub max_shrink_iters: u32,
}

impl Default for PropTestConfig {
    fn default() -> Self {
        Self {
            cases: 256,
            max_shrink_iters: 1000,
        }
    }
}

impl PropTestConfig {
    /// Creates a configuration for quick tests.
    #[must_use]
    pub fn quick() -> Self {
        Self {
            cases: 32,
            max_shrink_iters: 100,
        }
    }

    /// Converts to proptest config.
    #[must_use]
    pub fn to_proptest_config(&self) -> ProptestConfig {
        ProptestConfig {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            ..ProptestConfig::default()
        }
    }
}
