//! Fault injection for state accessors.
//!
//! [`FaultyState`] wraps an [`InMemoryState`] and fails selected calls the
//! way an unavailable ledger would. It is used to check that the contract
//! classifies accessor failures correctly and stops where it should.
//!
//! ## Usage
//!
//! ```rust
//! use ledgerkv_contract::{ContractError, RecordStore};
//! use ledgerkv_testkit::FaultyState;
//!
//! let mut state = FaultyState::new();
//! state.fail_writes_after(1);
//!
//! let err = RecordStore::new().init_ledger(&mut state).unwrap_err();
//! assert!(matches!(err, ContractError::StateWrite { .. }));
//! assert_eq!(state.inner().len(), 1);
//! ```

use ledgerkv_state::{InMemoryState, StateAccessor, StateError, StateResult};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

const NEVER: usize = usize::MAX;

/// An in-memory accessor with switchable failures.
#[derive(Debug)]
pub struct FaultyState {
    inner: InMemoryState,
    fail_reads: AtomicBool,
    fail_deletes: AtomicBool,
    /// Number of further writes allowed to succeed before writes fail.
    writes_allowed: AtomicUsize,
    write_attempts: AtomicUsize,
}

impl Default for FaultyState {
    fn default() -> Self {
        Self::with_inner(InMemoryState::new())
    }
}

impl FaultyState {
    /// Creates a healthy, empty accessor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing in-memory ledger.
    #[must_use]
    pub fn with_inner(inner: InMemoryState) -> Self {
        Self {
            inner,
            fail_reads: AtomicBool::new(false),
            fail_deletes: AtomicBool::new(false),
            writes_allowed: AtomicUsize::new(NEVER),
            write_attempts: AtomicUsize::new(0),
        }
    }

    /// Makes every read fail.
    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Makes every delete fail.
    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    /// Lets the next `n` writes succeed and fails every write after them.
    pub fn fail_writes_after(&self, n: usize) {
        self.writes_allowed.store(n, Ordering::SeqCst);
    }

    /// Clears every injected failure.
    pub fn heal(&self) {
        self.fail_reads(false);
        self.fail_deletes(false);
        self.writes_allowed.store(NEVER, Ordering::SeqCst);
    }

    /// Returns how many writes were attempted, including failed ones.
    #[must_use]
    pub fn write_attempts(&self) -> usize {
        self.write_attempts.load(Ordering::SeqCst)
    }

    /// Returns the wrapped ledger.
    #[must_use]
    pub fn inner(&self) -> &InMemoryState {
        &self.inner
    }

    fn take_write_permit(&self) -> bool {
        self.writes_allowed
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |left| match left {
                NEVER => Some(NEVER),
                0 => None,
                n => Some(n - 1),
            })
            .is_ok()
    }
}

impl StateAccessor for FaultyState {
    fn get_state(&self, key: &str) -> StateResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StateError::Unavailable(format!("injected read failure on {key}")));
        }
        self.inner.get_state(key)
    }

    fn put_state(&mut self, key: &str, value: &str) -> StateResult<()> {
        self.write_attempts.fetch_add(1, Ordering::SeqCst);
        if !self.take_write_permit() {
            return Err(StateError::Unavailable(format!("injected write failure on {key}")));
        }
        self.inner.put_state(key, value)
    }

    fn del_state(&mut self, key: &str) -> StateResult<()> {
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(StateError::Unavailable(format!("injected delete failure on {key}")));
        }
        self.inner.del_state(key)
    }
}
