//! # LedgerKV State
//!
//! State accessor trait and ledger state implementations for LedgerKV.
//!
//! This crate provides the lowest-level abstraction the chaincode sees: the
//! per-invocation capability for reading and writing ledger state. State
//! accessors are **opaque text stores** keyed by string. They do not know
//! anything about the records the contract keeps in them.
//!
//! ## Design Principles
//!
//! - Accessors are simple key-value stores (get, put, delete)
//! - The contract receives an accessor per call; nothing is global
//! - Must be `Send + Sync` so a host can share them across threads
//! - Durability and replication belong to the ledger, not to this crate
//!
//! ## Available Accessors
//!
//! - [`InMemoryState`] - For testing and ephemeral ledgers
//! - [`FileState`] - A ledger snapshot kept in a JSON file
//! - [`PendingState`] - A write-set overlay giving one transaction
//!   all-or-nothing semantics over any other accessor
//!
//! ## Example
//!
//! ```rust
//! use ledgerkv_state::{InMemoryState, StateAccessor};
//!
//! let mut state = InMemoryState::new();
//! state.put_state("asset1", "value1").unwrap();
//! assert_eq!(state.get_state("asset1").unwrap().as_deref(), Some("value1"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod accessor;
mod error;
mod file;
mod memory;
mod pending;

pub use accessor::StateAccessor;
pub use error::{StateError, StateResult};
pub use file::FileState;
pub use memory::InMemoryState;
pub use pending::{PendingState, PendingWrite};
