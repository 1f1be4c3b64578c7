//! # LedgerKV Contract
//!
//! Key-value record chaincode for LedgerKV.
//!
//! This crate provides:
//! - [`RecordStore`], the CRUD contract over a flat namespace of string keys
//! - [`ContractError`], the error taxonomy surfaced to the host
//! - [`Invocation`] / [`Response`], the function router a host drives
//!
//! # Architecture
//!
//! The contract is thin application logic. Each call validates its
//! arguments and then makes the delegated read or write against the
//! [`ledgerkv_state::StateAccessor`] the host passes in. Consensus, ordering,
//! durability and transaction isolation all belong to the host ledger.
//!
//! ```rust
//! use ledgerkv_contract::{Invocation, RecordStore};
//! use ledgerkv_state::InMemoryState;
//!
//! let store = RecordStore::new();
//! let mut state = InMemoryState::new();
//!
//! store.invoke(&mut state, &Invocation::new("InitLedger", Vec::<String>::new()));
//! let resp = store.invoke(&mut state, &Invocation::new("Get", ["asset2"]));
//! assert_eq!(resp.payload.as_deref(), Some("value2"));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
// Production code MUST NOT use panic!/unwrap()/expect()
#![cfg_attr(not(test), warn(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

mod config;
mod dispatch;
mod error;
mod store;

pub use config::{ContractConfig, DEFAULT_SAMPLE_RECORDS};
pub use dispatch::{Invocation, Response, FUNCTIONS, STATUS_OK};
pub use error::{ContractError, ContractResult};
pub use store::RecordStore;

/// Crate version, reported by hosts.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
