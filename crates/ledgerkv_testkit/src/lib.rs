//! # LedgerKV Testkit
//!
//! Test utilities for LedgerKV.
//!
//! This crate provides:
//! - Fixtures for stores and seeded ledgers
//! - A fault-injecting state accessor
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust
//! use ledgerkv_testkit::prelude::*;
//!
//! with_store(|store, state| {
//!     store.init_ledger(state).unwrap();
//!     assert_eq!(state.records(), sample_records());
//! });
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fault;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fault::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fault::*;
pub use fixtures::*;
pub use generators::*;
