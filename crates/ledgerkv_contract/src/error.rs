//! Error types for chaincode operations.

use ledgerkv_state::StateError;
use thiserror::Error;

/// Result type for chaincode operations.
pub type ContractResult<T> = Result<T, ContractError>;

/// Errors returned by [`crate::RecordStore`] and the invocation router.
///
/// Every error is surfaced to the host immediately; the contract never
/// retries or suppresses one. The host decides whether the enclosing
/// transaction is aborted.
#[derive(Debug, Error)]
pub enum ContractError {
    /// An argument was empty or otherwise unusable.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the problem.
        message: String,
    },

    /// The operation requires a record that does not exist.
    #[error("key {key} does not exist")]
    NotFound {
        /// The missing key.
        key: String,
    },

    /// The ledger could not be read.
    #[error("failed to read state for key {key}: {source}")]
    StateRead {
        /// The key being read.
        key: String,
        /// Underlying accessor error.
        #[source]
        source: StateError,
    },

    /// The ledger could not be written.
    #[error("failed to write state for key {key}: {source}")]
    StateWrite {
        /// The key being written.
        key: String,
        /// Underlying accessor error.
        #[source]
        source: StateError,
    },

    /// The invocation named a function the contract does not export.
    #[error("function {name} not found in contract")]
    UnknownFunction {
        /// Requested function name.
        name: String,
    },
}

impl ContractError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Creates a state read error.
    pub fn state_read(key: impl Into<String>, source: StateError) -> Self {
        Self::StateRead {
            key: key.into(),
            source,
        }
    }

    /// Creates a state write error.
    pub fn state_write(key: impl Into<String>, source: StateError) -> Self {
        Self::StateWrite {
            key: key.into(),
            source,
        }
    }

    /// Creates an unknown function error.
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// Returns true if the caller can fix this by changing the request.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ContractError::InvalidArgument { .. }
                | ContractError::NotFound { .. }
                | ContractError::UnknownFunction { .. }
        )
    }

    /// Returns true if the ledger failed underneath the contract.
    pub fn is_server_error(&self) -> bool {
        matches!(
            self,
            ContractError::StateRead { .. } | ContractError::StateWrite { .. }
        )
    }

    /// Returns the response status code for this error.
    pub fn status(&self) -> u16 {
        match self {
            ContractError::InvalidArgument { .. } | ContractError::UnknownFunction { .. } => 400,
            ContractError::NotFound { .. } => 404,
            ContractError::StateRead { .. } | ContractError::StateWrite { .. } => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_classification() {
        assert!(ContractError::invalid_argument("bad").is_client_error());
        assert!(ContractError::not_found("asset1").is_client_error());
        assert!(ContractError::unknown_function("Nope").is_client_error());

        let read = ContractError::state_read("asset1", StateError::Unavailable("down".into()));
        assert!(read.is_server_error());
        assert!(!read.is_client_error());
    }

    #[test]
    fn error_status_codes() {
        assert_eq!(ContractError::invalid_argument("bad").status(), 400);
        assert_eq!(ContractError::unknown_function("Nope").status(), 400);
        assert_eq!(ContractError::not_found("k").status(), 404);
        assert_eq!(
            ContractError::state_write("k", StateError::Unavailable("down".into())).status(),
            500
        );
    }

    #[test]
    fn error_display_names_key() {
        let msg = ContractError::not_found("asset7").to_string();
        assert!(msg.contains("asset7"));

        let msg =
            ContractError::state_write("asset7", StateError::Unavailable("disk full".into()))
                .to_string();
        assert!(msg.contains("asset7"));
        assert!(msg.contains("disk full"));
    }
}
