//! Invocation routing.
//!
//! The host decodes a transaction proposal into an [`Invocation`] (function
//! name plus string arguments) and encodes the returned [`Response`] into its
//! own result envelope. Routing is by exported function name:
//!
//! | Function      | Arguments      | Payload            |
//! |---------------|----------------|--------------------|
//! | `InitLedger`  | none           | none               |
//! | `Set`         | key, value     | none               |
//! | `Get`         | key            | value              |
//! | `Update`      | key, new value | none               |
//! | `Delete`      | key            | none               |
//! | `AssetExists` | key            | `true` / `false`   |

use crate::error::{ContractError, ContractResult};
use crate::store::RecordStore;
use ledgerkv_state::StateAccessor;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Status of a successful response.
pub const STATUS_OK: u16 = 200;

/// Functions exported by the contract.
pub const FUNCTIONS: [&str; 6] = ["InitLedger", "Set", "Get", "Update", "Delete", "AssetExists"];

/// A decoded chaincode invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Exported function name.
    pub function: String,
    /// Positional string arguments.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Invocation {
    /// Creates an invocation.
    pub fn new<I, A>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

/// The result of an invocation, ready for the host to encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// 200 on success, otherwise the error's status.
    pub status: u16,
    /// Returned value, if the function returns one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Error description on failure.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Response {
    /// Creates a successful response.
    pub fn success(payload: Option<String>) -> Self {
        Self {
            status: STATUS_OK,
            payload,
            message: None,
        }
    }

    /// Creates an error response with an explicit status.
    pub fn error(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            payload: None,
            message: Some(message.into()),
        }
    }

    /// Returns true if the invocation succeeded.
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

impl From<ContractResult<Option<String>>> for Response {
    fn from(result: ContractResult<Option<String>>) -> Self {
        match result {
            Ok(payload) => Response::success(payload),
            Err(e) => Response::error(e.status(), e.to_string()),
        }
    }
}

impl RecordStore {
    /// Routes `invocation` to the matching operation.
    ///
    /// Returns the function's payload, if it has one.
    ///
    /// # Errors
    ///
    /// - [`ContractError::UnknownFunction`] for names not in [`FUNCTIONS`]
    /// - [`ContractError::InvalidArgument`] for the wrong number of arguments
    /// - Whatever the routed operation returns
    pub fn dispatch<S>(&self, state: &mut S, invocation: &Invocation) -> ContractResult<Option<String>>
    where
        S: StateAccessor + ?Sized,
    {
        let args = &invocation.args;
        debug!(function = %invocation.function, args = args.len(), "dispatch");

        match invocation.function.as_str() {
            "InitLedger" => {
                expect_args(invocation, 0)?;
                self.init_ledger(state).map(|()| None)
            }
            "Set" => {
                expect_args(invocation, 2)?;
                self.set(state, &args[0], &args[1]).map(|()| None)
            }
            "Get" => {
                expect_args(invocation, 1)?;
                self.get(&*state, &args[0]).map(Some)
            }
            "Update" => {
                expect_args(invocation, 2)?;
                self.update(state, &args[0], &args[1]).map(|()| None)
            }
            "Delete" => {
                expect_args(invocation, 1)?;
                self.delete(state, &args[0]).map(|()| None)
            }
            "AssetExists" => {
                expect_args(invocation, 1)?;
                self.exists(&*state, &args[0])
                    .map(|exists| Some(exists.to_string()))
            }
            other => Err(ContractError::unknown_function(other)),
        }
    }

    /// Routes `invocation` and wraps the outcome in a [`Response`].
    pub fn invoke<S>(&self, state: &mut S, invocation: &Invocation) -> Response
    where
        S: StateAccessor + ?Sized,
    {
        self.dispatch(state, invocation).into()
    }
}

fn expect_args(invocation: &Invocation, expected: usize) -> ContractResult<()> {
    let actual = invocation.args.len();
    if actual != expected {
        return Err(ContractError::invalid_argument(format!(
            "{} expects {} argument(s), got {}",
            invocation.function, expected, actual
        )));
    }
    Ok(())
}
