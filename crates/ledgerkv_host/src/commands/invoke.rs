//! Invoke command implementation.

use crate::commands::print_response;
use crate::ledger::Ledger;
use ledgerkv_contract::{Invocation, RecordStore, Response};
use std::path::Path;
use tracing::info;

/// Runs a single invocation as one transaction.
///
/// Returns the response after printing it.
pub fn run(
    path: Option<&Path>,
    function: &str,
    args: Vec<String>,
    format: &str,
) -> Result<Response, Box<dyn std::error::Error>> {
    let mut ledger = Ledger::open(path)?;
    let store = RecordStore::new();
    let invocation = Invocation::new(function, args);

    let response = ledger.execute(&store, &invocation)?;
    info!(function, status = response.status, "invocation finished");

    print_response(&response, format)?;
    Ok(response)
}
