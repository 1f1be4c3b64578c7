//! CLI command implementations.

pub mod dump;
pub mod invoke;
pub mod serve;

use ledgerkv_contract::Response;

/// Prints a response in the requested format.
pub(crate) fn print_response(response: &Response, format: &str) -> Result<(), serde_json::Error> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(response)?);
        }
        _ => {
            println!("status: {}", response.status);
            if let Some(payload) = &response.payload {
                println!("payload: {payload}");
            }
            if let Some(message) = &response.message {
                println!("message: {message}");
            }
        }
    }
    Ok(())
}
