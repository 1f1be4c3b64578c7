//! Serve command implementation.
//!
//! Reads one JSON invocation per input line and writes one JSON response per
//! output line. Each invocation is its own transaction. The loop ends at EOF.
//!
//! ```text
//! {"function":"Set","args":["asset1","value1"]}
//! {"function":"Get","args":["asset1"]}
//! ```

use crate::ledger::Ledger;
use ledgerkv_contract::{Invocation, RecordStore, Response};
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::{error, info, warn};

/// Counters reported when the loop ends.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ServeStats {
    /// Invocations answered (including malformed ones).
    pub handled: usize,
    /// Invocations committed.
    pub committed: usize,
    /// Invocations that returned an error response.
    pub failed: usize,
}

/// Runs the service loop over stdin and stdout.
pub fn run(path: Option<&Path>) -> Result<ServeStats, Box<dyn std::error::Error>> {
    let mut ledger = Ledger::open(path)?;
    let store = RecordStore::new();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let stats = serve(&mut ledger, &store, stdin.lock(), stdout.lock())?;

    info!(
        handled = stats.handled,
        committed = stats.committed,
        failed = stats.failed,
        "service loop finished"
    );
    Ok(stats)
}

/// Answers every invocation read from `input` on `output`.
pub fn serve<R, W>(
    ledger: &mut Ledger,
    store: &RecordStore,
    input: R,
    mut output: W,
) -> io::Result<ServeStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = ServeStats::default();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<Invocation>(&line) {
            Ok(invocation) => match ledger.execute(store, &invocation) {
                Ok(response) => response,
                Err(e) => {
                    error!(function = %invocation.function, error = %e, "commit failed");
                    Response::error(500, format!("commit failed: {e}"))
                }
            },
            Err(e) => {
                warn!(error = %e, "malformed invocation");
                Response::error(400, format!("malformed invocation: {e}"))
            }
        };

        stats.handled += 1;
        if response.is_success() {
            stats.committed += 1;
        } else {
            stats.failed += 1;
        }

        serde_json::to_writer(&mut output, &response)?;
        output.write_all(b"\n")?;
        output.flush()?;
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn serve_lines(input: &str) -> (ServeStats, Vec<Response>, Ledger) {
        let mut ledger = Ledger::open(None).unwrap();
        let mut output = Vec::new();
        let stats = serve(
            &mut ledger,
            &RecordStore::new(),
            Cursor::new(input.as_bytes()),
            &mut output,
        )
        .unwrap();

        let responses = String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        (stats, responses, ledger)
    }

    #[test]
    fn serve_answers_each_line() {
        let input = r#"{"function":"InitLedger"}
{"function":"Get","args":["asset2"]}

{"function":"Update","args":["asset9","x"]}
{"function":"Delete","args":["asset1"]}
"#;
        let (stats, responses, ledger) = serve_lines(input);

        assert_eq!(
            stats,
            ServeStats {
                handled: 4,
                committed: 3,
                failed: 1
            }
        );
        assert_eq!(responses[1].payload.as_deref(), Some("value2"));
        assert_eq!(responses[2].status, 404);
        assert_eq!(ledger.records().len(), 2);
    }

    #[test]
    fn serve_survives_malformed_lines() {
        let input = "not json\n{\"function\":\"Set\",\"args\":[\"k\",\"v\"]}\n";
        let (stats, responses, ledger) = serve_lines(input);

        assert_eq!(stats.failed, 1);
        assert_eq!(responses[0].status, 400);
        assert!(responses[1].is_success());
        assert_eq!(ledger.records().get("k").map(String::as_str), Some("v"));
    }
}
