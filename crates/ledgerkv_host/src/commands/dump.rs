//! Dump command implementation.

use crate::ledger::Ledger;
use std::path::Path;

/// Prints every record in key order.
pub fn run(path: &Path, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    if !path.exists() {
        return Err(format!("No ledger found at {:?}", path).into());
    }

    let records = Ledger::open(Some(path))?.records();

    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        _ => {
            if records.is_empty() {
                println!("(no records)");
            }
            for (key, value) in &records {
                println!("{key} = {value}");
            }
            println!();
            println!("{} record(s)", records.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn dump_missing_ledger_fails() {
        let dir = TempDir::new().unwrap();
        assert!(run(&dir.path().join("ledger.json"), "text").is_err());
    }

    #[test]
    fn dump_existing_ledger() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ledger.json");
        crate::commands::invoke::run(Some(path.as_path()), "InitLedger", vec![], "text").unwrap();

        assert!(run(&path, "text").is_ok());
        assert!(run(&path, "json").is_ok());
    }
}
