//! LedgerKV development host
//!
//! Runs the record store chaincode against a local ledger, standing in for
//! the peer that would normally dispatch transactions to it.
//!
//! # Commands
//!
//! - `invoke` - Run one function as a transaction
//! - `serve` - Answer JSON invocations read from stdin, one per line
//! - `dump` - Print every record in the ledger

mod commands;
mod ledger;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// LedgerKV chaincode development host.
#[derive(Parser)]
#[command(name = "ledgerkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the ledger snapshot file (in-memory ledger if omitted)
    #[arg(global = true, short, long)]
    state: Option<PathBuf>,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one chaincode function as a transaction
    Invoke {
        /// Function name (InitLedger, Set, Get, Update, Delete, AssetExists)
        function: String,

        /// Function arguments
        args: Vec<String>,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Answer JSON invocations read from stdin, one per line
    Serve,

    /// Print every record in the ledger
    Dump {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging; stdout carries responses
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Invoke {
            function,
            args,
            format,
        } => {
            let response = commands::invoke::run(cli.state.as_deref(), &function, args, &format)?;
            if !response.is_success() {
                return Err(format!("{function} failed with status {}", response.status).into());
            }
        }
        Commands::Serve => {
            commands::serve::run(cli.state.as_deref())?;
        }
        Commands::Dump { format } => {
            let path = cli.state.ok_or("Ledger path required for dump")?;
            commands::dump::run(&path, &format)?;
        }
        Commands::Version => {
            println!("LedgerKV host v{}", env!("CARGO_PKG_VERSION"));
            println!("LedgerKV contract v{}", ledgerkv_contract::VERSION);
        }
    }

    Ok(())
}
