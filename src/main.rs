//! Koa Cuckoo Store - Main entrypoint.
//!
//! Command-line front end for the cuckoo store: reads a text file with one
//! key per line, places every key, and prints the resulting table report.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use koa_cuckoo_lib::{load_keys_from_path, KoaCuckooStore, KoaCuckooStoreConfig};

/// Command line arguments for the Koa cuckoo store.
#[derive(Parser, Debug)]
#[clap(name = "Koa Cuckoo Store", version, author, about)]
struct Args {
    /// Input file with one key per line
    input: PathBuf,

    /// Slots per table
    #[clap(long, default_value_t = 17)]
    capacity: usize,

    /// Multiplier for the rolling hash pair (must be odd)
    #[clap(long, default_value_t = 39)]
    prime: u64,

    /// Maximum accepted key length in bytes
    #[clap(long, default_value_t = 255)]
    max_key_len: usize,
}

/// Initialize the logging system.
fn init_logging() -> anyhow::Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_line_number(true)
        .with_file(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set global tracing subscriber")
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    // Initialize logging early to capture any startup errors
    init_logging()?;

    let args = Args::parse();

    let config = KoaCuckooStoreConfig::new()
        .with_table_capacity(args.capacity)
        .with_hash_prime(args.prime)
        .with_max_key_len(args.max_key_len);
    let mut store = KoaCuckooStore::with_config(config);

    match load_keys_from_path(&mut store, &args.input) {
        Ok(report) => {
            info!(
                inserted = report.inserted,
                skipped = report.skipped,
                occupied = store.len(),
                "key file loaded"
            );
            println!("{}", store.snapshot());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Placement has failed: {e}");
            process::exit(1);
        }
    }
}
