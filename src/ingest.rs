// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Line-oriented key ingestion.
//!
//! Feeds the store one key per line from a text file. Each line is trimmed
//! of its terminator before insertion. The first `CycleDetected` is fatal
//! for the whole batch; invalid or duplicate keys are skipped with a
//! warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::KoaCuckooStoreError;
use crate::store::KoaCuckooStore;

/// Errors surfaced while loading a key batch.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The underlying reader failed.
    #[error("failed to read key input: {0}")]
    Io(#[from] std::io::Error),

    /// A displacement chain failed; the batch is abandoned at this line.
    #[error("batch aborted at line {line}: {source}")]
    BatchAborted {
        /// 1-based line number of the key whose insertion failed.
        line: usize,
        source: KoaCuckooStoreError,
    },
}

/// Outcome of a completed key batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    /// Keys placed successfully.
    pub inserted: usize,
    /// Lines skipped (empty, over-long, or duplicate keys).
    pub skipped: usize,
}

/// Load keys from `reader` into `store`, one key per line.
///
/// Lines are trimmed of a trailing carriage return (the line feed is already
/// consumed by the reader). Empty, over-long, and duplicate keys are skipped
/// with a warning. The first [`KoaCuckooStoreError::CycleDetected`] aborts
/// the batch; everything inserted before the failing line remains stored.
pub fn load_keys<R: BufRead>(
    store: &mut KoaCuckooStore,
    reader: R,
) -> Result<BatchReport, IngestError> {
    let mut report = BatchReport::default();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let key = line.trim_end_matches('\r');
        let line_number = number + 1;
        match store.insert(key) {
            Ok(()) => report.inserted += 1,
            Err(err @ KoaCuckooStoreError::CycleDetected { .. }) => {
                return Err(IngestError::BatchAborted {
                    line: line_number,
                    source: err,
                });
            }
            Err(err) => {
                warn!(line = line_number, key, %err, "key skipped");
                report.skipped += 1;
            }
        }
    }
    debug!(
        inserted = report.inserted,
        skipped = report.skipped,
        "key batch loaded"
    );
    Ok(report)
}

/// Open `path` and load its lines into `store` via [`load_keys`].
pub fn load_keys_from_path<P: AsRef<Path>>(
    store: &mut KoaCuckooStore,
    path: P,
) -> Result<BatchReport, IngestError> {
    let file = File::open(path)?;
    load_keys(store, BufReader::new(file))
}
