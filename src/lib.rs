//! Koa Cuckoo Store
//!
//! A fixed-capacity key store built on cuckoo hashing: two slot tables, two
//! independent hash functions, and collision resolution by displacing the
//! occupant to its alternate table. Insertion is expected O(1) amortized;
//! a `2 * N` retry bound detects displacement cycles, and a failed chain
//! leaves the store unchanged.
//!
//! # Design
//!
//! - Both tables are owned by a single [`KoaCuckooStore`] value; no ambient
//!   or global state.
//! - The hash pair decorrelates its two indices by traversal direction
//!   (front-to-back vs. back-to-front byte folding).
//! - Behavior is fully deterministic for a given key sequence; there is no
//!   randomization anywhere.
//!
//! # Quick start
//!
//! ```
//! use koa_cuckoo_lib::{KoaCuckooStore, KoaCuckooStoreConfig};
//!
//! let config = KoaCuckooStoreConfig::new().with_table_capacity(17);
//! let mut store = KoaCuckooStore::with_config(config);
//!
//! store.insert("hoku").expect("placement failed");
//! store.insert("lani").expect("placement failed");
//!
//! assert!(store.contains("hoku"));
//! assert_eq!(store.len(), 2);
//!
//! // Read-only enumeration of both tables, index order, table 0 first.
//! let snapshot = store.snapshot();
//! assert_eq!(snapshot.occupied(), 2);
//! println!("{snapshot}");
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod hash;
pub mod ingest;
pub mod report;
pub mod store;
pub mod table;

pub use crate::{
    config::KoaCuckooStoreConfig,
    error::{KoaCuckooStoreError, Result},
    hash::{HashFunctionPair, TableId},
    ingest::{load_keys, load_keys_from_path, BatchReport, IngestError},
    report::{SlotView, TableSnapshot},
    store::KoaCuckooStore,
    table::{Slot, SlotTables},
};

/// Version information for the Koa cuckoo store.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
