// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! The Koa cuckoo store and its displacement engine.
//!
//! Collisions are resolved by displacing the occupant to its alternate
//! table rather than probing or chaining. One insertion runs a displacement
//! chain: evict, swap the in-flight key in, flip tables, repeat. The chain
//! either lands in an empty slot or hits the `2 * N` retry bound and is
//! declared non-terminating.
//!
//! A failed chain leaves the store physically unchanged: the chain's writes
//! are journaled and applied only on success, so an insertion is atomic.

use tracing::debug;

use crate::config::KoaCuckooStoreConfig;
use crate::error::{KoaCuckooStoreError, Result};
use crate::hash::{HashFunctionPair, TableId};
use crate::report::TableSnapshot;
use crate::table::SlotTables;

/// A buffered slot write belonging to an in-flight displacement chain.
#[derive(Debug)]
struct PendingWrite {
    table: TableId,
    index: usize,
    key: String,
}

/// A fixed-capacity key store using cuckoo hashing.
///
/// The store owns both slot tables exclusively; all mutation is mediated by
/// [`insert`](KoaCuckooStore::insert). Execution is single-threaded and
/// synchronous: one insertion runs to completion before another may begin,
/// and no intermediate state of a chain is ever observable.
///
/// Placement is hash-consistent: every stored key sits at exactly the index
/// its table's hash function computes for it, which makes membership a
/// two-slot probe.
pub struct KoaCuckooStore {
    config: KoaCuckooStoreConfig,
    hasher: HashFunctionPair,
    tables: SlotTables,
}

impl KoaCuckooStore {
    /// Create an empty store with the default configuration
    /// (17 slots per table, hash prime 39).
    pub fn new() -> Self {
        Self::with_config(KoaCuckooStoreConfig::default())
    }

    /// Create an empty store with the given configuration.
    pub fn with_config(config: KoaCuckooStoreConfig) -> Self {
        let hasher = HashFunctionPair::new(config.get_table_capacity(), config.get_hash_prime());
        let tables = SlotTables::new(config.get_table_capacity());
        Self {
            config,
            hasher,
            tables,
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.tables.occupied()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of slots per table.
    pub fn table_capacity(&self) -> usize {
        self.tables.table_capacity()
    }

    /// Total slot count across both tables.
    pub fn capacity(&self) -> usize {
        2 * self.tables.table_capacity()
    }

    /// The two candidate positions for `key`: its primary-table index and
    /// its secondary-table index.
    pub fn candidate_indices(&self, key: &str) -> (usize, usize) {
        (
            self.hasher.slot_index(TableId::Primary, key),
            self.hasher.slot_index(TableId::Secondary, key),
        )
    }

    /// Whether `key` is stored. Hash-consistent placement makes this a probe
    /// of the key's two candidate slots.
    pub fn contains(&self, key: &str) -> bool {
        let (primary, secondary) = self.candidate_indices(key);
        self.tables.get(TableId::Primary, primary) == Some(key)
            || self.tables.get(TableId::Secondary, secondary) == Some(key)
    }

    /// The key stored at `(table, index)`, if any.
    pub fn slot(&self, table: TableId, index: usize) -> Option<&str> {
        self.tables.get(table, index)
    }

    /// Insert `key`, displacing existing occupants to their alternate table
    /// as needed.
    ///
    /// The chain always starts at the primary table, so behavior is fully
    /// deterministic for a given key sequence.
    ///
    /// # Errors
    ///
    /// - [`KoaCuckooStoreError::EmptyKey`] / [`KoaCuckooStoreError::KeyTooLong`]
    ///   if the key fails boundary validation.
    /// - [`KoaCuckooStoreError::KeyExists`] if the key is already stored.
    /// - [`KoaCuckooStoreError::CycleDetected`] if the displacement chain
    ///   performs `2 * N` evictions without reaching an empty slot. The store
    ///   is left unchanged in this case.
    pub fn insert(&mut self, key: &str) -> Result<()> {
        self.validate_key(key)?;
        if self.contains(key) {
            return Err(KoaCuckooStoreError::KeyExists {
                key: key.to_string(),
            });
        }

        let bound = self.config.displacement_bound();
        let mut journal: Vec<PendingWrite> = Vec::new();
        let mut table = TableId::Primary;
        let mut current = key.to_string();
        let mut steps = 0usize;

        loop {
            let index = self.hasher.slot_index(table, &current);
            let occupant = self.pending_or_stored(&journal, table, index).map(str::to_string);
            match occupant {
                None => {
                    debug!(key = %current, table = table.index(), index, steps, "key placed");
                    journal.push(PendingWrite {
                        table,
                        index,
                        key: current,
                    });
                    for write in journal {
                        self.tables.set(write.table, write.index, write.key);
                    }
                    return Ok(());
                }
                Some(evicted) => {
                    if steps >= bound {
                        debug!(key, steps, "displacement chain aborted");
                        return Err(KoaCuckooStoreError::CycleDetected { steps });
                    }
                    debug!(
                        key = %current,
                        evicted = %evicted,
                        table = table.index(),
                        index,
                        "displacing occupant"
                    );
                    journal.push(PendingWrite {
                        table,
                        index,
                        key: current,
                    });
                    current = evicted;
                    table = table.other();
                    steps += 1;
                }
            }
        }
    }

    /// Remove every key. Capacity and configuration are unchanged.
    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Read-only snapshot of both tables, in index order, primary table
    /// before secondary.
    pub fn snapshot(&self) -> TableSnapshot {
        TableSnapshot::capture(&self.tables)
    }

    /// Slot contents as seen by an in-flight chain: the journal shadows the
    /// backing tables.
    fn pending_or_stored<'a>(
        &'a self,
        journal: &'a [PendingWrite],
        table: TableId,
        index: usize,
    ) -> Option<&'a str> {
        journal
            .iter()
            .rev()
            .find(|write| write.table == table && write.index == index)
            .map(|write| write.key.as_str())
            .or_else(|| self.tables.get(table, index))
    }

    fn validate_key(&self, key: &str) -> Result<()> {
        if key.is_empty() {
            return Err(KoaCuckooStoreError::EmptyKey);
        }
        let max = self.config.get_max_key_len();
        if key.len() > max {
            return Err(KoaCuckooStoreError::KeyTooLong {
                length: key.len(),
                max,
            });
        }
        Ok(())
    }
}

impl Default for KoaCuckooStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KoaCuckooStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KoaCuckooStore")
            .field("table_capacity", &self.table_capacity())
            .field("len", &self.len())
            .finish()
    }
}
