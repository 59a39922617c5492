// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Hash function pair for the Koa cuckoo store.
//!
//! Cuckoo hashing needs two hash functions whose outputs are independent for
//! the same input. This pair folds the key's bytes through a multiplicative
//! rolling scheme and decorrelates the two indices by traversal direction:
//! the primary function walks the key front to back, the secondary back to
//! front. Both are pure and deterministic for the lifetime of the store.

/// Identifies one of the two slot tables.
///
/// Table identity is meaningful: a key's two candidate positions are
/// (`Primary`, primary index) and (`Secondary`, secondary index). Snapshot
/// and report order is always `Primary` before `Secondary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// Table 0. Every fresh insertion starts here.
    Primary,
    /// Table 1, the alternate position for displaced keys.
    Secondary,
}

impl TableId {
    /// The other table of the pair.
    pub fn other(self) -> Self {
        match self {
            TableId::Primary => TableId::Secondary,
            TableId::Secondary => TableId::Primary,
        }
    }

    /// Stable numeric identifier (0 or 1), for display and logging.
    pub fn index(self) -> usize {
        match self {
            TableId::Primary => 0,
            TableId::Secondary => 1,
        }
    }
}

/// The two directional rolling hash functions of a store.
///
/// Both functions map a key to an index in `[0, table_capacity)`. Bytes fold
/// in as signed values, as if accumulated through a signed `char`;
/// `rem_euclid` keeps every intermediate in range, which covers the
/// negative-modulo edge case for bytes above 0x7F.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashFunctionPair {
    table_capacity: usize,
    prime: i64,
}

impl HashFunctionPair {
    /// Create a hash pair for tables of `table_capacity` slots using the
    /// given rolling multiplier.
    pub fn new(table_capacity: usize, prime: u64) -> Self {
        Self {
            table_capacity,
            prime: prime as i64,
        }
    }

    /// Number of slots per table this pair indexes into.
    pub fn table_capacity(&self) -> usize {
        self.table_capacity
    }

    /// Compute the slot index for `key` in the given table.
    ///
    /// The accumulator starts from a boundary byte (first byte for
    /// `Primary`, last byte for `Secondary`); each remaining byte is folded
    /// in traversal order as `acc = (acc + byte * weight) mod N`, with
    /// `weight = (weight * prime) mod N` advanced before each fold and
    /// seeded at 1. Single-byte keys reduce to `byte mod N`.
    pub fn slot_index(&self, table: TableId, key: &str) -> usize {
        let bytes = key.as_bytes();
        match table {
            TableId::Primary => match bytes.split_first() {
                Some((&first, rest)) => self.fold(first as i8, rest.iter().map(|&b| b as i8)),
                None => 0,
            },
            TableId::Secondary => match bytes.split_last() {
                Some((&last, rest)) => self.fold(last as i8, rest.iter().rev().map(|&b| b as i8)),
                None => 0,
            },
        }
    }

    fn fold(&self, boundary: i8, rest: impl Iterator<Item = i8>) -> usize {
        let n = self.table_capacity as i64;
        let mut acc = i64::from(boundary).rem_euclid(n);
        let mut weight: i64 = 1;
        for byte in rest {
            weight = (weight * self.prime).rem_euclid(n);
            acc = (acc + i64::from(byte) * weight).rem_euclid(n);
        }
        acc as usize
    }
}
