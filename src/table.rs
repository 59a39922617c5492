// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Slot storage for the Koa cuckoo store.
//!
//! Pure storage: two parallel arrays of optional key slots with a capacity
//! fixed at construction. No hashing logic lives here; slot selection is the
//! displacement engine's job.

use crate::hash::TableId;

/// A single storage position within a table, holding at most one key.
pub type Slot = Option<String>;

/// The two fixed-capacity slot tables of a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotTables {
    table_capacity: usize,
    primary: Vec<Slot>,
    secondary: Vec<Slot>,
}

impl SlotTables {
    /// Create two empty tables of `table_capacity` slots each.
    pub fn new(table_capacity: usize) -> Self {
        Self {
            table_capacity,
            primary: vec![None; table_capacity],
            secondary: vec![None; table_capacity],
        }
    }

    /// Number of slots per table.
    pub fn table_capacity(&self) -> usize {
        self.table_capacity
    }

    /// The key stored at `(table, index)`, if any.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn get(&self, table: TableId, index: usize) -> Option<&str> {
        self.slots(table)[index].as_deref()
    }

    /// Store `key` at `(table, index)`, returning the displaced occupant.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn set(&mut self, table: TableId, index: usize, key: String) -> Option<String> {
        self.slots_mut(table)[index].replace(key)
    }

    /// Whether the slot at `(table, index)` is empty.
    pub fn is_empty_slot(&self, table: TableId, index: usize) -> bool {
        self.slots(table)[index].is_none()
    }

    /// Total number of occupied slots across both tables.
    pub fn occupied(&self) -> usize {
        self.primary.iter().chain(self.secondary.iter()).filter(|slot| slot.is_some()).count()
    }

    /// Empty every slot in both tables. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.primary.iter_mut().for_each(|slot| *slot = None);
        self.secondary.iter_mut().for_each(|slot| *slot = None);
    }

    fn slots(&self, table: TableId) -> &[Slot] {
        match table {
            TableId::Primary => &self.primary,
            TableId::Secondary => &self.secondary,
        }
    }

    fn slots_mut(&mut self, table: TableId) -> &mut [Slot] {
        match table {
            TableId::Primary => &mut self.primary,
            TableId::Secondary => &mut self.secondary,
        }
    }
}
