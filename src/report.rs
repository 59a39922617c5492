// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Read-only table reporting.
//!
//! The reporter enumerates both tables in index order, table 0 before
//! table 1, and renders them as a boxed two-column ASCII report. It never
//! mutates slot contents.

use std::fmt::{self, Display, Formatter};

use crate::hash::TableId;
use crate::table::SlotTables;

/// Rendered column width for each table in the ASCII report.
const REPORT_COLUMN_WIDTH: usize = 45;

/// A borrowed view of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView<'a> {
    /// The table this slot belongs to.
    pub table: TableId,
    /// The slot's index within its table.
    pub index: usize,
    /// The stored key, or `None` for an empty slot.
    pub key: Option<&'a str>,
}

/// An owned, ordered copy of both tables' contents.
///
/// Entries are ordered primary table index 0..N, then secondary table
/// index 0..N. Snapshots compare by value, so replaying the same insert
/// sequence into a fresh store yields an equal snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSnapshot {
    table_capacity: usize,
    slots: Vec<Option<String>>,
}

impl TableSnapshot {
    pub(crate) fn capture(tables: &SlotTables) -> Self {
        let table_capacity = tables.table_capacity();
        let mut slots = Vec::with_capacity(2 * table_capacity);
        for table in [TableId::Primary, TableId::Secondary] {
            for index in 0..table_capacity {
                slots.push(tables.get(table, index).map(str::to_string));
            }
        }
        Self {
            table_capacity,
            slots,
        }
    }

    /// Number of slots per table at capture time.
    pub fn table_capacity(&self) -> usize {
        self.table_capacity
    }

    /// Number of occupied slots across both tables.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// The captured key at `(table, index)`, if any.
    pub fn key_at(&self, table: TableId, index: usize) -> Option<&str> {
        let offset = match table {
            TableId::Primary => 0,
            TableId::Secondary => self.table_capacity,
        };
        self.slots[offset + index].as_deref()
    }

    /// Iterate every slot in report order (primary 0..N, then secondary
    /// 0..N).
    pub fn iter(&self) -> impl Iterator<Item = SlotView<'_>> + '_ {
        let table_capacity = self.table_capacity;
        self.slots.iter().enumerate().map(move |(position, slot)| {
            let (table, index) = if position < table_capacity {
                (TableId::Primary, position)
            } else {
                (TableId::Secondary, position - table_capacity)
            };
            SlotView {
                table,
                index,
                key: slot.as_deref(),
            }
        })
    }
}

impl Display for TableSnapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let header = format!(
            " | {:>4} | {:<width$} | {:<width$} |",
            "",
            "Table 0",
            "Table 1",
            width = REPORT_COLUMN_WIDTH
        );
        // Same printed length as the rows it separates.
        let rule = format!(" |{}|", "-".repeat(header.chars().count().saturating_sub(3)));

        writeln!(f, "{rule}")?;
        writeln!(f, "{header}")?;
        writeln!(f, "{rule}")?;
        for index in 0..self.table_capacity {
            writeln!(
                f,
                " | {:>4} | {:<width$} | {:<width$} |",
                format!("[{index}]"),
                self.key_at(TableId::Primary, index).unwrap_or(""),
                self.key_at(TableId::Secondary, index).unwrap_or(""),
                width = REPORT_COLUMN_WIDTH
            )?;
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}
