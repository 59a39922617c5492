// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Koa cuckoo store.

/// Error types for Koa cuckoo store operations
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum KoaCuckooStoreError {
    /// The displacement chain exceeded its retry bound without reaching an
    /// empty slot. The table is cycling or effectively full along this chain.
    /// A completely full pair of tables surfaces as this same error; it is
    /// not distinguished as a separate kind.
    #[error("displacement chain aborted after {steps} steps, table is cycling or effectively full")]
    CycleDetected {
        /// Number of evictions performed before giving up (the `2 * N` bound).
        steps: usize,
    },

    /// The key is already stored in one of the two tables.
    #[error("key already stored: {key}")]
    KeyExists {
        key: String,
    },

    /// Empty keys are rejected before the displacement engine runs.
    #[error("empty keys cannot be stored")]
    EmptyKey,

    /// The key exceeds the configured maximum length.
    #[error("key length {length} exceeds the maximum of {max} bytes")]
    KeyTooLong {
        length: usize,
        max: usize,
    },
}

/// Result type for Koa cuckoo store operations
pub type Result<T> = std::result::Result<T, KoaCuckooStoreError>;
