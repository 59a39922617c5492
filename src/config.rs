// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Configuration for the Koa cuckoo store.

/// Configuration for the Koa cuckoo store.
///
/// This struct provides the tunable parameters of the store: the per-table
/// capacity, the multiplicative constant used by the hash function pair, and
/// the maximum accepted key length. Capacity is fixed for the lifetime of a
/// store; changing it would invalidate every prior placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KoaCuckooStoreConfig {
    /// Number of slots per table. The store holds two tables, so total
    /// capacity is twice this value.
    table_capacity: usize,

    /// Multiplier for the rolling hash weight. Must be odd so the weight
    /// sequence does not collapse onto the small factors of the capacity.
    hash_prime: u64,

    /// Maximum accepted key length in bytes. Checked at the boundary only;
    /// the displacement engine never consults it.
    max_key_len: usize,
}

/// Default per-table slot count.
pub const DEFAULT_TABLE_CAPACITY: usize = 17;

/// Default rolling-hash multiplier.
pub const DEFAULT_HASH_PRIME: u64 = 39;

/// Default maximum key length in bytes.
pub const DEFAULT_MAX_KEY_LEN: usize = 255;

impl KoaCuckooStoreConfig {
    /// Create a new default configuration.
    ///
    /// Default values:
    /// - table_capacity: 17
    /// - hash_prime: 39
    /// - max_key_len: 255 bytes
    pub fn new() -> Self {
        Self {
            table_capacity: DEFAULT_TABLE_CAPACITY,
            hash_prime: DEFAULT_HASH_PRIME,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }

    /// Set the number of slots per table.
    pub fn with_table_capacity(mut self, table_capacity: usize) -> Self {
        if table_capacity == 0 {
            panic!("Table capacity must be greater than 0");
        }
        self.table_capacity = table_capacity;
        self
    }

    /// Set the rolling-hash multiplier.
    ///
    /// The multiplier must be odd; an even multiplier degenerates the weight
    /// sequence for even capacities and correlates the two hash functions.
    pub fn with_hash_prime(mut self, hash_prime: u64) -> Self {
        if hash_prime % 2 == 0 {
            panic!("Hash prime must be odd");
        }
        self.hash_prime = hash_prime;
        self
    }

    /// Set the maximum accepted key length in bytes.
    pub fn with_max_key_len(mut self, max_key_len: usize) -> Self {
        if max_key_len == 0 {
            panic!("Maximum key length must be greater than 0");
        }
        self.max_key_len = max_key_len;
        self
    }

    /// Get the number of slots per table.
    pub fn get_table_capacity(&self) -> usize {
        self.table_capacity
    }

    /// Get the rolling-hash multiplier.
    pub fn get_hash_prime(&self) -> u64 {
        self.hash_prime
    }

    /// Get the maximum accepted key length in bytes.
    pub fn get_max_key_len(&self) -> usize {
        self.max_key_len
    }

    /// Retry bound for one displacement chain: two full passes over the
    /// combined capacity. Reaching it declares the chain non-terminating.
    pub fn displacement_bound(&self) -> usize {
        2 * self.table_capacity
    }
}

impl Default for KoaCuckooStoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = KoaCuckooStoreConfig::default();
        assert_eq!(config.get_table_capacity(), 17);
        assert_eq!(config.get_hash_prime(), 39);
        assert_eq!(config.get_max_key_len(), 255);
        assert_eq!(config.displacement_bound(), 34);
    }

    #[test]
    fn test_config_builder() {
        let config = KoaCuckooStoreConfig::new()
            .with_table_capacity(101)
            .with_hash_prime(31)
            .with_max_key_len(64);

        assert_eq!(config.get_table_capacity(), 101);
        assert_eq!(config.get_hash_prime(), 31);
        assert_eq!(config.get_max_key_len(), 64);
        assert_eq!(config.displacement_bound(), 202);
    }

    #[test]
    #[should_panic(expected = "Table capacity must be greater than 0")]
    fn test_invalid_table_capacity() {
        let _config = KoaCuckooStoreConfig::new().with_table_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Hash prime must be odd")]
    fn test_invalid_even_hash_prime() {
        let _config = KoaCuckooStoreConfig::new().with_hash_prime(40);
    }

    #[test]
    #[should_panic(expected = "Hash prime must be odd")]
    fn test_invalid_zero_hash_prime() {
        let _config = KoaCuckooStoreConfig::new().with_hash_prime(0);
    }

    #[test]
    #[should_panic(expected = "Maximum key length must be greater than 0")]
    fn test_invalid_max_key_len() {
        let _config = KoaCuckooStoreConfig::new().with_max_key_len(0);
    }
}
