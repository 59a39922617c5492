// Copyright (c) 2025 Koa Cuckoo Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the Koa cuckoo store.
//! Exercises the displacement engine end to end: placement, displacement
//! chains, cycle detection, snapshots, and file ingestion.

use std::io::Write;

use proptest::prelude::*;

use koa_cuckoo_lib::{
    load_keys_from_path, KoaCuckooStore, KoaCuckooStoreConfig, KoaCuckooStoreError, TableId,
};

fn store_with_capacity(table_capacity: usize) -> KoaCuckooStore {
    KoaCuckooStore::with_config(KoaCuckooStoreConfig::new().with_table_capacity(table_capacity))
}

#[test]
fn test_sequential_single_character_keys() {
    // Reference scenario: N = 17, keys "a", "b", "c" land without collisions.
    let mut store = KoaCuckooStore::new();
    store.insert("a").unwrap();
    store.insert("b").unwrap();
    store.insert("c").unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.slot(TableId::Primary, 12), Some("a"));
    assert_eq!(store.slot(TableId::Primary, 13), Some("b"));
    assert_eq!(store.slot(TableId::Primary, 14), Some("c"));
}

#[test]
fn test_collision_displaces_to_alternate_table() {
    let mut store = KoaCuckooStore::new();

    // "a" and "r" share their primary index (both byte values are 12 mod 17).
    let (primary_a, secondary_a) = store.candidate_indices("a");
    let (primary_r, _) = store.candidate_indices("r");
    assert_eq!(primary_a, primary_r);

    store.insert("a").unwrap();
    store.insert("r").unwrap();

    // "r" takes the contested primary slot; "a" was displaced to its
    // secondary position.
    assert_eq!(store.slot(TableId::Primary, primary_r), Some("r"));
    assert_eq!(store.slot(TableId::Secondary, secondary_a), Some("a"));
    assert!(store.contains("a"));
    assert!(store.contains("r"));
    assert_eq!(store.len(), 2);
}

#[test]
fn test_minimal_capacity_boundary() {
    // N = 1: two slots in total. Two keys fit, the third must cycle.
    let mut store = store_with_capacity(1);
    store.insert("x").unwrap();
    store.insert("y").unwrap();
    assert_eq!(store.len(), 2);

    let err = store.insert("z").unwrap_err();
    assert_eq!(err, KoaCuckooStoreError::CycleDetected { steps: 2 });
}

#[test]
fn test_full_tables_fail_after_exact_bound() {
    // Fill both tables completely, then verify the failing chain runs for
    // exactly 2 * N evictions and leaves the store untouched.
    let mut store = store_with_capacity(1);
    store.insert("x").unwrap();
    store.insert("y").unwrap();
    assert_eq!(store.len(), store.capacity());

    let before = store.snapshot();
    assert_eq!(
        store.insert("z"),
        Err(KoaCuckooStoreError::CycleDetected {
            steps: store.capacity()
        })
    );
    assert_eq!(store.snapshot(), before);
    assert_eq!(store.len(), store.capacity());
}

#[test]
fn test_hash_consistent_placement() {
    let mut store = KoaCuckooStore::new();
    for key in ["a", "r", "alpha", "beta", "gamma", "delta", "ab", "ba"] {
        store.insert(key).unwrap();
    }

    for view in store.snapshot().iter() {
        if let Some(key) = view.key {
            let (primary, secondary) = store.candidate_indices(key);
            let expected = match view.table {
                TableId::Primary => primary,
                TableId::Secondary => secondary,
            };
            assert_eq!(
                view.index, expected,
                "key {key:?} is not at its hashed slot"
            );
        }
    }
}

#[test]
fn test_occupied_count_matches_successful_inserts() {
    let mut store = store_with_capacity(5);
    let keys = ["a", "b", "c", "a", "", "d"];
    let successes = keys.iter().filter(|key| store.insert(key).is_ok()).count();
    assert_eq!(store.len(), successes);
    assert_eq!(store.snapshot().occupied(), successes);
}

#[test]
fn test_identical_sequences_build_identical_tables() {
    let keys = ["alpha", "beta", "a", "r", "gamma", "ab"];

    let mut first = KoaCuckooStore::new();
    let mut second = KoaCuckooStore::new();
    for key in keys {
        first.insert(key).unwrap();
        second.insert(key).unwrap();
    }

    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn test_snapshot_clear_replay_round_trip() {
    let keys = ["a", "r", "alpha", "beta", "ab"];
    let mut store = KoaCuckooStore::new();
    for key in keys {
        store.insert(key).unwrap();
    }

    let snapshot = store.snapshot();
    store.clear();
    assert!(store.is_empty());

    for key in keys {
        store.insert(key).unwrap();
    }
    assert_eq!(store.snapshot(), snapshot);
}

#[test]
fn test_load_keys_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "alpha\r\nbeta\nalpha\n\ngamma\n").unwrap();
    file.flush().unwrap();

    let mut store = KoaCuckooStore::new();
    let report = load_keys_from_path(&mut store, file.path()).unwrap();

    assert_eq!(report.inserted, 3);
    assert_eq!(report.skipped, 2);
    assert!(store.contains("alpha"));
    assert!(store.contains("beta"));
    assert!(store.contains("gamma"));
}

proptest! {
    // Random key batches keep every invariant: the occupied count matches
    // the successful inserts, every stored key sits at its hashed slot, and
    // replaying the sequence reproduces the tables bit for bit.
    #[test]
    fn prop_invariants_hold_for_random_batches(
        keys in proptest::collection::vec("[a-z]{1,8}", 0..24)
    ) {
        let config = KoaCuckooStoreConfig::new().with_table_capacity(31);
        let mut store = KoaCuckooStore::with_config(config.clone());

        let mut successes = 0usize;
        for key in &keys {
            if store.insert(key).is_ok() {
                successes += 1;
            }
        }
        prop_assert_eq!(store.len(), successes);

        let snapshot = store.snapshot();
        for view in snapshot.iter() {
            if let Some(key) = view.key {
                let (primary, secondary) = store.candidate_indices(key);
                let expected = match view.table {
                    TableId::Primary => primary,
                    TableId::Secondary => secondary,
                };
                prop_assert_eq!(view.index, expected);
            }
        }

        let mut replay = KoaCuckooStore::with_config(config);
        for key in &keys {
            let _ = replay.insert(key);
        }
        prop_assert_eq!(replay.snapshot(), snapshot);
    }
}
