//! Property tests for `FixedBiMap`.
//!
//! Construction accepts any permutation of unique-key entries; these tests
//! generate random entry sets and check the container against a reference
//! `BTreeMap` and against the construction-order reverse-lookup contract.

use std::collections::BTreeMap;

use bidimap::FixedBiMap;
use proptest::prelude::*;

const N: usize = 9;

/// Strategy producing N entries with unique keys, in random order.
fn unique_entries() -> impl Strategy<Value = Vec<(i32, u8)>> {
    proptest::collection::btree_set(any::<i32>(), N)
        .prop_flat_map(|keys| {
            let keys: Vec<i32> = keys.into_iter().collect();
            (Just(keys), proptest::collection::vec(any::<u8>(), N))
        })
        .prop_map(|(keys, values)| keys.into_iter().zip(values).collect::<Vec<_>>())
        .prop_shuffle()
}

fn to_array(entries: &[(i32, u8)]) -> [(i32, u8); N] {
    let mut array = [(0i32, 0u8); N];
    array.copy_from_slice(entries);
    array
}

proptest! {
    #[test]
    fn forward_lookup_matches_reference(entries in unique_entries()) {
        let map = FixedBiMap::new(to_array(&entries)).unwrap();
        let reference: BTreeMap<i32, u8> = entries.iter().copied().collect();

        for (key, value) in &reference {
            prop_assert_eq!(map.find_by_key(key), Some(value));
            prop_assert_eq!(map.get_by_key(key), *value);
        }
    }

    #[test]
    fn construction_is_permutation_independent(entries in unique_entries()) {
        let map = FixedBiMap::new(to_array(&entries)).unwrap();

        let mut sorted = entries.clone();
        sorted.sort_unstable_by_key(|(key, _)| *key);
        let sorted_map = FixedBiMap::new(to_array(&sorted)).unwrap();

        for (key, _) in &entries {
            prop_assert_eq!(map.find_by_key(key), sorted_map.find_by_key(key));
        }
        prop_assert!(map.iter().zip(sorted_map.iter()).all(|(a, b)| a == b));
    }

    #[test]
    fn missing_keys_return_default(entries in unique_entries(), probe in any::<i32>()) {
        let map = FixedBiMap::new(to_array(&entries)).unwrap();

        if !entries.iter().any(|(key, _)| *key == probe) {
            prop_assert_eq!(map.find_by_key(&probe), None);
            prop_assert_eq!(map.get_by_key(&probe), 0u8);
            prop_assert!(!map.contains_key(&probe));
        }
    }

    #[test]
    fn reverse_lookup_resolves_through_forward_lookup(entries in unique_entries()) {
        let map = FixedBiMap::new(to_array(&entries)).unwrap();

        for (_, value) in &entries {
            let key = map.find_by_value(value).copied();
            prop_assert!(key.is_some());
            prop_assert_eq!(map.find_by_key(&key.unwrap()), Some(value));
        }
    }

    #[test]
    fn reverse_lookup_honors_construction_order(entries in unique_entries()) {
        let map = FixedBiMap::new(to_array(&entries)).unwrap();

        for (_, value) in &entries {
            // First match in the original input order is the contract.
            let expected = entries
                .iter()
                .find(|(_, candidate)| candidate == value)
                .map(|(key, _)| *key);
            prop_assert_eq!(map.find_by_value(value).copied(), expected);
            prop_assert_eq!(map.get_by_value(value), expected.unwrap_or_default());
        }
    }

    #[test]
    fn missing_values_return_default(entries in unique_entries(), probe in any::<u8>()) {
        let map = FixedBiMap::new(to_array(&entries)).unwrap();

        if !entries.iter().any(|(_, value)| *value == probe) {
            prop_assert_eq!(map.find_by_value(&probe), None);
            prop_assert_eq!(map.get_by_value(&probe), 0i32);
            prop_assert!(!map.contains_value(&probe));
        }
    }

    #[test]
    fn duplicate_keys_always_rejected(
        entries in unique_entries(),
        source in 0..N,
        target in 0..N,
    ) {
        if source != target {
            let mut corrupted = to_array(&entries);
            corrupted[target].0 = corrupted[source].0;

            let result = FixedBiMap::new(corrupted);
            prop_assert!(result.is_err());
            prop_assert!(result.unwrap_err().is_validation_error());
        }
    }

    #[test]
    fn lookups_are_idempotent(entries in unique_entries(), probe in any::<i32>()) {
        let map = FixedBiMap::new(to_array(&entries)).unwrap();

        let first = map.find_by_key(&probe).copied();
        let second = map.find_by_key(&probe).copied();
        prop_assert_eq!(first, second);
    }
}
