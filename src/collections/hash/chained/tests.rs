#![cfg(test)]

use super::*;

#[test]
fn test_colliding_keys() {
    let mut table = ChainedHashTable::with_cap(8);
    table.insert(1, 100);
    table.insert(9, 900);
    assert_eq!(table.get(9), Some(900), "Keys sharing a bucket should both be reachable.");
    assert_eq!(table.get(1), Some(100));

    assert_eq!(table.remove(1), Some(100));
    assert_eq!(table.get(9), Some(900), "Removing one key shouldn't affect its bucket mates.");
    assert_eq!(table.get(1), None);
    assert_eq!(table.len(), 1);
}

#[test]
fn test_duplicate_keys_are_counted() {
    let mut table = ChainedHashTable::new();
    table.insert(5, 1);
    table.insert(5, 2);
    assert_eq!(table.len(), 2, "Every insert should count, even for an existing key.");
    assert_eq!(table.get(5), Some(2), "The most recent insert should win.");

    assert_eq!(table.remove(5), Some(2));
    assert_eq!(table.get(5), Some(1), "Removing should uncover the older entry.");
    assert_eq!(table.remove(5), Some(1));
    assert_eq!(table.remove(5), None, "Removing a missing key should do nothing.");
    assert!(table.is_empty());
}

#[test]
fn test_negative_keys() {
    let mut table = ChainedHashTable::with_cap(4);
    table.insert(-3, 30);
    table.insert(3, 31);
    table.insert(i32::MIN, 0);
    assert_eq!(table.get(-3), Some(30));
    assert_eq!(table.get(3), Some(31));
    assert_eq!(table.get(i32::MIN), Some(0));
    assert!(table.contains_key(-3));
    assert!(!table.contains_key(-4));
}

#[test]
fn test_remove_from_middle_of_chain() {
    let mut table = ChainedHashTable::with_cap(1);
    table.extend([(1, 10), (2, 20), (3, 30)]);
    assert_eq!(table.iter().collect::<Vec<_>>(), [(3, 30), (2, 20), (1, 10)]);

    assert_eq!(table.remove(2), Some(20));
    assert_eq!(table.iter().collect::<Vec<_>>(), [(3, 30), (1, 10)]);
    assert_eq!(table.remove(1), Some(10), "The tail of a chain should be removable.");
    assert_eq!(table.iter().len(), 1);
}

#[test]
fn test_fixed_capacity() {
    let mut table = ChainedHashTable::with_cap(2);
    for i in 0..100 {
        table.insert(i, i * 2);
    }
    assert_eq!(table.cap(), 2, "The number of buckets should never change.");
    assert!((0..100).all(|i| table.get(i) == Some(i * 2)));

    assert_eq!(ChainedHashTable::with_cap(0).cap(), 8, "A capacity of 0 should use the default.");
}

#[test]
fn test_long_chain_drop_and_clone() {
    let mut table = ChainedHashTable::with_cap(1);
    for i in 0..200_000 {
        table.insert(i, i);
    }
    let copy = table.clone();
    assert_eq!(copy, table);
    drop(table);
    assert_eq!(copy.get(0), Some(0));
}

#[test]
fn test_display() {
    let mut table = ChainedHashTable::with_cap(4);
    table.insert(1, 10);
    table.insert(5, 50);
    table.insert(2, 20);
    assert_eq!(table.to_string(), "{5: 50, 1: 10, 2: 20}");
}

#[cfg(feature = "persist")]
mod persist {
    use std::fs;
    use std::path::Path;

    use super::*;
    use crate::persist::{CorruptData, Persist, PersistError};

    fn write_table(path: &Path, len: u64, cap: u64, chains: &[&[(i32, i32)]]) {
        let mut bytes = Vec::new();
        bytes.extend(len.to_le_bytes());
        bytes.extend(cap.to_le_bytes());
        for chain in chains {
            bytes.extend((chain.len() as u64).to_le_bytes());
            for (key, value) in chain.iter() {
                bytes.extend(key.to_le_bytes());
                bytes.extend(value.to_le_bytes());
            }
        }
        fs::write(path, bytes).unwrap();
    }

    #[test]
    fn test_binary_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chained.bin");

        let mut table = ChainedHashTable::with_cap(4);
        table.extend([(1, 10), (5, 50), (5, 55), (-2, 20), (3, 30)]);
        table.save_binary(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap().len(), 16 + 4 * 8 + 5 * 8);

        let mut loaded = ChainedHashTable::new();
        loaded.insert(7, 7);
        loaded.load_binary(&path).unwrap();
        assert_eq!(loaded, table, "Chains should be restored in their original order.");
        assert_eq!(loaded.cap(), 4, "Loading should take the stored capacity.");
        assert_eq!(loaded.get(5), Some(55));
        assert_eq!(loaded.get(7), None, "Loading should replace the existing entries.");
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chained.json");

        let mut table = ChainedHashTable::new();
        table.extend([(1, 10), (9, 90), (1, 11), (2, 20)]);
        table.save_json(&path).unwrap();

        let mut loaded = ChainedHashTable::new();
        loaded.load_json(&path).unwrap();
        assert_eq!(loaded, table, "Chains should be rebuilt in the written order.");
        assert_eq!(loaded.len(), 4);
    }

    #[test]
    fn test_corrupt_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chained.bin");
        let mut table = ChainedHashTable::new();

        write_table(&path, 0, 0, &[]);
        assert!(matches!(
            table.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::ZeroCapacity))
        ));

        write_table(&path, 1, 2, &[&[(1, 10)], &[]]);
        assert!(
            matches!(
                table.load_binary(&path),
                Err(PersistError::Corrupt(CorruptData::MisplacedKey { key: 1, bucket: 0, expected: 1 }))
            ),
            "A key in the wrong bucket should be rejected."
        );

        write_table(&path, 3, 2, &[&[(2, 20)], &[(1, 10)]]);
        assert!(matches!(
            table.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::SizeMismatch { stored: 3, actual: 2 }))
        ));

        write_table(&path, 1, 2, &[&[(2, 20), (4, 40)], &[]]);
        assert!(matches!(
            table.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::SizeMismatch { stored: 1, .. }))
        ));

        write_table(&path, 1, 2, &[&[(2, 20)]]);
        assert!(matches!(
            table.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::UnexpectedEof))
        ));
        assert!(table.is_empty(), "Failed loads should leave the table untouched.");
    }
}
