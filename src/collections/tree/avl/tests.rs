#![cfg(test)]

use std::collections::BTreeSet;

use super::*;

#[test]
fn test_single_rotations() {
    let tree: AvlTree = [30, 20, 10].into_iter().collect();
    assert_eq!(tree.root(), Some(20), "A left-left insert should rotate right.");
    assert_eq!(tree.height(), 2);
    tree.verify_balance();

    let tree: AvlTree = [10, 20, 30].into_iter().collect();
    assert_eq!(tree.root(), Some(20), "A right-right insert should rotate left.");
    assert_eq!(tree.height(), 2);
    tree.verify_balance();
}

#[test]
fn test_double_rotations() {
    let tree: AvlTree = [30, 10, 20].into_iter().collect();
    assert_eq!(tree.root(), Some(20), "A left-right insert should rotate twice.");
    tree.verify_balance();

    let tree: AvlTree = [10, 30, 20].into_iter().collect();
    assert_eq!(tree.root(), Some(20), "A right-left insert should rotate twice.");
    tree.verify_balance();
}

#[test]
fn test_duplicate_insert() {
    let mut tree: AvlTree = [5, 3, 8].into_iter().collect();
    assert!(!tree.insert(3), "Inserting an existing key should report false.");
    assert_eq!(tree.len(), 3, "Inserting an existing key shouldn't change the length.");
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 8]);
}

#[test]
fn test_remove() {
    let mut tree: AvlTree = (1..=7).collect();
    assert_eq!(tree.root(), Some(4));

    assert!(!tree.remove(100), "Removing a missing key should report false.");
    assert!(tree.remove(1), "A leaf should be removable.");
    tree.verify_balance();
    assert!(tree.remove(2), "A node with one child should be removable.");
    tree.verify_balance();
    assert!(tree.remove(4), "A node with two children should be removable.");
    assert_eq!(tree.root(), Some(5), "The root should be replaced by its in-order successor.");
    tree.verify_balance();

    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 5, 6, 7]);
    assert!(!tree.contains(4));
    assert!(tree.contains(6));
}

#[test]
fn test_remove_rebalances_by_child() {
    let mut tree: AvlTree = [20, 10, 30, 5, 15].into_iter().collect();
    assert!(tree.remove(30));
    assert_eq!(
        tree.root(),
        Some(10),
        "An evenly balanced left child should only need a single rotation."
    );
    assert_eq!(tree.height(), 3);
    tree.verify_balance();

    let mut tree: AvlTree = [20, 10, 30, 15].into_iter().collect();
    assert!(tree.remove(30));
    assert_eq!(tree.root(), Some(15), "A right-heavy left child should need a double rotation.");
    assert_eq!(tree.height(), 2);
    tree.verify_balance();
}

#[test]
fn test_matches_ordered_set() {
    let mut tree = AvlTree::new();
    let mut model = BTreeSet::new();
    let mut seed: u32 = 0x2545_f491;

    for round in 0..3000 {
        seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        let key = (seed >> 16) as i32 % 500 - 250;

        if round % 3 == 2 {
            assert_eq!(tree.remove(key), model.remove(&key));
        } else {
            assert_eq!(tree.insert(key), model.insert(key));
        }
        assert_eq!(tree.verify_balance(), model.len());
    }

    assert!(tree.iter().copied().eq(model.iter().copied()), "Keys should iterate in order.");
    assert_eq!(tree.iter().len(), model.len());
    assert_eq!(tree.min(), model.first().copied());
    assert_eq!(tree.max(), model.last().copied());
    assert!(model.iter().all(|key| tree.contains(*key)));
}

#[test]
fn test_height_is_logarithmic() {
    let tree: AvlTree = (0..1024).collect();
    assert_eq!(tree.len(), 1024);
    assert!(tree.height() <= 11, "Sorted inserts shouldn't degrade the tree into a list.");
    tree.verify_balance();
}

#[test]
fn test_empty() {
    let mut tree = AvlTree::new();
    assert!(tree.is_empty());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.root(), None);
    assert_eq!(tree.min(), None);
    assert_eq!(tree.max(), None);
    assert!(!tree.remove(1));
    assert_eq!(tree.iter().next(), None);
    assert_eq!(tree, AvlTree::default());
}

#[test]
fn test_fmt_and_eq() {
    let tree: AvlTree = [30, 20, 10].into_iter().collect();
    assert_eq!(tree.to_string(), "{10, 20, 30}");
    assert!(format!("{tree:?}").contains("(20)"));

    let other: AvlTree = [10, 20, 30].into_iter().collect();
    assert_eq!(tree, other, "Trees with the same keys should be equal.");
    assert_eq!(tree.clone(), tree);
    assert_ne!(tree, [10, 20].into_iter().collect::<AvlTree>());
}

#[cfg(feature = "persist")]
mod persist {
    use std::fs;

    use super::*;
    use crate::persist::{CorruptData, Persist, PersistError};

    fn dump(keys: &[i32]) -> Vec<u8> {
        keys.iter().flat_map(|key| key.to_le_bytes()).collect()
    }

    #[test]
    fn test_binary_round_trip_keeps_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avl.bin");

        let tree: AvlTree = [30, 20, 10].into_iter().collect();
        tree.save_binary(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), dump(&[20, 10, -1, -1, 30, -1, -1]));

        let mut tree: AvlTree = (0..100).map(|i| i * 3 - 50).collect();
        tree.remove(1);
        tree.remove(52);
        tree.save_binary(&path).unwrap();

        let mut loaded: AvlTree = [1, 2, 3].into_iter().collect();
        loaded.load_binary(&path).unwrap();
        assert_eq!(loaded, tree);
        assert_eq!(
            format!("{loaded:?}"),
            format!("{tree:?}"),
            "The stored shape should be restored exactly."
        );
        assert_eq!(loaded.verify_balance(), tree.len());
    }

    #[test]
    fn test_empty_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avl.bin");

        AvlTree::new().save_binary(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap(), dump(&[-1]));

        let mut loaded: AvlTree = [4].into_iter().collect();
        loaded.load_binary(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_sentinel_key() {
        let dir = tempfile::tempdir().unwrap();
        let tree: AvlTree = [-2, -1, 0].into_iter().collect();

        assert!(matches!(
            tree.save_binary(dir.path().join("avl.bin")),
            Err(PersistError::Sentinel(_))
        ));

        let path = dir.path().join("avl.json");
        tree.save_json(&path).unwrap();
        let mut loaded = AvlTree::new();
        loaded.load_json(&path).unwrap();
        assert!(loaded.contains(-1), "JSON has no sentinel, so -1 should survive it.");
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avl.json");

        let tree: AvlTree = [30, 20, 10].into_iter().collect();
        tree.save_json(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"keys\": [\n    10,\n    20,\n    30\n  ]\n}\n"
        );

        let tree: AvlTree = (-40..60).rev().collect();
        tree.save_json(&path).unwrap();
        let mut loaded: AvlTree = [1000].into_iter().collect();
        loaded.load_json(&path).unwrap();
        assert_eq!(loaded, tree, "Reinserting the sorted keys should give the same keys.");
        loaded.verify_balance();
    }

    #[test]
    fn test_corrupt_trees() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("avl.bin");
        let mut tree: AvlTree = [7].into_iter().collect();

        fs::write(&path, dump(&[10, 20, -1, -1, -1])).unwrap();
        assert!(matches!(
            tree.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::OutOfOrder { key: 20 }))
        ));

        fs::write(&path, dump(&[10, 5, 3, -1, -1, -1, -1])).unwrap();
        assert!(matches!(
            tree.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::Unbalanced { key: 10 }))
        ));

        let chain: Vec<i32> = (0..70).map(|i| 1000 - i).collect();
        fs::write(&path, dump(&chain)).unwrap();
        assert!(matches!(
            tree.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::TooDeep { limit: 64 }))
        ));

        fs::write(&path, dump(&[10, -1])).unwrap();
        assert!(matches!(
            tree.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::UnexpectedEof))
        ));

        assert_eq!(
            tree.iter().copied().collect::<Vec<_>>(),
            [7],
            "Failed loads should leave the tree untouched."
        );
    }
}
