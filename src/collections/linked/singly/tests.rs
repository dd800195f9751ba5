#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop() {
    let mut list = SinglyLinkedList::new();
    assert_eq!(list.pop_front(), None, "Popping from an empty list should do nothing.");
    assert_eq!(list.pop_back(), None, "Popping from an empty list should do nothing.");

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.verify_links();
    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(1));
    assert_eq!(list.back(), Some(3));

    assert_eq!(list.pop_back(), Some(3));
    list.verify_links();
    assert_eq!(list.back(), Some(2), "Popping the tail should move it to the previous node.");

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_front(), Some(2));
    assert!(list.is_empty());
    assert_eq!(list.back(), None, "An emptied list shouldn't keep a tail.");

    list.push_back(4);
    list.verify_links();
    assert_eq!(list.front(), Some(4), "An emptied list should be reusable.");
}

#[test]
fn test_insert() {
    let mut list: SinglyLinkedList = [1, 3].into_iter().collect();

    list.insert_after(0, 2);
    list.insert_after(2, 5);
    list.insert_before(3, 4);
    list.insert_before(0, 0);
    list.verify_links();
    assert_eq!(list.to_string(), "[0 -> 1 -> 2 -> 3 -> 4 -> 5]");
    assert_eq!(list.back(), Some(5), "Inserting after the tail should update it.");

    list.insert_before(list.len(), 6);
    list.verify_links();
    assert_eq!(list.back(), Some(6), "Inserting before the length should append.");

    assert_eq!(
        list.try_insert_after(7, 0),
        Err(IndexOutOfBounds { index: 7, len: 7 }),
        "Inserting after a missing node should fail."
    );
    assert_eq!(list.try_insert_before(8, 0), Err(IndexOutOfBounds { index: 8, len: 7 }));
    assert_eq!(list.len(), 7, "Failed inserts shouldn't change the length.");

    let mut empty = SinglyLinkedList::new();
    assert!(empty.try_insert_after(0, 1).is_err());
    empty.insert_before(0, 1);
    assert_eq!(empty.front(), Some(1), "Inserting before 0 should work on an empty list.");
}

#[test]
fn test_remove() {
    let mut list: SinglyLinkedList = (0..6).collect();

    assert_eq!(list.remove(0), 0);
    assert_eq!(list.remove(4), 5);
    list.verify_links();
    assert_eq!(list.back(), Some(4), "Removing the tail should update it.");
    assert_eq!(list.remove(1), 2);
    assert_eq!(list.to_string(), "[1 -> 3 -> 4]");

    assert_eq!(list.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_panics!({ list.remove(3) });
    assert_panics!({ SinglyLinkedList::new().remove(0) });
}

#[test]
fn test_remove_value() {
    let mut list: SinglyLinkedList = [1, 2, 3, 2, 4].into_iter().collect();

    assert!(list.remove_value(2));
    assert_eq!(list.to_string(), "[1 -> 3 -> 2 -> 4]", "Only the first match should go.");
    assert!(!list.remove_value(7), "Removing a missing value should do nothing.");
    assert_eq!(list.len(), 4);

    assert!(list.remove_value(4));
    list.verify_links();
    assert_eq!(list.back(), Some(2));

    assert!(list.contains(3));
    assert!(!list.contains(4));
    assert_eq!(list.index_of(2), Some(2));
}

#[test]
fn test_get_and_index() {
    let mut list: SinglyLinkedList = (10..15).collect();
    assert_eq!(list.get(0), 10);
    assert_eq!(list[4], 14);
    list[2] = 100;
    assert_eq!(list.try_get(2), Ok(100));
    assert_eq!(list.try_get(5), Err(IndexOutOfBounds { index: 5, len: 5 }));
    assert_panics!({ list[5] });
}

#[test]
fn test_clone_and_eq() {
    let list: SinglyLinkedList = (0..4).collect();
    let mut copy = list.clone();
    assert_eq!(list, copy);

    copy.pop_back();
    assert_ne!(list, copy, "A clone should own separate nodes.");
    assert_eq!(list.len(), 4);
    assert_eq!(SinglyLinkedList::new().to_string(), "[]");
}

#[cfg(feature = "persist")]
mod persist {
    use std::fs;

    use super::*;
    use crate::persist::{CorruptData, Persist, PersistError};

    #[test]
    fn test_binary_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("singly.bin");

        let list: SinglyLinkedList = [5, -3, 8].into_iter().collect();
        list.save_binary(&path).unwrap();
        assert_eq!(fs::read(&path).unwrap().len(), 8 + 3 * 4);

        let mut loaded: SinglyLinkedList = (0..10).collect();
        loaded.load_binary(&path).unwrap();
        loaded.verify_links();
        assert_eq!(loaded, list, "Loading should replace the existing nodes.");
        assert_eq!(loaded.back(), Some(8));
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("singly.json");

        let list: SinglyLinkedList = [1, 2, 3].into_iter().collect();
        list.save_json(&path).unwrap();

        let mut loaded = SinglyLinkedList::new();
        loaded.load_json(&path).unwrap();
        assert_eq!(loaded, list);

        fs::write(&path, "{\"data\": [1, 2,").unwrap();
        assert!(
            matches!(loaded.load_json(&path), Err(PersistError::Corrupt(CorruptData::UnexpectedEof))),
            "A truncated document should be reported as corrupt."
        );
        fs::write(&path, "{\"values\": []}").unwrap();
        assert!(matches!(loaded.load_json(&path), Err(PersistError::Corrupt(CorruptData::Json(_)))));
        assert_eq!(loaded, list, "A failed load should leave the list untouched.");
    }

    #[test]
    fn test_oversized_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("singly.bin");
        fs::write(&path, u64::MAX.to_le_bytes()).unwrap();

        let mut list = SinglyLinkedList::new();
        assert!(matches!(
            list.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::OversizedCount { .. }))
        ));
    }
}
