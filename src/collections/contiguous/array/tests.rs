#![cfg(test)]

use super::*;
use crate::util::panic::assert_panics;

#[test]
fn test_growth() {
    let mut arr = DynamicArray::new();
    assert_eq!(arr.cap(), 2, "A new DynamicArray should start with the minimum capacity.");

    arr.push(10);
    arr.push(20);
    assert_eq!(arr.cap(), 2, "Filling the buffer exactly shouldn't grow it.");

    arr.push(30);
    assert_eq!(arr.cap(), 4, "Pushing into a full buffer should double the capacity.");

    for i in 0..100 {
        arr.push(i);
    }
    assert_eq!(arr.len(), 103);
    assert_eq!(arr.cap(), 128, "Capacity should only ever double.");
    assert_eq!(arr.get(102), 99);

    while arr.pop().is_some() {}
    assert_eq!(arr.cap(), 128, "Capacity should never shrink.");

    let mut arr = DynamicArray::with_cap(0);
    arr.push(1);
    assert_eq!(arr.cap(), 2, "Growing from zero should use the minimum capacity.");
}

#[test]
fn test_insert_and_remove() {
    let mut arr = DynamicArray::new();
    arr.push(10);
    arr.push(30);

    arr.insert(1, 20);
    arr.insert(0, 5);
    arr.insert(arr.len(), 100);
    assert_eq!(&*arr, &[5, 10, 20, 30, 100], "Inserts should shift later elements right.");

    assert_eq!(arr.remove(1), 10);
    assert_eq!(arr.remove(3), 100);
    assert_eq!(&*arr, &[5, 20, 30], "Removals should close the gap they leave.");

    assert_eq!(
        arr.try_insert(4, 0),
        Err(IndexOutOfBounds { index: 4, len: 3 }),
        "Inserting past the end should fail."
    );
    assert_eq!(arr.try_remove(3), Err(IndexOutOfBounds { index: 3, len: 3 }));
    assert_eq!(&*arr, &[5, 20, 30], "Failed operations shouldn't modify the DynamicArray.");
}

#[test]
fn test_relative_order_preserved() {
    let mut arr: DynamicArray = (0..20).collect();
    let mut expected: Vec<i32> = (0..20).collect();

    for (index, value) in [(0, -1), (7, -2), (22, -3), (11, -4)] {
        arr.insert(index, value);
        expected.insert(index, value);
    }
    for index in [0, 5, 20, 3] {
        assert_eq!(arr.remove(index), expected.remove(index));
    }

    assert_eq!(arr.len(), expected.len(), "Length accounting should match the model.");
    assert_eq!(&*arr, expected.as_slice(), "Untouched elements should keep their order.");
}

#[test]
fn test_get_and_replace() {
    let mut arr = DynamicArray::new();
    assert!(arr.try_get(0).is_err(), "Getting from an empty DynamicArray should fail.");

    arr.extend([10, 20, 30]);
    assert_eq!(arr.try_get(2), Ok(30));
    assert_eq!(arr.replace(1, 25), 20);
    assert_eq!(arr.get(1), 25);
    assert_eq!(arr.try_replace(5, 100), Err(IndexOutOfBounds { index: 5, len: 3 }));
    assert!(arr.contains(25));
    assert!(!arr.contains(20));

    assert_panics!({ arr.get(3) });
    assert_panics!({ DynamicArray::new().remove(0) });
    assert_panics!({ DynamicArray::new().insert(1, 0) });
}

#[test]
fn test_equality_and_formatting() {
    let mut a = DynamicArray::with_cap(16);
    a.extend([1, 2, 3]);
    let b: DynamicArray = [1, 2, 3].into_iter().collect();

    assert_eq!(a, b, "Equality should ignore capacity.");
    assert_eq!(a.to_string(), "[1, 2, 3]");
    assert_eq!(DynamicArray::new().to_string(), "[]");
}

#[cfg(feature = "persist")]
mod persist {
    use std::fs;

    use super::*;
    use crate::persist::{CorruptData, Persist, PersistError};

    #[test]
    fn test_binary_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("array.bin");

        let arr: DynamicArray = (0..10).map(|i| i * 10).collect();
        arr.save_binary(&path).unwrap();

        let bytes = fs::read(&path).unwrap();
        assert_eq!(bytes.len(), 8 + 10 * 4, "Binary form should be a u64 and ten i32s.");
        assert_eq!(&bytes[..8], &10_u64.to_le_bytes());
        assert_eq!(&bytes[12..16], &10_i32.to_le_bytes());

        let mut loaded = DynamicArray::new();
        loaded.extend([7, 7, 7]);
        loaded.load_binary(&path).unwrap();
        assert_eq!(loaded, arr, "Loading should replace all existing content.");
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("array.json");

        let arr: DynamicArray = [3, -1, 4].into_iter().collect();
        arr.save_json(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\n  \"data\": [\n    3,\n    -1,\n    4\n  ]\n}\n",
            "JSON should be pretty printed with two space indentation."
        );

        let mut loaded = DynamicArray::new();
        loaded.load_json(&path).unwrap();
        assert_eq!(loaded, arr);
    }

    #[test]
    fn test_load_failures() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("array.bin");

        let mut arr: DynamicArray = [1, 2].into_iter().collect();
        assert!(
            matches!(arr.load_binary(dir.path().join("missing.bin")), Err(PersistError::IO(_))),
            "A missing file should be an I/O failure."
        );

        let mut bytes = 3_u64.to_le_bytes().to_vec();
        bytes.extend(1_i32.to_le_bytes());
        fs::write(&path, &bytes).unwrap();
        assert!(
            matches!(arr.load_binary(&path), Err(PersistError::Corrupt(CorruptData::UnexpectedEof))),
            "A truncated file should be reported as corrupt."
        );
        assert_eq!(&*arr, &[1, 2], "A failed load should leave the DynamicArray untouched.");

        fs::write(&path, 1_000_001_u64.to_le_bytes()).unwrap();
        assert!(matches!(
            arr.load_binary(&path),
            Err(PersistError::Corrupt(CorruptData::OversizedCount { count: 1_000_001, .. }))
        ));
    }
}
