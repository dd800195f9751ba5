#![cfg(test)]

use super::*;

#[test]
fn test_lifo() {
    let mut stack = Stack::new();
    assert_eq!(stack.pop(), None, "Popping an empty stack should do nothing.");
    assert_eq!(stack.peek(), Err(EmptyStructure { structure: "stack" }));

    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Ok(3), "Peeking should return the most recent push.");
    assert_eq!(stack.len(), 3, "Peeking shouldn't remove anything.");

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    stack.push(4);
    assert_eq!(stack.iter().copied().collect::<Vec<_>>(), [4, 1]);
    assert_eq!(stack.to_string(), "[4 -> 1]");

    assert_eq!(stack.pop(), Some(4));
    assert_eq!(stack.pop(), Some(1));
    assert!(stack.is_empty());
    assert!(stack.peek().is_err(), "Peeking an emptied stack should fail again.");
}

#[test]
fn test_from_iter() {
    let stack: Stack = (1..=3).collect();
    assert_eq!(stack.peek(), Ok(3), "The last item collected should be on top.");
    assert_eq!(stack.clone(), stack);
}

#[cfg(feature = "persist")]
mod persist {
    use std::fs;

    use super::*;
    use crate::persist::Persist;

    #[test]
    fn test_round_trips_keep_order() {
        let dir = tempfile::tempdir().unwrap();
        let stack: Stack = (1..=4).collect();

        let bin = dir.path().join("stack.bin");
        stack.save_binary(&bin).unwrap();
        assert_eq!(&fs::read(&bin).unwrap()[8..12], &4_i32.to_le_bytes(), "The top goes first.");

        let mut loaded = Stack::new();
        loaded.push(100);
        loaded.load_binary(&bin).unwrap();
        assert_eq!(loaded, stack, "Loading should keep the top of the stack on top.");
        assert_eq!(loaded.peek(), Ok(4));

        let json = dir.path().join("stack.json");
        stack.save_json(&json).unwrap();
        let mut loaded = Stack::new();
        loaded.load_json(&json).unwrap();
        assert_eq!(loaded.iter().copied().collect::<Vec<_>>(), [4, 3, 2, 1]);
    }
}
