#![cfg(test)]

use super::*;

#[test]
fn test_fifo() {
    let mut queue = Queue::new();
    assert_eq!(queue.pop(), None, "Popping an empty queue should do nothing.");
    assert_eq!(queue.peek(), Err(EmptyStructure { structure: "queue" }));

    queue.push(1);
    queue.push(2);
    queue.pop();
    queue.push(3);
    assert_eq!(queue.peek(), Ok(2), "The oldest remaining value should be at the front.");
    assert_eq!(queue.to_string(), "[2 -> 3]");

    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));
    assert!(queue.is_empty());

    queue.push(4);
    assert_eq!(queue.peek(), Ok(4), "The rear should reset once the queue empties.");
    assert_eq!(queue.len(), 1);
}

#[test]
fn test_extend() {
    let mut queue: Queue = [1, 2].into_iter().collect();
    queue.extend([3, 4]);
    assert_eq!(queue.iter().copied().collect::<Vec<_>>(), [1, 2, 3, 4]);
}

#[cfg(feature = "persist")]
mod persist {
    use super::*;
    use crate::persist::Persist;

    #[test]
    fn test_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let queue: Queue = (10..15).collect();

        let bin = dir.path().join("queue.bin");
        queue.save_binary(&bin).unwrap();
        let mut loaded = Queue::new();
        loaded.load_binary(&bin).unwrap();
        assert_eq!(loaded, queue);
        assert_eq!(loaded.peek(), Ok(10));

        let json = dir.path().join("queue.json");
        queue.save_json(&json).unwrap();
        let mut loaded: Queue = [1].into_iter().collect();
        loaded.load_json(&json).unwrap();
        assert_eq!(loaded, queue, "Loading should replace the existing values.");
    }
}
