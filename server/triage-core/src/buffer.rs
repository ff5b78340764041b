//! Bounded FIFO history of raw log lines.

use std::collections::VecDeque;

/// Fixed-capacity rolling buffer. Appending past capacity evicts the oldest
/// entry; insertion order is preserved among retained entries.
#[derive(Debug, Clone)]
pub struct RollingBuffer {
  entries: VecDeque<String>,
  capacity: usize,
}

impl RollingBuffer {
  pub fn new(capacity: usize) -> Self {
    Self {
      entries: VecDeque::with_capacity(capacity),
      capacity,
    }
  }

  /// Append an entry, evicting the oldest one if the buffer is full.
  pub fn push(&mut self, entry: String) {
    if self.entries.len() == self.capacity {
      self.entries.pop_front();
    }
    self.entries.push_back(entry);
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Retained entries, oldest first.
  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(String::as_str)
  }

  /// Snapshot of the retained entries, oldest first.
  pub fn to_vec(&self) -> Vec<String> {
    self.entries.iter().cloned().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keeps_insertion_order_below_capacity() {
    let mut buffer = RollingBuffer::new(3);
    buffer.push("a".into());
    buffer.push("b".into());
    assert_eq!(buffer.to_vec(), vec!["a", "b"]);
  }

  #[test]
  fn eleven_pushes_into_capacity_ten_keep_the_last_ten() {
    let mut buffer = RollingBuffer::new(10);
    for i in 0..11 {
      buffer.push(format!("line-{}", i));
    }
    assert_eq!(buffer.len(), 10);
    let entries = buffer.to_vec();
    assert_eq!(entries.first().map(String::as_str), Some("line-1"));
    assert_eq!(entries.last().map(String::as_str), Some("line-10"));
    assert!(!entries.iter().any(|e| e == "line-0"));
  }

  #[test]
  fn size_never_exceeds_capacity() {
    let mut buffer = RollingBuffer::new(4);
    for i in 0..100 {
      buffer.push(i.to_string());
      assert!(buffer.len() <= 4);
    }
  }
}
