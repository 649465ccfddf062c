//! Doubly linked list strategy
//!
//! No random access: the insertion point is found by a linear scan and both
//! mutations split the list at the target position and splice it back.

use std::collections::LinkedList;

use super::{index_out_of_range, SequenceContainer};

impl SequenceContainer for LinkedList<i32> {
    const LABEL: &'static str = "LinkedList";

    fn new() -> Self { LinkedList::new() }

    fn insert_sorted(&mut self, value: i32) {
        let pos = self.iter().position(|&x| x >= value).unwrap_or(LinkedList::len(self));
        let mut tail = self.split_off(pos);
        self.push_back(value);
        self.append(&mut tail);
    }

    fn remove_at(&mut self, index: usize) -> i32 {
        let len = LinkedList::len(self);
        if index >= len {
            index_out_of_range(index, len);
        }
        let mut tail = self.split_off(index);
        let removed = match tail.pop_front() {
            Some(value) => value,
            None => index_out_of_range(index, len),
        };
        self.append(&mut tail);
        removed
    }

    fn len(&self) -> usize { LinkedList::len(self) }

    fn to_vec(&self) -> Vec<i32> { self.iter().copied().collect() }
}
