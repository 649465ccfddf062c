//! Ring buffer strategy

use std::collections::VecDeque;

use super::{index_out_of_range, SequenceContainer};

impl SequenceContainer for VecDeque<i32> {
    const LABEL: &'static str = "VecDeque";

    fn new() -> Self { VecDeque::new() }

    // VecDeque::insert/remove shift whichever side of the gap is shorter.
    #[inline]
    fn insert_sorted(&mut self, value: i32) {
        let pos = self.partition_point(|&x| x < value);
        self.insert(pos, value);
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> i32 {
        match self.remove(index) {
            Some(value) => value,
            None => index_out_of_range(index, self.len()),
        }
    }

    fn len(&self) -> usize { VecDeque::len(self) }

    fn to_vec(&self) -> Vec<i32> { self.iter().copied().collect() }
}
