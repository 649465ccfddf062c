//! Contiguous array strategy

use super::{index_out_of_range, SequenceContainer};

impl SequenceContainer for Vec<i32> {
    const LABEL: &'static str = "Vec";

    fn new() -> Self { Vec::new() }

    #[inline]
    fn insert_sorted(&mut self, value: i32) {
        let pos = self.partition_point(|&x| x < value);
        self.insert(pos, value);
    }

    #[inline]
    fn remove_at(&mut self, index: usize) -> i32 {
        if index >= self.len() {
            index_out_of_range(index, self.len());
        }
        self.remove(index)
    }

    fn len(&self) -> usize { Vec::len(self) }

    fn to_vec(&self) -> Vec<i32> { self.clone() }
}
