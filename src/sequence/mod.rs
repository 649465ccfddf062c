//! Sequence containers under test
//!
//! Every strategy supports the same two mutations: insert a value at its
//! sorted position and remove the element at a given index. The benchmark
//! applies them in bulk; timing happens outside this module.

pub mod deque;
pub mod list;
pub mod vector;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A growable sequence of `i32` kept in ascending order by its callers.
pub trait SequenceContainer {
    /// Name printed next to timing results
    const LABEL: &'static str;

    fn new() -> Self;

    /// Insert `value` before the first element that is not less than it.
    fn insert_sorted(&mut self, value: i32);

    /// Remove and return the element at `index`, shifting later elements down.
    ///
    /// Panics if `index >= len()`.
    fn remove_at(&mut self, index: usize) -> i32;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of the contents in order
    fn to_vec(&self) -> Vec<i32>;
}

/// Apply `insert_sorted` for every value, in order.
pub fn insert_all<C: SequenceContainer>(container: &mut C, values: &[i32]) {
    for &value in values {
        container.insert_sorted(value);
    }
}

/// Apply `remove_at` for every index, in order.
pub fn remove_all<C: SequenceContainer>(container: &mut C, indexes: &[usize]) {
    for &index in indexes {
        container.remove_at(index);
    }
}

#[cold]
#[track_caller]
pub(crate) fn index_out_of_range(index: usize, len: usize) -> ! {
    panic!("removal index {} out of range for length {}", index, len)
}

/// Container strategy selectable at runtime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ContainerKind {
    /// Contiguous growable array (`Vec`)
    #[default]
    Vec,
    /// Ring buffer (`VecDeque`)
    VecDeque,
    /// Doubly linked list (`LinkedList`)
    LinkedList,
}

impl ContainerKind {
    pub const ALL: [ContainerKind; 3] = [ContainerKind::Vec, ContainerKind::VecDeque, ContainerKind::LinkedList];

    pub fn label(self) -> &'static str {
        match self {
            ContainerKind::Vec => <Vec<i32> as SequenceContainer>::LABEL,
            ContainerKind::VecDeque => <std::collections::VecDeque<i32> as SequenceContainer>::LABEL,
            ContainerKind::LinkedList => <std::collections::LinkedList<i32> as SequenceContainer>::LABEL,
        }
    }
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workload::{ItemCount, Workload, WorkloadGenerator};
    use std::collections::{LinkedList, VecDeque};

    fn check_literal_walkthrough<C: SequenceContainer>() {
        let mut c = C::new();
        let expected_inserts: [&[i32]; 5] = [&[2], &[2, 5], &[1, 2, 5], &[1, 2, 4, 5], &[1, 2, 3, 4, 5]];
        for (&value, expected) in [2, 5, 1, 4, 3].iter().zip(expected_inserts) {
            c.insert_sorted(value);
            assert_eq!(c.to_vec(), expected, "{} after inserting {}", C::LABEL, value);
        }

        let removals: [(usize, i32, &[i32]); 5] = [
            (2, 3, &[1, 2, 4, 5]),
            (0, 1, &[2, 4, 5]),
            (1, 4, &[2, 5]),
            (1, 5, &[2]),
            (0, 2, &[]),
        ];
        for (index, value, expected) in removals {
            assert_eq!(c.remove_at(index), value, "{} removing index {}", C::LABEL, index);
            assert_eq!(c.to_vec(), expected);
        }
        assert!(c.is_empty());
    }

    fn check_order_independence<C: SequenceContainer>() {
        let mut gen = WorkloadGenerator::from_seed(17);
        for n in [1, 2, 7, 100, 513] {
            let mut c = C::new();
            insert_all(&mut c, &gen.generate_values(n));
            assert_eq!(c.len(), n);
            assert_eq!(c.to_vec(), (1..=n as i32).collect::<Vec<_>>());
        }
    }

    fn check_full_removal<C: SequenceContainer>() {
        let mut gen = WorkloadGenerator::from_seed(23);
        for n in [1, 3, 50, 400] {
            // Contents do not have to be sorted or distinct for removal.
            let mut c = C::new();
            for _ in 0..n {
                c.insert_sorted(9);
            }
            remove_all(&mut c, &gen.generate_removal_indexes(n));
            assert!(c.is_empty(), "{} not empty after {} removals", C::LABEL, n);
        }
    }

    fn check_single_item<C: SequenceContainer>() {
        let workload = WorkloadGenerator::from_seed(8).generate(ItemCount::new(1).unwrap());
        let mut c = C::new();
        assert!(c.is_empty());
        insert_all(&mut c, workload.values());
        assert_eq!(c.to_vec(), vec![1]);
        remove_all(&mut c, workload.removal_indexes());
        assert!(c.is_empty());
    }

    #[test]
    fn test_literal_walkthrough() {
        check_literal_walkthrough::<Vec<i32>>();
        check_literal_walkthrough::<VecDeque<i32>>();
        check_literal_walkthrough::<LinkedList<i32>>();
    }

    #[test]
    fn test_insertion_order_independence() {
        check_order_independence::<Vec<i32>>();
        check_order_independence::<VecDeque<i32>>();
        check_order_independence::<LinkedList<i32>>();
    }

    #[test]
    fn test_full_removal_empties_container() {
        check_full_removal::<Vec<i32>>();
        check_full_removal::<VecDeque<i32>>();
        check_full_removal::<LinkedList<i32>>();
    }

    #[test]
    fn test_single_item_cycle() {
        check_single_item::<Vec<i32>>();
        check_single_item::<VecDeque<i32>>();
        check_single_item::<LinkedList<i32>>();
    }

    #[test]
    fn test_strategies_agree_step_by_step() {
        let workload = WorkloadGenerator::from_seed(31).generate(ItemCount::new(300).unwrap());
        let mut v: Vec<i32> = SequenceContainer::new();
        let mut d: VecDeque<i32> = SequenceContainer::new();
        let mut l: LinkedList<i32> = SequenceContainer::new();

        for &value in workload.values() {
            v.insert_sorted(value);
            d.insert_sorted(value);
            l.insert_sorted(value);
            assert_eq!(SequenceContainer::to_vec(&d), SequenceContainer::to_vec(&v));
            assert_eq!(SequenceContainer::to_vec(&l), SequenceContainer::to_vec(&v));
        }
        for &index in workload.removal_indexes() {
            let removed = v.remove_at(index);
            assert_eq!(d.remove_at(index), removed);
            assert_eq!(l.remove_at(index), removed);
        }
        assert!(v.is_empty() && d.is_empty() && l.is_empty());
    }

    #[test]
    fn test_duplicates_insert_at_lower_bound() {
        let mut v: Vec<i32> = SequenceContainer::new();
        for value in [3, 1, 3, 2, 3] {
            v.insert_sorted(value);
        }
        assert_eq!(v, vec![1, 2, 3, 3, 3]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_remove_past_end_panics() {
        let workload = Workload::new(vec![1], vec![0]);
        let mut v: Vec<i32> = SequenceContainer::new();
        insert_all(&mut v, workload.values());
        v.remove_at(1);
    }

    #[test]
    fn test_container_kind_labels() {
        assert_eq!(ContainerKind::Vec.label(), "Vec");
        assert_eq!(ContainerKind::VecDeque.to_string(), "VecDeque");
        assert_eq!(ContainerKind::LinkedList.label(), "LinkedList");
        assert_eq!(ContainerKind::default(), ContainerKind::Vec);
    }

    #[test]
    fn test_container_kind_value_names() {
        assert_eq!(ContainerKind::from_str("vec", false), Ok(ContainerKind::Vec));
        assert_eq!(ContainerKind::from_str("vec-deque", false), Ok(ContainerKind::VecDeque));
        assert_eq!(ContainerKind::from_str("linked-list", false), Ok(ContainerKind::LinkedList));
        assert!(ContainerKind::from_str("btree", false).is_err());
    }
}
