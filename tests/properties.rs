use std::collections::BTreeSet;

use classic_ds::ordered_tree::OrderedTree;
use quickcheck::{Arbitrary, Gen};

/// The kinds of things to do to a tree in a randomized run.
#[derive(Copy, Clone, Debug)]
enum Op {
    Insert(i8),
    Remove(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            _ => Op::Remove(i8::arbitrary(g)),
        }
    }
}

fn tree_of(xs: &[i8]) -> OrderedTree<i8> {
    let mut tree = OrderedTree::new();
    for &x in xs {
        tree.insert(x);
    }
    tree
}

fn ceil_log2(m: usize) -> isize {
    m.next_power_of_two().trailing_zeros() as isize
}

quickcheck::quickcheck! {
    // Apply the same operations to a tree and a BTreeSet and ensure they
    // agree on every observable afterwards.
    fn agrees_with_btreeset(ops: Vec<Op>) -> bool {
        let mut tree = OrderedTree::new();
        let mut model = BTreeSet::new();

        for op in ops {
            match op {
                Op::Insert(x) => {
                    if tree.insert(x) != model.insert(x) {
                        return false;
                    }
                }
                Op::Remove(x) => {
                    if tree.remove(&x) != model.remove(&x) {
                        return false;
                    }
                }
            }
        }

        tree.len() == model.len()
            && model.iter().all(|x| tree.contains(x))
            && tree.iter().eq(model.iter())
    }

    fn iterates_in_sorted_order(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let sorted: BTreeSet<i8> = xs.into_iter().collect();
        tree.iter().eq(sorted.iter())
    }

    fn descending_is_ascending_reversed(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let mut ascending: Vec<&i8> = tree.iter().collect();
        ascending.reverse();
        tree.iter_rev().eq(ascending)
    }

    fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let distinct: BTreeSet<i8> = xs.into_iter().collect();
        tree.len() == distinct.len() && tree.is_empty() == distinct.is_empty()
    }

    fn inserting_twice_is_inserting_once(xs: Vec<i8>) -> bool {
        let once = tree_of(&xs);
        let mut twice = tree_of(&xs);
        for &x in &xs {
            twice.insert(x);
        }
        twice.len() == once.len() && twice.iter().eq(once.iter())
    }

    fn removing_absent_changes_nothing(xs: Vec<i8>, absent: Vec<i8>) -> bool {
        let present: BTreeSet<i8> = xs.iter().copied().collect();
        let mut tree = tree_of(&xs);
        for x in absent {
            if !present.contains(&x) && tree.remove(&x) {
                return false;
            }
        }
        tree.len() == present.len() && tree.iter().eq(present.iter())
    }

    // A binary tree with n nodes is at least ceil(log2(n + 1)) - 1 tall.
    fn height_respects_the_log_bound(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let n = tree.len();
        tree.height() >= ceil_log2(n + 1) - 1
    }
}
