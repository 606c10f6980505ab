//! An unbalanced binary search tree over any `Ord` type.
//!
//! Nodes own their children through `Box`, so every structural change is
//! expressed by handing an owned subtree back to the parent. No rebalancing
//! is done; inserting sorted input degenerates into a linked list.

use std::cmp::Ordering;
use std::fmt;

pub struct OrderedTree<T: Ord> {
    root: Link<T>,
    len: usize,
}

#[derive(Debug)]
struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

type Link<T> = Option<Box<Node<T>>>;

/// Ascending in-order iterator. Holds the path of not-yet-visited nodes,
/// so advancing is lazy and stopping early never walks the whole tree.
/// The shared borrow of the tree keeps mutation out while it is alive.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

/// Descending counterpart of [`Iter`].
pub struct IterRev<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<T> Node<T> {
    fn new(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: None,
            right: None,
        })
    }
}

impl<T: Ord> OrderedTree<T> {
    pub fn new() -> Self {
        OrderedTree { root: None, len: 0 }
    }

    /// Inserts `value`, returning whether the tree changed. Inserting a
    /// value that is already present is a no-op.
    pub fn insert(&mut self, value: T) -> bool {
        let inserted = Self::insert_at(&mut self.root, value);
        if inserted {
            self.len += 1;
        }
        inserted
    }

    fn insert_at(link: &mut Link<T>, value: T) -> bool {
        match link {
            None => {
                *link = Some(Node::new(value));
                true
            }
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => Self::insert_at(&mut node.left, value),
                Ordering::Greater => Self::insert_at(&mut node.right, value),
                Ordering::Equal => false,
            },
        }
    }

    /// Removes `value`, returning whether the tree changed. Removing a
    /// value that is not present is a no-op.
    pub fn remove(&mut self, value: &T) -> bool {
        let before = self.len;
        self.root = Self::remove_at(self.root.take(), value, &mut self.len);
        self.len != before
    }

    // Each call returns the replacement for the subtree it was handed; the
    // caller relinks it. `len` drops by exactly one when the match is found:
    // a two-child node is spliced by moving the successor node up, so no
    // second node ever leaves the tree.
    fn remove_at(link: Link<T>, value: &T, len: &mut usize) -> Link<T> {
        let Some(mut node) = link else {
            return None;
        };
        match value.cmp(&node.value) {
            Ordering::Less => {
                node.left = Self::remove_at(node.left.take(), value, len);
                Some(node)
            }
            Ordering::Greater => {
                node.right = Self::remove_at(node.right.take(), value, len);
                Some(node)
            }
            Ordering::Equal => {
                *len -= 1;
                match (node.left.take(), node.right.take()) {
                    (None, right) => right,
                    (left, None) => left,
                    (left, Some(right)) => {
                        let (mut successor, rest) = Self::detach_min(right);
                        successor.left = left;
                        successor.right = rest;
                        Some(successor)
                    }
                }
            }
        }
    }

    // Splits the smallest node off a subtree, returning it along with the
    // remainder of the subtree.
    fn detach_min(mut node: Box<Node<T>>) -> (Box<Node<T>>, Link<T>) {
        match node.left.take() {
            None => {
                let rest = node.right.take();
                (node, rest)
            }
            Some(left) => {
                let (min, rest) = Self::detach_min(left);
                node.left = rest;
                (min, Some(node))
            }
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    /// Height of the whole tree: -1 when empty, 0 for a single node.
    pub fn height(&self) -> isize {
        Self::height_below(self.root.as_deref())
    }

    /// Height of the subtree rooted at the node holding `value`, or `None`
    /// if the value is not in the tree.
    pub fn subtree_height(&self, value: &T) -> Option<isize> {
        self.find(value).map(|node| Self::height_below(Some(node)))
    }

    fn height_below(node: Option<&Node<T>>) -> isize {
        match node {
            None => -1,
            Some(n) => {
                let left = Self::height_below(n.left.as_deref());
                let right = Self::height_below(n.right.as_deref());
                1 + left.max(right)
            }
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Visits all values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        let mut iter = Iter { stack: Vec::new() };
        iter.descend_left(self.root.as_deref());
        iter
    }

    /// Visits all values in descending order.
    pub fn iter_rev(&self) -> IterRev<'_, T> {
        let mut iter = IterRev { stack: Vec::new() };
        iter.descend_right(self.root.as_deref());
        iter
    }
}

impl<T: Ord> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Iter<'a, T> {
    fn descend_left(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_left(node.right.as_deref());
        Some(&node.value)
    }
}

impl<'a, T> IterRev<'a, T> {
    fn descend_right(&mut self, mut link: Option<&'a Node<T>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.right.as_deref();
        }
    }
}

impl<'a, T> Iterator for IterRev<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.descend_right(node.left.as_deref());
        Some(&node.value)
    }
}

impl<'a, T: Ord> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Debug + Ord> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_struct("OrderedTree")
            .field("len", &self.len)
            .field("root", &self.root)
            .finish()
    }
}
