//! Classic data structures, implemented for learning purposes.
//!
//! The centerpiece is [`ordered_tree::OrderedTree`], an unbalanced binary
//! search tree. A binary search tree keeps, for every node, all values in
//! the left subtree below the node's value and all values in the right
//! subtree above it. That single invariant gives `O(height)` search and
//! makes in-order traversal produce the stored values in sorted order.
//! No rebalancing is performed, so the height can reach `O(n)` when values
//! arrive in sorted order.
//!
//! The remaining modules are small warm-up exercises: a Vec-backed LIFO
//! [`stack`] and a couple of deque-based puzzles in [`deque`].

pub mod deque;
pub mod ordered_tree;
pub mod stack;
