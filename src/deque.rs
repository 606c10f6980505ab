//! Two deque exercises: palindrome checking by comparing both ends, and
//! rotating a `VecDeque` by a signed amount.

use std::collections::VecDeque;

/// Case-insensitive palindrome check. Only letter case is normalized;
/// spaces and punctuation count as ordinary characters.
pub fn is_palindrome(text: &str) -> bool {
    let mut chars: VecDeque<char> = text.to_lowercase().chars().collect();

    // Compare the two ends until at most one character is left.
    while chars.len() > 1 {
        if chars.pop_front() != chars.pop_back() {
            return false;
        }
    }
    true
}

/// Rotates the deque to the right by `amount` (the tail wraps around to the
/// head). A negative amount rotates left. Amounts beyond the length wrap
/// modulo the length; rotating an empty deque does nothing.
pub fn rotate<T>(items: &mut VecDeque<T>, amount: isize) {
    if items.is_empty() {
        return;
    }

    let len = items.len() as isize;
    let amount = ((amount % len) + len) % len;
    for _ in 0..amount {
        if let Some(item) = items.pop_back() {
            items.push_front(item);
        }
    }
}
