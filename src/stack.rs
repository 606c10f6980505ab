//! A LIFO stack over `Vec`, with two warm-up exercises built on it.

pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Reverses a string by pushing every character and popping them back off.
pub fn reversed(text: &str) -> String {
    let mut stack = Stack::new();
    for c in text.chars() {
        stack.push(c);
    }

    let mut result = String::with_capacity(text.len());
    while let Some(c) = stack.pop() {
        result.push(c);
    }
    result
}

/// Checks that every `)`, `]` and `}` in `text` closes the most recently
/// opened bracket of the matching kind. Non-bracket characters are ignored.
pub fn brackets_balanced(text: &str) -> bool {
    let mut stack = Stack::new();
    for c in text.chars() {
        match c {
            '(' | '[' | '{' => stack.push(c),
            ')' | ']' | '}' => {
                let expected = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(expected) {
                    return false;
                }
            }
            _ => {}
        }
    }

    // Leftover openers mean something was never closed.
    stack.is_empty()
}
