//! Independent bracket matcher shared by the integration tests, so every
//! suite rescans generated output against the same reference rules.

#![allow(dead_code)]

/// Result of rescanning an emitted string with standard matching rules.
pub struct Scan {
    /// A closer did not match the most recent unmatched opener.
    pub mismatch: bool,
    /// Openers left unmatched at the end.
    pub open_at_end: usize,
    /// Deepest nesting reached anywhere in the string.
    pub max_depth: usize,
}

pub fn scan(s: &str) -> Scan {
    let mut stack = Vec::new();
    let mut mismatch = false;
    let mut max_depth = 0;
    for c in s.chars() {
        match c {
            '(' | '[' | '{' => {
                stack.push(c);
                max_depth = max_depth.max(stack.len());
            }
            ')' | ']' | '}' => {
                let opener = match c {
                    ')' => '(',
                    ']' => '[',
                    _ => '{',
                };
                if stack.pop() != Some(opener) {
                    mismatch = true;
                }
            }
            _ => {}
        }
    }
    Scan {
        mismatch,
        open_at_end: stack.len(),
        max_depth,
    }
}

pub fn is_balanced(s: &str) -> bool {
    let scan = scan(s);
    !scan.mismatch && scan.open_at_end == 0
}
