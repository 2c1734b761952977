//! # Scanner Module
//!
//! The character source the codec reads from.
//!
//! The codec only needs sequential reads with one character of lookahead, so
//! that is all [`CharSource`] asks for. [`StrScanner`] implements it over a
//! borrowed `&str` and keeps a byte offset so errors and callers can see where
//! reading stopped.
//!
//! ```text
//!   "00034000020706",  "York",  ...
//!   ^                ^
//!   offset 0         offset 16 after the first quoted field
//! ```

/// Sequential character input with one character of lookahead.
pub trait CharSource {
    /// Returns the next character without consuming it.
    fn peek(&mut self) -> Option<char>;

    /// Consumes and returns the next character.
    fn next_char(&mut self) -> Option<char>;

    /// Byte offset of the next unread character.
    fn offset(&self) -> usize;

    /// Consumes whitespace up to the next non-whitespace character.
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.next_char();
        }
    }
}

/// A [`CharSource`] over a string slice.
///
/// ## Example
/// ```rust
/// use grocery_core::scanner::{CharSource, StrScanner};
///
/// let mut scanner = StrScanner::new("   ,rest");
/// scanner.skip_whitespace();
/// assert_eq!(scanner.next_char(), Some(','));
/// assert_eq!(scanner.remaining(), "rest");
/// ```
#[derive(Debug, Clone)]
pub struct StrScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> StrScanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The unread tail of the input.
    pub fn remaining(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// True when every character has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }
}

impl CharSource for StrScanner<'_> {
    fn peek(&mut self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.remaining().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn offset(&self) -> usize {
        self.pos
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
