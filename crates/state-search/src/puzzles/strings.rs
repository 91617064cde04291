//! Word ladder over uppercase letters.
//!
//! One move shifts a single letter up or down the alphabet, wrapping between
//! 'A' and 'Z'. The goal is to turn the start word into the finish word.

use std::fmt;
use std::sync::Arc;

use crate::configuration::{Children, Configuration};
use crate::error::PuzzleError;

/// The current word plus the word to reach.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringsConfig {
    current: Vec<u8>,
    finish: Arc<[u8]>,
}

impl StringsConfig {
    pub fn new(start: &str, finish: &str) -> Result<Self, PuzzleError> {
        Ok(Self {
            current: letters(start)?,
            finish: letters(finish)?.into(),
        })
    }

    /// The word this configuration currently holds.
    pub fn current(&self) -> &str {
        // Only ASCII uppercase bytes are ever stored.
        std::str::from_utf8(&self.current).unwrap_or_default()
    }

    fn with_letter(&self, at: usize, letter: u8) -> Self {
        let mut current = self.current.clone();
        current[at] = letter;
        Self {
            current,
            finish: Arc::clone(&self.finish),
        }
    }
}

fn letters(word: &str) -> Result<Vec<u8>, PuzzleError> {
    if word.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(word.as_bytes().to_vec())
    } else {
        Err(PuzzleError::InvalidWord(word.to_string()))
    }
}

fn shift_down(letter: u8) -> u8 {
    if letter > b'A' {
        letter - 1
    } else {
        b'Z'
    }
}

fn shift_up(letter: u8) -> u8 {
    if letter < b'Z' {
        letter + 1
    } else {
        b'A'
    }
}

impl Configuration for StringsConfig {
    fn is_goal(&self) -> bool {
        *self.current == *self.finish
    }

    fn neighbors(&self) -> Children<Self> {
        let mut neighbors = Children::new();
        for (at, &letter) in self.current.iter().enumerate() {
            neighbors.push(self.with_letter(at, shift_down(letter)));
            neighbors.push(self.with_letter(at, shift_up(letter)));
        }
        neighbors
    }
}

impl fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current())
    }
}
