//! Concrete input adapters.
//!
//! Strings are compared by Unicode scalar value: `"é"` written as one
//! precomposed code point and `"é"` written as `e` + combining accent are
//! different sequences here. No normalization happens.

use crate::traits::SymbolSeq;

/// A string decoded into its code points.
///
/// Indices into a `CodePoints` are code-point indices, not byte offsets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodePoints {
    chars: Vec<char>,
}

impl CodePoints {
    pub fn new(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Collect the code points in `[start, end)` back into a `String`.
    pub fn slice_to_string(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }
}

impl From<&str> for CodePoints {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl SymbolSeq for CodePoints {
    #[inline]
    fn len(&self) -> usize {
        self.chars.len()
    }

    #[inline]
    fn symbols_match(&self, left: usize, right: usize) -> bool {
        self.chars[left] == self.chars[right]
    }
}
