//! Core trait definitions for sequences that can be scanned for palindromes.
//!
//! The counter never looks at symbol values directly. It only asks two
//! questions of its input:
//! - how many positions are there, and
//! - do the symbols at two positions compare equal.
//!
//! Implement [`SymbolSeq`] for anything that can answer both in O(1) and the
//! center expansion in [`crate::centers`] works on it unchanged.

/// A finite, random-access sequence whose positions compare by equality.
///
/// Semantics:
/// - Positions are `0..len()`.
/// - `symbols_match(i, j)` must be symmetric and reflexive for in-range
///   indices; callers never pass an index `>= len()`.
/// - The sequence must not change while a counter borrows it.
pub trait SymbolSeq {
    /// Number of symbols.
    fn len(&self) -> usize;

    /// Returns true if the sequence has no symbols.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Compare the symbols at `left` and `right`.
    fn symbols_match(&self, left: usize, right: usize) -> bool;
}

impl<T: PartialEq> SymbolSeq for [T] {
    #[inline]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn symbols_match(&self, left: usize, right: usize) -> bool {
        self[left] == self[right]
    }
}

impl<T: PartialEq> SymbolSeq for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn symbols_match(&self, left: usize, right: usize) -> bool {
        self[left] == self[right]
    }
}

impl<S: SymbolSeq + ?Sized> SymbolSeq for &S {
    #[inline]
    fn len(&self) -> usize {
        (**self).len()
    }

    #[inline]
    fn symbols_match(&self, left: usize, right: usize) -> bool {
        (**self).symbols_match(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::SymbolSeq;

    #[test]
    fn slice_reports_len_and_equality() {
        let seq: &[u8] = b"abca";
        assert_eq!(SymbolSeq::len(seq), 4);
        assert!(seq.symbols_match(0, 3));
        assert!(!seq.symbols_match(0, 1));
        assert!(seq.symbols_match(2, 2));
    }

    #[test]
    fn empty_vec_is_empty() {
        let seq: Vec<i32> = Vec::new();
        assert!(SymbolSeq::is_empty(&seq));
    }

    #[test]
    fn reference_forwards_to_target() {
        let owned = vec!['x', 'y', 'x'];
        let borrowed = &owned;
        assert_eq!(SymbolSeq::len(&borrowed), 3);
        assert!(borrowed.symbols_match(0, 2));
    }
}
