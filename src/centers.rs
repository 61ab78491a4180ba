//! Center positions and the expansion step.
//!
//! Every palindrome has exactly one center: a symbol (odd length) or the gap
//! between two adjacent symbols (even length). Growing outward from each
//! center therefore visits every palindromic substring exactly once.

use crate::traits::SymbolSeq;

/// A palindrome center.
///
/// `Odd(i)` seeds the expansion at `(i, i)`; `Even(i)` seeds it at `(i, i + 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Center {
    Odd(usize),
    Even(usize),
}

impl Center {
    /// The `(left, right)` pair the expansion starts from.
    #[inline]
    pub fn seed(self) -> (usize, usize) {
        match self {
            Center::Odd(i) => (i, i),
            Center::Even(i) => (i, i.saturating_add(1)),
        }
    }

    #[inline]
    pub fn is_odd(self) -> bool {
        matches!(self, Center::Odd(_))
    }
}

/// Half-open range `[start, end)` of symbol indices covering one palindrome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start index.
    pub start: usize,
    /// Exclusive end index.
    pub end: usize,
}

impl Span {
    /// Length of the span in symbols.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Enumerate the `2n` centers of a sequence of length `n`.
///
/// For each `i in 0..n` this yields `Odd(i)` then `Even(i)`. The final
/// `Even(n - 1)` can never expand, but it is kept so the enumeration stays
/// uniform.
pub fn centers(n: usize) -> impl Iterator<Item = Center> {
    (0..n).flat_map(|i| [Center::Odd(i), Center::Even(i)])
}

/// Count palindromes centered at `center` by expanding outward while both
/// sides match.
///
/// Each successful step is one palindrome. Stops at the first mismatch or
/// when either side runs off the sequence.
pub fn expand_around_center<S>(seq: &S, center: Center) -> usize
where
    S: SymbolSeq + ?Sized,
{
    let n = seq.len();
    let (mut left, mut right) = center.seed();
    let mut count = 0;
    while right < n && seq.symbols_match(left, right) {
        count += 1;
        if left == 0 {
            break;
        }
        left -= 1;
        right += 1;
    }
    count
}

/// Iterator over the palindromic spans around a single center, shortest first.
#[derive(Debug)]
pub struct CenterSpans<'s, S: ?Sized> {
    seq: &'s S,
    left: usize,
    right: usize,
    done: bool,
}

impl<'s, S> CenterSpans<'s, S>
where
    S: SymbolSeq + ?Sized,
{
    pub fn new(seq: &'s S, center: Center) -> Self {
        let (left, right) = center.seed();
        Self {
            seq,
            left,
            right,
            done: false,
        }
    }
}

impl<'s, S> Iterator for CenterSpans<'s, S>
where
    S: SymbolSeq + ?Sized,
{
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if self.done
            || self.right >= self.seq.len()
            || !self.seq.symbols_match(self.left, self.right)
        {
            self.done = true;
            return None;
        }
        let span = Span {
            start: self.left,
            end: self.right + 1,
        };
        if self.left == 0 {
            self.done = true;
        } else {
            self.left -= 1;
            self.right += 1;
        }
        Some(span)
    }
}
