//! Palindromic substring counter.
//!
//! The counter visits every center of the input once (see [`crate::centers`])
//! and sums the number of successful expansion steps. It is completely
//! generic over implementations of [`SymbolSeq`].

use crate::centers::{centers, expand_around_center, Center, CenterSpans, Span};
use crate::input::CodePoints;
use crate::traits::SymbolSeq;

/// Count the palindromic substrings of `s`, comparing code points.
///
/// ```
/// use palindrome_count::count_palindromic_substrings;
///
/// assert_eq!(count_palindromic_substrings("abbcbc"), 9);
/// assert_eq!(count_palindromic_substrings(""), 0);
/// ```
pub fn count_palindromic_substrings(s: &str) -> usize {
    let code_points = CodePoints::new(s);
    PalindromeCounter::new(&code_points).count()
}

/// Count the palindromic substrings of a byte string, comparing bytes.
///
/// For ASCII input this agrees with [`count_palindromic_substrings`]; for
/// multi-byte UTF-8 it does not.
pub fn count_palindromic_bytes(bytes: &[u8]) -> usize {
    PalindromeCounter::new(bytes).count()
}

/// Result of a single full pass with bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountReport {
    /// Total number of palindromic substrings.
    pub total: usize,
    /// Palindromes of odd length (single-symbol centers).
    pub odd: usize,
    /// Palindromes of even length (between-symbol centers).
    pub even: usize,
    /// Leftmost longest palindromic span, `None` for empty input.
    pub longest: Option<Span>,
}

/// Expand-around-center counter for one input `S`.
///
/// Typical usage:
/// ```
/// use palindrome_count::PalindromeCounter;
///
/// let counter = PalindromeCounter::new(&b"abba"[..]);
/// assert_eq!(counter.count(), 6);
///
/// let report = counter.report();
/// assert_eq!((report.odd, report.even), (4, 2));
/// assert_eq!(report.longest.map(|s| s.len()), Some(4));
/// ```
#[derive(Debug)]
pub struct PalindromeCounter<'s, S: ?Sized> {
    seq: &'s S,
}

impl<'s, S> Clone for PalindromeCounter<'s, S>
where
    S: ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<'s, S> Copy for PalindromeCounter<'s, S> where S: ?Sized {}

impl<'s, S> PalindromeCounter<'s, S>
where
    S: SymbolSeq + ?Sized,
{
    pub fn new(seq: &'s S) -> Self {
        Self { seq }
    }

    /// Expose the borrowed input.
    pub fn input(&self) -> &'s S {
        self.seq
    }

    /// Total number of palindromic substrings.
    ///
    /// O(n²) time in the worst case (all symbols equal), O(1) extra space.
    pub fn count(&self) -> usize {
        let n = self.seq.len();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("count_palindromes", len = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut total = 0usize;
        for center in centers(n) {
            total += expand_around_center(self.seq, center);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(total, "counted palindromic substrings");
        total
    }

    /// Same pass as [`count`](Self::count), also splitting the total by
    /// parity and remembering the leftmost longest palindrome.
    pub fn report(&self) -> CountReport {
        let n = self.seq.len();
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("report_palindromes", len = n);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut odd = 0usize;
        let mut even = 0usize;
        let mut longest: Option<Span> = None;

        for center in centers(n) {
            let radius = expand_around_center(self.seq, center);
            if radius == 0 {
                continue;
            }
            if center.is_odd() {
                odd += radius;
            } else {
                even += radius;
            }
            let widest = widest_span(center, radius);
            if longest.map_or(true, |best| widest.len() > best.len()) {
                longest = Some(widest);
            }
        }

        let report = CountReport {
            total: odd + even,
            odd,
            even,
            longest,
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            total = report.total,
            odd = report.odd,
            even = report.even,
            "built palindrome report"
        );
        report
    }

    /// Every palindromic span, center by center, shortest first per center.
    ///
    /// Yields exactly [`count`](Self::count) items.
    pub fn spans(&self) -> impl Iterator<Item = Span> + 's {
        let seq = self.seq;
        centers(seq.len()).flat_map(move |center| CenterSpans::new(seq, center))
    }
}

/// The outermost span reached from `center` after `radius` successful steps.
///
/// `radius` must be at least 1.
fn widest_span(center: Center, radius: usize) -> Span {
    let (left, right) = center.seed();
    Span {
        start: left + 1 - radius,
        end: right + radius,
    }
}
