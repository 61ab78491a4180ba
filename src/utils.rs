//! Assorted closed-form helpers.

/// Number of contiguous substrings of a sequence of length `n`, which is
/// also the palindrome count when all `n` symbols are identical.
///
/// Saturates at `usize::MAX` instead of overflowing.
#[inline]
pub fn max_palindromic_substrings(n: usize) -> usize {
    if n % 2 == 0 {
        (n / 2).saturating_mul(n.saturating_add(1))
    } else {
        n.saturating_mul(n / 2 + 1)
    }
}

/// Number of centers visited for a sequence of length `n`.
#[inline]
pub fn center_count(n: usize) -> usize {
    n.saturating_mul(2)
}
