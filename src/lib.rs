//! Palindromic substring counting by center expansion.
//!
//! This crate counts every contiguous substring that reads the same forwards
//! and backwards, including single symbols and the whole input.
//!
//! ## Core idea
//! 1. Every palindrome has exactly one center: a symbol (odd length) or the
//!    gap between two symbols (even length).
//! 2. From each of the `2n` centers, grow outward while both sides match.
//! 3. Every successful step is one palindrome; the sum is the answer.
//!
//! This is O(n²) time in the worst case (all symbols equal) and O(1) space
//! beyond the input.
//!
//! ## Quick start
//! ```
//! use palindrome_count::{count_palindromic_substrings, PalindromeCounter};
//!
//! assert_eq!(count_palindromic_substrings("abbcbc"), 9);
//!
//! let report = PalindromeCounter::new(&b"aaa"[..]).report();
//! assert_eq!(report.total, 6);
//! ```
//!
//! Strings are compared by code point with no normalization. Any
//! [`SymbolSeq`] can be counted, including plain slices of `PartialEq`
//! values.

pub mod centers;
pub mod counter;
pub mod input;
pub mod selfcheck;
pub mod traits;
pub mod utils;

pub use crate::centers::{Center, Span};
pub use crate::counter::{
    count_palindromic_bytes, count_palindromic_substrings, CountReport, PalindromeCounter,
};
pub use crate::input::CodePoints;
pub use crate::selfcheck::{run_self_check, SelfCheckError, SelfCheckOutcome};
pub use crate::traits::SymbolSeq;
