use std::collections::BTreeSet;

use palindrome_count::{
    count_palindromic_bytes, count_palindromic_substrings, CodePoints, PalindromeCounter, Span,
};
use proptest::prelude::*;

fn is_palindrome<T: PartialEq>(sub: &[T]) -> bool {
    sub.iter().eq(sub.iter().rev())
}

fn full_palindrome_spans<T: PartialEq>(s: &[T]) -> BTreeSet<Span> {
    let n = s.len();
    let mut spans = BTreeSet::new();
    for i in 0..n {
        for j in i..n {
            if is_palindrome(&s[i..=j]) {
                spans.insert(Span { start: i, end: j + 1 });
            }
        }
    }
    spans
}

proptest! {
    #[test]
    fn binary_alphabet_matches_full_scan(a in "[ab]{0,16}") {
        let chars: Vec<char> = a.chars().collect();
        prop_assert_eq!(count_palindromic_substrings(&a), full_palindrome_spans(chars.as_slice()).len());
    }

    #[test]
    fn dna_alphabet_matches_full_scan(a in "[ACGT]{0,24}") {
        let s = a.as_bytes();
        prop_assert_eq!(count_palindromic_bytes(s), full_palindrome_spans(s).len());
    }

    #[test]
    fn unicode_matches_full_scan_on_code_points(a in "[aé字🙂]{0,12}") {
        let chars: Vec<char> = a.chars().collect();
        prop_assert_eq!(count_palindromic_substrings(&a), full_palindrome_spans(chars.as_slice()).len());
    }

    #[test]
    fn spans_are_exactly_the_palindromes(a in "[abc]{0,14}") {
        let cp = CodePoints::new(&a);
        let counter = PalindromeCounter::new(&cp);
        let listed: Vec<Span> = counter.spans().collect();
        let unique: BTreeSet<Span> = listed.iter().copied().collect();
        prop_assert_eq!(listed.len(), unique.len());
        prop_assert_eq!(unique, full_palindrome_spans(cp.as_chars()));
    }

    #[test]
    fn integer_slices(v in proptest::collection::vec(0i32..3, 0..16)) {
        prop_assert_eq!(PalindromeCounter::new(v.as_slice()).count(), full_palindrome_spans(v.as_slice()).len());
    }
}
