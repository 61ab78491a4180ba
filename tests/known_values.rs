use palindrome_count::centers::centers;
use palindrome_count::utils::{center_count, max_palindromic_substrings};
use palindrome_count::{count_palindromic_substrings, CodePoints, PalindromeCounter, Span};

#[test]
fn reference_table() {
    assert_eq!(count_palindromic_substrings(""), 0);
    assert_eq!(count_palindromic_substrings("a"), 1);
    assert_eq!(count_palindromic_substrings("aa"), 3);
    assert_eq!(count_palindromic_substrings("abc"), 3);
    assert_eq!(count_palindromic_substrings("aaa"), 6);
    assert_eq!(count_palindromic_substrings("abbcbc"), 9);
}

#[test]
fn identical_symbols_hit_the_triangular_number() {
    for n in 0..200 {
        let s = "z".repeat(n);
        assert_eq!(
            count_palindromic_substrings(&s),
            max_palindromic_substrings(n),
            "n={n}"
        );
    }
}

#[test]
fn two_centers_per_symbol() {
    for n in [0usize, 1, 2, 7, 64] {
        assert_eq!(centers(n).count(), center_count(n), "n={n}");
    }
}

#[test]
fn distinct_symbols_count_only_singles() {
    assert_eq!(count_palindromic_substrings("abcdefghij"), 10);
}

#[test]
fn racecar() {
    // 7 singles + cec + aceca + racecar
    assert_eq!(count_palindromic_substrings("racecar"), 10);
    let cp = CodePoints::new("racecar");
    let report = PalindromeCounter::new(&cp).report();
    assert_eq!(report.even, 0);
    assert_eq!(report.longest, Some(Span { start: 0, end: 7 }));
}

#[test]
fn multibyte_characters_are_single_symbols() {
    assert_eq!(count_palindromic_substrings("字"), 1);
    assert_eq!(count_palindromic_substrings("🙂a🙂"), 4);
    assert_eq!(count_palindromic_substrings("日本日"), 4);
}

#[test]
fn combining_marks_are_not_normalized() {
    // "é" precomposed vs "e" + U+0301
    assert_eq!(count_palindromic_substrings("\u{e9}x\u{e9}"), 4);
    assert_eq!(count_palindromic_substrings("\u{e9}xe\u{301}"), 4);
}
