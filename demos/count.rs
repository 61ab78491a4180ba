//! Example: counting and listing palindromic substrings.
//!
//! Run with:
//! `cargo run --example count`

use palindrome_count::{count_palindromic_substrings, CodePoints, PalindromeCounter};

fn main() {
    let input = "abbcbc";
    println!("{}", count_palindromic_substrings(input));

    let code_points = CodePoints::new(input);
    let counter = PalindromeCounter::new(&code_points);

    let report = counter.report();
    println!("odd-length: {}, even-length: {}", report.odd, report.even);
    if let Some(span) = report.longest {
        println!(
            "longest: {}",
            code_points.slice_to_string(span.start, span.end)
        );
    }

    // List every palindrome, grouped by center.
    for span in counter.spans() {
        println!(
            "  [{}, {}) {}",
            span.start,
            span.end,
            code_points.slice_to_string(span.start, span.end)
        );
    }
}
