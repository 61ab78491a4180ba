use palindrome_count::{count_palindromic_bytes, PalindromeCounter};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, alphabet: &[u8], len: usize) -> Vec<u8> {
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..alphabet.len());
            alphabet[idx]
        })
        .collect()
}

fn full_count(s: &[u8]) -> usize {
    let n = s.len();
    let mut count = 0;
    for i in 0..n {
        for j in i..n {
            let sub = &s[i..=j];
            if sub.iter().eq(sub.iter().rev()) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn seeded_random_texts_match_full_scan() {
    let mut rng = StdRng::seed_from_u64(0x9A11_D0AE);
    for &alphabet in &[&b"ab"[..], b"abc", b"ACGT"] {
        for len in [0usize, 1, 2, 3, 17, 64, 150] {
            let s = random_text(&mut rng, alphabet, len);
            assert_eq!(
                count_palindromic_bytes(&s),
                full_count(&s),
                "alphabet={:?} len={len}",
                String::from_utf8_lossy(alphabet)
            );
        }
    }
}

#[test]
fn mirrored_text_counts_equal_halves() {
    let mut rng = StdRng::seed_from_u64(7);
    let half = random_text(&mut rng, b"xyz", 40);
    let mut mirrored = half.clone();
    mirrored.extend(half.iter().rev());
    let reversed: Vec<u8> = mirrored.iter().rev().copied().collect();
    assert_eq!(mirrored, reversed);
    let report = PalindromeCounter::new(mirrored.as_slice()).report();
    assert_eq!(report.longest.map(|s| s.len()), Some(80));
    assert_eq!(report.total, full_count(&mirrored));
}
