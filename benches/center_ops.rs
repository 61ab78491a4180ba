use criterion::{black_box, criterion_group, criterion_main, Criterion};
use palindrome_count::centers::{centers, expand_around_center, Center};
use palindrome_count::{CodePoints, PalindromeCounter};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[char] = &['a', 'b', 'é', '字'];
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn bench_single_center(c: &mut Criterion) {
    let s = vec![b'a'; 8_192];
    let mid = s.len() / 2;
    c.bench_function("expand_odd_center_uniform_8k", |b| {
        b.iter(|| expand_around_center(black_box(s.as_slice()), Center::Odd(mid)))
    });
    c.bench_function("expand_even_center_uniform_8k", |b| {
        b.iter(|| expand_around_center(black_box(s.as_slice()), Center::Even(mid)))
    });
}

fn bench_decode_vs_scan(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5155AA55);
    let text = random_text(&mut rng, 20_000);
    c.bench_function("decode_code_points_20k", |b| {
        b.iter(|| CodePoints::new(black_box(&text)))
    });
    let cp = CodePoints::new(&text);
    c.bench_function("report_code_points_20k", |b| {
        b.iter(|| PalindromeCounter::new(black_box(&cp)).report())
    });
    c.bench_function("enumerate_centers_20k", |b| {
        b.iter(|| centers(black_box(20_000)).count())
    });
}

criterion_group!(benches, bench_single_center, bench_decode_vs_scan);
criterion_main!(benches);
