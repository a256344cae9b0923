use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Lexicon, Tile};

const WORDFILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/words.txt");

fn bench_load(c: &mut Criterion) {
    let text = std::fs::read_to_string(WORDFILE).unwrap();
    c.bench_function("lexicon.load", |b| b.iter(|| Lexicon::load(&text).unwrap()));
}

fn bench_enumerate(c: &mut Criterion) {
    let lexicon = Lexicon::from_file(WORDFILE).unwrap();
    let letters = "APPLES?".parse().unwrap();
    c.bench_function("lexicon.enumerate", |b| {
        b.iter(|| lexicon.enumerate(&letters, &[], 1, 15))
    });
    let forced = [(Tile::regular(19), 2)];
    c.bench_function("lexicon.enumerate_forced", |b| {
        b.iter(|| lexicon.enumerate(&letters, &forced, 3, 15))
    });
}

criterion_group!(benches, bench_load, bench_enumerate);
criterion_main!(benches);
