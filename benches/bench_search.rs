use criterion::{criterion_group, criterion_main, Criterion};
use scrabble_solver::{Board, Config, Lexicon, SearchAgent, TileSet};

const WORDFILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/words.txt");
const TEST_STATE: &[&str] = &[
    "               ",
    "    DOG        ",
    "      ORANGE   ",
    "       A    A  ",
    "       P    T  ",
    "       E  QI   ",
    "           M   ",
    "      QUINTET  ",
    "        SAP    ",
    "         PLEA  ",
    "         A  R  ",
    "    BROWN   N  ",
    "     U   FOX   ",
    "     STONE     ",
    "               ",
];

fn bench_best_moves(c: &mut Criterion, name: &str, letters: &str) {
    let lexicon = Lexicon::from_file(WORDFILE).unwrap();
    let tileset = TileSet::default();
    let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
    let board = Board::default()
        .with_state_from_strings(TEST_STATE)
        .unwrap();
    let letters = letters.parse().unwrap();
    c.bench_function(&format!("agent.{}", name), |b| b.iter(|| agent.best_moves(&letters, &board)));
}

fn criterion_benchmark(c: &mut Criterion) {
    bench_best_moves(c, "1", "ABEL");
    bench_best_moves(c, "empty", "QUIZ");
}

fn slow_benchmarks(c: &mut Criterion) {
    bench_best_moves(c, "2", "MDJENJ?");
    bench_best_moves(c, "3", "POLKAS?");
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(60);
    targets = criterion_benchmark
}

criterion_group! {
    name = slow;
    config = Criterion::default()
        .sample_size(10);
    targets = slow_benchmarks
}

criterion_main!(benches, slow);
