use anyhow::Result;
use scrabble_solver::{Board, Config, Direction, Lexicon, Move, SearchAgent, TileSet};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

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

fn run() -> Result<()> {
    let t0 = Instant::now();
    let lexicon = Lexicon::from_file("wordlists/words.txt")?;
    let tileset = TileSet::default();
    let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
    let mut board = Board::default().with_state_from_strings(TEST_STATE)?;
    let dt = t0.elapsed();
    println!("Create board with {} took {:?}", lexicon, dt);

    for &letters in &["SPACERS", "QUIZ?ED"] {
        let t0 = Instant::now();
        let results = agent.best_moves(&letters.parse()?, &board);
        let dt = t0.elapsed();
        println!(
            "Best moves with {}: {} results in {:?}",
            letters,
            results.len(),
            dt
        );
        // the best 20 results
        for (mv, score) in results.into_iter().take(20) {
            println!("{:<30} {:>4}  {}", mv.to_string(), score, tileset.describe(&mv.word));
        }
    }
    // Play a word
    let mv = Move::new(0, 4, Direction::Right, "DOTE".parse()?);
    match agent.engine().score_move(&mv, &board) {
        Ok(_) => println!("{} scores {}", mv, agent.engine().play(&mut board, &mv)?),
        Err(rejection) => println!("{} is rejected: {}", mv, rejection),
    }
    println!("{}", board);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(err) = run() {
        eprintln!("Error: {:?}", err);
    }
}
