use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use scrabble_solver::{Action, Board, Config, Lexicon, Player, Rack, SearchAgent, TileBag, TileSet};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Let two agents play a game against each other.
fn run(seed: u64) -> Result<()> {
    let lexicon = Lexicon::from_file("wordlists/words.txt")?;
    let tileset = TileSet::default();
    let config = Config::default();
    let agent = SearchAgent::new(&lexicon, &tileset, config);
    let mut players = vec![Player::agent("alpha", agent), Player::agent("beta", agent)];
    let mut rng = StdRng::seed_from_u64(seed);
    let mut bag = TileBag::from(&tileset);
    let mut racks = vec![Rack::new(config.rack_size); players.len()];
    for rack in racks.iter_mut() {
        rack.refill(&mut bag, &mut rng);
    }
    let mut board = Board::default();
    let mut scores = vec![0i32; players.len()];
    let mut passes = 0;
    let mut turn = 0;
    while passes < 2 * players.len() {
        let i = turn % players.len();
        turn += 1;
        let rack = racks[i];
        let action = players[i].next_action(&board, &rack);
        info!(player = players[i].name(), %rack, %action, "turn {}", turn);
        match action {
            Action::Play(mv) => {
                let used = board.try_place(&mv.word, mv.y, mv.x, mv.direction)?;
                scores[i] += agent.engine().play(&mut board, &mv)? as i32;
                racks[i].remove(&used)?;
                racks[i].refill(&mut bag, &mut rng);
                passes = 0;
                if racks[i].is_empty() {
                    break;
                }
            }
            Action::Exchange(letters) => {
                racks[i].exchange(&letters, &mut bag, &mut rng)?;
                passes = 0;
            }
            Action::Pass => passes += 1,
            Action::Resign => break,
        }
    }
    println!("{}", board);
    // letters left on a rack count against the player
    for (i, player) in players.iter().enumerate() {
        let penalty = racks[i].penalty(&tileset) as i32;
        println!(
            "{:<8} {:>4} (rack {}, -{})",
            player.name(),
            scores[i] - penalty,
            racks[i],
            penalty
        );
    }
    println!("{} tiles left in the bag", bag.len());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2021);
    if let Err(err) = run(seed) {
        eprintln!("Error: {:?}", err);
    }
}
