use rand::{rngs::StdRng, SeedableRng};
use scrabble_solver::{
    Action, Board, Config, Direction, Error, Lexicon, Move, Player, Rack, Rejection, SearchAgent,
    TileBag, TileSet, N,
};

type Result<T> = std::result::Result<T, Error>;

const WORDFILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/words.txt");

fn lexicon() -> Result<Lexicon> {
    Lexicon::from_file(WORDFILE)
}

fn board_with(rows: &[(usize, &str)]) -> Result<Board> {
    let mut state = vec!["               "; N];
    for &(y, row) in rows {
        state[y] = row;
    }
    Board::default().with_state_from_strings(&state)
}

#[test]
fn test_wordfile() -> Result<()> {
    let lexicon = lexicon()?;
    assert!(lexicon.word_count() > 500);
    for word in &["qi", "APPLES", "quintets", "chromo"] {
        assert!(lexicon.is_word(word), "{}", word);
    }
    for word in &["DN", "OC", "GH", "ZXVY", ""] {
        assert!(!lexicon.is_word(word), "{}", word);
    }
    assert!(matches!(
        Lexicon::from_file("no-such-file.txt"),
        Err(Error::ReadError { .. })
    ));
    Ok(())
}

#[test]
fn test_first_move_through_center() -> Result<()> {
    let lexicon = lexicon()?;
    let tileset = TileSet::default();
    let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
    let board = Board::default();
    let mv = Move::new(7, 7, Direction::Right, "QI".parse()?);
    assert_eq!(agent.engine().score_move(&mv, &board), Ok((10 + 1) * 2));

    let moves = agent.best_moves(&"QI".parse()?, &board);
    assert!(moves.iter().all(|(_, score)| *score == 22));
    // QI down from (6, 7) and (7, 7), and right from (7, 6) and (7, 7)
    assert_eq!(moves.len(), 4);
    Ok(())
}

#[test]
fn test_cross_word() -> Result<()> {
    let lexicon = lexicon()?;
    let tileset = TileSet::default();
    let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
    let board = board_with(&[(1, "    DOG        ")])?;
    let slap = Move::new(1, 7, Direction::Down, "SLAP".parse()?);
    // DOGS = 6, SLAP with the A on a double letter square = 7
    assert_eq!(agent.engine().score_move(&slap, &board), Ok(13));

    let moves = agent.best_moves(&"SLAPO".parse()?, &board);
    assert!(moves.iter().any(|(mv, score)| *mv == slap && *score == 13));
    assert_eq!(agent.best_move(&"SLAPO".parse()?, &board), moves.first().cloned());

    // every move that touches DOG forms valid words
    let engine = agent.engine();
    for (mv, score) in moves {
        let mut played = board.clone();
        assert_eq!(engine.play(&mut played, &mv)?, score);
    }
    Ok(())
}

#[test]
fn test_enumerate_rack() -> Result<()> {
    let lexicon = lexicon()?;
    let words = lexicon.enumerate(&"APPLESZ".parse()?, &[], 1, N);
    let words: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    assert!(words.contains(&String::from("APPLES")));
    assert!(words.contains(&String::from("APE")));
    assert!(words.iter().all(|w| w.len() <= 7));
    assert!(words.iter().all(|w| lexicon.is_word(w)));
    Ok(())
}

#[test]
fn test_bingo_once() -> Result<()> {
    let lexicon = lexicon()?;
    let tileset = TileSet::default();
    let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
    let engine = agent.engine();

    let mv = Move::new(7, 7, Direction::Right, "QUINTET".parse()?);
    // Q on the start square, T on a double letter square
    assert_eq!(engine.score_move(&mv, &Board::default()), Ok(2 * 17 + 50));

    // with the crossing words QI and IS
    let board = board_with(&[(8, "       I S     ")])?;
    assert_eq!(engine.score_move(&mv, &board), Ok(34 + 22 + 2 + 50));

    let config = Config::default().with_bingo_bonus(35);
    let agent = SearchAgent::new(&lexicon, &tileset, config);
    assert_eq!(agent.engine().score_move(&mv, &board), Ok(34 + 22 + 2 + 35));
    Ok(())
}

#[test]
fn test_floating_move() -> Result<()> {
    let lexicon = lexicon()?;
    let tileset = TileSet::default();
    let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
    let board = board_with(&[(1, "    DOG        ")])?;
    let mv = Move::new(10, 10, Direction::Right, "DOG".parse()?);
    assert_eq!(agent.engine().score_move(&mv, &board), Err(Rejection::FloatingMove));

    let mut played = board.clone();
    let err = agent.engine().play(&mut played, &mv).unwrap_err();
    assert!(matches!(err, Error::Rejected(Rejection::FloatingMove)));
    assert_eq!(played, board);
    Ok(())
}

#[test]
fn test_selfplay() -> Result<()> {
    let lexicon = lexicon()?;
    let tileset = TileSet::default();
    let config = Config::default();
    let mut players = vec![
        Player::agent("first", SearchAgent::new(&lexicon, &tileset, config)),
        Player::agent("second", SearchAgent::new(&lexicon, &tileset, config)),
    ];
    let agent = SearchAgent::new(&lexicon, &tileset, config);
    let engine = agent.engine();
    let mut rng = StdRng::seed_from_u64(2021);
    let mut bag = TileBag::from(&tileset);
    let mut racks = vec![Rack::new(config.rack_size); players.len()];
    for rack in racks.iter_mut() {
        rack.refill(&mut bag, &mut rng);
    }
    let mut board = Board::default();
    let mut scores = vec![0; players.len()];
    let mut passes = 0;
    let mut turn = 0;
    while passes < 2 * players.len() && racks.iter().all(|rack| !rack.is_empty()) {
        let i = turn % players.len();
        match players[i].next_action(&board, &racks[i]) {
            Action::Play(mv) => {
                let used = board.try_place(&mv.word, mv.y, mv.x, mv.direction)?;
                scores[i] += engine.play(&mut board, &mv)?;
                racks[i].remove(&used)?;
                racks[i].refill(&mut bag, &mut rng);
                passes = 0;
            }
            _ => passes += 1,
        }
        let on_racks: usize = racks.iter().map(|rack| rack.len()).sum();
        assert_eq!(board.tiles().count() + bag.len() + on_racks, 100);
        turn += 1;
    }
    assert!(turn > 2);
    assert!(!board.is_empty());
    assert!(board.is_occupied(7, 7));
    assert!(scores.iter().sum::<u32>() > 0);
    Ok(())
}
