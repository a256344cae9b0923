/*!
 * Property tests for the lexicon search, the board and the scoring engine.
 *
 * - Every enumerated word is in the lexicon, fits the length limits, uses only
 *   letters from the rack and keeps the forced tiles at their offsets.
 * - A placed word reads back from the board in both orientations.
 * - Scoring a move never modifies the board and gives the same result twice.
 */
use proptest::prelude::*;
use scrabble_solver::{
    Board, Config, Direction, Letter, Letters, Lexicon, Move, SearchAgent, Tile, TileSet, Word, N,
};

const WORDFILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/wordlists/words.txt");

const DOG_STATE: &[&str] = &[
    "               ",
    "    DOG        ",
    "       L       ",
    "       A       ",
    "       PEA     ",
    "               ",
    "               ",
    "      QUIT     ",
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
    "               ",
];

fn lexicon() -> Lexicon {
    Lexicon::from_file(WORDFILE).expect("word list")
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Down), Just(Direction::Right)]
}

fn used_letters(word: &Word) -> Letters {
    word.iter().map(|&tile| Letter::from_tile(tile)).collect()
}

proptest! {
    #[test]
    fn enumerated_words_use_rack_letters(
        rack in "[A-Z?]{1,7}",
        min_len in 1usize..4,
        extra in 0usize..6,
    ) {
        let lexicon = lexicon();
        let letters: Letters = rack.parse().unwrap();
        let max_len = min_len + extra;
        for word in lexicon.enumerate(&letters, &[], min_len, max_len) {
            prop_assert!(lexicon.contains(&word));
            prop_assert!(word.len() >= min_len && word.len() <= max_len);
            prop_assert!(letters.without(&used_letters(&word)).is_some(), "{} from {}", word, rack);
        }
    }

    #[test]
    fn enumerated_words_keep_forced_tiles(
        rack in "[A-Z]{2,7}",
        forced in "[A-Z]",
        offset in 0usize..4,
    ) {
        let lexicon = lexicon();
        let letters: Letters = rack.parse().unwrap();
        let tile: Word = forced.parse().unwrap();
        let forced = [(tile[0], offset)];
        for word in lexicon.enumerate(&letters, &forced, offset + 1, N) {
            prop_assert!(word.len() > offset);
            prop_assert_eq!(word[offset], tile[0]);
            let fresh = word.remove(offset);
            prop_assert!(letters.without(&used_letters(&fresh)).is_some());
        }
    }

    #[test]
    fn placed_word_reads_back(
        text in "[A-Za-z]{1,8}",
        y in 0..N,
        x in 0..N,
        direction in direction(),
    ) {
        let word: Word = text.parse().unwrap();
        let mut board = Board::default();
        let (dy, dx) = direction.delta();
        let fits = y + dy * (word.len() - 1) < N && x + dx * (word.len() - 1) < N;
        match board.place(&word, y, x, direction) {
            Ok(used) => {
                prop_assert!(fits);
                prop_assert_eq!(used, used_letters(&word));
                for (i, &tile) in word.iter().enumerate() {
                    let (ty, tx) = (y + i * dy, x + i * dx);
                    prop_assert_eq!(board.tile_at(ty, tx), Some(tile));
                    prop_assert_eq!(board.horizontal()[ty][tx], board.vertical()[tx][ty]);
                }
                prop_assert_eq!(board.tiles().count(), word.len());
                // placing the same word again uses no letters
                prop_assert!(board.place(&word, y, x, direction).unwrap().is_empty());
            }
            Err(_) => {
                prop_assert!(!fits);
                prop_assert!(board.is_empty());
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn scoring_is_pure(
        rack in "[A-Z?]{1,7}",
        y in 0..N,
        x in 0..N,
        direction in direction(),
    ) {
        let lexicon = lexicon();
        let tileset = TileSet::default();
        let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
        let engine = agent.engine();
        let board = Board::default().with_state_from_strings(DOG_STATE).unwrap();
        let letters: Letters = rack.parse().unwrap();
        let word: Word = letters
            .iter()
            .map(|letter| Tile::from_letter(*letter).unwrap_or(Tile::wildcard(5)))
            .collect();

        let mv = Move::new(y, x, direction, word);
        let first = engine.score_move(&mv, &board);
        prop_assert_eq!(engine.score_move(&mv, &board), first);
        prop_assert_eq!(&Board::default().with_state_from_strings(DOG_STATE).unwrap(), &board);

        let moves = agent.best_moves(&letters, &board);
        prop_assert!(moves.windows(2).all(|w| w[0].1 >= w[1].1));
        for (mv, score) in moves.iter().take(20) {
            prop_assert_eq!(engine.score_move(mv, &board), Ok(*score));
            prop_assert!(letters.without(&board.try_place(&mv.word, mv.y, mv.x, mv.direction).unwrap()).is_some());
        }
    }
}
