use crate::board::Board;
use crate::config::Config;
use crate::grid::N;
use crate::lexicon::Lexicon;
use crate::moves::{Direction, Move};
use crate::scoring::ScoringEngine;
use crate::tileset::TileSet;
use crate::{Letters, Tile};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

/// A move with its score.
pub type Score = (Move, u32);

/// Where a word that starts at an anchor square can go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    /// The shortest word that touches a tile on the board or the start square.
    pub min_len: usize,
    /// The longest word that fits on the board with the letters on the rack.
    pub max_len: usize,
    /// Tiles on the board that the word has to use, with their offset from the anchor.
    pub forced: Vec<(Tile, usize)>,
}

/// An anchor square and direction, with the constraint for words starting there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub y: usize,
    pub x: usize,
    pub direction: Direction,
    pub constraint: Constraint,
}

/// Finds the moves with the highest score for a rack on a board.
#[derive(Debug, Clone, Copy)]
pub struct SearchAgent<'a> {
    engine: ScoringEngine<'a>,
}

impl<'a> SearchAgent<'a> {
    pub fn new(lexicon: &'a Lexicon, tileset: &'a TileSet, config: Config) -> SearchAgent<'a> {
        SearchAgent {
            engine: ScoringEngine::new(lexicon, tileset, config),
        }
    }

    /// Return the scoring engine used to score moves.
    pub fn engine(&self) -> &ScoringEngine<'a> {
        &self.engine
    }

    /// Return the constraint for words starting at y, x in `direction`, given
    /// `rack_len` letters to play, or `None` if no word can start there.
    ///
    /// A word can not start directly after a tile. Every empty square uses a
    /// letter from the rack. The word must reach a tile on the board, a square
    /// next to a tile, or the start square.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Config, Direction, Lexicon, SearchAgent, TileSet};
    /// # let lexicon = Lexicon::default();
    /// # let tileset = TileSet::default();
    /// let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
    /// let board = Board::default();
    /// let constraint = agent.constraint(&board, 7, 3, Direction::Right, 7).unwrap();
    /// assert_eq!((constraint.min_len, constraint.max_len), (5, 7));
    /// assert!(agent.constraint(&board, 7, 0, Direction::Right, 3).is_none());
    /// ```
    pub fn constraint(
        &self,
        board: &Board,
        y: usize,
        x: usize,
        direction: Direction,
        rack_len: usize,
    ) -> Option<Constraint> {
        if y >= N || x >= N {
            return None;
        }
        if let Some((py, px)) = direction.before(y, x) {
            if board.is_occupied(py, px) {
                return None;
            }
        }
        let mut budget = rack_len;
        let mut min_len = None;
        let mut forced = Vec::new();
        let mut walked = 0;
        while let Some((cy, cx)) = direction.step(y, x, walked, N) {
            match board.tile_at(cy, cx) {
                Some(tile) => {
                    forced.push((tile, walked));
                    min_len = min_len.or(Some(walked + 1));
                }
                None => {
                    if budget == 0 {
                        break;
                    }
                    budget -= 1;
                    if min_len.is_none() && (board.is_start(cy, cx) || board.has_neighbour(cy, cx)) {
                        min_len = Some(walked + 1);
                    }
                }
            }
            walked += 1;
        }
        min_len.map(|min_len| Constraint {
            min_len,
            max_len: walked,
            forced,
        })
    }

    /// Return all anchors for `rack_len` letters, row by row, `Down` before `Right`.
    pub fn anchors(&self, board: &Board, rack_len: usize) -> Vec<Anchor> {
        let mut anchors = Vec::new();
        for y in 0..N {
            for x in 0..N {
                for &direction in &[Direction::Down, Direction::Right] {
                    if let Some(constraint) = self.constraint(board, y, x, direction, rack_len) {
                        anchors.push(Anchor {
                            y,
                            x,
                            direction,
                            constraint,
                        });
                    }
                }
            }
        }
        anchors
    }

    fn moves_at(&self, anchor: &Anchor, letters: &Letters, board: &Board) -> Vec<Score> {
        let Anchor {
            y,
            x,
            direction,
            ref constraint,
        } = *anchor;
        let words = self.engine.lexicon().enumerate(
            letters,
            &constraint.forced,
            constraint.min_len,
            constraint.max_len,
        );
        words
            .into_iter()
            .filter_map(|word| {
                let mv = Move::new(y, x, direction, word);
                match self.engine.score_move(&mv, board) {
                    Ok(score) if score > 0 => Some((mv, score)),
                    Ok(_) => None,
                    Err(rejection) => {
                        trace!(%mv, %rejection, "rejected");
                        None
                    }
                }
            })
            .collect()
    }

    /// Return every legal move for `letters` on `board` with its score, highest score first.
    ///
    /// Moves with the same score keep the order of their anchors (row by row,
    /// `Down` before `Right`), then the order of the words.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Config, Error, Lexicon, SearchAgent, TileSet};
    /// let lexicon = Lexicon::from_words(&["the", "quick", "brown", "fox"])?;
    /// let tileset = TileSet::default();
    /// let agent = SearchAgent::new(&lexicon, &tileset, Config::default());
    /// let moves = agent.best_moves(&"BEFNROWX".parse()?, &Board::default());
    /// // "brown" and "fox" in both directions, at every position that covers the start square
    /// assert_eq!(moves.len(), 16);
    /// assert_eq!(moves[0].0.word.to_string(), "BROWN");
    /// assert_eq!(moves[0].1, 26);
    /// # Ok::<(), Error>(())
    /// ```
    #[instrument(skip(self, board), fields(rack = %letters))]
    pub fn best_moves(&self, letters: &Letters, board: &Board) -> Vec<Score> {
        let anchors = self.anchors(board, letters.len());

        #[cfg(feature = "rayon")]
        let moves: Vec<Vec<Score>> = anchors
            .par_iter()
            .map(|anchor| self.moves_at(anchor, letters, board))
            .collect();
        #[cfg(not(feature = "rayon"))]
        let moves: Vec<Vec<Score>> = anchors
            .iter()
            .map(|anchor| self.moves_at(anchor, letters, board))
            .collect();

        let mut moves: Vec<Score> = moves.into_iter().flatten().collect();
        moves.sort_by(|a, b| b.1.cmp(&a.1));
        debug!(anchors = anchors.len(), moves = moves.len(), "search done");
        moves
    }

    /// Return the move with the highest score, or `None` if there is no legal move.
    pub fn best_move(&self, letters: &Letters, board: &Board) -> Option<Score> {
        self.best_moves(letters, board).into_iter().next()
    }
}
