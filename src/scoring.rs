use crate::board::Board;
use crate::config::Config;
use crate::error::Rejection;
use crate::grid::N;
use crate::lexicon::Lexicon;
use crate::moves::{Direction, Move};
use crate::tileset::TileSet;
use crate::{Error, Tile, Word};
use tracing::debug;

/// Points for the letters and the number of fresh tiles in a placed word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct WordPoints {
    points: u32,
    fresh: usize,
}

/// Scores moves and checks that they are legal.
///
/// Rejections are ordinary values: most placements tried by a move search are
/// rejected, and the board is never modified.
#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine<'a> {
    lexicon: &'a Lexicon,
    tileset: &'a TileSet,
    config: Config,
}

impl<'a> ScoringEngine<'a> {
    pub fn new(lexicon: &'a Lexicon, tileset: &'a TileSet, config: Config) -> ScoringEngine<'a> {
        ScoringEngine {
            lexicon,
            tileset,
            config,
        }
    }

    pub fn lexicon(&self) -> &'a Lexicon {
        self.lexicon
    }

    pub fn tileset(&self) -> &'a TileSet {
        self.tileset
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn bingo(&self, fresh: usize) -> u32 {
        if fresh == self.config.rack_size {
            self.config.bingo_bonus
        } else {
            0
        }
    }

    /// Sum the letter values of `word` at y, x. Only fresh tiles get a premium.
    fn word_points(
        &self,
        board: &Board,
        y: usize,
        x: usize,
        direction: Direction,
        word: &Word,
    ) -> Result<WordPoints, Rejection> {
        let mut letter_points = 0;
        let mut word_multiplier = 1;
        let mut fresh = 0;
        for (i, tile) in word.iter().enumerate() {
            let (y, x) = direction
                .step(y, x, i, N)
                .ok_or(Rejection::OutOfBounds)?;
            match board.tile_at(y, x) {
                Some(current) => {
                    if !current.same_letter(tile) {
                        return Err(Rejection::InvalidPlacement { y, x });
                    }
                    letter_points += self.tileset.points(current);
                }
                None => {
                    let premium = board.premium_at(y, x);
                    letter_points += self.tileset.points(*tile) * premium.letter_multiplier();
                    word_multiplier *= premium.word_multiplier();
                    fresh += 1;
                }
            }
        }
        Ok(WordPoints {
            points: letter_points * word_multiplier,
            fresh,
        })
    }

    /// Return the points for `word` at y, x in `direction`, without crossing words.
    ///
    /// Tiles already on the board count their own value. Fresh tiles get the premium
    /// of their square. Using all letters of a full rack adds the bingo bonus.
    /// ## Errors
    /// - `OutOfBounds` if the word does not fit on the board.
    /// - `InvalidPlacement` if a letter differs from the tile on the board.
    pub fn score_word(
        &self,
        board: &Board,
        y: usize,
        x: usize,
        direction: Direction,
        word: &Word,
    ) -> Result<u32, Rejection> {
        let WordPoints { points, fresh } = self.word_points(board, y, x, direction, word)?;
        Ok(points + self.bingo(fresh))
    }

    /// Score the crossing word through the fresh `tile` at y, x, if there is one.
    fn cross_points(
        &self,
        board: &Board,
        y: usize,
        x: usize,
        direction: Direction,
        tile: Tile,
    ) -> Result<u32, Rejection> {
        let cross = direction.cross();
        let (line, pos) = board.line(y, x, cross);
        let (start, end) = line.start_end(pos);
        if end - start < 2 {
            return Ok(0);
        }
        let word = line.word_with(start, end, pos, tile);
        if !self.config.allow_illegal && !self.lexicon.contains(&word) {
            return Err(Rejection::InvalidWord(word));
        }
        let (cy, cx) = match cross {
            Direction::Down => (start, x),
            Direction::Right => (y, start),
        };
        Ok(self.word_points(board, cy, cx, cross, &word)?.points)
    }

    /// Score a move on `board`, including all crossing words and the bingo bonus.
    /// The board is not modified.
    ///
    /// ## Errors
    /// The first [`Rejection`] found:
    /// - `OutOfBounds` if the word does not fit on the board,
    /// - `InvalidWord` if the word is not in the lexicon,
    /// - `WordContinues` if a tile on the board touches the start or the end of the word,
    /// - `InvalidPlacement` if a letter differs from the tile on the board,
    /// - `NoTilesPlaced` if all letters are already on the board,
    /// - `InvalidWord` if a crossing word is not in the lexicon,
    /// - `FloatingMove` if the word does not touch a tile and does not cover the start square.
    ///
    /// With [`Config::allow_illegal`] the lexicon and connection checks are skipped.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Config, Direction, Error, Lexicon, Move, ScoringEngine, TileSet};
    /// let lexicon = Lexicon::from_words(&["qi"])?;
    /// let tileset = TileSet::default();
    /// let engine = ScoringEngine::new(&lexicon, &tileset, Config::default());
    /// let mv = Move::new(7, 7, Direction::Right, "QI".parse()?);
    /// assert_eq!(engine.score_move(&mv, &Board::default()), Ok(22));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn score_move(&self, mv: &Move, board: &Board) -> Result<u32, Rejection> {
        let Move {
            y,
            x,
            direction,
            ref word,
        } = *mv;
        if word.is_empty() || direction.step(y, x, word.len() - 1, N).is_none() {
            return Err(Rejection::OutOfBounds);
        }
        if !self.config.allow_illegal && !self.lexicon.contains(word) {
            return Err(Rejection::InvalidWord(*word));
        }
        let before = direction.before(y, x);
        let after = direction.step(y, x, word.len(), N);
        if before.into_iter().chain(after).any(|(y, x)| board.is_occupied(y, x)) {
            return Err(Rejection::WordContinues);
        }

        let WordPoints { mut points, fresh } = self.word_points(board, y, x, direction, word)?;
        if fresh == 0 {
            return Err(Rejection::NoTilesPlaced);
        }

        let mut connected = false;
        for (i, &tile) in word.iter().enumerate() {
            let (y, x) = direction.step(y, x, i, N).ok_or(Rejection::OutOfBounds)?;
            if board.is_occupied(y, x) {
                continue;
            }
            connected = connected || board.is_start(y, x) || board.has_neighbour(y, x);
            points += self.cross_points(board, y, x, direction, tile)?;
        }
        if !connected && !self.config.allow_illegal {
            return Err(Rejection::FloatingMove);
        }
        Ok(points + self.bingo(fresh))
    }

    /// Score `mv`, and place it on the board if it is legal.
    /// Returns the score.
    /// ## Errors
    /// `Error::Rejected` if the move is not legal. The board is not modified.
    pub fn play(&self, board: &mut Board, mv: &Move) -> Result<u32, Error> {
        let score = self.score_move(mv, board)?;
        let used = board.place(&mv.word, mv.y, mv.x, mv.direction)?;
        debug!(%mv, score, used = %used, "move played");
        Ok(score)
    }
}
