use crate::grid::{Grid, Premium, N, START};
use crate::moves::Direction;
use crate::{Cell, Error, Letter, Letters, Row, Tile, Word};
use std::fmt;

/// The rows (or columns) of a board.
pub type State = [Row; N];

/// Display the board state as 15 lines of 15 squares.
/// Empty squares show as ".".
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .horizontal
            .iter()
            .map(Row::to_string)
            .collect::<Vec<String>>()
            .join("\n");
        write!(f, "{}", repr)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Represents the state of a scrabble board:
/// * A grid of 15x15 squares with possible letter/word bonus,
/// * The tiles on the board, stored by row and by column.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    grid: Grid,
    horizontal: State,
    vertical: State,
}

impl Board {
    /// Create a new empty board with the standard grid.
    ///
    /// Builder functions can be used to set the grid and the tiles on the board.
    /// See also:
    /// - [`with_state_from_strings`](Board::with_state_from_strings)
    /// - [`with_grid_from_strings`](Board::with_grid_from_strings)
    #[must_use]
    pub fn new() -> Board {
        let empty_row: Row = (0..N).map(|_| Cell::EMPTY).collect();
        Board {
            grid: Grid::default(),
            horizontal: [empty_row; N],
            vertical: [empty_row; N],
        }
    }

    /// Parse board state from a list of strings.
    /// The list must contain 15 rows of 15 characters.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    pub fn state_from_strings(rows: &[&str]) -> Result<State, Error> {
        if rows.len() != N {
            return Err(Error::InvalidRowCount(rows.len()));
        }
        let mut state = [Row::new(); N];
        for (i, &row) in rows.iter().enumerate() {
            let encoded: Row = row.parse()?;
            if encoded.len() != N {
                return Err(Error::InvalidRowLength(String::from(row), encoded.len()));
            }
            state[i] = encoded;
        }
        Ok(state)
    }

    /// Set board state from a list of rows
    pub fn set_state(&mut self, rows: &State) {
        self.horizontal = *rows;
        for y in 0..N {
            for x in 0..N {
                self.vertical[x][y] = self.horizontal[y][x];
            }
        }
    }

    /// Set board state from list of strings
    /// ## Errors
    /// See [`state_from_strings`](Board::state_from_strings).
    pub fn set_state_from_strings(&mut self, rows: &[&str]) -> Result<(), Error> {
        let state = Board::state_from_strings(rows)?;
        self.set_state(&state);
        Ok(())
    }

    /// Set the tiles on the board from a list of strings, and return the modified board.
    /// Uppercase letters are regular tiles, lowercase letters are blanks played as that letter.
    /// ## Errors
    /// If the list of strings has wrong dimensions or cannot be parsed as rows.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Board, Error};
    /// let state = &[
    ///     "               ",
    ///     "    DOG        ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    ///     "               ",
    /// ];
    /// let board = Board::default().with_state_from_strings(state)?;
    /// assert!(board.is_occupied(1, 5));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn with_state_from_strings(mut self, rows: &[&str]) -> Result<Board, Error> {
        self.set_state_from_strings(rows)?;
        Ok(self)
    }

    /// Set board grid from string representation
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid squares.
    pub fn set_grid_from_strings<S: AsRef<str>>(&mut self, grid: &[S]) -> Result<(), Error> {
        self.grid = Grid::from_strings(grid)?;
        Ok(())
    }

    /// Set board grid from string representation, and return the modified board.
    /// ## Errors
    /// If the grid has wrong dimensions or cannot be parsed as valid squares.
    pub fn with_grid_from_strings<S: AsRef<str>>(mut self, grid: &[S]) -> Result<Board, Error> {
        self.set_grid_from_strings(grid)?;
        Ok(self)
    }

    /// Return the grid
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Return the board horizontal state
    pub fn horizontal(&self) -> &State {
        &self.horizontal
    }

    /// Return the board vertical state
    pub fn vertical(&self) -> &State {
        &self.vertical
    }

    /// Return the line along `direction` through y, x: the row for `Right`, the column for `Down`,
    /// and the position of y, x in that line.
    pub(crate) fn line(&self, y: usize, x: usize, direction: Direction) -> (&Row, usize) {
        match direction {
            Direction::Right => (&self.horizontal[y], x),
            Direction::Down => (&self.vertical[x], y),
        }
    }

    /// Check if the square at y, x is occupied. Outside the board nothing is occupied.
    ///
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Direction, Error};
    /// let mut board = Board::default();
    /// board.place(&"QI".parse()?, 7, 7, Direction::Right)?;
    /// assert!(board.is_occupied(7, 8));
    /// assert!(!board.is_occupied(8, 7));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn is_occupied(&self, y: usize, x: usize) -> bool {
        self.tile_at(y, x).is_some()
    }

    /// Return tile at y, x or None if empty square or outside grid.
    pub fn tile_at(&self, y: usize, x: usize) -> Option<Tile> {
        if y < N && x < N {
            return self.horizontal[y][x].tile();
        }
        None
    }

    /// Return the premium of the square at y, x. The start square is a double word square.
    pub fn premium_at(&self, y: usize, x: usize) -> Premium {
        self.grid.premium(y, x)
    }

    /// Check if y, x is the start square.
    pub fn is_start(&self, y: usize, x: usize) -> bool {
        (y, x) == START
    }

    /// Check if one of the four squares next to y, x is occupied.
    pub fn has_neighbour(&self, y: usize, x: usize) -> bool {
        self.is_occupied(y + 1, x)
            || self.is_occupied(y, x + 1)
            || (y > 0 && self.is_occupied(y - 1, x))
            || (x > 0 && self.is_occupied(y, x - 1))
    }

    /// Check if there are no tiles on the board.
    pub fn is_empty(&self) -> bool {
        self.horizontal
            .iter()
            .all(|row| row.iter().all(Cell::is_empty))
    }

    /// Iterate over all tiles on the board.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.horizontal
            .iter()
            .flat_map(|row| row.iter().filter_map(Cell::tile))
    }

    /// Check if `word` can be placed at y, x in `direction` without replacing a tile.
    /// Returns the rack letters needed, in the order of use.
    /// Letters in `word` that are already on the board are not included, and
    /// wildcard tiles need a blank. A tile on the board matches a tile in `word`
    /// with the same letter, also if one of them is a wildcard.
    /// ## Errors
    /// - `TilePlacementError` if the word does not fit on the board.
    /// - `TileReplaceError` if a square holds a different tile.
    pub fn try_place(
        &self,
        word: &Word,
        y: usize,
        x: usize,
        direction: Direction,
    ) -> Result<Letters, Error> {
        let len = word.len();
        let (dy, dx) = direction.delta();
        if y + len * dy > N || x + len * dx > N || y >= N || x >= N {
            return Err(Error::TilePlacementError {
                y,
                x,
                direction,
                len,
            });
        }
        let mut used_letters = Letters::new();
        for (i, &tile) in word.iter().enumerate() {
            let (y, x) = (y + i * dy, x + i * dx);
            match self.horizontal[y][x].tile() {
                None => used_letters.push(Letter::from_tile(tile)),
                Some(current) if current.same_letter(&tile) => {}
                Some(_) => return Err(Error::TileReplaceError { y, x }),
            }
        }
        Ok(used_letters)
    }

    /// Place `word` at y, x on the board in `direction`.
    /// Returns the used rack letters, in the order of use.
    /// Tiles already on the board are kept, and the board is not modified if
    /// the word can not be placed.
    /// ## Errors
    /// See [`try_place`](Board::try_place).
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Board, Direction, Error, Letters};
    /// let mut board = Board::default();
    /// let used = board.place(&"QUIz".parse()?, 7, 7, Direction::Right)?;
    /// assert_eq!(used, "QUI?".parse::<Letters>()?);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn place(
        &mut self,
        word: &Word,
        y: usize,
        x: usize,
        direction: Direction,
    ) -> Result<Letters, Error> {
        let used_letters = self.try_place(word, y, x, direction)?;
        let (dy, dx) = direction.delta();
        for (i, &tile) in word.iter().enumerate() {
            let (y, x) = (y + i * dy, x + i * dx);
            if self.horizontal[y][x].is_empty() {
                self.horizontal[y][x] = tile.into_cell();
                self.vertical[x][y] = tile.into_cell();
            }
        }
        Ok(used_letters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    const TEST_STATE: &[&str] = &[
        "               ",
        "    DOG        ",
        "               ",
        "               ",
        "               ",
        "               ",
        "               ",
        "       QI      ",
        "        s      ",
        "               ",
        "               ",
        "               ",
        "               ",
        "               ",
        "               ",
    ];

    #[test]
    fn test_state() -> Result<()> {
        let mut board = Board::default().with_state_from_strings(TEST_STATE)?;
        assert!(board.is_occupied(1, 4));
        assert!(!board.is_occupied(0, 0));
        assert!(board.is_occupied(8, 8));
        assert_eq!(board.tile_at(8, 8), Some(Tile::wildcard(19)));
        assert!(!board.is_occupied(15, 8));
        assert!(board.has_neighbour(0, 5));
        assert!(!board.has_neighbour(0, 0));
        assert_eq!(board.tiles().count(), 6);

        board.place(&"DOGS".parse()?, 1, 4, Direction::Right)?;
        assert_eq!(board.horizontal()[1].to_string(), "....DOGS.......");
        assert_eq!(board.vertical()[7].to_string(), ".S.....Q.......");
        Ok(())
    }

    #[test]
    fn test_display() -> Result<()> {
        let board = Board::default().with_state_from_strings(TEST_STATE)?;
        let lines: Vec<String> = board.to_string().lines().map(String::from).collect();
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[8], "........s......");
        assert!(Board::default().is_empty());
        assert!(!board.is_empty());
        Ok(())
    }

    #[test]
    fn test_place_returns_used_letters() -> Result<()> {
        let mut board = Board::default().with_state_from_strings(TEST_STATE)?;
        let used = board.try_place(&"QIs".parse()?, 7, 7, Direction::Right)?;
        assert_eq!(used.to_string(), "?");
        let used = board.place(&"OX".parse()?, 1, 5, Direction::Down)?;
        assert_eq!(used.to_string(), "X");
        assert_eq!(board.tile_at(2, 5), Some(Tile::regular(24)));
        Ok(())
    }

    #[test]
    fn test_tile_replace_error() -> Result<()> {
        let mut board = Board::default().with_state_from_strings(TEST_STATE)?;
        let before = board.clone();
        let err = board.place(&"BAR".parse()?, 0, 5, Direction::Down);
        assert!(matches!(err, Err(Error::TileReplaceError { y: 1, x: 5 })));
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    fn test_wildcard_on_board() -> Result<()> {
        let mut board = Board::default().with_state_from_strings(TEST_STATE)?;
        let used = board.place(&"IS".parse()?, 7, 8, Direction::Down)?;
        assert!(used.is_empty());
        assert_eq!(board.tile_at(8, 8), Some(Tile::wildcard(19)));
        Ok(())
    }

    #[test]
    fn test_tile_placement_error() -> Result<()> {
        let mut board = Board::default();
        let err = board.place(&"RUST".parse()?, 7, 12, Direction::Right);
        assert!(matches!(
            err,
            Err(Error::TilePlacementError {
                y: 7,
                x: 12,
                direction: Direction::Right,
                len: 4
            })
        ));
        assert!(board.is_empty());
        Ok(())
    }

    #[test]
    fn test_state_errors() {
        assert!(matches!(
            Board::state_from_strings(&TEST_STATE[1..]),
            Err(Error::InvalidRowCount(14))
        ));
        let mut rows = TEST_STATE.to_vec();
        rows[0] = "  A";
        assert!(matches!(
            Board::state_from_strings(&rows),
            Err(Error::InvalidRowLength(_, 3))
        ));
        rows[0] = "      ?        ";
        assert!(Board::state_from_strings(&rows).is_err());
    }

    #[test]
    fn test_grid() -> Result<()> {
        let rows = vec!["-- -- -- -- -- -- -- -- -- -- -- -- -- -- --"; N];
        let board = Board::default().with_grid_from_strings(&rows)?;
        assert_eq!(board.premium_at(7, 7), Premium::None);
        assert_eq!(Board::default().premium_at(7, 7), Premium::DoubleWord);
        assert!(board.is_start(7, 7));
        Ok(())
    }
}
