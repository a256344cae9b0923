use crate::Error;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// The dimension of the board: N x N squares
pub const N: usize = 15;
const Q: usize = 1 + N / 2;

/// The center square, used by the first move.
pub const START: (usize, usize) = (N / 2, N / 2);

const DEFAULT_QUARTER_BOARD: [&str; Q] = [
    "3w -- -- 2l -- -- -- 3w",
    "-- 2w -- -- -- 3l -- --",
    "-- -- 2w -- -- -- 2l --",
    "2l -- -- 2w -- -- -- 2l",
    "-- -- -- -- 2w -- -- --",
    "-- 3l -- -- -- 3l -- --",
    "-- -- 2l -- -- -- 2l --",
    "3w -- -- 2l -- -- -- ss",
];

/// A square of the grid, as read from the grid strings.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Square {
    NoBonus,
    Start,
    LetterBonus(u32),
    WordBonus(u32),
}

/// The premium of a square on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Premium {
    None,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Premium {
    /// Multiplier for the letter placed on the square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Premium::DoubleLetter => 2,
            Premium::TripleLetter => 3,
            _ => 1,
        }
    }

    /// Multiplier for the word that covers the square.
    pub fn word_multiplier(self) -> u32 {
        match self {
            Premium::DoubleWord => 2,
            Premium::TripleWord => 3,
            _ => 1,
        }
    }
}

use Square::{LetterBonus, NoBonus, Start, WordBonus};

impl Square {
    /// The premium of the square. The start square doubles the word.
    pub fn premium(self) -> Premium {
        match self {
            NoBonus => Premium::None,
            Start | WordBonus(2) => Premium::DoubleWord,
            WordBonus(_) => Premium::TripleWord,
            LetterBonus(2) => Premium::DoubleLetter,
            LetterBonus(_) => Premium::TripleLetter,
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            Start => write!(f, "ss"),
            LetterBonus(n) => write!(f, "{}l", n),
            WordBonus(n) => write!(f, "{}w", n),
        }
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "ss" => Ok(Start),
            "2l" => Ok(LetterBonus(2)),
            "3l" => Ok(LetterBonus(3)),
            "2w" => Ok(WordBonus(2)),
            "3w" => Ok(WordBonus(3)),
            _ => Err(Error::GridParseError(String::from(s))),
        }
    }
}

type Inner = [[Square; N]; N];

/// Scrabble board grid, consisting of 15x15 (normal or bonus) squares.
///
/// A bonus square has a 2x or 3x letter bonus, or a 2x or 3x word bonus.
/// The center square at (7,7) is the "start" square, and must be used in the first turn.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid(Inner);

impl Deref for Grid {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Grid {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_strings().join("\n"))
    }
}

impl Default for Grid {
    /// The standard scrabble grid.
    /// ## Example
    /// ```
    /// # use scrabble_solver::{Grid, Premium};
    /// let grid = Grid::default();
    /// assert_eq!(grid.premium(0, 0), Premium::TripleWord);
    /// assert_eq!(grid.premium(7, 7), Premium::DoubleWord);
    /// ```
    fn default() -> Self {
        let mut grid = Grid::empty();
        for (i, row) in DEFAULT_QUARTER_BOARD.iter().enumerate() {
            for (j, square) in row.split(' ').enumerate() {
                // the quarter board is a valid constant
                let square = square.parse().unwrap_or(NoBonus);
                grid[i][j] = square;
                grid[N - i - 1][j] = square;
                grid[i][N - j - 1] = square;
                grid[N - i - 1][N - j - 1] = square;
            }
        }
        grid
    }
}

impl Grid {
    /// Create a new empty grid 15x15 cells with no bonus.
    fn empty() -> Grid {
        Grid([[NoBonus; N]; N])
    }

    /// Return the premium of the square at y, x. Outside the grid there is no premium.
    pub fn premium(&self, y: usize, x: usize) -> Premium {
        if y < N && x < N {
            self.0[y][x].premium()
        } else {
            Premium::None
        }
    }

    /// Get grid squares as a vec of 15 strings
    pub fn to_strings(&self) -> Vec<String> {
        self.iter()
            .map(|row| {
                row.iter()
                    .map(Square::to_string)
                    .collect::<Vec<String>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
    }

    /// Create a `Grid` from strings
    /// Parameter `grid` must have 15 rows, each row consisting of 15 elements joined by spaces.
    ///
    /// ## Errors
    /// If `grid` has wrong dimensions, or elements can not be parsed as a `Square`.
    pub fn from_strings<S: AsRef<str>>(grid: &[S]) -> Result<Grid, Error> {
        if grid.len() != N {
            return Err(Error::InvalidRowCount(grid.len()));
        }
        let mut board = Grid::empty();
        for (i, row) in grid.iter().enumerate() {
            let squares: Vec<&str> = row.as_ref().split_whitespace().collect();
            if squares.len() != N {
                return Err(Error::InvalidRowLength(
                    String::from(row.as_ref()),
                    squares.len(),
                ));
            }
            for (j, &square) in squares.iter().enumerate() {
                board[i][j] = square.parse()?;
            }
        }
        Ok(board)
    }
}
