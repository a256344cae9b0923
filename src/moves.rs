use crate::tiles::{Letters, Word};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction in which a word is played.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Top to bottom, along a column.
    Down,
    /// Left to right, along a row.
    Right,
}

impl Direction {
    /// Return (dy, dx) for one step in this direction.
    pub fn delta(self) -> (usize, usize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Right => (0, 1),
        }
    }

    /// The crossing direction.
    pub fn cross(self) -> Direction {
        match self {
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Down,
        }
    }

    /// Return the cell `offset` steps from (y, x), or `None` if it is not on a board of size `n`.
    pub(crate) fn step(self, y: usize, x: usize, offset: usize, n: usize) -> Option<(usize, usize)> {
        let (dy, dx) = self.delta();
        let (y, x) = (y + dy * offset, x + dx * offset);
        if y < n && x < n {
            Some((y, x))
        } else {
            None
        }
    }

    /// Return the cell before (y, x), or `None` at the top or left edge.
    pub(crate) fn before(self, y: usize, x: usize) -> Option<(usize, usize)> {
        match self {
            Direction::Down => y.checked_sub(1).map(|y| (y, x)),
            Direction::Right => x.checked_sub(1).map(|x| (y, x)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Direction::Down => write!(f, "down"),
            Direction::Right => write!(f, "right"),
        }
    }
}

/// A word placed on the board: the position of the first letter, the direction,
/// and all letters of the word, including the tiles that are already on the board.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    pub y: usize,
    pub x: usize,
    pub direction: Direction,
    pub word: Word,
}

impl Move {
    pub fn new(y: usize, x: usize, direction: Direction, word: Word) -> Move {
        Move {
            y,
            x,
            direction,
            word,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} at ({}, {}) {}", self.word, self.y, self.x, self.direction)
    }
}

/// What a player does in a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Place a word on the board.
    Play(Move),
    /// Skip the turn.
    Pass,
    /// Return these letters to the bag and draw new ones.
    Exchange(Letters),
    /// Give up the game.
    Resign,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Action::Play(mv) => write!(f, "play {}", mv),
            Action::Pass => write!(f, "pass"),
            Action::Exchange(letters) => write!(f, "exchange {}", letters),
            Action::Resign => write!(f, "resign"),
        }
    }
}
