use super::codes::{Code, Label, ALPHABET_LEN, IS_WILDCARD, LETTER_MASK};
use super::{Cell, Codec, Item, Letter};
use crate::error::Error;
use std::convert::TryFrom;

/// A tile on the board: a letter, and whether it was played with a blank.
///
/// A wildcard tile matches its letter like a regular tile, but is worth no points.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tile {
    label: Label,
    wildcard: bool,
}

impl Item for Tile {
    fn code(&self) -> Code {
        if self.wildcard {
            self.label | IS_WILDCARD
        } else {
            self.label
        }
    }

    fn to_char(&self) -> char {
        Codec::decode_code(self.code())
    }
}

impl Tile {
    /// A regular tile for letter `label`.
    pub fn regular(label: Label) -> Tile {
        debug_assert!((1..=ALPHABET_LEN).contains(&label));
        Tile {
            label,
            wildcard: false,
        }
    }

    /// Return a wildcard tile for letter `label`.
    /// ## Example
    /// ```
    /// use scrabble_solver::{Item, Tile};
    /// let tile = Tile::wildcard(1);
    /// assert_eq!(tile.code(), 65);
    /// assert_eq!(tile.to_char(), 'a');
    /// ```
    pub fn wildcard(label: Label) -> Tile {
        debug_assert!((1..=ALPHABET_LEN).contains(&label));
        Tile {
            label,
            wildcard: true,
        }
    }

    /// Create the tile for a regular rack `letter`. A blank has no letter yet, so gives `None`.
    pub fn from_letter(letter: Letter) -> Option<Tile> {
        letter.label().map(Tile::regular)
    }

    /// Create `Cell` from tile
    pub fn into_cell(self) -> Cell {
        Cell::from_tile(self)
    }

    /// Check if the tile is a wildcard
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    /// Get label for tile, ignoring the wildcard attribute.
    pub fn label(&self) -> Label {
        self.label
    }

    /// Check if both tiles show the same letter, ignoring the wildcard attribute.
    pub fn same_letter(&self, other: &Tile) -> bool {
        self.label == other.label
    }
}

impl TryFrom<Code> for Tile {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        let label = code & LETTER_MASK;
        match code {
            1..=ALPHABET_LEN => Ok(Tile::regular(label)),
            65..=90 => Ok(Tile::wildcard(label)),
            _ => Err(Self::Error::InvalidTileCode(code)),
        }
    }
}

impl From<Tile> for Code {
    fn from(tile: Tile) -> Code {
        tile.code()
    }
}
