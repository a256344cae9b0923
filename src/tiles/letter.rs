use super::codes::{Code, Label, ALPHABET_LEN, BLANK};
use super::{Codec, Item, Tile};
use crate::error::Error;
use std::convert::TryFrom;

/// A letter on the rack, that can be played as a [`Tile`](crate::Tile) on the board.
///
/// Either a regular letter or a `blank` ("?") that can be used as any letter.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Letter {
    /// A regular letter with label 1..=26
    Regular(Label),
    /// A blank, not yet assigned to a letter
    #[default]
    Blank,
}

impl Item for Letter {
    fn code(&self) -> Code {
        match self {
            Letter::Regular(label) => *label,
            Letter::Blank => BLANK,
        }
    }

    fn to_char(&self) -> char {
        Codec::decode_code(self.code())
    }
}

impl Letter {
    /// Create the rack `Letter` that was used to play `tile`.
    /// A wildcard tile was played with a blank.
    pub fn from_tile(tile: Tile) -> Letter {
        if tile.is_wildcard() {
            Letter::Blank
        } else {
            Letter::Regular(tile.label())
        }
    }

    /// Return new blank
    pub fn blank() -> Letter {
        Letter::Blank
    }

    /// Check if letter is `blank`
    pub fn is_blank(&self) -> bool {
        matches!(self, Letter::Blank)
    }

    /// Get label for letter, or `None` for a blank.
    pub fn label(&self) -> Option<Label> {
        match self {
            Letter::Regular(label) => Some(*label),
            Letter::Blank => None,
        }
    }
}

impl TryFrom<Code> for Letter {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            1..=ALPHABET_LEN => Ok(Letter::Regular(code)),
            BLANK => Ok(Letter::Blank),
            _ => Err(Self::Error::InvalidLetterCode(code)),
        }
    }
}

impl From<Letter> for Code {
    fn from(letter: Letter) -> Code {
        letter.code()
    }
}
