use super::{codes::Code, item::Item, tile::Tile, Codec};
use crate::error::Error;
use std::convert::TryFrom;

/// A cell on the board that is either empty or contains a [`Tile`](crate::Tile)
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Cell(Option<Tile>);

impl Item for Cell {
    fn code(&self) -> Code {
        self.0.map_or(0, |tile| tile.code())
    }

    fn to_char(&self) -> char {
        Codec::decode_code(self.code())
    }
}

impl Cell {
    /// An empty cell
    pub const EMPTY: Self = Self(None);

    /// Create new `Cell` from `Tile`
    pub fn from_tile(tile: Tile) -> Cell {
        Cell(Some(tile))
    }

    /// Get the contained tile or None
    pub fn tile(&self) -> Option<Tile> {
        self.0
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl TryFrom<Code> for Cell {
    type Error = Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Cell::EMPTY),
            _ => Tile::try_from(code).map(Cell::from_tile),
        }
    }
}

impl From<Cell> for Code {
    fn from(cell: Cell) -> Code {
        cell.code()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_codes() {
        assert!(Cell::try_from(0).unwrap().is_empty());
        let cell = Cell::try_from(65).unwrap();
        assert_eq!(cell.tile(), Some(Tile::wildcard(1)));
        assert_eq!(cell.to_char(), 'a');
        assert!(Cell::try_from(64).is_err());
    }
}
