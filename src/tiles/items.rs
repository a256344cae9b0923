use super::{list::ItemList, Cell, Letter, Tile};

/// A collection of [`Tile`](crate::Tile).
pub type Word = ItemList<Tile>;

/// A collection of [`Cell`](crate::Cell).
pub type Row = ItemList<Cell>;

/// A collection of [`Letter`](crate::Letter).
pub type Letters = ItemList<Letter>;

impl Letters {
    pub fn blank() -> Letters {
        let mut letters = Letters::new();
        letters.push(Letter::blank());
        letters
    }

    /// Remove each letter of `other` once, as a multiset difference.
    /// Returns `None` if a letter of `other` is missing.
    pub fn without(&self, other: &Letters) -> Option<Letters> {
        let mut rest = *self;
        for letter in other {
            let pos = rest.iter().position(|l| l == letter)?;
            rest = rest.remove(pos);
        }
        Some(rest)
    }
}

impl Word {
    /// Check if both words spell the same letters, ignoring wildcards.
    pub fn same_letters(&self, other: &Word) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.same_letter(b))
    }
}

impl Row {
    /// Returns the beginning and the end of the word at position i given that
    /// a tile would be placed in i.
    pub(crate) fn start_end(&self, i: usize) -> (usize, usize) {
        let start = self.0[..i]
            .iter()
            .rposition(Cell::is_empty)
            .map_or(0, |p| p + 1);

        let end = self.0[i + 1..]
            .iter()
            .position(Cell::is_empty)
            .map_or(self.len(), |p| p + i + 1);

        (start, end)
    }

    /// Return the word in `self[start..end]` with `tile` placed at the empty position `i`.
    /// All other cells in the range must hold a tile.
    pub(crate) fn word_with(&self, start: usize, end: usize, i: usize, tile: Tile) -> Word {
        debug_assert!(start <= i && i < end);
        (start..end)
            .filter_map(|j| if j == i { Some(tile) } else { self[j].tile() })
            .collect()
    }
}
