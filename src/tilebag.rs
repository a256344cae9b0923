use crate::board::Board;
use crate::tiles::{Letter, Letters, DIM};
use crate::tileset::TileSet;
use crate::Error;
use multiset::HashMultiSet;
use rand::{seq::IteratorRandom, Rng};
use std::ops::{Deref, Sub};
use tracing::{debug, warn};

/// An exchange needs more than this number of tiles in the bag.
pub const MIN_TILES_FOR_EXCHANGE: usize = 7;

/// Keeps track of the tiles that can still be drawn.
#[derive(Debug, Clone)]
pub struct TileBag(HashMultiSet<Letter>);

impl Default for TileBag {
    fn default() -> Self {
        TileBag::new()
    }
}

impl Deref for TileBag {
    type Target = HashMultiSet<Letter>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Sub for TileBag {
    type Output = Self;
    fn sub(self, other: Self) -> Self::Output {
        Self(self.0 - other.0)
    }
}

impl From<&TileSet> for TileBag {
    fn from(tileset: &TileSet) -> Self {
        TileBag::from_tileset(tileset)
    }
}

impl TileBag {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// A full bag with all tiles of `tileset`.
    pub fn from_tileset(tileset: &TileSet) -> Self {
        let mut bag = HashMultiSet::new();
        for (letter, count) in tileset.counts() {
            if count > 0 {
                bag.insert_times(letter, count as usize);
            }
        }
        Self(bag)
    }

    pub fn from_letters<I: IntoIterator<Item = Letter>>(letters: I) -> Self {
        let mut bag = HashMultiSet::new();
        for letter in letters {
            bag.insert(letter);
        }
        Self(bag)
    }

    /// The tiles of `tileset` that are not on `board` and not on `rack`: the
    /// tiles in the bag and on the racks of the other players.
    /// A wildcard on the board used a blank.
    pub fn remaining(tileset: &TileSet, board: &Board, rack: &Letters) -> TileBag {
        let used = board
            .tiles()
            .map(Letter::from_tile)
            .chain(rack.iter().copied());
        TileBag::from_tileset(tileset) - TileBag::from_letters(used)
    }

    /// All tiles in the bag, sorted. The order of a `HashMultiSet` is not
    /// reproducible, so draws choose from this list.
    pub fn letters(&self) -> Vec<Letter> {
        let mut letters: Vec<Letter> = self.0.iter().copied().collect();
        letters.sort_unstable();
        letters
    }

    /// Put `letters` back in the bag.
    pub fn put_back(&mut self, letters: &Letters) {
        for &letter in letters {
            self.0.insert(letter);
        }
    }

    /// Draw up to `n` tiles from the bag, uniformly without replacement.
    /// Draws are reproducible for a seeded `rng`.
    pub fn draw<R: Rng>(&mut self, n: usize, rng: &mut R) -> Letters {
        let n = n.min(DIM);
        let drawn: Letters = self
            .letters()
            .into_iter()
            .choose_multiple(rng, n)
            .into_iter()
            .collect();
        for letter in &drawn {
            self.0.remove(letter);
        }
        debug!(drawn = %drawn, left = self.len(), "draw tiles");
        drawn
    }

    /// Exchange `letters` for the same number of tiles from the bag.
    /// The new tiles are drawn before `letters` go back in the bag.
    /// ## Errors
    /// `ExchangeRefused` if the bag holds 7 tiles or less. The bag is unchanged.
    pub fn exchange<R: Rng>(&mut self, letters: &Letters, rng: &mut R) -> Result<Letters, Error> {
        let remaining = self.len();
        if remaining <= MIN_TILES_FOR_EXCHANGE {
            warn!(remaining, "exchange refused");
            return Err(Error::ExchangeRefused { remaining });
        }
        let drawn = self.draw(letters.len(), rng);
        self.put_back(letters);
        Ok(drawn)
    }
}
