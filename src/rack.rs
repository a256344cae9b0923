use crate::tilebag::TileBag;
use crate::tiles::Letters;
use crate::tileset::TileSet;
use crate::Error;
use rand::Rng;
use std::fmt;

/// The letters of a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rack {
    letters: Letters,
    size: usize,
}

impl Default for Rack {
    /// An empty rack for 7 letters.
    fn default() -> Self {
        Rack::new(7)
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letters)
    }
}

impl Rack {
    /// An empty rack for `size` letters.
    pub fn new(size: usize) -> Rack {
        Rack {
            letters: Letters::new(),
            size,
        }
    }

    /// Return a rack with `letters`, for a game with racks of `size` letters.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Error, Rack};
    /// let rack = Rack::new(7).with_letters("QUIZ?".parse()?);
    /// assert_eq!(rack.to_string(), "QUIZ?");
    /// # Ok::<(), Error>(())
    /// ```
    #[must_use]
    pub fn with_letters(mut self, letters: Letters) -> Rack {
        self.letters = letters;
        self
    }

    pub fn letters(&self) -> &Letters {
        &self.letters
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Draw letters from `bag` until the rack is full or the bag is empty.
    /// Returns the letters drawn.
    pub fn refill<R: Rng>(&mut self, bag: &mut TileBag, rng: &mut R) -> Letters {
        let drawn = bag.draw(self.size.saturating_sub(self.len()), rng);
        for &letter in &drawn {
            self.letters.push(letter);
        }
        drawn
    }

    /// Remove `letters` from the rack.
    /// ## Errors
    /// `TileNotInRack` if one of the letters is not on the rack. The rack is unchanged.
    pub fn remove(&mut self, letters: &Letters) -> Result<(), Error> {
        self.letters = self
            .letters
            .without(letters)
            .ok_or_else(|| Error::TileNotInRack(letters.to_string()))?;
        Ok(())
    }

    /// Exchange `letters` with new letters from the bag. Returns the new letters.
    /// ## Errors
    /// - `TileNotInRack` if one of the letters is not on the rack.
    /// - `ExchangeRefused` if the bag holds too few tiles.
    ///
    /// The rack and the bag are unchanged on error.
    pub fn exchange<R: Rng>(
        &mut self,
        letters: &Letters,
        bag: &mut TileBag,
        rng: &mut R,
    ) -> Result<Letters, Error> {
        let mut rest = *self;
        rest.remove(letters)?;
        let drawn = bag.exchange(letters, rng)?;
        for &letter in &drawn {
            rest.letters.push(letter);
        }
        *self = rest;
        Ok(drawn)
    }

    /// The penalty for the letters left on the rack at the end of the game.
    pub fn penalty(&self, tileset: &TileSet) -> u32 {
        tileset.penalty(&self.letters)
    }
}
