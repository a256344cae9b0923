#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rules used to score and search moves.
///
/// ## Examples
/// ```
/// use scrabble_solver::Config;
/// let config = Config::default().with_bingo_bonus(40).with_allow_illegal(true);
/// assert_eq!(config.rack_size, 7);
/// assert_eq!(config.bingo_bonus, 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// The number of letters on a full rack.
    pub rack_size: usize,
    /// Bonus for playing all letters of a full rack in one move.
    pub bingo_bonus: u32,
    /// Skip the lexicon and connection checks, to score hypothetical boards.
    pub allow_illegal: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            rack_size: 7,
            bingo_bonus: 50,
            allow_illegal: false,
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_rack_size(mut self, rack_size: usize) -> Config {
        self.rack_size = rack_size;
        self
    }

    #[must_use]
    pub fn with_bingo_bonus(mut self, bingo_bonus: u32) -> Config {
        self.bingo_bonus = bingo_bonus;
        self
    }

    #[must_use]
    pub fn with_allow_illegal(mut self, allow_illegal: bool) -> Config {
        self.allow_illegal = allow_illegal;
        self
    }
}
