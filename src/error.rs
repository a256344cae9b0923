use crate::moves::Direction;
use crate::tiles::Word;
use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// The string is longer than 16 tokens
    #[error("Encoder: string too long {0}")]
    EncodeStringTooLong(String),

    /// Token can not be encoded
    #[error("Encoder: invalid token '{0}'")]
    EncodeInvalidToken(String),

    /// Code is not valid for `Tile` or `Cell`
    #[error("Invalid code for tile {0}")]
    InvalidTileCode(u8),

    /// Code is not valid for `Letter`
    #[error("Invalid code for letter {0}")]
    InvalidLetterCode(u8),

    /// Error parsing board state or grid from strings
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 cells
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// Error parsing premium square
    #[error("Invalid grid square: \"{0}\"")]
    GridParseError(String),

    /// Error parsing a line of a tile value table
    #[error("Invalid tile table line: \"{0}\"")]
    TileTableParseError(String),

    /// Attempt to place (part of) a word outside the board
    #[error("Playing {len} tiles at y={y}, x={x} {direction} does not fit")]
    TilePlacementError {
        y: usize,
        x: usize,
        direction: Direction,
        len: usize,
    },

    /// Attempt to replace a tile already on the board
    #[error("Attempt to replace tile at y:{y}, x:{x}")]
    TileReplaceError { y: usize, x: usize },

    /// Attempt to play or exchange letters that are not on the rack
    #[error("Letters \"{0}\" are not on the rack")]
    TileNotInRack(String),

    /// Exchanging needs more than 7 tiles in the bag
    #[error("Can not exchange with {remaining} tiles left in the bag")]
    ExchangeRefused { remaining: usize },

    /// A move was rejected by the scoring engine
    #[error("Move rejected: {0}")]
    Rejected(#[from] Rejection),
}

/// Reasons for the scoring engine to reject a move.
///
/// Most candidate placements in a move search are rejected, so these are plain
/// values and not errors that unwind through the search.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// A tile in the word differs from the tile already on the board.
    #[error("tile at y={y}, x={x} does not match the board")]
    InvalidPlacement { y: usize, x: usize },

    /// The main word or a crossing word is not in the lexicon.
    #[error("\"{0}\" is not in the lexicon")]
    InvalidWord(Word),

    /// The move does not touch a tile on the board and does not cover the start square.
    #[error("move does not connect to the tiles on the board")]
    FloatingMove,

    /// The word does not fit on the board.
    #[error("word does not fit on the board")]
    OutOfBounds,

    /// A board tile directly before or after the word extends it.
    #[error("word continues with tiles on the board")]
    WordContinues,

    /// All letters of the word are already on the board.
    #[error("move places no tiles")]
    NoTilesPlaced,
}
