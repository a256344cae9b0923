/// Code 1..=26 for the letters `A`..`Z`
pub type Label = u8;

/// Code used to represent a `Tile`, `Letter` or `Cell`. See [`Codec`](crate::Codec).
pub type Code = u8;

/// Number of letters in the alphabet
pub const ALPHABET_LEN: Label = 26;

/// code for EMPTY (no tile)
pub const EMPTY: Code = 0;

/// code for an unassigned BLANK tile
pub const BLANK: Code = 0x40;

/// Mask to get label value 0..31
pub const LETTER_MASK: u8 = 0b11111;

/// bitflag for wildcard
pub const IS_WILDCARD: Code = 0x40;
