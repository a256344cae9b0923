//! Basic types for working with scrabble tiles.
mod cell;
mod codec;
mod codes;
mod item;
mod items;
mod letter;
mod list;
mod tile;

/// Maximum length of Code list
pub(crate) const DIM: usize = 16;
pub use cell::Cell;
pub use codec::Codec;
pub use codes::{Code, Label, ALPHABET_LEN, BLANK};
pub use item::Item;
pub use items::{Letters, Row, Word};
pub use letter::Letter;
pub use list::ItemList;
pub use tile::Tile;
