use super::codes::Code;
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt::Debug;
use std::hash::Hash;

/// common trait for [`Tile`](crate::Tile), [`Letter`](crate::Letter), [`Cell`](crate::Cell)
pub trait Item:
    Debug
    + Clone
    + Copy
    + Eq
    + Ord
    + Hash
    + Default
    + Into<Code>
    + TryFrom<Code, Error = Error>
{
    fn code(&self) -> Code;

    /// The character used for this item by the [`Codec`](crate::Codec).
    fn to_char(&self) -> char;
}
