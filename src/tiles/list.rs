use super::DIM;
use super::{Code, Codec, Item};
use crate::error::Error;
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Index, IndexMut, Range};
use std::slice::Iter;
use std::str::FromStr;
use tinyvec::{ArrayVec, ArrayVecIterator};

pub(super) type Items<T> = ArrayVec<[T; DIM]>;

/// A fixed capacity list of `Item`, stored inline.
/// Used to represent [`Word`](crate::Word), [`Letters`](crate::Letters) and [`Row`](crate::Row).
///
/// Copying a list is cheap, so a list can be passed by value down a search
/// instead of being shared and mutated.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemList<T: Item>(pub Items<T>);

impl<T: Item> Index<usize> for ItemList<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: Item> IndexMut<usize> for ItemList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Item> Index<Range<usize>> for ItemList<T> {
    type Output = [T];
    fn index(&self, range: Range<usize>) -> &Self::Output {
        &self.0[range]
    }
}

impl<T: Item> ItemList<T> {
    pub fn new() -> ItemList<T> {
        ItemList::<T>(Items::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append `item`. Panics if the list already holds 16 items.
    pub fn push(&mut self, item: T) {
        self.0.push(item);
    }

    pub fn iter(&self) -> Iter<T> {
        self.0.iter()
    }

    pub fn contains(&self, item: &T) -> bool {
        self.0.contains(item)
    }

    pub fn codes(&self) -> Vec<Code> {
        self.iter().map(|&item| item.into()).collect()
    }

    /// Return a copy of the list with the item at `pos` removed.
    pub fn remove(&self, pos: usize) -> ItemList<T> {
        let mut list = *self;
        list.0.remove(pos);
        list
    }

    /// Return a copy of the list with a copy of `item` appended.
    pub fn with(&self, item: T) -> ItemList<T> {
        let mut list = *self;
        list.0.push(item);
        list
    }
}

impl<T: Item> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ItemList::<T>(iter.into_iter().collect())
    }
}

impl<T: Item> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = ArrayVecIterator<[T; DIM]>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T: Item> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Item> TryFrom<Vec<u8>> for ItemList<T> {
    type Error = Error;
    fn try_from(codes: Vec<u8>) -> Result<Self, Error> {
        if codes.len() > DIM {
            return Err(Error::EncodeStringTooLong(Codec::decode(&codes)));
        }
        codes.into_iter().map(T::try_from).collect()
    }
}

/// Parse a list with the [`Codec`](crate::Codec).
/// ## Examples
/// ```
/// use scrabble_solver::{Error, Letters, Word};
/// let word: Word = "APPLEs".parse()?;
/// assert_eq!(word.len(), 6);
/// let rack: Letters = "APPLE?Z".parse()?;
/// assert_eq!(rack.to_string(), "APPLE?Z");
/// # Ok::<(), Error>(())
/// ```
impl<T: Item> FromStr for ItemList<T> {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemList::<T>::try_from(Codec::encode(s)?)
    }
}

impl<T: Item> fmt::Display for ItemList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s: String = self.iter().map(Item::to_char).collect();
        write!(f, "{}", s)
    }
}
