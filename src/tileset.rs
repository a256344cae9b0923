use crate::tiles::{Codec, Item, Label, Letter, Letters, Tile, ALPHABET_LEN};
use crate::Error;
use std::convert::TryFrom;
use std::str::FromStr;

/// count, points
type TileInfo = (u32, u32);

/// English tile distribution for `A`..`Z`.
const ENGLISH: [TileInfo; ALPHABET_LEN as usize] = [
    (9, 1),
    (2, 3),
    (2, 3),
    (4, 2),
    (12, 1),
    (2, 4),
    (3, 2),
    (2, 4),
    (9, 1),
    (1, 8),
    (1, 5),
    (4, 1),
    (2, 3),
    (6, 1),
    (8, 1),
    (2, 3),
    (1, 10),
    (6, 1),
    (4, 1),
    (6, 1),
    (4, 1),
    (2, 4),
    (2, 4),
    (1, 8),
    (2, 4),
    (1, 10),
];

const ENGLISH_BLANKS: u32 = 2;

/// The tiles used in a game: the number of tiles for each letter, and the points each letter is worth.
/// Blanks are always worth 0 points, and so are letters played with a blank.
#[derive(Debug, Clone, PartialEq)]
pub struct TileSet {
    tiles: [TileInfo; ALPHABET_LEN as usize],
    blanks: u32,
}

impl Default for TileSet {
    /// The english tileset: 100 tiles including 2 blanks.
    fn default() -> Self {
        TileSet {
            tiles: ENGLISH,
            blanks: ENGLISH_BLANKS,
        }
    }
}

impl TileSet {
    /// Load a tileset from a table with one letter per line:
    /// `<letter> <points> [<count>]`. Use `?` as letter to specify the number of blanks.
    /// Letters that are not in the table are worth 0 points and have count 0.
    /// ## Errors
    /// If a line can not be parsed.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Error, TileSet, Tile};
    /// let tileset = TileSet::from_table("Q 10\nI 1 9\n? 0 2")?;
    /// assert_eq!(tileset.points(Tile::regular(17)), 10);
    /// assert_eq!(tileset.points(Tile::wildcard(17)), 0);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_table(table: &str) -> Result<TileSet, Error> {
        let mut tileset = TileSet {
            tiles: [(0, 0); ALPHABET_LEN as usize],
            blanks: 0,
        };
        for line in table.lines().map(str::trim).filter(|line| !line.is_empty()) {
            let parse_error = || Error::TileTableParseError(String::from(line));
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() < 2 || fields.len() > 3 {
                return Err(parse_error());
            }
            let mut chars = fields[0].chars();
            let letter = match (chars.next(), chars.next()) {
                (Some(ch), None) => Codec::encode_char(ch.to_ascii_uppercase())
                    .and_then(|code| Letter::try_from(code).ok())
                    .ok_or_else(parse_error)?,
                _ => return Err(parse_error()),
            };
            let points = u32::from_str(fields[1]).map_err(|_| parse_error())?;
            let count = match fields.get(2) {
                Some(count) => u32::from_str(count).map_err(|_| parse_error())?,
                None => 0,
            };
            match letter {
                Letter::Regular(label) => tileset.tiles[label as usize - 1] = (count, points),
                Letter::Blank => tileset.blanks = count,
            }
        }
        Ok(tileset)
    }

    fn info(&self, label: Label) -> TileInfo {
        self.tiles
            .get((label as usize).wrapping_sub(1))
            .copied()
            .unwrap_or((0, 0))
    }

    /// Return the points for a tile on the board. Wildcards are worth 0 points.
    pub fn points(&self, tile: Tile) -> u32 {
        if tile.is_wildcard() {
            0
        } else {
            self.info(tile.label()).1
        }
    }

    /// Return the points for a letter on the rack. Blanks are worth 0 points.
    pub fn letter_points(&self, letter: Letter) -> u32 {
        match letter {
            Letter::Regular(label) => self.info(label).1,
            Letter::Blank => 0,
        }
    }

    /// Return the number of tiles for `letter` in the tileset.
    pub fn count(&self, letter: Letter) -> u32 {
        match letter {
            Letter::Regular(label) => self.info(label).0,
            Letter::Blank => self.blanks,
        }
    }

    /// Iterate over all letters with their count, blanks last.
    pub fn counts(&self) -> impl Iterator<Item = (Letter, u32)> + '_ {
        (1..=ALPHABET_LEN)
            .map(Letter::Regular)
            .chain(std::iter::once(Letter::Blank))
            .map(move |letter| (letter, self.count(letter)))
    }

    /// Total number of tiles in the tileset.
    pub fn total(&self) -> u32 {
        self.counts().map(|(_, count)| count).sum()
    }

    /// The penalty for `letters` left on the rack at the end of the game: the sum of their points.
    pub fn penalty(&self, letters: &Letters) -> u32 {
        letters
            .iter()
            .map(|&letter| self.letter_points(letter))
            .sum()
    }

    /// Return the points for every letter of `word` as text, for display.
    pub fn describe(&self, word: &crate::Word) -> String {
        word.iter()
            .map(|tile| format!("{}{}", tile.to_char(), self.points(*tile)))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    #[test]
    fn test_english() -> Result<()> {
        let tileset = TileSet::default();
        assert_eq!(tileset.total(), 100);
        assert_eq!(tileset.points(Tile::regular(17)), 10);
        assert_eq!(tileset.points(Tile::wildcard(17)), 0);
        assert_eq!(tileset.count(Letter::Regular(5)), 12);
        assert_eq!(tileset.count(Letter::Blank), 2);
        let rack: Letters = "QI?".parse()?;
        assert_eq!(tileset.penalty(&rack), 11);
        Ok(())
    }

    #[test]
    fn test_from_table() -> Result<()> {
        let tileset = TileSet::from_table("A 1 9\n  z 10 1\n\n? 0 2\n")?;
        assert_eq!(tileset.letter_points(Letter::Regular(26)), 10);
        assert_eq!(tileset.letter_points(Letter::Regular(2)), 0);
        assert_eq!(tileset.total(), 12);
        Ok(())
    }

    #[test]
    fn test_from_table_errors() {
        for table in &["A", "A one", "AB 1", "! 1", "A 1 2 3"] {
            assert!(
                matches!(TileSet::from_table(table), Err(Error::TileTableParseError(_))),
                "{} should not parse",
                table
            );
        }
    }

    #[test]
    fn test_describe() -> Result<()> {
        let tileset = TileSet::default();
        let word: crate::Word = "QIs".parse()?;
        assert_eq!(tileset.describe(&word), "Q10 I1 s0");
        Ok(())
    }
}
