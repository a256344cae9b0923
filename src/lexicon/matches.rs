use super::{Lexicon, NodeId};
use crate::grid::N;
use crate::tiles::{Letter, Letters, Tile, Word, DIM};
use std::collections::BTreeSet;

#[derive(Debug)]
struct Frame {
    node: NodeId,
    letters: Letters,
    word: Word,
    /// at least one letter from the rack is used
    extending: bool,
}

/// Iterator over the words that can be formed with a rack of letters,
/// given the letters that are already on the board.
///
/// The trie is walked depth first with an explicit stack. Every frame owns a
/// copy of the remaining rack letters.
#[derive(Debug)]
pub struct Matches<'a> {
    lexicon: &'a Lexicon,
    forced: [Option<Tile>; DIM],
    min_len: usize,
    max_len: usize,
    stack: Vec<Frame>,
}

impl<'a> Matches<'a> {
    fn new(
        lexicon: &'a Lexicon,
        letters: Letters,
        forced: &[(Tile, usize)],
        min_len: usize,
        max_len: usize,
    ) -> Matches<'a> {
        let mut fixed = [None; DIM];
        for &(tile, offset) in forced {
            if offset < DIM {
                fixed[offset] = Some(tile);
            }
        }
        let mut stack = Vec::with_capacity(64);
        stack.push(Frame {
            node: 0,
            letters,
            word: Word::new(),
            extending: false,
        });
        Matches {
            lexicon,
            forced: fixed,
            min_len,
            max_len: max_len.min(N),
            stack,
        }
    }

    fn push_children(&mut self, frame: &Frame) {
        let depth = frame.word.len();
        if let Some(tile) = self.forced[depth] {
            // the board tile is part of the word, and keeps its wildcard
            if let Some(child) = self.lexicon.get(frame.node, tile.label()) {
                self.stack.push(Frame {
                    node: child,
                    letters: frame.letters,
                    word: frame.word.with(tile),
                    extending: frame.extending,
                });
            }
            return;
        }
        for (i, &letter) in frame.letters.iter().enumerate() {
            if frame.letters[0..i].contains(&letter) {
                continue;
            }
            let letters = frame.letters.remove(i);
            match letter {
                Letter::Blank => {
                    for (label, child) in self.lexicon.children(frame.node) {
                        self.stack.push(Frame {
                            node: child,
                            letters,
                            word: frame.word.with(Tile::wildcard(label)),
                            extending: true,
                        });
                    }
                }
                Letter::Regular(label) => {
                    if let Some(child) = self.lexicon.get(frame.node, label) {
                        self.stack.push(Frame {
                            node: child,
                            letters,
                            word: frame.word.with(Tile::regular(label)),
                            extending: true,
                        });
                    }
                }
            }
        }
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = Word;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            let len = frame.word.len();
            if len < self.max_len {
                self.push_children(&frame);
            }
            if len > 0
                && len >= self.min_len
                && frame.extending
                && self.forced[len].is_none()
                && self.lexicon.is_terminal(frame.node)
            {
                return Some(frame.word);
            }
        }
        None
    }
}

impl Lexicon {
    /// Iterate over the words that can be formed from `letters`, with the
    /// `forced` (tile, offset) pairs already in place.
    ///
    /// A word is reported if it has at least `min_len` letters, uses at least
    /// one letter from the rack, and is not followed by a forced tile.
    /// No word is longer than `max_len`. The same word may be reported more than once.
    pub fn matches(
        &self,
        letters: &Letters,
        forced: &[(Tile, usize)],
        min_len: usize,
        max_len: usize,
    ) -> Matches {
        Matches::new(self, *letters, forced, min_len, max_len)
    }

    /// Return the set of words that can be formed from `letters`, with the
    /// `forced` (tile, offset) pairs already in place. See [`matches`](Lexicon::matches).
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Error, Lexicon, Letters, Word};
    /// let lexicon = Lexicon::from_words(&["ape", "apple", "plea"])?;
    /// let rack: Letters = "APPLE?Z".parse()?;
    /// let words = lexicon.enumerate(&rack, &[], 1, 7);
    /// assert!(words.contains(&"APE".parse::<Word>()?));
    /// assert!(words.contains(&"PLEa".parse::<Word>()?));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn enumerate(
        &self,
        letters: &Letters,
        forced: &[(Tile, usize)],
        min_len: usize,
        max_len: usize,
    ) -> BTreeSet<Word> {
        self.matches(letters, forced, min_len, max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &[
        "APE", "APPLE", "APPLES", "MAPLE", "MAZE", "PLEA", "PLEAS", "PLEADS", "SAP", "SPA",
        "SPACE", "ZAP",
    ];

    fn find(
        letters: &str,
        forced: &[(&str, usize)],
        min_len: usize,
        max_len: usize,
    ) -> Result<Vec<String>> {
        let lexicon = Lexicon::from_words(WORDS)?;
        let letters: Letters = letters.parse()?;
        let forced = forced
            .iter()
            .map(|&(s, offset)| Ok((s.parse::<Word>()?[0], offset)))
            .collect::<Result<Vec<_>>>()?;
        let words = lexicon.enumerate(&letters, &forced, min_len, max_len);
        Ok(words.iter().map(Word::to_string).collect())
    }

    #[test]
    fn test_unconstrained() -> Result<()> {
        let words = find("APPLE?Z", &[], 1, 7)?;
        for word in &["APPLE", "APE", "PLEA", "APPLEs", "ZAP", "mAZE", "mAPLE"] {
            assert!(words.contains(&String::from(*word)), "{} not found", word);
        }
        assert!(!words.contains(&String::from("MAPLE")));
        assert!(words.iter().all(|word| word.len() <= 7));
        Ok(())
    }

    #[test]
    fn test_forced_first_letter() -> Result<()> {
        let words = find("APPLE?Z", &[("M", 0)], 1, 7)?;
        assert!(words.contains(&String::from("MAPLE")));
        assert!(words.contains(&String::from("MAZE")));
        assert!(!words.contains(&String::from("APPLE")));
        assert!(find("APPLE?Z", &[("M", 0), ("Z", 1)], 1, 7)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_forced_letters() -> Result<()> {
        let words = find("APPLE?Z", &[("D", 4), ("S", 5)], 4, 9)?;
        assert!(words.contains(&String::from("PLEADS")));
        assert!(words.contains(&String::from("pLEADS")));
        assert!(words.iter().all(|w| w.len() == 6 && w.ends_with("DS")));
        let words = find("APPLE?Z", &[("S", 0)], 1, 7)?;
        assert!(words.contains(&String::from("SAP")));
        assert!(words.contains(&String::from("SPAcE")));
        let words = find("APPLE?Z", &[("S", 4)], 1, 7)?;
        assert!(words.contains(&String::from("PLEAS")));
        assert!(!words.contains(&String::from("PLEA")));
        Ok(())
    }

    #[test]
    fn test_board_tiles_only() -> Result<()> {
        // all letters of SPA are on the board
        let words = find("", &[("S", 0), ("P", 1), ("A", 2)], 1, 7)?;
        assert!(words.is_empty());
        Ok(())
    }

    #[test]
    fn test_board_wildcard_is_kept() -> Result<()> {
        let words = find("PE", &[("a", 0)], 1, 7)?;
        assert_eq!(words, vec!["aPE"]);
        Ok(())
    }

    #[test]
    fn test_length_limits() -> Result<()> {
        let words = find("APPLES", &[], 4, 5)?;
        assert!(words.iter().all(|w| w.len() >= 4 && w.len() <= 5));
        assert!(words.contains(&String::from("APPLE")));
        assert!(!words.contains(&String::from("APPLES")));
        assert!(!words.contains(&String::from("APE")));
        Ok(())
    }
}
