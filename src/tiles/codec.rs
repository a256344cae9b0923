use super::{
    codes::{Code, ALPHABET_LEN, BLANK, EMPTY, IS_WILDCARD, LETTER_MASK},
    DIM,
};
use crate::error::Error;

/// Translate from string to tile codes and vice versa.
/// Each scrabble tile is translated to a code.
/// - 0: No tile (empty square), `.` or ` `
/// - 1 .. 26: `A` .. `Z`
/// - 64: Blank tile `?` (unassigned)
/// - 65 .. 90: `a` .. `z` (blank tile assigned to `A`..`Z`)
///
/// Letter case is only used in text: inside the crate a played blank is a
/// [`Tile`](crate::Tile) with its `wildcard` flag set.
#[derive(Debug, Clone, Copy, Default)]
pub struct Codec;

impl Codec {
    /// Encode a single character, or `None` if it is not a valid token.
    pub fn encode_char(ch: char) -> Option<Code> {
        match ch {
            'A'..='Z' => Some(ch as u8 - b'A' + 1),
            'a'..='z' => Some((ch as u8 - b'a' + 1) | IS_WILDCARD),
            '?' => Some(BLANK),
            '.' | ' ' => Some(EMPTY),
            _ => None,
        }
    }

    /// Decode a single code. Codes that are not produced by the codec decode to `'\u{FFFD}'`.
    pub fn decode_code(code: Code) -> char {
        let label = code & LETTER_MASK;
        match code {
            EMPTY => '.',
            BLANK => '?',
            _ if (1..=ALPHABET_LEN).contains(&label) => {
                let ch = (b'A' + label - 1) as char;
                if code & IS_WILDCARD != 0 {
                    ch.to_ascii_lowercase()
                } else if code == label {
                    ch
                } else {
                    char::REPLACEMENT_CHARACTER
                }
            }
            _ => char::REPLACEMENT_CHARACTER,
        }
    }

    /// Encode string, and return a list of `u8` codes.
    /// ## Errors
    /// An error is returned if the string is longer than 16 characters, or
    /// contains a character that can not be encoded.
    /// ## Examples
    /// ```
    /// use scrabble_solver::{Codec, Error};
    /// let codes = Codec::encode("AZaz. ?")?;
    /// assert_eq!(codes, vec![1, 26, 65, 90, 0, 0, 64]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn encode(word: &str) -> Result<Vec<Code>, Error> {
        if word.chars().count() > DIM {
            return Err(Error::EncodeStringTooLong(String::from(word)));
        }
        word.chars()
            .map(|ch| Self::encode_char(ch).ok_or_else(|| Error::EncodeInvalidToken(ch.into())))
            .collect()
    }

    /// Decode codes, and return the result as `String`.
    /// ## Examples
    /// ```
    /// use scrabble_solver::Codec;
    /// assert_eq!(Codec::decode(&[1, 26, 65, 90, 0, 64]), "AZaz.?");
    /// ```
    pub fn decode(codes: &[Code]) -> String {
        codes.iter().map(|&code| Self::decode_code(code)).collect()
    }
}
