use crate::error::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

/// Code of the two letter `QU` tile. Codes 1..=26 are `A`..`Z`.
const QU: u8 = 27;

const TOKENS: [&str; 28] = [
    "", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
    "S", "T", "U", "V", "W", "X", "Y", "Z", "QU",
];

/// The content of one grid cell: a letter `A`..`Z`, or the two letter tile `QU`.
///
/// A `Tile` is always valid; there is no way to build one for other tokens.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Tile(u8);

impl Tile {
    /// The `QU` tile.
    pub const QU: Tile = Tile(QU);

    fn new(code: u8) -> Tile {
        assert!((1..=QU).contains(&code), "invalid tile code {}", code);
        Tile(code)
    }

    /// Create a tile from an ascii letter.
    /// With `q_substitution` a `Q` becomes the `QU` tile.
    /// Returns `None` if `letter` is not in `A`..`Z` (case insensitive).
    /// ## Examples
    /// ```
    /// use boggle_solver::Tile;
    /// assert_eq!(Tile::from_letter('q', true), Some(Tile::QU));
    /// assert_eq!(Tile::from_letter('q', false).unwrap().as_str(), "Q");
    /// assert_eq!(Tile::from_letter('?', true), None);
    /// ```
    pub fn from_letter(letter: char, q_substitution: bool) -> Option<Tile> {
        let letter = letter.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }
        if q_substitution && letter == 'Q' {
            return Some(Tile::QU);
        }
        Some(Tile::new(letter as u8 - b'A' + 1))
    }

    /// All 27 tiles: `A`..`Z` followed by `QU`.
    pub fn all() -> impl Iterator<Item = Tile> {
        (1..=QU).map(Tile::new)
    }

    /// The letters on this tile.
    pub fn as_str(&self) -> &'static str {
        TOKENS[self.0 as usize]
    }

    /// Number of letters this tile adds to a word (1, or 2 for `QU`).
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    pub fn is_qu(&self) -> bool {
        self.0 == QU
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tile({})", self.as_str())
    }
}

impl TryFrom<char> for Tile {
    type Error = Error;
    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Tile::from_letter(letter, false).ok_or_else(|| Error::InvalidTile(letter.to_string()))
    }
}

impl TryFrom<String> for Tile {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Tile> for String {
    fn from(tile: Tile) -> String {
        String::from(tile.as_str())
    }
}

impl FromStr for Tile {
    type Err = Error;

    /// Parse `"A"`..`"Z"` or `"QU"`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_ascii_uppercase();
        TOKENS[1..]
            .iter()
            .position(|&token| token == upper)
            .map(|i| Tile::new(i as u8 + 1))
            .ok_or_else(|| Error::InvalidTile(String::from(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_letter() {
        assert_eq!(Tile::from_letter('a', false).unwrap().as_str(), "A");
        assert_eq!(Tile::from_letter('Z', true).unwrap().as_str(), "Z");
        assert_eq!(Tile::from_letter('Q', true), Some(Tile::QU));
        assert_eq!(Tile::from_letter('Q', false).unwrap().len(), 1);
        assert_eq!(Tile::from_letter('3', true), None);
        assert_eq!(Tile::from_letter('é', true), None);
    }

    #[test]
    fn test_parse() -> Result<(), Error> {
        assert_eq!("qu".parse::<Tile>()?, Tile::QU);
        assert_eq!("E".parse::<Tile>()?.as_str(), "E");
        assert!("QX".parse::<Tile>().is_err());
        assert!("".parse::<Tile>().is_err());
        Ok(())
    }

    #[test]
    fn test_all() {
        let tiles: Vec<Tile> = Tile::all().collect();
        assert_eq!(tiles.len(), 27);
        assert_eq!(tiles[0].as_str(), "A");
        assert!(tiles[26].is_qu());
        assert_eq!(tiles[26].len(), 2);
    }

    #[test]
    #[should_panic(expected = "InvalidTile(\"1\")")]
    fn test_invalid_char() {
        Tile::try_from('1').unwrap();
    }
}
