use crate::finder::{find_words, FoundWords};
use crate::{Dictionary, Grid};

/// Points per word length. Words of 8 letters or more score the last entry.
const POINTS: [u32; 9] = [0, 0, 0, 1, 1, 2, 3, 5, 11];

/// The points for a word of `len` letters.
/// ## Examples
/// ```
/// use boggle_solver::word_score;
/// assert_eq!(word_score(3), 1);
/// assert_eq!(word_score(7), 5);
/// assert_eq!(word_score(16), 11);
/// ```
pub fn word_score(len: usize) -> u32 {
    POINTS[len.min(POINTS.len() - 1)]
}

/// The total points of the `found` words. Only words in `dictionary` count.
pub fn total_score(found: &FoundWords, dictionary: &Dictionary) -> u32 {
    found
        .iter()
        .filter(|word| dictionary.is_word(word))
        .map(|word| word_score(word.chars().count()))
        .sum()
}

/// The total points of all words on `grid`.
pub fn grid_score(grid: &Grid, dictionary: &Dictionary) -> u32 {
    total_score(&find_words(grid, dictionary), dictionary)
}
