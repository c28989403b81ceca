use crate::Error;
use log::info;
use std::collections::HashSet;
use std::fmt;

/// Words shorter than this are not valid on a boggle board.
pub const MIN_WORD_LEN: usize = 3;

/// The set of valid words, and the set of all their proper prefixes.
///
/// The prefix set is what keeps the grid search small: a path is only extended
/// while the letters along it are the start of some word.
/// A `Dictionary` does not change after it is built, and can be shared by any number of searches.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
    prefixes: HashSet<String>,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} prefixes>",
            self.word_count(),
            self.prefix_count()
        )
    }
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    ///
    /// Words are trimmed and uppercased. Words with fewer than [`MIN_WORD_LEN`] letters are dropped.
    /// ## Errors
    /// If no word is left after filtering. A list with only short words, like `["go"]`,
    /// is rejected as well, instead of giving a dictionary that finds nothing.
    /// ## Examples
    /// ```
    /// # use boggle_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "cats", "at"])?;
    /// assert_eq!(dictionary.word_count(), 2);
    /// assert!(dictionary.is_word("CATS"));
    /// assert!(dictionary.is_prefix("CAT"));
    /// assert!(!dictionary.is_word("AT"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Dictionary, Error> {
        let words: HashSet<String> = words
            .iter()
            .map(|word| word.as_ref().trim().to_uppercase())
            .filter(|word| word.chars().count() >= MIN_WORD_LEN)
            .collect();
        if words.is_empty() {
            return Err(Error::EmptyDictionary {
                min_len: MIN_WORD_LEN,
            });
        }
        let mut prefixes = HashSet::new();
        for word in &words {
            for (end, _) in word.char_indices().skip(1) {
                prefixes.insert(String::from(&word[..end]));
            }
        }
        let dictionary = Dictionary { words, prefixes };
        info!("{}", dictionary);
        Ok(dictionary)
    }

    /// Returns true if `word` is in the dictionary.
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns true if `prefix` is the start of a longer word in the dictionary.
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.prefixes.contains(prefix)
    }

    /// The number of words in the dictionary.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// The number of distinct proper prefixes.
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    /// Iterate over the words, in arbitrary order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
