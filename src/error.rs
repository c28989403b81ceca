use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// The number of tiles is zero or not a perfect square
    #[error("Invalid grid size: {0} tiles is not a positive perfect square")]
    InvalidGridSize(usize),

    /// No word in the word list is long enough
    #[error("Dictionary is empty: no words with at least {min_len} letters")]
    EmptyDictionary { min_len: usize },

    /// The token is not one of `A`..`Z` or `QU`
    #[error("Invalid tile \"{0}\"")]
    InvalidTile(String),

    /// Tile pool without any weight
    #[error("Tile pool has no tiles to draw from")]
    EmptyTilePool,
}
