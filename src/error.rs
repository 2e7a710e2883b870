use thiserror::Error;

/// Errors surfaced by the generator core and its settings store.
#[derive(Debug, Error)]
pub enum Error {
    /// Requested length lies outside the accepted bounds.
    #[error("password length {length} is outside {min}..={max}")]
    InvalidLength { length: i64, min: usize, max: usize },

    /// No character class selected, or the selection resolved to an empty pool.
    #[error("Please select at least one character set")]
    EmptyCharacterPool,

    /// Asked to draw characters from an empty alphabet.
    #[error("cannot draw {length} characters from an empty alphabet")]
    GenerationPrecondition { length: usize },

    /// Identifier that does not name any character class.
    #[error("unknown character set: {0}")]
    UnknownCharacterClass(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
