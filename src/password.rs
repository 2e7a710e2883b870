use rand::Rng;

use crate::error::{Error, Result};

/// Source of uniform indices, injected so tests can seed or script it
pub trait RandomSource {
    /// Index drawn uniformly from `0..upper` (`upper` is never zero)
    fn index_below(&mut self, upper: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn index_below(&mut self, upper: usize) -> usize {
        self.random_range(0..upper)
    }
}

/// Generates a password of exactly `length` characters drawn uniformly from `alphabet`
///
/// An empty alphabet with a positive length is a caller bug and returns
/// GenerationPrecondition instead of a partial password
pub fn generate_password<R: RandomSource + ?Sized>(
    length: usize,
    alphabet: &str,
    rng: &mut R,
) -> Result<String> {
    // Convert to vector for indexing
    let chars: Vec<char> = alphabet.chars().collect();

    if chars.is_empty() {
        if length == 0 {
            return Ok(String::new());
        }
        return Err(Error::GenerationPrecondition { length });
    }

    Ok((0..length)
        .map(|_| chars[rng.index_below(chars.len())])
        .collect())
}
