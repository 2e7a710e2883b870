//! Generation parameters and their bounds

use crate::charset::{ClassSet, all_classes};
use crate::error::{Error, Result};

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 50;
pub const DEFAULT_LENGTH: usize = 8;

/// Length plus selected classes, rebuilt on every interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    pub length: usize,
    pub classes: ClassSet,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: all_classes(),
        }
    }
}

impl GenerationConfig {
    pub fn new(length: usize, classes: ClassSet) -> Self {
        Self { length, classes }
    }
}

pub fn length_in_bounds(length: usize) -> bool {
    (MIN_LENGTH..=MAX_LENGTH).contains(&length)
}

/// Check a raw (possibly negative) length against the bounds
pub fn validate_length(length: i64) -> Result<usize> {
    usize::try_from(length)
        .ok()
        .filter(|&len| length_in_bounds(len))
        .ok_or(Error::InvalidLength {
            length,
            min: MIN_LENGTH,
            max: MAX_LENGTH,
        })
}

// ------------------ TESTS ------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.length, 8);
        assert_eq!(config.classes.len(), 4);
    }

    #[test]
    fn test_length_bounds() {
        assert!(!length_in_bounds(0));
        assert!(length_in_bounds(1));
        assert!(length_in_bounds(50));
        assert!(!length_in_bounds(51));
    }

    #[test]
    fn test_validate_length() {
        assert_eq!(validate_length(12).unwrap(), 12);
        assert!(matches!(
            validate_length(-3),
            Err(Error::InvalidLength { length: -3, .. })
        ));
        assert!(matches!(
            validate_length(51),
            Err(Error::InvalidLength { length: 51, min: 1, max: 50 })
        ));
    }
}
