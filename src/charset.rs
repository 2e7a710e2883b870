//! Character classes and the sampling pool they resolve to

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// A named group of characters with a fixed alphabet
///
/// Ordering follows the pool order: uppercase first, symbols last
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Numbers,
    Symbols,
}

/// Selected classes
pub type ClassSet = BTreeSet<CharacterClass>;

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Uppercase,
        CharacterClass::Lowercase,
        CharacterClass::Numbers,
        CharacterClass::Symbols,
    ];

    /// Identifier used by forms and the settings file
    pub fn id(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Numbers => "numbers",
            CharacterClass::Symbols => "symbols",
        }
    }

    /// Checkbox label
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => "Uppercase",
            CharacterClass::Lowercase => "Lowercase",
            CharacterClass::Numbers => "Numbers",
            CharacterClass::Symbols => "Symbols",
        }
    }

    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CharacterClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterClass::ALL
            .into_iter()
            .find(|class| class.id() == s)
            .ok_or_else(|| Error::UnknownCharacterClass(s.to_string()))
    }
}

/// Every class selected
pub fn all_classes() -> ClassSet {
    CharacterClass::ALL.into_iter().collect()
}

/// Concatenate the alphabets of the selected classes in class order
///
/// Shared characters are kept twice (weighted higher); an empty selection gives an empty pool
pub fn resolve(selected: &ClassSet) -> String {
    let mut pool = String::new();
    for class in CharacterClass::ALL {
        if selected.contains(&class) {
            pool.push_str(class.alphabet());
        }
    }
    pool
}
