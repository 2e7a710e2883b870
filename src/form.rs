//! Form payload handed over by the UI layer

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::charset::{CharacterClass, ClassSet};
use crate::config::{GenerationConfig, validate_length};
use crate::error::{Error, Result};

/// Raw generator form: a length and the checked character-set ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorForm {
    pub length: i64,
    pub character_sets: Vec<String>,
}

impl GeneratorForm {
    /// Schema check: at least one non-empty character set id
    pub fn validate(&self) -> Result<()> {
        if self.character_sets.iter().any(|id| !id.is_empty()) {
            Ok(())
        } else {
            Err(Error::EmptyCharacterPool)
        }
    }

    /// Convert to a GenerationConfig; unknown ids are skipped, so the class
    /// set may still be empty after `validate` passed
    pub fn into_config(self) -> Result<GenerationConfig> {
        let length = validate_length(self.length)?;
        let mut classes = ClassSet::new();
        for id in &self.character_sets {
            match id.parse::<CharacterClass>() {
                Ok(class) => {
                    classes.insert(class);
                }
                Err(err) => warn!(%err, "ignoring character set"),
            }
        }
        Ok(GenerationConfig::new(length, classes))
    }
}
