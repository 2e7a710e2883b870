use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::charset::{CharacterClass, ClassSet, all_classes};
use crate::config::{DEFAULT_LENGTH, GenerationConfig, MAX_LENGTH, MIN_LENGTH};
use crate::error::Result;
use crate::paths::settings_path;

/// User preferences for the generator window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Length used on startup (1-50, default 8)
    pub default_length: usize,
    /// Classes selected on startup (default all four)
    pub default_classes: Vec<CharacterClass>,
    /// Clipboard clear timeout in seconds (10-120, default 30)
    pub clipboard_clear_seconds: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_length: DEFAULT_LENGTH,
            default_classes: CharacterClass::ALL.to_vec(),
            clipboard_clear_seconds: 30,
        }
    }
}

impl AppSettings {
    /// Load settings from the data directory, or return defaults if missing or unreadable
    pub fn load() -> Self {
        let path = settings_path();
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(%err, path = %path.display(), "ignoring unreadable settings");
                Self::default()
            }
        }
    }

    /// Load settings from a specific file, clamping out-of-range values
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        let mut settings: AppSettings = serde_json::from_str(&data)?;
        settings.set_default_length(settings.default_length);
        settings.set_clipboard_timeout(settings.clipboard_clear_seconds);
        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Save settings to the data directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    /// Validate and clamp the startup length to the slider range
    pub fn set_default_length(&mut self, length: usize) {
        self.default_length = length.clamp(MIN_LENGTH, MAX_LENGTH);
    }

    /// Validate and clamp clipboard timeout to allowed range
    pub fn set_clipboard_timeout(&mut self, seconds: u32) {
        self.clipboard_clear_seconds = seconds.clamp(10, 120);
    }

    /// Remember a config as the startup defaults
    pub fn remember(&mut self, config: &GenerationConfig) {
        self.set_default_length(config.length);
        self.default_classes = config.classes.iter().copied().collect();
    }

    /// Config for the first generation; an empty class list falls back to all classes
    pub fn initial_config(&self) -> GenerationConfig {
        let mut classes: ClassSet = self.default_classes.iter().copied().collect();
        if classes.is_empty() {
            classes = all_classes();
        }
        GenerationConfig::new(self.default_length.clamp(MIN_LENGTH, MAX_LENGTH), classes)
    }

    /// Get clipboard timeout as u64 for comparison with Instant
    pub fn clipboard_timeout_u64(&self) -> u64 {
        self.clipboard_clear_seconds as u64
    }
}
