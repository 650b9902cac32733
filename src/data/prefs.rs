//! Persisted user preferences (color scheme)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::DataError;
use crate::model::ColorScheme;

const APP_DIR: &str = "folio";
const FILE_NAME: &str = "preferences.json";

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(rename = "colorScheme", default)]
    color_scheme: ColorScheme,
}

/// A single-key preference file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferenceStore {
    path: PathBuf,
}

impl PreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/folio/preferences.json`, if the platform has a config dir
    pub fn default_location() -> Option<Self> {
        dirs::config_dir().map(|dir| Self::new(dir.join(APP_DIR).join(FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored scheme; a missing file reads as the default
    pub fn try_load(&self) -> Result<ColorScheme, DataError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(ColorScheme::default()),
            Err(e) => return Err(e.into()),
        };
        let prefs: Preferences = serde_json::from_str(&contents)?;
        Ok(prefs.color_scheme)
    }

    /// Read the stored scheme, falling back to the default on any error
    pub fn load(&self) -> ColorScheme {
        self.try_load().unwrap_or_else(|e| {
            log::warn!(
                "ignoring unreadable preferences at {}: {}",
                self.path.display(),
                e
            );
            ColorScheme::default()
        })
    }

    pub fn save(&self, color_scheme: ColorScheme) -> Result<(), DataError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&Preferences { color_scheme })?;
        fs::write(&self.path, json)?;
        log::debug!("saved color scheme {} to {}", color_scheme, self.path.display());
        Ok(())
    }
}
