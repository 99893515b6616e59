//! Per-project settings store.
//!
//! The configuration is persisted to `.yo-rc.json` in the destination,
//! keyed under the generator name with the same field names the rest of
//! the pipeline consumes, plus a `setupCompleted` marker set at the end of
//! a successful run. A second invocation detects the marker and refuses to
//! overwrite the finished project.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::config::FinalConfiguration;
use crate::domain::error::AppError;

pub const SETTINGS_FILE: &str = ".yo-rc.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(rename = "generator-easy-ui5")]
    entry: Entry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Entry {
    #[serde(flatten)]
    config: FinalConfiguration,
    #[serde(rename = "setupCompleted", default)]
    setup_completed: bool,
}

impl Settings {
    pub fn new(config: &FinalConfiguration) -> Self {
        Self { entry: Entry { config: config.clone(), setup_completed: false } }
    }

    pub fn config(&self) -> &FinalConfiguration {
        &self.entry.config
    }

    pub fn setup_completed(&self) -> bool {
        self.entry.setup_completed
    }

    pub fn mark_setup_completed(&mut self) {
        self.entry.setup_completed = true;
    }

    /// Write the store to `<dest>/.yo-rc.json`.
    pub fn save(&self, dest: &Path) -> Result<(), AppError> {
        let path = dest.join(SETTINGS_FILE);
        let body = serde_json::to_string_pretty(self).map_err(|e| AppError::MalformedSettings {
            path: path.display().to_string(),
            details: e.to_string(),
        })?;
        fs::write(path, body)?;
        Ok(())
    }

    /// Load the store from `<dest>/.yo-rc.json`, if present.
    pub fn load(dest: &Path) -> Result<Option<Settings>, AppError> {
        let path = dest.join(SETTINGS_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let body = fs::read_to_string(&path)?;
        let settings =
            serde_json::from_str(&body).map_err(|e| AppError::MalformedSettings {
                path: path.display().to_string(),
                details: e.to_string(),
            })?;
        Ok(Some(settings))
    }
}

/// Whether a prior run already completed setup in `dest`.
pub fn setup_completed(dest: &Path) -> Result<bool, AppError> {
    Ok(Settings::load(dest)?.is_some_and(|settings| settings.setup_completed()))
}
