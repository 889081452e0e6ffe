//! # Settings
//!
//! Defaults for a design session: the wind code constants and the initial
//! values of the wizard's parameter forms. Settings load from a JSON file in
//! which every field is optional.
//!
//! ```json
//! {
//!   "wind": { "roughness_length_m": 0.05, "c_force": 1.3 },
//!   "advanced": { "height_m": 120.0 }
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::wind::WindCodeConstants;
use crate::errors::{CalcError, CalcResult};
use crate::ride::{AdvancedParams, BasicParams};

/// Session defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Wind code constants used by every wind calculation
    pub wind: WindCodeConstants,
    /// Initial basic parameters
    pub basic: BasicParams,
    /// Initial advanced parameters
    pub advanced: AdvancedParams,
}

impl Settings {
    /// Parse settings from JSON text.
    pub fn from_json(json: &str) -> CalcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> CalcResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            CalcError::file_error("read", path.display().to_string(), e.to_string())
        })?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

        debug!(path = %path.display(), "settings loaded");
        Ok(settings)
    }

    /// Load from `path` when given, otherwise use the defaults.
    pub fn load_or_default(path: Option<&Path>) -> CalcResult<Self> {
        match path {
            Some(path) => Settings::load(path),
            None => Ok(Settings::default()),
        }
    }

    /// Pretty JSON for writing an example settings file
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
