//! Match settings collaborator: the minimum threshold a posting must reach to be shown.

pub mod handlers;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::matching::DEFAULT_MIN_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_threshold", alias = "minMatchThreshold")]
    pub min_match_threshold: u32,
}

fn default_threshold() -> u32 {
    DEFAULT_MIN_THRESHOLD
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_match_threshold: default_threshold(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsPatch {
    #[serde(alias = "minMatchThreshold")]
    pub min_match_threshold: Option<u32>,
}

impl Settings {
    pub fn apply(&mut self, patch: SettingsPatch) -> Result<(), AppError> {
        if let Some(threshold) = patch.min_match_threshold {
            self.min_match_threshold = validate_threshold(threshold)?;
        }
        Ok(())
    }
}

/// Match scores live in 0–100, so a larger threshold can never be met.
pub fn validate_threshold(threshold: u32) -> Result<u32, AppError> {
    if threshold > 100 {
        return Err(AppError::Validation(format!(
            "min_match_threshold must be between 0 and 100, got {threshold}"
        )));
    }
    Ok(threshold)
}
