//! Loading survey definitions from TOML or JSON files.
//!
//! ```toml
//! title = "Customer Feedback"
//!
//! [[questions]]
//! id = 1
//! type = "multiple-choice"
//! prompt = "How did you hear about us?"
//! options = ["Social Media", "Other"]
//! required = true
//! follow_up = { "Other" = "Where exactly?" }
//! ```

use std::path::{Path, PathBuf};

use crate::SurveyDefinition;

/// Error type for loading survey definitions.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid TOML survey definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid JSON survey definition: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported survey file '{0}' (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("Question id {0} is used more than once")]
    DuplicateId(u32),
}

/// Parse a survey definition from TOML text.
pub fn from_toml_str(text: &str) -> Result<SurveyDefinition, ConfigError> {
    checked(toml::from_str(text)?)
}

/// Parse a survey definition from JSON text.
pub fn from_json_str(text: &str) -> Result<SurveyDefinition, ConfigError> {
    checked(serde_json::from_str(text)?)
}

fn checked(definition: SurveyDefinition) -> Result<SurveyDefinition, ConfigError> {
    match definition.duplicate_id() {
        Some(id) => Err(ConfigError::DuplicateId(id)),
        None => Ok(definition),
    }
}

/// Load a survey definition, picking the format from the file extension.
pub fn load(path: impl AsRef<Path>) -> Result<SurveyDefinition, ConfigError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let parse: fn(&str) -> Result<SurveyDefinition, ConfigError> = match extension.as_deref() {
        Some("toml") => from_toml_str,
        Some("json") => from_json_str,
        _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    };

    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let definition = parse(&text)?;

    tracing::debug!(
        path = %path.display(),
        title = %definition.title,
        questions = definition.len(),
        "loaded survey definition"
    );
    Ok(definition)
}
