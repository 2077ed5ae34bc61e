//! Suggestion settings, loadable from YAML.
//!
//! ```yaml
//! max_results: 5
//! prefix: "tag:"
//! header: "Search by Tag"
//! max_width: 40
//! ```
//!
//! Every field is optional; missing fields keep their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::search::{MAX_SUGGESTIONS, TAG_PREFIX, TagFilter};

pub const DEFAULT_HEADER: &str = "Search by Tag";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SuggestConfig {
    pub max_results: usize,
    pub prefix: String,
    pub header: String,
    /// Rows wider than this many terminal columns are truncated.
    pub max_width: Option<usize>,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_results: MAX_SUGGESTIONS,
            prefix: TAG_PREFIX.to_string(),
            header: DEFAULT_HEADER.to_string(),
            max_width: None,
        }
    }
}

impl SuggestConfig {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded suggestion config");
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, LoadError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LoadError> {
        if self.prefix.is_empty() {
            return Err(LoadError::Validation("prefix must not be empty".to_string()));
        }
        if self.prefix.contains(' ') {
            return Err(LoadError::Validation(format!(
                "prefix {:?} must not contain spaces",
                self.prefix
            )));
        }
        if self.max_width == Some(0) {
            return Err(LoadError::Validation("max_width must be positive".to_string()));
        }
        Ok(())
    }

    pub fn tag_filter(&self) -> TagFilter {
        TagFilter::new()
            .with_max_results(self.max_results)
            .with_prefix(self.prefix.clone())
    }
}
