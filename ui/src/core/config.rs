//! Page-level configuration shared by the record views.

use dioxus::prelude::*;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid URL `{0}`: expected an absolute path or an http(s) URL")]
    InvalidUrl(String),
}

/// Where the record page links to. Provided once near the root with
/// `use_context_provider`; components fall back to [`RecordConfig::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecordConfig {
    /// Target of the "Back to My Records" link.
    pub records_url: String,
    /// Origin prefixed to public share links. Empty keeps links site-relative.
    pub share_base_url: String,
}

impl Default for RecordConfig {
    fn default() -> Self {
        Self {
            records_url: "/records/".to_string(),
            share_base_url: String::new(),
        }
    }
}

impl RecordConfig {
    pub fn from_json(src: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(src)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !is_link_target(&self.records_url) {
            return Err(ConfigError::InvalidUrl(self.records_url.clone()));
        }
        if !self.share_base_url.is_empty() && !is_link_target(&self.share_base_url) {
            return Err(ConfigError::InvalidUrl(self.share_base_url.clone()));
        }
        Ok(())
    }
}

fn is_link_target(url: &str) -> bool {
    url.starts_with('/') || url.starts_with("https://") || url.starts_with("http://")
}

/// Read the provided config, or defaults when no provider is mounted.
pub fn use_record_config() -> RecordConfig {
    try_use_context::<RecordConfig>().unwrap_or_default()
}
