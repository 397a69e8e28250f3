//! Registry configuration.
//!
//! Both limits default to "unlimited". A long-lived registry shared across
//! requests should set `max_messages_per_category` so a caller that never
//! drains it cannot grow it without bound.
//!
//! ```yaml
//! max_messages_per_category: 50
//! max_message_length: 500
//! ```

use std::env;
use std::path::Path;

use notice_core::error::{NoticeError, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Environment variable overriding [`RegistryConfig::max_messages_per_category`].
pub const ENV_MAX_MESSAGES_PER_CATEGORY: &str = "NOTICE_MAX_MESSAGES_PER_CATEGORY";
/// Environment variable overriding [`RegistryConfig::max_message_length`].
pub const ENV_MAX_MESSAGE_LENGTH: &str = "NOTICE_MAX_MESSAGE_LENGTH";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum number of messages a single category may hold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_messages_per_category: Option<usize>,

    /// Maximum length of a stored message, in characters, after trimming
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_message_length: Option<usize>,
}

impl RegistryConfig {
    /// Parses a YAML document. A blank document yields the defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&contents)?;
        debug!(path = %path.display(), ?config, "Loaded registry config");
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Zero limits would make every `add` fail, so they are rejected.
    pub fn validate(&self) -> Result<()> {
        if self.max_messages_per_category == Some(0) {
            return Err(NoticeError::Config(
                "max_messages_per_category must be at least 1".to_string(),
            ));
        }
        if self.max_message_length == Some(0) {
            return Err(NoticeError::Config(
                "max_message_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Applies `NOTICE_MAX_MESSAGES_PER_CATEGORY` and `NOTICE_MAX_MESSAGE_LENGTH`
    /// from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| env::var(key).ok())
    }

    /// Applies overrides from an arbitrary key lookup. Unset or blank values
    /// leave the current setting untouched.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(limit) = parse_limit(&lookup, ENV_MAX_MESSAGES_PER_CATEGORY)? {
            debug!(limit, "Overriding max_messages_per_category");
            self.max_messages_per_category = Some(limit);
        }
        if let Some(limit) = parse_limit(&lookup, ENV_MAX_MESSAGE_LENGTH)? {
            debug!(limit, "Overriding max_message_length");
            self.max_message_length = Some(limit);
        }

        self.validate()?;
        Ok(self)
    }
}

fn parse_limit<F>(lookup: &F, key: &str) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    raw.parse::<usize>().map(Some).map_err(|_| {
        warn!(key, value = raw, "Invalid configuration override");
        NoticeError::Config(format!("{} must be a positive integer, got '{}'", key, raw))
    })
}
