//! notice-config
//!
//! Limits applied by the notice registry, loaded from YAML and optionally
//! overridden from the environment.

pub mod config;

pub use config::{RegistryConfig, ENV_MAX_MESSAGES_PER_CATEGORY, ENV_MAX_MESSAGE_LENGTH};
