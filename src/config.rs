//! Configuration System
//!
//! Layered configuration for the agent proxy and logging. Sources are merged by
//! the `config` crate; see [`ConfigLoader::load`] for precedence.

use crate::error::BridgeError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Actor the proxy asks the transport for.
pub const DEFAULT_ACTOR_NAME: &str = "AgentQuery";
/// Entry point invoked on the agent actor.
pub const DEFAULT_ENTRY_POINT: &str = "Query";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BridgeConfig {
    #[serde(default)]
    pub proxy: ProxyConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where queries go.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Identifier of the remote manager every envelope is addressed to
    #[serde(default)]
    pub manager_id: String,

    #[serde(default = "default_actor_name")]
    pub actor_name: String,

    #[serde(default = "default_entry_point")]
    pub entry_point: String,
}

fn default_actor_name() -> String {
    DEFAULT_ACTOR_NAME.to_string()
}

fn default_entry_point() -> String {
    DEFAULT_ENTRY_POINT.to_string()
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            manager_id: String::new(),
            actor_name: default_actor_name(),
            entry_point: default_entry_point(),
        }
    }
}

impl ProxyConfig {
    pub fn new(manager_id: impl Into<String>) -> Self {
        Self {
            manager_id: manager_id.into(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.manager_id.trim().is_empty() {
            return Err("Manager id cannot be empty".to_string());
        }
        if self.actor_name.trim().is_empty() {
            return Err("Actor name cannot be empty".to_string());
        }
        if self.entry_point.trim().is_empty() {
            return Err("Entry point cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Proxy(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Proxy(msg) => write!(f, "Proxy: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl BridgeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.proxy.validate() {
            errors.push(ValidationError::Proxy(e));
        }

        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Load and validate configuration for a workspace.
    pub fn load(workspace_root: &std::path::Path) -> Result<Self, BridgeError> {
        let config = ConfigLoader::load(workspace_root)?;
        config.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            BridgeError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })?;
        Ok(config)
    }
}
