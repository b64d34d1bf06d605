//! Configuration loading entry point.

use super::merge::merge_policy;
use super::sources::{environment, global_file, workspace_file};
use super::BridgeConfig;
use config::{ConfigError, File};
use std::path::Path;

/// Loads [`BridgeConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace.
    ///
    /// Precedence (highest last): built-in defaults, global config file,
    /// `config/config.toml`, `config/{AGENT_BRIDGE_ENV}.toml`, and
    /// `AGENT_BRIDGE__*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<BridgeConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = environment::add_to_builder(builder);
        builder.build()?.try_deserialize()
    }

    /// Load configuration from a single file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<BridgeConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Defaults only.
    pub fn default() -> BridgeConfig {
        BridgeConfig::default()
    }
}
