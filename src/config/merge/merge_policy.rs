//! Merge rules: defaults, override order, conflict handling.

use crate::config::{DEFAULT_ACTOR_NAME, DEFAULT_ENTRY_POINT};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("proxy.manager_id", "")?
        .set_default("proxy.actor_name", DEFAULT_ACTOR_NAME)?
        .set_default("proxy.entry_point", DEFAULT_ENTRY_POINT)?
        .set_default("logging.level", "info")
}
