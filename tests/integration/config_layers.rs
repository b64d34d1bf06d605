//! Configuration layering and proxy construction from configuration.

use agent_bridge::config::{BridgeConfig, ConfigLoader};
use agent_bridge::testing::RecordingTransport;
use agent_bridge::transport::Transport;
use agent_bridge::{BridgeError, Proxy, Value};
use std::fs;
use std::sync::Arc;

use crate::integration::with_isolated_env;

#[test]
fn test_global_file_is_overridden_by_workspace() {
    with_isolated_env(|temp_dir| {
        let global_dir = temp_dir.path().join("xdg").join("agent-bridge");
        fs::create_dir_all(&global_dir).unwrap();
        fs::write(
            global_dir.join("config.toml"),
            "[proxy]\nmanager_id = \"global-manager\"\nentry_point = \"GlobalQuery\"\n",
        )
        .unwrap();

        let workspace = temp_dir.path().join("ws");
        fs::create_dir_all(workspace.join("config")).unwrap();
        fs::write(
            workspace.join("config").join("config.toml"),
            "[proxy]\nmanager_id = \"workspace-manager\"\n",
        )
        .unwrap();

        let config = ConfigLoader::load(&workspace).unwrap();
        assert_eq!(config.proxy.manager_id, "workspace-manager");
        assert_eq!(config.proxy.entry_point, "GlobalQuery");
        assert_eq!(config.proxy.actor_name, "AgentQuery");
    });
}

#[test]
fn test_environment_supplies_manager_id() {
    with_isolated_env(|temp_dir| {
        std::env::set_var("AGENT_BRIDGE__PROXY__MANAGER_ID", "env-manager");
        let config = BridgeConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config.proxy.manager_id, "env-manager");

        let transport: Arc<dyn Transport<Value>> = Arc::new(RecordingTransport::new());
        let proxy = Proxy::from_config(&config.proxy, transport).unwrap();
        assert_eq!(proxy.manager_id(), "env-manager");
    });
}

#[test]
fn test_invalid_logging_section_is_reported() {
    with_isolated_env(|temp_dir| {
        fs::create_dir_all(temp_dir.path().join("config")).unwrap();
        fs::write(
            temp_dir.path().join("config").join("config.toml"),
            "[proxy]\nmanager_id = \"m\"\n\n[logging]\nformat = \"xml\"\n",
        )
        .unwrap();

        match BridgeConfig::load(temp_dir.path()) {
            Err(BridgeError::ConfigError(msg)) => assert!(msg.contains("Logging")),
            other => panic!("expected validation failure, got {:?}", other),
        }
    });
}
