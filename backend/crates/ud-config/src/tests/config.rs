use crate::tests::{EnvGuard, setup_config_dir, write_config};
use crate::{Config, ConfigError};

use googletest::assert_that;
use googletest::prelude::{anything, eq, none, ok};
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let _temp = setup_config_dir();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
    assert_that!(config.server.host.as_str(), eq(crate::DEFAULT_HOST));
    assert_that!(config.database.path.as_str(), eq("data.db"));
    assert_that!(config.client.api_url.as_str(), eq(crate::DEFAULT_API_URL));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_dir_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join(".ud");
    let _guard = EnvGuard::set("UD_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(
        &temp,
        r#"
              [server]
              port = 9000
              request_timeout_secs = 10

              [client]
              api_url = "http://localhost:9000"
          "#,
    );

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9000));
    assert_that!(config.server.request_timeout_secs, eq(10));
    assert_that!(config.client.api_url.as_str(), eq("http://localhost:9000"));
    // Untouched sections keep their defaults
    assert_that!(config.database.path.as_str(), eq("data.db"));
}

#[test]
#[serial]
fn given_invalid_toml_when_load_then_toml_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server\nport = ");

    // When
    let result = Config::load();

    // Then
    assert!(matches!(result, Err(ConfigError::Toml { .. })));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    write_config(&temp, "[server]\nport = 9000");
    let _port_guard = EnvGuard::set("UD_SERVER_PORT", "8888");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8888));
}

#[test]
#[serial]
fn given_multiple_env_overrides_when_load_then_all_apply() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("UD_SERVER_PORT", "7777");
    let _host = EnvGuard::set("UD_SERVER_HOST", "0.0.0.0");
    let _colored = EnvGuard::set("UD_LOG_COLORED", "false");
    let _level = EnvGuard::set("UD_LOG_LEVEL", "debug");
    let _file = EnvGuard::set("UD_LOG_FILE", "server.log");
    let _url = EnvGuard::set("UD_CLIENT_API_URL", "https://users.example.com");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(7777));
    assert_that!(config.server.host.as_str(), eq("0.0.0.0"));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(*config.logging.level, eq(log::LevelFilter::Debug));
    assert_eq!(config.logging.file.as_deref(), Some("server.log"));
    assert_that!(
        config.client.api_url.as_str(),
        eq("https://users.example.com")
    );
}

#[test]
#[serial]
fn given_unparseable_env_value_when_load_then_keeps_previous_value() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("UD_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

// =========================================================================
// Derived Paths
// =========================================================================

#[test]
#[serial]
fn given_config_dir_when_database_path_then_joined() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.database_path().unwrap(), temp.path().join("data.db"));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_inside_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("UD_LOG_FILE", "server.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.log_file_path().unwrap(),
        Some(temp.path().join("log").join("server.log"))
    );
}

#[test]
#[serial]
fn given_no_log_file_when_log_file_path_then_none() {
    let _temp = setup_config_dir();

    let config = Config::load().unwrap();

    assert_eq!(config.log_file_path().unwrap(), None);
}

#[test]
fn test_bind_addr_formats_host_and_port() {
    let config = Config::default();

    assert_eq!(config.bind_addr(), "127.0.0.1:5001");
}
