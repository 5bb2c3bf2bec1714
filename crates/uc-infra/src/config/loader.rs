//! # Configuration Loader / 配置加载器
//!
//! Reads the TOML file into [`AppConfig`] and layers environment overrides on
//! top. Missing keys keep their defaults. Validation is left to
//! [`AppConfig::validate`].

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};
use uc_core::config::AppConfig;

pub const ENV_SERVER_URL: &str = "UNICLIP_SERVER_URL";
pub const ENV_DEVICE_ID: &str = "UNICLIP_DEVICE_ID";

const APP_DIR_NAME: &str = "uniclip";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML for
/// [`AppConfig`].
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config: AppConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;
    debug!(path = %config_path.display(), "Loaded config file");
    Ok(config)
}

/// `<config_dir>/uniclip/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the explicit file if given, else the default file if it exists,
/// else defaults.
///
/// An explicit path that does not exist is an error; a missing default file
/// is not.
pub fn load_config_or_default(explicit: Option<&Path>) -> anyhow::Result<AppConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config(&path),
        Some(path) => {
            info!(path = %path.display(), "No config file found, using defaults");
            Ok(AppConfig::default())
        }
        None => {
            info!("No config directory on this platform, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Apply `UNICLIP_SERVER_URL` / `UNICLIP_DEVICE_ID` from the process
/// environment. Empty values are ignored.
pub fn apply_env_overrides(config: &mut AppConfig) {
    apply_overrides_from(config, |key| std::env::var(key).ok());
}

fn apply_overrides_from(config: &mut AppConfig, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(url) = non_empty(ENV_SERVER_URL) {
        debug!(url = %url, "Server url overridden from environment");
        config.server.url = url;
    }
    if let Some(id) = non_empty(ENV_DEVICE_ID) {
        debug!(device_id = %id, "Device id overridden from environment");
        config.device.id = Some(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_config_reads_all_sections() {
        let file = write_config(
            r#"
            [server]
            url = "http://clipboard.lan:9000"
            request_timeout_ms = 1500

            [sync]
            clipboard_poll_interval_ms = 500
            view_poll_interval_ms = 3000

            [device]
            id = "desktop-office"
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.server.url, "http://clipboard.lan:9000");
        assert_eq!(config.server.request_timeout_ms, 1500);
        assert_eq!(config.sync.clipboard_poll_interval_ms, 500);
        assert_eq!(config.sync.view_poll_interval_ms, 3000);
        assert_eq!(config.device.id.as_deref(), Some("desktop-office"));
    }

    #[test]
    fn test_load_config_keeps_defaults_for_missing_keys() {
        let file = write_config(
            r#"
            [server]
            url = "http://other:8080"
        "#,
        );

        let config = load_config(file.path()).unwrap();

        assert_eq!(config.server.url, "http://other:8080");
        assert_eq!(config.sync, AppConfig::default().sync);
        assert_eq!(config.device.id, None);
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let file = write_config("[server\nurl = ");

        let err = load_config(file.path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        assert!(load_config_or_default(Some(&missing)).is_err());
    }

    #[test]
    fn test_env_overrides_replace_file_values() {
        let mut config = AppConfig::default();
        let env: HashMap<&str, &str> = HashMap::from([
            (ENV_SERVER_URL, "http://from-env:1234"),
            (ENV_DEVICE_ID, "desktop-env"),
        ]);

        apply_overrides_from(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.url, "http://from-env:1234");
        assert_eq!(config.device.id.as_deref(), Some("desktop-env"));
    }

    #[test]
    fn test_blank_env_values_are_ignored() {
        let mut config = AppConfig::default();

        apply_overrides_from(&mut config, |_| Some("  ".to_string()));

        assert_eq!(config, AppConfig::default());
    }
}
