use std::path::PathBuf;

use clap::Parser;
use uc_core::AppConfig;

/// Command line interface for the clipboard sync client
#[derive(Debug, Default, Parser)]
#[command(
    name = "uniclip",
    version,
    about = "Sync the local clipboard with a shared clipboard history server",
    long_about = "Watches the local clipboard, pushes every new text or image to the \
                  clipboard history server and keeps a live, deduplicated view of the \
                  shared history in the terminal."
)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Base URL of the clipboard history server
    #[arg(long, value_name = "URL")]
    pub server_url: Option<String>,

    /// Device id sent with new entries
    #[arg(long, value_name = "ID")]
    pub device_id: Option<String>,
}

impl Cli {
    /// Command line values take precedence over everything else.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(url) = &self.server_url {
            config.server.url = url.clone();
        }
        if let Some(id) = &self.device_id {
            config.device.id = Some(id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::parse_from([
            "uniclip",
            "--config",
            "/tmp/uniclip.toml",
            "--server-url",
            "http://server:8080",
            "--device-id",
            "desktop-cli",
        ]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/uniclip.toml")));
        assert_eq!(cli.server_url.as_deref(), Some("http://server:8080"));
        assert_eq!(cli.device_id.as_deref(), Some("desktop-cli"));
    }

    #[test]
    fn overrides_only_touch_given_values() {
        let mut config = AppConfig::default();
        config.device.id = Some("from-file".into());
        let cli = Cli {
            server_url: Some("http://cli:1".into()),
            ..Default::default()
        };

        cli.apply_overrides(&mut config);

        assert_eq!(config.server.url, "http://cli:1");
        assert_eq!(config.device.id.as_deref(), Some("from-file"));
    }
}
