//! Effective configuration: file, then environment, then command line.

use anyhow::Context;
use tracing::info;
use uc_core::AppConfig;
use uc_infra::config::{apply_env_overrides, load_config_or_default};

use crate::cli::Cli;

/// Build and validate the configuration for this run.
///
/// Precedence: command line > environment > config file > defaults.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    let mut config = load_config_or_default(cli.config.as_deref())?;
    apply_env_overrides(&mut config);
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    info!(
        server_url = %config.server.url,
        request_timeout_ms = config.server.request_timeout_ms,
        clipboard_poll_interval_ms = config.sync.clipboard_poll_interval_ms,
        view_poll_interval_ms = config.sync.view_poll_interval_ms,
        "Configuration resolved"
    );
    Ok(config)
}
