//! Tracing configuration for UniClip
//!
//! - **Environment filter**: respects `RUST_LOG`, else debug in dev builds and
//!   info in release builds
//! - **Two sinks**: stderr, capped at [`terminal_max_level`] so stdout stays
//!   free for the history view, plus a plain-text file under the local data
//!   dir that receives everything the filter lets through
//! - **Format**: `2025-01-15 10:30:45.123 INFO file.rs:42 target: message`

use std::{fs, io, path::PathBuf, sync::OnceLock};

use anyhow::Context;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

const LOG_FILE_NAME: &str = "uniclip.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is not set.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    vec![
        app_level.to_string(),
        format!("uc_app={app_level}"),
        format!("uc_platform={app_level}"),
        format!("uc_infra={app_level}"),
        "reqwest=warn".to_string(),
        "hyper=warn".to_string(),
        "hyper_util=warn".to_string(),
        "rustls=warn".to_string(),
    ]
}

/// Most verbose level echoed to the terminal.
fn terminal_max_level(is_dev: bool) -> LevelFilter {
    if is_dev {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Initialize the global tracing subscriber.
///
/// Call once, at the top of `main`, before anything logs. File logging is
/// best effort: if the log directory cannot be created, logs go to stderr
/// only.
///
/// ## Errors / 错误
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber() -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter_directives.join(",")));

    let terminal_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = match build_file_writer() {
        Ok(writer) => Some(writer),
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stderr: {err:#}");
            None
        }
    };

    let terminal_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(terminal_writer)
        .with_filter(terminal_max_level(is_development()));

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(terminal_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to register tracing subscriber")?;

    Ok(())
}

/// `<data_local_dir>/uniclip/logs`
pub fn logs_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|dir| dir.join("uniclip").join("logs"))
}

fn build_file_writer() -> anyhow::Result<NonBlocking> {
    let logs_dir = logs_dir().context("No local data directory on this platform")?;
    fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory: {}", logs_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&logs_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
