//! # Configuration data / 配置数据
//!
//! Configuration DTOs only. Loading from disk and environment lives in
//! `uc-infra`; this module owns the shape, the defaults and the validation.

mod app_config;

pub use app_config::{AppConfig, ConfigError, DeviceConfig, ServerConfig, SyncConfig};
