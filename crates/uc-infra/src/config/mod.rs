//! Configuration loading (TOML file + environment overrides).

mod loader;

pub use loader::{
    apply_env_overrides, default_config_path, load_config, load_config_or_default,
    ENV_DEVICE_ID, ENV_SERVER_URL,
};
