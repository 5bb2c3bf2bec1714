//! # uc-infra
//!
//! Infrastructure adapters for UniClip: the HTTP remote store, configuration
//! loading and device identity.

pub mod config;
pub mod device;
pub mod remote;

pub use config::{load_config, load_config_or_default};
pub use device::resolve_device_id;
pub use remote::HttpRemoteStore;
