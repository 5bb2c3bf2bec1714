//! Process bootstrap: logging, configuration, wiring and the main loop.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::resolve_config;
pub use run::run_app;
pub use wiring::{build_app, App};
