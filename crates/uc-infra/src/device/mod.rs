//! Device identity resolution.

mod identity;

pub use identity::resolve_device_id;
