//! Remote clipboard history server adapters.

mod http_remote_store;

pub use http_remote_store::HttpRemoteStore;
