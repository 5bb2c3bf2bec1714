//! System clipboard access via clipboard-rs.

mod local;

pub use local::LocalClipboard;
