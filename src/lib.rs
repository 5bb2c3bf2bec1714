//! UniClip: a clipboard sync client for a shared clipboard history server.

pub mod bootstrap;
pub mod cli;
pub mod console;
