//! Business logic use cases
//!
//! Each use case is a small struct holding its ports behind `Arc<dyn ...>`
//! and exposing one `execute`-style entry point.

pub mod clipboard;
