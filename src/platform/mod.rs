//! Platform-specific toolkit bindings.
//!
//! Only AppKit is supported; on other platforms the crate is limited to the
//! headless toolkit.

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
