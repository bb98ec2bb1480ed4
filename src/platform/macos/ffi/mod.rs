//! Low-level objc2 helpers for the AppKit binding.

pub mod bridge;
pub mod types;

pub use types::*;
