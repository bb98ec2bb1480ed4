//! macOS implementation using AppKit via objc2.
//!
//! - FFI helpers and object handles (`ffi`)
//! - The [`Toolkit`](crate::toolkit::Toolkit) binding (`toolkit`)
//! - Window and accessory construction helpers (`app`)

pub mod app;
pub mod ffi;
pub mod toolkit;

pub use app::*;
pub use ffi::{AppKitAccessory, AppKitConstraint, AppKitEffectView, AppKitView, AppKitWindow};
pub use toolkit::AppKitToolkit;
