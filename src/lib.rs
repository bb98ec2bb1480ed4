//! Vibrant content views, window appearances and title-bar accessories for
//! desktop windows.
//!
//! The core is pure Rust and talks to the host toolkit only through the
//! [`Toolkit`] trait, so it runs under normal integration tests via
//! [`headless::HeadlessToolkit`]. The AppKit binding is in
//! `platform::macos` and only builds on macOS.

pub mod capability;
pub mod config;
pub mod error;
pub mod events;
pub mod headless;
pub mod model;
pub mod platform;
pub mod swap;
pub mod toolkit;
pub mod window;

pub use capability::{supports_effect_views, EffectViewSupport, PROCESS_EFFECT_VIEW_SUPPORT};
pub use config::ChromeConfig;
pub use error::{ChromeError, ConfigError, SwapError};
pub use events::{ChromeEvent, EventBus, EventPublisher};
pub use model::{Appearance, AppearanceFlags, ChromeState, Material, Rect, StyleMask};
pub use swap::{Resizing, ViewSwapper};
pub use toolkit::Toolkit;
pub use window::VibrantWindow;
