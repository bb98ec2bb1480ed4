//! Chrome change notifications.
//!
//! A `VibrantWindow` can be given an [`EventPublisher`]; every effective
//! change to its toggles, title bar or content view is then published as a
//! [`ChromeEvent`].
//!
//! ```text
//! ┌───────────────┐   publish()   ┌──────────────┐   drain()   ┌──────────┐
//! │ VibrantWindow │ ────────────▶ │   EventBus   │ ──────────▶ │ Observer │
//! └───────────────┘               │ (mpsc queue) │             └──────────┘
//!                                 └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let bus = EventBus::new();
//! window.set_publisher(bus.publisher());
//!
//! window.set_vibrant_dark_appearance(true);
//!
//! for event in bus.drain() {
//!     // React to the change...
//! }
//! ```

pub mod bus;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::ChromeEvent;
