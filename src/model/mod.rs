//! Window chrome domain model.
//!
//! Pure Rust (no FFI): geometry, style masks, materials, appearances and the
//! toggle state machine. Toolkit bindings live in `platform::macos`.

pub mod appearance;
pub mod constants;
pub mod geometry;
pub mod style_mask;

pub use appearance::{Appearance, AppearanceFlags, ChromeState, Material};
pub use constants::*;
pub use geometry::{Point, Rect, Size};
pub use style_mask::StyleMask;
