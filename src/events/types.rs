//! Chrome change notifications.
//!
//! Each event reports one effective change made by a `VibrantWindow`, so
//! observers can follow the toggles without polling them. Pure Rust, no FFI.

use crate::model::{Appearance, Material};

/// A change to a window's chrome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChromeEvent {
    // === Content view ===
    /// The content view was swapped for a new view.
    ContentViewReplaced,

    /// The content material toggle group changed (`None`: no material flag set).
    ContentMaterialChanged(Option<Material>),

    // === Window ===
    /// The window appearance toggle group changed (`None`: no appearance flag set).
    AppearanceChanged(Option<Appearance>),

    /// A title-bar accessory was registered.
    AccessoryAdded,

    TitleVisibilityChanged { hidden: bool },

    TitlebarTransparencyChanged { transparent: bool },
}

impl ChromeEvent {
    /// Returns true if this event means the content view tree changed.
    pub fn affects_content_view(&self) -> bool {
        matches!(
            self,
            ChromeEvent::ContentViewReplaced | ChromeEvent::ContentMaterialChanged(_)
        )
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            ChromeEvent::ContentViewReplaced => "Content view replaced",
            ChromeEvent::ContentMaterialChanged(_) => "Content material changed",
            ChromeEvent::AppearanceChanged(_) => "Window appearance changed",
            ChromeEvent::AccessoryAdded => "Title-bar accessory added",
            ChromeEvent::TitleVisibilityChanged { .. } => "Title visibility changed",
            ChromeEvent::TitlebarTransparencyChanged { .. } => "Titlebar transparency changed",
        }
    }
}
