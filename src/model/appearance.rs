//! Appearance state machine (pure Rust, no FFI).
//!
//! The five window toggles form two mutually exclusive groups:
//!
//! - content view material: vibrant dark / vibrant light
//! - window appearance: vibrant dark / vibrant light / aqua
//!
//! Instead of five independently observed booleans, the window keeps one
//! [`ChromeState`] value and derives the flags from it, so at most one flag
//! per group can ever be set.

use serde::{Deserialize, Serialize};

use super::constants::*;

/// Visual treatment applied to an effect view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    Light,
    Dark,
}

impl Material {
    /// Raw `NSVisualEffectMaterial` value.
    pub fn raw(self) -> isize {
        match self {
            Material::Light => MATERIAL_LIGHT_RAW,
            Material::Dark => MATERIAL_DARK_RAW,
        }
    }

    pub fn from_raw(raw: isize) -> Option<Self> {
        match raw {
            MATERIAL_LIGHT_RAW => Some(Material::Light),
            MATERIAL_DARK_RAW => Some(Material::Dark),
            _ => None,
        }
    }
}

/// Window-level appearance identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Appearance {
    #[default]
    Aqua,
    VibrantDark,
    VibrantLight,
}

impl Appearance {
    /// The toolkit's name for this appearance.
    pub fn name(self) -> &'static str {
        match self {
            Appearance::Aqua => APPEARANCE_NAME_AQUA,
            Appearance::VibrantDark => APPEARANCE_NAME_VIBRANT_DARK,
            Appearance::VibrantLight => APPEARANCE_NAME_VIBRANT_LIGHT,
        }
    }
}

/// The five toggle values as seen from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppearanceFlags {
    pub content_view_vibrant_dark: bool,
    pub content_view_vibrant_light: bool,
    pub vibrant_dark_appearance: bool,
    pub vibrant_light_appearance: bool,
    pub aqua_appearance: bool,
}

/// Current chrome mode. `None` in either field means no flag of that group
/// is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromeState {
    pub content_material: Option<Material>,
    pub appearance: Option<Appearance>,
}

impl Default for ChromeState {
    fn default() -> Self {
        Self {
            content_material: None,
            appearance: Some(Appearance::Aqua),
        }
    }
}

impl ChromeState {
    /// Computes the state after setting the content-material toggle for
    /// `material` to `active`.
    ///
    /// Activating one material deactivates the other. Deactivating only
    /// clears the flag when it is the active one.
    pub fn with_content_material(self, material: Material, active: bool) -> Self {
        let content_material = match (active, self.content_material) {
            (true, _) => Some(material),
            (false, Some(current)) if current == material => None,
            (false, current) => current,
        };
        Self {
            content_material,
            ..self
        }
    }

    /// Computes the state after setting the appearance toggle for
    /// `appearance` to `active`. Same exclusivity rules as materials.
    pub fn with_appearance(self, appearance: Appearance, active: bool) -> Self {
        let next = match (active, self.appearance) {
            (true, _) => Some(appearance),
            (false, Some(current)) if current == appearance => None,
            (false, current) => current,
        };
        Self {
            appearance: next,
            ..self
        }
    }

    pub fn flags(&self) -> AppearanceFlags {
        AppearanceFlags {
            content_view_vibrant_dark: self.content_material == Some(Material::Dark),
            content_view_vibrant_light: self.content_material == Some(Material::Light),
            vibrant_dark_appearance: self.appearance == Some(Appearance::VibrantDark),
            vibrant_light_appearance: self.appearance == Some(Appearance::VibrantLight),
            aqua_appearance: self.appearance == Some(Appearance::Aqua),
        }
    }
}
