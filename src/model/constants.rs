//! Toolkit constants and design-time defaults.
//!
//! Raw values mirror AppKit's so the macOS backend can forward them
//! unchanged; the headless toolkit uses the same numbers.

// === NSVisualEffectMaterial raw values ===

/// `NSVisualEffectMaterialLight`.
pub const MATERIAL_LIGHT_RAW: isize = 1;

/// `NSVisualEffectMaterialDark`.
pub const MATERIAL_DARK_RAW: isize = 2;

// === NSAppearance names ===

pub const APPEARANCE_NAME_AQUA: &str = "NSAppearanceNameAqua";
pub const APPEARANCE_NAME_VIBRANT_DARK: &str = "NSAppearanceNameVibrantDark";
pub const APPEARANCE_NAME_VIBRANT_LIGHT: &str = "NSAppearanceNameVibrantLight";

// === NSWindowStyleMask bits ===

pub const STYLE_MASK_TITLED: u64 = 1 << 0;
pub const STYLE_MASK_CLOSABLE: u64 = 1 << 1;
pub const STYLE_MASK_MINIATURIZABLE: u64 = 1 << 2;
pub const STYLE_MASK_RESIZABLE: u64 = 1 << 3;
pub const STYLE_MASK_FULL_SCREEN: u64 = 1 << 14;
pub const STYLE_MASK_FULL_SIZE_CONTENT_VIEW: u64 = 1 << 15;

// === NSWindowTitleVisibility ===

pub const TITLE_VISIBLE_RAW: isize = 0;
pub const TITLE_HIDDEN_RAW: isize = 1;

// === NSWindowOrderingMode ===

/// `NSWindowAbove`, used when inserting a view directly above a sibling.
pub const ORDERING_ABOVE_RAW: isize = 1;

// === Design-time defaults ===

/// Windows start opaque: aqua appearance, plain content view.
pub const DEFAULT_HIDES_TITLE: bool = false;
pub const DEFAULT_TITLEBAR_APPEARS_TRANSPARENT: bool = false;

/// Name of the effect view class probed at runtime.
pub const EFFECT_VIEW_CLASS_NAME: &str = "NSVisualEffectView";
