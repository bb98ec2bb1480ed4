//! Window style-mask bit-set.

use bitflags::bitflags;

use super::constants::*;

bitflags! {
    /// Window chrome features, using AppKit's raw `NSWindowStyleMask` bits.
    ///
    /// Unknown bits read back from the toolkit are retained.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleMask: u64 {
        const TITLED = STYLE_MASK_TITLED;
        const CLOSABLE = STYLE_MASK_CLOSABLE;
        const MINIATURIZABLE = STYLE_MASK_MINIATURIZABLE;
        const RESIZABLE = STYLE_MASK_RESIZABLE;
        const FULL_SCREEN = STYLE_MASK_FULL_SCREEN;
        const FULL_SIZE_CONTENT_VIEW = STYLE_MASK_FULL_SIZE_CONTENT_VIEW;
    }
}
