//! The host toolkit seam.
//!
//! Everything this crate does to a window goes through [`Toolkit`]. The
//! AppKit binding lives in `platform::macos`; [`crate::headless`] provides an
//! in-memory implementation used by tests and the non-macOS demo.
//!
//! Handles are cheap identity values: cloning a `View` does not copy the
//! underlying view, and `==` compares identity.

use std::fmt::Debug;

use crate::model::{Appearance, Material, Rect, StyleMask};

/// Window, view and constraint primitives supplied by the host toolkit.
///
/// All calls are synchronous and must happen on the thread that owns the
/// view hierarchy.
pub trait Toolkit {
    type Window: Debug;
    type View: Clone + PartialEq + Debug;
    type EffectView: Clone + PartialEq + Debug + Into<Self::View>;
    type Constraint: Debug;
    type Accessory: Clone + Debug;

    // === Views ===

    fn frame(&self, view: &Self::View) -> Rect;
    fn set_frame(&mut self, view: &Self::View, frame: Rect);

    /// Detaches and returns every constraint held by `view`.
    fn take_constraints(&mut self, view: &Self::View) -> Vec<Self::Constraint>;
    /// Installs `constraints` on `view` verbatim.
    fn add_constraints(&mut self, view: &Self::View, constraints: Vec<Self::Constraint>);
    fn constraint_count(&self, view: &Self::View) -> usize;

    fn autoresizes_subviews(&self, view: &Self::View) -> bool;
    fn set_autoresizes_subviews(&mut self, view: &Self::View, flag: bool);

    /// Direct children in back-to-front order.
    fn subviews(&self, view: &Self::View) -> Vec<Self::View>;
    fn superview(&self, view: &Self::View) -> Option<Self::View>;
    fn remove_from_superview(&mut self, view: &Self::View);
    /// Appends `child` as the front-most child of `parent`.
    fn add_subview(&mut self, parent: &Self::View, child: &Self::View);
    /// Inserts `child` into `parent` directly above `sibling`.
    fn add_subview_above(&mut self, parent: &Self::View, child: &Self::View, sibling: &Self::View);

    /// Recomputes geometry for `view` and its descendants.
    fn layout_subtree(&mut self, view: &Self::View);

    // === Factories ===

    fn make_view(&mut self, frame: Rect) -> Self::View;
    fn make_effect_view(&mut self, frame: Rect) -> Self::EffectView;

    fn set_material(&mut self, view: &Self::EffectView, material: Material);
    /// `None` when the effect view uses a material outside [`Material`].
    fn material(&self, view: &Self::EffectView) -> Option<Material>;

    /// Returns `view` as an effect view if it is one.
    fn as_effect_view(&self, view: &Self::View) -> Option<Self::EffectView>;

    /// Runtime probe: does this toolkit version provide effect views?
    fn has_effect_view_type(&self) -> bool;

    // === Windows ===

    fn content_view(&self, window: &Self::Window) -> Option<Self::View>;
    fn set_content_view(&mut self, window: &Self::Window, view: &Self::View);
    fn style_mask(&self, window: &Self::Window) -> StyleMask;
    fn set_appearance(&mut self, window: &Self::Window, appearance: Appearance);
    fn add_titlebar_accessory(&mut self, window: &Self::Window, accessory: &Self::Accessory);
    fn set_title_hidden(&mut self, window: &Self::Window, hidden: bool);
    fn set_titlebar_appears_transparent(&mut self, window: &Self::Window, transparent: bool);
}
