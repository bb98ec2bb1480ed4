//! [`Toolkit`] implementation over AppKit.
//!
//! Every call is a plain message send on the wrapped objects. The toolkit
//! holds a `MainThreadMarker`, so it can only be created (and used) on the
//! main thread.

use objc2::rc::{Allocated, Retained};
use objc2::runtime::{AnyClass, AnyObject};
use objc2::{msg_send, ClassType, MainThreadMarker};
use objc2_app_kit::{NSAppearance, NSView, NSVisualEffectView};
use objc2_foundation::NSRect;

use crate::model::constants::*;
use crate::model::{Appearance, Material, Rect, StyleMask};
use crate::platform::macos::ffi::bridge::{
    array_to_vec, from_ns_rect, lookup_class, nsstring, to_ns_rect,
};
use crate::platform::macos::ffi::{
    AppKitAccessory, AppKitConstraint, AppKitEffectView, AppKitView, AppKitWindow,
};
use crate::toolkit::Toolkit;

/// AppKit-backed toolkit.
#[derive(Debug, Clone, Copy)]
pub struct AppKitToolkit {
    /// Only obtainable on the main thread.
    _mtm: MainThreadMarker,
}

impl AppKitToolkit {
    pub fn new(mtm: MainThreadMarker) -> Self {
        Self { _mtm: mtm }
    }

    /// Allocate and `initWithFrame:` an instance of `class`.
    fn alloc_view(&self, class: &'static AnyClass, frame: Rect) -> Retained<AnyObject> {
        unsafe {
            let view: Allocated<AnyObject> = msg_send![class, alloc];
            msg_send![view, initWithFrame: to_ns_rect(frame)]
        }
    }
}

impl Toolkit for AppKitToolkit {
    type Window = AppKitWindow;
    type View = AppKitView;
    type EffectView = AppKitEffectView;
    type Constraint = AppKitConstraint;
    type Accessory = AppKitAccessory;

    fn frame(&self, view: &AppKitView) -> Rect {
        let frame: NSRect = unsafe { msg_send![view.as_object(), frame] };
        from_ns_rect(frame)
    }

    fn set_frame(&mut self, view: &AppKitView, frame: Rect) {
        unsafe {
            let _: () = msg_send![view.as_object(), setFrame: to_ns_rect(frame)];
        }
    }

    fn take_constraints(&mut self, view: &AppKitView) -> Vec<AppKitConstraint> {
        unsafe {
            let installed: Retained<AnyObject> = msg_send![view.as_object(), constraints];
            // `constraints` may be backed by the view's own storage.
            let snapshot: Retained<AnyObject> = msg_send![&*installed, copy];
            let constraints = array_to_vec(&snapshot);
            let _: () = msg_send![view.as_object(), removeConstraints: &*snapshot];
            constraints.into_iter().map(AppKitConstraint).collect()
        }
    }

    fn add_constraints(&mut self, view: &AppKitView, constraints: Vec<AppKitConstraint>) {
        for constraint in constraints {
            unsafe {
                let _: () = msg_send![view.as_object(), addConstraint: constraint.as_object()];
            }
        }
    }

    fn constraint_count(&self, view: &AppKitView) -> usize {
        unsafe {
            let installed: Retained<AnyObject> = msg_send![view.as_object(), constraints];
            msg_send![&*installed, count]
        }
    }

    fn autoresizes_subviews(&self, view: &AppKitView) -> bool {
        unsafe { msg_send![view.as_object(), autoresizesSubviews] }
    }

    fn set_autoresizes_subviews(&mut self, view: &AppKitView, flag: bool) {
        unsafe {
            let _: () = msg_send![view.as_object(), setAutoresizesSubviews: flag];
        }
    }

    fn subviews(&self, view: &AppKitView) -> Vec<AppKitView> {
        unsafe {
            let subviews: Retained<AnyObject> = msg_send![view.as_object(), subviews];
            array_to_vec(&subviews).into_iter().map(AppKitView).collect()
        }
    }

    fn superview(&self, view: &AppKitView) -> Option<AppKitView> {
        let parent: Option<Retained<AnyObject>> = unsafe { msg_send![view.as_object(), superview] };
        parent.map(AppKitView)
    }

    fn remove_from_superview(&mut self, view: &AppKitView) {
        // The handle keeps the view alive after its parent lets go.
        unsafe {
            let _: () = msg_send![view.as_object(), removeFromSuperview];
        }
    }

    fn add_subview(&mut self, parent: &AppKitView, child: &AppKitView) {
        unsafe {
            let _: () = msg_send![parent.as_object(), addSubview: child.as_object()];
        }
    }

    fn add_subview_above(&mut self, parent: &AppKitView, child: &AppKitView, sibling: &AppKitView) {
        unsafe {
            let _: () = msg_send![
                parent.as_object(),
                addSubview: child.as_object(),
                positioned: ORDERING_ABOVE_RAW,
                relativeTo: sibling.as_object()
            ];
        }
    }

    fn layout_subtree(&mut self, view: &AppKitView) {
        unsafe {
            let _: () = msg_send![view.as_object(), layoutSubtreeIfNeeded];
        }
    }

    fn make_view(&mut self, frame: Rect) -> AppKitView {
        AppKitView(self.alloc_view(NSView::class(), frame))
    }

    fn make_effect_view(&mut self, frame: Rect) -> AppKitEffectView {
        AppKitEffectView(self.alloc_view(NSVisualEffectView::class(), frame))
    }

    fn set_material(&mut self, view: &AppKitEffectView, material: Material) {
        unsafe {
            let _: () = msg_send![view.as_object(), setMaterial: material.raw()];
        }
    }

    fn material(&self, view: &AppKitEffectView) -> Option<Material> {
        let raw: isize = unsafe { msg_send![view.as_object(), material] };
        Material::from_raw(raw)
    }

    fn as_effect_view(&self, view: &AppKitView) -> Option<AppKitEffectView> {
        let class = lookup_class(EFFECT_VIEW_CLASS_NAME)?;
        let is_effect: bool = unsafe { msg_send![view.as_object(), isKindOfClass: class] };
        is_effect.then(|| AppKitEffectView(view.0.clone()))
    }

    fn has_effect_view_type(&self) -> bool {
        lookup_class(EFFECT_VIEW_CLASS_NAME).is_some()
    }

    fn content_view(&self, window: &AppKitWindow) -> Option<AppKitView> {
        let view: Option<Retained<AnyObject>> =
            unsafe { msg_send![window.as_object(), contentView] };
        view.map(AppKitView)
    }

    fn set_content_view(&mut self, window: &AppKitWindow, view: &AppKitView) {
        unsafe {
            let _: () = msg_send![window.as_object(), setContentView: view.as_object()];
        }
    }

    fn style_mask(&self, window: &AppKitWindow) -> StyleMask {
        let bits: usize = unsafe { msg_send![window.as_object(), styleMask] };
        StyleMask::from_bits_retain(bits as u64)
    }

    fn set_appearance(&mut self, window: &AppKitWindow, appearance: Appearance) {
        let name = nsstring(appearance.name());
        unsafe {
            let resolved: Option<Retained<AnyObject>> =
                msg_send![NSAppearance::class(), appearanceNamed: &*name];
            let _: () = msg_send![window.as_object(), setAppearance: resolved.as_deref()];
        }
    }

    fn add_titlebar_accessory(&mut self, window: &AppKitWindow, accessory: &AppKitAccessory) {
        unsafe {
            let _: () = msg_send![
                window.as_object(),
                addTitlebarAccessoryViewController: accessory.as_object()
            ];
        }
    }

    fn set_title_hidden(&mut self, window: &AppKitWindow, hidden: bool) {
        let visibility = if hidden {
            TITLE_HIDDEN_RAW
        } else {
            TITLE_VISIBLE_RAW
        };
        unsafe {
            let _: () = msg_send![window.as_object(), setTitleVisibility: visibility];
        }
    }

    fn set_titlebar_appears_transparent(&mut self, window: &AppKitWindow, transparent: bool) {
        unsafe {
            let _: () = msg_send![window.as_object(), setTitlebarAppearsTransparent: transparent];
        }
    }
}
