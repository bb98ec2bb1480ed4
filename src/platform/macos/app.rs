//! Helpers for creating AppKit windows and title-bar accessories.

use objc2::rc::{Allocated, Retained};
use objc2::runtime::AnyObject;
use objc2::{msg_send, ClassType, MainThreadMarker};
use objc2_app_kit::{NSTitlebarAccessoryViewController, NSWindow};

use crate::model::{Rect, StyleMask};
use crate::platform::macos::ffi::bridge::{nsstring, to_ns_rect};
use crate::platform::macos::ffi::{AppKitAccessory, AppKitView, AppKitWindow};

/// `NSBackingStoreBuffered`.
const BACKING_STORE_BUFFERED: usize = 2;

/// `NSLayoutAttributeRight`, placing an accessory at the trailing edge.
const LAYOUT_ATTRIBUTE_RIGHT: isize = 2;

/// Create a titled window with a plain content view.
pub fn create_window(
    _mtm: MainThreadMarker,
    content_rect: Rect,
    style_mask: StyleMask,
    title: &str,
) -> AppKitWindow {
    let title = nsstring(title);
    unsafe {
        let window: Allocated<AnyObject> = msg_send![NSWindow::class(), alloc];
        let window: Retained<AnyObject> = msg_send![
            window,
            initWithContentRect: to_ns_rect(content_rect),
            styleMask: style_mask.bits() as usize,
            backing: BACKING_STORE_BUFFERED,
            defer: false
        ];
        // The handle owns the window; AppKit must not release it on close.
        let _: () = msg_send![&*window, setReleasedWhenClosed: false];
        let _: () = msg_send![&*window, setTitle: &*title];
        let _: () = msg_send![&*window, center];
        AppKitWindow(window)
    }
}

/// Wrap `view` in a title-bar accessory view controller pinned to the
/// trailing edge of the title bar.
pub fn make_titlebar_accessory(_mtm: MainThreadMarker, view: &AppKitView) -> AppKitAccessory {
    unsafe {
        let controller: Allocated<AnyObject> =
            msg_send![NSTitlebarAccessoryViewController::class(), alloc];
        let controller: Retained<AnyObject> = msg_send![controller, init];
        let _: () = msg_send![&*controller, setView: view.as_object()];
        let _: () = msg_send![&*controller, setLayoutAttribute: LAYOUT_ATTRIBUTE_RIGHT];
        AppKitAccessory(controller)
    }
}

/// Bring `window` to the front and make it key.
pub fn show_window(window: &AppKitWindow) {
    unsafe {
        let _: () = msg_send![window.as_object(), makeKeyAndOrderFront: None::<&AnyObject>];
    }
}
