//! Small objc2 runtime helpers shared by the AppKit binding.

use objc2::rc::Retained;
use objc2::runtime::{AnyClass, AnyObject};
use objc2::{msg_send, ClassType, MainThreadMarker};
use objc2_app_kit::NSApplication;
use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

use crate::model::{Point, Rect, Size};

// ============================================================================
// Helper functions
// ============================================================================

/// Create an NSString from a Rust string slice.
#[inline]
pub fn nsstring(s: &str) -> Retained<NSString> {
    NSString::from_str(s)
}

/// Look up a class by name at runtime. `None` if this OS does not have it.
#[inline]
pub fn lookup_class(name: &str) -> Option<&'static AnyClass> {
    let c_name = std::ffi::CString::new(name).ok()?;
    AnyClass::get(&c_name)
}

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp(_mtm: MainThreadMarker) -> Retained<AnyObject> {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

// ============================================================================
// Geometry conversion
// ============================================================================

#[inline]
pub fn to_ns_rect(rect: Rect) -> NSRect {
    NSRect::new(
        NSPoint::new(rect.origin.x, rect.origin.y),
        NSSize::new(rect.size.width, rect.size.height),
    )
}

#[inline]
pub fn from_ns_rect(rect: NSRect) -> Rect {
    Rect::new(
        Point::new(rect.origin.x, rect.origin.y),
        Size::new(rect.size.width, rect.size.height),
    )
}

// ============================================================================
// Collections
// ============================================================================

/// Copy the elements of an NSArray into a Vec, retaining each.
///
/// # Safety
/// `array` must be an NSArray. Must be called on the main thread when the
/// elements are UI objects.
pub unsafe fn array_to_vec(array: &AnyObject) -> Vec<Retained<AnyObject>> {
    let count: usize = msg_send![array, count];
    (0..count)
        .map(|i| {
            let item: Retained<AnyObject> = msg_send![array, objectAtIndex: i];
            item
        })
        .collect()
}

// ============================================================================
// NSAutoreleasePool replacement
// ============================================================================

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    objc2::rc::autoreleasepool(|_| f())
}
