//! Handle types wrapping AppKit objects.
//!
//! Each handle owns one strong reference (`Retained`), so cloning retains and
//! dropping releases. Equality is object identity.

use std::fmt;

use objc2::rc::Retained;
use objc2::runtime::AnyObject;

macro_rules! appkit_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(pub(crate) Retained<AnyObject>);

        impl $name {
            pub fn as_ptr(&self) -> *const AnyObject {
                Retained::as_ptr(&self.0)
            }

            pub fn as_object(&self) -> &AnyObject {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                std::ptr::eq(self.as_ptr(), other.as_ptr())
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({:p})", stringify!($name), self.as_ptr())
            }
        }
    };
}

appkit_handle!(
    /// An `NSWindow`.
    AppKitWindow
);
appkit_handle!(
    /// An `NSView` or subclass.
    AppKitView
);
appkit_handle!(
    /// An `NSVisualEffectView`.
    AppKitEffectView
);
appkit_handle!(
    /// An `NSLayoutConstraint`.
    AppKitConstraint
);
appkit_handle!(
    /// An `NSTitlebarAccessoryViewController`.
    AppKitAccessory
);

impl From<AppKitEffectView> for AppKitView {
    fn from(view: AppKitEffectView) -> Self {
        AppKitView(view.0)
    }
}
