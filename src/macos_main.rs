//! macOS entry point for the demo.

use objc2::{msg_send, MainThreadMarker};
use tracing::{error, info};

use vibrant_window::model::{Rect, StyleMask};
use vibrant_window::platform::macos::ffi::bridge::{autoreleasepool, NSApp};
use vibrant_window::platform::macos::{
    create_window, make_titlebar_accessory, show_window, AppKitToolkit,
};
use vibrant_window::{ChromeConfig, EventBus, Toolkit, VibrantWindow};

/// `NSApplicationActivationPolicyRegular`.
const ACTIVATION_POLICY_REGULAR: isize = 0;

pub fn run(config: ChromeConfig) {
    let Some(mtm) = MainThreadMarker::new() else {
        error!("the demo must run on the main thread");
        return;
    };

    autoreleasepool(|| {
        let app = NSApp(mtm);
        unsafe {
            let _: bool = msg_send![&*app, setActivationPolicy: ACTIVATION_POLICY_REGULAR];
        }

        let mut toolkit = AppKitToolkit::new(mtm);
        let style = StyleMask::TITLED
            | StyleMask::CLOSABLE
            | StyleMask::MINIATURIZABLE
            | StyleMask::RESIZABLE
            | StyleMask::FULL_SIZE_CONTENT_VIEW;
        let frame = Rect::from_xywh(0.0, 0.0, 640.0, 400.0);
        let window = create_window(mtm, frame, style, "Vibrant Window");

        // A child view, to show it survives the content view swap.
        if let Some(content) = toolkit.content_view(&window) {
            let panel = toolkit.make_view(Rect::from_xywh(20.0, 20.0, 200.0, 120.0));
            toolkit.add_subview(&content, &panel);
        }

        let mut chrome = VibrantWindow::new(toolkit, window);
        let bus = EventBus::new();
        chrome.set_publisher(bus.publisher());

        if let Err(e) = chrome.apply_config(&config) {
            error!(error = %e, "failed to apply chrome config");
        }

        let accessory_view = chrome
            .toolkit_mut()
            .make_view(Rect::from_xywh(0.0, 0.0, 80.0, 22.0));
        chrome.set_accessory_view_controller(make_titlebar_accessory(mtm, &accessory_view));

        for event in bus.drain() {
            info!(?event, "{}", event.description());
        }
        info!(
            full_screen = chrome.is_full_screen(),
            effect_views = chrome.supports_effect_views(),
            "window ready"
        );

        show_window(chrome.window());
        unsafe {
            let _: () = msg_send![&*app, activateIgnoringOtherApps: true];
            let _: () = msg_send![&*app, run];
        }
    });
}
