//! Headless entry point for the demo, used where AppKit is unavailable.

use tracing::{error, info};

use vibrant_window::headless::{HeadlessToolkit, ViewId};
use vibrant_window::model::{Rect, StyleMask};
use vibrant_window::{ChromeConfig, EventBus, Toolkit, VibrantWindow};

pub fn run(config: ChromeConfig) {
    let mut toolkit = HeadlessToolkit::new();
    let style = StyleMask::TITLED | StyleMask::CLOSABLE | StyleMask::RESIZABLE;
    let window = toolkit.create_window(Rect::from_xywh(0.0, 0.0, 640.0, 400.0), style);

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

    let accessory = chrome.toolkit_mut().make_accessory("toolbar-buttons");
    chrome.set_accessory_view_controller(accessory);

    let mut content_changed = false;
    for event in bus.drain() {
        content_changed |= event.affects_content_view();
        info!(?event, "{}", event.description());
    }

    if content_changed {
        if let Some(content) = chrome.toolkit().content_view(chrome.window()) {
            log_tree(chrome.toolkit(), &content, 0);
        }
    }
    info!(flags = ?chrome.flags(), full_screen = chrome.is_full_screen(), "window ready");
}

fn log_tree(toolkit: &HeadlessToolkit, view: &ViewId, depth: usize) {
    let material = toolkit
        .as_effect_view(view)
        .and_then(|effect| toolkit.material(&effect));
    info!(
        depth,
        ?view,
        frame = ?toolkit.frame(view),
        ?material,
        "view"
    );
    for child in toolkit.subviews(view) {
        log_tree(toolkit, &child, depth + 1);
    }
}
