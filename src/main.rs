//! Demo: opens a window with a vibrant content view.
//!
//! Usage: `vibrant-window-demo [config.json]`. Without a config the window
//! uses a dark vibrant content view, the vibrant dark appearance and a
//! transparent titlebar. Set `RUST_LOG=debug` to see each chrome change.
//!
//! On platforms without AppKit the same steps run against the headless
//! toolkit and the resulting view tree is logged.

#[cfg(not(target_os = "macos"))]
mod headless_main;
#[cfg(target_os = "macos")]
mod macos_main;

use tracing_subscriber::EnvFilter;
use vibrant_window::{Appearance, ChromeConfig, Material};

fn demo_config() -> ChromeConfig {
    ChromeConfig {
        content_material: Some(Material::Dark),
        appearance: Appearance::VibrantDark,
        titlebar_appears_transparent: true,
        ..ChromeConfig::default()
    }
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = std::env::args()
        .nth(1)
        .map(ChromeConfig::load_or_default)
        .unwrap_or_else(demo_config);

    #[cfg(target_os = "macos")]
    macos_main::run(config);

    #[cfg(not(target_os = "macos"))]
    headless_main::run(config);
}
