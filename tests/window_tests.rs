//! Chrome toggles, title bar and configuration against the headless toolkit.

use vibrant_window::headless::{HeadlessToolkit, ViewId, WindowId};
use vibrant_window::model::{Appearance, Material, Rect, StyleMask};
use vibrant_window::{
    ChromeConfig, ChromeError, ChromeEvent, EffectViewSupport, EventBus, Resizing, SwapError,
    Toolkit, VibrantWindow,
};

fn support(available: bool) -> &'static EffectViewSupport {
    Box::leak(Box::new(EffectViewSupport::resolved(available)))
}

fn window_with(
    tk: HeadlessToolkit,
    style: StyleMask,
    effect_views: bool,
) -> VibrantWindow<HeadlessToolkit> {
    let mut tk = tk;
    let window = tk.create_window(Rect::from_xywh(0.0, 0.0, 480.0, 320.0), style);
    let content = tk.content_view(&window).unwrap();
    let label = tk.make_view(Rect::from_xywh(12.0, 12.0, 100.0, 20.0));
    tk.add_subview(&content, &label);
    VibrantWindow::new(tk, window).with_effect_view_support(support(effect_views))
}

fn vibrant_window() -> VibrantWindow<HeadlessToolkit> {
    window_with(HeadlessToolkit::new(), StyleMask::TITLED, true)
}

fn content(chrome: &VibrantWindow<HeadlessToolkit>) -> ViewId {
    chrome.toolkit().content_view(chrome.window()).unwrap()
}

fn content_material(chrome: &VibrantWindow<HeadlessToolkit>) -> Option<Material> {
    let tk = chrome.toolkit();
    tk.as_effect_view(&content(chrome))
        .and_then(|effect| tk.material(&effect))
}

fn window_id(chrome: &VibrantWindow<HeadlessToolkit>) -> WindowId {
    *chrome.window()
}

// === Defaults ===

#[test]
fn defaults_have_only_aqua_set() {
    let chrome = vibrant_window();
    assert!(chrome.aqua_appearance());
    assert!(!chrome.vibrant_dark_appearance());
    assert!(!chrome.vibrant_light_appearance());
    assert!(!chrome.content_view_vibrant_dark());
    assert!(!chrome.content_view_vibrant_light());
    assert!(chrome.accessory_view_controller().is_none());
}

#[test]
fn construction_does_not_touch_window() {
    let chrome = vibrant_window();
    let tk = chrome.toolkit();
    assert_eq!(tk.appearance(chrome.window()), None);
    assert_eq!(tk.as_effect_view(&content(&chrome)), None);
}

// === Content view material ===

#[test]
fn vibrant_dark_swaps_content_for_effect_view() {
    let mut chrome = vibrant_window();
    let old_content = content(&chrome);
    let label = chrome.toolkit().subviews(&old_content)[0];

    chrome.set_content_view_vibrant_dark(true).unwrap();

    let new_content = content(&chrome);
    assert_ne!(new_content, old_content);
    assert_eq!(content_material(&chrome), Some(Material::Dark));
    assert_eq!(chrome.toolkit().subviews(&new_content), vec![label]);
    assert_eq!(
        chrome.toolkit().frame(&new_content),
        Rect::from_xywh(0.0, 0.0, 480.0, 320.0)
    );
    assert!(chrome.content_view_vibrant_dark());
}

#[test]
fn light_after_dark_clears_dark_and_retints() {
    let mut chrome = vibrant_window();

    chrome.set_content_view_vibrant_dark(true).unwrap();
    let effect_content = content(&chrome);
    chrome.set_content_view_vibrant_light(true).unwrap();

    assert!(!chrome.content_view_vibrant_dark());
    assert!(chrome.content_view_vibrant_light());
    assert_eq!(content_material(&chrome), Some(Material::Light));
    // The existing effect view is reused.
    assert_eq!(content(&chrome), effect_content);
}

#[test]
fn clearing_material_flag_keeps_view() {
    let mut chrome = vibrant_window();
    chrome.set_content_view_vibrant_light(true).unwrap();
    let effect_content = content(&chrome);

    chrome.set_content_view_vibrant_light(false).unwrap();

    assert!(!chrome.content_view_vibrant_light());
    assert_eq!(content(&chrome), effect_content);
    assert_eq!(content_material(&chrome), Some(Material::Light));
}

#[test]
fn material_toggles_are_no_ops_without_effect_views() {
    let mut chrome =
        window_with(HeadlessToolkit::without_effect_views(), StyleMask::TITLED, false);
    let before = content(&chrome);

    chrome.set_content_view_vibrant_dark(true).unwrap();
    chrome.set_content_view_vibrant_light(true).unwrap();

    assert_eq!(content(&chrome), before);
    assert_eq!(chrome.toolkit().as_effect_view(&before), None);
    assert!(!chrome.content_view_vibrant_dark());
    assert!(!chrome.content_view_vibrant_light());
}

#[test]
fn injected_capability_overrides_toolkit_probe() {
    // Toolkit has effect views, but the injected flag says no.
    let chrome = window_with(HeadlessToolkit::new(), StyleMask::TITLED, false);
    assert!(!chrome.supports_effect_views());
}

// === Window appearance ===

#[test]
fn vibrant_dark_appearance_is_exclusive() {
    let mut chrome = vibrant_window();

    chrome.set_vibrant_dark_appearance(true);

    assert!(chrome.vibrant_dark_appearance());
    assert!(!chrome.vibrant_light_appearance());
    assert!(!chrome.aqua_appearance());
    assert_eq!(
        chrome.toolkit().appearance(chrome.window()),
        Some(Appearance::VibrantDark)
    );
}

#[test]
fn each_appearance_sets_window_identifier() {
    let mut chrome = vibrant_window();
    let window = window_id(&chrome);

    chrome.set_vibrant_light_appearance(true);
    assert_eq!(chrome.toolkit().appearance(&window), Some(Appearance::VibrantLight));
    assert!(!chrome.vibrant_dark_appearance());
    assert!(!chrome.aqua_appearance());

    chrome.set_aqua_appearance(true);
    assert_eq!(chrome.toolkit().appearance(&window), Some(Appearance::Aqua));
    assert!(!chrome.vibrant_light_appearance());
    assert!(!chrome.vibrant_dark_appearance());
}

#[test]
fn clearing_appearance_flag_leaves_window_alone() {
    let mut chrome = vibrant_window();
    chrome.set_vibrant_dark_appearance(true);

    chrome.set_vibrant_dark_appearance(false);

    assert!(!chrome.vibrant_dark_appearance());
    assert!(!chrome.aqua_appearance());
    assert_eq!(
        chrome.toolkit().appearance(chrome.window()),
        Some(Appearance::VibrantDark)
    );
}

#[test]
fn appearance_and_material_groups_are_independent() {
    let mut chrome = vibrant_window();
    chrome.set_content_view_vibrant_dark(true).unwrap();
    chrome.set_vibrant_light_appearance(true);

    assert!(chrome.content_view_vibrant_dark());
    assert!(chrome.vibrant_light_appearance());
}

// === Title bar ===

#[test]
fn full_screen_follows_style_mask() {
    let chrome = window_with(
        HeadlessToolkit::new(),
        StyleMask::TITLED | StyleMask::FULL_SCREEN,
        true,
    );
    assert!(chrome.is_full_screen());

    let chrome = window_with(
        HeadlessToolkit::new(),
        StyleMask::TITLED | StyleMask::RESIZABLE,
        true,
    );
    assert!(!chrome.is_full_screen());
}

#[test]
fn full_screen_reads_current_mask() {
    let mut chrome = vibrant_window();
    let window = window_id(&chrome);
    assert!(!chrome.is_full_screen());

    chrome
        .toolkit_mut()
        .set_style_mask(&window, StyleMask::TITLED | StyleMask::FULL_SCREEN);
    assert!(chrome.is_full_screen());
}

#[test]
fn accessory_is_registered_with_window() {
    let mut chrome = vibrant_window();
    let accessory = chrome.toolkit_mut().make_accessory("search");

    chrome.set_accessory_view_controller(accessory);

    assert_eq!(chrome.accessory_view_controller(), Some(&accessory));
    assert_eq!(chrome.toolkit().accessories(chrome.window()), &[accessory]);
    assert_eq!(chrome.toolkit().accessory_name(&accessory), "search");
}

#[test]
fn title_options_forward_to_window() {
    let mut chrome = vibrant_window();
    let window = window_id(&chrome);

    chrome.set_hides_title(true);
    chrome.set_titlebar_appears_transparent(true);

    assert!(chrome.hides_title());
    assert!(chrome.titlebar_appears_transparent());
    assert!(chrome.toolkit().title_hidden(&window));
    assert!(chrome.toolkit().titlebar_appears_transparent(&window));
}

// === Arbitrary swaps ===

#[test]
fn replace_subview_swaps_nested_view() {
    let mut chrome = vibrant_window();
    let root = content(&chrome);
    let label = chrome.toolkit().subviews(&root)[0];
    let replacement = chrome.toolkit_mut().make_view(Rect::default());

    chrome
        .replace_subview(&label, &replacement, Resizing::Match)
        .unwrap();

    assert_eq!(chrome.toolkit().subviews(&root), vec![replacement]);
    assert_eq!(
        chrome.toolkit().frame(&replacement),
        Rect::from_xywh(12.0, 12.0, 100.0, 20.0)
    );
}

#[test]
fn replace_subview_reports_detached_view() {
    let mut chrome = vibrant_window();
    let orphan = chrome.toolkit_mut().make_view(Rect::default());
    let replacement = chrome.toolkit_mut().make_view(Rect::default());

    let err = chrome
        .replace_subview(&orphan, &replacement, Resizing::Keep)
        .unwrap_err();

    assert_eq!(err, ChromeError::Swap(SwapError::Detached));
}

#[test]
fn replace_subview_with_new_returns_created_view() {
    let mut chrome = vibrant_window();
    let root = content(&chrome);

    let created = chrome
        .replace_subview_with_new(&root, |tk, frame| tk.make_view(frame))
        .unwrap();

    assert_eq!(content(&chrome), created);
}

#[test]
fn plain_content_swap_clears_material_flag() {
    let mut chrome = vibrant_window();
    chrome.set_content_view_vibrant_dark(true).unwrap();
    let bus = EventBus::new();
    chrome.set_publisher(bus.publisher());
    let root = content(&chrome);

    chrome
        .replace_subview_with_new(&root, |tk, frame| tk.make_view(frame))
        .unwrap();

    assert!(!chrome.content_view_vibrant_dark());
    assert_eq!(chrome.config().content_material, None);
    assert_eq!(
        bus.drain(),
        vec![
            ChromeEvent::ContentViewReplaced,
            ChromeEvent::ContentMaterialChanged(None),
        ]
    );
}

#[test]
fn effect_content_swap_keeps_material_flag() {
    let mut chrome = vibrant_window();
    chrome.set_content_view_vibrant_light(true).unwrap();
    let root = content(&chrome);

    chrome
        .replace_subview_with_new(&root, |tk, frame| tk.make_effect_view(frame))
        .unwrap();

    assert!(chrome.content_view_vibrant_light());
}

#[test]
fn nested_swap_keeps_material_flag() {
    let mut chrome = vibrant_window();
    chrome.set_content_view_vibrant_dark(true).unwrap();
    let root = content(&chrome);
    let label = chrome.toolkit().subviews(&root)[0];
    let replacement = chrome.toolkit_mut().make_view(Rect::default());

    chrome
        .replace_subview(&label, &replacement, Resizing::Keep)
        .unwrap();

    assert!(chrome.content_view_vibrant_dark());
    assert_eq!(content_material(&chrome), Some(Material::Dark));
}

// === Events ===

#[test]
fn effective_changes_are_published() {
    let mut chrome = vibrant_window();
    let bus = EventBus::new();
    chrome.set_publisher(bus.publisher());

    chrome.set_content_view_vibrant_dark(true).unwrap();
    chrome.set_content_view_vibrant_dark(true).unwrap();
    chrome.set_vibrant_dark_appearance(true);
    chrome.set_hides_title(false);

    assert_eq!(
        bus.drain(),
        vec![
            ChromeEvent::ContentViewReplaced,
            ChromeEvent::ContentMaterialChanged(Some(Material::Dark)),
            ChromeEvent::AppearanceChanged(Some(Appearance::VibrantDark)),
        ]
    );
}

#[test]
fn skipped_material_publishes_nothing() {
    let mut chrome =
        window_with(HeadlessToolkit::without_effect_views(), StyleMask::TITLED, false);
    let bus = EventBus::new();
    chrome.set_publisher(bus.publisher());

    chrome.set_content_view_vibrant_light(true).unwrap();

    assert!(bus.drain().is_empty());
}

// === Configuration ===

#[test]
fn apply_config_drives_setters() {
    let mut chrome = vibrant_window();
    let config = ChromeConfig::from_json_str(
        r#"{
            "content_material": "light",
            "appearance": "vibrant_light",
            "hides_title": true,
            "titlebar_appears_transparent": true
        }"#,
    )
    .unwrap();

    chrome.apply_config(&config).unwrap();

    assert!(chrome.content_view_vibrant_light());
    assert!(chrome.vibrant_light_appearance());
    assert_eq!(content_material(&chrome), Some(Material::Light));
    assert_eq!(chrome.config(), config);
}

#[test]
fn apply_default_config_clears_material_flag() {
    let mut chrome = vibrant_window();
    chrome.set_content_view_vibrant_dark(true).unwrap();
    chrome.set_vibrant_dark_appearance(true);

    chrome.apply_config(&ChromeConfig::default()).unwrap();

    assert!(!chrome.content_view_vibrant_dark());
    assert!(chrome.aqua_appearance());
    assert_eq!(chrome.config(), ChromeConfig::default());
}
