//! Window chrome controller.
//!
//! [`VibrantWindow`] wraps one toolkit window and exposes the chrome
//! toggles: vibrant content view materials, the window appearance, the
//! title-bar accessory and title bar options. It also exposes the view swap
//! operations for arbitrary use.
//!
//! Toggle state is a single [`ChromeState`]; every setter computes the next
//! state from it, applies the side effect, and publishes a [`ChromeEvent`]
//! if anything changed.

use tracing::debug;

use crate::capability::{EffectViewSupport, PROCESS_EFFECT_VIEW_SUPPORT};
use crate::config::ChromeConfig;
use crate::error::ChromeError;
use crate::events::{ChromeEvent, EventPublisher};
use crate::model::{Appearance, AppearanceFlags, ChromeState, Material, Rect, StyleMask};
use crate::swap::{Resizing, ViewSwapper};
use crate::toolkit::Toolkit;

pub struct VibrantWindow<T: Toolkit> {
    toolkit: T,
    window: T::Window,
    state: ChromeState,
    effect_views: &'static EffectViewSupport,
    accessory: Option<T::Accessory>,
    hides_title: bool,
    titlebar_appears_transparent: bool,
    publisher: Option<EventPublisher>,
}

impl<T: Toolkit> VibrantWindow<T> {
    /// Take control of `window`'s chrome. The window is not modified until a
    /// setter is called.
    pub fn new(toolkit: T, window: T::Window) -> Self {
        Self {
            toolkit,
            window,
            state: ChromeState::default(),
            effect_views: &PROCESS_EFFECT_VIEW_SUPPORT,
            accessory: None,
            hides_title: false,
            titlebar_appears_transparent: false,
            publisher: None,
        }
    }

    /// Use `support` instead of the process-wide capability flag.
    pub fn with_effect_view_support(mut self, support: &'static EffectViewSupport) -> Self {
        self.effect_views = support;
        self
    }

    /// Publish every effective change to `publisher`.
    pub fn set_publisher(&mut self, publisher: EventPublisher) {
        self.publisher = Some(publisher);
    }

    pub fn toolkit(&self) -> &T {
        &self.toolkit
    }

    pub fn toolkit_mut(&mut self) -> &mut T {
        &mut self.toolkit
    }

    pub fn window(&self) -> &T::Window {
        &self.window
    }

    /// Whether the toolkit provides effect views (probed once).
    pub fn supports_effect_views(&self) -> bool {
        let toolkit = &self.toolkit;
        self.effect_views.resolve(|| toolkit.has_effect_view_type())
    }

    pub fn state(&self) -> ChromeState {
        self.state
    }

    pub fn flags(&self) -> AppearanceFlags {
        self.state.flags()
    }

    // === Content view material ===

    pub fn content_view_vibrant_dark(&self) -> bool {
        self.flags().content_view_vibrant_dark
    }

    pub fn set_content_view_vibrant_dark(&mut self, active: bool) -> Result<(), ChromeError> {
        self.set_content_material(Material::Dark, active)
    }

    pub fn content_view_vibrant_light(&self) -> bool {
        self.flags().content_view_vibrant_light
    }

    pub fn set_content_view_vibrant_light(&mut self, active: bool) -> Result<(), ChromeError> {
        self.set_content_material(Material::Light, active)
    }

    /// Turning a material on swaps the content view for an effect view
    /// (or retints the current one). Turning it off only clears the flag.
    fn set_content_material(
        &mut self,
        material: Material,
        active: bool,
    ) -> Result<(), ChromeError> {
        if active {
            if !self.supports_effect_views() {
                debug!(?material, "effect views unavailable; content view left as is");
                return Ok(());
            }
            self.apply_content_material(material)?;
        }
        let next = self.state.with_content_material(material, active);
        self.transition(next);
        Ok(())
    }

    fn apply_content_material(&mut self, material: Material) -> Result<(), ChromeError> {
        let content = self
            .toolkit
            .content_view(&self.window)
            .ok_or(ChromeError::NoContentView)?;

        let effect = match self.toolkit.as_effect_view(&content) {
            Some(effect) => effect,
            None => {
                let effect = ViewSwapper::new(&mut self.toolkit, &self.window)
                    .replace_with_new(&content, |tk, frame| tk.make_effect_view(frame))?;
                self.publish(ChromeEvent::ContentViewReplaced);
                effect
            }
        };
        self.toolkit.set_material(&effect, material);
        Ok(())
    }

    // === Window appearance ===

    pub fn vibrant_dark_appearance(&self) -> bool {
        self.flags().vibrant_dark_appearance
    }

    pub fn set_vibrant_dark_appearance(&mut self, active: bool) {
        self.set_appearance_flag(Appearance::VibrantDark, active);
    }

    pub fn vibrant_light_appearance(&self) -> bool {
        self.flags().vibrant_light_appearance
    }

    pub fn set_vibrant_light_appearance(&mut self, active: bool) {
        self.set_appearance_flag(Appearance::VibrantLight, active);
    }

    pub fn aqua_appearance(&self) -> bool {
        self.flags().aqua_appearance
    }

    pub fn set_aqua_appearance(&mut self, active: bool) {
        self.set_appearance_flag(Appearance::Aqua, active);
    }

    fn set_appearance_flag(&mut self, appearance: Appearance, active: bool) {
        if active {
            self.toolkit.set_appearance(&self.window, appearance);
        }
        let next = self.state.with_appearance(appearance, active);
        self.transition(next);
    }

    fn transition(&mut self, next: ChromeState) {
        let previous = std::mem::replace(&mut self.state, next);
        if previous == next {
            return;
        }
        debug!(?previous, ?next, "chrome state changed");
        if previous.content_material != next.content_material {
            self.publish(ChromeEvent::ContentMaterialChanged(next.content_material));
        }
        if previous.appearance != next.appearance {
            self.publish(ChromeEvent::AppearanceChanged(next.appearance));
        }
    }

    // === Title bar ===

    /// True iff the window's style mask has the full-screen bit.
    pub fn is_full_screen(&self) -> bool {
        self.toolkit
            .style_mask(&self.window)
            .contains(StyleMask::FULL_SCREEN)
    }

    pub fn accessory_view_controller(&self) -> Option<&T::Accessory> {
        self.accessory.as_ref()
    }

    /// Register `controller` as a title-bar accessory of the window.
    pub fn set_accessory_view_controller(&mut self, controller: T::Accessory) {
        self.toolkit.add_titlebar_accessory(&self.window, &controller);
        self.accessory = Some(controller);
        self.publish(ChromeEvent::AccessoryAdded);
    }

    pub fn hides_title(&self) -> bool {
        self.hides_title
    }

    pub fn set_hides_title(&mut self, hidden: bool) {
        self.toolkit.set_title_hidden(&self.window, hidden);
        if self.hides_title != hidden {
            self.hides_title = hidden;
            self.publish(ChromeEvent::TitleVisibilityChanged { hidden });
        }
    }

    pub fn titlebar_appears_transparent(&self) -> bool {
        self.titlebar_appears_transparent
    }

    pub fn set_titlebar_appears_transparent(&mut self, transparent: bool) {
        self.toolkit.set_titlebar_appears_transparent(&self.window, transparent);
        if self.titlebar_appears_transparent != transparent {
            self.titlebar_appears_transparent = transparent;
            self.publish(ChromeEvent::TitlebarTransparencyChanged { transparent });
        }
    }

    // === View swapping ===

    /// Replace `old` (the content view or any view below it) with `new`.
    ///
    /// A plain view replacing the content view clears the content material.
    pub fn replace_subview(
        &mut self,
        old: &T::View,
        new: &T::View,
        resizing: Resizing,
    ) -> Result<(), ChromeError> {
        let was_content = self.is_content_view(old);
        ViewSwapper::new(&mut self.toolkit, &self.window).replace(old, new, resizing)?;
        if was_content {
            self.content_view_replaced();
        }
        Ok(())
    }

    /// Build a view with `factory` from `old`'s frame and swap it in.
    pub fn replace_subview_with_new<V, F>(
        &mut self,
        old: &T::View,
        factory: F,
    ) -> Result<V, ChromeError>
    where
        V: Clone + Into<T::View>,
        F: FnOnce(&mut T, Rect) -> V,
    {
        let was_content = self.is_content_view(old);
        let created =
            ViewSwapper::new(&mut self.toolkit, &self.window).replace_with_new(old, factory)?;
        if was_content {
            self.content_view_replaced();
        }
        Ok(created)
    }

    fn is_content_view(&self, view: &T::View) -> bool {
        self.toolkit.content_view(&self.window).as_ref() == Some(view)
    }

    fn content_view_replaced(&mut self) {
        self.publish(ChromeEvent::ContentViewReplaced);
        let is_effect = self
            .toolkit
            .content_view(&self.window)
            .and_then(|content| self.toolkit.as_effect_view(&content))
            .is_some();
        if !is_effect {
            let next = ChromeState {
                content_material: None,
                ..self.state
            };
            self.transition(next);
        }
    }

    // === Configuration ===

    /// Apply `config` through the ordinary setters.
    pub fn apply_config(&mut self, config: &ChromeConfig) -> Result<(), ChromeError> {
        match (config.content_material, self.state.content_material) {
            (Some(material), _) => self.set_content_material(material, true)?,
            (None, Some(current)) => self.set_content_material(current, false)?,
            (None, None) => {}
        }
        self.set_appearance_flag(config.appearance, true);
        self.set_hides_title(config.hides_title);
        self.set_titlebar_appears_transparent(config.titlebar_appears_transparent);
        Ok(())
    }

    /// Snapshot of the current chrome as a config.
    pub fn config(&self) -> ChromeConfig {
        ChromeConfig {
            content_material: self.state.content_material,
            appearance: self.state.appearance.unwrap_or_default(),
            hides_title: self.hides_title,
            titlebar_appears_transparent: self.titlebar_appears_transparent,
        }
    }

    fn publish(&self, event: ChromeEvent) {
        if let Some(publisher) = &self.publisher {
            publisher.publish(event);
        }
    }
}
