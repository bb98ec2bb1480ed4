//! Replacing one view with another while preserving structure.
//!
//! The replacement inherits the old view's children (same order, same
//! frames), its constraints, its autoresize-children flag and, unless asked
//! otherwise, its frame. It then takes the old view's place: as the window's
//! content view, or at the old view's index in its parent.
//!
//! Arguments are validated before anything is mutated, so a failed swap
//! leaves the view tree untouched.

use tracing::{debug, warn};

use crate::error::SwapError;
use crate::model::Rect;
use crate::toolkit::Toolkit;

/// Whether the replacement takes over the old view's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Resizing {
    /// Set the new view's frame to the old view's frame.
    #[default]
    Match,
    /// Leave the new view at the frame it was constructed with.
    Keep,
}

/// Where the old view sits in the window's view tree.
enum Slot<V> {
    Content,
    Child(V),
}

/// Swaps views inside one window's hierarchy.
pub struct ViewSwapper<'a, T: Toolkit> {
    toolkit: &'a mut T,
    window: &'a T::Window,
}

impl<'a, T: Toolkit> ViewSwapper<'a, T> {
    pub fn new(toolkit: &'a mut T, window: &'a T::Window) -> Self {
        Self { toolkit, window }
    }

    /// Build a replacement from `old`'s frame and swap it in.
    ///
    /// `factory` receives the toolkit and the old view's frame and returns
    /// the concrete new view, so callers get back the type they built.
    pub fn replace_with_new<V, F>(&mut self, old: &T::View, factory: F) -> Result<V, SwapError>
    where
        V: Clone + Into<T::View>,
        F: FnOnce(&mut T, Rect) -> V,
    {
        self.locate(old)?;

        let frame = self.toolkit.frame(old);
        let created = factory(&mut *self.toolkit, frame);
        self.replace(old, &created.clone().into(), Resizing::Match)?;
        Ok(created)
    }

    /// Replace `old` with `new`.
    pub fn replace(
        &mut self,
        old: &T::View,
        new: &T::View,
        resizing: Resizing,
    ) -> Result<(), SwapError> {
        let slot = self.validate(old, new)?;
        let tk = &mut *self.toolkit;

        let constraints = tk.take_constraints(old);

        if resizing == Resizing::Match {
            let frame = tk.frame(old);
            tk.set_frame(new, frame);
        }

        let autoresizes = tk.autoresizes_subviews(old);
        tk.set_autoresizes_subviews(new, autoresizes);

        let children = tk.subviews(old);
        for child in &children {
            if tk.constraint_count(child) > 0 {
                warn!(
                    ?child,
                    "moving a subview that uses auto layout; its frame may be recomputed"
                );
            }
            let frame = tk.frame(child);
            tk.remove_from_superview(child);
            tk.add_subview(new, child);
            // Reparenting may adjust the frame.
            tk.set_frame(child, frame);
        }

        let moved_constraints = constraints.len();
        tk.add_constraints(new, constraints);

        match slot {
            Slot::Content => tk.set_content_view(self.window, new),
            Slot::Child(parent) => {
                tk.add_subview_above(&parent, new, old);
                tk.remove_from_superview(old);
            }
        }

        if let Some(content) = tk.content_view(self.window) {
            tk.layout_subtree(&content);
        }

        debug!(
            ?old,
            ?new,
            children = children.len(),
            constraints = moved_constraints,
            "view replaced"
        );
        Ok(())
    }

    /// `view` must be the content view or have it as an ancestor.
    fn locate(&self, view: &T::View) -> Result<Slot<T::View>, SwapError> {
        let content = self
            .toolkit
            .content_view(self.window)
            .ok_or(SwapError::Detached)?;
        if *view == content {
            return Ok(Slot::Content);
        }
        let parent = self.toolkit.superview(view).ok_or(SwapError::Detached)?;

        let mut ancestor = Some(parent.clone());
        while let Some(current) = ancestor {
            if current == content {
                return Ok(Slot::Child(parent));
            }
            ancestor = self.toolkit.superview(&current);
        }
        Err(SwapError::Detached)
    }

    fn validate(&self, old: &T::View, new: &T::View) -> Result<Slot<T::View>, SwapError> {
        if old == new {
            return Err(SwapError::SameView);
        }
        let slot = self.locate(old)?;
        let new_is_content = self.toolkit.content_view(self.window).as_ref() == Some(new);
        if new_is_content || self.toolkit.superview(new).is_some() {
            return Err(SwapError::AlreadyAttached);
        }
        Ok(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headless::{HeadlessToolkit, ViewId};
    use crate::model::StyleMask;

    #[test]
    fn test_detached_view_is_rejected_without_mutation() {
        let mut tk = HeadlessToolkit::new();
        let window = tk.create_window(Rect::from_xywh(0.0, 0.0, 400.0, 300.0), StyleMask::TITLED);
        let stray = tk.make_view(Rect::from_xywh(0.0, 0.0, 10.0, 10.0));
        let child = tk.make_view(Rect::from_xywh(1.0, 1.0, 5.0, 5.0));
        tk.add_subview(&stray, &child);
        let replacement = tk.make_view(Rect::default());

        let result =
            ViewSwapper::new(&mut tk, &window).replace(&stray, &replacement, Resizing::Match);

        assert_eq!(result, Err(SwapError::Detached));
        assert_eq!(tk.subviews(&stray), vec![child]);
        assert!(tk.subviews(&replacement).is_empty());
    }

    #[test]
    fn test_view_under_foreign_root_is_rejected_without_mutation() {
        let mut tk = HeadlessToolkit::new();
        let window = tk.create_window(Rect::from_xywh(0.0, 0.0, 400.0, 300.0), StyleMask::TITLED);
        let root = tk.make_view(Rect::from_xywh(0.0, 0.0, 100.0, 100.0));
        let nested = tk.make_view(Rect::from_xywh(5.0, 5.0, 20.0, 20.0));
        tk.add_subview(&root, &nested);
        let replacement = tk.make_view(Rect::default());
        let passes = tk.layout_passes().len();

        let result =
            ViewSwapper::new(&mut tk, &window).replace(&nested, &replacement, Resizing::Match);

        assert_eq!(result, Err(SwapError::Detached));
        assert_eq!(tk.subviews(&root), vec![nested]);
        assert_eq!(tk.superview(&replacement), None);
        assert_eq!(tk.layout_passes().len(), passes);
    }

    #[test]
    fn test_same_view_is_rejected() {
        let mut tk = HeadlessToolkit::new();
        let window = tk.create_window(Rect::from_xywh(0.0, 0.0, 400.0, 300.0), StyleMask::TITLED);
        let content = tk.content_view(&window).unwrap();

        let result =
            ViewSwapper::new(&mut tk, &window).replace(&content, &content, Resizing::Keep);
        assert_eq!(result, Err(SwapError::SameView));
    }

    #[test]
    fn test_attached_replacement_is_rejected() {
        let mut tk = HeadlessToolkit::new();
        let window = tk.create_window(Rect::from_xywh(0.0, 0.0, 400.0, 300.0), StyleMask::TITLED);
        let content = tk.content_view(&window).unwrap();
        let a = tk.make_view(Rect::from_xywh(0.0, 0.0, 50.0, 50.0));
        let b = tk.make_view(Rect::from_xywh(60.0, 0.0, 50.0, 50.0));
        tk.add_subview(&content, &a);
        tk.add_subview(&content, &b);

        let result = ViewSwapper::new(&mut tk, &window).replace(&a, &b, Resizing::Match);

        assert_eq!(result, Err(SwapError::AlreadyAttached));
        assert_eq!(tk.subviews(&content), vec![a, b]);
    }

    #[test]
    fn test_replace_with_new_uses_old_frame() {
        let mut tk = HeadlessToolkit::new();
        let window = tk.create_window(Rect::from_xywh(0.0, 0.0, 400.0, 300.0), StyleMask::TITLED);
        let content = tk.content_view(&window).unwrap();
        let panel = tk.make_view(Rect::from_xywh(10.0, 20.0, 30.0, 40.0));
        tk.add_subview(&content, &panel);

        let created = ViewSwapper::new(&mut tk, &window)
            .replace_with_new(&panel, |tk, frame| tk.make_effect_view(frame))
            .unwrap();

        let created_view: ViewId = created.into();
        assert_eq!(tk.frame(&created_view), Rect::from_xywh(10.0, 20.0, 30.0, 40.0));
        assert_eq!(tk.subviews(&content), vec![created_view]);
    }
}
