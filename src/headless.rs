//! In-memory toolkit.
//!
//! `HeadlessToolkit` keeps windows, views and constraints in arenas and
//! implements [`Toolkit`] with the same observable behavior the AppKit
//! binding has for the operations this crate uses. It backs the test suite
//! and the demo on platforms without AppKit.
//!
//! Reparenting can be configured to shift a child's frame, the way some
//! toolkits do when a view moves between parents.

use crate::model::{Appearance, Material, Point, Rect, StyleMask};
use crate::toolkit::Toolkit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowId(usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(usize);

/// A view known to be an effect view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectViewId(ViewId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConstraintId(usize);

/// A title-bar accessory controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccessoryId(usize);

impl From<EffectViewId> for ViewId {
    fn from(view: EffectViewId) -> Self {
        view.0
    }
}

#[derive(Debug)]
struct ViewNode {
    frame: Rect,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    constraints: Vec<ConstraintId>,
    autoresizes_subviews: bool,
    /// `Some` for effect views; `None` inside means a material outside
    /// [`Material`].
    effect: Option<Option<Material>>,
}

#[derive(Debug)]
struct ConstraintNode {
    first: ViewId,
    second: Option<ViewId>,
    owner: Option<ViewId>,
}

#[derive(Debug)]
struct WindowNode {
    content: Option<ViewId>,
    style_mask: StyleMask,
    appearance: Option<Appearance>,
    accessories: Vec<AccessoryId>,
    title_hidden: bool,
    titlebar_transparent: bool,
}

/// Arena-backed toolkit with no rendering.
#[derive(Debug)]
pub struct HeadlessToolkit {
    windows: Vec<WindowNode>,
    views: Vec<ViewNode>,
    constraints: Vec<ConstraintNode>,
    accessories: Vec<String>,
    effect_views_available: bool,
    reparent_shift: Option<Point>,
    layout_passes: Vec<ViewId>,
}

impl HeadlessToolkit {
    /// A toolkit that provides effect views.
    pub fn new() -> Self {
        Self {
            windows: Vec::new(),
            views: Vec::new(),
            constraints: Vec::new(),
            accessories: Vec::new(),
            effect_views_available: true,
            reparent_shift: None,
            layout_passes: Vec::new(),
        }
    }

    /// A toolkit whose runtime probe reports no effect view type.
    pub fn without_effect_views() -> Self {
        Self {
            effect_views_available: false,
            ..Self::new()
        }
    }

    /// Offset applied to a child's frame each time it is added to a parent.
    pub fn with_reparent_shift(mut self, dx: f64, dy: f64) -> Self {
        self.reparent_shift = Some(Point::new(dx, dy));
        self
    }

    /// Create a window with a plain content view filling `frame`.
    pub fn create_window(&mut self, frame: Rect, style_mask: StyleMask) -> WindowId {
        let content = self.make_view(Rect::new(Point::default(), frame.size));
        self.windows.push(WindowNode {
            content: Some(content),
            style_mask,
            appearance: None,
            accessories: Vec::new(),
            title_hidden: false,
            titlebar_transparent: false,
        });
        WindowId(self.windows.len() - 1)
    }

    pub fn set_style_mask(&mut self, window: &WindowId, style_mask: StyleMask) {
        self.window_mut(window).style_mask = style_mask;
    }

    /// Appearance last set on `window`, if any.
    pub fn appearance(&self, window: &WindowId) -> Option<Appearance> {
        self.window(window).appearance
    }

    pub fn accessories(&self, window: &WindowId) -> &[AccessoryId] {
        &self.window(window).accessories
    }

    pub fn title_hidden(&self, window: &WindowId) -> bool {
        self.window(window).title_hidden
    }

    pub fn titlebar_appears_transparent(&self, window: &WindowId) -> bool {
        self.window(window).titlebar_transparent
    }

    pub fn make_accessory(&mut self, name: &str) -> AccessoryId {
        self.accessories.push(name.to_string());
        AccessoryId(self.accessories.len() - 1)
    }

    pub fn accessory_name(&self, accessory: &AccessoryId) -> &str {
        &self.accessories[accessory.0]
    }

    /// Create a constraint relating `first` (and optionally `second`) and
    /// install it on `owner`.
    pub fn add_constraint(
        &mut self,
        owner: &ViewId,
        first: &ViewId,
        second: Option<&ViewId>,
    ) -> ConstraintId {
        self.constraints.push(ConstraintNode {
            first: *first,
            second: second.copied(),
            owner: Some(*owner),
        });
        let id = ConstraintId(self.constraints.len() - 1);
        self.view_mut(owner).constraints.push(id);
        id
    }

    /// Constraints currently installed on `view`, in installation order.
    pub fn constraints(&self, view: &ViewId) -> &[ConstraintId] {
        &self.view(view).constraints
    }

    pub fn constraint_owner(&self, constraint: &ConstraintId) -> Option<ViewId> {
        self.constraints[constraint.0].owner
    }

    /// The views a constraint relates.
    pub fn constraint_items(&self, constraint: &ConstraintId) -> (ViewId, Option<ViewId>) {
        let node = &self.constraints[constraint.0];
        (node.first, node.second)
    }

    /// Every view `layout_subtree` was called on, oldest first.
    pub fn layout_passes(&self) -> &[ViewId] {
        &self.layout_passes
    }

    /// True if `view` is reachable from `window`'s content view.
    pub fn is_in_window(&self, window: &WindowId, view: &ViewId) -> bool {
        let Some(content) = self.window(window).content else {
            return false;
        };
        let mut current = Some(*view);
        while let Some(v) = current {
            if v == content {
                return true;
            }
            current = self.view(&v).parent;
        }
        false
    }

    fn window(&self, window: &WindowId) -> &WindowNode {
        &self.windows[window.0]
    }

    fn window_mut(&mut self, window: &WindowId) -> &mut WindowNode {
        &mut self.windows[window.0]
    }

    fn view(&self, view: &ViewId) -> &ViewNode {
        &self.views[view.0]
    }

    fn view_mut(&mut self, view: &ViewId) -> &mut ViewNode {
        &mut self.views[view.0]
    }

    fn push_view(&mut self, frame: Rect, effect: Option<Option<Material>>) -> ViewId {
        self.views.push(ViewNode {
            frame,
            parent: None,
            children: Vec::new(),
            constraints: Vec::new(),
            autoresizes_subviews: true,
            effect,
        });
        ViewId(self.views.len() - 1)
    }

    fn attach(&mut self, parent: &ViewId, child: &ViewId, index: Option<usize>) {
        self.remove_from_superview(child);
        let children = &mut self.view_mut(parent).children;
        match index {
            Some(i) if i <= children.len() => children.insert(i, *child),
            _ => children.push(*child),
        }
        let shift = self.reparent_shift;
        let node = self.view_mut(child);
        node.parent = Some(*parent);
        if let Some(shift) = shift {
            node.frame.origin.x += shift.x;
            node.frame.origin.y += shift.y;
        }
    }
}

impl Default for HeadlessToolkit {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolkit for HeadlessToolkit {
    type Window = WindowId;
    type View = ViewId;
    type EffectView = EffectViewId;
    type Constraint = ConstraintId;
    type Accessory = AccessoryId;

    fn frame(&self, view: &ViewId) -> Rect {
        self.view(view).frame
    }

    fn set_frame(&mut self, view: &ViewId, frame: Rect) {
        self.view_mut(view).frame = frame;
    }

    fn take_constraints(&mut self, view: &ViewId) -> Vec<ConstraintId> {
        let taken = std::mem::take(&mut self.view_mut(view).constraints);
        for c in &taken {
            self.constraints[c.0].owner = None;
        }
        taken
    }

    fn add_constraints(&mut self, view: &ViewId, constraints: Vec<ConstraintId>) {
        for c in &constraints {
            self.constraints[c.0].owner = Some(*view);
        }
        self.view_mut(view).constraints.extend(constraints);
    }

    fn constraint_count(&self, view: &ViewId) -> usize {
        self.view(view).constraints.len()
    }

    fn autoresizes_subviews(&self, view: &ViewId) -> bool {
        self.view(view).autoresizes_subviews
    }

    fn set_autoresizes_subviews(&mut self, view: &ViewId, flag: bool) {
        self.view_mut(view).autoresizes_subviews = flag;
    }

    fn subviews(&self, view: &ViewId) -> Vec<ViewId> {
        self.view(view).children.clone()
    }

    fn superview(&self, view: &ViewId) -> Option<ViewId> {
        self.view(view).parent
    }

    fn remove_from_superview(&mut self, view: &ViewId) {
        let parent = self.view_mut(view).parent.take();
        if let Some(parent) = parent {
            self.view_mut(&parent).children.retain(|c| c != view);
        }
    }

    fn add_subview(&mut self, parent: &ViewId, child: &ViewId) {
        self.attach(parent, child, None);
    }

    fn add_subview_above(&mut self, parent: &ViewId, child: &ViewId, sibling: &ViewId) {
        let index = self
            .view(parent)
            .children
            .iter()
            .position(|c| c == sibling)
            .map(|i| i + 1);
        self.attach(parent, child, index);
    }

    fn layout_subtree(&mut self, view: &ViewId) {
        self.layout_passes.push(*view);
    }

    fn make_view(&mut self, frame: Rect) -> ViewId {
        self.push_view(frame, None)
    }

    fn make_effect_view(&mut self, frame: Rect) -> EffectViewId {
        EffectViewId(self.push_view(frame, Some(None)))
    }

    fn set_material(&mut self, view: &EffectViewId, material: Material) {
        self.view_mut(&view.0).effect = Some(Some(material));
    }

    fn material(&self, view: &EffectViewId) -> Option<Material> {
        self.view(&view.0).effect.flatten()
    }

    fn as_effect_view(&self, view: &ViewId) -> Option<EffectViewId> {
        self.view(view).effect.map(|_| EffectViewId(*view))
    }

    fn has_effect_view_type(&self) -> bool {
        self.effect_views_available
    }

    fn content_view(&self, window: &WindowId) -> Option<ViewId> {
        self.window(window).content
    }

    fn set_content_view(&mut self, window: &WindowId, view: &ViewId) {
        self.remove_from_superview(view);
        self.window_mut(window).content = Some(*view);
    }

    fn style_mask(&self, window: &WindowId) -> StyleMask {
        self.window(window).style_mask
    }

    fn set_appearance(&mut self, window: &WindowId, appearance: Appearance) {
        self.window_mut(window).appearance = Some(appearance);
    }

    fn add_titlebar_accessory(&mut self, window: &WindowId, accessory: &AccessoryId) {
        self.window_mut(window).accessories.push(*accessory);
    }

    fn set_title_hidden(&mut self, window: &WindowId, hidden: bool) {
        self.window_mut(window).title_hidden = hidden;
    }

    fn set_titlebar_appears_transparent(&mut self, window: &WindowId, transparent: bool) {
        self.window_mut(window).titlebar_transparent = transparent;
    }
}
