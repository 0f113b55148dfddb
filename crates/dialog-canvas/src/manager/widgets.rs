//! Dialog and widget lifecycle

use tracing::{debug, trace};
use crate::error::UiError;
use crate::input::{Cursor, UiEvent};
use crate::layout::Dimensions;
use crate::math::{Size, Vec2};
use crate::widget::{TextEditState, Widget, WidgetConfig, WidgetId, WidgetKind};
use super::Manager;

impl Manager {
    /// Open a new dialog on top of every other dialog
    pub fn open_root(&mut self, config: WidgetConfig) -> Result<WidgetId, UiError> {
        self.create(None, config)
    }

    /// Add a widget inside `parent`
    pub fn add_widget(&mut self, parent: WidgetId, config: WidgetConfig) -> Result<WidgetId, UiError> {
        self.create(Some(parent), config)
    }

    fn create(&mut self, parent: Option<WidgetId>, config: WidgetConfig) -> Result<WidgetId, UiError> {
        let id = self.next_id;
        let root = match parent {
            Some(parent) => self.tree.require(parent)?.root(),
            None => id,
        };
        self.next_id += 1;

        let (pattern, kind) = config.into_pattern();
        let mut dimensions = Dimensions::new(pattern);
        if let Some(reference) = dimensions.pattern().style.clone() {
            let (style, missing) = self.styles.resolve_known(&reference);
            for err in missing {
                self.warn(err);
            }
            dimensions.set_style(style);
        }

        self.tree.insert(Widget::new(id, kind, parent, root, dimensions))?;
        if parent.is_none() {
            let z = self.tick();
            self.tree.set_z_order(id, z)?;
            self.roots.push(id);
        }

        match self.tree.resolve(id) {
            Ok(resolved) => {
                let (char_width, padding) = (self.config.char_width, self.config.text_padding);
                let widget = self.tree.require_mut(id)?;
                widget.dimensions.record_original(resolved);
                if kind == WidgetKind::Input {
                    widget.text = Some(TextEditState::new(resolved.size.width, padding, char_width));
                }
            }
            Err(err) if err.is_recoverable() => self.warn(err),
            Err(err) => {
                self.discard(id)?;
                return Err(err);
            }
        }

        self.rebuild_own_map(id);
        self.rebuild_owner_map(parent);

        debug!(widget = id, ?parent, ?kind, "widget created");
        self.request_redraw();
        Ok(id)
    }

    /// Undo a half-built widget
    fn discard(&mut self, id: WidgetId) -> Result<(), UiError> {
        self.tree.remove_subtree(id)?;
        self.roots.retain(|&r| r != id);
        Ok(())
    }

    /// Close a widget together with everything nested in it
    pub fn close(&mut self, id: WidgetId) -> Result<(), UiError> {
        let parent = self.tree.require(id)?.parent();
        let closing = self.tree.subtree(id);
        let leaf_removed = self
            .router
            .focus_leaf()
            .is_some_and(|leaf| closing.contains(&leaf));

        for member in self.scope_chain(Cursor::over).into_iter().rev() {
            let focused = self.tree.get(member).is_some_and(|w| w.dimensions().focused());
            if closing.contains(&member) && !focused {
                self.emit(UiEvent::HoverLost { id: member });
            }
        }
        for member in self.scope_chain(Cursor::focused).into_iter().rev() {
            if closing.contains(&member) {
                self.emit(UiEvent::FocusLost { id: member });
            }
        }

        let removed = self.tree.remove_subtree(id)?;
        for &member in &removed {
            self.router.forget(member);
        }
        self.roots.retain(|r| !removed.contains(r));

        if let Some(parent) = parent.and_then(|p| self.tree.get_mut(p)) {
            parent.cursor.forget(id);
        }
        if leaf_removed {
            let fallback = parent.filter(|&p| {
                self.tree.get(p).is_some_and(|w| w.dimensions().focused())
            });
            self.router.set_focus_leaf(fallback);
        }

        self.rebuild_owner_map(parent);
        debug!(widget = id, removed = removed.len(), "widget closed");
        self.request_redraw();
        Ok(())
    }

    /// Change the canvas size. Every position derived from a pattern is
    /// recomputed and every hit map rebuilt.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.width = width;
        self.config.height = height;
        self.tree.set_surface(Size::new(width, height));
        self.tree.invalidate_all();

        let padding = self.config.text_padding;
        for id in self.all_widgets() {
            let Ok(resolved) = self.tree.resolve(id) else {
                continue;
            };
            if let Some(text) = self.tree.get_mut(id).and_then(|w| w.text_mut()) {
                text.set_width(resolved.size.width, padding);
            }
        }

        self.rebuild_all_maps();
        debug!(width, height, "surface resized");
        self.request_redraw();
    }

    /// Rebuild every map flagged dirty by drags or z changes
    pub fn rebuild_maps(&mut self) {
        if self.hit_map.is_dirty() {
            self.rebuild_root_map();
        }
        for id in self.all_widgets() {
            if self.tree.get(id).is_some_and(|w| w.hit_map().is_dirty()) {
                self.rebuild_own_map(id);
            }
        }
    }

    /// Flag the map `id` is registered in
    pub(crate) fn mark_owner_dirty(&mut self, id: WidgetId) {
        match self.tree.get(id).and_then(|w| w.parent()) {
            Some(parent) => {
                if let Some(parent) = self.tree.get_mut(parent) {
                    parent.hit_map.mark_dirty();
                }
            }
            None => self.hit_map.mark_dirty(),
        }
    }

    fn rebuild_all_maps(&mut self) {
        self.rebuild_root_map();
        for id in self.all_widgets() {
            self.rebuild_own_map(id);
        }
    }

    fn rebuild_owner_map(&mut self, parent: Option<WidgetId>) {
        match parent {
            Some(parent) => self.rebuild_own_map(parent),
            None => self.rebuild_root_map(),
        }
    }

    fn rebuild_own_map(&mut self, id: WidgetId) {
        match self.tree.rebuild_child_map(id) {
            Ok(entries) => trace!(widget = id, entries, "widget map rebuilt"),
            Err(err) => trace!(widget = id, error = %err, "widget map left empty"),
        }
    }

    /// Rebuild the dialog map; dialogs with higher z win
    fn rebuild_root_map(&mut self) {
        let (width, height) = self.tree.surface().to_pixels();
        let mut entries = Vec::new();
        for id in self.roots_by_z() {
            let Some(widget) = self.tree.get(id) else {
                continue;
            };
            if !widget.dimensions().clickable() {
                continue;
            }
            if let Ok(resolved) = self.tree.resolve(id) {
                entries.push((id, resolved.rect().to_pixels()));
            }
        }

        self.hit_map.reset(width, height);
        for (id, bounds) in entries {
            self.hit_map.insert(id, bounds);
        }
        debug!(entries = self.hit_map.len(), "dialog map rebuilt");
    }

    /// Dialogs from bottom to top
    pub(crate) fn roots_by_z(&self) -> Vec<WidgetId> {
        let mut ordered: Vec<(u64, usize, WidgetId)> = self
            .roots
            .iter()
            .enumerate()
            .map(|(i, &id)| (self.tree.z_order(id).unwrap_or(0), i, id))
            .collect();
        ordered.sort_unstable();
        ordered.into_iter().map(|(_, _, id)| id).collect()
    }

    /// Every widget, dialogs bottom to top and each dialog pre-order
    pub(crate) fn all_widgets(&self) -> Vec<WidgetId> {
        self.roots_by_z()
            .into_iter()
            .flat_map(|root| self.tree.subtree(root))
            .collect()
    }

    /// Topmost dialog at a canvas point
    pub fn hit(&self, x: f32, y: f32) -> Option<WidgetId> {
        let (px, py) = Vec2::new(x, y).to_pixel();
        self.hit_map.hit(px, py)
    }

    /// Chain from the topmost dialog down to the deepest widget at a
    /// canvas point. Empty when the point is outside every dialog.
    pub fn hit_path(&self, x: f32, y: f32) -> Vec<WidgetId> {
        let point = Vec2::new(x, y);
        let Some(dialog) = self.hit(x, y) else {
            return Vec::new();
        };
        match self.tree.resolve(dialog) {
            Ok(resolved) => self.tree.descend(dialog, point - resolved.relative),
            Err(_) => Vec::new(),
        }
    }

    /// Deepest widget at a canvas point
    pub fn widget_at(&self, x: f32, y: f32) -> Option<WidgetId> {
        self.hit_path(x, y).last().copied()
    }

    /// Like [`widget_at`](Self::widget_at), additionally recording the
    /// offset of the point into the hit widget in its scope's cursor.
    pub fn hit_click(&mut self, x: f32, y: f32) -> Option<WidgetId> {
        let id = self.widget_at(x, y)?;
        let Ok(resolved) = self.tree.resolve(id) else {
            return Some(id);
        };
        let offset = Vec2::new(x, y) - resolved.absolute;
        if let Some(scope) = self.scope_cursor_mut(id) {
            scope.set_click(id, offset);
        }
        Some(id)
    }

    /// Cursor of the scope `id` is a member of
    pub(crate) fn scope_cursor_mut(&mut self, id: WidgetId) -> Option<&mut Cursor> {
        let parent = self.tree.get(id)?.parent();
        match parent {
            Some(parent) => self.tree.get_mut(parent).map(|w| &mut w.cursor),
            None => Some(self.router.cursor_mut()),
        }
    }
}
