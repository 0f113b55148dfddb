//! Pointer and key routing

use tracing::trace;
use crate::error::UiError;
use crate::input::{common_prefix, Cursor, DragState, InputResult, Key, Transition, UiEvent};
use crate::math::Vec2;
use crate::widget::{WidgetId, MAX_DEPTH};
use super::Manager;

impl Manager {
    /// Handle pointer motion to canvas point `(x, y)`
    pub fn pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let point = Vec2::new(x, y);
        self.router.set_position(point);

        let moved = if self.router.is_down() {
            match self.commit_drag(point) {
                Ok(moved) => moved,
                Err(err) => {
                    self.warn(err);
                    false
                }
            }
        } else {
            false
        };

        let path = self.hit_path(x, y);
        let hover_changed = self.update_hover(&path);
        if hover_changed {
            self.request_redraw();
        }

        trace!(x, y, depth = path.len(), moved, "pointer move");
        (moved || !path.is_empty()).into()
    }

    /// Handle the button going down at `(x, y)`
    pub fn pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        self.pointer_move(x, y);

        let Some(claimer) = self.hit_click(x, y) else {
            self.router.press(None, None);
            return InputResult::Unhandled;
        };

        let z = self.tick();
        if let Err(err) = self.tree.set_z_order(claimer, z) {
            self.warn(err);
        }
        self.hit_map.mark_dirty();

        let drag = self.start_drag(claimer);
        self.router.press(Some(claimer), drag);

        trace!(widget = claimer, z, "press claimed");
        self.emit(UiEvent::Pressed { id: claimer, x, y });
        self.request_redraw();
        InputResult::Handled
    }

    /// Handle the button going up at `(x, y)`
    pub fn pointer_up(&mut self, x: f32, y: f32) -> InputResult {
        self.router.set_position(Vec2::new(x, y));
        let was_down = self.router.is_down();
        let drag = self.router.release();
        self.rebuild_maps();

        let path = self.hit_path(x, y);
        self.update_hover(&path);
        self.emit(UiEvent::Released {
            id: path.last().copied(),
            x,
            y,
        });

        if path.is_empty() {
            let dragged = drag.is_some_and(|d| d.moved);
            return dragged.into();
        }

        if was_down {
            self.update_focus(&path);
            self.router.set_focus_leaf(path.last().copied());
        }
        self.request_redraw();
        InputResult::Handled
    }

    /// Button state change at the last known pointer position
    pub fn press_changed(&mut self, down: bool) -> InputResult {
        let position = self.router.position();
        if down {
            self.pointer_down(position.x, position.y)
        } else {
            self.pointer_up(position.x, position.y)
        }
    }

    /// Deliver a key to the focused widget
    pub fn key(&mut self, key: Key) -> InputResult {
        let Some(leaf) = self.router.focus_leaf() else {
            return InputResult::Unhandled;
        };
        let Some(widget) = self.tree.get_mut(leaf) else {
            return InputResult::Unhandled;
        };

        let edited = widget.text_mut().is_some_and(|text| text.apply(key));
        self.emit(UiEvent::Key { id: leaf, key });
        if edited {
            self.request_redraw();
        }
        InputResult::Handled
    }

    /// Deliver a DOM-style key code to the focused widget
    pub fn key_code(&mut self, code: u32) -> InputResult {
        self.key(Key::from_code(code))
    }

    /// Turn the offset `hit_click` recorded for `claimer` into a drag of
    /// its anchor: the claimer itself, or its dialog for drag frames
    fn start_drag(&mut self, claimer: WidgetId) -> Option<DragState> {
        let widget = self.tree.get(claimer)?;
        let anchor = if widget.drags_root() {
            widget.root()
        } else {
            claimer
        };
        let click = self.scope_cursor_mut(claimer)?.take_click(claimer)?;
        let claimer_origin = self.tree.resolve(claimer).ok()?.absolute;
        let anchor_origin = self.tree.resolve(anchor).ok()?.absolute;
        Some(DragState::new(anchor, click + claimer_origin - anchor_origin))
    }

    /// Move the drag anchor so the press point stays under the pointer
    fn commit_drag(&mut self, point: Vec2) -> Result<bool, UiError> {
        let Some(drag) = self.router.drag_state().cloned() else {
            return Ok(false);
        };
        if !self.tree.require(drag.anchor)?.dimensions().moveable() {
            return Ok(false);
        }

        let resolved = self.tree.resolve(drag.anchor)?;
        let parent_origin = resolved.absolute - resolved.relative;
        let target = drag.target(point - parent_origin);

        self.tree
            .require_mut(drag.anchor)?
            .dimensions_mut()
            .set_relative(target);
        self.mark_owner_dirty(drag.anchor);
        if let Some(state) = self.router.drag_state_mut() {
            state.moved = true;
        }

        self.emit(UiEvent::Moved {
            id: drag.anchor,
            x: target.x,
            y: target.y,
        });
        self.request_redraw();
        Ok(true)
    }

    /// Chain of scope members starting at the dialog scope, following
    /// `step` through each member's own cursor
    pub(super) fn scope_chain(&self, step: fn(&Cursor) -> Option<WidgetId>) -> Vec<WidgetId> {
        let mut chain = Vec::new();
        let mut next = step(self.router.cursor());
        while let Some(id) = next {
            if chain.contains(&id) || chain.len() >= MAX_DEPTH {
                break;
            }
            chain.push(id);
            next = self.tree.get(id).and_then(|w| step(w.cursor()));
        }
        chain
    }

    /// Point each scope on `path` at its member on `path`
    fn retarget(&mut self, path: &[WidgetId], split: usize, update: fn(&mut Cursor, Option<WidgetId>) -> Transition) {
        let first = path.get(split).copied();
        match split.checked_sub(1).and_then(|i| path.get(i)) {
            Some(&scope) => {
                if let Some(widget) = self.tree.get_mut(scope) {
                    update(&mut widget.cursor, first);
                }
            }
            None => {
                update(self.router.cursor_mut(), first);
            }
        }
        for (i, &id) in path.iter().enumerate().skip(split) {
            let next = path.get(i + 1).copied();
            if let Some(widget) = self.tree.get_mut(id) {
                update(&mut widget.cursor, next);
            }
        }
    }

    /// Move hover to `path`. Lost hover is signalled deepest first and
    /// before any gain; focused widgets change state silently.
    fn update_hover(&mut self, path: &[WidgetId]) -> bool {
        let previous = self.scope_chain(Cursor::over);
        let split = common_prefix(&previous, path);
        if split == previous.len() && split == path.len() {
            return false;
        }

        for &id in previous[split..].iter().rev() {
            let Some(widget) = self.tree.get_mut(id) else {
                continue;
            };
            widget.cursor.track_over(None);
            widget.dimensions.set_hovered(false);
            if !widget.dimensions.focused() {
                self.emit(UiEvent::HoverLost { id });
            }
        }

        self.retarget(path, split, Cursor::track_over);
        for &id in &path[split..] {
            let Some(widget) = self.tree.get_mut(id) else {
                continue;
            };
            widget.dimensions.set_hovered(true);
            if !widget.dimensions.focused() {
                self.emit(UiEvent::HoverGained { id });
            }
        }
        true
    }

    /// Move focus to `path`, one member per scope. Every `FocusLost`
    /// precedes every `FocusGained`.
    fn update_focus(&mut self, path: &[WidgetId]) {
        let previous = self.scope_chain(Cursor::focused);
        let split = common_prefix(&previous, path);
        if split == previous.len() && split == path.len() {
            return;
        }

        for &id in previous[split..].iter().rev() {
            let Some(widget) = self.tree.get_mut(id) else {
                continue;
            };
            widget.cursor.swap_focus(None);
            widget.dimensions.set_focused(false);
            self.emit(UiEvent::FocusLost { id });
        }

        self.retarget(path, split, Cursor::swap_focus);
        for &id in &path[split..] {
            if let Some(widget) = self.tree.get_mut(id) {
                widget.dimensions.set_focused(true);
                self.emit(UiEvent::FocusGained { id });
            }
        }
        trace!(leaf = ?path.last(), "focus moved");
    }
}
