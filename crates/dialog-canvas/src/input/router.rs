//! Pointer router state machine

use crate::math::Vec2;
use crate::widget::WidgetId;
use super::{Cursor, DragState};

/// Manager-level pointer state
///
/// Holds the dialog scope (`cursor`), the button state, the active drag
/// and the focus leaf that receives keys.
#[derive(Debug, Default)]
pub struct PointerRouter {
    /// Dialog scope
    cursor: Cursor,
    /// Last pointer position on the canvas
    position: Vec2,
    down: bool,
    /// Widget that claimed the current press
    pressed: Option<WidgetId>,
    drag: Option<DragState>,
    /// Deepest focused widget
    focus_leaf: Option<WidgetId>,
}

impl PointerRouter {
    /// Create a new pointer router
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[inline]
    pub fn cursor_mut(&mut self) -> &mut Cursor {
        &mut self.cursor
    }

    /// Last pointer position on the canvas
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Check if the button is held
    #[inline]
    pub fn is_down(&self) -> bool {
        self.down
    }

    /// Widget that claimed the current press
    #[inline]
    pub fn pressed(&self) -> Option<WidgetId> {
        self.pressed
    }

    /// Record a press claimed by `claimer`, optionally starting a drag
    pub fn press(&mut self, claimer: Option<WidgetId>, drag: Option<DragState>) {
        self.down = true;
        self.pressed = claimer;
        self.drag = drag;
    }

    /// Record a release, ending any drag. Returns the drag that ended.
    pub fn release(&mut self) -> Option<DragState> {
        self.down = false;
        self.pressed = None;
        self.drag.take()
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn drag_state_mut(&mut self) -> Option<&mut DragState> {
        self.drag.as_mut()
    }

    /// Check if currently dragging
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Widget that receives key input
    #[inline]
    pub fn focus_leaf(&self) -> Option<WidgetId> {
        self.focus_leaf
    }

    #[inline]
    pub fn set_focus_leaf(&mut self, leaf: Option<WidgetId>) {
        self.focus_leaf = leaf;
    }

    /// Drop every reference to `id`
    pub fn forget(&mut self, id: WidgetId) {
        self.cursor.forget(id);
        if self.pressed == Some(id) {
            self.pressed = None;
        }
        if self.drag.as_ref().is_some_and(|d| d.anchor == id) {
            self.drag = None;
        }
        if self.focus_leaf == Some(id) {
            self.focus_leaf = None;
        }
    }
}
