//! Per-scope pointer tracker

use crate::math::Vec2;
use crate::widget::WidgetId;

/// Change of the occupant of a single-holder slot (hover or focus)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    /// Previous holder; notified first
    pub lost: Option<WidgetId>,
    /// New holder; notified second
    pub gained: Option<WidgetId>,
}

impl Transition {
    /// Check if the holder actually changed
    #[inline]
    pub fn is_change(&self) -> bool {
        self.lost != self.gained
    }
}

/// Pointer state of one nesting scope.
///
/// The manager owns one for the dialog scope; every widget owns one for
/// its children. Each scope holds at most one hovered and at most one
/// focused member.
#[derive(Clone, Debug, Default)]
pub struct Cursor {
    /// Member under the pointer
    over: Option<WidgetId>,
    /// Focused member
    focused: Option<WidgetId>,
    /// Last pressed member and the press point relative to its origin
    click: Option<(WidgetId, Vec2)>,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Member currently under the pointer
    #[inline]
    pub fn over(&self) -> Option<WidgetId> {
        self.over
    }

    /// Focused member of this scope
    #[inline]
    pub fn focused(&self) -> Option<WidgetId> {
        self.focused
    }

    /// Offset of the last press into `id`, if `id` was the member pressed
    #[inline]
    pub fn click_offset(&self, id: WidgetId) -> Option<Vec2> {
        self.click.filter(|&(pressed, _)| pressed == id).map(|(_, offset)| offset)
    }

    /// Record a press landing at `offset` inside member `id`
    #[inline]
    pub fn set_click(&mut self, id: WidgetId, offset: Vec2) {
        self.click = Some((id, offset));
    }

    /// Consume the press offset recorded for `id`
    pub fn take_click(&mut self, id: WidgetId) -> Option<Vec2> {
        let offset = self.click_offset(id)?;
        self.click = None;
        Some(offset)
    }

    /// Replace the hovered member, returning what changed
    pub fn track_over(&mut self, next: Option<WidgetId>) -> Transition {
        let lost = std::mem::replace(&mut self.over, next);
        Transition { lost, gained: next }
    }

    /// Replace the focused member, returning what changed
    pub fn swap_focus(&mut self, next: Option<WidgetId>) -> Transition {
        let lost = std::mem::replace(&mut self.focused, next);
        Transition { lost, gained: next }
    }

    /// Drop references to a member that no longer exists
    pub fn forget(&mut self, id: WidgetId) {
        if self.over == Some(id) {
            self.over = None;
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        if self.click.is_some_and(|(pressed, _)| pressed == id) {
            self.click = None;
        }
    }
}
