//! Drag state for pointer operations

use crate::math::Vec2;
use crate::widget::WidgetId;

/// Active drag started by a press
#[derive(Clone, Debug, PartialEq)]
pub struct DragState {
    /// Widget whose position follows the pointer
    pub anchor: WidgetId,
    /// Offset from the anchor's origin to the press point, in the
    /// anchor's parent space
    pub offset: Vec2,
    /// Set once a move has been committed
    pub moved: bool,
}

impl DragState {
    pub fn new(anchor: WidgetId, offset: Vec2) -> Self {
        Self {
            anchor,
            offset,
            moved: false,
        }
    }

    /// Relative position that keeps the press point under the pointer
    #[inline]
    pub fn target(&self, pointer_in_parent: Vec2) -> Vec2 {
        pointer_in_parent - self.offset
    }
}
