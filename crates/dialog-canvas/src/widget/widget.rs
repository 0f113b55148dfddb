//! Widget node

use crate::hit::HitMap;
use crate::input::Cursor;
use crate::layout::Dimensions;
use super::{TextEditState, WidgetId, WidgetKind};

/// A dialog or one of its nested widgets.
///
/// Parent and root are ids into the owning [`WidgetTree`](super::WidgetTree),
/// never references. Every widget is the focus/hover scope of its children
/// and owns the hit map those children are registered in.
#[derive(Clone, Debug)]
pub struct Widget {
    pub(crate) id: WidgetId,
    pub(crate) kind: WidgetKind,
    pub(crate) parent: Option<WidgetId>,
    /// Top-level dialog this widget belongs to (itself for a dialog)
    pub(crate) root: WidgetId,
    /// Children in creation order
    pub(crate) children: Vec<WidgetId>,
    pub(crate) dimensions: Dimensions,
    pub(crate) cursor: Cursor,
    /// Children's footprints in this widget's local space
    pub(crate) hit_map: HitMap,
    /// Text model, present on input widgets only
    pub(crate) text: Option<TextEditState>,
}

impl Widget {
    pub(crate) fn new(
        id: WidgetId,
        kind: WidgetKind,
        parent: Option<WidgetId>,
        root: WidgetId,
        dimensions: Dimensions,
    ) -> Self {
        Self {
            id,
            kind,
            parent,
            root,
            children: Vec::new(),
            dimensions,
            cursor: Cursor::new(),
            hit_map: HitMap::default(),
            text: None,
        }
    }

    #[inline]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    #[inline]
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    #[inline]
    pub fn root(&self) -> WidgetId {
        self.root
    }

    /// Check if this widget is a top-level dialog
    #[inline]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[inline]
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    #[inline]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[inline]
    pub fn dimensions_mut(&mut self) -> &mut Dimensions {
        &mut self.dimensions
    }

    #[inline]
    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    #[inline]
    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    #[inline]
    pub fn text(&self) -> Option<&TextEditState> {
        self.text.as_ref()
    }

    #[inline]
    pub fn text_mut(&mut self) -> Option<&mut TextEditState> {
        self.text.as_mut()
    }

    /// Dragging this widget moves its whole dialog
    pub fn drags_root(&self) -> bool {
        self.kind == WidgetKind::DragFrame || self.dimensions.globally_moveable()
    }
}
