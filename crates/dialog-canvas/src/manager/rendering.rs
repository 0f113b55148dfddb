//! Render list for the external canvas renderer

use serde::Serialize;
use crate::math::Rect;
use crate::style::Style;
use crate::widget::{Widget, WidgetId, WidgetKind};
use super::Manager;

/// Visible slice of an input widget's text
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextView {
    pub text: String,
    /// Cursor offset from the start of the text area
    pub cursor_pixel: f32,
}

/// One widget to draw, in canvas coordinates
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderItem {
    pub id: WidgetId,
    pub kind: WidgetKind,
    pub rect: Rect,
    /// Z-order of the owning dialog
    pub z: u64,
    /// Nesting depth, 0 for dialogs
    pub depth: usize,
    pub style: Option<Style>,
    /// Fill after applying hover/focus overrides
    pub fill: Option<String>,
    pub border: Option<String>,
    pub focused: bool,
    pub hovered: bool,
    /// Radius of the background blur pass, dialogs only
    pub blur: Option<u32>,
    pub text: Option<TextView>,
}

impl Manager {
    /// Widgets to draw, back to front.
    ///
    /// Dialogs come in ascending z; within a dialog parents precede
    /// children and siblings keep creation order. Widgets that fail to
    /// resolve are left out.
    pub fn render_list(&self) -> Vec<RenderItem> {
        let mut items = Vec::new();
        for root in self.roots_by_z() {
            let z = self.tree.z_order(root).unwrap_or(0);
            for id in self.tree.subtree(root) {
                let Some(widget) = self.tree.get(id) else {
                    continue;
                };
                let Ok(resolved) = self.tree.resolve(id) else {
                    continue;
                };
                let depth = self.tree.ancestors(id).map_or(0, |chain| chain.len() - 1);
                items.push(render_item(widget, resolved.rect(), z, depth));
            }
        }
        items
    }
}

fn render_item(widget: &Widget, rect: Rect, z: u64, depth: usize) -> RenderItem {
    let dims = widget.dimensions();
    let (focused, hovered) = (dims.focused(), dims.hovered());
    let style = dims.style();

    RenderItem {
        id: widget.id(),
        kind: widget.kind(),
        rect,
        z,
        depth,
        style: style.cloned(),
        fill: style.and_then(|s| s.effective_fill(focused, hovered)).map(str::to_string),
        border: style.and_then(|s| s.effective_border(focused)).map(str::to_string),
        focused,
        hovered,
        blur: style
            .filter(|s| s.blur && widget.is_root())
            .map(|_| dims.blur_radius()),
        text: widget.text().map(|text| TextView {
            text: text.view(),
            cursor_pixel: text.cursor_pixel(),
        }),
    }
}
