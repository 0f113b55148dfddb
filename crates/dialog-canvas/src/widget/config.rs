//! Widget construction record

use serde::{Deserialize, Serialize};
use crate::layout::{Length, Pattern, DEFAULT_BLUR_RADIUS};
use crate::style::StyleRef;

/// Behaviour class of a widget
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WidgetKind {
    /// Plain decorated box
    #[default]
    Generic,
    /// Single-line text input
    Input,
    /// Handle that drags its whole dialog
    DragFrame,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Generic => "generic",
            WidgetKind::Input => "input",
            WidgetKind::DragFrame => "drag-frame",
        }
    }
}

impl From<String> for WidgetKind {
    /// Unrecognised type names build a generic widget
    fn from(name: String) -> Self {
        match name.as_str() {
            "input" => WidgetKind::Input,
            "drag-frame" | "dragframe" | "drag" => WidgetKind::DragFrame,
            _ => WidgetKind::Generic,
        }
    }
}

impl From<WidgetKind> for String {
    fn from(kind: WidgetKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Options a widget is created from.
///
/// Deserializes from blueprint JSON with camelCase keys; every field is
/// optional and `x`/`y`/`width`/`height` accept numbers or strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
    pub style: Option<StyleRef>,
    pub blur_radius: u32,
    pub clickable: bool,
    pub moveable: bool,
    pub globally_moveable: bool,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            x: Length::default(),
            y: Length::default(),
            width: Length::default(),
            height: Length::default(),
            style: None,
            blur_radius: DEFAULT_BLUR_RADIUS,
            clickable: true,
            moveable: true,
            globally_moveable: false,
            kind: WidgetKind::Generic,
        }
    }
}

impl WidgetConfig {
    /// Config with position and size, everything else default
    pub fn new(
        x: impl Into<Length>,
        y: impl Into<Length>,
        width: impl Into<Length>,
        height: impl Into<Length>,
    ) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: impl Into<StyleRef>) -> Self {
        self.style = Some(style.into());
        self
    }

    pub fn with_kind(mut self, kind: WidgetKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn with_moveable(mut self, moveable: bool) -> Self {
        self.moveable = moveable;
        self
    }

    pub fn with_globally_moveable(mut self, globally_moveable: bool) -> Self {
        self.globally_moveable = globally_moveable;
        self
    }

    /// Split into the immutable pattern and the widget kind
    pub fn into_pattern(self) -> (Pattern, WidgetKind) {
        let pattern = Pattern {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
            style: self.style,
            blur_radius: self.blur_radius,
            clickable: self.clickable,
            moveable: self.moveable,
            globally_moveable: self.globally_moveable,
        };
        (pattern, self.kind)
    }
}
