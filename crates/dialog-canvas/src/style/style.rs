//! Style descriptor types

use serde::{Deserialize, Serialize};

/// Reference to one style, or an ordered list merged front to back
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleRef {
    /// A single registry name
    Name(String),
    /// Several names; later entries override earlier ones
    Names(Vec<String>),
}

impl StyleRef {
    /// Names in merge order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            StyleRef::Name(name) => std::slice::from_ref(name),
            StyleRef::Names(names) => names,
        };
        slice.iter().map(String::as_str)
    }
}

impl From<&str> for StyleRef {
    fn from(name: &str) -> Self {
        StyleRef::Name(name.to_string())
    }
}

impl From<Vec<&str>> for StyleRef {
    fn from(names: Vec<&str>) -> Self {
        StyleRef::Names(names.into_iter().map(str::to_string).collect())
    }
}

/// Fill/border override applied while a widget is focused or hovered
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateStyle {
    #[serde(rename = "fillstyle")]
    pub fill: Option<String>,
    #[serde(rename = "borderstyle")]
    pub border: Option<String>,
}

/// One slice of a tileset border
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleLayer {
    /// Layer name, referenced by `stack_w`/`stack_h` of later layers
    pub name: String,
    /// Source x on the tileset image
    pub sx: i32,
    /// Source y on the tileset image
    pub sy: i32,
    pub width: i32,
    pub height: i32,
    /// Repeat horizontally to fill the widget width
    #[serde(rename = "repeath")]
    pub repeat_h: bool,
    /// Repeat vertically to fill the widget height
    #[serde(rename = "repeatv")]
    pub repeat_v: bool,
    /// Top, right, bottom, left offsets
    pub offset: [i32; 4],
    /// Layer whose drawn width shifts this one to the right
    #[serde(rename = "stackw")]
    pub stack_w: Option<String>,
    /// Layer whose drawn height shifts this one down
    #[serde(rename = "stackh")]
    pub stack_h: Option<String>,
}

/// A resolved style descriptor
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// Name of the tileset image the layers are cut from
    pub tileset: Option<String>,
    pub layers: Vec<StyleLayer>,
    #[serde(rename = "fillstyle")]
    pub fill: Option<String>,
    #[serde(rename = "bottomfill")]
    pub bottom_fill: Option<String>,
    #[serde(rename = "borderstyle")]
    pub border: Option<String>,
    #[serde(rename = "focusstyle")]
    pub focus: Option<StateStyle>,
    #[serde(rename = "hoverstyle")]
    pub hover: Option<StateStyle>,
    /// Blur the canvas behind a dialog using its blur radius
    pub blur: bool,
}

impl Style {
    /// Overlay `other` on top of this style. Set fields of `other` win;
    /// layers are replaced by name and new names are appended.
    pub fn merge(&mut self, other: &Style) {
        if other.tileset.is_some() {
            self.tileset = other.tileset.clone();
        }
        if other.fill.is_some() {
            self.fill = other.fill.clone();
        }
        if other.bottom_fill.is_some() {
            self.bottom_fill = other.bottom_fill.clone();
        }
        if other.border.is_some() {
            self.border = other.border.clone();
        }
        if other.focus.is_some() {
            self.focus = other.focus.clone();
        }
        if other.hover.is_some() {
            self.hover = other.hover.clone();
        }
        self.blur |= other.blur;

        for layer in &other.layers {
            match self.layers.iter_mut().find(|l| l.name == layer.name) {
                Some(existing) => *existing = layer.clone(),
                None => self.layers.push(layer.clone()),
            }
        }
    }

    /// Fill colour for the given interaction state.
    ///
    /// Hover beats focus, focus beats the idle fill.
    pub fn effective_fill(&self, focused: bool, hovered: bool) -> Option<&str> {
        if hovered {
            if let Some(fill) = self.hover.as_ref().and_then(|s| s.fill.as_deref()) {
                return Some(fill);
            }
        }
        if focused {
            if let Some(fill) = self.focus.as_ref().and_then(|s| s.fill.as_deref()) {
                return Some(fill);
            }
        }
        self.fill.as_deref()
    }

    /// Border colour for the given focus state
    pub fn effective_border(&self, focused: bool) -> Option<&str> {
        if focused {
            if let Some(border) = self.focus.as_ref().and_then(|s| s.border.as_deref()) {
                return Some(border);
            }
        }
        self.border.as_deref()
    }
}
