//! Manager configuration

use serde::{Deserialize, Serialize};
use crate::layout::Accumulation;
use crate::math::Size;

/// Settings a [`Manager`](crate::Manager) is created with
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ManagerConfig {
    /// Canvas surface width; the parent extent of dialogs
    pub width: f32,
    /// Canvas surface height
    pub height: f32,
    /// How absolute positions accumulate through parents
    pub accumulation: Accumulation,
    /// Advance of one glyph in the text edit model
    pub char_width: f32,
    /// Horizontal inset of the text area inside input widgets
    pub text_padding: f32,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            accumulation: Accumulation::Chained,
            char_width: 12.0,
            text_padding: 4.0,
        }
    }
}

impl ManagerConfig {
    /// Default configuration for a surface of the given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_accumulation(mut self, accumulation: Accumulation) -> Self {
        self.accumulation = accumulation;
        self
    }

    #[inline]
    pub fn surface(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
