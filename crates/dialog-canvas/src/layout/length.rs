//! Absolute or percentage constraint values

use serde::{Deserialize, Serialize};
use crate::error::UiError;

/// A single constraint value: a literal pixel count or a textual
/// value such as `"50%"` (relative to the parent extent) or `"120"`.
///
/// Text is kept verbatim and only parsed at resolution time, so a
/// malformed value surfaces as [`UiError::Configuration`] when read.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    /// Absolute pixels
    Pixels(i32),
    /// Unparsed text, either `"<n>%"` or an integer
    Text(String),
}

impl Default for Length {
    fn default() -> Self {
        Length::Pixels(0)
    }
}

impl From<i32> for Length {
    fn from(px: i32) -> Self {
        Length::Pixels(px)
    }
}

impl From<&str> for Length {
    fn from(text: &str) -> Self {
        Length::Text(text.to_string())
    }
}

impl From<String> for Length {
    fn from(text: String) -> Self {
        Length::Text(text)
    }
}

impl Length {
    /// Percentage of the parent extent
    pub fn percent(value: f32) -> Self {
        Length::Text(format!("{}%", value))
    }

    /// Check if this value depends on the parent extent
    pub fn is_relative(&self) -> bool {
        matches!(self, Length::Text(t) if t.trim_end().ends_with('%'))
    }

    /// Resolve against the parent's extent along the same axis
    pub fn resolve(&self, field: &'static str, parent_extent: f32) -> Result<f32, UiError> {
        let text = match self {
            Length::Pixels(px) => return Ok(*px as f32),
            Length::Text(text) => text.trim(),
        };

        if let Some(number) = text.strip_suffix('%') {
            let percent: f32 = number
                .trim()
                .parse()
                .map_err(|_| UiError::configuration(field, text))?;
            if !percent.is_finite() {
                return Err(UiError::configuration(field, text));
            }
            return Ok(parent_extent * (percent / 100.0));
        }

        text.parse::<i32>()
            .map(|px| px as f32)
            .map_err(|_| UiError::configuration(field, text))
    }
}
