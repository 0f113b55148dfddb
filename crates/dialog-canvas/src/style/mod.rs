//! Style descriptors and the registry they are looked up from
//!
//! Styles describe how the external renderer decorates a widget: a
//! tileset with nine/twelve-slice layers, fill colours for the idle,
//! focused and hovered states, and an optional background blur.

#[allow(clippy::module_inception)]
mod style;
mod registry;

pub use style::{StateStyle, Style, StyleLayer, StyleRef};
pub use registry::StyleRegistry;
