//! Widget tree module
//!
//! Dialogs and their nested widgets, stored in an id-keyed arena.

#[allow(clippy::module_inception)]
mod widget;
mod config;
mod text;
mod tree;

pub use widget::Widget;
pub use config::{WidgetConfig, WidgetKind};
pub use text::TextEditState;
pub use tree::{WidgetTree, MAX_DEPTH};

/// Unique widget identifier
pub type WidgetId = u64;
