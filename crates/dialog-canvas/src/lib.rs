//! Dialog and widget layer for an HTML canvas
//!
//! This crate provides the core of a retained-mode canvas GUI:
//! - Layout resolution from absolute and percentage constraints
//! - Pixel hit maps answering "which widget is at (x, y)" in O(1)
//! - Pointer routing with hover, press, drag and focus per nesting scope
//! - Key routing into a fixed-width text edit model
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`, `PixelRect`)
//! - [`layout`]: Constraint values, patterns and the dimension resolver
//! - [`style`]: Style descriptors and the registry they come from
//! - [`hit`]: The pixel hit map
//! - [`input`]: Cursor scopes, drag state, events and key codes
//! - [`widget`]: Widget configs, nodes, text model and the widget arena
//!
//! [`Manager`] ties these together and is the entry point for hosts.
//!
//! ## Example
//!
//! ```rust
//! use dialog_canvas::{Manager, ManagerConfig, UiEvent, WidgetConfig};
//!
//! let mut manager = Manager::new(ManagerConfig::new(800.0, 600.0));
//! let dialog = manager.open_root(WidgetConfig::new(100, 100, 200, 200)).unwrap();
//! let button = manager.add_widget(dialog, WidgetConfig::new("10%", 20, 80, 24)).unwrap();
//!
//! manager.pointer_down(130.0, 130.0);
//! manager.pointer_up(130.0, 130.0);
//!
//! assert_eq!(manager.focused_widget(), Some(button));
//! assert!(manager
//!     .drain_events()
//!     .contains(&UiEvent::FocusGained { id: button }));
//! ```
//!
//! Drawing is left to the host: [`Manager::render_list`] returns what to
//! draw, back to front, and a redraw handler signals when to draw it.

pub mod math;
pub mod layout;
pub mod style;
pub mod hit;
pub mod input;
pub mod widget;

mod config;
mod error;
mod manager;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{PixelRect, Rect, Size, Vec2};
pub use layout::{Accumulation, Dimensions, Length, Pattern, Resolved};
pub use style::{Style, StyleRef, StyleRegistry};
pub use hit::HitMap;
pub use input::{InputResult, Key, UiEvent};
pub use widget::{TextEditState, Widget, WidgetConfig, WidgetId, WidgetKind, WidgetTree};

pub use config::ManagerConfig;
pub use error::UiError;
pub use manager::{Manager, RenderItem, TextView};
