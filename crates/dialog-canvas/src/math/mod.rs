//! Core geometry types
//!
//! Floating point types carry resolved layout values; `PixelRect` is the
//! integer footprint used by the hit maps.

mod vec2;
mod size;
mod rect;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::{PixelRect, Rect};
