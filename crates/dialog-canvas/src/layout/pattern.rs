//! Immutable position/size/style constraints of a widget

use crate::style::StyleRef;
use super::Length;

/// Default background blur radius
pub const DEFAULT_BLUR_RADIUS: u32 = 4;

/// The declarative constraint set a widget was created with.
///
/// Never mutated after construction; user moves are recorded in the
/// resolver, not here.
#[derive(Clone, Debug, PartialEq)]
pub struct Pattern {
    pub x: Length,
    pub y: Length,
    pub width: Length,
    pub height: Length,
    pub style: Option<StyleRef>,
    pub blur_radius: u32,
    /// Registers in hit maps and receives presses
    pub clickable: bool,
    /// Follows the pointer while pressed
    pub moveable: bool,
    /// Dragging this widget moves its whole dialog
    pub globally_moveable: bool,
}

impl Default for Pattern {
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
        }
    }
}

impl Pattern {
    /// Pattern with absolute position and size
    pub fn absolute(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            width: width.into(),
            height: height.into(),
            ..Default::default()
        }
    }
}
