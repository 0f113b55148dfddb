//! Per-widget dimension resolver

use std::cell::Cell;
use serde::{Deserialize, Serialize};
use crate::error::UiError;
use crate::math::{Rect, Size, Vec2};
use crate::style::Style;
use super::{Length, Pattern};

/// Rule used to derive absolute positions from relative ones
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accumulation {
    /// `absolute = relative + parent.absolute`; correct at any depth
    #[default]
    Chained,
    /// `absolute = relative + parent.relative`; only exact one level
    /// below a dialog, kept for layouts tuned against that rule
    ParentRelative,
}

impl Accumulation {
    /// Absolute position of a widget given its parent's resolution
    pub fn absolute(self, relative: Vec2, parent: Option<&Resolved>) -> Vec2 {
        match (self, parent) {
            (_, None) => relative,
            (Accumulation::Chained, Some(p)) => relative + p.absolute,
            (Accumulation::ParentRelative, Some(p)) => relative + p.relative,
        }
    }
}

/// Immutable snapshot of a widget's resolved geometry
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Resolved {
    /// Position relative to the parent's origin
    pub relative: Vec2,
    /// Position relative to the canvas surface
    pub absolute: Vec2,
    pub size: Size,
}

impl Resolved {
    /// Rectangle on the canvas surface
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.absolute, self.size)
    }

    /// Rectangle in the parent's coordinate space
    #[inline]
    pub fn local_rect(&self) -> Rect {
        Rect::from_pos_size(self.relative, self.size)
    }
}

/// Memo state of one position axis
#[derive(Clone, Copy, Debug, PartialEq)]
enum Axis {
    /// Not computed since construction or the last invalidation
    Unresolved,
    /// Computed from the pattern
    Derived(f32),
    /// Set explicitly; the pattern no longer applies
    Pinned(f32),
}

/// Resolves a widget's pattern into concrete geometry and carries its
/// focus, hover and z-order state.
#[derive(Clone, Debug)]
pub struct Dimensions {
    pattern: Pattern,
    rx: Cell<Axis>,
    ry: Cell<Axis>,
    z_order: u64,
    focused: bool,
    hovered: bool,
    style: Option<Style>,
    original: Option<Resolved>,
}

impl Dimensions {
    /// Create an unresolved resolver for `pattern`
    pub fn new(pattern: Pattern) -> Self {
        Self {
            pattern,
            rx: Cell::new(Axis::Unresolved),
            ry: Cell::new(Axis::Unresolved),
            z_order: 0,
            focused: false,
            hovered: false,
            style: None,
            original: None,
        }
    }

    /// The constraint pattern this resolver was built from
    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Relative x, memoized after the first successful read
    pub fn relative_x(&self, parent: Size) -> Result<f32, UiError> {
        memoized(&self.rx, &self.pattern.x, "x", parent.width)
    }

    /// Relative y, memoized after the first successful read
    pub fn relative_y(&self, parent: Size) -> Result<f32, UiError> {
        memoized(&self.ry, &self.pattern.y, "y", parent.height)
    }

    /// Position relative to the parent's origin
    pub fn relative(&self, parent: Size) -> Result<Vec2, UiError> {
        Ok(Vec2::new(self.relative_x(parent)?, self.relative_y(parent)?))
    }

    /// Pin the relative x; later reads ignore the pattern
    pub fn set_relative_x(&mut self, x: f32) {
        self.rx.set(Axis::Pinned(x));
    }

    /// Pin the relative y; later reads ignore the pattern
    pub fn set_relative_y(&mut self, y: f32) {
        self.ry.set(Axis::Pinned(y));
    }

    /// Pin both axes
    pub fn set_relative(&mut self, position: Vec2) {
        self.set_relative_x(position.x);
        self.set_relative_y(position.y);
    }

    /// Check if either axis was set explicitly
    pub fn is_pinned(&self) -> bool {
        matches!(self.rx.get(), Axis::Pinned(_)) || matches!(self.ry.get(), Axis::Pinned(_))
    }

    /// Width and height, recomputed from the pattern on every call
    pub fn size(&self, parent: Size) -> Result<Size, UiError> {
        Ok(Size::new(
            self.pattern.width.resolve("width", parent.width)?,
            self.pattern.height.resolve("height", parent.height)?,
        ))
    }

    /// Forget pattern-derived positions. Pinned positions survive.
    pub fn invalidate(&mut self) {
        for axis in [&self.rx, &self.ry] {
            if let Axis::Derived(_) = axis.get() {
                axis.set(Axis::Unresolved);
            }
        }
    }

    /// Geometry from the first resolution at construction
    #[inline]
    pub fn original(&self) -> Option<Resolved> {
        self.original
    }

    pub(crate) fn record_original(&mut self, resolved: Resolved) {
        if self.original.is_none() {
            self.original = Some(resolved);
        }
    }

    /// Raw z-order stored on this resolver. The tree forwards reads and
    /// writes to the owning dialog; see `WidgetTree::z_order`.
    #[inline]
    pub fn z_order(&self) -> u64 {
        self.z_order
    }

    #[inline]
    pub fn set_z_order(&mut self, z: u64) {
        self.z_order = z;
    }

    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }

    #[inline]
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    #[inline]
    pub fn hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Resolved style, `None` for "no style"
    #[inline]
    pub fn style(&self) -> Option<&Style> {
        self.style.as_ref()
    }

    pub(crate) fn set_style(&mut self, style: Option<Style>) {
        self.style = style;
    }

    #[inline]
    pub fn blur_radius(&self) -> u32 {
        self.pattern.blur_radius
    }

    #[inline]
    pub fn clickable(&self) -> bool {
        self.pattern.clickable
    }

    #[inline]
    pub fn moveable(&self) -> bool {
        self.pattern.moveable
    }

    #[inline]
    pub fn globally_moveable(&self) -> bool {
        self.pattern.globally_moveable
    }
}

fn memoized(
    cell: &Cell<Axis>,
    length: &Length,
    field: &'static str,
    extent: f32,
) -> Result<f32, UiError> {
    match cell.get() {
        Axis::Derived(v) | Axis::Pinned(v) => Ok(v),
        Axis::Unresolved => {
            let v = length.resolve(field, extent)?;
            cell.set(Axis::Derived(v));
            Ok(v)
        }
    }
}
