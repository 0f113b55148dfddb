//! Pixel hit map
//!
//! A precomputed index from surface pixels to the widgets covering them.
//! Building costs O(covered area); a lookup is a single array read.
//! The map is never updated incrementally: owners mark it dirty and
//! rebuild it wholesale from their members in priority order.

use crate::math::PixelRect;
use crate::widget::WidgetId;

/// One inserted footprint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HitEntry {
    id: WidgetId,
    bounds: PixelRect,
}

/// Spatial index over a `width × height` surface
#[derive(Clone, Debug, Default)]
pub struct HitMap {
    width: usize,
    height: usize,
    /// Index into `entries` of the top entry per pixel
    cells: Vec<Option<u32>>,
    /// Footprints in insertion order
    entries: Vec<HitEntry>,
    dirty: bool,
}

impl HitMap {
    /// Create an empty map for a surface of the given size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
            entries: Vec::new(),
            dirty: false,
        }
    }

    /// Surface width (the row stride of pixel indices)
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Surface height
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of inserted footprints
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been inserted
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if the map no longer reflects its owner's members
    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Flag the map for a rebuild
    #[inline]
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Drop every entry and resize the surface. Clears the dirty flag;
    /// the caller is expected to re-insert all members.
    pub fn reset(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells.resize(width * height, None);
        self.entries.clear();
        self.dirty = false;
    }

    /// Flattened pixel index, `None` outside the surface
    #[inline]
    pub fn pixel_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Insert a footprint. Later insertions take priority over earlier
    /// ones where they overlap. Pixels outside the surface or with
    /// negative coordinates are skipped.
    pub fn insert(&mut self, id: WidgetId, bounds: PixelRect) {
        let clipped = bounds.clip_to(
            i32::try_from(self.width).unwrap_or(i32::MAX),
            i32::try_from(self.height).unwrap_or(i32::MAX),
        );
        let index = self.entries.len() as u32;
        self.entries.push(HitEntry { id, bounds: clipped });

        if clipped.is_empty() {
            return;
        }

        let x_start = clipped.x.max(0) as usize;
        let y_start = clipped.y.max(0) as usize;
        let x_end = clipped.right().max(0) as usize;
        let y_end = clipped.bottom().max(0) as usize;
        if x_start >= x_end || y_start >= y_end {
            return;
        }

        for y in y_start..y_end {
            let row = y * self.width;
            self.cells[row + x_start..row + x_end].fill(Some(index));
        }
    }

    /// Topmost widget at a pixel
    #[inline]
    pub fn hit(&self, x: i32, y: i32) -> Option<WidgetId> {
        self.pixel_index(x, y).and_then(|pixel| self.hit_pixel(pixel))
    }

    /// Topmost widget at a flattened pixel index
    pub fn hit_pixel(&self, pixel: usize) -> Option<WidgetId> {
        let index = (*self.cells.get(pixel)?)?;
        self.entries.get(index as usize).map(|e| e.id)
    }

    /// Every widget covering a pixel, topmost first
    pub fn stack_at(&self, x: i32, y: i32) -> Vec<WidgetId> {
        if self.pixel_index(x, y).is_none() {
            return Vec::new();
        }
        self.entries
            .iter()
            .rev()
            .filter(|e| e.bounds.contains(x, y))
            .map(|e| e.id)
            .collect()
    }

    /// Footprint recorded for a widget, after clipping
    pub fn bounds_of(&self, id: WidgetId) -> Option<PixelRect> {
        self.entries.iter().rev().find(|e| e.id == id).map(|e| e.bounds)
    }
}
