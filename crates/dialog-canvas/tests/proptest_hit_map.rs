//! Property-based tests for the hit map and dimension resolver.
//!
//! 1. Non-overlapping footprints answer every covered pixel with their own id.
//! 2. Pixels outside every footprint report no hit.
//! 3. Overlaps resolve to the most recent insertion.
//! 4. `stack_at` lists every covering footprint, most recent first.
//! 5. A pinned position survives any parent extent.
//! 6. Size follows the current parent extent on every read.

use dialog_canvas::layout::{Dimensions, Pattern};
use dialog_canvas::{HitMap, PixelRect, Size, Vec2};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const SURFACE: i32 = 120;

/// Non-overlapping footprints: one per cell of a 4×4 grid of 30px cells
fn grid_footprints() -> impl Strategy<Value = Vec<PixelRect>> {
    proptest::collection::vec((0i32..16, 1i32..=30, 1i32..=30), 1..16).prop_map(|cells| {
        let mut seen = Vec::new();
        cells
            .into_iter()
            .filter(|(cell, _, _)| {
                let fresh = !seen.contains(cell);
                seen.push(*cell);
                fresh
            })
            .map(|(cell, w, h)| PixelRect::new((cell % 4) * 30, (cell / 4) * 30, w, h))
            .collect()
    })
}

fn footprint() -> impl Strategy<Value = PixelRect> {
    (0i32..SURFACE, 0i32..SURFACE, 1i32..60, 1i32..60)
        .prop_map(|(x, y, w, h)| PixelRect::new(x, y, w, h))
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Round trip over disjoint footprints
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn disjoint_footprints_round_trip(rects in grid_footprints()) {
        let mut map = HitMap::new(SURFACE as usize, SURFACE as usize);
        for (i, rect) in rects.iter().enumerate() {
            map.insert(i as u64, *rect);
        }

        for y in 0..SURFACE {
            for x in 0..SURFACE {
                let owner = rects.iter().position(|r| r.contains(x, y));
                prop_assert_eq!(
                    map.hit(x, y),
                    owner.map(|i| i as u64),
                    "pixel ({}, {})", x, y
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-4. Later insertions win
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn overlap_resolves_to_latest(a in footprint(), b in footprint(), x in 0i32..SURFACE, y in 0i32..SURFACE) {
        let mut map = HitMap::new(SURFACE as usize, SURFACE as usize);
        map.insert(1, a);
        map.insert(2, b);

        let expected = if b.contains(x, y) {
            Some(2)
        } else if a.contains(x, y) {
            Some(1)
        } else {
            None
        };
        prop_assert_eq!(map.hit(x, y), expected);

        let stack = map.stack_at(x, y);
        prop_assert_eq!(stack.first().copied(), expected);
        prop_assert_eq!(stack.len(), usize::from(a.contains(x, y)) + usize::from(b.contains(x, y)));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Resolver caching rules
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pinned_position_ignores_parent(px in -500.0f32..500.0, py in -500.0f32..500.0, w in 1.0f32..2000.0, h in 1.0f32..2000.0) {
        let pattern = Pattern {
            x: "50%".into(),
            y: "25%".into(),
            ..Default::default()
        };
        let mut dims = Dimensions::new(pattern);
        dims.set_relative(Vec2::new(px, py));

        let relative = dims.relative(Size::new(w, h)).unwrap();
        prop_assert!((relative.x - px).abs() < 0.001);
        prop_assert!((relative.y - py).abs() < 0.001);
    }

    #[test]
    fn size_tracks_current_parent(first in 1.0f32..2000.0, second in 1.0f32..2000.0) {
        let pattern = Pattern {
            width: "50%".into(),
            height: 30.into(),
            ..Default::default()
        };
        let dims = Dimensions::new(pattern);

        let a = dims.size(Size::new(first, 100.0)).unwrap();
        let b = dims.size(Size::new(second, 100.0)).unwrap();
        prop_assert!((a.width - first / 2.0).abs() < 0.01);
        prop_assert!((b.width - second / 2.0).abs() < 0.01);
        prop_assert!((b.height - 30.0).abs() < 0.001);
    }
}
