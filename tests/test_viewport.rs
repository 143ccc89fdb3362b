use std::collections::HashSet;

use sky_dodge::config::{CELL_HEIGHT, CELL_WIDTH};
use sky_dodge::geometry::Rect;
use sky_dodge::viewport::*;

use proptest::prelude::*;

/// Terminal cells covered by a fully opaque sprite filling `rect`.
fn glyph_cells(viewport: &Viewport, rect: &Rect) -> HashSet<(i64, i64)> {
    let cols = (rect.width / CELL_WIDTH) as usize;
    let rows = (rect.height / CELL_HEIGHT) as usize;
    (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (col, row)))
        .map(|(col, row)| viewport.glyph_cell(rect, col, row))
        .collect()
}

// ── cell ──────────────────────────────────────────────────────────────────────

#[test]
fn cell_scales_to_grid() {
    let v = Viewport::new(80, 24, 1000, 500);
    assert_eq!(v.cell(0, 0), (0, 0));
    assert_eq!(v.cell(475, 230), (38, 11));
    assert_eq!(v.cell(999, 499), (79, 23));
    assert_eq!(v.cell(1000, 500), (80, 24));
}

#[test]
fn negative_positions_fall_off_grid() {
    let v = Viewport::new(80, 24, 1000, 500);
    let (col, row) = v.cell(-5, 0);
    assert_eq!(col, -1);
    assert!(!v.contains(col, row));
    assert!(v.contains(0, 0));
    assert!(!v.contains(80, 0));
}

// ── glyph_cell ────────────────────────────────────────────────────────────────

#[test]
fn full_size_grid_places_one_glyph_per_cell() {
    let v = Viewport::new(200, 50, 1000, 500);
    let rect = Rect::new(475, 230, 55, 40);
    let (c0, r0) = v.cell(rect.x, rect.y);
    for col in 0..11 {
        for row in 0..4 {
            assert_eq!(v.glyph_cell(&rect, col, row), (c0 + col as i64, r0 + row as i64));
        }
    }
}

#[test]
fn clear_sprites_do_not_share_cells_on_small_terminal() {
    // 10 units apart: no collision, so nothing may be drawn on top of the jet.
    let v = Viewport::new(80, 24, 1000, 500);
    let jet = Rect::new(475, 230, 55, 40);
    let missile = Rect::new(540, 230, 25, 10);
    assert!(!jet.intersects(&missile));

    let jet_cells = glyph_cells(&v, &jet);
    let missile_cells = glyph_cells(&v, &missile);
    assert!(jet_cells.is_disjoint(&missile_cells));
    assert_eq!(missile_cells.iter().map(|c| c.0).min(), Some(43));
    assert_eq!(jet_cells.iter().map(|c| c.0).max(), Some(42));
}

fn viewport() -> impl Strategy<Value = Viewport> {
    (20u16..250, 10u16..80).prop_map(|(cols, rows)| Viewport::new(cols, rows, 1000, 500))
}

proptest! {
    #[test]
    fn glyphs_stay_within_hitbox_cells(
        v in viewport(),
        x in -100i32..1100,
        y in -50i32..550,
        cols in 1i32..15,
        rows in 1i32..6,
    ) {
        let rect = Rect::new(x, y, cols * CELL_WIDTH, rows * CELL_HEIGHT);
        let (left, top) = v.cell(rect.left(), rect.top());
        let (right, bottom) = v.cell(rect.right() - 1, rect.bottom() - 1);
        let cells = glyph_cells(&v, &rect);

        prop_assert!(cells.contains(&(left, top)));
        for (col, row) in cells {
            prop_assert!((left..=right).contains(&col));
            prop_assert!((top..=bottom).contains(&row));
        }
    }
}
