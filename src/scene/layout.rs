//! Stamp grid layout.
//!
//! The one nontrivial layout routine in the battery: place `total` slot
//! centers in rows under a card, re-centering any short final row instead
//! of leaving it flush left.

/// Computed stamp grid: uniform cell size plus one center per slot, in
/// reading order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampGrid {
    pub columns: u32,
    pub rows: u32,
    pub cell: i32,
    pub centers: Vec<(i32, i32)>,
}

const GAP: i32 = 10;
const MIN_CELL: i32 = 44;
const MAX_CELL: i32 = 60;

/// Lay out `total` stamp slots.
///
/// Small goals get 3 columns, larger ones 4, never more than
/// `max_columns`. The cell size is chosen so a full row plus side margins
/// fits `panel_w`, clamped to 44..=60 px. Every row is centered on
/// `canvas_w / 2` independently, so a short final row sits in the middle
/// rather than hanging off the left edge.
pub fn stamp_grid(total: u32, max_columns: u32, panel_w: i32, canvas_w: i32, top: i32) -> StampGrid {
    let columns = if total <= 5 { 3 } else { 4 };
    let columns = columns.min(max_columns.max(1));
    let cols = columns as i32;
    let cell = ((panel_w - 60 - (cols - 1) * GAP) / cols).clamp(MIN_CELL, MAX_CELL);
    let rows = total.div_ceil(columns);

    let mut centers = Vec::with_capacity(total as usize);
    for i in 0..total as i32 {
        let col = i % cols;
        let row = i / cols;
        let row_count = cols.min(total as i32 - row * cols);
        let row_w = row_count * cell + (row_count - 1) * GAP;
        let row_x = (canvas_w - row_w) / 2;
        let cx = row_x + col * (cell + GAP) + cell / 2;
        let cy = top + row * (cell + GAP) + cell / 2;
        centers.push((cx, cy));
    }

    StampGrid {
        columns,
        rows,
        cell,
        centers,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_count_is_ceiling_of_total_over_columns() {
        for total in 1..=20 {
            let g = stamp_grid(total, 4, 442, 520, 300);
            assert_eq!(g.rows, total.div_ceil(g.columns), "total={}", total);
            assert_eq!(g.centers.len(), total as usize);
        }
    }

    #[test]
    fn small_goals_use_three_columns() {
        assert_eq!(stamp_grid(3, 4, 442, 520, 0).columns, 3);
        assert_eq!(stamp_grid(5, 4, 442, 520, 0).columns, 3);
        assert_eq!(stamp_grid(6, 4, 442, 520, 0).columns, 4);
        assert_eq!(stamp_grid(12, 4, 442, 520, 0).columns, 4);
    }

    #[test]
    fn max_columns_caps_the_column_count() {
        assert_eq!(stamp_grid(12, 2, 442, 520, 0).columns, 2);
    }

    #[test]
    fn every_row_is_centered_independently() {
        // 10 slots in 4 columns: rows of 4, 4 and 2.
        let g = stamp_grid(10, 4, 442, 520, 100);
        let cols = g.columns as usize;
        for row_start in (0..g.centers.len()).step_by(cols) {
            let row = &g.centers[row_start..(row_start + cols).min(g.centers.len())];
            let first = row.first().unwrap().0 - g.cell / 2;
            let last = row.last().unwrap().0 + g.cell - g.cell / 2;
            let left = first;
            let right = 520 - last;
            assert!((left - right).abs() <= 1, "row at {} uncentered", row_start);
        }
        // The short row really is shorter and further right.
        assert!(g.centers[8].0 > g.centers[0].0);
    }

    #[test]
    fn cell_size_stays_clamped() {
        assert_eq!(stamp_grid(12, 4, 442, 520, 0).cell, 60);
        let tight = stamp_grid(12, 4, 200, 520, 0);
        assert_eq!(tight.cell, MIN_CELL);
        let wide = stamp_grid(12, 4, 4000, 520, 0);
        assert_eq!(wide.cell, MAX_CELL);
    }

    #[test]
    fn twelve_slot_grid_matches_the_card_layout() {
        // 442-wide card on a 520 canvas: 60 px cells in 4 columns.
        let g = stamp_grid(12, 4, 442, 520, 300);
        assert_eq!((g.columns, g.rows, g.cell), (4, 3, 60));
        // Full rows span 4*60 + 3*10 = 270, centered at x=125.
        assert_eq!(g.centers[0], (125 + 30, 300 + 30));
        assert_eq!(g.centers[4].1, 300 + 70 + 30);
    }
}
