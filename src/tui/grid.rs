use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::shared::{NUM_PADS, PadId};

pub const COLS: usize = 3;
pub const ROWS: usize = 3;

const HEADER_HEIGHT: u16 = 3;

// screen = header bar on top, pad grid below
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(HEADER_HEIGHT), Constraint::Min(9)])
        .split(area);
    (sections[0], sections[1])
}

pub fn pad_rects(area: Rect) -> [Rect; NUM_PADS] {
    let row_constraints = [Constraint::Ratio(1, ROWS as u32); ROWS];
    let col_constraints = [Constraint::Ratio(1, COLS as u32); COLS];

    let mut rects = [Rect::default(); NUM_PADS];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(area);

    for (row_idx, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(col_constraints)
            .split(*row_area);
        for (col_idx, cell_area) in cols.iter().enumerate() {
            rects[row_idx * COLS + col_idx] = *cell_area;
        }
    }
    rects
}

/// The pad rectangles of the last rendered frame. Hit-testing a click against
/// these is how a pointer event resolves to a pad: any cell inside the pad's
/// rectangle belongs to it, however deep in the pad's own sub-layout the
/// click landed.
#[derive(Clone, Copy, Debug, Default)]
pub struct PadRegions {
    rects: [Rect; NUM_PADS],
}

impl PadRegions {
    pub fn compute(screen: Rect) -> Self {
        let (_, pads) = split_screen(screen);
        Self {
            rects: pad_rects(pads),
        }
    }

    pub fn pad_at(&self, x: u16, y: u16) -> Option<PadId> {
        self.rects
            .iter()
            .position(|r| r.contains(ratatui::layout::Position { x, y }))
            .map(|i| PadId(i as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0, 0, 36, 15)
    }

    #[test]
    fn grid_covers_nine_disjoint_cells() {
        let (_, pads) = split_screen(screen());
        let rects = pad_rects(pads);
        assert_eq!(rects.len(), NUM_PADS);
        for (i, a) in rects.iter().enumerate() {
            assert!(a.width > 0 && a.height > 0);
            for b in rects.iter().skip(i + 1) {
                assert_eq!(a.intersection(*b).area(), 0);
            }
        }
    }

    #[test]
    fn click_inside_a_pad_cell_resolves_to_that_pad() {
        let regions = PadRegions::compute(screen());
        let (_, pads) = split_screen(screen());
        let rects = pad_rects(pads);

        // a point well inside pad 1 ('S'), nested past the border and label
        // rows of the cell, still resolves to the pad itself
        let inner = rects[1];
        let x = inner.x + inner.width / 2;
        let y = inner.y + inner.height / 2;
        assert_eq!(regions.pad_at(x, y), Some(PadId(1)));
    }

    #[test]
    fn click_outside_the_grid_resolves_to_none() {
        let regions = PadRegions::compute(screen());
        // header row is not a pad
        assert_eq!(regions.pad_at(1, 0), None);
        // beyond the screen
        assert_eq!(regions.pad_at(200, 200), None);
    }
}
