//! Mapping between grid cells and screen cells.
//!
//! A grid cell occupies one screen row and `gap` screen columns, which keeps
//! cells roughly square in a terminal. Below the grid sit a status line and
//! a help line.

use gridpath_core::{GridGraph, Point};
use gridpath_ui::{Glyph, Screen};

use crate::palette::{self, Palette};

pub const HELP_TEXT: &str =
    "left click: start/end/barrier  right click: erase  space: run  c: clear  q: quit";

/// Screen rows used below the grid.
const FOOTER_ROWS: i32 = 2;

/// Screen columns per cell. A grid with a zero `gap` still gets one.
fn cell_cols(graph: &GridGraph) -> i32 {
    graph.gap().max(1)
}

/// `(rows, cols)` of the screen needed to show `graph` and the footer.
pub fn screen_size(graph: &GridGraph) -> (i32, i32) {
    let cols = (graph.rows() * cell_cols(graph)).max(HELP_TEXT.chars().count() as i32);
    (graph.rows() + FOOTER_ROWS, cols)
}

/// The grid cell under screen position `pos`, if any.
pub fn cell_at(graph: &GridGraph, pos: Point) -> Option<Point> {
    if pos.col < 0 {
        return None;
    }
    let cell = Point::new(pos.row, pos.col / cell_cols(graph));
    graph.contains(cell).then_some(cell)
}

/// Draw every cell of `graph` with its role's glyph.
pub fn paint_grid(graph: &GridGraph, palette: &Palette, screen: &mut Screen) {
    let gap = cell_cols(graph);
    for cell in graph {
        let p = cell.pos();
        let left = Point::new(p.row, p.col * gap);
        screen.set(left, palette.glyph(cell.role));
        for dc in 1..gap {
            screen.set(left.shift(0, dc), palette.fill(cell.role));
        }
    }
}

/// Draw the status and help lines under the grid.
pub fn paint_footer(graph: &GridGraph, status: &str, screen: &mut Screen) {
    let status_row = graph.rows();
    for row in status_row..status_row + FOOTER_ROWS {
        for col in 0..screen.cols() {
            screen.set(Point::new(row, col), Glyph::default());
        }
    }
    screen.print(Point::new(status_row, 0), status, palette::STATUS);
    screen.print(Point::new(status_row + 1, 0), HELP_TEXT, palette::HELP);
}
