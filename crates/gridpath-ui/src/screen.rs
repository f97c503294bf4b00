//! The [`Screen`] buffer and frame diffing.

use gridpath_core::{Point, Range};

use crate::style::Style;

// ---------------------------------------------------------------------------
// Glyph
// ---------------------------------------------------------------------------

/// A styled character occupying one screen cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

// ---------------------------------------------------------------------------
// Screen
// ---------------------------------------------------------------------------

/// A `rows × cols` buffer of glyphs that a model draws into.
#[derive(Debug, Clone)]
pub struct Screen {
    glyphs: Vec<Glyph>,
    bounds: Range,
}

impl Screen {
    /// Create a screen filled with blank glyphs.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Range::sized(rows, cols);
        Self {
            glyphs: vec![Glyph::default(); bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows()
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols()
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.row * self.bounds.cols() + p.col) as usize)
    }

    /// Read the glyph at `p`. Blank if `p` is off-screen.
    pub fn at(&self, p: Point) -> Glyph {
        self.index(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op if `p` is off-screen.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = glyph;
        }
    }

    /// Fill every glyph.
    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` left to right from `p`, clipped at the right edge.
    /// Returns the number of glyphs written.
    pub fn print(&mut self, p: Point, text: &str, style: Style) -> usize {
        let mut written = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(0, i as i32);
            if !self.bounds.contains(q) {
                break;
            }
            self.set(q, Glyph::new(ch, style));
            written += 1;
        }
        written
    }

    /// Copy all glyphs from a same-sized screen.
    pub fn copy_from(&mut self, src: &Screen) {
        if self.bounds == src.bounds {
            self.glyphs.copy_from_slice(&src.glyphs);
        } else {
            for p in self.bounds {
                self.set(p, src.at(p));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between two screens.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// The changes needed to turn one screen into the next.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub rows: i32,
    pub cols: i32,
}

/// Collect the glyphs of `curr` that differ from `prev`, row-major.
pub fn compute_frame(prev: &Screen, curr: &Screen) -> Frame {
    let bounds = curr.bounds();
    let cells = bounds
        .iter()
        .filter_map(|p| {
            let glyph = curr.at(p);
            (prev.at(p) != glyph).then_some(FrameCell { glyph, pos: p })
        })
        .collect();
    Frame {
        cells,
        rows: bounds.rows(),
        cols: bounds.cols(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn set_and_at() {
        let mut s = Screen::new(3, 4);
        let g = Glyph::new('X', Style::default());
        s.set(Point::new(1, 2), g);
        assert_eq!(s.at(Point::new(1, 2)), g);
        assert_eq!(s.at(Point::new(9, 9)), Glyph::default());
        s.set(Point::new(9, 9), g);
    }

    #[test]
    fn print_clips_at_edge() {
        let mut s = Screen::new(1, 5);
        assert_eq!(s.print(Point::new(0, 2), "hello", Style::default()), 3);
        assert_eq!(s.at(Point::new(0, 4)).ch, 'l');
    }

    #[test]
    fn frame_lists_only_changes() {
        let prev = Screen::new(2, 3);
        let mut curr = Screen::new(2, 3);
        let red = Style::default().with_bg(Color::from_rgb(255, 0, 0));
        curr.set(Point::new(1, 0), Glyph::new(' ', red));
        let frame = compute_frame(&prev, &curr);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Point::new(1, 0));
        assert_eq!(frame.cells[0].glyph.style, red);
        assert_eq!((frame.rows, frame.cols), (2, 3));
    }

    #[test]
    fn copy_from_makes_frames_empty() {
        let mut prev = Screen::new(2, 2);
        let mut curr = Screen::new(2, 2);
        curr.fill(Glyph::new('#', Style::default()));
        assert_eq!(compute_frame(&prev, &curr).cells.len(), 4);
        prev.copy_from(&curr);
        assert!(compute_frame(&prev, &curr).cells.is_empty());
    }
}
