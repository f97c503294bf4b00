//! The [`GridGraph`] type: a fixed-size square grid of [`Cell`]s whose
//! neighbor relation is derived from cell roles on demand.

use crate::cell::{Cell, Role};
use crate::error::GridError;
use crate::geom::{Point, Range};

/// A `rows × rows` grid of cells.
///
/// The shape never changes after construction. At most one cell holds
/// [`Role::Start`] and at most one holds [`Role::End`]; [`set_role`] keeps
/// that true by demoting the previous holder.
///
/// [`set_role`]: GridGraph::set_role
#[derive(Debug, Clone)]
pub struct GridGraph {
    cells: Vec<Cell>,
    rows: i32,
    width: i32,
    gap: i32,
}

impl GridGraph {
    /// Create a grid of `rows × rows` empty cells laid out over a display
    /// extent of `width` units, so each cell spans `width / rows` units.
    ///
    /// Only `rows` is validated: a `width` smaller than `rows` gives a `gap`
    /// of 0.
    pub fn new(rows: i32, width: i32) -> Result<Self, GridError> {
        if rows <= 0 {
            return Err(GridError::InvalidDimension { rows, width });
        }
        let cells = Range::sized(rows, rows).iter().map(Cell::new).collect();
        Ok(Self {
            cells,
            rows,
            width,
            gap: width / rows,
        })
    }

    /// Number of rows (and columns).
    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    /// Display extent the grid was created with.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Display units spanned by one cell.
    #[inline]
    pub fn gap(&self) -> i32 {
        self.gap
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The grid rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::sized(self.rows, self.rows)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Convert a `Point` to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some((p.row * self.rows + p.col) as usize)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        let rows = self.rows as usize;
        Point::new((idx / rows) as i32, (idx % rows) as i32)
    }

    // -----------------------------------------------------------------------
    // Cell access
    // -----------------------------------------------------------------------

    /// The cell at `p`, if in bounds.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The role of the cell at `p`, if in bounds.
    #[inline]
    pub fn role(&self, p: Point) -> Option<Role> {
        self.cell(p).map(|c| c.role)
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Number of cells holding `role`.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role == role).count()
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Assign `role` to the cell at `p`.
    ///
    /// When `role` is [`Role::Start`] or [`Role::End`], any other cell
    /// holding it is reset to [`Role::Empty`] and its position is returned.
    pub fn set_role(&mut self, p: Point, role: Role) -> Result<Option<Point>, GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        Ok(self.set_role_at(i, role))
    }

    /// [`set_role`](GridGraph::set_role) by flat index, for callers holding
    /// an index obtained from [`index`](GridGraph::index).
    ///
    /// # Panics
    ///
    /// If `i` is not below [`len`](GridGraph::len).
    pub fn set_role_at(&mut self, i: usize, role: Role) -> Option<Point> {
        let p = self.cells[i].pos();
        let mut displaced = None;
        if role.is_endpoint() {
            if let Some(prev) = self
                .cells
                .iter_mut()
                .find(|c| c.role == role && c.pos() != p)
            {
                prev.role = Role::Empty;
                displaced = Some(prev.pos());
            }
        }
        self.cells[i].role = role;
        displaced
    }

    /// Reset the cell at `p` to [`Role::Empty`], returning the role it held.
    ///
    /// If it held `Start` or `End`, the caller owns dropping its reference.
    pub fn reset_role(&mut self, p: Point) -> Result<Role, GridError> {
        let i = self.index(p).ok_or(GridError::OutOfBounds(p))?;
        Ok(std::mem::take(&mut self.cells[i].role))
    }

    /// Write a search mark (`Frontier`, `Visited` or `Path`) at `p`.
    ///
    /// Endpoints are never overwritten. Returns whether the mark was written.
    pub fn mark(&mut self, p: Point, role: Role) -> bool {
        debug_assert!(role.is_search_mark(), "{role:?} is not a search mark");
        match self.index(p) {
            Some(i) if !self.cells[i].role.is_endpoint() => {
                self.cells[i].role = role;
                true
            }
            _ => false,
        }
    }

    /// Reset every search mark back to [`Role::Empty`], keeping barriers and
    /// endpoints.
    pub fn clear_search_marks(&mut self) {
        for c in &mut self.cells {
            if c.role.is_search_mark() {
                c.role = Role::Empty;
            }
        }
    }

    /// Reset every cell to [`Role::Empty`].
    pub fn clear(&mut self) {
        for c in &mut self.cells {
            c.role = Role::Empty;
        }
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Append the traversable orthogonal neighbors of `p` into `buf`, in the
    /// order down, up, right, left. The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.role(n).is_some_and(Role::is_traversable) {
                buf.push(n);
            }
        }
    }

    /// Allocating form of [`neighbors`](GridGraph::neighbors).
    pub fn neighbors_of(&self, p: Point) -> Vec<Point> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors(p, &mut buf);
        buf
    }
}

impl<'a> IntoIterator for &'a GridGraph {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
