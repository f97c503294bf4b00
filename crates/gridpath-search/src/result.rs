use gridpath_core::Point;

/// Outcome of one search run.
///
/// `path` lists the cells stepped onto, in order from start to end: the start
/// cell is left out and the end cell closes the list, so its length is the
/// number of moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult {
    pub found: bool,
    pub path: Vec<Point>,
    /// Cells taken off the open set before the run ended.
    pub expanded: usize,
}

impl PathResult {
    pub(crate) fn found(path: Vec<Point>, expanded: usize) -> Self {
        Self {
            found: true,
            path,
            expanded,
        }
    }

    pub(crate) fn not_found(expanded: usize) -> Self {
        Self {
            found: false,
            path: Vec::new(),
            expanded,
        }
    }

    /// Number of moves on the path (0 when nothing was found).
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}
