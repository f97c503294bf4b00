use std::fmt;

use crate::geom::Point;

/// Errors reported by [`GridGraph`](crate::GridGraph) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The grid cannot be built with these dimensions.
    InvalidDimension { rows: i32, width: i32 },
    /// The point lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { rows, width } => {
                write!(f, "invalid grid dimension: {rows} rows over width {width}")
            }
            Self::OutOfBounds(p) => write!(f, "point {p} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}
