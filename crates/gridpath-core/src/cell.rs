//! The [`Cell`] type and its [`Role`].

use crate::geom::Point;

/// Logical classification of a grid cell. Exactly one role holds at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Empty,
    Barrier,
    Start,
    End,
    /// Discovered by a search but not yet expanded.
    Frontier,
    /// Expanded by a search.
    Visited,
    /// On the reconstructed path.
    Path,
}

impl Role {
    /// Every role, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Empty,
        Role::Barrier,
        Role::Start,
        Role::End,
        Role::Frontier,
        Role::Visited,
        Role::Path,
    ];

    /// Whether a search may step onto a cell with this role.
    #[inline]
    pub const fn is_traversable(self) -> bool {
        !matches!(self, Role::Barrier)
    }

    /// Whether this role is a transient mark left behind by a search run.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Role::Frontier | Role::Visited | Role::Path)
    }

    /// Whether this is one of the two unique endpoint roles.
    #[inline]
    pub const fn is_endpoint(self) -> bool {
        matches!(self, Role::Start | Role::End)
    }
}

/// One addressable grid location. The position is fixed at creation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Point,
    pub role: Role,
}

impl Cell {
    /// Create an empty cell at `pos`.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            role: Role::Empty,
        }
    }

    /// The cell's `(row, col)` position.
    #[inline]
    pub const fn pos(&self) -> Point {
        self.pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_predicates() {
        let traversable: Vec<_> = Role::ALL.iter().filter(|r| r.is_traversable()).collect();
        assert_eq!(traversable.len(), 6);
        assert!(!Role::Barrier.is_traversable());

        assert!(Role::Frontier.is_search_mark());
        assert!(Role::Visited.is_search_mark());
        assert!(Role::Path.is_search_mark());
        assert!(!Role::Start.is_search_mark());

        assert!(Role::Start.is_endpoint());
        assert!(Role::End.is_endpoint());
        assert!(!Role::Path.is_endpoint());
    }

    #[test]
    fn role_change_keeps_position() {
        let mut c = Cell::new(Point::new(2, 7));
        c.role = Role::Barrier;
        assert_eq!(c.pos(), Point::new(2, 7));
        assert_eq!(c.role, Role::Barrier);
        assert_eq!(Cell::new(Point::ZERO).role, Role::Empty);
    }
}
