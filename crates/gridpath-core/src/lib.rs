//! The grid graph model behind the gridpath A* visualizer.
//!
//! A [`GridGraph`] is a fixed-size square array of [`Cell`]s, each carrying
//! exactly one [`Role`]. Neighbor queries are derived from the current roles
//! every time they are asked, so placing or removing a barrier is visible to
//! the next query without any cache invalidation.

pub mod cell;
pub mod error;
pub mod geom;
pub mod graph;

pub use cell::{Cell, Role};
pub use error::GridError;
pub use geom::{Point, Range};
pub use graph::GridGraph;
