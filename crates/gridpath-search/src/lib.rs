//! A* shortest-path search over a [`GridGraph`](gridpath_core::GridGraph).
//!
//! [`AStarSearch::run`] finds a minimum-step route between two cells of a
//! 4-connected grid with unit step costs, guided by the [`manhattan`]
//! heuristic. The search writes its progress into the grid as cell roles
//! (`Frontier`, `Visited`, `Path`) and reports each change through a
//! [`SearchObserver`], which is how a renderer animates it. The same observer
//! can abort the run cooperatively.
//!
//! ```
//! use gridpath_core::{GridGraph, Point, Role};
//! use gridpath_search::{AStarSearch, NoopObserver};
//!
//! let mut grid = GridGraph::new(5, 5).unwrap();
//! let (start, end) = (Point::new(0, 0), Point::new(4, 4));
//! grid.set_role(start, Role::Start).unwrap();
//! grid.set_role(end, Role::End).unwrap();
//!
//! let result = AStarSearch::run(&mut grid, start, end, &mut NoopObserver);
//! assert!(result.found);
//! assert_eq!(result.len(), 8);
//! ```

mod astar;
mod distance;
mod observer;
pub mod reconstruct;
mod result;
mod state;

pub use astar::AStarSearch;
pub use distance::manhattan;
pub use observer::{FnObserver, NoopObserver, SearchObserver};
pub use result::PathResult;
pub use state::{OpenKey, UNREACHABLE};
