use std::iter;

use gridpath_core::{GridGraph, Point, Role};
use log::{debug, trace};

use crate::distance::manhattan;
use crate::observer::{FnObserver, SearchObserver};
use crate::reconstruct;
use crate::result::PathResult;
use crate::state::SearchState;

/// A* shortest-path search over a [`GridGraph`] with unit step costs.
///
/// Every run starts from a clean slate: leftover `Frontier`, `Visited` and
/// `Path` marks are cleared first and all scores live in a state that is
/// dropped when the run returns.
pub struct AStarSearch;

impl AStarSearch {
    /// Find a minimum-step path from `start` to `end`.
    ///
    /// While searching, discovered cells are marked `Frontier` and expanded
    /// ones `Visited`; on success the cells strictly between the endpoints
    /// are marked `Path`. The observer is notified after each expansion and
    /// each path marking, and polled for cancellation before each expansion.
    ///
    /// Equal-score candidates are expanded in insertion order and neighbors
    /// are enumerated down, up, right, left, so the returned path is fully
    /// determined by the grid and the endpoints.
    ///
    /// # Panics
    ///
    /// If `start` or `end` lies outside the grid.
    pub fn run<O: SearchObserver + ?Sized>(
        graph: &mut GridGraph,
        start: Point,
        end: Point,
        observer: &mut O,
    ) -> PathResult {
        let Some(start_idx) = graph.index(start) else {
            panic!("search start {start} is outside the {0}x{0} grid", graph.rows());
        };
        let Some(end_idx) = graph.index(end) else {
            panic!("search end {end} is outside the {0}x{0} grid", graph.rows());
        };

        graph.clear_search_marks();

        if start_idx == end_idx {
            debug!("astar: start and end coincide at {start}");
            return PathResult::found(Vec::new(), 0);
        }

        debug!("astar: searching {start} -> {end}");

        let mut state = SearchState::new(graph.len());
        state.g[start_idx] = 0;
        state.f[start_idx] = manhattan(start, end);
        state.push(start_idx);

        let mut nbuf = Vec::with_capacity(4);
        let mut expanded = 0;

        loop {
            if observer.cancelled() {
                debug!("astar: cancelled after {expanded} expansions");
                return PathResult::not_found(expanded);
            }

            let Some(ci) = state.pop() else {
                break;
            };
            expanded += 1;

            if ci == end_idx {
                let trail = reconstruct::trace(&state.came_from, start_idx, end_idx);
                reconstruct::mark_path(graph, &trail, observer);
                graph.set_role_at(end_idx, Role::End);
                graph.set_role_at(start_idx, Role::Start);

                let path: Vec<Point> = trail
                    .iter()
                    .rev()
                    .map(|&i| graph.point(i))
                    .chain(iter::once(end))
                    .collect();
                debug!(
                    "astar: found path of {} steps after {expanded} expansions",
                    path.len()
                );
                return PathResult::found(path, expanded);
            }

            let current = graph.point(ci);
            let tentative_g = state.g[ci] + 1;

            nbuf.clear();
            graph.neighbors(current, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = graph.index(np) else {
                    continue;
                };
                // Strict improvement only: ties keep the first-found parent.
                if tentative_g >= state.g[ni] {
                    continue;
                }
                state.came_from[ni] = Some(ci);
                state.g[ni] = tentative_g;
                state.f[ni] = tentative_g + manhattan(np, end);
                if !state.is_open(ni) {
                    state.push(ni);
                    graph.mark(np, Role::Frontier);
                }
            }

            trace!(
                "astar: expanded {current} (g={}), {} open",
                state.g[ci],
                state.open_len()
            );
            observer.on_step(graph);

            if ci != start_idx {
                graph.mark(current, Role::Visited);
            }
        }

        debug!("astar: no path after {expanded} expansions");
        PathResult::not_found(expanded)
    }

    /// [`run`](AStarSearch::run) with a step callback and a cancellation
    /// predicate instead of an observer.
    pub fn run_with<S, C>(
        graph: &mut GridGraph,
        start: Point,
        end: Point,
        on_step: S,
        cancel: C,
    ) -> PathResult
    where
        S: FnMut(&GridGraph),
        C: FnMut() -> bool,
    {
        Self::run(graph, start, end, &mut FnObserver::new(on_step, cancel))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use super::*;
    use crate::observer::NoopObserver;

    fn grid(rows: i32) -> GridGraph {
        GridGraph::new(rows, rows).unwrap()
    }

    fn search(g: &mut GridGraph, start: Point, end: Point) -> PathResult {
        g.set_role(start, Role::Start).unwrap();
        g.set_role(end, Role::End).unwrap();
        AStarSearch::run(g, start, end, &mut NoopObserver)
    }

    fn barriers(g: &mut GridGraph, pts: &[(i32, i32)]) {
        for &(r, c) in pts {
            g.set_role(Point::new(r, c), Role::Barrier).unwrap();
        }
    }

    /// Breadth-first distance, used as the ground truth for path lengths.
    fn bfs_distance(g: &GridGraph, start: Point, end: Point) -> Option<usize> {
        let mut dist = vec![usize::MAX; g.len()];
        let mut queue = VecDeque::new();
        dist[g.index(start)?] = 0;
        queue.push_back(start);
        while let Some(p) = queue.pop_front() {
            let d = dist[g.index(p)?];
            if p == end {
                return Some(d);
            }
            for n in g.neighbors_of(p) {
                let ni = g.index(n)?;
                if dist[ni] == usize::MAX {
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        None
    }

    fn assert_valid_path(g: &GridGraph, start: Point, end: Point, path: &[Point]) {
        let mut prev = start;
        for &p in path {
            assert_eq!(manhattan(prev, p), 1, "{prev} -> {p} is not a single step");
            assert_ne!(g.role(p), Some(Role::Barrier), "path crosses barrier at {p}");
            prev = p;
        }
        assert_eq!(prev, end);
    }

    fn random_grid(rng: &mut StdRng, rows: i32, density: u32) -> GridGraph {
        let mut g = grid(rows);
        for p in g.bounds() {
            if rng.random_range(0..100u32) < density {
                g.set_role(p, Role::Barrier).unwrap();
            }
        }
        g
    }

    fn random_point(rng: &mut StdRng, rows: i32) -> Point {
        Point::new(rng.random_range(0..rows), rng.random_range(0..rows))
    }

    // -------------------------------------------------------------------
    // Concrete scenarios
    // -------------------------------------------------------------------

    #[test]
    fn open_five_by_five_corner_to_corner() {
        let mut g = grid(5);
        let r = search(&mut g, Point::new(0, 0), Point::new(4, 4));
        assert!(r.found);
        assert_eq!(r.len(), 8);
        assert_valid_path(&g, Point::new(0, 0), Point::new(4, 4), &r.path);
    }

    #[test]
    fn full_wall_blocks_the_path() {
        let mut g = grid(3);
        barriers(&mut g, &[(0, 1), (1, 1), (2, 1)]);
        let r = search(&mut g, Point::new(0, 0), Point::new(0, 2));
        assert!(!r.found);
        assert!(r.path.is_empty());
        // Only the reachable side was explored.
        assert_eq!(r.expanded, 3);
        assert_eq!(g.role(Point::new(1, 0)), Some(Role::Visited));
        assert_eq!(g.role(Point::new(1, 2)), Some(Role::Empty));
    }

    #[test]
    fn adjacent_endpoints_take_one_step() {
        let mut g = grid(4);
        let r = search(&mut g, Point::new(2, 2), Point::new(2, 3));
        assert!(r.found);
        assert_eq!(r.path, vec![Point::new(2, 3)]);
        assert_eq!(g.count(Role::Path), 0);
    }

    #[test]
    fn coinciding_endpoints_succeed_with_empty_path() {
        let mut g = grid(4);
        let p = Point::new(1, 1);
        let mut steps = 0;
        let r = AStarSearch::run_with(&mut g, p, p, |_| steps += 1, || false);
        assert!(r.found);
        assert!(r.path.is_empty());
        assert_eq!(r.expanded, 0);
        assert_eq!(steps, 0);
    }

    #[test]
    fn ties_resolve_down_before_right() {
        let mut g = grid(3);
        let r = search(&mut g, Point::new(0, 0), Point::new(2, 2));
        assert_eq!(
            r.path,
            vec![
                Point::new(1, 0),
                Point::new(2, 0),
                Point::new(2, 1),
                Point::new(2, 2),
            ]
        );
        assert_eq!(r.expanded, 9);
    }

    #[test]
    fn roles_after_success() {
        let mut g = grid(3);
        let (start, end) = (Point::new(0, 0), Point::new(2, 2));
        search(&mut g, start, end);
        assert_eq!(g.role(start), Some(Role::Start));
        assert_eq!(g.role(end), Some(Role::End));
        assert_eq!(g.count(Role::Path), 3);
        assert_eq!(g.count(Role::Visited), 4);
        assert_eq!(g.count(Role::Frontier), 0);
        assert_eq!(g.count(Role::Start), 1);
        assert_eq!(g.count(Role::End), 1);
    }

    #[test]
    fn success_labels_unmarked_endpoints() {
        // The caller never tagged the endpoints; a stale Start elsewhere is
        // demoted.
        let mut g = grid(3);
        g.set_role(Point::new(1, 1), Role::Start).unwrap();
        let (start, end) = (Point::new(0, 0), Point::new(0, 2));
        let r = AStarSearch::run(&mut g, start, end, &mut NoopObserver);
        assert!(r.found);
        assert_eq!(g.role(start), Some(Role::Start));
        assert_eq!(g.role(end), Some(Role::End));
        assert_ne!(g.role(Point::new(1, 1)), Some(Role::Start));
        assert_eq!(g.count(Role::Start), 1);
        assert_eq!(g.count(Role::End), 1);
    }

    #[test]
    fn detours_around_a_wall() {
        // S . . . .
        // # # # # .
        // E . . . .
        let mut g = grid(5);
        barriers(&mut g, &[(1, 0), (1, 1), (1, 2), (1, 3)]);
        let (start, end) = (Point::new(0, 0), Point::new(2, 0));
        let r = search(&mut g, start, end);
        assert!(r.found);
        assert_eq!(r.len(), 10);
        assert_valid_path(&g, start, end, &r.path);
    }

    // -------------------------------------------------------------------
    // Observer behaviour
    // -------------------------------------------------------------------

    #[test]
    fn step_callback_fires_per_expansion_and_per_path_cell() {
        let mut g = grid(3);
        let mut steps = 0;
        let r = AStarSearch::run_with(
            &mut g,
            Point::new(0, 0),
            Point::new(2, 2),
            |_| steps += 1,
            || false,
        );
        // 8 expansions before reaching the end, then 3 path cells.
        assert_eq!(r.expanded, 9);
        assert_eq!(steps, 8 + 3);
    }

    #[test]
    fn step_callback_sees_frontier_growing() {
        let mut g = grid(6);
        let mut frontier_sizes = Vec::new();
        AStarSearch::run_with(
            &mut g,
            Point::new(0, 0),
            Point::new(5, 5),
            |g| frontier_sizes.push(g.count(Role::Frontier)),
            || false,
        );
        assert_eq!(frontier_sizes.first(), Some(&2));
        assert!(frontier_sizes.iter().any(|&n| n > 2));
    }

    #[test]
    fn cancel_before_first_expansion() {
        let mut g = grid(5);
        let mut steps = 0;
        let r = AStarSearch::run_with(
            &mut g,
            Point::new(0, 0),
            Point::new(4, 4),
            |_| steps += 1,
            || true,
        );
        assert_eq!(r, PathResult::not_found(0));
        assert_eq!(steps, 0);
    }

    #[test]
    fn cancel_midway_aborts_without_a_path() {
        let mut g = grid(10);
        let mut polls = 0;
        let r = AStarSearch::run_with(
            &mut g,
            Point::new(0, 0),
            Point::new(9, 9),
            |_| {},
            || {
                polls += 1;
                polls > 5
            },
        );
        assert!(!r.found);
        assert!(r.path.is_empty());
        assert_eq!(r.expanded, 5);
        assert_eq!(g.count(Role::Path), 0);
    }

    // -------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------

    #[test]
    fn open_grid_path_length_is_manhattan_distance() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut g = grid(12);
        for _ in 0..200 {
            let start = random_point(&mut rng, 12);
            let end = random_point(&mut rng, 12);
            g.clear();
            let r = search(&mut g, start, end);
            assert!(r.found);
            assert_eq!(r.len(), manhattan(start, end) as usize);
            if start != end {
                assert_valid_path(&g, start, end, &r.path);
            }
        }
    }

    #[test]
    fn matches_breadth_first_distance_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..300 {
            let mut g = random_grid(&mut rng, 10, 30);
            let start = random_point(&mut rng, 10);
            let end = random_point(&mut rng, 10);
            let r = search(&mut g, start, end);
            match bfs_distance(&g, start, end) {
                Some(d) => {
                    assert!(r.found, "missed a path {start} -> {end}");
                    assert_eq!(r.len(), d);
                    if start != end {
                        assert_valid_path(&g, start, end, &r.path);
                    }
                }
                None => assert!(!r.found, "invented a path {start} -> {end}"),
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let mut g = random_grid(&mut rng, 15, 25);
            let start = random_point(&mut rng, 15);
            let end = random_point(&mut rng, 15);
            let first = search(&mut g, start, end);
            let second = search(&mut g, start, end);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn same_layout_same_path_regardless_of_history() {
        let (start, end) = (Point::new(0, 0), Point::new(6, 6));
        let walls = [(2, 2), (2, 3), (3, 2), (5, 1)];

        let mut a = grid(7);
        barriers(&mut a, &walls);

        // Same final layout, reached through extra edits and an earlier run.
        let mut b = grid(7);
        barriers(&mut b, &[(4, 4), (1, 5)]);
        search(&mut b, Point::new(6, 0), Point::new(0, 6));
        b.reset_role(Point::new(4, 4)).unwrap();
        b.reset_role(Point::new(1, 5)).unwrap();
        barriers(&mut b, &walls);

        assert_eq!(search(&mut a, start, end).path, search(&mut b, start, end).path);
    }

    #[test]
    fn adding_a_barrier_never_shortens_the_path() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let mut g = random_grid(&mut rng, 9, 20);
            let start = random_point(&mut rng, 9);
            let end = random_point(&mut rng, 9);
            let before = search(&mut g, start, end);

            let wall = random_point(&mut rng, 9);
            if wall == start || wall == end {
                continue;
            }
            g.set_role(wall, Role::Barrier).unwrap();
            let after = search(&mut g, start, end);

            assert!(before.found || !after.found, "a barrier created a path");
            if before.found && after.found {
                assert!(after.len() >= before.len());
            }
        }
    }

    #[test]
    fn stale_marks_do_not_leak_into_the_next_run() {
        let mut g = grid(5);
        search(&mut g, Point::new(0, 0), Point::new(4, 4));
        assert!(g.count(Role::Visited) > 0);

        let r = search(&mut g, Point::new(0, 0), Point::new(0, 1));
        assert_eq!(r.len(), 1);
        assert_eq!(g.count(Role::Path), 0);
        assert_eq!(g.count(Role::Visited), 0);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn start_outside_the_grid_panics() {
        let mut g = grid(3);
        AStarSearch::run(&mut g, Point::new(-1, 0), Point::new(2, 2), &mut NoopObserver);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn end_outside_the_grid_panics() {
        let mut g = grid(3);
        AStarSearch::run(&mut g, Point::new(0, 0), Point::new(3, 3), &mut NoopObserver);
    }
}
