//! Path reconstruction from the predecessor table.

use gridpath_core::{GridGraph, Role};

use crate::observer::SearchObserver;

/// Walk predecessors from `end` back to `start`, returning the cells strictly
/// between them, nearest-to-`end` first.
pub fn trace(came_from: &[Option<usize>], start: usize, end: usize) -> Vec<usize> {
    let mut trail = Vec::new();
    let mut cur = end;
    while let Some(prev) = came_from[cur] {
        if prev == start {
            break;
        }
        trail.push(prev);
        cur = prev;
    }
    trail
}

/// Mark each cell of `trail` as [`Role::Path`], notifying `observer` after
/// every marking.
pub fn mark_path<O: SearchObserver + ?Sized>(graph: &mut GridGraph, trail: &[usize], observer: &mut O) {
    for &i in trail {
        let p = graph.point(i);
        graph.mark(p, Role::Path);
        observer.on_step(graph);
    }
}
