use gridpath_core::GridGraph;

/// Hooks a running search calls out to.
///
/// `on_step` fires after every expansion and after every path-reconstruction
/// marking; it only gets a shared borrow, so it can look at the grid (to draw
/// it, say) but not change it. `cancelled` is polled once per expansion.
pub trait SearchObserver {
    /// The grid changed.
    fn on_step(&mut self, graph: &GridGraph);

    /// Return `true` to abort the search. The search then reports no path.
    fn cancelled(&mut self) -> bool {
        false
    }
}

impl<T: SearchObserver + ?Sized> SearchObserver for &mut T {
    fn on_step(&mut self, graph: &GridGraph) {
        (**self).on_step(graph);
    }

    fn cancelled(&mut self) -> bool {
        (**self).cancelled()
    }
}

/// Observer that ignores every step and never cancels.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_step(&mut self, _graph: &GridGraph) {}
}

/// Adapts a step closure and a cancellation predicate into an observer.
pub struct FnObserver<S, C> {
    on_step: S,
    cancel: C,
}

impl<S, C> FnObserver<S, C>
where
    S: FnMut(&GridGraph),
    C: FnMut() -> bool,
{
    pub fn new(on_step: S, cancel: C) -> Self {
        Self { on_step, cancel }
    }
}

impl<S, C> SearchObserver for FnObserver<S, C>
where
    S: FnMut(&GridGraph),
    C: FnMut() -> bool,
{
    fn on_step(&mut self, graph: &GridGraph) {
        (self.on_step)(graph);
    }

    fn cancelled(&mut self) -> bool {
        (self.cancel)()
    }
}
