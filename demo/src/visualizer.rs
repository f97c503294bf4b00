//! The interactive controller: mouse placement of endpoints and barriers,
//! keyboard commands, and the animated search.

use std::fmt;
use std::thread;
use std::time::Duration;

use log::{debug, info, warn};

use gridpath_core::{GridError, GridGraph, Point, Role};
use gridpath_search::{AStarSearch, SearchObserver};
use gridpath_ui::{Effect, Glyph, Key, Live, Model, MouseAction, Msg, Screen};

use crate::config::DemoConfig;
use crate::palette::Palette;
use crate::view;

const READY: &str = "place start, end and barriers, then press space";

/// How the last search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found { steps: usize, expanded: usize },
    NoPath { expanded: usize },
    Cancelled,
    /// The display or input device failed mid-search.
    Failed,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found { steps, expanded } => {
                write!(f, "path found: {steps} steps, {expanded} cells expanded")
            }
            Self::NoPath { expanded } => write!(f, "no path ({expanded} cells expanded)"),
            Self::Cancelled => f.write_str("search cancelled"),
            Self::Failed => f.write_str("search aborted: terminal error"),
        }
    }
}

/// Why a running search was interrupted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    /// Escape or `q`: abandon the search, keep the application.
    User,
    /// Quit message: abandon the search and the application.
    Quit,
    /// The driver reported an error.
    Failed,
}

/// Shows each search step and watches the input for interruptions.
struct LiveObserver<'l, 'a> {
    live: &'l mut Live<'a>,
    palette: &'l Palette,
    status: &'l str,
    step_delay: Duration,
    stop: Option<Stop>,
}

impl SearchObserver for LiveObserver<'_, '_> {
    fn on_step(&mut self, graph: &GridGraph) {
        let palette = self.palette;
        let status = self.status;
        self.live.present(|screen| {
            view::paint_grid(graph, palette, screen);
            view::paint_footer(graph, status, screen);
        });
        if !self.step_delay.is_zero() {
            thread::sleep(self.step_delay);
        }
    }

    fn cancelled(&mut self) -> bool {
        if self.live.failed() {
            self.stop = Some(Stop::Failed);
        }
        if self.stop.is_some() {
            return true;
        }
        for msg in self.live.poll() {
            match msg {
                Msg::Quit => {
                    self.live.context().cancel();
                    self.stop = Some(Stop::Quit);
                    break;
                }
                Msg::KeyDown {
                    key: Key::Escape | Key::Char('q'),
                } => self.stop = Some(Stop::User),
                // Editing is refused while searching.
                _ => {}
            }
        }
        if self.live.failed() && self.stop.is_none() {
            self.stop = Some(Stop::Failed);
        }
        self.stop.is_some()
    }
}

/// The visualizer model.
pub struct Visualizer {
    graph: GridGraph,
    start: Option<Point>,
    end: Option<Point>,
    palette: Palette,
    step_delay: Duration,
    status: String,
    outcome: Option<Outcome>,
}

impl Visualizer {
    pub fn new(config: &DemoConfig) -> Result<Self, GridError> {
        let graph = GridGraph::new(config.rows, config.width())?;
        Ok(Self {
            graph,
            start: None,
            end: None,
            palette: Palette::classic(),
            step_delay: config.step_delay,
            status: READY.to_string(),
            outcome: None,
        })
    }

    pub fn graph(&self) -> &GridGraph {
        &self.graph
    }

    pub fn start(&self) -> Option<Point> {
        self.start
    }

    pub fn end(&self) -> Option<Point> {
        self.end
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// How the last search ended, if one has run.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// `(rows, cols)` of the screen this model draws on.
    pub fn screen_size(&self) -> (i32, i32) {
        view::screen_size(&self.graph)
    }

    /// Left click: Start first, then End, then barriers.
    fn place(&mut self, cell: Point) {
        let is_start = self.start == Some(cell);
        let is_end = self.end == Some(cell);
        let role = if self.start.is_none() && !is_end {
            Role::Start
        } else if self.end.is_none() && !is_start {
            Role::End
        } else if !is_start && !is_end {
            Role::Barrier
        } else {
            return;
        };
        if let Err(e) = self.graph.set_role(cell, role) {
            warn!("cannot place {role:?}: {e}");
            return;
        }
        match role {
            Role::Start => self.start = Some(cell),
            Role::End => self.end = Some(cell),
            _ => {}
        }
        debug!("placed {role:?} at {cell}");
    }

    /// Right click: back to Empty.
    fn erase(&mut self, cell: Point) {
        match self.graph.reset_role(cell) {
            Ok(old) => debug!("erased {old:?} at {cell}"),
            Err(e) => {
                warn!("cannot erase: {e}");
                return;
            }
        }
        if self.start == Some(cell) {
            self.start = None;
        }
        if self.end == Some(cell) {
            self.end = None;
        }
    }

    fn clear(&mut self) {
        self.graph.clear();
        self.start = None;
        self.end = None;
        self.outcome = None;
        self.status = READY.to_string();
        info!("grid cleared");
    }

    fn key(&mut self, key: Key) -> Option<Effect> {
        match key {
            Key::Escape | Key::Char('q') => Some(Effect::End),
            Key::Char('c') => {
                self.clear();
                None
            }
            Key::Space => {
                if self.start.is_some() && self.end.is_some() {
                    Some(Effect::Work)
                } else {
                    self.status = "place both a start and an end first".to_string();
                    None
                }
            }
            _ => None,
        }
    }
}

impl Model for Visualizer {
    fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Init => {
                info!(
                    "visualizer ready: {0}x{0} grid, {1} columns per cell",
                    self.graph.rows(),
                    self.graph.gap()
                );
                None
            }
            Msg::Quit => Some(Effect::End),
            Msg::KeyDown { key } => self.key(key),
            Msg::Mouse { action, pos } => {
                let cell = view::cell_at(&self.graph, pos)?;
                match action {
                    MouseAction::Main => self.place(cell),
                    MouseAction::Secondary => self.erase(cell),
                    _ => {}
                }
                None
            }
            Msg::Screen { .. } => None,
        }
    }

    fn draw(&self, screen: &mut Screen) {
        screen.fill(Glyph::default());
        view::paint_grid(&self.graph, &self.palette, screen);
        view::paint_footer(&self.graph, &self.status, screen);
    }

    fn work(&mut self, live: &mut Live<'_>) {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return;
        };
        info!("searching {start} -> {end}");
        self.status = "searching... (esc to cancel)".to_string();

        let mut observer = LiveObserver {
            live,
            palette: &self.palette,
            status: &self.status,
            step_delay: self.step_delay,
            stop: None,
        };
        let result = AStarSearch::run(&mut self.graph, start, end, &mut observer);

        let outcome = if observer.stop == Some(Stop::Failed) {
            Outcome::Failed
        } else if observer.stop.is_some() {
            Outcome::Cancelled
        } else if result.found {
            Outcome::Found {
                steps: result.len(),
                expanded: result.expanded,
            }
        } else {
            Outcome::NoPath {
                expanded: result.expanded,
            }
        };
        if outcome == Outcome::Failed {
            warn!("{outcome}");
        } else {
            info!("{outcome}");
        }
        self.status = outcome.to_string();
        self.outcome = Some(outcome);
    }
}
