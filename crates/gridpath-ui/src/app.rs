//! The application loop: [`Model`], the [`Renderer`] / [`InputSource`]
//! capabilities a [`Driver`] provides, and [`App`].

use std::error::Error;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::{debug, warn};

use crate::messages::Msg;
use crate::screen::{Frame, Screen, compute_frame};

/// How long the idle loop waits for input before polling again.
const POLL_INTERVAL: Duration = Duration::from_millis(16);

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
///
/// Cancelling it stops the application loop.
#[derive(Clone, Debug, Default)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// Something that can show a [`Frame`] of screen changes.
pub trait Renderer {
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn Error>>;
}

/// Something that produces input [`Msg`]s.
pub trait InputSource {
    /// Append pending messages to `out`, waiting at most `timeout` for the
    /// first one. Returns early once `ctx` is cancelled.
    fn poll_msgs(
        &mut self,
        ctx: &Context,
        timeout: Duration,
        out: &mut Vec<Msg>,
    ) -> Result<(), Box<dyn Error>>;
}

/// A complete back-end: renders frames, produces input, and owns the device.
pub trait Driver: Renderer + InputSource {
    fn init(&mut self) -> Result<(), Box<dyn Error>>;

    /// Restore the device. Must be safe to call after a failed `init`.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// Model / Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Stop the application loop.
    End,
    /// Call [`Model::work`] with live access to the screen and input.
    Work,
}

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`.
    fn draw(&self, screen: &mut Screen);

    /// Run a blocking job requested with [`Effect::Work`]. The job may show
    /// intermediate states and poll for input through `live`.
    fn work(&mut self, live: &mut Live<'_>) {
        let _ = live;
    }
}

// ---------------------------------------------------------------------------
// Live
// ---------------------------------------------------------------------------

/// Screen and input access handed to [`Model::work`].
///
/// Driver errors are stored rather than returned, so that a job can keep its
/// own control flow simple; check [`Live::failed`] to stop early. The loop
/// reports the stored error once the job returns.
pub struct Live<'a> {
    driver: &'a mut dyn Driver,
    ctx: &'a Context,
    prev: &'a mut Screen,
    curr: &'a mut Screen,
    error: Option<Box<dyn Error>>,
}

impl<'a> Live<'a> {
    fn new(
        driver: &'a mut dyn Driver,
        ctx: &'a Context,
        prev: &'a mut Screen,
        curr: &'a mut Screen,
    ) -> Self {
        Self {
            driver,
            ctx,
            prev,
            curr,
            error: None,
        }
    }

    /// Draw with `paint` and show whatever changed.
    pub fn present(&mut self, paint: impl FnOnce(&mut Screen)) {
        if self.error.is_some() {
            return;
        }
        paint(&mut *self.curr);
        if let Err(e) = flush_changes(&mut *self.driver, &mut *self.prev, &*self.curr) {
            warn!("live present failed: {e}");
            self.error = Some(e);
        }
    }

    /// Drain pending input without waiting.
    pub fn poll(&mut self) -> Vec<Msg> {
        let mut out = Vec::new();
        if self.error.is_none() {
            if let Err(e) = self.driver.poll_msgs(self.ctx, Duration::ZERO, &mut out) {
                warn!("live poll failed: {e}");
                self.error = Some(e);
            }
        }
        out
    }

    /// The application's cancellation token.
    pub fn context(&self) -> &Context {
        self.ctx
    }

    /// Whether a driver call has failed during this job.
    pub fn failed(&self) -> bool {
        self.error.is_some()
    }

    fn finish(self) -> Result<(), Box<dyn Error>> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn flush_changes(
    driver: &mut dyn Driver,
    prev: &mut Screen,
    curr: &Screen,
) -> Result<(), Box<dyn Error>> {
    let frame = compute_frame(prev, curr);
    if !frame.cells.is_empty() {
        driver.flush(frame)?;
    }
    prev.copy_from(curr);
    Ok(())
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub rows: i32,
    pub cols: i32,
}

/// The main application runner.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    rows: i32,
    cols: i32,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            rows: config.rows,
            cols: config.cols,
        }
    }

    /// The model, e.g. to inspect its final state.
    pub fn model(&self) -> &M {
        &self.model
    }

    /// Consume the app, returning the model.
    pub fn into_model(self) -> M {
        self.model
    }

    /// Run the loop until the model returns [`Effect::End`] or the context
    /// is cancelled.
    ///
    /// 1. Initialises the driver.
    /// 2. Sends `Msg::Init` through the model.
    /// 3. Loops: update → draw → diff → flush → poll.
    /// 4. Closes the driver, whatever the outcome.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        let result = match self.driver.init() {
            Ok(()) => self.event_loop(),
            Err(e) => Err(e),
        };
        self.driver.close();
        result
    }

    fn event_loop(&mut self) -> Result<(), Box<dyn Error>> {
        let ctx = Context::new();
        let mut prev = Screen::new(self.rows, self.cols);
        let mut curr = Screen::new(self.rows, self.cols);
        let mut inbox = vec![Msg::Init];

        debug!("app loop started on a {}x{} screen", self.rows, self.cols);

        while !ctx.is_done() {
            let needs_draw = !inbox.is_empty();

            for msg in std::mem::take(&mut inbox) {
                match self.model.update(msg) {
                    Some(Effect::End) => ctx.cancel(),
                    Some(Effect::Work) => {
                        let mut live = Live::new(&mut self.driver, &ctx, &mut prev, &mut curr);
                        self.model.work(&mut live);
                        live.finish()?;
                    }
                    None => {}
                }
                if ctx.is_done() {
                    debug!("app loop stopping");
                    return Ok(());
                }
            }

            if needs_draw {
                self.model.draw(&mut curr);
                flush_changes(&mut self.driver, &mut prev, &curr)?;
            }

            self.driver.poll_msgs(&ctx, POLL_INTERVAL, &mut inbox)?;
        }

        Ok(())
    }
}
