//! Interactive terminal visualizer for the gridpath A* engine.
//!
//! Left click places the start, then the end, then barriers; right click
//! erases; space runs the search with every step animated.

pub mod config;
pub mod palette;
pub mod view;
pub mod visualizer;

use std::error::Error;

use gridpath_crossterm::CrosstermDriver;
use gridpath_ui::{App, AppConfig};

pub use config::{Cli, DemoConfig, init_logging};
pub use visualizer::{Outcome, Visualizer};

/// Run the visualizer in the terminal until the user quits.
pub fn run(config: &DemoConfig) -> Result<(), Box<dyn Error>> {
    let model = Visualizer::new(config)?;
    let (rows, cols) = model.screen_size();
    let driver = CrosstermDriver::new();
    let mut app = App::new(AppConfig {
        model,
        driver,
        rows,
        cols,
    });
    app.run()?;
    if let Some(outcome) = app.model().outcome() {
        log::info!("last search: {outcome}");
    }
    Ok(())
}
