//! Terminal A* visualizer.
//!
//! Run: cargo run -p gridpath-demo -- --rows 30

use clap::Parser;
use gridpath_demo::{Cli, DemoConfig, init_logging, run};

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("Error: cannot set up logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = run(&DemoConfig::from(&cli)) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
