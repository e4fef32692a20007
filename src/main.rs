//! src/main.rs
//!
//! Entrypoint: parse the command line, set up error reporting and logging,
//! then delegate to `app::run()`.

mod app;
mod config;
mod graph;
mod logging;
mod net;
mod panels;
mod ui;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::config::MonitorConfig;

fn main() -> Result<()> {
    color_eyre::install()?;
    let config = MonitorConfig::parse();

    if config.dump_options {
        println!("{}", serde_json::to_string_pretty(&graph::network_options())?);
        return Ok(());
    }

    logging::init(&config.log_file)?;
    app::run(config)
}
