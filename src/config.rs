//! src/config.rs
//!
//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::graph::MAX_DATA_POINTS;

/// Live upload/download throughput chart for the terminal.
#[derive(Debug, Clone, Parser)]
#[command(name = "netgauge", version, about)]
pub struct MonitorConfig {
    /// Milliseconds between samples.
    #[arg(long, default_value_t = 1000, value_parser = clap::value_parser!(u64).range(100..))]
    pub interval_ms: u64,

    /// Points kept per series.
    #[arg(long, default_value_t = MAX_DATA_POINTS, value_parser = parse_window)]
    pub window: usize,

    /// Accept pushed samples on this address, e.g. 127.0.0.1:4000.
    #[arg(long)]
    pub listen: Option<String>,

    /// Use synthetic traffic instead of the system's interfaces.
    #[arg(long)]
    pub demo: bool,

    /// Where log output goes; the terminal is taken by the UI.
    #[arg(long, default_value = "netgauge.log")]
    pub log_file: PathBuf,

    /// Print the chart options as JSON and exit.
    #[arg(long)]
    pub dump_options: bool,
}

impl MonitorConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

fn parse_window(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("window must hold at least one point".into()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
