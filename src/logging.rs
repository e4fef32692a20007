//! src/logging.rs
//!
//! File logging. The UI owns the terminal, so events go to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::{Result, WrapErr};
use tracing::level_filters::LevelFilter;

/// Level from `RUST_LOG` (trace/debug/info/warn/error), `info` otherwise.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    match value.map(str::to_lowercase).as_deref() {
        Some("trace") => LevelFilter::TRACE,
        Some("debug") => LevelFilter::DEBUG,
        Some("warn") => LevelFilter::WARN,
        Some("error") => LevelFilter::ERROR,
        Some("off") => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

pub fn init(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("opening log file {}", path.display()))?;

    let level = level_from_env(std::env::var("RUST_LOG").ok().as_deref());
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_levels() {
        assert_eq!(level_from_env(Some("DEBUG")), LevelFilter::DEBUG);
        assert_eq!(level_from_env(Some("error")), LevelFilter::ERROR);
        assert_eq!(level_from_env(Some("nonsense")), LevelFilter::INFO);
        assert_eq!(level_from_env(None), LevelFilter::INFO);
    }
}
