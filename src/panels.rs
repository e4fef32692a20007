//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod chart;
pub mod history;
pub mod info;
pub mod palette;
pub mod text;

pub use chart::ChartPanel;
pub use history::SamplesPanel;
pub use info::RatePanel;
pub use text::TextPanel;
