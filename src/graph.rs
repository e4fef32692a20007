//! src/graph.rs
//!
//! Throughput chart model: samples, options, the chart handle and the
//! sliding-window update.

pub mod handle;
pub mod options;
pub mod sample;
pub mod shared;
pub mod window;

/// Re-exports
pub use handle::{ChartError, ChartHandle};
pub use options::network_options;
pub use sample::NetworkData;
pub use shared::{SharedChart, push_sample, shared_chart};
pub use window::MAX_DATA_POINTS;
