//! src/graph/handle.rs
//!
//! The capability the window updater needs from a rendered chart: read a
//! series' current points and apply a data-only partial update.

use thiserror::Error;

use super::sample::SeriesPoint;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChartError {
    #[error("chart has been disposed")]
    Disposed,
    #[error("chart lock poisoned")]
    Poisoned,
}

/// Replacement `data` for one series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesData {
    pub data: Vec<SeriesPoint>,
}

/// Partial options update touching only series data, merged by index.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesUpdate {
    pub series: Vec<SeriesData>,
}

impl SeriesUpdate {
    pub fn new(series: impl IntoIterator<Item = Vec<SeriesPoint>>) -> Self {
        Self {
            series: series.into_iter().map(|data| SeriesData { data }).collect(),
        }
    }
}

pub trait ChartHandle {
    /// Number of series the chart currently holds.
    fn series_count(&self) -> usize;

    /// Points of series `index`; `None` when the chart has no such series.
    fn series_data(&self, index: usize) -> Option<&[SeriesPoint]>;

    /// Merge `update` into the chart. Only `data` of the addressed series changes.
    fn apply(&mut self, update: SeriesUpdate) -> Result<(), ChartError>;
}
