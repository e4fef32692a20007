//! src/graph/shared.rs
//!
//! Chart state owned by the terminal renderer, and the shared handle passed
//! between the sampler, the TCP feed and the UI.

use std::sync::{Arc, RwLock};

use super::handle::{ChartError, ChartHandle, SeriesUpdate};
use super::options::{ChartOptions, SeriesOptions};
use super::sample::{NetworkData, SeriesPoint};
use super::window::{MAX_DATA_POINTS, update_window, update_window_sized};

/// Rendered chart: the options it draws from plus lifecycle bookkeeping.
#[derive(Debug)]
pub struct ChartState {
    options: ChartOptions,
    disposed: bool,
    /// Number of updates applied since creation.
    revision: u64,
}

impl ChartState {
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            disposed: false,
            revision: 0,
        }
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Release the chart. Later reads see no series and writes fail.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }
}

impl ChartHandle for ChartState {
    fn series_count(&self) -> usize {
        if self.disposed {
            0
        } else {
            self.options.series.len()
        }
    }

    fn series_data(&self, index: usize) -> Option<&[SeriesPoint]> {
        if self.disposed {
            return None;
        }
        self.options.series.get(index).map(|s| s.data.as_slice())
    }

    fn apply(&mut self, update: SeriesUpdate) -> Result<(), ChartError> {
        if self.disposed {
            return Err(ChartError::Disposed);
        }
        for (index, patch) in update.series.into_iter().enumerate() {
            match self.options.series.get_mut(index) {
                Some(series) => series.data = patch.data,
                None => self.options.series.push(SeriesOptions::bare(patch.data)),
            }
        }
        self.revision += 1;
        Ok(())
    }
}

/// Alias: Arc<RwLock<ChartState>>
pub type SharedChart = Arc<RwLock<ChartState>>;

pub fn shared_chart(options: ChartOptions) -> SharedChart {
    Arc::new(RwLock::new(ChartState::new(options)))
}

/// Run the window update under the chart's write lock.
pub fn push_sample(
    chart: &SharedChart,
    sample: &NetworkData,
    window: usize,
) -> Result<(), ChartError> {
    let mut guard = chart.write().map_err(|_| ChartError::Poisoned)?;
    if window == MAX_DATA_POINTS {
        update_window(&mut *guard, sample)
    } else {
        update_window_sized(&mut *guard, sample, window)
    }
}
