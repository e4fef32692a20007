//! src/graph/window.rs
//!
//! Sliding-window update: append one sample to the upload and download series
//! and keep only the most recent points.

use super::handle::{ChartError, ChartHandle, SeriesUpdate};
use super::sample::{NetworkData, SeriesPoint};

/// Points kept per series.
pub const MAX_DATA_POINTS: usize = 30;

const UPLOAD_INDEX: usize = 0;
const DOWNLOAD_INDEX: usize = 1;

/// Append `sample` to both series, keeping the last [`MAX_DATA_POINTS`].
pub fn update_window<C: ChartHandle + ?Sized>(
    chart: &mut C,
    sample: &NetworkData,
) -> Result<(), ChartError> {
    update_window_sized(chart, sample, MAX_DATA_POINTS)
}

/// Same as [`update_window`] with an explicit window length.
///
/// A window of 0 is treated as 1 so the new sample is always kept.
/// Timestamps are not checked for ordering; the sample is appended as given.
pub fn update_window_sized<C: ChartHandle + ?Sized>(
    chart: &mut C,
    sample: &NetworkData,
    window: usize,
) -> Result<(), ChartError> {
    // a chart without both series yet starts from empty windows
    let (mut upload, mut download) = if chart.series_count() > DOWNLOAD_INDEX {
        (current(chart, UPLOAD_INDEX), current(chart, DOWNLOAD_INDEX))
    } else {
        (Vec::new(), Vec::new())
    };

    upload.push(sample.upload_point());
    download.push(sample.download_point());

    let window = window.max(1);
    trim_front(&mut upload, window);
    trim_front(&mut download, window);

    chart.apply(SeriesUpdate::new([upload, download]))
}

fn current<C: ChartHandle + ?Sized>(chart: &C, index: usize) -> Vec<SeriesPoint> {
    chart
        .series_data(index)
        .map(<[SeriesPoint]>::to_vec)
        .unwrap_or_default()
}

fn trim_front(points: &mut Vec<SeriesPoint>, window: usize) {
    if points.len() > window {
        let excess = points.len() - window;
        points.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records applied updates; merges data by index like an engine would.
    #[derive(Default)]
    struct FakeChart {
        series: Vec<Vec<SeriesPoint>>,
        applied: usize,
        reject: bool,
    }

    impl ChartHandle for FakeChart {
        fn series_count(&self) -> usize {
            self.series.len()
        }

        fn series_data(&self, index: usize) -> Option<&[SeriesPoint]> {
            self.series.get(index).map(Vec::as_slice)
        }

        fn apply(&mut self, update: SeriesUpdate) -> Result<(), ChartError> {
            if self.reject {
                return Err(ChartError::Disposed);
            }
            for (i, s) in update.series.into_iter().enumerate() {
                match self.series.get_mut(i) {
                    Some(slot) => *slot = s.data,
                    None => self.series.push(s.data),
                }
            }
            self.applied += 1;
            Ok(())
        }
    }

    #[test]
    fn first_sample_on_empty_chart() {
        let mut chart = FakeChart::default();
        update_window(&mut chart, &NetworkData::new(1000, 2048, 4096)).unwrap();

        assert_eq!(chart.series[0], vec![SeriesPoint(1000, 2.0)]);
        assert_eq!(chart.series[1], vec![SeriesPoint(1000, 4.0)]);
        assert_eq!(chart.applied, 1);
    }

    #[test]
    fn single_series_chart_is_treated_as_empty() {
        let mut chart = FakeChart {
            series: vec![vec![SeriesPoint(1, 1.0), SeriesPoint(2, 1.0)]],
            ..Default::default()
        };
        update_window(&mut chart, &NetworkData::new(3, 1024, 1024)).unwrap();

        assert_eq!(chart.series[0], vec![SeriesPoint(3, 1.0)]);
        assert_eq!(chart.series[1], vec![SeriesPoint(3, 1.0)]);
    }

    #[test]
    fn length_tracks_min_of_samples_and_window() {
        for n in [0usize, 1, 29, 30, 31, 64] {
            let mut chart = FakeChart::default();
            for ts in 0..n as u64 {
                update_window(&mut chart, &NetworkData::new(ts, ts * 10, ts * 20)).unwrap();
            }
            let expected = n.min(MAX_DATA_POINTS);
            let len = |i: usize| chart.series.get(i).map_or(0, Vec::len);
            assert_eq!(len(0), expected, "upload after {n} samples");
            assert_eq!(len(1), expected, "download after {n} samples");
        }
    }

    #[test]
    fn evicts_oldest_first() {
        let mut chart = FakeChart::default();
        for ts in 1..=35u64 {
            update_window(&mut chart, &NetworkData::new(ts, 1024, 1024)).unwrap();
        }

        for series in &chart.series {
            assert_eq!(series.len(), 30);
            assert_eq!(series.first().unwrap().timestamp(), 6);
            assert_eq!(series.last().unwrap().timestamp(), 35);
            let stamps: Vec<u64> = series.iter().map(SeriesPoint::timestamp).collect();
            assert_eq!(stamps, (6..=35).collect::<Vec<_>>());
        }
    }

    #[test]
    fn last_point_is_latest_sample() {
        let mut chart = FakeChart::default();
        let samples = [
            NetworkData::new(10, 5000, 100),
            NetworkData::new(11, 0, 7777),
            NetworkData::new(12, 1, 3),
        ];
        for s in &samples {
            update_window(&mut chart, s).unwrap();
            assert_eq!(*chart.series[0].last().unwrap(), s.upload_point());
            assert_eq!(*chart.series[1].last().unwrap(), s.download_point());
        }
        assert_eq!(chart.series[0][0].value(), 5000.0 / 1024.0);
    }

    #[test]
    fn out_of_order_timestamps_are_kept() {
        let mut chart = FakeChart::default();
        update_window(&mut chart, &NetworkData::new(20, 0, 0)).unwrap();
        update_window(&mut chart, &NetworkData::new(10, 0, 0)).unwrap();
        update_window(&mut chart, &NetworkData::new(10, 0, 0)).unwrap();

        let stamps: Vec<u64> = chart.series[0].iter().map(SeriesPoint::timestamp).collect();
        assert_eq!(stamps, vec![20, 10, 10]);
    }

    #[test]
    fn custom_window_size() {
        let mut chart = FakeChart::default();
        for ts in 0..10u64 {
            update_window_sized(&mut chart, &NetworkData::new(ts, 0, 0), 3).unwrap();
        }
        let stamps: Vec<u64> = chart.series[1].iter().map(SeriesPoint::timestamp).collect();
        assert_eq!(stamps, vec![7, 8, 9]);
    }

    #[test]
    fn zero_window_keeps_latest_sample() {
        let mut chart = FakeChart::default();
        update_window_sized(&mut chart, &NetworkData::new(1, 1024, 1024), 0).unwrap();
        update_window_sized(&mut chart, &NetworkData::new(2, 2048, 1024), 0).unwrap();

        assert_eq!(chart.series[0], vec![SeriesPoint(2, 2.0)]);
        assert_eq!(chart.series[1], vec![SeriesPoint(2, 1.0)]);
    }

    #[test]
    fn apply_errors_propagate() {
        let mut chart = FakeChart {
            reject: true,
            ..Default::default()
        };
        let err = update_window(&mut chart, &NetworkData::new(1, 1, 1)).unwrap_err();
        assert_eq!(err, ChartError::Disposed);
        assert!(chart.series.is_empty());
    }
}
