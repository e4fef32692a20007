//! src/graph/sample.rs
//!
//! Throughput samples coming from a sampler and the points stored in a series.

use serde::{Deserialize, Serialize};

/// Bytes per kilobyte used when converting rates for display.
pub const BYTES_PER_KB: f64 = 1024.0;

/// One throughput reading: rates in bytes/sec at a Unix timestamp (seconds).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkData {
    pub timestamp: u64,
    pub transmitted_rate: u64,
    pub received_rate: u64,
}

impl NetworkData {
    pub fn new(timestamp: u64, transmitted_rate: u64, received_rate: u64) -> Self {
        Self {
            timestamp,
            transmitted_rate,
            received_rate,
        }
    }

    /// Upload point in KB/s.
    pub fn upload_point(&self) -> SeriesPoint {
        SeriesPoint(self.timestamp, self.transmitted_rate as f64 / BYTES_PER_KB)
    }

    /// Download point in KB/s.
    pub fn download_point(&self) -> SeriesPoint {
        SeriesPoint(self.timestamp, self.received_rate as f64 / BYTES_PER_KB)
    }
}

/// `(timestamp, value)`; serializes as a two-element array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint(pub u64, pub f64);

impl SeriesPoint {
    pub fn timestamp(&self) -> u64 {
        self.0
    }

    pub fn value(&self) -> f64 {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_rates_to_kilobytes() {
        let sample = NetworkData::new(1000, 2048, 4096);
        assert_eq!(sample.upload_point(), SeriesPoint(1000, 2.0));
        assert_eq!(sample.download_point(), SeriesPoint(1000, 4.0));
    }

    #[test]
    fn conversion_keeps_fractions() {
        let sample = NetworkData::new(7, 1536, 1);
        assert_eq!(sample.upload_point().value(), 1.5);
        assert_eq!(sample.download_point().value(), 1.0 / 1024.0);
    }

    #[test]
    fn point_serializes_as_pair() {
        let json = serde_json::to_string(&SeriesPoint(1000, 2.0)).unwrap();
        assert_eq!(json, "[1000,2.0]");
    }
}
