//! src/net/sampler.rs
//!
//! Throughput sources and the thread that feeds their samples into the chart.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sysinfo::Networks;
use tracing::{debug, error, info};

use crate::graph::{ChartError, NetworkData, SharedChart, push_sample};

/// Anything that can produce a throughput reading on demand.
pub trait RateSource: Send {
    fn sample(&mut self) -> NetworkData;
}

/// Seconds since the Unix epoch, 0 if the clock is before it.
pub fn unix_timestamp() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Scale a byte count observed over `elapsed` to bytes per second.
pub fn per_second(bytes: u64, elapsed: Duration) -> u64 {
    if elapsed.is_zero() {
        return bytes;
    }
    (bytes as f64 / elapsed.as_secs_f64()).round() as u64
}

/// Totals across every network interface reported by the OS.
pub struct InterfaceRates {
    networks: Networks,
    last_refresh: Instant,
}

impl InterfaceRates {
    pub fn new() -> Self {
        Self {
            networks: Networks::new_with_refreshed_list(),
            last_refresh: Instant::now(),
        }
    }
}

impl RateSource for InterfaceRates {
    fn sample(&mut self) -> NetworkData {
        // received()/transmitted() report bytes since the previous refresh;
        // `true` drops interfaces that disappeared
        self.networks.refresh(true);
        let elapsed = self.last_refresh.elapsed();
        self.last_refresh = Instant::now();

        let mut received = 0u64;
        let mut transmitted = 0u64;
        for (_name, data) in self.networks.iter() {
            received = received.saturating_add(data.received());
            transmitted = transmitted.saturating_add(data.transmitted());
        }

        NetworkData::new(
            unix_timestamp(),
            per_second(transmitted, elapsed),
            per_second(received, elapsed),
        )
    }
}

/// Synthetic random-walk traffic.
pub struct DemoRates {
    rng: StdRng,
    upload: f64,
    download: f64,
}

impl DemoRates {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            upload: 64.0 * 1024.0,
            download: 512.0 * 1024.0,
        }
    }

    fn step(rng: &mut StdRng, value: f64, ceiling: f64) -> f64 {
        let factor = 1.0 + rng.random_range(-0.25..0.25);
        (value * factor).clamp(1024.0, ceiling)
    }
}

impl RateSource for DemoRates {
    fn sample(&mut self) -> NetworkData {
        self.upload = Self::step(&mut self.rng, self.upload, 2.0 * 1024.0 * 1024.0);
        self.download = Self::step(&mut self.rng, self.download, 16.0 * 1024.0 * 1024.0);
        NetworkData::new(unix_timestamp(), self.upload as u64, self.download as u64)
    }
}

/// Spawn a thread that samples `source` every `interval` and pushes the
/// result into `chart`, unless `paused` is set.
///
/// The thread stops once the chart is disposed or its lock is poisoned.
pub fn start_sampler(
    mut source: Box<dyn RateSource>,
    chart: SharedChart,
    interval: Duration,
    window: usize,
    paused: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        info!(?interval, window, "sampler started");
        loop {
            thread::sleep(interval);
            // sample even when paused so interface deltas stay one interval wide
            let sample = source.sample();
            if paused.load(Ordering::Relaxed) {
                continue;
            }
            debug!(
                ts = sample.timestamp,
                tx = sample.transmitted_rate,
                rx = sample.received_rate,
                "sample"
            );
            match push_sample(&chart, &sample, window) {
                Ok(()) => {}
                Err(ChartError::Disposed) => {
                    info!("chart disposed, sampler exiting");
                    break;
                }
                Err(e) => {
                    error!("sampler: {}", e);
                    break;
                }
            }
        }
    })
}
