//! src/app.rs
//!
//! Terminal throughput gauge.
//!
//! Builds the shared chart from the static network options, starts the
//! sampler thread (and the TCP sample feed when `--listen` is given), then
//! runs the UI loop until the user quits.
//!
//! # Keyboard Controls
//!
//! - **p**: pause/resume sampling. The chart keeps its current window.
//! - **q** / **Esc**: quit and restore the terminal.
//!
//! # Sample Feed (ASCII, Line-Based)
//!
//! With `--listen 127.0.0.1:4000` other processes can feed samples:
//!
//! ```text
//! $ nc 127.0.0.1 4000
//! push 1700000000 2048 4096
//! OK
//! series 0
//! OK [[1700000000,2.0]]
//! quit
//! OK bye
//! ```
//!
//! `options` replies with the chart options as one line of JSON.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::Constraint;
use tracing::{info, warn};

use crate::config::MonitorConfig;
use crate::graph::{SharedChart, network_options, shared_chart};
use crate::net::remote::remote_server;
use crate::net::sampler::{DemoRates, InterfaceRates, RateSource, start_sampler, unix_timestamp};
use crate::panels::{ChartPanel, RatePanel, SamplesPanel, TextPanel};
use crate::ui::{Node, columns, leaf, rows};

const FRAME_TIME: Duration = Duration::from_millis(100);

fn layout(chart: &SharedChart, paused: bool) -> Node {
    let mut rates = RatePanel::new(chart.clone());
    rates.paused = paused;

    rows(vec![
        (
            Constraint::Length(3),
            leaf(TextPanel::header("Network Throughput")),
        ),
        (
            Constraint::Percentage(65),
            leaf(ChartPanel::new(chart.clone(), "Upload / Download")),
        ),
        (
            Constraint::Min(6),
            columns(vec![
                (Constraint::Percentage(55), leaf(SamplesPanel::new(chart.clone()))),
                (Constraint::Percentage(45), leaf(rates)),
            ]),
        ),
        (
            Constraint::Length(3),
            leaf(TextPanel::titled("P=Pause  Q/Esc=Quit", "Controls")),
        ),
    ])
}

pub fn run(config: MonitorConfig) -> Result<()> {
    let chart = shared_chart(network_options());
    let paused = Arc::new(AtomicBool::new(false));

    let source: Box<dyn RateSource> = if config.demo {
        Box::new(DemoRates::new(unix_timestamp()))
    } else {
        Box::new(InterfaceRates::new())
    };
    let sampler = start_sampler(
        source,
        chart.clone(),
        config.interval(),
        config.window,
        paused.clone(),
    );

    if let Some(addr) = config.listen.clone() {
        let chart = chart.clone();
        let window = config.window;
        thread::spawn(move || remote_server(&addr, chart, window));
    }

    info!(demo = config.demo, window = config.window, "ui starting");
    let mut terminal = ratatui::init();
    let result = ui_loop(&mut terminal, &chart, &paused);
    ratatui::restore();

    match chart.write() {
        Ok(mut g) => g.dispose(),
        Err(_) => warn!("chart lock poisoned at shutdown"),
    }
    // a paused sampler only notices disposal once it pushes again
    paused.store(false, Ordering::Relaxed);
    if sampler.join().is_err() {
        warn!("sampler thread panicked");
    }
    info!("ui stopped");
    result
}

fn ui_loop(
    terminal: &mut ratatui::DefaultTerminal,
    chart: &SharedChart,
    paused: &AtomicBool,
) -> Result<()> {
    loop {
        let frame_start = Instant::now();

        let root = layout(chart, paused.load(Ordering::Relaxed));
        terminal.draw(|f| root.draw(f, f.area()))?;

        while event::poll(Duration::from_millis(0))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('p') => {
                        let now = !paused.load(Ordering::Relaxed);
                        paused.store(now, Ordering::Relaxed);
                        info!(paused = now, "sampling toggled");
                    }
                    _ => {}
                }
            }
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}
