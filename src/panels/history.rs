//! src/panels/history.rs
//!
//! Samples panel: the points currently in the window, newest at the bottom.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::options::ChartOptions;
use crate::graph::shared::SharedChart;
use crate::panels::chart::clock_label;

/// One row: timestamp plus the upload and download value at that index.
#[derive(Debug, PartialEq)]
struct Row {
    timestamp: u64,
    upload: Option<f64>,
    download: Option<f64>,
}

pub struct SamplesPanel {
    pub shared: SharedChart,
}

impl SamplesPanel {
    pub fn new(shared: SharedChart) -> Self {
        Self { shared }
    }

    /// Pair the first two series by position; the longer one drives the rows.
    fn rows(options: &ChartOptions) -> Vec<Row> {
        let empty = Vec::new();
        let up = options.series.first().map_or(&empty, |s| &s.data);
        let down = options.series.get(1).map_or(&empty, |s| &s.data);
        let len = up.len().max(down.len());
        (0..len)
            .map(|i| Row {
                timestamp: up
                    .get(i)
                    .or_else(|| down.get(i))
                    .map(|p| p.timestamp())
                    .unwrap_or_default(),
                upload: up.get(i).map(|p| p.value()),
                download: down.get(i).map(|p| p.value()),
            })
            .collect()
    }
}

fn cell(v: Option<f64>) -> String {
    v.map(|v| format!("{:>9.1}", v))
        .unwrap_or_else(|| format!("{:>9}", "-"))
}

impl crate::ui::Panel for SamplesPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default().title("Samples (KB/s)").borders(Borders::ALL);
        let Ok(g) = self.shared.read() else {
            f.render_widget(Paragraph::new("chart unavailable").block(block), area);
            return;
        };

        let rows = Self::rows(g.options());
        let height = area.height.saturating_sub(2) as usize;
        let start = rows.len().saturating_sub(height);
        let last_index = rows.len().saturating_sub(1);

        let lines: Vec<Line> = rows
            .iter()
            .enumerate()
            .skip(start)
            .map(|(i, row)| {
                let value_style = if i == last_index {
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Cyan)
                };
                Line::from(vec![
                    Span::styled(clock_label(row.timestamp), Style::default().fg(Color::Green)),
                    Span::styled("  up ", Style::default().fg(Color::Yellow)),
                    Span::styled(cell(row.upload), value_style),
                    Span::styled("  down ", Style::default().fg(Color::Yellow)),
                    Span::styled(cell(row.download), value_style),
                ])
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
