//! src/panels/info.rs
//!
//! Rate panel: latest upload/download readings and the window peaks.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::options::{ChartOptions, LabelFormat};
use crate::graph::shared::SharedChart;
use crate::panels::palette::css_color;

/// Latest and peak value of one series, formatted for display.
#[derive(Debug, PartialEq)]
struct Reading {
    name: String,
    color: Color,
    latest: String,
    peak: String,
}

/// Read-only rate summary; `paused` changes the border and title.
pub struct RatePanel {
    pub shared: SharedChart,
    pub paused: bool,
}

impl RatePanel {
    pub fn new(shared: SharedChart) -> Self {
        Self {
            shared,
            paused: false,
        }
    }

    fn readings(options: &ChartOptions) -> Vec<Reading> {
        // values are shown the way the y-axis pointer would label them
        let format = options
            .y_axis
            .axis_pointer
            .label
            .map(|l| l.formatter)
            .unwrap_or(LabelFormat::KbPerSec);
        options
            .series
            .iter()
            .map(|s| Reading {
                name: s.name.clone().unwrap_or_default(),
                color: s
                    .line_style
                    .as_ref()
                    .and_then(|l| css_color(&l.color))
                    .unwrap_or(Color::White),
                latest: s
                    .data
                    .last()
                    .map(|p| format.apply(p.value()))
                    .unwrap_or_else(|| "-".into()),
                peak: s
                    .max_value()
                    .map(|v| format.apply(v))
                    .unwrap_or_else(|| "-".into()),
            })
            .collect()
    }
}

impl crate::ui::Panel for RatePanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let title = if self.paused { "Rates (paused)" } else { "Rates" };
        let mut block = Block::default().title(title).borders(Borders::ALL);
        if self.paused {
            block = block.style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            );
        }

        let Ok(g) = self.shared.read() else {
            f.render_widget(Paragraph::new("chart unavailable").block(block), area);
            return;
        };

        let mut lines: Vec<Line> = Self::readings(g.options())
            .into_iter()
            .map(|r| {
                Line::from(vec![
                    Span::styled(
                        format!("{:<16}", r.name),
                        Style::default().fg(r.color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("now {:>10}  peak {:>10}", r.latest, r.peak)),
                ])
            })
            .collect();
        lines.push(Line::from(Span::styled(
            format!("updates={}", g.revision()),
            Style::default().fg(Color::DarkGray),
        )));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::options::network_options;
    use crate::graph::sample::SeriesPoint;

    #[test]
    fn empty_chart_shows_placeholders() {
        let readings = RatePanel::readings(&network_options());
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].latest, "-");
        assert_eq!(readings[1].peak, "-");
    }

    #[test]
    fn formats_latest_and_peak() {
        let mut opts = network_options();
        opts.series[1].data = vec![SeriesPoint(1, 120.6), SeriesPoint(2, 40.2)];
        let readings = RatePanel::readings(&opts);
        assert_eq!(readings[1].name, "Download Speed");
        assert_eq!(readings[1].latest, "40KB/s");
        assert_eq!(readings[1].peak, "121KB/s");
        assert_eq!(readings[1].color, Color::Rgb(0x33, 0xA1, 0xFF));
    }
}
