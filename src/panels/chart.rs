//! src/panels/chart.rs
//!
//! Throughput chart panel: turns the chart's declarative options into ratatui
//! datasets and axes.
//!
//! Each series becomes up to three datasets: a dim bar layer standing in for
//! the area fill, the line itself, and a dotted horizontal mark line at the
//! series maximum labeled with the mark-line formatter.

use chrono::{DateTime, Local};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition, Paragraph},
};

use crate::graph::options::{ChartOptions, SeriesOptions};
use crate::graph::shared::SharedChart;
use crate::panels::palette::{css_color, css_color_with_opacity};

/// Headroom above the tallest point so the peak is not drawn on the border.
const Y_HEADROOM: f64 = 1.1;

/// Renders the shared chart.
pub struct ChartPanel {
    pub shared: SharedChart,
    pub title: String,
}

/// Owned render data for one series.
#[derive(Debug, PartialEq)]
struct SeriesLayer {
    name: String,
    points: Vec<(f64, f64)>,
    line_color: Color,
    show_symbol: bool,
    area_color: Option<Color>,
    mark: Option<MarkLayer>,
}

#[derive(Debug, PartialEq)]
struct MarkLayer {
    label: String,
    value: f64,
    color: Color,
}

impl ChartPanel {
    pub fn new(shared: SharedChart, title: &str) -> Self {
        Self {
            shared,
            title: title.to_string(),
        }
    }

    /// Category x positions: the i-th point of a series sits at x = i.
    fn layers(options: &ChartOptions) -> Vec<SeriesLayer> {
        options
            .series
            .iter()
            .enumerate()
            .map(|(i, s)| Self::layer(i, s))
            .collect()
    }

    fn layer(index: usize, series: &SeriesOptions) -> SeriesLayer {
        let points = series
            .data
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.value()))
            .collect();
        let line_color = series
            .line_style
            .as_ref()
            .and_then(|s| css_color(&s.color))
            .unwrap_or(Color::Indexed(index as u8 + 1));
        let area_color = series.area_style.as_ref().and_then(|s| css_color(&s.color));
        let mark = series.mark_line.as_ref().and_then(|m| {
            let value = series.max_value()?;
            Some(MarkLayer {
                label: m.label.formatter.apply(value),
                value,
                color: css_color(&m.label.color).unwrap_or(line_color),
            })
        });
        SeriesLayer {
            name: series
                .name
                .clone()
                .unwrap_or_else(|| format!("series {}", index)),
            points,
            line_color,
            show_symbol: series.show_symbol,
            area_color,
            mark,
        }
    }

    /// (min, max) of the value axis: starts at the axis `min` (0 if unset).
    fn y_bounds(options: &ChartOptions, layers: &[SeriesLayer]) -> (f64, f64) {
        let lo = options.y_axis.min.unwrap_or(0.0);
        let peak = layers
            .iter()
            .flat_map(|l| l.points.iter().map(|p| p.1))
            .fold(lo, f64::max);
        let hi = if peak > lo {
            lo + (peak - lo) * Y_HEADROOM
        } else {
            lo + 1.0
        };
        (lo, hi)
    }

    fn x_bounds(layers: &[SeriesLayer]) -> (f64, f64) {
        let len = layers.iter().map(|l| l.points.len()).max().unwrap_or(0);
        (0.0, len.saturating_sub(1).max(1) as f64)
    }

    /// First and last timestamp of the longest series.
    fn x_labels(options: &ChartOptions) -> Vec<String> {
        let Some(longest) = options.series.iter().max_by_key(|s| s.data.len()) else {
            return Vec::new();
        };
        match (longest.data.first(), longest.data.last()) {
            (Some(first), Some(last)) => {
                vec![clock_label(first.timestamp()), clock_label(last.timestamp())]
            }
            _ => Vec::new(),
        }
    }

    fn y_labels(options: &ChartOptions, (lo, hi): (f64, f64)) -> Vec<String> {
        let format = options
            .y_axis
            .axis_pointer
            .label
            .map(|l| l.formatter);
        [lo, (lo + hi) / 2.0, hi]
            .into_iter()
            .map(|v| match format {
                Some(f) => f.apply(v),
                None => format!("{:.0}", v),
            })
            .collect()
    }
}

/// Local wall-clock `HH:MM:SS` for a Unix timestamp.
pub fn clock_label(ts: u64) -> String {
    i64::try_from(ts)
        .ok()
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .map(|t| t.with_timezone(&Local).format("%H:%M:%S").to_string())
        .unwrap_or_else(|| ts.to_string())
}

impl crate::ui::Panel for ChartPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(self.title.clone())
            .borders(Borders::ALL);

        let Ok(g) = self.shared.read() else {
            f.render_widget(Paragraph::new("chart unavailable").block(block), area);
            return;
        };
        if g.is_disposed() {
            f.render_widget(Paragraph::new("chart disposed").block(block), area);
            return;
        }
        let options = g.options();

        // Keep layer vectors alive until the chart is rendered
        let layers = Self::layers(options);
        let (xmin, xmax) = Self::x_bounds(&layers);
        let y_bounds = Self::y_bounds(options, &layers);
        let marks: Vec<Vec<(f64, f64)>> = layers
            .iter()
            .map(|l| match &l.mark {
                Some(m) => vec![(xmin, m.value), (xmax, m.value)],
                None => Vec::new(),
            })
            .collect();

        let mut datasets: Vec<Dataset> = Vec::new();
        for (layer, mark) in layers.iter().zip(marks.iter()) {
            if let Some(fill) = layer.area_color {
                datasets.push(
                    Dataset::default()
                        .marker(symbols::Marker::Braille)
                        .graph_type(GraphType::Bar)
                        .style(Style::default().fg(fill))
                        .data(layer.points.as_slice()),
                );
            }
            let marker = if layer.show_symbol {
                symbols::Marker::Dot
            } else {
                symbols::Marker::Braille
            };
            datasets.push(
                Dataset::default()
                    .name(layer.name.clone())
                    .marker(marker)
                    .graph_type(GraphType::Line)
                    .style(Style::default().fg(layer.line_color))
                    .data(layer.points.as_slice()),
            );
            if let Some(m) = &layer.mark {
                datasets.push(
                    Dataset::default()
                        .name(Line::styled(m.label.clone(), Style::default().fg(m.color)))
                        .marker(symbols::Marker::Dot)
                        .graph_type(GraphType::Line)
                        .style(Style::default().fg(layer.line_color))
                        .data(mark.as_slice()),
                );
            }
        }

        let y_axis_opts = &options.y_axis;
        let grid_color = css_color_with_opacity(
            &y_axis_opts.split_line.line_style.color,
            y_axis_opts.split_line.line_style.opacity,
        )
        .unwrap_or(Color::DarkGray);

        let mut x_axis = Axis::default()
            .style(Style::default().fg(grid_color))
            .bounds([xmin, xmax]);
        if options.x_axis.first().is_some_and(|a| a.axis_label.show) {
            x_axis = x_axis.labels(Self::x_labels(options));
        }
        let mut y_axis = Axis::default()
            .style(Style::default().fg(grid_color))
            .bounds([y_bounds.0, y_bounds.1]);
        if y_axis_opts.axis_label.show {
            y_axis = y_axis.labels(Self::y_labels(options, y_bounds));
        }

        let chart = Chart::new(datasets)
            .block(block)
            .legend_position(Some(LegendPosition::TopLeft))
            .hidden_legend_constraints((Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)))
            .x_axis(x_axis)
            .y_axis(y_axis);

        f.render_widget(chart, area);
    }
}
