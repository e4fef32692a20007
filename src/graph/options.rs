//! src/graph/options.rs
//!
//! Declarative chart options for the throughput chart.
//!
//! The options tree mirrors what a chart engine consumes: a grid, a category
//! x-axis, a value y-axis starting at zero, and one line series per direction.
//! It serializes to camelCase JSON so it can be exported as-is.

use serde::Serialize;

use super::sample::SeriesPoint;

pub const UPLOAD_SERIES: &str = "Upload Speed";
pub const DOWNLOAD_SERIES: &str = "Download Speed";

const SPLIT_LINE_COLOR: &str = "#4C4D4F";
const SPLIT_LINE_OPACITY: f64 = 0.5;
const MARK_LABEL_COLOR: &str = "#E5EAF3";

/// Label formatting rules attached to axis pointers and mark lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelFormat {
    /// `"<value rounded to nearest integer>KB/s"`
    KbPerSec,
}

impl LabelFormat {
    pub fn apply(self, value: f64) -> String {
        match self {
            LabelFormat::KbPerSec => format_rate_label(value),
        }
    }
}

/// Round half away from zero and suffix with `KB/s`.
pub fn format_rate_label(value: f64) -> String {
    format!("{:.0}KB/s", value.round())
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub grid: Grid,
    pub x_axis: Vec<Axis>,
    pub y_axis: Axis,
    pub series: Vec<SeriesOptions>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    pub left: String,
    pub right: String,
    pub bottom: String,
    pub top: String,
    pub contain_label: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisKind {
    Category,
    Value,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: AxisKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    pub split_line: SplitLine,
    pub axis_label: Toggle,
    pub axis_tick: Toggle,
    pub axis_pointer: AxisPointer,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitLine {
    pub show: bool,
    pub line_style: SplitLineStyle,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SplitLineStyle {
    pub color: String,
    pub opacity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub show: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisPointer {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<PointerLabel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handle: Option<Toggle>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PointerLabel {
    pub formatter: LabelFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesKind {
    Line,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: SeriesKind,
    pub smooth: bool,
    pub show_symbol: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_style: Option<ColorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area_style: Option<ColorStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mark_line: Option<MarkLine>,
    pub data: Vec<SeriesPoint>,
}

impl SeriesOptions {
    /// A series carrying nothing but data, as created by a merge into a chart
    /// that did not have that series index yet.
    pub fn bare(data: Vec<SeriesPoint>) -> Self {
        Self {
            name: None,
            kind: SeriesKind::Line,
            smooth: false,
            show_symbol: true,
            line_style: None,
            area_style: None,
            mark_line: None,
            data,
        }
    }

    /// Largest value in the series, if any.
    pub fn max_value(&self) -> Option<f64> {
        self.data
            .iter()
            .map(SeriesPoint::value)
            .fold(None, |acc, v| match acc {
                Some(m) if m >= v => Some(m),
                _ => Some(v),
            })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColorStyle {
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkSymbol {
    None,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelPosition {
    InsideEndBottom,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkLine {
    pub symbol: MarkSymbol,
    pub label: MarkLabel,
    pub data: Vec<MarkDatum>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MarkLabel {
    pub formatter: LabelFormat,
    pub position: LabelPosition,
    pub color: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkKind {
    Max,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct MarkDatum {
    #[serde(rename = "type")]
    pub kind: MarkKind,
}

fn split_line() -> SplitLine {
    SplitLine {
        show: true,
        line_style: SplitLineStyle {
            color: SPLIT_LINE_COLOR.to_string(),
            opacity: SPLIT_LINE_OPACITY,
        },
    }
}

fn throughput_series(name: &str, line: &str, area: &str) -> SeriesOptions {
    SeriesOptions {
        name: Some(name.to_string()),
        kind: SeriesKind::Line,
        smooth: true,
        show_symbol: false,
        line_style: Some(ColorStyle {
            color: line.to_string(),
        }),
        area_style: Some(ColorStyle {
            color: area.to_string(),
        }),
        mark_line: Some(MarkLine {
            symbol: MarkSymbol::None,
            label: MarkLabel {
                formatter: LabelFormat::KbPerSec,
                position: LabelPosition::InsideEndBottom,
                color: MARK_LABEL_COLOR.to_string(),
            },
            data: vec![MarkDatum {
                kind: MarkKind::Max,
            }],
        }),
        data: Vec::new(),
    }
}

/// Build the throughput chart options. Same value on every call.
pub fn network_options() -> ChartOptions {
    ChartOptions {
        grid: Grid {
            left: "4".into(),
            right: "4".into(),
            bottom: "4".into(),
            top: "4".into(),
            contain_label: true,
        },
        x_axis: vec![Axis {
            kind: AxisKind::Category,
            data: Some(Vec::new()),
            min: None,
            split_line: split_line(),
            axis_label: Toggle { show: true },
            axis_tick: Toggle { show: false },
            axis_pointer: AxisPointer {
                show: false,
                value: None,
                snap: None,
                label: None,
                handle: None,
            },
        }],
        y_axis: Axis {
            kind: AxisKind::Value,
            data: None,
            min: Some(0.0),
            split_line: split_line(),
            axis_label: Toggle { show: false },
            axis_tick: Toggle { show: false },
            axis_pointer: AxisPointer {
                show: false,
                value: Some(0.0),
                snap: Some(true),
                label: Some(PointerLabel {
                    formatter: LabelFormat::KbPerSec,
                }),
                handle: Some(Toggle { show: true }),
            },
        },
        series: vec![
            throughput_series(UPLOAD_SERIES, "#FF5733", "rgba(255, 87, 51, 0.3)"),
            throughput_series(DOWNLOAD_SERIES, "#33A1FF", "rgba(51, 161, 255, 0.3)"),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_label_rounds_to_integer() {
        assert_eq!(format_rate_label(0.0), "0KB/s");
        assert_eq!(format_rate_label(2.4), "2KB/s");
        assert_eq!(format_rate_label(2.5), "3KB/s");
        assert_eq!(format_rate_label(1023.6), "1024KB/s");
        assert_eq!(LabelFormat::KbPerSec.apply(12.49), "12KB/s");
    }

    #[test]
    fn options_are_stable_across_calls() {
        assert_eq!(network_options(), network_options());
    }

    #[test]
    fn describes_two_throughput_series() {
        let opts = network_options();
        assert_eq!(opts.series.len(), 2);

        let up = &opts.series[0];
        assert_eq!(up.name.as_deref(), Some(UPLOAD_SERIES));
        assert!(up.smooth);
        assert!(!up.show_symbol);
        assert_eq!(up.line_style.as_ref().unwrap().color, "#FF5733");
        assert!(up.data.is_empty());

        let down = &opts.series[1];
        assert_eq!(down.name.as_deref(), Some(DOWNLOAD_SERIES));
        assert_eq!(
            down.area_style.as_ref().unwrap().color,
            "rgba(51, 161, 255, 0.3)"
        );
        let mark = down.mark_line.as_ref().unwrap();
        assert_eq!(mark.data, vec![MarkDatum { kind: MarkKind::Max }]);
        assert_eq!(mark.label.formatter, LabelFormat::KbPerSec);
    }

    #[test]
    fn y_axis_starts_at_zero_and_hides_labels() {
        let opts = network_options();
        assert_eq!(opts.y_axis.kind, AxisKind::Value);
        assert_eq!(opts.y_axis.min, Some(0.0));
        assert!(!opts.y_axis.axis_label.show);
        assert_eq!(
            opts.y_axis.axis_pointer.label,
            Some(PointerLabel {
                formatter: LabelFormat::KbPerSec
            })
        );
        assert_eq!(opts.x_axis[0].kind, AxisKind::Category);
        assert!(opts.x_axis[0].axis_label.show);
    }

    #[test]
    fn serializes_engine_style_keys() {
        let json = serde_json::to_value(network_options()).unwrap();
        assert_eq!(json["grid"]["containLabel"], true);
        assert_eq!(json["xAxis"][0]["type"], "category");
        assert_eq!(json["yAxis"]["min"], 0.0);
        assert_eq!(json["series"][0]["type"], "line");
        assert_eq!(json["series"][0]["showSymbol"], false);
        assert_eq!(
            json["series"][1]["markLine"]["label"]["position"],
            "insideEndBottom"
        );
        assert_eq!(json["series"][1]["markLine"]["data"][0]["type"], "max");
    }

    #[test]
    fn max_value_ignores_empty_series() {
        let mut s = SeriesOptions::bare(Vec::new());
        assert_eq!(s.max_value(), None);
        s.data = vec![SeriesPoint(1, 3.0), SeriesPoint(2, 9.5), SeriesPoint(3, 1.0)];
        assert_eq!(s.max_value(), Some(9.5));
    }
}
