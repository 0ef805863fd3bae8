//! Renderer-independent description of what the view shows.

use stockview_core::AveragePeriod;
use time::Date;

use crate::state::{Phase, ViewState};

pub const NO_DATA_MESSAGE: &str = "指定された銘柄のデータが見つかりませんでした。";
pub const LOADING_MESSAGE: &str = "読み込み中...";
pub const CLOSE_LABEL: &str = "終値";

const CLOSE_COLOR: &str = "#8884d8";
const GAIN_COLOR: &str = "#16a34a";
const LOSS_COLOR: &str = "#dc2626";

/// Stroke color of a moving-average overlay.
pub const fn average_color(period: AveragePeriod) -> &'static str {
    match period {
        AveragePeriod::Five => "#ff7300",
        AveragePeriod::TwentyFive => "#82ca9d",
        AveragePeriod::SeventyFive => "#0088FE",
        AveragePeriod::TwoHundred => "#FF0000",
    }
}

pub fn average_label(period: AveragePeriod) -> String {
    format!("{period}日移動平均")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Gain,
    Loss,
}

/// Day-over-day change shown above the chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChangeBadge {
    pub value: f64,
    pub tone: Tone,
}

impl ChangeBadge {
    pub fn new(value: f64) -> Self {
        let tone = if value >= 0.0 { Tone::Gain } else { Tone::Loss };
        Self { value, tone }
    }

    pub fn text(&self) -> String {
        format!("前日比: {:.2}%", self.value)
    }

    pub const fn color(&self) -> &'static str {
        match self.tone {
            Tone::Gain => GAIN_COLOR,
            Tone::Loss => LOSS_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub date: Date,
    pub value: f64,
}

/// One drawn series; points exist only where the value is defined.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    pub key: &'static str,
    pub label: String,
    pub color: &'static str,
    pub points: Vec<ChartPoint>,
}

impl ChartLine {
    pub fn last(&self) -> Option<&ChartPoint> {
        self.points.last()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartFrame {
    pub title: String,
    pub change: Option<ChangeBadge>,
    pub lines: Vec<ChartLine>,
}

impl ChartFrame {
    /// Lowest and highest value across every drawn line.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        self.lines
            .iter()
            .flat_map(|line| line.points.iter().map(|point| point.value))
            .fold(None, |bounds, value| match bounds {
                None => Some((value, value)),
                Some((low, high)) => Some((f64::min(low, value), f64::max(high, value))),
            })
    }

    /// Every plotted date in ascending order.
    pub fn dates(&self) -> Vec<Date> {
        let mut dates = self
            .lines
            .iter()
            .flat_map(|line| line.points.iter().map(|point| point.date))
            .collect::<Vec<_>>();
        dates.sort_unstable();
        dates.dedup();
        dates
    }
}

/// What the view shows for a given state.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Idle,
    Loading,
    Error(String),
    NoData,
    Chart(ChartFrame),
}

impl Screen {
    pub fn from_state(state: &ViewState) -> Self {
        match state.phase() {
            Phase::Idle => Self::Idle,
            Phase::Loading => Self::Loading,
            Phase::Failed => Self::Error(state.error().unwrap_or_default().to_owned()),
            Phase::Loaded => match state.series() {
                Some(series) if !series.is_empty() => Self::Chart(build_frame(state, series)),
                _ => Self::NoData,
            },
        }
    }
}

fn build_frame(state: &ViewState, series: &[stockview_core::AugmentedBar]) -> ChartFrame {
    let close = ChartLine {
        key: "close",
        label: String::from(CLOSE_LABEL),
        color: CLOSE_COLOR,
        points: series
            .iter()
            .map(|bar| ChartPoint {
                date: bar.bar.date,
                value: bar.bar.close,
            })
            .collect(),
    };

    let overlays = state.selected_averages().iter().map(|&period| ChartLine {
        key: period.key(),
        label: average_label(period),
        color: average_color(period),
        points: series
            .iter()
            .filter_map(|bar| {
                bar.average(period).map(|value| ChartPoint {
                    date: bar.bar.date,
                    value,
                })
            })
            .collect(),
    });

    ChartFrame {
        title: format!("{} 株価チャート", state.symbol()),
        change: state.percentage_change().map(ChangeBadge::new),
        lines: std::iter::once(close).chain(overlays).collect(),
    }
}
