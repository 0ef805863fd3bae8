//! Text and SVG renderings of a [`Screen`].

use std::collections::BTreeMap;

use time::Date;

use crate::chart::{ChartFrame, ChartLine, Screen, LOADING_MESSAGE, NO_DATA_MESSAGE};

const MARGIN_TOP: f64 = 64.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 80.0;
const MARGIN_LEFT: f64 = 64.0;
const Y_TICKS: usize = 5;

/// Terminal summary of a screen.
pub fn render_text(screen: &Screen) -> String {
    match screen {
        Screen::Idle => String::new(),
        Screen::Loading => String::from(LOADING_MESSAGE),
        Screen::Error(message) => message.clone(),
        Screen::NoData => String::from(NO_DATA_MESSAGE),
        Screen::Chart(frame) => render_frame_text(frame),
    }
}

fn render_frame_text(frame: &ChartFrame) -> String {
    let mut lines = vec![frame.title.clone()];
    if let Some(change) = &frame.change {
        lines.push(change.text());
    }

    let dates = frame.dates();
    if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
        lines.push(format!("{first} ~ {last} ({} bars)", dates.len()));
    }

    for line in &frame.lines {
        match line.last() {
            Some(point) => lines.push(format!(
                "  {}: {:.2} ({})",
                line.label, point.value, point.date
            )),
            None => lines.push(format!("  {}: -", line.label)),
        }
    }
    lines.join("\n")
}

/// Line chart of `frame` as a standalone SVG document.
pub fn render_svg(frame: &ChartFrame, width: u32, height: u32) -> String {
    let width = f64::from(width.max(200));
    let height = f64::from(height.max(160));
    let plot = PlotArea {
        left: MARGIN_LEFT,
        top: MARGIN_TOP,
        width: width - MARGIN_LEFT - MARGIN_RIGHT,
        height: height - MARGIN_TOP - MARGIN_BOTTOM,
    };

    let dates = frame.dates();
    let positions = dates
        .iter()
        .enumerate()
        .map(|(index, date)| (*date, index))
        .collect::<BTreeMap<Date, usize>>();
    let (low, high) = padded_domain(frame.value_bounds().unwrap_or((0.0, 1.0)));

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" font-family="sans-serif" font-size="12">"#
    );
    svg.push('\n');
    svg.push_str(&format!(
        r##"<rect width="{width}" height="{height}" fill="#ffffff"/>"##
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r##"<text x="{MARGIN_LEFT}" y="22" font-size="18" font-weight="600" fill="#000000">{}</text>"##,
        escape_xml(&frame.title)
    ));
    svg.push('\n');
    if let Some(change) = &frame.change {
        svg.push_str(&format!(
            r#"<text x="{MARGIN_LEFT}" y="42" font-size="14" fill="{}">{}</text>"#,
            change.color(),
            escape_xml(&change.text())
        ));
        svg.push('\n');
    }

    for tick in 0..=Y_TICKS {
        let value = low + (high - low) * tick as f64 / Y_TICKS as f64;
        let y = plot.y(value, low, high);
        svg.push_str(&format!(
            r##"<line x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#cccccc" stroke-dasharray="3 3"/>"##,
            plot.left,
            plot.left + plot.width
        ));
        svg.push_str(&format!(
            r##"<text x="{:.1}" y="{:.1}" text-anchor="end" fill="#666666">{value:.2}</text>"##,
            plot.left - 6.0,
            y + 4.0
        ));
        svg.push('\n');
    }

    for (index, date) in axis_dates(&dates) {
        let x = plot.x(index, dates.len());
        let y = plot.top + plot.height + 14.0;
        svg.push_str(&format!(
            r##"<text x="{x:.1}" y="{y:.1}" text-anchor="end" transform="rotate(-45 {x:.1} {y:.1})" fill="#666666">{date}</text>"##
        ));
        svg.push('\n');
    }

    for line in &frame.lines {
        svg.push_str(&polyline(line, &positions, dates.len(), &plot, low, high));
        svg.push('\n');
    }

    let legend_y = height - 12.0;
    let mut legend_x = plot.left;
    for line in &frame.lines {
        svg.push_str(&format!(
            r##"<rect x="{legend_x:.1}" y="{:.1}" width="10" height="10" fill="{}"/><text x="{:.1}" y="{legend_y:.1}" fill="#333333">{}</text>"##,
            legend_y - 9.0,
            line.color,
            legend_x + 14.0,
            escape_xml(&line.label)
        ));
        svg.push('\n');
        legend_x += 24.0 + 12.0 * line.label.chars().count() as f64;
    }

    svg.push_str("</svg>\n");
    svg
}

struct PlotArea {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl PlotArea {
    fn x(&self, index: usize, count: usize) -> f64 {
        if count <= 1 {
            return self.left + self.width / 2.0;
        }
        self.left + self.width * index as f64 / (count - 1) as f64
    }

    fn y(&self, value: f64, low: f64, high: f64) -> f64 {
        self.top + self.height * (1.0 - (value - low) / (high - low))
    }
}

fn polyline(
    line: &ChartLine,
    positions: &BTreeMap<Date, usize>,
    count: usize,
    plot: &PlotArea,
    low: f64,
    high: f64,
) -> String {
    let points = line
        .points
        .iter()
        .filter_map(|point| {
            let index = positions.get(&point.date)?;
            Some(format!(
                "{:.1},{:.1}",
                plot.x(*index, count),
                plot.y(point.value, low, high)
            ))
        })
        .collect::<Vec<_>>()
        .join(" ");
    let stroke_width = if line.key == "close" { 2.0 } else { 1.5 };

    format!(
        r#"<polyline data-key="{}" fill="none" stroke="{}" stroke-width="{stroke_width}" points="{points}"/>"#,
        line.key, line.color
    )
}

/// Y domain with 5% headroom; a flat series gets a unit band.
fn padded_domain((low, high): (f64, f64)) -> (f64, f64) {
    if (high - low).abs() < f64::EPSILON {
        return (low - 1.0, high + 1.0);
    }
    let pad = (high - low) * 0.05;
    (low - pad, high + pad)
}

/// First, middle, and last date for x-axis labels.
fn axis_dates(dates: &[Date]) -> Vec<(usize, Date)> {
    let mut indices = match dates.len() {
        0 => Vec::new(),
        1 => vec![0],
        len => vec![0, len / 2, len - 1],
    };
    indices.dedup();
    indices.into_iter().map(|index| (index, dates[index])).collect()
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
