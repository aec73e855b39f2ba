//! Text line chart of principal growth and daily profit

use super::format::format_currency;
use super::ReportStyle;
use crate::projection::GrowthPoint;

/// Number of plot rows
pub const CHART_HEIGHT: usize = 12;

/// Maximum number of plotted columns; longer runs are downsampled
pub const CHART_MAX_WIDTH: usize = 64;

const PRINCIPAL_MARKER: char = '*';
const PROFIT_MARKER: char = '+';

/// Render new principal (`*`) and daily profit (`+`) against the day
/// axis. Both series share one y scale, like the dashboard chart this
/// mirrors, so the profit line hugs the bottom of tall charts.
pub fn render_chart(series: &[GrowthPoint], style: ReportStyle) -> String {
    if series.is_empty() {
        return String::new();
    }

    let samples = downsample(series, CHART_MAX_WIDTH);
    let width = samples.len();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for point in &samples {
        min = min.min(point.profit).min(point.new_principal);
        max = max.max(point.profit).max(point.new_principal);
    }
    let span = if max > min { max - min } else { 1.0 };

    let mut grid = vec![vec![' '; width]; CHART_HEIGHT];
    for (col, point) in samples.iter().enumerate() {
        grid[row_for(point.profit, min, span)][col] = PROFIT_MARKER;
    }
    for (col, point) in samples.iter().enumerate() {
        grid[row_for(point.new_principal, min, span)][col] = PRINCIPAL_MARKER;
    }

    let (axis, tick, corner, rule) = match style {
        ReportStyle::Fancy => ('│', '┤', '└', '─'),
        ReportStyle::Plain => ('|', '+', '+', '-'),
    };

    let mid_row = CHART_HEIGHT / 2;
    let mid_value = min + span * (CHART_HEIGHT - 1 - mid_row) as f64 / (CHART_HEIGHT - 1) as f64;
    let labels = [
        (0, format_currency(max)),
        (mid_row, format_currency(mid_value)),
        (CHART_HEIGHT - 1, format_currency(min)),
    ];
    let gutter = labels
        .iter()
        .map(|(_, label)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (row, cells) in grid.iter().enumerate() {
        let label = labels
            .iter()
            .find(|(r, _)| *r == row)
            .map(|(_, l)| l.as_str())
            .unwrap_or("");
        let axis_char = if label.is_empty() { axis } else { tick };

        let mut line = format!("{:>gutter$} ", label, gutter = gutter);
        line.push(axis_char);
        line.extend(cells.iter());
        out.push_str(line.trim_end());
        out.push('\n');
    }

    // X axis with the day range underneath.
    let mut border = " ".repeat(gutter + 1);
    border.push(corner);
    for _ in 0..width {
        border.push(rule);
    }
    out.push_str(&border);
    out.push('\n');

    let first = format!("day {}", samples[0].day);
    let last = format!("day {}", samples[width - 1].day);
    let mut day_line = " ".repeat(gutter + 2);
    day_line.push_str(&first);
    if samples.len() > 1 {
        let gap = width
            .saturating_sub(first.chars().count() + last.chars().count())
            .max(1);
        day_line.push_str(&" ".repeat(gap));
        day_line.push_str(&last);
    }
    out.push_str(&day_line);
    out.push('\n');

    out.push_str(&" ".repeat(gutter + 2));
    out.push_str(&format!(
        "{} new principal   {} profit\n",
        PRINCIPAL_MARKER, PROFIT_MARKER
    ));
    out
}

/// Keep at most `max_width` points, always including the first and last
fn downsample(series: &[GrowthPoint], max_width: usize) -> Vec<GrowthPoint> {
    if series.len() <= max_width {
        return series.to_vec();
    }
    let last = series.len() - 1;
    (0..max_width)
        .map(|col| series[col * last / (max_width - 1)])
        .collect()
}

fn row_for(value: f64, min: f64, span: f64) -> usize {
    let from_bottom = ((value - min) / span * (CHART_HEIGHT - 1) as f64).round() as usize;
    CHART_HEIGHT - 1 - from_bottom.min(CHART_HEIGHT - 1)
}
