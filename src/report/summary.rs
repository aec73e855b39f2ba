//! Summary overview of a finished projection

use super::format::format_currency;
use super::ReportStyle;
use crate::projection::ProjectionResult;

/// Render the three headline figures: final principal, total saved,
/// and combined value.
pub fn render_summary(result: &ProjectionResult, style: ReportStyle) -> String {
    let metrics = [
        (
            format!("Final Principal (after {} days)", result.days()),
            format_currency(result.final_principal),
        ),
        (
            "Total Saved in Bank".to_string(),
            format_currency(result.total_saved),
        ),
        (
            "Total Combined Value".to_string(),
            format_currency(result.total_combined),
        ),
    ];

    match style {
        ReportStyle::Fancy => render_cards(&metrics),
        ReportStyle::Plain => render_lines(&metrics),
    }
}

fn render_cards(metrics: &[(String, String)]) -> String {
    let inner = metrics
        .iter()
        .flat_map(|(label, value)| [label.chars().count(), value.chars().count()])
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    for (label, value) in metrics {
        out.push('┌');
        for _ in 0..inner {
            out.push('─');
        }
        out.push_str("┐\n");
        out.push_str(&format!("│{:^inner$}│\n", value, inner = inner));
        out.push_str(&format!("│{:^inner$}│\n", label, inner = inner));
        out.push('└');
        for _ in 0..inner {
            out.push('─');
        }
        out.push_str("┘\n");
    }
    out
}

fn render_lines(metrics: &[(String, String)]) -> String {
    let label_width = metrics
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, value) in metrics {
        out.push_str(&format!(
            "  {:<width$}  {}\n",
            format!("{}:", label),
            value,
            width = label_width + 1
        ));
    }
    out
}
