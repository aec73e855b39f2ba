//! Daily growth table

use super::format::format_currency;
use super::ReportStyle;
use crate::projection::DayRecord;

const HEADERS: [&str; 6] = [
    "Day",
    "Starting Principal",
    "Profit",
    "Saved (10%)",
    "Reinvested (90%)",
    "New Principal",
];

/// Column widths sized for ten-digit amounts with separators
const WIDTHS: [usize; 6] = [5, 18, 14, 12, 16, 18];

/// Render the day-by-day ledger as a text table
pub fn render_table(records: &[DayRecord], style: ReportStyle) -> String {
    let rows: Vec<[String; 6]> = records.iter().map(row_cells).collect();

    match style {
        ReportStyle::Fancy => render_fancy(&rows),
        ReportStyle::Plain => render_plain(&rows),
    }
}

fn row_cells(record: &DayRecord) -> [String; 6] {
    [
        record.day.to_string(),
        format_currency(record.starting_principal),
        format_currency(record.profit),
        format_currency(record.saved),
        format_currency(record.reinvested),
        format_currency(record.new_principal),
    ]
}

fn render_fancy(rows: &[[String; 6]]) -> String {
    let mut out = String::new();

    out.push_str(&border('┌', '┬', '┐'));
    out.push('\n');

    out.push('│');
    for (header, width) in HEADERS.iter().zip(WIDTHS) {
        out.push_str(&format!(" {:^width$} │", header, width = width));
    }
    out.push('\n');

    out.push_str(&border('├', '┼', '┤'));
    out.push('\n');

    for cells in rows {
        out.push('│');
        for (cell, width) in cells.iter().zip(WIDTHS) {
            out.push_str(&format!(" {:>width$} │", cell, width = width));
        }
        out.push('\n');
    }

    out.push_str(&border('└', '┴', '┘'));
    out.push('\n');
    out
}

fn border(left: char, junction: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for (i, width) in WIDTHS.iter().enumerate() {
        for _ in 0..width + 2 {
            line.push('─');
        }
        line.push(if i + 1 == WIDTHS.len() { right } else { junction });
    }
    line
}

fn render_plain(rows: &[[String; 6]]) -> String {
    let mut out = String::new();

    for (i, (header, width)) in HEADERS.iter().zip(WIDTHS).enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:>width$}", header, width = width));
    }
    out.push('\n');

    let total_width: usize = WIDTHS.iter().sum::<usize>() + 2 * (WIDTHS.len() - 1);
    for _ in 0..total_width {
        out.push('-');
    }
    out.push('\n');

    for cells in rows {
        for (i, (cell, width)) in cells.iter().zip(WIDTHS).enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{:>width$}", cell, width = width));
        }
        out.push('\n');
    }
    out
}
