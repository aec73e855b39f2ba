//! Rendering of projection results: growth table, summary, chart, CSV export
//!
//! Every renderer returns a `String` so callers decide where the output
//! goes. The same renderers serve both visual styles through
//! [`ReportStyle`].

mod format;
mod table;
mod summary;
mod chart;
mod export;

pub use format::{format_currency, CURRENCY_SYMBOL};
pub use table::render_table;
pub use summary::render_summary;
pub use chart::{render_chart, CHART_HEIGHT, CHART_MAX_WIDTH};
pub use export::{export_ledger, write_ledger, CSV_HEADERS, DEFAULT_CSV_NAME};

/// Visual style for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStyle {
    /// Box-drawn tables and cards for interactive terminals
    Fancy,
    /// ASCII-only output for logs and piping
    Plain,
}

impl Default for ReportStyle {
    fn default() -> Self {
        ReportStyle::Fancy
    }
}
