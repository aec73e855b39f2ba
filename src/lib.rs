//! Reinvest Tracker - Daily profit reinvestment and savings projection engine
//!
//! This library provides:
//! - Day-by-day compound growth projections with a 10%/90% savings split
//! - Input validation and serde-backed parameter files
//! - Text reports: growth table, summary figures, terminal line chart
//! - CSV export of the daily ledger

pub mod errors;
pub mod params;
pub mod projection;
pub mod report;

// Re-export commonly used types
pub use errors::{InputError, ReportError};
pub use params::ProjectionInput;
pub use projection::{CarryPolicy, DayRecord, ProjectionConfig, ProjectionEngine, ProjectionResult};
pub use report::ReportStyle;
