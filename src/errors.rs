//! Error types for input validation and report output

use thiserror::Error;

/// Invalid projection input.
///
/// The engine fails fast with one of these before any computation; the
/// CLI surfaces the same message as a validation error without invoking
/// the engine at all.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("principal must be positive, got {0}")]
    NonPositivePrincipal(f64),

    #[error("projection needs at least one day")]
    ZeroDays,

    #[error("daily profit percent must be positive, got {0}")]
    NonPositiveRate(f64),
}

/// Failure while writing the ledger export.
///
/// The engine itself performs no I/O; only the export facility can fail
/// this way.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to encode ledger row: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}
