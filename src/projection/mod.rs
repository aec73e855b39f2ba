//! Projection engine for daily profit reinvestment

mod state;
mod engine;
mod ledger;

pub use state::ProjectionState;
pub use engine::{ProjectionEngine, ProjectionConfig, CarryPolicy};
pub use ledger::{DayRecord, GrowthPoint, ProjectionResult};

// ============================================================================
// Profit Split
// ============================================================================
// Every day's profit is divided the same way: a fixed share goes to the
// savings pot and the remainder is added back to the working principal.
// The two shares always sum to 1.0.

/// Share of each day's profit set aside in savings (10%)
pub const SAVINGS_RATE: f64 = 0.10;

/// Share of each day's profit reinvested into the principal (90%)
pub const REINVEST_RATE: f64 = 0.90;
