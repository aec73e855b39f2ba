//! Daily ledger rows and projection aggregates

use serde::Serialize;

/// One day's ledger entry.
///
/// Values are carried at the precision the engine's carry policy dictates;
/// rounding for display is the report layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayRecord {
    /// Day number, 1-based
    pub day: u32,

    /// Principal at the start of the day
    pub starting_principal: f64,

    /// Profit earned this day (starting principal times the daily rate)
    pub profit: f64,

    /// Portion of the profit set aside as savings (10%)
    pub saved: f64,

    /// Portion of the profit folded back into the principal (90%)
    pub reinvested: f64,

    /// Principal carried into the next day
    pub new_principal: f64,
}

/// Full output of one projection run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    /// One record per projected day, in day order
    pub records: Vec<DayRecord>,

    /// New principal of the last day
    pub final_principal: f64,

    /// Savings accumulated across all days
    pub total_saved: f64,

    /// Final principal plus total savings
    pub total_combined: f64,
}

/// Chart-facing view of one day: the two plotted series plus the x value
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GrowthPoint {
    pub day: u32,
    pub new_principal: f64,
    pub profit: f64,
}

impl ProjectionResult {
    /// Number of projected days
    pub fn days(&self) -> u32 {
        self.records.len() as u32
    }

    /// Series consumed by the chart renderer, in day order
    pub fn growth_series(&self) -> Vec<GrowthPoint> {
        self.records
            .iter()
            .map(|r| GrowthPoint {
                day: r.day,
                new_principal: r.new_principal,
                profit: r.profit,
            })
            .collect()
    }
}
