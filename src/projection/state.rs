//! Running state of a single projection

use super::engine::CarryPolicy;
use super::ledger::DayRecord;
use super::{REINVEST_RATE, SAVINGS_RATE};

/// Mutable state carried across the day loop: the compounding principal
/// and the savings accumulator.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    day: u32,
    principal: f64,
    total_saved: f64,
}

impl ProjectionState {
    /// Start a projection at day zero with the input principal
    pub fn new(principal: f64) -> Self {
        Self {
            day: 0,
            principal,
            total_saved: 0.0,
        }
    }

    /// Principal the next day will start from
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Savings accumulated so far
    pub fn total_saved(&self) -> f64 {
        self.total_saved
    }

    /// Advance one day: split the day's profit into savings and
    /// reinvestment, fold the reinvested share back into the principal,
    /// and return the finished ledger row.
    pub fn advance(&mut self, daily_rate: f64, carry: CarryPolicy) -> DayRecord {
        self.day += 1;
        let starting_principal = self.principal;

        let (profit, saved, reinvested) = match carry {
            CarryPolicy::FullPrecision => {
                let profit = starting_principal * daily_rate;
                (profit, profit * SAVINGS_RATE, profit * REINVEST_RATE)
            }
            CarryPolicy::CentLedger => {
                // Settle the row to whole cents before it is carried.
                // Reinvested is derived from the rounded profit and savings
                // so the three columns always re-add.
                let profit = round_cents(starting_principal * daily_rate);
                let saved = round_cents(profit * SAVINGS_RATE);
                (profit, saved, profit - saved)
            }
        };

        let record = DayRecord {
            day: self.day,
            starting_principal,
            profit,
            saved,
            reinvested,
            new_principal: starting_principal + reinvested,
        };

        self.principal = record.new_principal;
        self.total_saved += record.saved;
        record
    }
}

/// Round to two decimal places (whole cents)
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
