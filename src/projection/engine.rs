//! Day-by-day projection of the reinvestment plan

use super::ledger::{DayRecord, ProjectionResult};
use super::state::ProjectionState;
use crate::errors::InputError;
use crate::params::ProjectionInput;

/// How intermediate amounts are carried from one day to the next.
///
/// `FullPrecision` keeps every intermediate amount at full f64 precision
/// and leaves rounding to the presentation layer. `CentLedger` settles
/// each day's profit, savings and reinvestment to whole cents before the
/// principal is carried forward, the way a bank statement would.
///
/// The two diverge once carried fractions of a cent compound: starting
/// from 10,000 at 5% per day, day 4 already differs in the displayed
/// principal (11,925.19 vs 11,925.18).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryPolicy {
    /// Carry unrounded amounts; round only for display
    FullPrecision,
    /// Settle every ledger row to whole cents before carrying it
    CentLedger,
}

impl Default for CarryPolicy {
    fn default() -> Self {
        CarryPolicy::FullPrecision
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    pub carry: CarryPolicy,
}

/// Engine that turns a validated input into a day-by-day ledger
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create an engine with the default full-precision carry
    pub fn new() -> Self {
        Self {
            config: ProjectionConfig::default(),
        }
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run the projection over `input.days` days.
    ///
    /// Rejects non-positive principal or rate and zero days before any
    /// arithmetic happens. Days are strictly sequential: each row starts
    /// from the previous row's new principal, so the loop cannot be
    /// reordered or parallelized.
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, InputError> {
        input.validate()?;

        let daily_rate = input.daily_rate();
        let mut state = ProjectionState::new(input.principal);
        let mut records: Vec<DayRecord> = Vec::with_capacity(input.days as usize);

        for _ in 0..input.days {
            records.push(state.advance(daily_rate, self.config.carry));
        }

        let final_principal = state.principal();
        let total_saved = state.total_saved();

        log::debug!(
            "projected {} days at {}%: principal {:.2} -> {:.2}, saved {:.2}",
            input.days,
            input.daily_percent,
            input.principal,
            final_principal,
            total_saved
        );

        Ok(ProjectionResult {
            records,
            final_principal,
            total_saved,
            total_combined: final_principal + total_saved,
        })
    }
}

impl Default for ProjectionEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{REINVEST_RATE, SAVINGS_RATE};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn run(principal: f64, days: u32, daily_percent: f64) -> ProjectionResult {
        let input = ProjectionInput::new(principal, days, daily_percent);
        ProjectionEngine::new().project(&input).unwrap()
    }

    #[test]
    fn test_one_record_per_day() {
        let result = run(10_000.0, 10, 5.0);

        assert_eq!(result.records.len(), 10);
        assert_eq!(result.days(), 10);
        for (i, record) in result.records.iter().enumerate() {
            assert_eq!(record.day, i as u32 + 1);
        }
    }

    #[test]
    fn test_single_day_projection() {
        let result = run(10_000.0, 1, 5.0);

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.final_principal, result.records[0].new_principal);
        assert_eq!(result.total_saved, result.records[0].saved);
    }

    #[test]
    fn test_reference_scenario_three_days() {
        // 10,000 at 5%: hand-computed ledger.
        let result = run(10_000.0, 3, 5.0);

        let expected = [
            (10_000.0, 500.0, 50.0, 450.0, 10_450.0),
            (10_450.0, 522.5, 52.25, 470.25, 10_920.25),
            (10_920.25, 546.0125, 54.60125, 491.41125, 11_411.66125),
        ];
        for (record, &(start, profit, saved, reinvested, new)) in
            result.records.iter().zip(expected.iter())
        {
            assert_abs_diff_eq!(record.starting_principal, start, epsilon = 1e-9);
            assert_abs_diff_eq!(record.profit, profit, epsilon = 1e-9);
            assert_abs_diff_eq!(record.saved, saved, epsilon = 1e-9);
            assert_abs_diff_eq!(record.reinvested, reinvested, epsilon = 1e-9);
            assert_abs_diff_eq!(record.new_principal, new, epsilon = 1e-9);
        }

        assert_abs_diff_eq!(result.final_principal, 11_411.66125, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_saved, 156.85125, epsilon = 1e-9);
        assert_abs_diff_eq!(result.total_combined, 11_568.5125, epsilon = 1e-9);
    }

    #[test]
    fn test_rows_chain_without_gaps() {
        let result = run(2_500.0, 30, 2.5);

        assert_eq!(result.records[0].starting_principal, 2_500.0);
        for pair in result.records.windows(2) {
            // Bit-identical carry, not just approximately equal.
            assert_eq!(pair[1].starting_principal, pair[0].new_principal);
        }
        assert_eq!(
            result.final_principal,
            result.records.last().unwrap().new_principal
        );
    }

    #[test]
    fn test_profit_split_invariants() {
        for carry in [CarryPolicy::FullPrecision, CarryPolicy::CentLedger] {
            let engine = ProjectionEngine::with_config(ProjectionConfig { carry });
            let input = ProjectionInput::new(7_777.77, 40, 3.3);
            let result = engine.project(&input).unwrap();

            for record in &result.records {
                assert_abs_diff_eq!(
                    record.saved + record.reinvested,
                    record.profit,
                    epsilon = 1e-9
                );
                assert_abs_diff_eq!(
                    record.new_principal,
                    record.starting_principal + record.reinvested,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn test_totals_match_ledger() {
        let result = run(10_000.0, 25, 5.0);

        // Summing in row order reproduces the accumulator exactly.
        let saved_sum = result.records.iter().fold(0.0, |acc, r| acc + r.saved);
        assert_eq!(result.total_saved, saved_sum);
        assert_eq!(
            result.total_combined,
            result.final_principal + result.total_saved
        );
    }

    #[test]
    fn test_projection_is_deterministic() {
        let input = ProjectionInput::new(12_345.67, 60, 4.2);
        let engine = ProjectionEngine::new();

        let first = engine.project(&input).unwrap();
        let second = engine.project(&input).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_principal_grows_every_day() {
        let result = run(500.0, 90, 1.0);

        for record in &result.records {
            assert!(record.profit > 0.0);
            assert!(record.new_principal > record.starting_principal);
        }
        assert!(result.final_principal > 500.0);
    }

    #[test]
    fn test_matches_closed_form_growth() {
        // With full-precision carry the principal follows
        //   P_n = P * (1 + 0.9 * r)^n
        // and savings follow the matching geometric sum.
        let principal = 10_000.0;
        let rate = 0.05;
        let days = 200u32;
        let growth = 1.0 + REINVEST_RATE * rate;

        let result = run(principal, days, 5.0);

        let expected_final = principal * growth.powi(days as i32);
        let expected_saved =
            principal * SAVINGS_RATE * rate * (growth.powi(days as i32) - 1.0) / (growth - 1.0);

        assert_relative_eq!(result.final_principal, expected_final, max_relative = 1e-9);
        assert_relative_eq!(result.total_saved, expected_saved, max_relative = 1e-9);
    }

    #[test]
    fn test_default_ten_day_run() {
        let result = ProjectionEngine::new()
            .project(&ProjectionInput::default())
            .unwrap();

        assert_eq!(result.records.len(), 10);
        assert_abs_diff_eq!(result.final_principal, 15_529.694217, epsilon = 1e-4);
        assert_abs_diff_eq!(result.total_saved, 614.410469, epsilon = 1e-4);
        assert_abs_diff_eq!(result.total_combined, 16_144.104686, epsilon = 1e-4);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let engine = ProjectionEngine::new();

        assert_eq!(
            engine.project(&ProjectionInput::new(0.0, 10, 5.0)),
            Err(InputError::NonPositivePrincipal(0.0))
        );
        assert_eq!(
            engine.project(&ProjectionInput::new(-100.0, 10, 5.0)),
            Err(InputError::NonPositivePrincipal(-100.0))
        );
        assert_eq!(
            engine.project(&ProjectionInput::new(10_000.0, 0, 5.0)),
            Err(InputError::ZeroDays)
        );
        assert_eq!(
            engine.project(&ProjectionInput::new(10_000.0, 10, -5.0)),
            Err(InputError::NonPositiveRate(-5.0))
        );
    }

    #[test]
    fn test_standalone_validation_matches_engine_rejection() {
        // Callers that validate before projecting surface the same error
        // the engine itself would return.
        for input in [
            ProjectionInput::new(-1.0, 10, 5.0),
            ProjectionInput::new(10_000.0, 0, 5.0),
            ProjectionInput::new(10_000.0, 10, 0.0),
        ] {
            assert_eq!(
                input.validate().unwrap_err(),
                ProjectionEngine::new().project(&input).unwrap_err()
            );
        }
    }

    #[test]
    fn test_carry_policies_diverge_on_day_four() {
        let input = ProjectionInput::new(10_000.0, 4, 5.0);

        let full = ProjectionEngine::new().project(&input).unwrap();
        let cents = ProjectionEngine::with_config(ProjectionConfig {
            carry: CarryPolicy::CentLedger,
        })
        .project(&input)
        .unwrap();

        // Full precision carries 11,411.66125 into day 4; the cent ledger
        // carries 11,411.66, and the final principals land a cent apart.
        assert_abs_diff_eq!(full.final_principal, 11_925.18600625, epsilon = 1e-9);
        assert_abs_diff_eq!(cents.final_principal, 11_925.18, epsilon = 1e-9);

        // Day 3 of the full-precision run holds sub-cent amounts.
        let day3 = &full.records[2];
        assert!((day3.profit * 100.0 - (day3.profit * 100.0).round()).abs() > 1e-6);

        // Every cent-ledger row is already settled to whole cents.
        for record in &cents.records {
            for value in [record.profit, record.saved, record.reinvested] {
                assert_abs_diff_eq!(
                    value * 100.0,
                    (value * 100.0).round(),
                    epsilon = 1e-6
                );
            }
        }
    }
}
