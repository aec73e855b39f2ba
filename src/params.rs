//! Projection inputs and validation
//!
//! The three scalars every projection starts from, with serde defaults so
//! a partial JSON params file is usable as-is.

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Inputs for a single projection run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Starting capital
    #[serde(default = "default_principal")]
    pub principal: f64,

    /// Number of days to project
    #[serde(default = "default_days")]
    pub days: u32,

    /// Daily profit as a percentage (5.0 means 5%, not a fraction)
    #[serde(default = "default_daily_percent")]
    pub daily_percent: f64,
}

fn default_principal() -> f64 {
    10_000.0
}
fn default_days() -> u32 {
    10
}
fn default_daily_percent() -> f64 {
    5.0
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
            principal: default_principal(),
            days: default_days(),
            daily_percent: default_daily_percent(),
        }
    }
}

impl ProjectionInput {
    /// Build an input triple without validating it
    pub fn new(principal: f64, days: u32, daily_percent: f64) -> Self {
        Self {
            principal,
            days,
            daily_percent,
        }
    }

    /// Reject a non-positive principal or rate and a zero day count.
    /// NaN values fail the same way (they are not positive).
    pub fn validate(&self) -> Result<(), InputError> {
        if self.principal <= 0.0 || self.principal.is_nan() {
            return Err(InputError::NonPositivePrincipal(self.principal));
        }
        if self.days == 0 {
            return Err(InputError::ZeroDays);
        }
        if self.daily_percent <= 0.0 || self.daily_percent.is_nan() {
            return Err(InputError::NonPositiveRate(self.daily_percent));
        }
        Ok(())
    }

    /// Daily profit rate as a fraction (5.0% becomes 0.05)
    pub fn daily_rate(&self) -> f64 {
        self.daily_percent / 100.0
    }
}
