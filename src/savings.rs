//! Savings projection
//!
//! Year-by-year totals for a fixed monthly deposit, with and without yearly
//! compound interest. Inputs are clamped to the calculator's slider ranges.

use serde::{Deserialize, Serialize};

pub const MAX_MONTHLY: u32 = 250;
pub const MAX_RATE_PERCENT: u32 = 10;
pub const MAX_YEARS: u32 = 30;

/// Calculator inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavingsPlan {
    /// Deposit per month
    pub monthly: u32,
    /// Yearly interest, whole percent
    pub rate_percent: u32,
    pub years: u32,
}

impl Default for SavingsPlan {
    fn default() -> Self {
        Self {
            monthly: 25,
            rate_percent: 5,
            years: 10,
        }
    }
}

/// One point on a savings curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearTotal {
    pub year: u32,
    pub total: f64,
}

impl SavingsPlan {
    pub fn new(monthly: u32, rate_percent: u32, years: u32) -> Self {
        Self {
            monthly: monthly.min(MAX_MONTHLY),
            rate_percent: rate_percent.min(MAX_RATE_PERCENT),
            years: years.min(MAX_YEARS),
        }
    }

    /// Totals at the start of each year 0..=years
    ///
    /// Each year adds twelve deposits, then applies `rate_percent` interest
    /// to the whole balance.
    pub fn projection(&self, rate_percent: u32) -> Vec<YearTotal> {
        let growth = 1.0 + f64::from(rate_percent) / 100.0;
        let yearly = f64::from(self.monthly) * 12.0;
        let mut total = 0.0;
        (0..=self.years)
            .map(|year| {
                let point = YearTotal { year, total };
                total = (total + yearly) * growth;
                point
            })
            .collect()
    }

    /// Savings without interest
    pub fn linear(&self) -> Vec<YearTotal> {
        self.projection(0)
    }

    /// Savings with the plan's interest compounded yearly
    pub fn compound(&self) -> Vec<YearTotal> {
        self.projection(self.rate_percent)
    }
}
