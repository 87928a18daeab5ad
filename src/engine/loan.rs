//! Level-payment loan description

use serde::{Deserialize, Serialize};

use super::annuity::periodic_payment;
use super::components::{interest_in_period, principal_in_period};
use super::schedule::{amortization_schedule, AmortizationSchedule};

/// A fully amortizing loan with a constant periodic payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    /// Amount borrowed
    pub principal: f64,
    /// Periodic rate as a percentage
    pub rate_pct: f64,
    /// Number of payments
    pub num_periods: u32,
}

impl Loan {
    pub fn new(principal: f64, rate_pct: f64, num_periods: u32) -> Self {
        Self {
            principal,
            rate_pct,
            num_periods,
        }
    }

    /// Payment that exactly repays the loan over its term
    pub fn payment(&self) -> f64 {
        periodic_payment(self.principal, self.rate_pct, f64::from(self.num_periods))
    }

    /// Principal repaid between periods `n1` and `n2`
    pub fn principal_between(&self, n1: u32, n2: u32) -> f64 {
        principal_in_period(
            self.principal,
            self.rate_pct,
            self.payment(),
            n1,
            n2,
            self.num_periods,
        )
    }

    /// Interest paid between periods `n1` and `n2`
    pub fn interest_between(&self, n1: u32, n2: u32) -> f64 {
        interest_in_period(
            self.principal,
            self.rate_pct,
            self.payment(),
            n1,
            n2,
            self.num_periods,
        )
    }

    pub fn schedule(&self) -> AmortizationSchedule {
        amortization_schedule(self.principal, self.rate_pct, self.payment(), self.num_periods)
    }
}
