//! Amortization schedule generation
//!
//! Each entry is computed from the closed-form principal/interest identities
//! for its own period. No running balance is carried from one entry to the
//! next, so rounding in early periods does not leak into later ones and the
//! schedule can be consumed lazily, restarted, or collected with identical
//! results.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use super::components::{interest_in_period, principal_in_period};

/// Principal/interest split of one period's payment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmortizationEntry {
    /// Period number (1-indexed)
    pub period: u32,
    pub principal_component: f64,
    pub interest_component: f64,
}

impl AmortizationEntry {
    /// Cash paid in this period
    pub fn total_payment(&self) -> f64 {
        self.principal_component + self.interest_component
    }

    pub fn is_finite(&self) -> bool {
        self.principal_component.is_finite() && self.interest_component.is_finite()
    }
}

/// Lazy period-by-period amortization schedule
///
/// Created by [`amortization_schedule`]. Cloning gives an independent cursor
/// positioned at the same period.
#[derive(Debug, Clone)]
pub struct AmortizationSchedule {
    principal: f64,
    rate_pct: f64,
    payment: f64,
    total_periods: u32,
    /// Next period to yield (1-indexed, wide enough to step past u32::MAX)
    next_period: u64,
}

/// Build the amortization schedule for a level-payment loan
///
/// Yields `total_periods` entries, periods `1..=total_periods`.
pub fn amortization_schedule(
    principal: f64,
    rate_pct: f64,
    payment: f64,
    total_periods: u32,
) -> AmortizationSchedule {
    AmortizationSchedule {
        principal,
        rate_pct,
        payment,
        total_periods,
        next_period: 1,
    }
}

impl AmortizationSchedule {
    pub fn total_periods(&self) -> u32 {
        self.total_periods
    }

    pub fn payment(&self) -> f64 {
        self.payment
    }

    /// Entry for a single period, independent of the cursor position
    pub fn entry(&self, period: u32) -> AmortizationEntry {
        let n1 = period.saturating_sub(1);
        AmortizationEntry {
            period,
            principal_component: principal_in_period(
                self.principal,
                self.rate_pct,
                self.payment,
                n1,
                period,
                self.total_periods,
            ),
            interest_component: interest_in_period(
                self.principal,
                self.rate_pct,
                self.payment,
                n1,
                period,
                self.total_periods,
            ),
        }
    }

    /// Totals over the full schedule, regardless of how much of this cursor
    /// has already been consumed
    pub fn summary(&self) -> ScheduleSummary {
        let mut restarted = self.clone();
        restarted.next_period = 1;
        ScheduleSummary::from_entries(restarted)
    }
}

impl Iterator for AmortizationSchedule {
    type Item = AmortizationEntry;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_period > u64::from(self.total_periods) {
            return None;
        }
        let entry = self.entry(self.next_period as u32);
        self.next_period += 1;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (u64::from(self.total_periods) + 1).saturating_sub(self.next_period) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for AmortizationSchedule {}

impl FusedIterator for AmortizationSchedule {}

/// Totals for an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub periods: u32,
    pub total_principal: f64,
    pub total_interest: f64,
    pub total_paid: f64,
}

impl ScheduleSummary {
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = AmortizationEntry>,
    {
        let mut summary = ScheduleSummary {
            periods: 0,
            total_principal: 0.0,
            total_interest: 0.0,
            total_paid: 0.0,
        };
        for entry in entries {
            summary.periods += 1;
            summary.total_principal += entry.principal_component;
            summary.total_interest += entry.interest_component;
            summary.total_paid += entry.total_payment();
        }
        summary
    }
}
