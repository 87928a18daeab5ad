//! Principal and interest split of the payments made between two periods
//!
//! The outstanding balance after period k is the PV of the payments still
//! to come, so the principal repaid between N1 and N2 is the drop in that PV:
//!
//! Principal(N1, N2) = PV_annuity(PMT, r, N - N1) - PV_annuity(PMT, r, N - N2)
//! Interest(N1, N2)  = PMT * (N2 - N1) - Principal(N1, N2)
//!
//! Period indices are not range checked. Differences are taken in f64 so an
//! index past `total_periods` gives a negative remaining term, not a wrapped
//! integer.

use log::debug;

use super::annuity::pv_of_annuity;

/// Principal repaid by the payments between period `n1` and period `n2`
///
/// `_principal` is part of the loan description but does not enter the
/// identity: the remaining balance is derived from the payment stream.
pub fn principal_in_period(
    _principal: f64,
    rate_pct: f64,
    payment: f64,
    n1: u32,
    n2: u32,
    total_periods: u32,
) -> f64 {
    let total = f64::from(total_periods);

    let pv_n1 = pv_of_annuity(payment, rate_pct, total - f64::from(n1));
    debug!("Value of loan at period {} : {}", n1, pv_n1);

    let pv_n2 = pv_of_annuity(payment, rate_pct, total - f64::from(n2));
    debug!("Value of loan at period {} : {}", n2, pv_n2);

    pv_n1 - pv_n2
}

/// Interest paid by the payments between period `n1` and period `n2`
pub fn interest_in_period(
    principal: f64,
    rate_pct: f64,
    payment: f64,
    n1: u32,
    n2: u32,
    total_periods: u32,
) -> f64 {
    let total_payment = payment * (f64::from(n2) - f64::from(n1));
    let principal_component =
        principal_in_period(principal, rate_pct, payment, n1, n2, total_periods);

    debug!(
        "Total payment (period {} - {}) {}, principal component: {}",
        n1, n2, total_payment, principal_component
    );

    total_payment - principal_component
}
