//! Level annuities: payment that amortizes a loan, and PV of a payment stream
//!
//! Payments are made at the end of each period (annuity-immediate).
//!
//! PV(annuity) = (C / r) * (1 - (1 + r)^-N)
//! C           = PV * r / (1 - (1 + r)^-N)
//!
//! A zero rate makes both formulas 0/0 and the result is NaN. This is left
//! visible to callers rather than replaced with straight-line amortization.

use super::interest::fraction;

/// Constant payment that repays `principal` over `num_periods` periods
pub fn periodic_payment(principal: f64, rate_pct: f64, num_periods: f64) -> f64 {
    let rate = fraction(rate_pct);
    principal * rate / (1.0 - (1.0 + rate).powf(-num_periods))
}

/// Present value of `num_periods` payments of `payment`
pub fn pv_of_annuity(payment: f64, rate_pct: f64, num_periods: f64) -> f64 {
    let rate = fraction(rate_pct);
    (payment / rate) * (1.0 - (1.0 + rate).powf(-num_periods))
}
