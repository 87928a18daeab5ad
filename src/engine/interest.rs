//! Simple interest, compounding and present/future value of a single sum
//!
//! Rates are percentages throughout (5.0 means 5%). Nothing here guards the
//! real domain: a non-positive growth base with a fractional period count,
//! or a zero present value in `discount_rate`, comes back as NaN or infinity.

use log::debug;

/// Convert a percentage rate to a fraction
#[inline]
pub(crate) fn fraction(rate_pct: f64) -> f64 {
    rate_pct / 100.0
}

/// Simple interest: SI = P * R * T / 100
pub fn simple_interest(principal: f64, rate_pct: f64, duration: f64) -> f64 {
    principal * rate_pct * duration / 100.0
}

/// Present value of a sum received after `num_periods` periods
///
/// PV = FV / (1 + i)^n
pub fn present_value(future_value: f64, rate_pct: f64, num_periods: f64) -> f64 {
    future_value / (1.0 + fraction(rate_pct)).powf(num_periods)
}

/// Future value of a sum invested today for `num_periods` periods
///
/// FV = PV * (1 + i)^n
pub fn future_value(present_value: f64, rate_pct: f64, num_periods: f64) -> f64 {
    let rate = fraction(rate_pct);
    let fv = present_value * (1.0 + rate).powf(num_periods);
    debug!(
        "FV (PV: {} Rate: {} Period: {}) : {}",
        present_value, rate, num_periods, fv
    );
    fv
}

/// Interest earned by compounding `principal` for `num_periods` periods
pub fn compound_interest(principal: f64, rate_pct: f64, num_periods: f64) -> f64 {
    future_value(principal, rate_pct, num_periods) - principal
}

/// Periodic rate that grows `present_value` into `future_value`
///
/// i = (FV / PV)^(1/n) - 1, returned as a fraction (0.05 for 5%).
pub fn discount_rate(future_value: f64, present_value: f64, num_periods: f64) -> f64 {
    (future_value / present_value).powf(1.0 / num_periods) - 1.0
}

/// Same as [`discount_rate`] but expressed as a percentage
pub fn discount_rate_pct(future_value: f64, present_value: f64, num_periods: f64) -> f64 {
    discount_rate(future_value, present_value, num_periods) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_simple_interest() {
        assert_eq!(simple_interest(1000.0, 5.0, 2.0), 100.0);
        assert_eq!(simple_interest(1000.0, 5.0, 0.0), 0.0);
        // Negative duration is not validated
        assert_eq!(simple_interest(1000.0, 5.0, -2.0), -100.0);
    }

    #[test]
    fn test_present_value_one_period() {
        let pv = present_value(1000.0, 10.0, 1.0);
        assert_relative_eq!(pv, 1000.0 / 1.1, max_relative = 1e-12);
        assert!((pv - 909.0909).abs() < 1e-4);
    }

    #[test]
    fn test_pv_fv_round_trip() {
        for &rate in &[-50.0, -5.0, 0.0, 2.5, 10.0, 150.0] {
            for &n in &[0.0, 0.5, 1.0, 7.0, 30.0] {
                let fv = future_value(1234.56, rate, n);
                let back = present_value(fv, rate, n);
                assert_relative_eq!(back, 1234.56, max_relative = 1e-9);
            }
        }
    }

    #[test]
    fn test_compound_interest() {
        // 1000 at 10% for 2 periods: 1210 - 1000
        assert_relative_eq!(compound_interest(1000.0, 10.0, 2.0), 210.0, max_relative = 1e-12);
        assert_eq!(compound_interest(1000.0, 0.0, 5.0), 0.0);
    }

    #[test]
    fn test_discount_rate_inverts_future_value() {
        let fv = future_value(500.0, 6.0, 4.0);
        let rate = discount_rate(fv, 500.0, 4.0);
        assert_relative_eq!(rate, 0.06, max_relative = 1e-10);
        assert_relative_eq!(discount_rate_pct(fv, 500.0, 4.0), 6.0, max_relative = 1e-10);
    }

    #[test]
    fn test_domain_errors_are_not_finite() {
        // Negative growth base with fractional periods
        assert!(present_value(100.0, -150.0, 0.5).is_nan());
        // Zero present value
        assert!(!discount_rate(100.0, 0.0, 2.0).is_finite());
        // Negative ratio with fractional root
        assert!(discount_rate(-100.0, 50.0, 2.0).is_nan());
    }
}
