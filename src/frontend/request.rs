//! Request and result records exchanged between the front end and the engine
//!
//! The front end fills a [`CalcRequest`] with parsed scalars, [`evaluate`]
//! runs the matching engine function, and the [`CalcOutcome`] (or a
//! [`FinCalcError`]) comes back for display. Non-finite numbers are turned
//! into errors here; the engine never checks them.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::engine::{
    amortization_schedule, compound_interest, converted_discount_rate, discount_rate_pct,
    effective_discount_rate, future_value, interest_in_period, periodic_payment, present_value,
    principal_in_period, pv_of_annuity, simple_interest, AmortizationEntry, ScheduleSummary,
};
use crate::error::{ensure_finite, FinCalcError, FinCalcResult};

use super::menu::MenuChoice;

/// Longest amortization schedule [`evaluate`] will materialize
///
/// Every entry is held in memory for rendering and the summary, so longer
/// schedules are refused with [`FinCalcError::ScheduleTooLong`]. Callers that
/// need more periods can iterate [`amortization_schedule`] directly.
pub const MAX_SCHEDULE_PERIODS: u32 = 100_000;

/// Loan description plus a period range, shared by the principal and
/// interest split calculations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeriodSplit {
    pub principal: f64,
    pub rate_pct: f64,
    pub payment: f64,
    /// Total number of payments on the loan
    pub total_periods: u32,
    pub n1: u32,
    pub n2: u32,
}

impl PeriodSplit {
    /// Require `n1 < n2 <= total_periods`
    pub fn validate(&self) -> FinCalcResult<()> {
        if self.n1 < self.n2 && self.n2 <= self.total_periods {
            Ok(())
        } else {
            Err(FinCalcError::InvalidPeriodRange {
                n1: self.n1,
                n2: self.n2,
                total_periods: self.total_periods,
            })
        }
    }
}

/// A calculation with its inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculation", rename_all = "snake_case")]
pub enum CalcRequest {
    SimpleInterest {
        principal: f64,
        rate_pct: f64,
        duration: f64,
    },
    CompoundInterest {
        principal: f64,
        rate_pct: f64,
        num_periods: f64,
    },
    PresentValue {
        future_value: f64,
        rate_pct: f64,
        num_periods: f64,
    },
    FutureValue {
        present_value: f64,
        rate_pct: f64,
        num_periods: f64,
    },
    DiscountRate {
        future_value: f64,
        present_value: f64,
        num_periods: f64,
    },
    ConvertedDiscountRate {
        rate_pct: f64,
        freq1: f64,
        freq2: f64,
    },
    PrincipalInPeriod(PeriodSplit),
    InterestInPeriod(PeriodSplit),
    PeriodicPayment {
        principal: f64,
        rate_pct: f64,
        num_periods: f64,
    },
    PvOfAnnuity {
        payment: f64,
        rate_pct: f64,
        num_periods: f64,
    },
    AmortizationSchedule {
        principal: f64,
        rate_pct: f64,
        payment: f64,
        num_periods: u32,
    },
}

impl CalcRequest {
    /// Menu entry this request corresponds to
    pub fn choice(&self) -> MenuChoice {
        match self {
            CalcRequest::SimpleInterest { .. } => MenuChoice::SimpleInterest,
            CalcRequest::CompoundInterest { .. } => MenuChoice::CompoundInterest,
            CalcRequest::PresentValue { .. } => MenuChoice::PresentValue,
            CalcRequest::FutureValue { .. } => MenuChoice::FutureValue,
            CalcRequest::DiscountRate { .. } => MenuChoice::DiscountRate,
            CalcRequest::ConvertedDiscountRate { .. } => MenuChoice::ConvertedDiscountRate,
            CalcRequest::PrincipalInPeriod(_) => MenuChoice::PrincipalInPeriod,
            CalcRequest::InterestInPeriod(_) => MenuChoice::InterestInPeriod,
            CalcRequest::PeriodicPayment { .. } => MenuChoice::PeriodicPayment,
            CalcRequest::PvOfAnnuity { .. } => MenuChoice::PvOfAnnuity,
            CalcRequest::AmortizationSchedule { .. } => MenuChoice::AmortizationSchedule,
        }
    }
}

/// Result of a calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalcOutcome {
    /// A single number
    Value { label: &'static str, value: f64 },
    /// Converted (nominal) and effective re-expressions of one rate, in percent
    RatePair { converted_pct: f64, effective_pct: f64 },
    /// Full amortization schedule with totals
    Schedule {
        payment: f64,
        entries: Vec<AmortizationEntry>,
        summary: ScheduleSummary,
    },
}

fn value(label: &'static str, value: f64) -> FinCalcResult<CalcOutcome> {
    Ok(CalcOutcome::Value {
        label,
        value: ensure_finite(label, value)?,
    })
}

/// Run the engine for a request
pub fn evaluate(request: &CalcRequest) -> FinCalcResult<CalcOutcome> {
    match *request {
        CalcRequest::SimpleInterest { principal, rate_pct, duration } => {
            value("Simple Interest", simple_interest(principal, rate_pct, duration))
        }
        CalcRequest::CompoundInterest { principal, rate_pct, num_periods } => value(
            "Compound Interest",
            compound_interest(principal, rate_pct, num_periods),
        ),
        CalcRequest::PresentValue { future_value: fv, rate_pct, num_periods } => {
            value("Present Value", present_value(fv, rate_pct, num_periods))
        }
        CalcRequest::FutureValue { present_value: pv, rate_pct, num_periods } => {
            value("Future Value", future_value(pv, rate_pct, num_periods))
        }
        CalcRequest::DiscountRate { future_value: fv, present_value: pv, num_periods } => {
            value("Discount Rate (%)", discount_rate_pct(fv, pv, num_periods))
        }
        CalcRequest::ConvertedDiscountRate { rate_pct, freq1, freq2 } => {
            let converted = converted_discount_rate(rate_pct, freq1, freq2);
            let effective = effective_discount_rate(rate_pct, freq1, freq2);
            Ok(CalcOutcome::RatePair {
                converted_pct: ensure_finite("Converted Discount Rate", converted)?,
                effective_pct: ensure_finite("Effective Discount Rate", effective)?,
            })
        }
        CalcRequest::PrincipalInPeriod(split) => {
            split.validate()?;
            value(
                "Principal Component",
                principal_in_period(
                    split.principal,
                    split.rate_pct,
                    split.payment,
                    split.n1,
                    split.n2,
                    split.total_periods,
                ),
            )
        }
        CalcRequest::InterestInPeriod(split) => {
            split.validate()?;
            value(
                "Interest Component",
                interest_in_period(
                    split.principal,
                    split.rate_pct,
                    split.payment,
                    split.n1,
                    split.n2,
                    split.total_periods,
                ),
            )
        }
        CalcRequest::PeriodicPayment { principal, rate_pct, num_periods } => value(
            "Periodic Payment (PMT) amount",
            periodic_payment(principal, rate_pct, num_periods),
        ),
        CalcRequest::PvOfAnnuity { payment, rate_pct, num_periods } => {
            value("PV of annuity", pv_of_annuity(payment, rate_pct, num_periods))
        }
        CalcRequest::AmortizationSchedule { principal, rate_pct, payment, num_periods } => {
            if num_periods > MAX_SCHEDULE_PERIODS {
                return Err(FinCalcError::ScheduleTooLong {
                    periods: num_periods,
                    limit: MAX_SCHEDULE_PERIODS,
                });
            }
            let schedule = amortization_schedule(principal, rate_pct, payment, num_periods);
            let mut entries = Vec::new();
            for entry in schedule {
                if !entry.is_finite() {
                    let bad = if entry.principal_component.is_finite() {
                        entry.interest_component
                    } else {
                        entry.principal_component
                    };
                    return Err(FinCalcError::non_finite("Amortization Schedule", bad));
                }
                entries.push(entry);
            }
            let summary = ScheduleSummary::from_entries(entries.iter().copied());
            Ok(CalcOutcome::Schedule { payment, entries, summary })
        }
    }
}

impl CalcOutcome {
    /// Human-readable text, one result per line
    pub fn render(&self, config: &DisplayConfig) -> String {
        match self {
            CalcOutcome::Value { label, value } => {
                format!("{} : {}\n", label, config.fmt(*value))
            }
            CalcOutcome::RatePair { converted_pct, effective_pct } => format!(
                "Converted Discount Rate: {} %\nEffective Discount Rate: {} %\n",
                config.fmt(*converted_pct),
                config.fmt(*effective_pct)
            ),
            CalcOutcome::Schedule { payment, entries, summary } => {
                let mut text = String::new();
                for entry in entries {
                    text.push_str(&format!(
                        "Period {} : Principal : {} Interest : {}\n",
                        entry.period,
                        config.fmt(entry.principal_component),
                        config.fmt(entry.interest_component)
                    ));
                }
                text.push_str(&format!(
                    "Totals over {} periods (PMT {}): Principal : {} Interest : {} Paid : {}\n",
                    summary.periods,
                    config.fmt(*payment),
                    config.fmt(summary.total_principal),
                    config.fmt(summary.total_interest),
                    config.fmt(summary.total_paid)
                ));
                text
            }
        }
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> FinCalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn scalar(outcome: CalcOutcome) -> f64 {
        match outcome {
            CalcOutcome::Value { value, .. } => value,
            other => panic!("expected a value, got {:?}", other),
        }
    }

    fn split(n1: u32, n2: u32) -> PeriodSplit {
        PeriodSplit {
            principal: 10_000.0,
            rate_pct: 5.0,
            payment: periodic_payment(10_000.0, 5.0, 10.0),
            total_periods: 10,
            n1,
            n2,
        }
    }

    #[test]
    fn test_scalar_requests() {
        let si = evaluate(&CalcRequest::SimpleInterest {
            principal: 1000.0,
            rate_pct: 5.0,
            duration: 2.0,
        })
        .unwrap();
        assert_eq!(scalar(si), 100.0);

        let pv = evaluate(&CalcRequest::PresentValue {
            future_value: 1000.0,
            rate_pct: 10.0,
            num_periods: 1.0,
        })
        .unwrap();
        assert_relative_eq!(scalar(pv), 909.090909090909, max_relative = 1e-12);

        let rate = evaluate(&CalcRequest::DiscountRate {
            future_value: 1210.0,
            present_value: 1000.0,
            num_periods: 2.0,
        })
        .unwrap();
        assert_relative_eq!(scalar(rate), 10.0, max_relative = 1e-9);
    }

    #[test]
    fn test_rate_pair() {
        let outcome = evaluate(&CalcRequest::ConvertedDiscountRate {
            rate_pct: 12.0,
            freq1: 12.0,
            freq2: 1.0,
        })
        .unwrap();
        match outcome {
            CalcOutcome::RatePair { converted_pct, effective_pct } => {
                assert!((converted_pct - 12.682503).abs() < 1e-6);
                // 12% per monthly period compounded over a year
                assert!(effective_pct > 289.0 && effective_pct < 290.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_zero_rate_payment_is_rejected() {
        let err = evaluate(&CalcRequest::PeriodicPayment {
            principal: 10_000.0,
            rate_pct: 0.0,
            num_periods: 10.0,
        })
        .unwrap_err();
        assert!(matches!(err, FinCalcError::NonFinite { .. }));
    }

    #[test]
    fn test_period_range_is_validated() {
        for (n1, n2) in [(5, 2), (3, 3), (0, 11)] {
            let err = evaluate(&CalcRequest::PrincipalInPeriod(split(n1, n2))).unwrap_err();
            assert!(matches!(err, FinCalcError::InvalidPeriodRange { .. }), "{:?}", (n1, n2));
        }

        let principal = scalar(evaluate(&CalcRequest::PrincipalInPeriod(split(0, 10))).unwrap());
        assert_relative_eq!(principal, 10_000.0, max_relative = 1e-9);

        let interest = scalar(evaluate(&CalcRequest::InterestInPeriod(split(0, 1))).unwrap());
        assert_relative_eq!(interest, 500.0, max_relative = 1e-9);
    }

    #[test]
    fn test_schedule_request() {
        let payment = periodic_payment(10_000.0, 5.0, 10.0);
        let outcome = evaluate(&CalcRequest::AmortizationSchedule {
            principal: 10_000.0,
            rate_pct: 5.0,
            payment,
            num_periods: 10,
        })
        .unwrap();

        match &outcome {
            CalcOutcome::Schedule { entries, summary, .. } => {
                assert_eq!(entries.len(), 10);
                assert_relative_eq!(summary.total_principal, 10_000.0, max_relative = 1e-9);
            }
            other => panic!("unexpected {:?}", other),
        }

        let text = outcome.render(&DisplayConfig { precision: 2, ..Default::default() });
        assert!(text.starts_with("Period 1 : Principal : 795.05 Interest : 500.00\n"));
        assert!(text.contains("Totals over 10 periods"));
    }

    #[test]
    fn test_zero_rate_schedule_is_rejected() {
        let err = evaluate(&CalcRequest::AmortizationSchedule {
            principal: 10_000.0,
            rate_pct: 0.0,
            payment: 1000.0,
            num_periods: 10,
        })
        .unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_schedule_length_is_capped() {
        let err = evaluate(&CalcRequest::AmortizationSchedule {
            principal: 10_000.0,
            rate_pct: 5.0,
            payment: 1000.0,
            num_periods: u32::MAX,
        })
        .unwrap_err();
        assert!(matches!(
            err,
            FinCalcError::ScheduleTooLong { periods: u32::MAX, limit: MAX_SCHEDULE_PERIODS }
        ));
        assert!(err.is_domain_error());

        let outcome = evaluate(&CalcRequest::AmortizationSchedule {
            principal: 10_000.0,
            rate_pct: 0.5,
            payment: periodic_payment(10_000.0, 0.5, f64::from(MAX_SCHEDULE_PERIODS)),
            num_periods: MAX_SCHEDULE_PERIODS,
        })
        .unwrap();
        match outcome {
            CalcOutcome::Schedule { entries, summary, .. } => {
                assert_eq!(entries.len(), MAX_SCHEDULE_PERIODS as usize);
                assert_eq!(summary.periods, MAX_SCHEDULE_PERIODS);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_request_choice_mapping() {
        let request = CalcRequest::InterestInPeriod(split(0, 1));
        assert_eq!(request.choice(), MenuChoice::InterestInPeriod);
        assert_eq!(request.choice().number(), 8);
    }

    #[test]
    fn test_json_output() {
        let outcome = CalcOutcome::Value { label: "Simple Interest", value: 100.0 };
        let json: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert_eq!(json["kind"], "value");
        assert_eq!(json["label"], "Simple Interest");
        assert_eq!(json["value"], 100.0);

        let request = CalcRequest::PresentValue {
            future_value: 1000.0,
            rate_pct: 10.0,
            num_periods: 1.0,
        };
        let encoded = serde_json::to_string(&request).unwrap();
        assert!(encoded.contains("\"calculation\":\"present_value\""));
    }
}
