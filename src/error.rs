//! Error types for the calculator front end
//!
//! The engine itself never fails: it returns non-finite numbers. These
//! errors are raised where input is collected and where results are checked
//! before display.

use thiserror::Error;

/// A specialized Result type for front-end operations.
pub type FinCalcResult<T> = Result<T, FinCalcError>;

/// Errors raised while collecting input or checking results
#[derive(Error, Debug)]
pub enum FinCalcError {
    /// Menu choice outside the recognised range (including 0).
    #[error("Life is all about making choices - You made a Bad One (choice {choice})")]
    InvalidChoice {
        /// The number entered.
        choice: u32,
    },

    /// Input could not be parsed after the allowed number of attempts.
    #[error("Invalid {field}: '{input}' is not a valid {expected}")]
    InvalidInput {
        /// Prompt label of the field.
        field: String,
        /// Last raw input received.
        input: String,
        /// Kind of number expected.
        expected: &'static str,
    },

    /// Input stream ended while a value was still expected.
    #[error("Input ended while reading {field}")]
    UnexpectedEof {
        /// Prompt label of the field.
        field: String,
    },

    /// Calculation produced NaN or infinity.
    #[error("{calculation} is undefined for these inputs (result: {value})")]
    NonFinite {
        /// Name of the calculation.
        calculation: &'static str,
        /// The non-finite value produced.
        value: f64,
    },

    /// Period range outside `0 <= n1 < n2 <= total_periods`.
    #[error("Invalid period range: N1={n1}, N2={n2} for a {total_periods}-period loan")]
    InvalidPeriodRange {
        /// First period of the range (exclusive).
        n1: u32,
        /// Last period of the range (inclusive).
        n2: u32,
        /// Number of payments on the loan.
        total_periods: u32,
    },

    /// Schedule longer than the front end will hold in memory.
    #[error("Amortization schedule of {periods} periods exceeds the limit of {limit}")]
    ScheduleTooLong {
        /// Requested number of periods.
        periods: u32,
        /// Largest schedule the front end materializes.
        limit: u32,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FinCalcError {
    /// Create a non-finite result error.
    pub fn non_finite(calculation: &'static str, value: f64) -> Self {
        Self::NonFinite { calculation, value }
    }

    /// Whether the error comes from the numbers rather than the input channel
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::NonFinite { .. } | Self::InvalidPeriodRange { .. } | Self::ScheduleTooLong { .. }
        )
    }

    /// Error as a JSON object, for sessions that print JSON results
    pub fn to_json(&self) -> String {
        serde_json::json!({ "kind": "error", "error": self.to_string() }).to_string()
    }
}

/// Check a scalar result, turning NaN/infinity into an error
pub fn ensure_finite(calculation: &'static str, value: f64) -> FinCalcResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FinCalcError::non_finite(calculation, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_as_json() {
        let err = FinCalcError::InvalidPeriodRange { n1: 5, n2: 2, total_periods: 10 };
        let json: serde_json::Value = serde_json::from_str(&err.to_json()).unwrap();
        assert_eq!(json["kind"], "error");
        assert_eq!(json["error"], "Invalid period range: N1=5, N2=2 for a 10-period loan");
    }

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("PV", 909.09).unwrap(), 909.09);
        assert!(ensure_finite("PMT", f64::NAN).is_err());
        assert!(ensure_finite("PMT", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = FinCalcError::InvalidChoice { choice: 0 };
        assert!(err.to_string().contains("Bad One"));

        let err = FinCalcError::InvalidPeriodRange { n1: 5, n2: 2, total_periods: 10 };
        assert_eq!(
            err.to_string(),
            "Invalid period range: N1=5, N2=2 for a 10-period loan"
        );
        assert!(err.is_domain_error());

        let err = FinCalcError::ScheduleTooLong { periods: u32::MAX, limit: 100 };
        assert!(err.is_domain_error());

        let err = FinCalcError::non_finite("Periodic Payment", f64::NAN);
        assert_eq!(err.to_string(), "Periodic Payment is undefined for these inputs (result: NaN)");
    }
}
