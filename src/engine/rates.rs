//! Re-expressing a rate under a different compounding frequency
//!
//! r2 = [(1 + r1/n1)^(n1/n2) - 1] * n2
//!
//! where r1 is the nominal rate compounded n1 times per base period and r2 the
//! equivalent nominal rate compounded n2 times. With n2 = 1 this gives the
//! effective annual rate (the APR to EAR conversion).

use serde::{Deserialize, Serialize};

use super::interest::fraction;

/// Convert a nominal rate quoted with frequency `freq1` to the equivalent
/// nominal rate quoted with frequency `freq2`. Percent in, percent out.
pub fn converted_discount_rate(rate_pct: f64, freq1: f64, freq2: f64) -> f64 {
    let r1 = fraction(rate_pct);
    ((1.0 + r1 / freq1).powf(freq1 / freq2) - 1.0) * freq2 * 100.0
}

/// Convert a periodic rate earned every `1/freq1` of the base period to the
/// periodic rate earned every `1/freq2`.
///
/// (1 + r2) = (1 + r1)^(n1/n2). Percent in, percent out.
pub fn effective_discount_rate(rate_pct: f64, freq1: f64, freq2: f64) -> f64 {
    let r1 = fraction(rate_pct);
    ((1.0 + r1).powf(freq1 / freq2) - 1.0) * 100.0
}

/// A rate together with the compounding frequency it is quoted at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompoundingRate {
    /// Rate as a percentage
    pub rate_pct: f64,
    /// Compounding periods per base period (12 for monthly within a year)
    pub frequency: f64,
}

impl CompoundingRate {
    pub fn new(rate_pct: f64, frequency: f64) -> Self {
        Self { rate_pct, frequency }
    }

    /// Equivalent nominal rate at another frequency
    pub fn convert_to(&self, frequency: f64) -> CompoundingRate {
        CompoundingRate {
            rate_pct: converted_discount_rate(self.rate_pct, self.frequency, frequency),
            frequency,
        }
    }

    /// Equivalent periodic rate at another frequency
    pub fn effective_to(&self, frequency: f64) -> CompoundingRate {
        CompoundingRate {
            rate_pct: effective_discount_rate(self.rate_pct, self.frequency, frequency),
            frequency,
        }
    }
}
