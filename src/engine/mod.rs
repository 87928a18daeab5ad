//! Financial calculation engine
//!
//! Pure functions over plain scalars. No I/O, parsing or formatting happens
//! here; domain errors (zero rate annuities, zero present value, fractional
//! powers of a negative base) come back as NaN or infinity for the caller to
//! detect.
//!
//! Composition: the amortization schedule calls the principal/interest split
//! for each period, interest is total paid minus principal, and principal is
//! the difference of two annuity present values.

mod interest;
mod rates;
mod annuity;
mod components;
mod schedule;
mod loan;

pub use interest::{
    simple_interest, compound_interest, present_value, future_value, discount_rate,
    discount_rate_pct,
};
pub use rates::{converted_discount_rate, effective_discount_rate, CompoundingRate};
pub use annuity::{periodic_payment, pv_of_annuity};
pub use components::{principal_in_period, interest_in_period};
pub use schedule::{amortization_schedule, AmortizationEntry, AmortizationSchedule, ScheduleSummary};
pub use loan::Loan;
