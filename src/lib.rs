//! fincalc - Financial calculation toolkit
//!
//! This library provides:
//! - Simple and compound interest
//! - Present/future value of a single sum and discount rate derivation
//! - Rate conversion between compounding frequencies
//! - Level annuity payments and present value of annuities
//! - Principal/interest split between any two periods of a loan
//! - Lazy amortization schedules
//! - An interactive menu-driven front end over the above

pub mod config;
pub mod engine;
pub mod error;
pub mod frontend;

// Re-export commonly used types
pub use config::DisplayConfig;
pub use engine::{AmortizationEntry, AmortizationSchedule, CompoundingRate, Loan, ScheduleSummary};
pub use error::{FinCalcError, FinCalcResult};
pub use frontend::{evaluate, CalcOutcome, CalcRequest, MenuChoice, Session};
