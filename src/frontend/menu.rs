//! Numbered calculation menu

use std::fmt;

use crate::error::{FinCalcError, FinCalcResult};

const BANNER: &str = "######################################################";

/// A calculation offered on the menu, numbered as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuChoice {
    SimpleInterest,
    CompoundInterest,
    PresentValue,
    FutureValue,
    DiscountRate,
    ConvertedDiscountRate,
    PrincipalInPeriod,
    InterestInPeriod,
    PeriodicPayment,
    PvOfAnnuity,
    AmortizationSchedule,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 11] = [
        MenuChoice::SimpleInterest,
        MenuChoice::CompoundInterest,
        MenuChoice::PresentValue,
        MenuChoice::FutureValue,
        MenuChoice::DiscountRate,
        MenuChoice::ConvertedDiscountRate,
        MenuChoice::PrincipalInPeriod,
        MenuChoice::InterestInPeriod,
        MenuChoice::PeriodicPayment,
        MenuChoice::PvOfAnnuity,
        MenuChoice::AmortizationSchedule,
    ];

    /// Look up a choice by its menu number (1-indexed)
    pub fn from_number(number: u32) -> Option<Self> {
        let idx = number.checked_sub(1)? as usize;
        Self::ALL.get(idx).copied()
    }

    /// Same as [`MenuChoice::from_number`] but with the error the menu shows
    pub fn parse(number: u32) -> FinCalcResult<Self> {
        Self::from_number(number).ok_or(FinCalcError::InvalidChoice { choice: number })
    }

    /// Menu number of this choice
    pub fn number(self) -> u32 {
        match self {
            MenuChoice::SimpleInterest => 1,
            MenuChoice::CompoundInterest => 2,
            MenuChoice::PresentValue => 3,
            MenuChoice::FutureValue => 4,
            MenuChoice::DiscountRate => 5,
            MenuChoice::ConvertedDiscountRate => 6,
            MenuChoice::PrincipalInPeriod => 7,
            MenuChoice::InterestInPeriod => 8,
            MenuChoice::PeriodicPayment => 9,
            MenuChoice::PvOfAnnuity => 10,
            MenuChoice::AmortizationSchedule => 11,
        }
    }

    /// Menu line text
    pub fn title(self) -> &'static str {
        match self {
            MenuChoice::SimpleInterest => "Calculate Simple Interest",
            MenuChoice::CompoundInterest => "Calculate Compound Interest",
            MenuChoice::PresentValue => "Calculate Present Value (PV)",
            MenuChoice::FutureValue => "Calculate Future Value (FV)",
            MenuChoice::DiscountRate => "Calculate Discount Rate",
            MenuChoice::ConvertedDiscountRate => {
                "Calculate (Period/frequency) Converted Interest Rate"
            }
            MenuChoice::PrincipalInPeriod => "Calculate Principal between period N1 & N2",
            MenuChoice::InterestInPeriod => "Calculate Interest between period N1 & N2",
            MenuChoice::PeriodicPayment => "Calculate Periodic Payment (Annuity)",
            MenuChoice::PvOfAnnuity => "Calculate PV of Annuity",
            MenuChoice::AmortizationSchedule => "Calculate Amortization Schedule",
        }
    }

    /// Formula banner shown before prompting, where one exists
    pub fn help(self) -> Option<&'static [&'static str]> {
        match self {
            MenuChoice::SimpleInterest => Some(SIMPLE_INTEREST_HELP),
            MenuChoice::CompoundInterest => Some(COMPOUND_INTEREST_HELP),
            MenuChoice::PeriodicPayment => Some(PERIODIC_PAYMENT_HELP),
            _ => None,
        }
    }
}

const SIMPLE_INTEREST_HELP: &[&str] = &[
    "Calculates SI",
    "SI = (principal * Duration * Rate) / 100",
];

const COMPOUND_INTEREST_HELP: &[&str] = &[
    "Calculates CI",
    "CI = P * (1 + Rate/100)^N - P",
];

const PERIODIC_PAYMENT_HELP: &[&str] = &[
    "Calculates level payment of an annuity",
    "PMT = PV * r / (1 - (1 + r)^-N)",
];

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.number(), self.title())
    }
}

/// Full menu text, one line per choice
pub fn menu_text() -> String {
    let mut text = String::new();
    text.push_str(&boxed_lines(&["FINANCE CHEATSHEET"]));
    for choice in MenuChoice::ALL {
        text.push_str(&choice.to_string());
        text.push('\n');
    }
    text
}

/// Lines framed by the banner rule, padded to its width
pub fn boxed_lines(lines: &[&str]) -> String {
    let inner = BANNER.len() - 6;
    let mut text = format!("{}\n", BANNER);
    for line in lines {
        text.push_str(&format!("#    {:<width$}#\n", line, width = inner));
    }
    text.push_str(BANNER);
    text.push('\n');
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_round_trip() {
        for (idx, choice) in MenuChoice::ALL.iter().enumerate() {
            assert_eq!(choice.number() as usize, idx + 1);
            assert_eq!(MenuChoice::from_number(choice.number()), Some(*choice));
        }
    }

    #[test]
    fn test_out_of_range_choices() {
        assert_eq!(MenuChoice::from_number(0), None);
        assert_eq!(MenuChoice::from_number(12), None);
        assert_eq!(MenuChoice::from_number(u32::MAX), None);
        assert!(matches!(
            MenuChoice::parse(0),
            Err(FinCalcError::InvalidChoice { choice: 0 })
        ));
    }

    #[test]
    fn test_menu_text_lists_every_choice() {
        let text = menu_text();
        assert!(text.contains("FINANCE CHEATSHEET"));
        assert!(text.contains("[1] Calculate Simple Interest"));
        assert!(text.contains("[11] Calculate Amortization Schedule"));
        assert_eq!(text.lines().filter(|l| l.starts_with('[')).count(), 11);
    }

    #[test]
    fn test_boxed_lines_are_aligned() {
        let text = boxed_lines(&["Calculates SI", "SI = (principal * Duration * Rate) / 100"]);
        for line in text.lines() {
            assert_eq!(line.len(), BANNER.len(), "misaligned: {:?}", line);
        }
    }
}
