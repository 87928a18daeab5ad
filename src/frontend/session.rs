//! One interactive calculator session: menu, choice, inputs, result

use std::io::{BufRead, Write};

use log::{info, warn};

use crate::config::DisplayConfig;
use crate::error::{FinCalcError, FinCalcResult};

use super::menu::{boxed_lines, menu_text, MenuChoice};
use super::prompt::Prompter;
use super::request::{evaluate, CalcOutcome, CalcRequest, PeriodSplit};

/// Interactive session over a reader/writer pair
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    config: DisplayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: DisplayConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output, config.max_attempts),
            config,
        }
    }

    /// Run one calculation
    ///
    /// Shows the menu and reads a choice unless `preset_choice` is given.
    /// An unrecognised choice or a result the engine cannot produce is
    /// reported to the user and gives `Ok(None)`; input and I/O failures are
    /// returned as errors.
    pub fn run(&mut self, preset_choice: Option<u32>) -> FinCalcResult<Option<CalcOutcome>> {
        let number = match preset_choice {
            Some(number) => number,
            None => {
                self.prompter.say(&menu_text())?;
                self.prompter.read_u32("Choice")?
            }
        };

        let choice = match MenuChoice::parse(number) {
            Ok(choice) => choice,
            Err(err) => {
                warn!("{}", err);
                self.report(&err)?;
                return Ok(None);
            }
        };
        info!("Selected {}", choice);

        if let Some(help) = choice.help() {
            self.prompter.say(&boxed_lines(help))?;
        }

        let request = self.collect(choice)?;
        let details = self.describe(&request);
        self.prompter.say(&details)?;

        match evaluate(&request) {
            Ok(outcome) => {
                let text = if self.config.json {
                    format!("{}\n", outcome.to_json()?)
                } else {
                    outcome.render(&self.config)
                };
                self.prompter.say(&text)?;
                Ok(Some(outcome))
            }
            Err(err) if err.is_domain_error() => {
                warn!("{}", err);
                self.report(&err)?;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Prompt for the inputs of a calculation
    pub fn collect(&mut self, choice: MenuChoice) -> FinCalcResult<CalcRequest> {
        let p = &mut self.prompter;
        let request = match choice {
            MenuChoice::SimpleInterest => CalcRequest::SimpleInterest {
                principal: p.read_f64("Principal")?,
                rate_pct: p.read_f64("Rate")?,
                duration: p.read_f64("Duration")?,
            },
            MenuChoice::CompoundInterest => CalcRequest::CompoundInterest {
                principal: p.read_f64("Principal")?,
                rate_pct: p.read_f64("Rate")?,
                num_periods: p.read_f64("Period")?,
            },
            MenuChoice::PresentValue => CalcRequest::PresentValue {
                future_value: p.read_f64("Future Value (FV)")?,
                rate_pct: p.read_f64("Discount Rate")?,
                num_periods: p.read_f64("Period")?,
            },
            MenuChoice::FutureValue => CalcRequest::FutureValue {
                present_value: p.read_f64("Present Value (PV)")?,
                rate_pct: p.read_f64("Rate")?,
                num_periods: p.read_f64("Period")?,
            },
            MenuChoice::DiscountRate => CalcRequest::DiscountRate {
                future_value: p.read_f64("Future Value (FV)")?,
                present_value: p.read_f64("Present Value (PV)")?,
                num_periods: p.read_f64("Period")?,
            },
            MenuChoice::ConvertedDiscountRate => CalcRequest::ConvertedDiscountRate {
                rate_pct: p.read_f64("Discount Rate 1")?,
                freq1: p.read_f64("Compounding Frequency 1")?,
                freq2: p.read_f64("Compounding Frequency 2")?,
            },
            MenuChoice::PrincipalInPeriod => CalcRequest::PrincipalInPeriod(read_split(p)?),
            MenuChoice::InterestInPeriod => CalcRequest::InterestInPeriod(read_split(p)?),
            MenuChoice::PeriodicPayment => CalcRequest::PeriodicPayment {
                principal: p.read_f64("Principal")?,
                rate_pct: p.read_f64("Rate")?,
                num_periods: p.read_f64("Period")?,
            },
            MenuChoice::PvOfAnnuity => CalcRequest::PvOfAnnuity {
                payment: p.read_f64("Periodic Payment (PMT)")?,
                rate_pct: p.read_f64("Rate")?,
                num_periods: p.read_f64("Period (NPER)")?,
            },
            MenuChoice::AmortizationSchedule => CalcRequest::AmortizationSchedule {
                principal: p.read_f64("Loan Amount (principal)")?,
                payment: p.read_f64("Periodic Payment (PMT)")?,
                rate_pct: p.read_f64("Rate")?,
                num_periods: p.read_u32("Period (NPER)")?,
            },
        };
        Ok(request)
    }

    /// Show an error the session recovers from, as JSON in JSON mode
    fn report(&mut self, err: &FinCalcError) -> FinCalcResult<()> {
        let text = if self.config.json {
            format!("{}\n", err.to_json())
        } else {
            format!("{}\n", err)
        };
        self.prompter.say(&text)
    }

    /// Echo of the inputs, shown before the result
    fn describe(&self, request: &CalcRequest) -> String {
        let f = |v: f64| self.config.fmt(v);
        match request {
            CalcRequest::PrincipalInPeriod(s) | CalcRequest::InterestInPeriod(s) => format!(
                "Loan Details: (Principal : {}, Rate : {}, Payment : {}, Duration : {}, Periods {} - {})\n",
                f(s.principal),
                f(s.rate_pct),
                f(s.payment),
                s.total_periods,
                s.n1,
                s.n2
            ),
            CalcRequest::PeriodicPayment { principal, rate_pct, num_periods } => format!(
                "Loan Details: (Principal : {}, Rate : {}, Period : {})\n",
                f(*principal),
                f(*rate_pct),
                f(*num_periods)
            ),
            CalcRequest::PvOfAnnuity { payment, rate_pct, num_periods } => format!(
                "Loan Details: (Periodic Payment : {}, Rate : {}, Period : {})\n",
                f(*payment),
                f(*rate_pct),
                f(*num_periods)
            ),
            CalcRequest::AmortizationSchedule { principal, rate_pct, payment, num_periods } => {
                format!(
                    "Loan Details: (Principal : {}, Periodic Payment : {}, Rate : {}, Period : {})\n",
                    f(*principal),
                    f(*payment),
                    f(*rate_pct),
                    num_periods
                )
            }
            _ => String::new(),
        }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

fn read_split<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> FinCalcResult<PeriodSplit> {
    Ok(PeriodSplit {
        principal: p.read_f64("Principal")?,
        rate_pct: p.read_f64("Rate")?,
        payment: p.read_f64("Payment")?,
        total_periods: p.read_u32("Duration of Loan")?,
        n1: p.read_u32("Period1")?,
        n2: p.read_u32("Period2")?,
    })
}
