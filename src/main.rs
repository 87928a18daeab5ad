//! fincalc CLI
//!
//! Without a subcommand, shows the calculation menu and prompts for inputs.
//! With a subcommand, runs that one calculation from flags.
//!
//! Negative values are passed as `--rate=-5`.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};

use fincalc::engine::periodic_payment;
use fincalc::frontend::PeriodSplit;
use fincalc::{evaluate, CalcRequest, DisplayConfig, Session};

#[derive(Debug, Parser)]
#[command(name = "fincalc", version, about = "Finance cheatsheet: interest, PV/FV, annuities and amortization")]
struct Cli {
    /// Menu number to run without showing the menu
    #[arg(long)]
    choice: Option<u32>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Decimal places in text output
    #[arg(long)]
    precision: Option<usize>,

    /// Trace intermediate values of the calculation
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simple interest: P * R * T / 100
    SimpleInterest {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        duration: f64,
    },
    /// Interest earned by compounding
    CompoundInterest {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        periods: f64,
    },
    /// Present value of a future sum
    PresentValue {
        #[arg(long)]
        future_value: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        periods: f64,
    },
    /// Future value of a present sum
    FutureValue {
        #[arg(long)]
        present_value: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        periods: f64,
    },
    /// Periodic rate that grows PV into FV
    DiscountRate {
        #[arg(long)]
        future_value: f64,
        #[arg(long)]
        present_value: f64,
        #[arg(long)]
        periods: f64,
    },
    /// Re-express a rate at another compounding frequency
    ConvertRate {
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        from_frequency: f64,
        #[arg(long)]
        to_frequency: f64,
    },
    /// Principal repaid between periods N1 and N2
    Principal {
        #[command(flatten)]
        split: SplitArgs,
    },
    /// Interest paid between periods N1 and N2
    Interest {
        #[command(flatten)]
        split: SplitArgs,
    },
    /// Level payment that amortizes a loan
    Payment {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        periods: f64,
    },
    /// Present value of a level annuity
    AnnuityPv {
        #[arg(long)]
        payment: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        periods: f64,
    },
    /// Period-by-period amortization schedule
    Schedule {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        periods: u32,
        /// Defaults to the payment that exactly repays the loan
        #[arg(long)]
        payment: Option<f64>,
    },
}

#[derive(Debug, clap::Args)]
struct SplitArgs {
    #[arg(long)]
    principal: f64,
    #[arg(long)]
    rate: f64,
    /// Defaults to the payment that exactly repays the loan
    #[arg(long)]
    payment: Option<f64>,
    /// Total number of payments on the loan
    #[arg(long)]
    periods: u32,
    #[arg(long)]
    n1: u32,
    #[arg(long)]
    n2: u32,
}

impl SplitArgs {
    fn into_split(self) -> PeriodSplit {
        let payment = self
            .payment
            .unwrap_or_else(|| periodic_payment(self.principal, self.rate, f64::from(self.periods)));
        PeriodSplit {
            principal: self.principal,
            rate_pct: self.rate,
            payment,
            total_periods: self.periods,
            n1: self.n1,
            n2: self.n2,
        }
    }
}

impl Command {
    fn into_request(self) -> CalcRequest {
        match self {
            Command::SimpleInterest { principal, rate, duration } => CalcRequest::SimpleInterest {
                principal,
                rate_pct: rate,
                duration,
            },
            Command::CompoundInterest { principal, rate, periods } => {
                CalcRequest::CompoundInterest {
                    principal,
                    rate_pct: rate,
                    num_periods: periods,
                }
            }
            Command::PresentValue { future_value, rate, periods } => CalcRequest::PresentValue {
                future_value,
                rate_pct: rate,
                num_periods: periods,
            },
            Command::FutureValue { present_value, rate, periods } => CalcRequest::FutureValue {
                present_value,
                rate_pct: rate,
                num_periods: periods,
            },
            Command::DiscountRate { future_value, present_value, periods } => {
                CalcRequest::DiscountRate {
                    future_value,
                    present_value,
                    num_periods: periods,
                }
            }
            Command::ConvertRate { rate, from_frequency, to_frequency } => {
                CalcRequest::ConvertedDiscountRate {
                    rate_pct: rate,
                    freq1: from_frequency,
                    freq2: to_frequency,
                }
            }
            Command::Principal { split } => CalcRequest::PrincipalInPeriod(split.into_split()),
            Command::Interest { split } => CalcRequest::InterestInPeriod(split.into_split()),
            Command::Payment { principal, rate, periods } => CalcRequest::PeriodicPayment {
                principal,
                rate_pct: rate,
                num_periods: periods,
            },
            Command::AnnuityPv { payment, rate, periods } => CalcRequest::PvOfAnnuity {
                payment,
                rate_pct: rate,
                num_periods: periods,
            },
            Command::Schedule { principal, rate, periods, payment } => {
                let payment = payment
                    .unwrap_or_else(|| periodic_payment(principal, rate, f64::from(periods)));
                CalcRequest::AmortizationSchedule {
                    principal,
                    rate_pct: rate,
                    payment,
                    num_periods: periods,
                }
            }
        }
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug {
        builder.filter_module("fincalc", LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let mut config = DisplayConfig::from_env();
    if cli.json {
        config.json = true;
    }
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }

    match cli.command {
        Some(command) => {
            let request = command.into_request();
            info!("Running {} from command line", request.choice());

            let outcome = evaluate(&request)
                .with_context(|| format!("{} failed", request.choice().title()))?;

            let stdout = io::stdout();
            let mut out = stdout.lock();
            if config.json {
                writeln!(out, "{}", outcome.to_json()?)?;
            } else {
                write!(out, "{}", outcome.render(&config))?;
            }
        }
        None => {
            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = Session::new(stdin.lock(), stdout.lock(), config);
            session.run(cli.choice).context("Interactive session failed")?;
        }
    }

    Ok(())
}
