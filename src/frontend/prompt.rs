//! Line-oriented prompting over any reader/writer pair

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::warn;

use crate::error::{FinCalcError, FinCalcResult};

/// Writes labels and parses the replies
pub struct Prompter<R, W> {
    input: R,
    output: W,
    max_attempts: u32,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, max_attempts: u32) -> Self {
        Self {
            input,
            output,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Monetary amount, rate, duration or frequency
    pub fn read_f64(&mut self, label: &str) -> FinCalcResult<f64> {
        self.read_parsed(label, "number")
    }

    /// Period count or index
    pub fn read_u32(&mut self, label: &str) -> FinCalcResult<u32> {
        self.read_parsed(label, "non-negative integer")
    }

    fn read_parsed<T: FromStr>(&mut self, label: &str, expected: &'static str) -> FinCalcResult<T> {
        let mut last = String::new();
        for attempt in 1..=self.max_attempts {
            write!(self.output, "{} : ", label)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(FinCalcError::UnexpectedEof {
                    field: label.to_string(),
                });
            }

            let trimmed = line.trim();
            match trimmed.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => {
                    warn!(
                        "Rejected input for {} (attempt {}/{}): {:?}",
                        label, attempt, self.max_attempts, trimmed
                    );
                    if attempt < self.max_attempts {
                        writeln!(self.output, "Please enter a {}", expected)?;
                    }
                    last = trimmed.to_string();
                }
            }
        }

        Err(FinCalcError::InvalidInput {
            field: label.to_string(),
            input: last,
            expected,
        })
    }

    /// Write text as-is
    pub fn say(&mut self, text: &str) -> FinCalcResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
