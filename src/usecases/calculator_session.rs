//! Calculator Session - Reactive Income Calculator
//!
//! Holds the current slider values and recomputes the full breakdown on
//! every change, mirroring the original UI where each slider drag rendered
//! new numbers immediately. Rejected changes leave the held values intact.

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::domain::commission::{
  CalculatorInputs, CommissionBreakdown, CommissionCalculator, SplitScheme,
};
use crate::domain::errors::DomainError;
use crate::ports::input::{CalculatorCommand, CommandSource};
use crate::ports::presenter::Presenter;

/// One user's calculator session: split terms plus current inputs.
pub struct CalculatorSession {
  calculator: CommissionCalculator,
  inputs: CalculatorInputs,
}

impl CalculatorSession {
  /// Create a session with the given split terms and starting inputs.
  pub fn new(calculator: CommissionCalculator, inputs: CalculatorInputs) -> Self {
    Self { calculator, inputs }
  }

  /// Current inputs.
  pub fn inputs(&self) -> &CalculatorInputs {
    &self.inputs
  }

  /// Breakdown for the current inputs. Pure recompute, no caching.
  pub fn breakdown(&self) -> CommissionBreakdown {
    self.calculator.breakdown(&self.inputs)
  }

  /// Set transactions per year and recompute.
  ///
  /// # Errors
  /// `ValueOutOfRange`; the held value is unchanged on error.
  pub fn set_transactions(&mut self, transactions: u32) -> Result<CommissionBreakdown, DomainError> {
    self.inputs = self.inputs.with_transactions(transactions)?;
    Ok(self.breakdown())
  }

  /// Set the average sale price and recompute.
  ///
  /// # Errors
  /// `ValueOutOfRange`; the held value is unchanged on error.
  pub fn set_average_price(&mut self, price: Decimal) -> Result<CommissionBreakdown, DomainError> {
    self.inputs = self.inputs.with_average_price(price)?;
    Ok(self.breakdown())
  }

  /// Set the commission rate and recompute.
  ///
  /// # Errors
  /// `ValueOutOfRange`; the held value is unchanged on error.
  pub fn set_commission_rate(&mut self, rate: Decimal) -> Result<CommissionBreakdown, DomainError> {
    self.inputs = self.inputs.with_commission_rate(rate)?;
    Ok(self.breakdown())
  }

  /// Switch the split scheme and recompute. Always succeeds.
  pub fn set_scheme(&mut self, scheme: SplitScheme) -> CommissionBreakdown {
    self.inputs = self.inputs.with_scheme(scheme);
    self.breakdown()
  }

  /// Drive the calculator until the user quits.
  ///
  /// Shows the breakdown for the starting inputs immediately, then applies
  /// one command at a time, re-rendering after every accepted change.
  ///
  /// # Errors
  /// Propagates input-channel failures from the command source.
  pub fn run<S: CommandSource, P: Presenter>(
    &mut self,
    source: &mut S,
    presenter: &mut P,
  ) -> Result<()> {
    presenter.show_breakdown(&self.inputs, &self.breakdown());

    loop {
      let command = source.calculator_command()?;
      debug!(?command, "calculator command");

      let applied = match command {
        CalculatorCommand::SetTransactions(n) => self.set_transactions(n),
        CalculatorCommand::SetPrice(price) => self.set_average_price(price),
        CalculatorCommand::SetRate(rate) => self.set_commission_rate(rate),
        CalculatorCommand::SetScheme(scheme) => Ok(self.set_scheme(scheme)),
        CalculatorCommand::Quit => return Ok(()),
      };

      match applied {
        Ok(breakdown) => presenter.show_breakdown(&self.inputs, &breakdown),
        Err(rejected) => {
          warn!(%rejected, "calculator input rejected");
          presenter.show_error(&rejected.to_string());
        }
      }
    }
  }
}
