//! Command Source Port - User Input Interface
//!
//! Defines the trait through which the usecase loops receive user commands.
//! The console adapter parses stdin lines into these commands; tests script
//! them directly with mocks.

use anyhow::Result;
use rust_decimal::Decimal;

use crate::domain::commission::SplitScheme;

/// Top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
  /// Open the income calculator.
  Calculator,
  /// Start the agent-type quiz.
  Quiz,
  /// Exit the program.
  Quit,
}

/// One calculator interaction (a slider move or a tab switch).
///
/// Every command that changes an input triggers a full recompute, matching
/// the original UI's recompute-on-every-change reactivity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculatorCommand {
  /// Set transactions per year.
  SetTransactions(u32),
  /// Set average sale price.
  SetPrice(Decimal),
  /// Set commission rate (percent).
  SetRate(Decimal),
  /// Switch the split scheme tab.
  SetScheme(SplitScheme),
  /// Leave the calculator.
  Quit,
}

/// One quiz interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizCommand {
  /// Answer the current question with a 0-based choice index.
  Answer(u8),
  /// Go back one question, dropping the last answer.
  Back,
  /// Reset to question 0 (the "retake" action).
  Restart,
  /// Leave the quiz.
  Quit,
}

/// Source of user commands for the interactive loops.
pub trait CommandSource {
  /// Next top-level menu choice.
  ///
  /// # Errors
  /// Propagates input-channel failures (e.g. closed stdin).
  fn menu_choice(&mut self) -> Result<MenuChoice>;

  /// Next calculator command.
  ///
  /// # Errors
  /// Propagates input-channel failures.
  fn calculator_command(&mut self) -> Result<CalculatorCommand>;

  /// Next quiz command.
  ///
  /// # Errors
  /// Propagates input-channel failures.
  fn quiz_command(&mut self) -> Result<QuizCommand>;
}
