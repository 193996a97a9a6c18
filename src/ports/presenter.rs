//! Presenter Port - Rendering Interface
//!
//! Defines the trait through which the usecase loops render output. The
//! console adapter owns all display formatting (currency rounding, theme
//! copy); the usecases hand it full-precision domain values only.

use crate::domain::archetype::QuizOutcome;
use crate::domain::commission::{CalculatorInputs, CommissionBreakdown};

/// Renderer for the interactive widgets.
///
/// Implementations decide where content copy comes from (the console
/// adapter holds the configured brand and archetype profiles); the trait
/// only carries domain values and raw question text.
pub trait Presenter {
  /// Brand banner, shown once at startup.
  fn show_welcome(&mut self);

  /// Top-level menu.
  fn show_menu(&mut self);

  /// Current calculator inputs and their full breakdown.
  ///
  /// Called after every input change; display rounding happens here and
  /// nowhere else.
  fn show_breakdown(&mut self, inputs: &CalculatorInputs, breakdown: &CommissionBreakdown);

  /// One quiz question with its choices and walk progress.
  fn show_question(
    &mut self,
    prompt: &str,
    options: &[String],
    position: usize,
    total: usize,
    percent: u32,
  );

  /// Terminal quiz result (archetype profile plus vote distribution).
  fn show_quiz_result(&mut self, outcome: &QuizOutcome);

  /// A recoverable input problem (out-of-range value, invalid choice).
  fn show_error(&mut self, message: &str);
}
