//! Console Presenter - stdout Rendering
//!
//! Renders the two widgets as plain terminal text. All brand copy, scheme
//! labels, and archetype profiles come from the loaded config; the domain
//! hands over full-precision numbers and this module rounds them for
//! display.

use rust_decimal_macros::dec;

use crate::config::AppConfig;
use crate::domain::archetype::{Archetype, QuizOutcome};
use crate::domain::commission::{CalculatorInputs, CommissionBreakdown, SplitScheme};
use crate::ports::presenter::Presenter;

use super::format;

/// Stdout-backed presenter carrying the configured content.
pub struct ConsolePresenter {
  config: AppConfig,
}

impl ConsolePresenter {
  /// Presenter over the loaded content configuration.
  pub fn new(config: AppConfig) -> Self {
    Self { config }
  }

  fn scheme_label(&self, scheme: SplitScheme) -> &str {
    match scheme {
      SplitScheme::StandardFlat => &self.config.calculator.flat_label,
      SplitScheme::Tiered => &self.config.calculator.tiered_label,
    }
  }
}

impl Presenter for ConsolePresenter {
  fn show_welcome(&mut self) {
    println!();
    println!("{}", self.config.brand.name);
    println!("{}", self.config.brand.tagline);
  }

  fn show_menu(&mut self) {
    println!();
    println!("  [1] Income potential calculator");
    println!("  [2] What type of agent are you?");
    println!("  [q] Quit");
  }

  fn show_breakdown(&mut self, inputs: &CalculatorInputs, breakdown: &CommissionBreakdown) {
    let split_percent = breakdown.agent_split_percent();
    println!();
    println!(
      "  {} | {} transactions x {} at {}",
      self.scheme_label(inputs.scheme()),
      inputs.transactions(),
      format::usd(inputs.average_price()),
      format::percent(inputs.commission_rate()),
    );
    println!("  Total sales volume    {}", format::usd(breakdown.total_volume));
    println!("  Total commission      {}", format::usd(breakdown.total_commission));
    println!(
      "  Your split            {}/{}",
      format::percent(split_percent),
      format::percent(dec!(100) - split_percent),
    );
    println!("  Your earnings         {}", format::usd(breakdown.agent_earnings));
    println!("  Brokerage keeps       {}", format::usd(breakdown.brokerage_earnings));
  }

  fn show_question(
    &mut self,
    prompt: &str,
    options: &[String],
    position: usize,
    total: usize,
    percent: u32,
  ) {
    println!();
    println!("  Question {position} of {total} ({percent}% complete)");
    println!("  {prompt}");
    for (i, option) in options.iter().enumerate() {
      println!("    [{}] {option}", i + 1);
    }
  }

  fn show_quiz_result(&mut self, outcome: &QuizOutcome) {
    // Loader guarantees one profile per archetype, in enum order.
    let profile = &self.config.quiz.archetypes[outcome.archetype.index()];
    println!();
    println!("  {}", profile.title);
    println!("  {}", profile.description);
    println!("  Strengths: {}", profile.strengths.join(", "));
    println!("  {}", profile.pitch);
    println!();
    let votes: Vec<String> = Archetype::ALL
      .iter()
      .map(|archetype| format!("{archetype} {}", outcome.tally.count(*archetype)))
      .collect();
    println!("  Votes: {}", votes.join(" | "));
    println!("  [r] Retake quiz  [q] Back to menu");
  }

  fn show_error(&mut self, message: &str) {
    println!("  ! {message}");
  }
}
