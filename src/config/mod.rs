//! Configuration Module - TOML-based Content Configuration
//!
//! Loads brand copy, slider ranges, split terms, quiz questions, and
//! archetype profiles from `config.toml`. The original site duplicated
//! dozens of page variants differing only in copy and theme; here every
//! variant-specific value is data, and the renderer is parameterized by it.
//! Nothing brand- or content-specific is hardcoded in the domain layer.

pub mod loader;

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::archetype::ArchetypeClassifier;
use crate::domain::commission::{
  CalculatorInputs, CommissionCalculator, SplitScheme, Tier, TierSchedule,
};
use crate::domain::errors::DomainError;

/// Top-level application configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before the interactive loop begins.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
  /// Brand identity and copy.
  pub brand: BrandConfig,
  /// Income calculator ranges, labels, and split terms.
  pub calculator: CalculatorConfig,
  /// Quiz questions and archetype result profiles.
  pub quiz: QuizConfig,
}

/// Brand identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BrandConfig {
  /// Brand name shown in headers.
  pub name: String,
  /// One-line tagline under the brand name.
  pub tagline: String,
  /// Log level (trace, debug, info, warn, error).
  #[serde(default = "default_log_level")]
  pub log_level: String,
}

/// Integer slider metadata (transactions per year).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CountSliderConfig {
  /// Lower bound, inclusive.
  pub min: u32,
  /// Upper bound, inclusive.
  pub max: u32,
  /// Increment per step.
  #[serde(default = "default_count_step")]
  pub step: u32,
  /// Initial value.
  pub default: u32,
}

/// Decimal slider metadata (price, commission rate).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SliderConfig {
  /// Lower bound, inclusive.
  pub min: Decimal,
  /// Upper bound, inclusive.
  pub max: Decimal,
  /// Increment per step.
  pub step: Decimal,
  /// Initial value.
  pub default: Decimal,
}

/// Split terms for both schemes.
#[derive(Debug, Clone, Deserialize)]
pub struct SplitsConfig {
  /// Agent fraction under the flat scheme.
  #[serde(default = "default_flat_fraction")]
  pub flat_fraction: Decimal,
  /// Production-based tier table, ascending by threshold.
  pub tiers: Vec<Tier>,
}

/// Income calculator configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
  /// Display label for the tiered scheme tab.
  pub tiered_label: String,
  /// Display label for the flat scheme tab.
  pub flat_label: String,
  /// Scheme selected when the calculator opens.
  #[serde(default = "default_scheme")]
  pub default_scheme: SplitScheme,
  /// Transactions-per-year slider.
  pub transactions: CountSliderConfig,
  /// Average sale price slider.
  pub price: SliderConfig,
  /// Commission rate slider (percent).
  pub rate: SliderConfig,
  /// Split terms.
  pub splits: SplitsConfig,
}

/// One multiple-choice quiz question.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionConfig {
  /// The question text.
  pub prompt: String,
  /// One option per archetype, in vote-index order.
  pub options: Vec<String>,
}

/// Result copy for one archetype.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchetypeProfile {
  /// Canonical archetype name (must match the domain enum).
  pub name: String,
  /// Display title ("The Accelerator").
  pub title: String,
  /// Result description paragraph.
  pub description: String,
  /// Bullet-point strengths.
  pub strengths: Vec<String>,
  /// Why this brand fits the archetype.
  pub pitch: String,
}

/// Quiz content configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizConfig {
  /// The question sequence, asked in order.
  pub questions: Vec<QuestionConfig>,
  /// Exactly one profile per archetype, in vote-index order.
  pub archetypes: Vec<ArchetypeProfile>,
}

impl AppConfig {
  /// Build the commission calculator from the configured split terms.
  pub fn commission_calculator(&self) -> CommissionCalculator {
    CommissionCalculator::new(
      self.calculator.splits.flat_fraction,
      TierSchedule::new(self.calculator.splits.tiers.clone()),
    )
  }

  /// Build the classifier sized to the configured question list.
  pub fn classifier(&self) -> ArchetypeClassifier {
    ArchetypeClassifier::new(self.quiz.questions.len())
  }

  /// Calculator inputs at the configured slider defaults.
  ///
  /// # Errors
  /// `DomainError::ValueOutOfRange` if a configured default escapes the
  /// domain limits (the loader rejects such configs up front).
  pub fn default_inputs(&self) -> Result<CalculatorInputs, DomainError> {
    CalculatorInputs::new(
      self.calculator.transactions.default,
      self.calculator.price.default,
      self.calculator.rate.default,
      self.calculator.default_scheme,
    )
  }
}

fn default_log_level() -> String {
  "info".to_string()
}

fn default_count_step() -> u32 {
  1
}

fn default_flat_fraction() -> Decimal {
  rust_decimal_macros::dec!(0.50)
}

fn default_scheme() -> SplitScheme {
  SplitScheme::Tiered
}
