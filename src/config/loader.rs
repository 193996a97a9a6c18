//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all content and parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use tracing::info;

use crate::domain::archetype::{ARCHETYPE_COUNT, Archetype};
use crate::domain::commission;

use super::AppConfig;

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  let config: AppConfig = toml::from_str(&content)
    .with_context(|| "Failed to parse config.toml")?;

  validate_config(&config)?;

  info!(
    brand = %config.brand.name,
    questions = config.quiz.questions.len(),
    tiers = config.calculator.splits.tiers.len(),
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Non-empty brand copy
/// - Slider ranges inside the domain's hard limits, defaults inside ranges
/// - Well-formed split terms (tier table shape, fractions in (0, 1])
/// - Quiz content shape (one option and one profile per archetype)
pub fn validate_config(config: &AppConfig) -> Result<()> {
  // Brand validation
  anyhow::ensure!(!config.brand.name.is_empty(), "brand.name must not be empty");

  // Slider validation
  let tx = &config.calculator.transactions;
  anyhow::ensure!(
    tx.min >= commission::MIN_TRANSACTIONS && tx.max <= commission::MAX_TRANSACTIONS,
    "transactions slider [{}, {}] escapes the supported range [{}, {}]",
    tx.min,
    tx.max,
    commission::MIN_TRANSACTIONS,
    commission::MAX_TRANSACTIONS
  );
  anyhow::ensure!(
    tx.min < tx.max && (tx.min..=tx.max).contains(&tx.default),
    "transactions slider default {} outside [{}, {}]",
    tx.default,
    tx.min,
    tx.max
  );
  anyhow::ensure!(tx.step > 0, "transactions slider step must be positive");

  validate_slider(
    "price",
    &config.calculator.price,
    commission::MIN_PRICE,
    commission::MAX_PRICE,
  )?;
  validate_slider(
    "rate",
    &config.calculator.rate,
    commission::MIN_RATE,
    commission::MAX_RATE,
  )?;

  // Split terms validation
  let splits = &config.calculator.splits;
  anyhow::ensure!(
    splits.flat_fraction > Decimal::ZERO && splits.flat_fraction <= Decimal::ONE,
    "flat_fraction must be in (0, 1], got {}",
    splits.flat_fraction
  );
  anyhow::ensure!(!splits.tiers.is_empty(), "splits.tiers must not be empty");
  anyhow::ensure!(
    splits.tiers[0].from == 0,
    "first tier must start at 0 transactions, got {}",
    splits.tiers[0].from
  );
  for pair in splits.tiers.windows(2) {
    anyhow::ensure!(
      pair[0].from < pair[1].from,
      "tier thresholds must be strictly ascending ({} then {})",
      pair[0].from,
      pair[1].from
    );
    anyhow::ensure!(
      pair[0].fraction <= pair[1].fraction,
      "tier fractions must be non-decreasing ({} then {})",
      pair[0].fraction,
      pair[1].fraction
    );
  }
  for tier in &splits.tiers {
    anyhow::ensure!(
      tier.fraction > Decimal::ZERO && tier.fraction <= Decimal::ONE,
      "tier fraction must be in (0, 1], got {} at threshold {}",
      tier.fraction,
      tier.from
    );
  }

  // Quiz content validation
  anyhow::ensure!(
    !config.quiz.questions.is_empty(),
    "at least one quiz question must be configured"
  );
  for (i, question) in config.quiz.questions.iter().enumerate() {
    anyhow::ensure!(
      !question.prompt.is_empty(),
      "question {} has an empty prompt",
      i
    );
    anyhow::ensure!(
      question.options.len() == ARCHETYPE_COUNT,
      "question {} must have exactly {} options, got {}",
      i,
      ARCHETYPE_COUNT,
      question.options.len()
    );
  }
  anyhow::ensure!(
    config.quiz.archetypes.len() == ARCHETYPE_COUNT,
    "exactly {} archetype profiles required, got {}",
    ARCHETYPE_COUNT,
    config.quiz.archetypes.len()
  );
  for (archetype, profile) in Archetype::ALL.iter().zip(&config.quiz.archetypes) {
    anyhow::ensure!(
      profile.name == archetype.to_string(),
      "archetype profile {} must be named \"{}\", got \"{}\"",
      archetype.index(),
      archetype,
      profile.name
    );
  }

  Ok(())
}

fn validate_slider(
  name: &str,
  slider: &super::SliderConfig,
  domain_min: Decimal,
  domain_max: Decimal,
) -> Result<()> {
  anyhow::ensure!(
    slider.min >= domain_min && slider.max <= domain_max,
    "{} slider [{}, {}] escapes the supported range [{}, {}]",
    name,
    slider.min,
    slider.max,
    domain_min,
    domain_max
  );
  anyhow::ensure!(
    slider.min < slider.max
      && slider.default >= slider.min
      && slider.default <= slider.max,
    "{} slider default {} outside [{}, {}]",
    name,
    slider.default,
    slider.min,
    slider.max
  );
  anyhow::ensure!(
    slider.step > Decimal::ZERO,
    "{} slider step must be positive",
    name
  );
  Ok(())
}
