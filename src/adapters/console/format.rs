//! Display formatting for currency and percentages.
//!
//! The calculation core never rounds; these helpers round to whole currency
//! units at display time, matching the original UI's `Math.round` +
//! locale grouping.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a currency amount: round to whole units (half away from zero,
/// like `Math.round`), prefix `$`, group thousands with commas.
pub fn usd(amount: Decimal) -> String {
  let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
  let digits = rounded.abs().to_string();
  let grouped = group_thousands(&digits);
  if rounded.is_sign_negative() && !rounded.is_zero() {
    format!("-${grouped}")
  } else {
    format!("${grouped}")
  }
}

/// Format a percentage with trailing zeros trimmed ("3%", "2.5%", "85%").
pub fn percent(value: Decimal) -> String {
  format!("{}%", value.normalize())
}

fn group_thousands(digits: &str) -> String {
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }
  grouped
}
