//! Console Input - stdin Command Parsing
//!
//! Reads one line per command and parses it into the port enums. Garbage
//! input gets a hint and another read; end of input quits the current loop,
//! so piped sessions terminate cleanly.

use std::io::{BufRead, StdinLock, Write};

use anyhow::{Context, Result};
use rust_decimal::Decimal;

use crate::domain::commission::SplitScheme;
use crate::ports::input::{CalculatorCommand, CommandSource, MenuChoice, QuizCommand};

/// Stdin-backed command source.
pub struct ConsoleInput<R: BufRead> {
  reader: R,
}

impl ConsoleInput<StdinLock<'static>> {
  /// Command source over the process's stdin.
  pub fn stdin() -> Self {
    Self {
      reader: std::io::stdin().lock(),
    }
  }
}

impl<R: BufRead> ConsoleInput<R> {
  /// Command source over any line-oriented reader (tests use `Cursor`).
  pub fn new(reader: R) -> Self {
    Self { reader }
  }

  /// Read the next non-empty line, trimmed. `None` on end of input.
  fn next_line(&mut self) -> Result<Option<String>> {
    loop {
      print!("> ");
      std::io::stdout().flush().ok();

      let mut line = String::new();
      let read = self
        .reader
        .read_line(&mut line)
        .context("Failed to read from input")?;
      if read == 0 {
        return Ok(None);
      }
      let trimmed = line.trim();
      if !trimmed.is_empty() {
        return Ok(Some(trimmed.to_lowercase()));
      }
    }
  }
}

impl<R: BufRead> CommandSource for ConsoleInput<R> {
  fn menu_choice(&mut self) -> Result<MenuChoice> {
    loop {
      let Some(line) = self.next_line()? else {
        return Ok(MenuChoice::Quit);
      };
      match parse_menu_choice(&line) {
        Some(choice) => return Ok(choice),
        None => println!("  enter 1 (calculator), 2 (quiz), or q (quit)"),
      }
    }
  }

  fn calculator_command(&mut self) -> Result<CalculatorCommand> {
    loop {
      let Some(line) = self.next_line()? else {
        return Ok(CalculatorCommand::Quit);
      };
      match parse_calculator_command(&line) {
        Some(command) => return Ok(command),
        None => println!(
          "  t <count> | p <price> | r <rate> | s flat|tiered | q to leave"
        ),
      }
    }
  }

  fn quiz_command(&mut self) -> Result<QuizCommand> {
    loop {
      let Some(line) = self.next_line()? else {
        return Ok(QuizCommand::Quit);
      };
      match parse_quiz_command(&line) {
        Some(command) => return Ok(command),
        None => println!("  enter 1-4, b (back), r (retake), or q (quit)"),
      }
    }
  }
}

fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
  match line {
    "1" | "c" | "calc" | "calculator" => Some(MenuChoice::Calculator),
    "2" | "quiz" => Some(MenuChoice::Quiz),
    "q" | "quit" | "exit" => Some(MenuChoice::Quit),
    _ => None,
  }
}

fn parse_calculator_command(line: &str) -> Option<CalculatorCommand> {
  let mut tokens = line.split_whitespace();
  let verb = tokens.next()?;
  let arg = tokens.next();
  if tokens.next().is_some() {
    return None;
  }

  match (verb, arg) {
    ("q" | "quit" | "exit", None) => Some(CalculatorCommand::Quit),
    ("t" | "tx" | "transactions", Some(arg)) => {
      arg.parse().ok().map(CalculatorCommand::SetTransactions)
    }
    ("p" | "price", Some(arg)) => parse_amount(arg).map(CalculatorCommand::SetPrice),
    ("r" | "rate", Some(arg)) => {
      let trimmed = arg.strip_suffix('%').unwrap_or(arg);
      trimmed.parse().ok().map(CalculatorCommand::SetRate)
    }
    ("s" | "split" | "scheme", Some("flat")) => {
      Some(CalculatorCommand::SetScheme(SplitScheme::StandardFlat))
    }
    ("s" | "split" | "scheme", Some("tiered")) => {
      Some(CalculatorCommand::SetScheme(SplitScheme::Tiered))
    }
    _ => None,
  }
}

fn parse_quiz_command(line: &str) -> Option<QuizCommand> {
  match line {
    "b" | "back" | "previous" => Some(QuizCommand::Back),
    "r" | "retake" | "restart" => Some(QuizCommand::Restart),
    "q" | "quit" | "exit" => Some(QuizCommand::Quit),
    choice => {
      // 1-based on screen, 0-based in the domain. The original UI offers
      // exactly four buttons, so anything else is a typo, not an answer.
      let number: u8 = choice.parse().ok()?;
      (1..=4).contains(&number).then(|| QuizCommand::Answer(number - 1))
    }
  }
}

/// Parse a currency amount, tolerating `$` prefixes and `,`/`_` grouping.
fn parse_amount(raw: &str) -> Option<Decimal> {
  let cleaned: String = raw
    .chars()
    .filter(|ch| !matches!(ch, '$' | ',' | '_'))
    .collect();
  cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use rust_decimal_macros::dec;
  use std::io::Cursor;

  #[test]
  fn test_parse_menu_choice() {
    assert_eq!(parse_menu_choice("1"), Some(MenuChoice::Calculator));
    assert_eq!(parse_menu_choice("quiz"), Some(MenuChoice::Quiz));
    assert_eq!(parse_menu_choice("q"), Some(MenuChoice::Quit));
    assert_eq!(parse_menu_choice("3"), None);
  }

  #[test]
  fn test_parse_calculator_commands() {
    assert_eq!(
      parse_calculator_command("t 15"),
      Some(CalculatorCommand::SetTransactions(15))
    );
    assert_eq!(
      parse_calculator_command("p $425,000"),
      Some(CalculatorCommand::SetPrice(dec!(425000)))
    );
    assert_eq!(
      parse_calculator_command("r 2.5%"),
      Some(CalculatorCommand::SetRate(dec!(2.5)))
    );
    assert_eq!(
      parse_calculator_command("s flat"),
      Some(CalculatorCommand::SetScheme(SplitScheme::StandardFlat))
    );
    assert_eq!(parse_calculator_command("q"), Some(CalculatorCommand::Quit));
    assert_eq!(parse_calculator_command("p"), None);
    assert_eq!(parse_calculator_command("t 15 extra"), None);
  }

  #[test]
  fn test_parse_quiz_commands() {
    assert_eq!(parse_quiz_command("1"), Some(QuizCommand::Answer(0)));
    assert_eq!(parse_quiz_command("4"), Some(QuizCommand::Answer(3)));
    assert_eq!(parse_quiz_command("b"), Some(QuizCommand::Back));
    assert_eq!(parse_quiz_command("retake"), Some(QuizCommand::Restart));
    assert_eq!(parse_quiz_command("q"), Some(QuizCommand::Quit));
    assert_eq!(parse_quiz_command("0"), None);
    assert_eq!(parse_quiz_command("5"), None);
    assert_eq!(parse_quiz_command("yes"), None);
  }

  #[test]
  fn test_end_of_input_quits() {
    let mut input = ConsoleInput::new(Cursor::new(""));
    assert_eq!(input.quiz_command().unwrap(), QuizCommand::Quit);
  }

  #[test]
  fn test_skips_garbage_until_valid() {
    let mut input = ConsoleInput::new(Cursor::new("nope\n\n2\n"));
    assert_eq!(input.menu_choice().unwrap(), MenuChoice::Quiz);
  }
}
