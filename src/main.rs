//! Agent-Fit — Entry Point
//!
//! Initializes configuration and logging, then runs the interactive menu
//! loop until the user quits.
//!
//! Wiring sequence:
//! 1. Load config.toml + validate (content, slider ranges, split terms)
//! 2. Init tracing (env-filter, level from config, logs to stderr)
//! 3. Build domain services from config (calculator terms, classifier)
//! 4. Loop: menu -> income calculator | agent-type quiz -> back to menu

use anyhow::{Context, Result};
use tracing::info;

mod adapters;
mod config;
mod domain;
mod ports;
mod usecases;

use adapters::console::{ConsoleInput, ConsolePresenter};
use ports::input::{CommandSource, MenuChoice};
use ports::presenter::Presenter;
use usecases::{CalculatorSession, QuizEngine};

fn main() -> Result<()> {
    // ── 1. Load configuration from config.toml ──────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = config::loader::load_config(&config_path)
        .context("Failed to load configuration")?;

    // ── 2. Initialize logging on stderr ─────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new(&config.brand.log_level)
                }),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(
        brand = %config.brand.name,
        version = env!("CARGO_PKG_VERSION"),
        questions = config.quiz.questions.len(),
        "Starting Agent-Fit"
    );

    // ── 3. Build ports and services ─────────────────────────
    let mut input = ConsoleInput::stdin();
    let mut presenter = ConsolePresenter::new(config.clone());

    // ── 4. Interactive menu loop ────────────────────────────
    presenter.show_welcome();
    loop {
        presenter.show_menu();
        match input.menu_choice()? {
            MenuChoice::Calculator => {
                let mut session = CalculatorSession::new(
                    config.commission_calculator(),
                    config.default_inputs()?,
                );
                session.run(&mut input, &mut presenter)?;
            }
            MenuChoice::Quiz => {
                let mut engine =
                    QuizEngine::new(config.classifier(), config.quiz.questions.clone());
                engine.run(&mut input, &mut presenter)?;
            }
            MenuChoice::Quit => break,
        }
    }

    info!("Goodbye");
    Ok(())
}
