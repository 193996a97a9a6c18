//! Use Cases Layer - Application Logic
//!
//! Orchestrates domain logic with port interfaces to implement the two
//! interactive widgets. Each use case is a self-contained loop driven one
//! user command at a time.
//!
//! Use cases:
//! - `CalculatorSession`: Reactive income calculator (recompute on change)
//! - `QuizEngine`: Linear quiz walk with undo and retake

pub mod calculator_session;
pub mod quiz_engine;

pub use calculator_session::CalculatorSession;
pub use quiz_engine::QuizEngine;
