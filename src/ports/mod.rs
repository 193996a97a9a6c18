//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires from
//! the outside world. Adapters implement these traits. Everything is
//! synchronous call-and-return: both widgets are driven one user event at
//! a time, so there is nothing to suspend or cancel.
//!
//! Port categories:
//! - `CommandSource`: user commands (menu choice, slider moves, quiz answers)
//! - `Presenter`: rendering of questions, breakdowns, and results

pub mod input;
pub mod presenter;

pub use input::{CalculatorCommand, CommandSource, MenuChoice, QuizCommand};
pub use presenter::Presenter;
