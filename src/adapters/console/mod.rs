//! Console Adapters - Terminal Implementations of the Ports
//!
//! `ConsoleInput` parses stdin lines into port commands; `ConsolePresenter`
//! renders questions, breakdowns, and results to stdout using the configured
//! brand copy. Display-time rounding to whole currency units happens in
//! `format` and nowhere else.

pub mod format;
pub mod input;
pub mod presenter;

pub use input::ConsoleInput;
pub use presenter::ConsolePresenter;
