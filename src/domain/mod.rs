//! Domain layer - Core calculation logic and models.
//!
//! This module contains the pure calculation core: commission split
//! arithmetic, archetype classification, and the quiz session walk.
//! No I/O and no config dependency here (hexagonal architecture inner ring).
//! All types are testable in isolation.

pub mod archetype;
pub mod commission;
pub mod errors;
pub mod quiz;

// Re-export core types for convenience
pub use archetype::{Archetype, ArchetypeClassifier, QuizOutcome, VoteTally};
pub use commission::{
    CalculatorInputs, CommissionBreakdown, CommissionCalculator, SplitScheme,
    Tier, TierSchedule,
};
pub use errors::DomainError;
pub use quiz::{QuizPhase, QuizSession};
