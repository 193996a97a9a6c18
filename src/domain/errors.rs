//! Domain error taxonomy.
//!
//! All calculation-layer failures are typed and synchronous: the only
//! recovery is resubmission with corrected input. Config and I/O errors
//! live at the adapter/loader boundary (`anyhow`), not here.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced by the calculation core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A calculator input fell outside its documented domain.
    #[error("{field} out of range: {value} (expected {min} to {max})")]
    ValueOutOfRange {
        field: &'static str,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    /// A quiz answer referenced a choice index that does not exist.
    #[error("answer {index} has invalid choice {value} (choices are 0 to {max})")]
    InvalidAnswer { index: usize, value: u8, max: u8 },

    /// The classifier was handed the wrong number of answers.
    #[error("expected {expected} answers, got {got}")]
    WrongAnswerCount { expected: usize, got: usize },

    /// An answer was recorded on a session that already has a result.
    #[error("quiz already complete; restart to retake")]
    QuizComplete,
}

impl DomainError {
    /// Check whether this error is a quiz-input problem (as opposed to a
    /// calculator range violation).
    pub fn is_quiz_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidAnswer { .. }
                | DomainError::WrongAnswerCount { .. }
                | DomainError::QuizComplete
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_answer_display() {
        let error = DomainError::InvalidAnswer {
            index: 2,
            value: 7,
            max: 3,
        };
        assert_eq!(
            error.to_string(),
            "answer 2 has invalid choice 7 (choices are 0 to 3)"
        );
    }

    #[test]
    fn test_quiz_error_check() {
        assert!(DomainError::QuizComplete.is_quiz_error());
        assert!(
            !DomainError::ValueOutOfRange {
                field: "transactions",
                value: Decimal::from(99),
                min: Decimal::ONE,
                max: Decimal::from(50),
            }
            .is_quiz_error()
        );
    }
}
