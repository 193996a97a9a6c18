//! Quiz session walk.
//!
//! A linear walk over the question list with single-step undo: forward on
//! answer, one step back on "previous", full reset on retake. After the last
//! answer the session classifies the sheet and becomes terminal.

use super::archetype::{ArchetypeClassifier, QuizOutcome};
use super::errors::DomainError;

/// Where a session currently stands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QuizPhase {
    /// Waiting for the answer to question `index` (0-based).
    Asking { index: usize },
    /// All questions answered; terminal.
    Complete { outcome: QuizOutcome },
}

impl QuizPhase {
    /// Check if the session has produced its result.
    pub fn is_complete(&self) -> bool {
        matches!(self, QuizPhase::Complete { .. })
    }
}

/// One user's pass through the quiz.
#[derive(Debug, Clone)]
pub struct QuizSession {
    classifier: ArchetypeClassifier,
    answers: Vec<u8>,
    outcome: Option<QuizOutcome>,
}

impl QuizSession {
    /// Start a fresh session at question 0.
    pub fn new(classifier: ArchetypeClassifier) -> Self {
        Self {
            classifier,
            answers: Vec::with_capacity(classifier.question_count()),
            outcome: None,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> QuizPhase {
        match self.outcome {
            Some(outcome) => QuizPhase::Complete { outcome },
            None => QuizPhase::Asking {
                index: self.answers.len(),
            },
        }
    }

    /// Record the answer to the current question and advance.
    ///
    /// Answering the final question classifies the sheet and returns the
    /// terminal phase.
    ///
    /// # Errors
    /// - `QuizComplete` if the session already has a result.
    /// - `InvalidAnswer` if `choice` is not a valid option index.
    pub fn record_answer(&mut self, choice: u8) -> Result<QuizPhase, DomainError> {
        if self.outcome.is_some() {
            return Err(DomainError::QuizComplete);
        }
        if usize::from(choice) >= super::archetype::ARCHETYPE_COUNT {
            return Err(DomainError::InvalidAnswer {
                index: self.answers.len(),
                value: choice,
                max: (super::archetype::ARCHETYPE_COUNT - 1) as u8,
            });
        }

        self.answers.push(choice);
        if self.answers.len() == self.classifier.question_count() {
            self.outcome = Some(self.classifier.classify(&self.answers)?);
        }
        Ok(self.phase())
    }

    /// Drop the last recorded answer and return to the previous question.
    ///
    /// Returns `false` (and does nothing) at question 0 or once the session
    /// is complete — the original UI disables "previous" in both states.
    pub fn step_back(&mut self) -> bool {
        if self.outcome.is_some() || self.answers.is_empty() {
            return false;
        }
        self.answers.pop();
        true
    }

    /// Clear everything and restart from question 0 (the "retake" action).
    pub fn restart(&mut self) {
        self.answers.clear();
        self.outcome = None;
    }

    /// 1-based position of the current question, capped at the total.
    pub fn position(&self) -> usize {
        (self.answers.len() + 1).min(self.total())
    }

    /// Total number of questions.
    pub fn total(&self) -> usize {
        self.classifier.question_count()
    }

    /// Completion percentage shown next to the progress bar, counting the
    /// question currently on screen.
    pub fn percent_complete(&self) -> u32 {
        ((self.position() * 100) / self.total()) as u32
    }

    /// Answers recorded so far.
    pub fn answers(&self) -> &[u8] {
        &self.answers
    }
}
