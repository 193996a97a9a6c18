//! Agent archetype classification.
//!
//! Each quiz answer is a vote for one of four archetypes; the classifier
//! tallies the votes and returns the plurality winner. Ties break to the
//! lowest archetype index (first-seen-wins).

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Number of archetypes, and therefore of choices per question.
pub const ARCHETYPE_COUNT: usize = 4;

/// The four agent archetypes, in canonical vote-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Archetype {
    /// Earnings-driven, independent, entrepreneurial.
    Accelerator,
    /// Team-oriented, values mentorship and support.
    Collaborator,
    /// Prioritizes flexibility and work-life balance.
    LifestyleDesigner,
    /// Tech-forward, early adopter.
    Innovator,
}

impl Archetype {
    /// All archetypes in vote-index order.
    pub const ALL: [Archetype; ARCHETYPE_COUNT] = [
        Archetype::Accelerator,
        Archetype::Collaborator,
        Archetype::LifestyleDesigner,
        Archetype::Innovator,
    ];

    /// Archetype for a vote index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// This archetype's vote index.
    pub fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Accelerator => write!(f, "Accelerator"),
            Self::Collaborator => write!(f, "Collaborator"),
            Self::LifestyleDesigner => write!(f, "Lifestyle Designer"),
            Self::Innovator => write!(f, "Innovator"),
        }
    }
}

/// Per-archetype vote counts from one completed quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteTally {
    counts: [u32; ARCHETYPE_COUNT],
}

impl VoteTally {
    /// Tally validated answers.
    fn from_answers(answers: &[u8]) -> Self {
        let mut counts = [0u32; ARCHETYPE_COUNT];
        for &answer in answers {
            counts[answer as usize] += 1;
        }
        Self { counts }
    }

    /// Votes for one archetype.
    pub fn count(&self, archetype: Archetype) -> u32 {
        self.counts[archetype.index()]
    }

    /// All counts in vote-index order.
    pub fn counts(&self) -> [u32; ARCHETYPE_COUNT] {
        self.counts
    }

    /// The plurality winner; ties break to the lowest index.
    fn winner(&self) -> Archetype {
        let mut best = Archetype::Accelerator;
        for archetype in Archetype::ALL {
            if self.counts[archetype.index()] > self.counts[best.index()] {
                best = archetype;
            }
        }
        best
    }
}

/// Result of classifying one completed answer sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    /// The winning archetype.
    pub archetype: Archetype,
    /// The full vote distribution, for presentation.
    pub tally: VoteTally,
}

/// Classifier over a fixed number of questions.
#[derive(Debug, Clone, Copy)]
pub struct ArchetypeClassifier {
    question_count: usize,
}

impl ArchetypeClassifier {
    /// Creates a classifier expecting one answer per question.
    pub fn new(question_count: usize) -> Self {
        Self { question_count }
    }

    /// Number of answers this classifier expects.
    pub fn question_count(&self) -> usize {
        self.question_count
    }

    /// Classifies a completed answer sheet.
    ///
    /// # Errors
    /// - `WrongAnswerCount` if the sheet length differs from the question
    ///   count.
    /// - `InvalidAnswer` naming the first offending position if any answer
    ///   is outside `[0, 3]`.
    pub fn classify(&self, answers: &[u8]) -> Result<QuizOutcome, DomainError> {
        if answers.len() != self.question_count {
            return Err(DomainError::WrongAnswerCount {
                expected: self.question_count,
                got: answers.len(),
            });
        }
        for (index, &value) in answers.iter().enumerate() {
            if usize::from(value) >= ARCHETYPE_COUNT {
                return Err(DomainError::InvalidAnswer {
                    index,
                    value,
                    max: (ARCHETYPE_COUNT - 1) as u8,
                });
            }
        }

        let tally = VoteTally::from_answers(answers);
        Ok(QuizOutcome {
            archetype: tally.winner(),
            tally,
        })
    }
}

impl Default for ArchetypeClassifier {
    /// The original quiz asks five questions.
    fn default() -> Self {
        Self::new(5)
    }
}
