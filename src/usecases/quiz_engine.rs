//! Quiz Engine - Linear Quiz Walk Driver
//!
//! Drives a `QuizSession` through the ports: present the current question,
//! apply one command, repeat until the walk terminates. The engine owns the
//! question content; the presenter owns how it looks.

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::QuestionConfig;
use crate::domain::archetype::{ArchetypeClassifier, QuizOutcome};
use crate::domain::quiz::{QuizPhase, QuizSession};
use crate::ports::input::{CommandSource, QuizCommand};
use crate::ports::presenter::Presenter;

/// Interactive quiz runner.
pub struct QuizEngine {
  questions: Vec<QuestionConfig>,
  session: QuizSession,
}

impl QuizEngine {
  /// Create an engine over the given question content.
  ///
  /// The classifier must be sized to the question list; `AppConfig`
  /// produces both from the same source.
  pub fn new(classifier: ArchetypeClassifier, questions: Vec<QuestionConfig>) -> Self {
    Self {
      session: QuizSession::new(classifier),
      questions,
    }
  }

  /// The underlying session, for inspection.
  pub fn session(&self) -> &QuizSession {
    &self.session
  }

  /// Drive the quiz until the user quits or leaves a result standing.
  ///
  /// Returns the final outcome, or `None` if the user quit mid-walk.
  /// "Retake" at the result screen restarts the walk from question 0.
  ///
  /// # Errors
  /// Propagates input-channel failures from the command source.
  pub fn run<S: CommandSource, P: Presenter>(
    &mut self,
    source: &mut S,
    presenter: &mut P,
  ) -> Result<Option<QuizOutcome>> {
    loop {
      match self.session.phase() {
        QuizPhase::Asking { index } => {
          let question = &self.questions[index];
          presenter.show_question(
            &question.prompt,
            &question.options,
            self.session.position(),
            self.session.total(),
            self.session.percent_complete(),
          );

          match source.quiz_command()? {
            QuizCommand::Answer(choice) => {
              if let Err(rejected) = self.session.record_answer(choice) {
                warn!(%rejected, "quiz answer rejected");
                presenter.show_error(&rejected.to_string());
              }
            }
            QuizCommand::Back => {
              if !self.session.step_back() {
                presenter.show_error("already at the first question");
              }
            }
            QuizCommand::Restart => {
              debug!("quiz restarted mid-walk");
              self.session.restart();
            }
            QuizCommand::Quit => return Ok(None),
          }
        }
        QuizPhase::Complete { outcome } => {
          info!(archetype = %outcome.archetype, "quiz completed");
          presenter.show_quiz_result(&outcome);

          loop {
            match source.quiz_command()? {
              QuizCommand::Restart => {
                self.session.restart();
                break;
              }
              QuizCommand::Quit => return Ok(Some(outcome)),
              QuizCommand::Answer(_) | QuizCommand::Back => {
                presenter.show_error("quiz complete; retake or quit");
              }
            }
          }
        }
      }
    }
  }
}
