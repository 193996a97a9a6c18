//! Integration Tests - End-to-end Widget Loops
//!
//! Tests the interaction between usecases, ports, and mock adapters.
//! Uses mockall to script user command sequences and assert on what the
//! presenter was asked to render.

use mockall::Sequence;
use mockall::mock;
use rust_decimal_macros::dec;

use agent_fit::config::loader::load_config;
use agent_fit::domain::archetype::{Archetype, ArchetypeClassifier, QuizOutcome};
use agent_fit::domain::commission::{
    CalculatorInputs, CommissionBreakdown, CommissionCalculator, SplitScheme,
};
use agent_fit::ports::input::{CalculatorCommand, MenuChoice, QuizCommand};
use agent_fit::usecases::{CalculatorSession, QuizEngine};

// ---- Mock Definitions ----

mock! {
    pub Source {}

    impl agent_fit::ports::input::CommandSource for Source {
        fn menu_choice(&mut self) -> anyhow::Result<MenuChoice>;
        fn calculator_command(&mut self) -> anyhow::Result<CalculatorCommand>;
        fn quiz_command(&mut self) -> anyhow::Result<QuizCommand>;
    }
}

mock! {
    pub Screen {}

    impl agent_fit::ports::presenter::Presenter for Screen {
        fn show_welcome(&mut self);
        fn show_menu(&mut self);
        fn show_breakdown(
            &mut self,
            inputs: &CalculatorInputs,
            breakdown: &CommissionBreakdown,
        );
        fn show_question(
            &mut self,
            prompt: &str,
            options: &[String],
            position: usize,
            total: usize,
            percent: u32,
        );
        fn show_quiz_result(&mut self, outcome: &QuizOutcome);
        fn show_error(&mut self, message: &str);
    }
}

fn quiz_engine() -> QuizEngine {
    let questions = (0..5)
        .map(|i| agent_fit::config::QuestionConfig {
            prompt: format!("question {i}"),
            options: vec![
                "a".to_string(),
                "b".to_string(),
                "c".to_string(),
                "d".to_string(),
            ],
        })
        .collect();
    QuizEngine::new(ArchetypeClassifier::new(5), questions)
}

fn script_quiz_commands(source: &mut MockSource, commands: Vec<QuizCommand>) {
    let mut seq = Sequence::new();
    for command in commands {
        source
            .expect_quiz_command()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || Ok(command));
    }
}

// ---- Quiz walk ----

#[test]
fn test_full_quiz_walk_classifies_plurality() {
    let mut source = MockSource::new();
    let mut screen = MockScreen::new();

    script_quiz_commands(
        &mut source,
        vec![
            QuizCommand::Answer(0),
            QuizCommand::Answer(0),
            QuizCommand::Answer(0),
            QuizCommand::Answer(1),
            QuizCommand::Answer(2),
            QuizCommand::Quit,
        ],
    );
    screen.expect_show_question().times(5).return_const(());
    screen
        .expect_show_quiz_result()
        .withf(|outcome| outcome.archetype == Archetype::Accelerator)
        .times(1)
        .return_const(());

    let outcome = quiz_engine().run(&mut source, &mut screen).unwrap().unwrap();
    assert_eq!(outcome.archetype, Archetype::Accelerator);
    assert_eq!(outcome.tally.counts(), [3, 1, 1, 0]);
}

#[test]
fn test_quiz_tie_breaks_to_first_archetype() {
    let mut source = MockSource::new();
    let mut screen = MockScreen::new();

    script_quiz_commands(
        &mut source,
        vec![
            QuizCommand::Answer(0),
            QuizCommand::Answer(1),
            QuizCommand::Answer(0),
            QuizCommand::Answer(1),
            QuizCommand::Answer(2),
            QuizCommand::Quit,
        ],
    );
    screen.expect_show_question().times(5).return_const(());
    screen
        .expect_show_quiz_result()
        .withf(|outcome| outcome.archetype == Archetype::Accelerator)
        .times(1)
        .return_const(());

    let outcome = quiz_engine().run(&mut source, &mut screen).unwrap().unwrap();
    assert_eq!(outcome.tally.counts(), [2, 2, 1, 0]);
}

#[test]
fn test_back_drops_answer_and_reasks() {
    let mut source = MockSource::new();
    let mut screen = MockScreen::new();

    // Answer question 0, back up, then answer the sheet that wins for
    // Accelerator. The replaced first answer must not be counted.
    script_quiz_commands(
        &mut source,
        vec![
            QuizCommand::Answer(3),
            QuizCommand::Back,
            QuizCommand::Answer(0),
            QuizCommand::Answer(0),
            QuizCommand::Answer(0),
            QuizCommand::Answer(1),
            QuizCommand::Answer(2),
            QuizCommand::Quit,
        ],
    );
    screen.expect_show_question().times(7).return_const(());
    screen.expect_show_quiz_result().times(1).return_const(());

    let outcome = quiz_engine().run(&mut source, &mut screen).unwrap().unwrap();
    assert_eq!(outcome.archetype, Archetype::Accelerator);
    assert_eq!(outcome.tally.count(Archetype::Innovator), 0);
}

#[test]
fn test_back_at_first_question_reports_error() {
    let mut source = MockSource::new();
    let mut screen = MockScreen::new();

    script_quiz_commands(&mut source, vec![QuizCommand::Back, QuizCommand::Quit]);
    screen.expect_show_question().times(2).return_const(());
    screen
        .expect_show_error()
        .withf(|message| message.contains("first question"))
        .times(1)
        .return_const(());

    let outcome = quiz_engine().run(&mut source, &mut screen).unwrap();
    assert!(outcome.is_none());
}

#[test]
fn test_retake_restarts_from_question_zero() {
    let mut source = MockSource::new();
    let mut screen = MockScreen::new();

    // Complete once (all Collaborator), retake, quit on the first question.
    let mut commands = vec![QuizCommand::Answer(1); 5];
    commands.push(QuizCommand::Restart);
    commands.push(QuizCommand::Quit);
    script_quiz_commands(&mut source, commands);

    screen.expect_show_question().times(6).return_const(());
    screen
        .expect_show_quiz_result()
        .withf(|outcome| outcome.archetype == Archetype::Collaborator)
        .times(1)
        .return_const(());

    let outcome = quiz_engine().run(&mut source, &mut screen).unwrap();
    // Quit happened mid-walk after the retake, so no result stands.
    assert!(outcome.is_none());
}

// ---- Calculator loop ----

#[test]
fn test_calculator_recomputes_on_every_change() {
    let mut source = MockSource::new();
    let mut screen = MockScreen::new();

    let mut seq = Sequence::new();
    for command in [
        CalculatorCommand::SetTransactions(20),
        CalculatorCommand::SetScheme(SplitScheme::StandardFlat),
        CalculatorCommand::SetPrice(dec!(50)),
        CalculatorCommand::Quit,
    ] {
        source
            .expect_calculator_command()
            .times(1)
            .in_sequence(&mut seq)
            .returning(move || Ok(command));
    }

    let mut render = Sequence::new();
    screen
        .expect_show_breakdown()
        .withf(|_, breakdown| breakdown.agent_split == dec!(0.85))
        .times(1)
        .in_sequence(&mut render)
        .return_const(());
    screen
        .expect_show_breakdown()
        .withf(|_, breakdown| breakdown.agent_split == dec!(0.90))
        .times(1)
        .in_sequence(&mut render)
        .return_const(());
    screen
        .expect_show_breakdown()
        .withf(|inputs, breakdown| {
            inputs.scheme() == SplitScheme::StandardFlat
                && breakdown.agent_split == dec!(0.50)
        })
        .times(1)
        .in_sequence(&mut render)
        .return_const(());
    screen
        .expect_show_error()
        .withf(|message| message.contains("average_price"))
        .times(1)
        .in_sequence(&mut render)
        .return_const(());

    let inputs =
        CalculatorInputs::new(12, dec!(350000), dec!(3), SplitScheme::Tiered).unwrap();
    let mut session = CalculatorSession::new(CommissionCalculator::standard(), inputs);
    session.run(&mut source, &mut screen).unwrap();

    // The rejected price change left the held inputs untouched.
    assert_eq!(session.inputs().average_price(), dec!(350000));
}

// ---- Shipped configuration ----

#[test]
fn test_shipped_config_loads_and_computes_default_breakdown() {
    let config = load_config("config.toml").unwrap();

    assert_eq!(config.quiz.questions.len(), 5);
    assert_eq!(config.quiz.archetypes.len(), 4);

    let calc = config.commission_calculator();
    let breakdown = calc.breakdown(&config.default_inputs().unwrap());
    assert_eq!(breakdown.total_volume, dec!(4200000));
    assert_eq!(breakdown.total_commission, dec!(126000));
    assert_eq!(breakdown.agent_split, dec!(0.85));
    assert_eq!(breakdown.agent_earnings, dec!(107100));
    assert_eq!(breakdown.brokerage_earnings, dec!(18900));
}
