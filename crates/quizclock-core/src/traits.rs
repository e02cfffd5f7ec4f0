//! Core trait definitions for answer sources and game reporters.
//!
//! Sources are implemented in [`crate::source`] and [`crate::mock`];
//! the console reporter lives in the `quizclock-report` crate.

use async_trait::async_trait;

use crate::model::{Answer, GameOutcome, GameReport, Question};

// ---------------------------------------------------------------------------
// Answer source trait
// ---------------------------------------------------------------------------

/// A sequential stream of typed answers.
///
/// The engine moves the source into a fresh task for every read and gets it
/// back through a one-shot handoff, so a source must be `Send + 'static`.
/// A read may never complete; the engine abandons it when the countdown fires.
#[async_trait]
pub trait AnswerSource: Send + 'static {
    /// Read the next answer.
    async fn read_answer(&mut self) -> Answer;
}

// ---------------------------------------------------------------------------
// Reporter trait
// ---------------------------------------------------------------------------

/// Presentation hooks called by the game loop, always from the loop itself.
pub trait GameReporter: Send + Sync {
    /// A question is about to be asked. `running` is the tally so far.
    fn on_question(&self, index: usize, question: &Question, running: &GameOutcome);
    /// An answer was scored. `running` already includes it.
    fn on_answer(&self, index: usize, correct: bool, running: &GameOutcome);
    /// The game ended. Called exactly once.
    fn on_finish(&self, report: &GameReport);
}

/// No-op game reporter.
pub struct NoopReporter;

impl GameReporter for NoopReporter {
    fn on_question(&self, _: usize, _: &Question, _: &GameOutcome) {}
    fn on_answer(&self, _: usize, _: bool, _: &GameOutcome) {}
    fn on_finish(&self, _: &GameReport) {}
}
