//! Timed game engine.
//!
//! Asks every question in order and races each answer read against one
//! countdown that covers the whole game. The countdown is never reset.

use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::Instant;

use crate::model::{GameEnd, GameOutcome, GameReport, QuestionSet};
use crate::traits::{AnswerSource, GameReporter};

/// Default time budget for a whole game.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(30);

// Roughly 30 years; stands in for limits the clock can't represent
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// Configuration for the game engine.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Time budget for the entire question set, not per question.
    pub time_limit: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            time_limit: DEFAULT_TIME_LIMIT,
        }
    }
}

/// The timed game loop.
pub struct GameEngine {
    config: GameConfig,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Play a question set against an answer source.
    ///
    /// Each read runs in its own task that owns the source and hands it back
    /// together with the answer over a one-shot channel. When the countdown
    /// wins, the in-flight task is aborted and never awaited, and the tally so
    /// far is returned.
    pub async fn play<S: AnswerSource>(
        &self,
        questions: &QuestionSet,
        source: S,
        reporter: &dyn GameReporter,
    ) -> GameReport {
        let start = Instant::now();
        let deadline = start
            .checked_add(self.config.time_limit)
            .unwrap_or_else(|| start + FAR_FUTURE);
        let countdown = tokio::time::sleep_until(deadline);
        tokio::pin!(countdown);

        let mut outcome = GameOutcome::default();
        let mut source = source;

        tracing::debug!(
            "starting game: {} questions, {:?} limit",
            questions.len(),
            self.config.time_limit
        );

        for (index, question) in questions.iter().enumerate() {
            // The timer driver may not have fired yet for a deadline already behind us
            if Instant::now() >= deadline {
                return self.finish(questions, outcome, GameEnd::TimedOut, start, reporter);
            }

            reporter.on_question(index, question, &outcome);

            let (handoff_tx, handoff_rx) = oneshot::channel();
            let reader = tokio::spawn(async move {
                let answer = source.read_answer().await;
                let _ = handoff_tx.send((source, answer));
            });

            // Biased: when both are ready the countdown wins
            tokio::select! {
                biased;

                () = &mut countdown => {
                    reader.abort();
                    tracing::debug!("time limit reached on question {}", index + 1);
                    return self.finish(questions, outcome, GameEnd::TimedOut, start, reporter);
                }
                handoff = handoff_rx => match handoff {
                    Ok((returned, answer)) => {
                        source = returned;
                        let correct = question.is_correct(&answer);
                        outcome.record(correct);
                        tracing::trace!("question {} answered, correct: {correct}", index + 1);
                        reporter.on_answer(index, correct, &outcome);
                    }
                    Err(_) => {
                        // Reader died and took the source with it: nothing more can be read
                        tracing::error!(
                            "answer reader for question {} stopped without a result",
                            index + 1
                        );
                        (&mut countdown).await;
                        return self.finish(questions, outcome, GameEnd::TimedOut, start, reporter);
                    }
                },
            }
        }

        self.finish(questions, outcome, GameEnd::Exhausted, start, reporter)
    }

    fn finish(
        &self,
        questions: &QuestionSet,
        outcome: GameOutcome,
        ended: GameEnd,
        start: Instant,
        reporter: &dyn GameReporter,
    ) -> GameReport {
        let report = GameReport {
            outcome,
            total_questions: questions.len(),
            ended,
            elapsed_ms: start.elapsed().as_millis() as u64,
        };
        tracing::debug!("game {}: {}", report.ended, report.outcome);
        reporter.on_finish(&report);
        report
    }
}
