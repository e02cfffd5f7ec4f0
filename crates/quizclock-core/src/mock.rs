//! Scripted answer source for testing.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::model::Answer;
use crate::traits::AnswerSource;

/// An answer source that plays back a fixed script.
///
/// Each scripted answer is delivered after its own delay, measured from the
/// start of the read that returns it. Once the script runs out every read
/// stalls forever.
pub struct ScriptedAnswers {
    script: VecDeque<(Duration, Answer)>,
    reads_started: Arc<AtomicUsize>,
}

impl ScriptedAnswers {
    /// Create a script with explicit per-answer delays.
    pub fn new(script: Vec<(Duration, Answer)>) -> Self {
        Self {
            script: script.into(),
            reads_started: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Create a script whose tokens are all available immediately.
    pub fn immediate(tokens: &[&str]) -> Self {
        Self::new(
            tokens
                .iter()
                .map(|t| (Duration::ZERO, Answer::token(*t)))
                .collect(),
        )
    }

    /// Shared counter of reads started, usable after the source has been
    /// moved into a game.
    pub fn reads_started(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reads_started)
    }
}

#[async_trait]
impl AnswerSource for ScriptedAnswers {
    async fn read_answer(&mut self) -> Answer {
        self.reads_started.fetch_add(1, Ordering::SeqCst);

        match self.script.pop_front() {
            Some((delay, answer)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                answer
            }
            None => std::future::pending().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn plays_back_in_order_then_stalls() {
        let mut source = ScriptedAnswers::new(vec![
            (Duration::ZERO, Answer::token("a")),
            (Duration::from_secs(2), Answer::Unreadable),
        ]);
        let reads = source.reads_started();

        assert_eq!(source.read_answer().await, Answer::token("a"));
        assert_eq!(source.read_answer().await, Answer::Unreadable);

        let stalled = tokio::time::timeout(Duration::from_secs(60), source.read_answer()).await;
        assert!(stalled.is_err());
        assert_eq!(reads.load(Ordering::SeqCst), 3);
    }
}
