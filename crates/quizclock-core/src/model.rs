//! Core data model types for quizclock.
//!
//! Questions are built once by the parser and only read afterwards; the
//! outcome counters are owned and mutated by the game loop alone.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single prompt and the answer that scores it as correct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    prompt: String,
    expected_answer: String,
}

impl Question {
    /// Build a question, trimming surrounding whitespace from both fields.
    pub fn new(prompt: &str, expected_answer: &str) -> Self {
        Self {
            prompt: prompt.trim().to_string(),
            expected_answer: expected_answer.trim().to_string(),
        }
    }

    /// The text shown to the player.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// The exact answer that counts as correct.
    pub fn expected_answer(&self) -> &str {
        &self.expected_answer
    }

    /// Check a typed answer. Comparison is exact and case-sensitive.
    pub fn is_correct(&self, answer: &Answer) -> bool {
        match answer {
            Answer::Token(token) => token == &self.expected_answer,
            Answer::Unreadable => false,
        }
    }
}

/// An ordered collection of questions, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

impl FromIterator<Question> for QuestionSet {
    fn from_iter<I: IntoIterator<Item = Question>>(iter: I) -> Self {
        Self {
            questions: iter.into_iter().collect(),
        }
    }
}

/// One value read from the answer stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// A whitespace-delimited token as typed.
    Token(String),
    /// The stream produced something that could not be read as text.
    Unreadable,
}

impl Answer {
    pub fn token(s: impl Into<String>) -> Self {
        Answer::Token(s.into())
    }
}

/// Running tally of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub correct: u32,
    pub wrong: u32,
}

impl GameOutcome {
    /// Number of questions that received an answer.
    pub fn answered(&self) -> u32 {
        self.correct + self.wrong
    }

    /// Tally one answer.
    pub fn record(&mut self, correct: bool) {
        if correct {
            self.correct += 1;
        } else {
            self.wrong += 1;
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} correct, {} wrong", self.correct, self.wrong)
    }
}

/// Why a game stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEnd {
    /// Every question received an answer before the countdown fired.
    Exhausted,
    /// The countdown fired first.
    TimedOut,
}

impl fmt::Display for GameEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEnd::Exhausted => write!(f, "exhausted"),
            GameEnd::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Final result of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameReport {
    /// Final tally.
    pub outcome: GameOutcome,
    /// Size of the question set that was played.
    pub total_questions: usize,
    /// How the game ended.
    pub ended: GameEnd,
    /// Wall-clock duration of the game in milliseconds.
    pub elapsed_ms: u64,
}

impl GameReport {
    /// Questions that were never answered.
    pub fn unanswered(&self) -> usize {
        self.total_questions
            .saturating_sub(self.outcome.answered() as usize)
    }
}
