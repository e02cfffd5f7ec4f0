//! Plain line-based console output.

use std::time::Duration;

use colored::Colorize;

use quizclock_core::model::{GameEnd, GameOutcome, GameReport, Question};
use quizclock_core::traits::GameReporter;

const RULE: &str = "--------------------------------------------------------------";

const ART: &str = r"
  ___  _   _ ___ _____ ____ _     ___   ____ _  __
 / _ \| | | |_ _|__  // ___| |   / _ \ / ___| |/ /
| | | | | | || |  / /| |   | |  | | | | |   | ' /
| |_| | |_| || | / /_| |___| |__| |_| | |___| . \
 \__\_\\___/|___/____|\____|_____\___/ \____|_|\_\
";

/// Force colours on or off for the whole process.
pub fn set_color_enabled(enabled: bool) {
    colored::control::set_override(enabled);
}

/// Banner shown before the first question.
pub fn format_banner(question_count: usize, limit: Duration) -> String {
    let plural = if question_count == 1 { "" } else { "s" };
    format!(
        "{RULE}{}{RULE}\n{question_count} question{plural}, {} second(s) on the clock.\n\
         Type each answer and press Enter.\n",
        ART.bold(),
        limit.as_secs()
    )
}

/// `correct: N, wrong: M` with the counts coloured.
pub fn format_stats_line(outcome: &GameOutcome) -> String {
    format!(
        "correct: {}, wrong: {}",
        outcome.correct.to_string().green(),
        outcome.wrong.to_string().red()
    )
}

/// `#i: prompt ?`, numbered from 1.
pub fn format_problem_line(index: usize, question: &Question) -> String {
    format!("#{}: {} ?", index + 1, question.prompt())
        .blue()
        .to_string()
}

/// Final result block.
pub fn format_result(report: &GameReport) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    if report.ended == GameEnd::TimedOut {
        out.push_str(&format!("{}\n", "Time is up!".yellow().bold()));
    }
    out.push_str(&format!(
        "You guessed {} out of {} correctly!\n",
        report.outcome.correct,
        report.outcome.answered()
    ));
    out.push_str(RULE);
    out
}

/// Prints game progress to stdout.
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn print_banner(&self, question_count: usize, limit: Duration) {
        println!("{}", format_banner(question_count, limit));
    }
}

impl GameReporter for ConsoleReporter {
    fn on_question(&self, index: usize, question: &Question, running: &GameOutcome) {
        println!("{}", format_stats_line(running));
        println!("{}", format_problem_line(index, question));
    }

    fn on_answer(&self, index: usize, correct: bool, _running: &GameOutcome) {
        tracing::trace!("question {} scored, correct: {correct}", index + 1);
    }

    fn on_finish(&self, report: &GameReport) {
        println!("{}", format_result(report));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        set_color_enabled(false);
    }

    #[test]
    fn stats_line() {
        plain();
        let outcome = GameOutcome {
            correct: 2,
            wrong: 1,
        };
        assert_eq!(format_stats_line(&outcome), "correct: 2, wrong: 1");
    }

    #[test]
    fn problem_line_is_one_based() {
        plain();
        let q = Question::new("5+5", "10");
        assert_eq!(format_problem_line(0, &q), "#1: 5+5 ?");
        assert_eq!(format_problem_line(9, &q), "#10: 5+5 ?");
    }

    #[test]
    fn result_counts_answered_questions() {
        plain();
        let report = GameReport {
            outcome: GameOutcome {
                correct: 1,
                wrong: 1,
            },
            total_questions: 5,
            ended: GameEnd::Exhausted,
            elapsed_ms: 1200,
        };
        let text = format_result(&report);
        assert!(text.contains("You guessed 1 out of 2 correctly!"));
        assert!(!text.contains("Time is up"));
    }

    #[test]
    fn result_mentions_timeout() {
        plain();
        let report = GameReport {
            outcome: GameOutcome::default(),
            total_questions: 3,
            ended: GameEnd::TimedOut,
            elapsed_ms: 30_000,
        };
        let text = format_result(&report);
        assert!(text.starts_with(RULE));
        assert!(text.contains("Time is up!"));
        assert!(text.contains("You guessed 0 out of 0 correctly!"));
    }

    #[test]
    fn banner_mentions_budget() {
        plain();
        let banner = format_banner(3, Duration::from_secs(30));
        assert!(banner.starts_with(RULE));
        assert!(banner.contains(r" \__\_\\___/|___/____|"));
        assert!(banner.contains("3 questions, 30 second(s) on the clock."));
        assert!(format_banner(1, Duration::from_secs(5)).contains("1 question,"));
    }
}
