//! The `quizclock validate` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use quizclock_core::model::QuestionSet;
use quizclock_core::parser;

use crate::config::load_config_from;

pub fn execute(filename: Option<PathBuf>, list: bool, config_path: Option<PathBuf>) -> Result<()> {
    let filename = match filename {
        Some(f) => f,
        None => load_config_from(config_path.as_deref())?.filename,
    };

    let set = parser::load_question_file(&filename)
        .with_context(|| format!("failed to load questions from {}", filename.display()))?;

    println!("Question set: {} ({} questions)", filename.display(), set.len());

    if list {
        print_questions(&set);
    }

    let warnings = parser::validate_question_set(&set);
    for w in &warnings {
        let prefix = w
            .row
            .map(|row| format!("  [#{row}]"))
            .unwrap_or_else(|| "  [set]".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("All questions valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}

fn print_questions(set: &QuestionSet) {
    let mut table = Table::new();
    table.set_header(vec!["#", "Prompt", "Answer"]);

    for (i, question) in set.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(question.prompt()),
            Cell::new(question.expected_answer()),
        ]);
    }

    println!("{table}");
}
