//! CSV question parser.
//!
//! Turns two-field rows into a [`QuestionSet`] and validates the result.
//! A row with any other field count aborts the whole parse.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::QuizError;
use crate::model::{Question, QuestionSet};

/// Build a question set from in-memory rows.
///
/// Rows are numbered from 1 in error messages.
pub fn parse_rows<I, R, F>(rows: I) -> Result<QuestionSet, QuizError>
where
    I: IntoIterator<Item = R>,
    R: AsRef<[F]>,
    F: AsRef<str>,
{
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| question_from_fields(i as u64 + 1, row.as_ref()))
        .collect()
}

/// Parse comma-separated questions from any reader.
///
/// There is no header row. Blank lines are skipped. Field trimming is done
/// here rather than by the CSV reader.
pub fn parse_csv_reader<R: Read>(reader: R) -> Result<QuestionSet, QuizError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::None)
        .from_reader(reader);

    let mut questions = Vec::new();
    for (i, record) in csv_reader.records().enumerate() {
        let record = record?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(i as u64 + 1);
        let fields: Vec<&str> = record.iter().collect();
        questions.push(question_from_fields(line, &fields)?);
    }

    Ok(QuestionSet::new(questions))
}

/// Parse questions from a string (useful for testing).
pub fn parse_csv_str(content: &str) -> Result<QuestionSet, QuizError> {
    parse_csv_reader(content.as_bytes())
}

/// Open and parse a question file.
pub fn load_question_file(path: &Path) -> Result<QuestionSet, QuizError> {
    let file = File::open(path).map_err(|source| QuizError::SourceUnavailable {
        path: path.display().to_string(),
        source,
    })?;

    let set = parse_csv_reader(file)?;
    tracing::debug!("loaded {} questions from {}", set.len(), path.display());
    Ok(set)
}

fn question_from_fields<F: AsRef<str>>(line: u64, fields: &[F]) -> Result<Question, QuizError> {
    match fields {
        [prompt, answer] => Ok(Question::new(prompt.as_ref(), answer.as_ref())),
        _ => Err(QuizError::MalformedRecord {
            line,
            found: fields.len(),
        }),
    }
}

/// A warning from question set validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based position of the question in the set, or `None` for warnings
    /// about the set as a whole.
    pub row: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Check a question set for entries that parse but cannot play well.
pub fn validate_question_set(set: &QuestionSet) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut seen_prompts: HashMap<&str, usize> = HashMap::new();

    if set.is_empty() {
        warnings.push(ValidationWarning {
            row: None,
            message: "question set is empty; a game would end immediately".into(),
        });
    }

    for (i, question) in set.iter().enumerate() {
        let row = i + 1;

        if question.prompt().is_empty() {
            warnings.push(ValidationWarning {
                row: Some(row),
                message: "prompt is empty".into(),
            });
        } else if let Some(first) = seen_prompts.insert(question.prompt(), row) {
            warnings.push(ValidationWarning {
                row: Some(row),
                message: format!("duplicate prompt (first seen in row {first})"),
            });
        }

        let answer = question.expected_answer();
        if answer.is_empty() {
            warnings.push(ValidationWarning {
                row: Some(row),
                message: "expected answer is empty".into(),
            });
        } else if answer.contains(char::is_whitespace) {
            // Answers are read one token at a time
            warnings.push(ValidationWarning {
                row: Some(row),
                message: format!(
                    "expected answer '{answer}' contains whitespace and can never match"
                ),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(set: &QuestionSet) -> Vec<(&str, &str)> {
        set.iter()
            .map(|q| (q.prompt(), q.expected_answer()))
            .collect()
    }

    #[test]
    fn parse_simple_csv() {
        let set = parse_csv_str("5+5,10\n1+1,2\n8+3,11").unwrap();
        assert_eq!(pairs(&set), vec![("5+5", "10"), ("1+1", "2"), ("8+3", "11")]);
    }

    #[test]
    fn parse_trims_leading_tabs() {
        let set = parse_csv_str("\t5+5,\t10\n\t1+1,\t2\n\t8+3,\t11").unwrap();
        assert_eq!(pairs(&set), vec![("5+5", "10"), ("1+1", "2"), ("8+3", "11")]);
    }

    #[test]
    fn parse_trims_trailing_tabs() {
        let set = parse_csv_str("5+5\t,10\t\n1+1\t,2\t\n8+3\t,11\t").unwrap();
        assert_eq!(pairs(&set), vec![("5+5", "10"), ("1+1", "2"), ("8+3", "11")]);
    }

    #[test]
    fn parse_empty_input() {
        let set = parse_csv_str("").unwrap();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn parse_quoted_prompt_with_comma() {
        let set = parse_csv_str("\"what is 3,000 + 1?\",3001\n").unwrap();
        assert_eq!(pairs(&set), vec![("what is 3,000 + 1?", "3001")]);
    }

    #[test]
    fn reject_single_column() {
        let err = parse_csv_str("\n\t5+5\n\t1+1,\n\t8+3").unwrap_err();
        assert!(
            matches!(err, QuizError::MalformedRecord { found: 1, .. }),
            "got {err:?}"
        );
    }

    #[test]
    fn reject_three_columns() {
        let err = parse_csv_str("5+5,10,really???\n1+1,2,zzzz\n8+3,11,blubbi").unwrap_err();
        assert!(matches!(
            err,
            QuizError::MalformedRecord { line: 1, found: 3 }
        ));
    }

    #[test]
    fn reject_malformed_last_line() {
        let err = parse_csv_str("5+5,10\n1+1,2\nblubbi!!!!!!blub :O").unwrap_err();
        assert!(matches!(
            err,
            QuizError::MalformedRecord { line: 3, found: 1 }
        ));
    }

    #[test]
    fn parse_rows_preserves_order_and_trims() {
        let rows = vec![
            vec!["\t5+5", "10 "],
            vec!["1+1", "2"],
            vec!["8+3", "\t11"],
        ];
        let set = parse_rows(&rows).unwrap();
        assert_eq!(set.len(), rows.len());
        assert_eq!(pairs(&set), vec![("5+5", "10"), ("1+1", "2"), ("8+3", "11")]);
    }

    #[test]
    fn parse_rows_rejects_any_bad_row() {
        let rows: Vec<Vec<String>> = vec![
            vec!["1+1".into(), "2".into()],
            vec!["2+2".into(), "4".into(), "extra".into()],
        ];
        let err = parse_rows(rows).unwrap_err();
        assert!(matches!(
            err,
            QuizError::MalformedRecord { line: 2, found: 3 }
        ));

        let empty_row: Vec<Vec<&str>> = vec![vec![]];
        assert!(parse_rows(empty_row).is_err());
    }

    #[test]
    fn parse_rows_empty() {
        let rows: Vec<Vec<&str>> = Vec::new();
        assert!(parse_rows(rows).unwrap().is_empty());
    }

    #[test]
    fn load_missing_file() {
        let err = load_question_file(Path::new("./ljkasjf908asfasfia.gopher")).unwrap_err();
        assert!(err.is_unavailable());
    }

    #[test]
    fn load_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("problems.csv");
        std::fs::write(&path, "5+5,10\n7+3,10\n").unwrap();

        let set = load_question_file(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(1).unwrap().prompt(), "7+3");
    }

    #[test]
    fn validate_flags_unplayable_entries() {
        let set = parse_csv_str("5+5,10\n5+5,10\n,3\nname a color,light blue\nempty,\n").unwrap();
        let warnings = validate_question_set(&set);

        assert!(warnings
            .iter()
            .any(|w| w.row == Some(2) && w.message.contains("duplicate")));
        assert!(warnings
            .iter()
            .any(|w| w.row == Some(3) && w.message.contains("prompt is empty")));
        assert!(warnings
            .iter()
            .any(|w| w.row == Some(4) && w.message.contains("whitespace")));
        assert!(warnings
            .iter()
            .any(|w| w.row == Some(5) && w.message.contains("answer is empty")));
    }

    #[test]
    fn validate_empty_set_warns_once() {
        let warnings = validate_question_set(&QuestionSet::default());
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].row, None);
        assert!(warnings[0].message.contains("question set is empty"));
    }

    #[test]
    fn validate_clean_set() {
        let set = parse_csv_str("5+5,10\n1+1,2\n").unwrap();
        assert!(validate_question_set(&set).is_empty());
    }
}
