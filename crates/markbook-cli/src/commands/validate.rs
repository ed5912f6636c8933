//! The `markbook validate` command.

use std::path::PathBuf;

use anyhow::Result;

use markbook_core::parser;

use crate::config::load_config_from;

pub fn execute(quiz_path: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let quiz_path = match quiz_path {
        Some(p) => p,
        None => load_config_from(config_path.as_deref())?.quiz_dir,
    };

    let quizzes = if quiz_path.is_dir() {
        parser::load_quiz_directory(&quiz_path)?
    } else {
        vec![parser::parse_quiz(&quiz_path)?]
    };

    let mut total_warnings = 0;

    for quiz in &quizzes {
        println!(
            "Quiz: {} [{}] ({} questions)",
            quiz.name,
            quiz.quiz_type,
            quiz.questions.len()
        );

        let warnings = parser::validate_quiz(quiz);
        for w in &warnings {
            let prefix = w
                .question
                .map(|n| format!("  [Q{n}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quizzes valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
