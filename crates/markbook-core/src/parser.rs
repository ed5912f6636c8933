//! TOML quiz parser.
//!
//! Loads quizzes from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::assessment::AssessmentType;
use crate::quiz::{Question, Quiz};

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    name: String,
    #[serde(rename = "type")]
    quiz_type: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    question: String,
    #[serde(default)]
    chosen_answer: String,
    correct_answer: String,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question::new(q.question, q.chosen_answer, q.correct_answer))
        .collect();

    Ok(Quiz::new(questions, parsed.quiz.name, parsed.quiz.quiz_type))
}

/// Recursively load all `.toml` quiz files from a directory, ordered by path.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut paths = Vec::new();
    collect_toml_files(dir, &mut paths)?;
    paths.sort();

    let mut quizzes = Vec::new();
    for path in paths {
        match parse_quiz(&path) {
            Ok(quiz) => quizzes.push(quiz),
            Err(e) => {
                tracing::warn!("skipping {}: {:#}", path.display(), e);
            }
        }
    }

    Ok(quizzes)
}

fn collect_toml_files(dir: &Path, out: &mut Vec<std::path::PathBuf>) -> Result<()> {
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_dir() {
            collect_toml_files(&path, out)?;
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            out.push(path);
        }
    }
    Ok(())
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// 1-based question index (if applicable).
    pub question: Option<usize>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for common issues.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if quiz.quiz_type.parse::<AssessmentType>().is_err() {
        warnings.push(ValidationWarning {
            question: None,
            message: format!(
                "unknown quiz type '{}' (expected one of: {})",
                quiz.quiz_type,
                AssessmentType::ALL.map(|t| t.as_str()).join(", ")
            ),
        });
    }

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning {
            question: None,
            message: "quiz has no questions and will always mark 0".into(),
        });
    }

    let mut seen = std::collections::HashSet::new();
    for (i, q) in quiz.questions.iter().enumerate() {
        let index = Some(i + 1);
        if q.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                question: index,
                message: "question text is empty".into(),
            });
        } else if !seen.insert(q.question.as_str()) {
            warnings.push(ValidationWarning {
                question: index,
                message: format!("duplicate question: {}", q.question),
            });
        }
        if q.correct_answer.is_empty() {
            warnings.push(ValidationWarning {
                question: index,
                message: "correct_answer is empty".into(),
            });
        }
    }

    warnings
}
