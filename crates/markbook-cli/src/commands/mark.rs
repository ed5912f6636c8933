//! The `markbook mark` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;

use markbook_core::assessment::Assessment;
use markbook_core::marking::{Marking, QuestionResult};
use markbook_core::parser;
use markbook_core::roster::Roster;

use crate::config::load_config_from;

#[derive(Serialize)]
struct MarkOutput<'a> {
    quiz: &'a str,
    results: Vec<QuestionResult>,
    percentage: u32,
    assessment: &'a Assessment,
    adjusted_score: f64,
}

pub fn execute(
    quiz_path: PathBuf,
    trainee: Option<String>,
    roster_path: Option<PathBuf>,
    format: String,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        matches!(format.as_str(), "text" | "json"),
        "unknown format '{format}' (expected text or json)"
    );

    let quiz = parser::parse_quiz(&quiz_path)?;
    let marking = Marking::new(&quiz);
    let assessment = marking
        .generate_assessment()
        .with_context(|| format!("cannot record quiz '{}'", quiz.name))?;

    if format == "json" {
        let output = MarkOutput {
            quiz: &quiz.name,
            results: marking.results(),
            percentage: marking.mark(),
            assessment: &assessment,
            adjusted_score: assessment.calculate_score(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_text(&marking, &assessment);
    }

    if let Some(email) = trainee {
        let config = load_config_from(config_path.as_deref())?;
        let roster_path = roster_path.unwrap_or(config.roster);
        let mut roster = Roster::load_json(&roster_path)?;
        let entry = roster.find_mut(&email).with_context(|| {
            format!("trainee {email} not found in {}", roster_path.display())
        })?;
        entry.add_assessment(assessment);
        roster.save_json(&roster_path)?;
        eprintln!(
            "Recorded '{}' for {email} in {}",
            quiz.name,
            roster_path.display()
        );
    }

    Ok(())
}

fn print_text(marking: &Marking<'_>, assessment: &Assessment) {
    let quiz = marking.quiz();
    println!(
        "Quiz: {} ({}, {} questions)",
        quiz.name,
        quiz.quiz_type,
        quiz.questions.len()
    );
    for (i, r) in marking.results().iter().enumerate() {
        if r.is_correct {
            println!("  [{}] OK    {}", i + 1, r.question);
        } else {
            println!(
                "  [{}] WRONG {} (chosen: {:?}, correct: {:?})",
                i + 1,
                r.question,
                r.chosen_answer,
                r.correct_answer
            );
        }
    }
    println!(
        "Mark: {}% ({}/{} correct)",
        marking.mark(),
        marking.correct_count(),
        quiz.questions.len()
    );
    println!(
        "Adjusted score ({}): {:.1}",
        assessment.assessment_type(),
        assessment.calculate_score()
    );
}
