//! The `markbook init` command.

use std::path::Path;

use anyhow::Result;

use markbook_core::roster::Roster;

pub fn execute() -> Result<()> {
    // Create markbook.toml
    if Path::new("markbook.toml").exists() {
        println!("markbook.toml already exists, skipping.");
    } else {
        std::fs::write("markbook.toml", SAMPLE_CONFIG)?;
        println!("Created markbook.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("quizzes")?;
    let example_path = Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    // Create empty roster
    let roster_path = Path::new("trainees.json");
    if roster_path.exists() {
        println!("trainees.json already exists, skipping.");
    } else {
        Roster::default().save_json(roster_path)?;
        println!("Created trainees.json");
    }

    println!("\nNext steps:");
    println!("  1. Run: markbook add-trainee --name Sigma --email trainee@example.com --date-of-birth 1990-01-01");
    println!("  2. Run: markbook validate --quiz quizzes/example.toml");
    println!("  3. Run: markbook mark --quiz quizzes/example.toml --trainee trainee@example.com");
    println!("  4. Run: markbook report");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# markbook configuration

roster = "trainees.json"
quiz_dir = "quizzes"
output_dir = "./markbook-results"
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
name = "Arithmetic"
type = "multiple-choice"

[[questions]]
question = "What is 1 + 1? A:2 B:4 C:5 D:8"
chosen_answer = "A"
correct_answer = "A"

[[questions]]
question = "What is 2 + 2? A:2 B:4 C:5 D:8"
chosen_answer = "B"
correct_answer = "B"

[[questions]]
question = "What is 3 + 3? A:2 B:4 C:6 D:8"
chosen_answer = "C"
correct_answer = "C"

[[questions]]
question = "What is 4 + 4? A:2 B:4 C:5 D:8"
chosen_answer = "A"
correct_answer = "D"

[[questions]]
question = "What is 5 + 5? A:10 B:4 C:5 D:8"
chosen_answer = "B"
correct_answer = "A"
"#;
