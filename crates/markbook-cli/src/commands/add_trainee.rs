//! The `markbook add-trainee` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use markbook_core::roster::Roster;
use markbook_core::trainee::Trainee;

use crate::config::load_config_from;

pub fn execute(
    name: String,
    email: String,
    date_of_birth: String,
    roster_path: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let date_of_birth = NaiveDate::parse_from_str(&date_of_birth, "%Y-%m-%d")
        .with_context(|| format!("invalid date of birth '{date_of_birth}' (expected YYYY-MM-DD)"))?;

    let config = load_config_from(config_path.as_deref())?;
    let roster_path = roster_path.unwrap_or(config.roster);

    let mut roster = Roster::load_or_default(&roster_path)?;
    let trainee = Trainee::new(name, email, date_of_birth);
    let summary = format!(
        "{} <{}>, age {}",
        trainee.name,
        trainee.email,
        trainee.get_age()
    );
    roster.add(trainee)?;
    roster.save_json(&roster_path)?;

    println!("Added trainee {summary} to {}", roster_path.display());
    Ok(())
}
