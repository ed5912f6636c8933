//! The `markbook report` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use markbook_core::assessment::AssessmentType;
use markbook_core::report::{fmt_score, RosterReport};
use markbook_core::roster::Roster;

use crate::config::load_config_from;

pub fn execute(
    roster_path: Option<PathBuf>,
    format: String,
    save: bool,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let roster_path = roster_path.unwrap_or(config.roster);
    let roster = Roster::load_json(&roster_path)?;

    let today = chrono::Local::now().date_naive();
    let report = RosterReport::build(&roster, today);

    let (rendered, ext) = match format.as_str() {
        "json" => (serde_json::to_string_pretty(&report)?, "json"),
        "markdown" | "md" => (report.to_markdown(), "md"),
        "text" => (summary_table(&report).to_string(), "txt"),
        other => anyhow::bail!("unknown format '{other}' (expected text, json or markdown)"),
    };
    println!("{rendered}");

    if save {
        let output = output.unwrap_or(config.output_dir);
        std::fs::create_dir_all(&output)?;
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H%M%S");
        let path = output.join(format!("report-{timestamp}.{ext}"));
        if ext == "json" {
            report.save_json(&path)?;
        } else {
            std::fs::write(&path, &rendered)?;
        }
        eprintln!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn summary_table(report: &RosterReport) -> Table {
    let mut table = Table::new();
    let mut header = vec![
        "Trainee".to_string(),
        "Email".to_string(),
        "Age".to_string(),
        "Assessments".to_string(),
        "Mean".to_string(),
        "Adjusted".to_string(),
    ];
    header.extend(AssessmentType::ALL.iter().map(|t| format!("{t} (adj.)")));
    table.set_header(header);

    for t in &report.trainees {
        let mut row = vec![
            Cell::new(&t.name),
            Cell::new(&t.email),
            Cell::new(t.age),
            Cell::new(t.assessment_count),
            Cell::new(fmt_score(t.mean_score)),
            Cell::new(fmt_score(t.mean_adjusted_score)),
        ];
        row.extend(AssessmentType::ALL.iter().map(|&ty| {
            Cell::new(fmt_score(
                t.stats_for(ty).and_then(|s| s.mean_adjusted_score),
            ))
        }));
        table.add_row(row);
    }

    table
}
