//! Roster reports with JSON persistence and markdown output.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::assessment::{Assessment, AssessmentType};
use crate::roster::Roster;
use crate::trainee::Trainee;

/// A report over every trainee in a roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Date ages were computed against.
    pub as_of: NaiveDate,
    /// One summary per trainee, in roster order.
    pub trainees: Vec<TraineeSummary>,
}

/// Summary statistics for one trainee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraineeSummary {
    pub name: String,
    pub email: String,
    pub age: i32,
    pub assessment_count: usize,
    /// Mean raw score across all assessments.
    pub mean_score: Option<f64>,
    /// Mean adjusted score across all assessments.
    pub mean_adjusted_score: Option<f64>,
    /// Breakdown per assessment type, in [`AssessmentType::ALL`] order.
    pub per_type: Vec<TypeStats>,
}

/// Statistics for the assessments of one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeStats {
    pub assessment_type: AssessmentType,
    pub count: usize,
    pub mean_score: Option<f64>,
    pub mean_adjusted_score: Option<f64>,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

fn type_stats(assessment_type: AssessmentType, assessments: &[&Assessment]) -> TypeStats {
    TypeStats {
        assessment_type,
        count: assessments.len(),
        mean_score: mean(assessments.iter().map(|a| a.score())),
        mean_adjusted_score: mean(assessments.iter().map(|a| a.calculate_score())),
    }
}

impl TraineeSummary {
    pub fn from_trainee(trainee: &Trainee, today: NaiveDate) -> Self {
        let all = trainee.assessments();
        let per_type = AssessmentType::ALL
            .into_iter()
            .map(|t| type_stats(t, &trainee.get_assessment_of_type(t)))
            .collect();

        Self {
            name: trainee.name.clone(),
            email: trainee.email.clone(),
            age: trainee.age_on(today),
            assessment_count: all.len(),
            mean_score: mean(all.iter().map(|a| a.score())),
            mean_adjusted_score: mean(all.iter().map(|a| a.calculate_score())),
            per_type,
        }
    }

    /// Stats for one type.
    pub fn stats_for(&self, assessment_type: AssessmentType) -> Option<&TypeStats> {
        self.per_type
            .iter()
            .find(|s| s.assessment_type == assessment_type)
    }
}

impl RosterReport {
    pub fn build(roster: &Roster, today: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            as_of: today,
            trainees: roster
                .trainees
                .iter()
                .map(|t| TraineeSummary::from_trainee(t, today))
                .collect(),
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: RosterReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**Roster report** as of {}: {} trainee(s)\n\n",
            self.as_of,
            self.trainees.len()
        ));

        if self.trainees.is_empty() {
            return md;
        }

        md.push_str("| Trainee | Email | Age | Assessments | Mean | Adjusted |\n");
        md.push_str("|---------|-------|-----|-------------|------|----------|\n");
        for t in &self.trainees {
            md.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                t.name,
                t.email,
                t.age,
                t.assessment_count,
                fmt_score(t.mean_score),
                fmt_score(t.mean_adjusted_score)
            ));
        }
        md.push('\n');

        md.push_str("### By type\n\n");
        md.push_str("| Trainee | Type | Count | Mean | Adjusted |\n");
        md.push_str("|---------|------|-------|------|----------|\n");
        for t in &self.trainees {
            for s in t.per_type.iter().filter(|s| s.count > 0) {
                md.push_str(&format!(
                    "| {} | {} | {} | {} | {} |\n",
                    t.email,
                    s.assessment_type,
                    s.count,
                    fmt_score(s.mean_score),
                    fmt_score(s.mean_adjusted_score)
                ));
            }
        }

        md
    }
}

/// Render an optional score with one decimal, `-` when absent.
pub fn fmt_score(score: Option<f64>) -> String {
    score
        .map(|s| format!("{s:.1}"))
        .unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_roster() -> Roster {
        let mut sigma = Trainee::new("Sigma", "sigma@example.com", date(1990, 1, 1));
        sigma.add_assessment(Assessment::multiple_choice("Python Basics", 90.0).unwrap());
        sigma.add_assessment(Assessment::technical("Python Data Structures", 60.0).unwrap());
        sigma.add_assessment(Assessment::multiple_choice("Python OOP", 30.0).unwrap());

        let fresh = Trainee::new("Fresh", "fresh@example.com", date(2000, 6, 15));

        Roster {
            trainees: vec![sigma, fresh],
        }
    }

    #[test]
    fn summary_statistics() {
        let roster = make_roster();
        let report = RosterReport::build(&roster, date(2024, 6, 14));
        let sigma = &report.trainees[0];

        assert_eq!(sigma.age, 34);
        assert_eq!(sigma.assessment_count, 3);
        assert!((sigma.mean_score.unwrap() - 60.0).abs() < 1e-9);
        // (63 + 60 + 21) / 3
        assert!((sigma.mean_adjusted_score.unwrap() - 48.0).abs() < 1e-9);

        let mc = sigma.stats_for(AssessmentType::MultipleChoice).unwrap();
        assert_eq!(mc.count, 2);
        assert!((mc.mean_score.unwrap() - 60.0).abs() < 1e-9);
        assert!((mc.mean_adjusted_score.unwrap() - 42.0).abs() < 1e-9);

        let pres = sigma.stats_for(AssessmentType::Presentation).unwrap();
        assert_eq!(pres.count, 0);
        assert!(pres.mean_score.is_none());
    }

    #[test]
    fn empty_trainee_has_no_means() {
        let roster = make_roster();
        let report = RosterReport::build(&roster, date(2024, 6, 14));
        let fresh = &report.trainees[1];
        assert_eq!(fresh.age, 23);
        assert_eq!(fresh.assessment_count, 0);
        assert!(fresh.mean_score.is_none());
        assert!(fresh.mean_adjusted_score.is_none());
    }

    #[test]
    fn markdown_output() {
        let report = RosterReport::build(&make_roster(), date(2024, 6, 14));
        let md = report.to_markdown();
        assert!(md.contains("2 trainee(s)"));
        assert!(md.contains("| Sigma | sigma@example.com | 34 | 3 | 60.0 | 48.0 |"));
        assert!(md.contains("| Fresh | fresh@example.com | 23 | 0 | - | - |"));
        assert!(md.contains("| sigma@example.com | multiple-choice | 2 | 60.0 | 42.0 |"));
    }

    #[test]
    fn json_roundtrip() {
        let report = RosterReport::build(&make_roster(), date(2024, 6, 14));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        report.save_json(&path).unwrap();
        let loaded = RosterReport::load_json(&path).unwrap();

        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.trainees.len(), 2);
        assert_eq!(loaded.as_of, date(2024, 6, 14));
    }
}
