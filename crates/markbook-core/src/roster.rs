//! JSON-persisted roster of trainees.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::trainee::Trainee;

/// All trainees tracked in one roster file, keyed by email.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub trainees: Vec<Trainee>,
}

impl Roster {
    /// Save the roster as pretty JSON, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize roster")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write roster to {}", path.display()))?;
        Ok(())
    }

    /// Load a roster from a JSON file.
    ///
    /// Assessments are validated on the way in, so a file holding an
    /// out-of-range score or unknown type fails to load.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read roster from {}", path.display()))?;
        let roster: Roster = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse roster JSON: {}", path.display()))?;
        Ok(roster)
    }

    /// Load a roster, or start an empty one when the file does not exist yet.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_json(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn find(&self, email: &str) -> Option<&Trainee> {
        self.trainees.iter().find(|t| t.email == email)
    }

    pub fn find_mut(&mut self, email: &str) -> Option<&mut Trainee> {
        self.trainees.iter_mut().find(|t| t.email == email)
    }

    /// Add a trainee, refusing a second trainee with the same email.
    pub fn add(&mut self, trainee: Trainee) -> Result<()> {
        anyhow::ensure!(
            self.find(&trainee.email).is_none(),
            "trainee with email {} already exists",
            trainee.email
        );
        tracing::debug!(email = %trainee.email, "adding trainee to roster");
        self.trainees.push(trainee);
        Ok(())
    }
}
