//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level markbook configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkbookConfig {
    /// Roster file used when `--roster` is not given.
    #[serde(default = "default_roster")]
    pub roster: PathBuf,
    /// Quiz directory used when `validate` is run without `--quiz`.
    #[serde(default = "default_quiz_dir")]
    pub quiz_dir: PathBuf,
    /// Where saved reports are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_roster() -> PathBuf {
    PathBuf::from("trainees.json")
}
fn default_quiz_dir() -> PathBuf {
    PathBuf::from("quizzes")
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./markbook-results")
}

impl Default for MarkbookConfig {
    fn default() -> Self {
        Self {
            roster: default_roster(),
            quiz_dir: default_quiz_dir(),
            output_dir: default_output_dir(),
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `markbook.toml` in the current directory
/// 2. `~/.config/markbook/config.toml`
///
/// Environment variable overrides: `MARKBOOK_ROSTER`, `MARKBOOK_OUTPUT_DIR`.
pub fn load_config_from(path: Option<&Path>) -> Result<MarkbookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("markbook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MarkbookConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MarkbookConfig::default(),
    };

    Ok(apply_env_overrides(config, |key| std::env::var(key).ok()))
}

fn apply_env_overrides(
    mut config: MarkbookConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> MarkbookConfig {
    if let Some(roster) = lookup("MARKBOOK_ROSTER") {
        config.roster = PathBuf::from(roster);
    }
    if let Some(output_dir) = lookup("MARKBOOK_OUTPUT_DIR") {
        config.output_dir = PathBuf::from(output_dir);
    }
    config
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("markbook"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MarkbookConfig::default();
        assert_eq!(config.roster, PathBuf::from("trainees.json"));
        assert_eq!(config.quiz_dir, PathBuf::from("quizzes"));
    }

    #[test]
    fn parse_partial_config() {
        let config: MarkbookConfig = toml::from_str(r#"roster = "data/cohort.json""#).unwrap();
        assert_eq!(config.roster, PathBuf::from("data/cohort.json"));
        assert_eq!(config.output_dir, PathBuf::from("./markbook-results"));
    }

    #[test]
    fn env_overrides_win() {
        let config = apply_env_overrides(MarkbookConfig::default(), |key| match key {
            "MARKBOOK_ROSTER" => Some("/tmp/roster.json".into()),
            _ => None,
        });
        assert_eq!(config.roster, PathBuf::from("/tmp/roster.json"));
        assert_eq!(config.output_dir, PathBuf::from("./markbook-results"));
    }

    #[test]
    fn explicit_path_must_exist() {
        let err = load_config_from(Some(Path::new("/nonexistent/markbook.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "quiz_dir = \"tests/quizzes\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.quiz_dir, PathBuf::from("tests/quizzes"));
    }
}
