//! Assessment types and the per-type score adjustment rule.
//!
//! An [`Assessment`] is one of three variants, each carrying the same
//! validated details (name and raw score). The variant decides how the raw
//! score is weighted by [`Assessment::calculate_score`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MarkbookError, Result};

/// How an assessment is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssessmentType {
    MultipleChoice,
    Technical,
    Presentation,
}

impl AssessmentType {
    /// Every recognised assessment type.
    pub const ALL: [AssessmentType; 3] = [
        AssessmentType::MultipleChoice,
        AssessmentType::Technical,
        AssessmentType::Presentation,
    ];

    /// The multiplier applied to a raw score of this type.
    pub fn weight(self) -> f64 {
        match self {
            AssessmentType::MultipleChoice => 0.7,
            AssessmentType::Technical => 1.0,
            AssessmentType::Presentation => 0.6,
        }
    }

    /// The canonical tag, e.g. `"multiple-choice"`.
    pub fn as_str(self) -> &'static str {
        match self {
            AssessmentType::MultipleChoice => "multiple-choice",
            AssessmentType::Technical => "technical",
            AssessmentType::Presentation => "presentation",
        }
    }
}

impl fmt::Display for AssessmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssessmentType {
    type Err = MarkbookError;

    /// Tags are matched exactly: no case folding, no trimming.
    fn from_str(s: &str) -> Result<Self> {
        AssessmentType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| MarkbookError::InvalidAssessmentType(s.to_string()))
    }
}

/// Validated fields shared by every assessment variant.
///
/// Only constructible inside this crate, so holding one implies the score
/// has already been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentDetails {
    name: String,
    score: f64,
}

impl AssessmentDetails {
    fn new(name: String, score: f64) -> Result<Self> {
        if !(0.0..=100.0).contains(&score) {
            return Err(MarkbookError::InvalidScore(score));
        }
        Ok(Self { name, score })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}

/// A named, scored assessment. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "AssessmentRecord", into = "AssessmentRecord")]
pub enum Assessment {
    MultipleChoice(AssessmentDetails),
    Technical(AssessmentDetails),
    Presentation(AssessmentDetails),
}

impl Assessment {
    /// Build an assessment from an untyped tag.
    ///
    /// The tag is checked before the score, so a record that is wrong on
    /// both counts reports [`MarkbookError::InvalidAssessmentType`].
    pub fn new(name: impl Into<String>, type_tag: &str, score: f64) -> Result<Self> {
        let assessment_type: AssessmentType = type_tag.parse()?;
        Self::of_type(name, assessment_type, score)
    }

    /// Build the variant matching `assessment_type`.
    pub fn of_type(
        name: impl Into<String>,
        assessment_type: AssessmentType,
        score: f64,
    ) -> Result<Self> {
        let details = AssessmentDetails::new(name.into(), score)?;
        Ok(match assessment_type {
            AssessmentType::MultipleChoice => Assessment::MultipleChoice(details),
            AssessmentType::Technical => Assessment::Technical(details),
            AssessmentType::Presentation => Assessment::Presentation(details),
        })
    }

    pub fn multiple_choice(name: impl Into<String>, score: f64) -> Result<Self> {
        Self::of_type(name, AssessmentType::MultipleChoice, score)
    }

    pub fn technical(name: impl Into<String>, score: f64) -> Result<Self> {
        Self::of_type(name, AssessmentType::Technical, score)
    }

    pub fn presentation(name: impl Into<String>, score: f64) -> Result<Self> {
        Self::of_type(name, AssessmentType::Presentation, score)
    }

    pub fn details(&self) -> &AssessmentDetails {
        match self {
            Assessment::MultipleChoice(d)
            | Assessment::Technical(d)
            | Assessment::Presentation(d) => d,
        }
    }

    pub fn name(&self) -> &str {
        self.details().name()
    }

    /// The raw score in [0, 100].
    pub fn score(&self) -> f64 {
        self.details().score()
    }

    pub fn assessment_type(&self) -> AssessmentType {
        match self {
            Assessment::MultipleChoice(_) => AssessmentType::MultipleChoice,
            Assessment::Technical(_) => AssessmentType::Technical,
            Assessment::Presentation(_) => AssessmentType::Presentation,
        }
    }

    /// The raw score weighted by the assessment type.
    pub fn calculate_score(&self) -> f64 {
        self.score() * self.assessment_type().weight()
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.name(),
            self.assessment_type(),
            self.score()
        )
    }
}

/// Flat, unvalidated wire form of an [`Assessment`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub assessment_type: String,
    pub score: f64,
}

impl TryFrom<AssessmentRecord> for Assessment {
    type Error = MarkbookError;

    fn try_from(record: AssessmentRecord) -> Result<Self> {
        Assessment::new(record.name, &record.assessment_type, record.score)
    }
}

impl From<Assessment> for AssessmentRecord {
    fn from(assessment: Assessment) -> Self {
        let assessment_type = assessment.assessment_type().to_string();
        let AssessmentDetails { name, score } = match assessment {
            Assessment::MultipleChoice(d)
            | Assessment::Technical(d)
            | Assessment::Presentation(d) => d,
        };
        Self {
            name,
            assessment_type,
            score,
        }
    }
}
