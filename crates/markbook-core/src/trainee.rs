//! Trainees and the assessments recorded against them.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::assessment::{Assessment, AssessmentType};
use crate::error::{MarkbookError, Result};

/// A person tracked by markbook.
///
/// The assessment list only grows. Insertion order is preserved and drives
/// every lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainee {
    pub name: String,
    pub email: String,
    pub date_of_birth: NaiveDate,
    #[serde(default)]
    assessments: Vec<Assessment>,
}

impl Trainee {
    pub fn new(name: impl Into<String>, email: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            date_of_birth,
            assessments: Vec::new(),
        }
    }

    /// Age in whole years as of today's local date.
    pub fn get_age(&self) -> i32 {
        self.age_on(Local::now().date_naive())
    }

    /// Age in whole years as of `today`.
    ///
    /// The birthday itself counts as reached.
    pub fn age_on(&self, today: NaiveDate) -> i32 {
        let years = today.year() - self.date_of_birth.year();
        let birthday_reached = (today.month(), today.day())
            >= (self.date_of_birth.month(), self.date_of_birth.day());
        if birthday_reached {
            years
        } else {
            years - 1
        }
    }

    pub fn add_assessment(&mut self, assessment: Assessment) {
        tracing::debug!(
            trainee = %self.email,
            assessment = %assessment.name(),
            "recording assessment"
        );
        self.assessments.push(assessment);
    }

    /// Record an assessment arriving as untyped JSON.
    ///
    /// Anything that is not a valid assessment is rejected with
    /// [`MarkbookError::InvalidAssessmentObject`] and the list is left as is.
    pub fn add_assessment_value(&mut self, value: serde_json::Value) -> Result<()> {
        let assessment: Assessment = serde_json::from_value(value)
            .map_err(|e| MarkbookError::InvalidAssessmentObject(e.to_string()))?;
        self.add_assessment(assessment);
        Ok(())
    }

    /// First assessment with exactly this name.
    pub fn get_assessment(&self, name: &str) -> Option<&Assessment> {
        self.assessments.iter().find(|a| a.name() == name)
    }

    /// All assessments of the given type, in insertion order.
    pub fn get_assessment_of_type(&self, assessment_type: AssessmentType) -> Vec<&Assessment> {
        self.assessments
            .iter()
            .filter(|a| a.assessment_type() == assessment_type)
            .collect()
    }

    pub fn assessments(&self) -> &[Assessment] {
        &self.assessments
    }
}
