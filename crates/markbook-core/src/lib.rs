//! markbook-core — Trainee, assessment, and quiz marking model.
//!
//! This crate defines the domain types (assessments, trainees, quizzes),
//! the marking pipeline that turns an answered quiz into an assessment,
//! and the file formats the CLI reads and writes.

pub mod assessment;
pub mod error;
pub mod marking;
pub mod parser;
pub mod quiz;
pub mod report;
pub mod roster;
pub mod trainee;

pub use assessment::{Assessment, AssessmentType};
pub use error::{MarkbookError, Result};
pub use marking::{Marking, QuestionResult};
pub use quiz::{Question, Quiz};
pub use roster::Roster;
pub use trainee::Trainee;
