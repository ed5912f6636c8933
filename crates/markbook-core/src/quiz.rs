//! Questions and quizzes handed to the marking engine.

use serde::{Deserialize, Serialize};

/// A single answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub chosen_answer: String,
    pub correct_answer: String,
}

impl Question {
    pub fn new(
        question: impl Into<String>,
        chosen_answer: impl Into<String>,
        correct_answer: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            chosen_answer: chosen_answer.into(),
            correct_answer: correct_answer.into(),
        }
    }

    /// Exact, case-sensitive comparison of the chosen and correct answers.
    pub fn is_correct(&self) -> bool {
        self.chosen_answer == self.correct_answer
    }
}

/// An ordered set of questions with a name and a type tag.
///
/// The tag is stored as given; it is only interpreted when the quiz is
/// turned into an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
    pub name: String,
    #[serde(rename = "type")]
    pub quiz_type: String,
}

impl Quiz {
    pub fn new(
        questions: Vec<Question>,
        name: impl Into<String>,
        quiz_type: impl Into<String>,
    ) -> Self {
        Self {
            questions,
            name: name.into(),
            quiz_type: quiz_type.into(),
        }
    }
}
