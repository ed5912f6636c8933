//! Quiz marking.
//!
//! A [`Marking`] borrows one [`Quiz`] and derives everything on demand: the
//! per-question results, the percentage mark, and the typed
//! [`Assessment`] carrying that mark. Nothing is cached between calls.

use serde::{Deserialize, Serialize};

use crate::assessment::{Assessment, AssessmentType};
use crate::error::Result;
use crate::quiz::Quiz;

/// Outcome of marking a single question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: String,
    pub chosen_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

/// Grading engine bound to one quiz.
#[derive(Debug, Clone, Copy)]
pub struct Marking<'a> {
    quiz: &'a Quiz,
}

impl<'a> Marking<'a> {
    pub fn new(quiz: &'a Quiz) -> Self {
        Self { quiz }
    }

    pub fn quiz(&self) -> &'a Quiz {
        self.quiz
    }

    /// Per-question results in quiz order.
    pub fn results(&self) -> Vec<QuestionResult> {
        self.quiz
            .questions
            .iter()
            .map(|q| QuestionResult {
                question: q.question.clone(),
                chosen_answer: q.chosen_answer.clone(),
                correct_answer: q.correct_answer.clone(),
                is_correct: q.is_correct(),
            })
            .collect()
    }

    pub fn correct_count(&self) -> usize {
        self.quiz.questions.iter().filter(|q| q.is_correct()).count()
    }

    /// The quiz mark as a whole percentage.
    ///
    /// An empty quiz scores 0. Otherwise the exact ratio is rounded half to
    /// even, so 12.5 becomes 12 and 37.5 becomes 38.
    pub fn mark(&self) -> u32 {
        let total = self.quiz.questions.len();
        if total == 0 {
            return 0;
        }
        let correct = self.correct_count();
        let percentage = round_half_even(correct * 100, total) as u32;
        tracing::debug!(
            quiz = %self.quiz.name,
            correct,
            total,
            percentage,
            "marked quiz"
        );
        percentage
    }

    /// Mark the quiz and wrap the result in the assessment variant named by
    /// the quiz's type tag.
    ///
    /// Fails with `InvalidAssessmentType` when the tag is not recognised.
    pub fn generate_assessment(&self) -> Result<Assessment> {
        let score = self.mark();
        let assessment_type: AssessmentType = self.quiz.quiz_type.parse()?;
        Assessment::of_type(self.quiz.name.clone(), assessment_type, f64::from(score))
    }
}

/// `numerator / denominator` rounded to the nearest integer, ties to even.
fn round_half_even(numerator: usize, denominator: usize) -> usize {
    let quotient = numerator / denominator;
    let twice_remainder = 2 * (numerator % denominator);
    if twice_remainder > denominator || (twice_remainder == denominator && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MarkbookError;
    use crate::quiz::Question;

    /// Five arithmetic questions, the first `correct` of them answered right.
    fn arithmetic_quiz(correct: usize, quiz_type: &str) -> Quiz {
        let answers = ["A", "B", "C", "D", "A"];
        let questions = answers
            .iter()
            .enumerate()
            .map(|(i, &answer)| {
                let chosen = if i < correct { answer } else { "X" };
                Question::new(format!("What is {n} + {n}?", n = i + 1), chosen, answer)
            })
            .collect();
        Quiz::new(questions, "Arithmetic", quiz_type)
    }

    fn quiz_of(correct: usize, total: usize) -> Quiz {
        let questions = (0..total)
            .map(|i| Question::new(format!("q{i}"), if i < correct { "A" } else { "B" }, "A"))
            .collect();
        Quiz::new(questions, "Generated", "technical")
    }

    #[test]
    fn empty_quiz_marks_zero() {
        let quiz = Quiz::new(vec![], "Empty", "multiple-choice");
        assert_eq!(Marking::new(&quiz).mark(), 0);
    }

    #[test]
    fn three_of_five_is_sixty() {
        let quiz = arithmetic_quiz(3, "multiple-choice");
        let marking = Marking::new(&quiz);
        assert_eq!(marking.correct_count(), 3);
        assert_eq!(marking.mark(), 60);
    }

    #[test]
    fn rounding_is_half_to_even() {
        assert_eq!(Marking::new(&quiz_of(1, 3)).mark(), 33);
        assert_eq!(Marking::new(&quiz_of(2, 3)).mark(), 67);
        assert_eq!(Marking::new(&quiz_of(1, 8)).mark(), 12);
        assert_eq!(Marking::new(&quiz_of(3, 8)).mark(), 38);
        assert_eq!(Marking::new(&quiz_of(5, 8)).mark(), 62);
        assert_eq!(Marking::new(&quiz_of(7, 8)).mark(), 88);
        assert_eq!(Marking::new(&quiz_of(8, 8)).mark(), 100);
        assert_eq!(Marking::new(&quiz_of(0, 8)).mark(), 0);
    }

    #[test]
    fn results_follow_quiz_order() {
        let quiz = arithmetic_quiz(2, "technical");
        let results = Marking::new(&quiz).results();
        let flags: Vec<bool> = results.iter().map(|r| r.is_correct).collect();
        assert_eq!(flags, vec![true, true, false, false, false]);
        assert_eq!(results[2].chosen_answer, "X");
        assert_eq!(results[2].correct_answer, "C");
    }

    #[test]
    fn all_correct_multiple_choice() {
        let quiz = arithmetic_quiz(5, "multiple-choice");
        let assessment = Marking::new(&quiz).generate_assessment().unwrap();
        assert!(matches!(assessment, Assessment::MultipleChoice(_)));
        assert_eq!(assessment.name(), "Arithmetic");
        assert_eq!(assessment.score(), 100.0);
        assert!((assessment.calculate_score() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn partial_multiple_choice() {
        let quiz = arithmetic_quiz(3, "multiple-choice");
        let assessment = Marking::new(&quiz).generate_assessment().unwrap();
        assert_eq!(assessment.score(), 60.0);
        assert!((assessment.calculate_score() - 42.0).abs() < 1e-9);
    }

    #[test]
    fn generates_each_variant() {
        let technical = arithmetic_quiz(4, "technical");
        let a = Marking::new(&technical).generate_assessment().unwrap();
        assert!(matches!(a, Assessment::Technical(_)));
        assert_eq!(a.calculate_score(), 80.0);

        let presentation = arithmetic_quiz(5, "presentation");
        let a = Marking::new(&presentation).generate_assessment().unwrap();
        assert!(matches!(a, Assessment::Presentation(_)));
        assert!((a.calculate_score() - 60.0).abs() < 1e-9);
    }

    #[test]
    fn unknown_quiz_type_fails() {
        let quiz = arithmetic_quiz(5, "essay");
        let err = Marking::new(&quiz).generate_assessment().unwrap_err();
        assert_eq!(err, MarkbookError::InvalidAssessmentType("essay".into()));
    }

    #[test]
    fn marking_does_not_mutate_the_quiz() {
        let quiz = arithmetic_quiz(3, "technical");
        let before = quiz.clone();
        let marking = Marking::new(&quiz);
        let _ = marking.mark();
        let _ = marking.generate_assessment();
        assert_eq!(marking.mark(), 60);
        assert_eq!(quiz, before);
    }
}
