//! burncheck-instruments
//!
//! Questionnaire definitions and scoring. Pure data and pure functions, no
//! I/O. Each questionnaire module defines its catalog (questions, sub-scales,
//! answer format), its rubric (threshold tables) and a `score` entry point
//! that turns a completed answer set into a [`ResultRecord`].
//!
//! [`ResultRecord`]: burncheck_core::models::ResultRecord

pub mod answers;
pub mod bands;
pub mod catalog;
pub mod error;
pub mod questionnaires;
pub mod recommendations;

use burncheck_core::models::TestType;

use answers::Ratings;
use catalog::{AnswerFormat, Catalog, QuestionInfo, SubscaleId, ValidationError};
use error::InstrumentError;

/// Object-safe view of a questionnaire catalog, for listings and answer
/// validation.
pub trait Questionnaire: Send + Sync {
    fn test_type(&self) -> TestType;

    /// Human-readable name (e.g., "Maslach Burnout Inventory").
    fn name(&self) -> &str;

    fn answer_format(&self) -> AnswerFormat;

    fn count(&self) -> u32;

    fn questions(&self) -> Vec<QuestionInfo>;

    /// Check ordinal answers against this questionnaire's positions and
    /// answer range. Categorical questionnaires only get the position check.
    fn validate_ratings(&self, answers: &Ratings) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        for (&position, &value) in answers {
            if position == 0 || position > self.count() {
                errors.push(ValidationError {
                    position,
                    value: Some(value),
                    message: format!(
                        "{}: no question at position {position} (expected 1..={})",
                        self.name(),
                        self.count()
                    ),
                });
                continue;
            }
            if let AnswerFormat::Rating { range } = self.answer_format()
                && !range.contains(value)
            {
                errors.push(ValidationError {
                    position,
                    value: Some(value),
                    message: format!(
                        "{}: answer {value} to question {position} is outside range [{}, {}]",
                        self.name(),
                        range.min,
                        range.max,
                    ),
                });
            }
        }
        errors
    }

    /// Like [`Questionnaire::validate_ratings`], failing on the first problem.
    fn ensure_valid(&self, answers: &Ratings) -> Result<(), InstrumentError> {
        match self.validate_ratings(answers).into_iter().next() {
            Some(error) => Err(error.into()),
            None => Ok(()),
        }
    }
}

impl<S: SubscaleId> Questionnaire for Catalog<S> {
    fn test_type(&self) -> TestType {
        self.test_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn answer_format(&self) -> AnswerFormat {
        self.format
    }

    fn count(&self) -> u32 {
        Catalog::count(self)
    }

    fn questions(&self) -> Vec<QuestionInfo> {
        self.questions.iter().map(QuestionInfo::from).collect()
    }
}

/// Return all registered questionnaires.
pub fn all_questionnaires() -> Vec<&'static dyn Questionnaire> {
    vec![
        questionnaires::maslach::catalog(),
        questionnaires::boyko::catalog(),
        questionnaires::heck_hess::catalog(),
        questionnaires::quick::catalog(),
    ]
}

/// Look up a questionnaire by its test type.
pub fn get_questionnaire(test_type: TestType) -> &'static dyn Questionnaire {
    match test_type {
        TestType::Maslach => questionnaires::maslach::catalog(),
        TestType::Boyko => questionnaires::boyko::catalog(),
        TestType::HeckHess => questionnaires::heck_hess::catalog(),
        TestType::Quick => questionnaires::quick::catalog(),
    }
}

/// Look up a questionnaire by its wire identifier.
pub fn find_questionnaire(id: &str) -> Result<&'static dyn Questionnaire, InstrumentError> {
    let test_type: TestType = id
        .parse()
        .map_err(|_| InstrumentError::UnknownQuestionnaire(id.to_string()))?;
    Ok(get_questionnaire(test_type))
}
