use std::collections::BTreeMap;
use std::fmt;

use burncheck_core::models::{HeckHessScale, MaslachScale, Phase, TestType};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::bands::TierRanges;
use crate::error::InstrumentError;

/// Identifier of a sub-scale within one questionnaire.
pub trait SubscaleId: Copy + Ord + fmt::Debug + Send + Sync + 'static {
    /// Stable string form used in listings and error messages.
    fn id_str(self) -> &'static str;
}

impl SubscaleId for MaslachScale {
    fn id_str(self) -> &'static str {
        self.code()
    }
}

impl SubscaleId for Phase {
    fn id_str(self) -> &'static str {
        match self {
            Phase::Tension => "tension",
            Phase::Resistance => "resistance",
            Phase::Exhaustion => "exhaustion",
            Phase::Deformation => "deformation",
        }
    }
}

impl SubscaleId for HeckHessScale {
    fn id_str(self) -> &'static str {
        match self {
            HeckHessScale::Depression => "depression",
            HeckHessScale::Burnout => "burnout",
            HeckHessScale::Anxiety => "anxiety",
        }
    }
}

/// The single scale of an unscaled, directly summed questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Total;

impl SubscaleId for Total {
    fn id_str(self) -> &'static str {
        "total"
    }
}

/// Inclusive range of valid ordinal answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRange {
    pub min: u8,
    pub max: u8,
}

impl AnswerRange {
    pub fn contains(&self, value: u8) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Invert an answer against the top of the range.
    pub fn reverse(&self, value: u8) -> u8 {
        self.max.saturating_sub(value)
    }
}

/// How a questionnaire's answers are given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AnswerFormat {
    Rating { range: AnswerRange },
    /// yes / sometimes / no
    Categorical,
}

#[derive(Debug, Clone)]
pub struct Question<S> {
    /// 1-based, contiguous within the questionnaire.
    pub position: u32,
    pub text: String,
    pub subscale: S,
    pub reversed: bool,
}

#[derive(Debug, Clone)]
pub struct SubscaleInfo<S> {
    pub id: S,
    pub name: String,
    pub description: Option<String>,
    /// Characteristic symptoms, shown for problematic phases.
    pub characteristics: Vec<String>,
    /// Per-scale tier ranges, for questionnaires that classify each scale.
    pub tiers: Option<TierRanges>,
}

/// Static definition of one questionnaire.
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    pub test_type: TestType,
    pub name: String,
    pub format: AnswerFormat,
    pub subscales: Vec<SubscaleInfo<S>>,
    pub questions: Vec<Question<S>>,
}

impl<S: SubscaleId> Catalog<S> {
    pub fn get_question(&self, position: u32) -> Result<&Question<S>, InstrumentError> {
        self.questions
            .iter()
            .find(|q| q.position == position)
            .ok_or(InstrumentError::NotFound {
                test_type: self.test_type,
                position,
            })
    }

    pub fn get_all(&self) -> &[Question<S>] {
        &self.questions
    }

    pub fn count(&self) -> u32 {
        self.questions.len() as u32
    }

    /// Top of the rating range; zero for categorical questionnaires.
    pub fn max_answer(&self) -> u32 {
        match self.format {
            AnswerFormat::Rating { range } => u32::from(range.max),
            AnswerFormat::Categorical => 0,
        }
    }

    pub fn subscale(&self, id: S) -> Option<&SubscaleInfo<S>> {
        self.subscales.iter().find(|s| s.id == id)
    }

    /// Number of questions per sub-scale, with every declared sub-scale
    /// present (possibly at zero).
    pub fn questions_per_subscale(&self) -> BTreeMap<S, u32> {
        let mut counts: BTreeMap<S, u32> = self.subscales.iter().map(|s| (s.id, 0)).collect();
        for question in &self.questions {
            *counts.entry(question.subscale).or_insert(0) += 1;
        }
        counts
    }

    /// Check the structural invariants: positions are exactly `1..=N` in
    /// order, and every question targets a declared sub-scale.
    pub fn check_integrity(&self) -> Result<(), String> {
        for (index, question) in self.questions.iter().enumerate() {
            let expected = index as u32 + 1;
            if question.position != expected {
                return Err(format!(
                    "{}: question at index {index} has position {}, expected {expected}",
                    self.test_type, question.position
                ));
            }
            if self.subscale(question.subscale).is_none() {
                return Err(format!(
                    "{}: question {} targets undeclared sub-scale '{}'",
                    self.test_type,
                    question.position,
                    question.subscale.id_str()
                ));
            }
        }
        Ok(())
    }
}

/// Flattened, serializable view of a question for listings.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct QuestionInfo {
    pub position: u32,
    pub text: String,
    pub subscale: String,
    pub reversed: bool,
}

impl<S: SubscaleId> From<&Question<S>> for QuestionInfo {
    fn from(question: &Question<S>) -> Self {
        QuestionInfo {
            position: question.position,
            text: question.text.clone(),
            subscale: question.subscale.id_str().to_string(),
            reversed: question.reversed,
        }
    }
}

/// An answer that cannot be scored as given.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub position: u32,
    pub value: Option<u8>,
    pub message: String,
}

/// Build a question list from `(text, subscale, reversed)` rows, numbering
/// positions from 1.
pub fn numbered<S: Copy>(rows: &[(&str, S, bool)]) -> Vec<Question<S>> {
    rows.iter()
        .enumerate()
        .map(|(index, (text, subscale, reversed))| Question {
            position: index as u32 + 1,
            text: text.to_string(),
            subscale: *subscale,
            reversed: *reversed,
        })
        .collect()
}
