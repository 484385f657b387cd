//! Answer files.
//!
//! An answer file is JSON: either an array of answers in question order or an
//! object keyed by 1-based question position. Rating questionnaires take
//! integers, Boyko takes `"yes"`, `"sometimes"` or `"no"`.

use std::collections::BTreeMap;
use std::path::Path;

use burncheck_core::models::{ResultRecord, TestType};
use burncheck_instruments::answers::{decode_categorical, CategoricalAnswers, Ratings};
use burncheck_instruments::catalog::ValidationError;
use burncheck_instruments::error::InstrumentError;
use burncheck_instruments::questionnaires::{boyko, heck_hess, maslach, quick};
use burncheck_instruments::get_questionnaire;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawAnswers {
    Ordered(Vec<Value>),
    Keyed(BTreeMap<String, Value>),
}

impl RawAnswers {
    /// Answers keyed by position.
    fn into_positions(self) -> eyre::Result<BTreeMap<u32, Value>> {
        match self {
            RawAnswers::Ordered(values) => Ok((1..).zip(values).collect()),
            RawAnswers::Keyed(map) => map
                .into_iter()
                .map(|(key, value)| -> eyre::Result<(u32, Value)> {
                    let position = key
                        .trim()
                        .parse::<u32>()
                        .map_err(|_| eyre::eyre!("answer key '{key}' is not a question number"))?;
                    Ok((position, value))
                })
                .collect(),
        }
    }
}

/// A typed answer set, ready for its questionnaire's scorer.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerSet {
    Maslach(Ratings),
    Boyko(CategoricalAnswers),
    HeckHess(Ratings),
    /// In question order.
    Quick(Vec<u8>),
}

impl AnswerSet {
    pub fn test_type(&self) -> TestType {
        match self {
            AnswerSet::Maslach(_) => TestType::Maslach,
            AnswerSet::Boyko(_) => TestType::Boyko,
            AnswerSet::HeckHess(_) => TestType::HeckHess,
            AnswerSet::Quick(_) => TestType::Quick,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            AnswerSet::Maslach(a) | AnswerSet::HeckHess(a) => a.len(),
            AnswerSet::Boyko(a) => a.len(),
            AnswerSet::Quick(a) => a.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position checks for every questionnaire, range checks for the rated
    /// ones.
    pub fn validate(&self) -> Vec<ValidationError> {
        let questionnaire = get_questionnaire(self.test_type());
        let ratings: Ratings = match self {
            AnswerSet::Maslach(a) | AnswerSet::HeckHess(a) => a.clone(),
            AnswerSet::Boyko(a) => a
                .iter()
                .map(|(&position, answer)| (position, answer.points() as u8))
                .collect(),
            AnswerSet::Quick(a) => (1..).zip(a.iter().copied()).collect(),
        };
        questionnaire.validate_ratings(&ratings)
    }

    pub fn score(&self) -> Result<ResultRecord, InstrumentError> {
        match self {
            AnswerSet::Maslach(a) => maslach::score(a),
            AnswerSet::Boyko(a) => boyko::score(a),
            AnswerSet::HeckHess(a) => heck_hess::score(a),
            AnswerSet::Quick(a) => quick::score(a),
        }
    }
}

fn rating(position: u32, value: &Value) -> eyre::Result<u8> {
    value
        .as_u64()
        .and_then(|v| u8::try_from(v).ok())
        .ok_or_else(|| {
            eyre::eyre!("answer to question {position} must be an integer from 0 to 255, got {value}")
        })
}

fn ratings(positions: BTreeMap<u32, Value>) -> eyre::Result<Ratings> {
    positions
        .iter()
        .map(|(&position, value)| -> eyre::Result<(u32, u8)> {
            Ok((position, rating(position, value)?))
        })
        .collect()
}

/// Decode raw answers for `test_type`.
pub fn decode(test_type: TestType, raw: RawAnswers) -> eyre::Result<AnswerSet> {
    let positions = raw.into_positions()?;
    let answers = match test_type {
        TestType::Maslach => AnswerSet::Maslach(ratings(positions)?),
        TestType::HeckHess => AnswerSet::HeckHess(ratings(positions)?),
        TestType::Boyko => {
            let tokens: BTreeMap<u32, String> = positions
                .into_iter()
                .map(|(position, value)| {
                    let token = match value {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (position, token)
                })
                .collect();
            AnswerSet::Boyko(decode_categorical(&tokens))
        }
        TestType::Quick => {
            if let Some((index, position)) = (1..)
                .zip(positions.keys())
                .find(|(expected, position)| expected != *position)
            {
                eyre::bail!(
                    "quick check answers must cover questions 1..=n without gaps; \
                     expected question {index}, found {position}"
                );
            }
            let ordered = ratings(positions)?.into_values().collect();
            AnswerSet::Quick(ordered)
        }
    };
    Ok(answers)
}

/// Read and decode an answer file.
pub fn read_answers(path: &Path, test_type: TestType) -> eyre::Result<AnswerSet> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read answers at {}: {e}", path.display()))?;
    let raw: RawAnswers = serde_json::from_str(&contents)
        .map_err(|e| eyre::eyre!("answers at {} are not valid JSON: {e}", path.display()))?;
    decode(test_type, raw)
}
